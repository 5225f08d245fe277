//! The preloaded graph documents and the selection projection.
//!
//! The three documents are embedded at compile time and parsed once at
//! startup; the store itself is immutable afterwards. Selection returns a
//! fresh copy with the requested colorscheme stamped on, so no colorscheme
//! ever leaks back into the store or across calls.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::components::network::GraphDocument;

const DATA: &str = include_str!("../data/force_graph_data.json");
const DATA1: &str = include_str!("../data/force_graph_data1.json");
const DATA2: &str = include_str!("../data/force_graph_data2.json");

#[derive(Debug, Error)]
pub enum DatasetError {
	#[error("unknown dataset key `{0}`")]
	UnknownKey(String),
	#[error("could not parse dataset `{name}`: {source}")]
	Parse {
		name: &'static str,
		source: serde_json::Error,
	},
}

/// The discrete dataset choices offered by the selector dropdown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DatasetKey {
	Data,
	Data1,
	Data2,
}

impl DatasetKey {
	pub const ALL: [DatasetKey; 3] = [DatasetKey::Data, DatasetKey::Data1, DatasetKey::Data2];

	pub fn as_str(self) -> &'static str {
		match self {
			DatasetKey::Data => "data",
			DatasetKey::Data1 => "data1",
			DatasetKey::Data2 => "data2",
		}
	}
}

impl fmt::Display for DatasetKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for DatasetKey {
	type Err = DatasetError;

	// Unrecognized keys are a hard error; callers decide whether to surface
	// it or keep the previous selection.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"data" => Ok(DatasetKey::Data),
			"data1" => Ok(DatasetKey::Data1),
			"data2" => Ok(DatasetKey::Data2),
			other => Err(DatasetError::UnknownKey(other.to_owned())),
		}
	}
}

/// The immutable document store behind the dataset dropdown.
#[derive(Clone, Debug)]
pub struct Datasets {
	data: GraphDocument,
	data1: GraphDocument,
	data2: GraphDocument,
}

impl Datasets {
	/// Parse the embedded documents. A malformed document is a startup
	/// failure, there is nothing sensible to render without it.
	pub fn load() -> Result<Self, DatasetError> {
		let parse = |name: &'static str, raw: &str| {
			serde_json::from_str(raw).map_err(|source| DatasetError::Parse { name, source })
		};
		Ok(Self {
			data: parse("force_graph_data.json", DATA)?,
			data1: parse("force_graph_data1.json", DATA1)?,
			data2: parse("force_graph_data2.json", DATA2)?,
		})
	}

	/// The stored document for `key`, exactly as parsed.
	pub fn get(&self, key: DatasetKey) -> &GraphDocument {
		match key {
			DatasetKey::Data => &self.data,
			DatasetKey::Data1 => &self.data1,
			DatasetKey::Data2 => &self.data2,
		}
	}

	/// Project the document for `key`, stamping `colorscheme` onto a fresh
	/// copy. The stored document is never mutated.
	pub fn select(&self, key: DatasetKey, colorscheme: Option<&str>) -> GraphDocument {
		let mut doc = self.get(key).clone();
		doc.colorscheme = colorscheme.map(str::to_owned);
		doc
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn all_embedded_documents_parse() {
		let store = Datasets::load().unwrap();
		for key in DatasetKey::ALL {
			let doc = store.get(key);
			assert!(!doc.nodes.is_empty(), "{key} has no nodes");
			assert!(!doc.links.is_empty(), "{key} has no links");
			assert_eq!(doc.colorscheme, None);
		}
	}

	#[test]
	fn links_reference_existing_node_ids() {
		let store = Datasets::load().unwrap();
		for key in DatasetKey::ALL {
			let doc = store.get(key);
			for link in &doc.links {
				for end in [&link.source, &link.target] {
					assert!(
						doc.nodes.iter().any(|n| n.id == *end),
						"{key}: link endpoint `{end}` has no node"
					);
				}
			}
		}
	}

	#[test]
	fn select_stamps_colorscheme_onto_a_copy() {
		let store = Datasets::load().unwrap();
		let doc = store.select(DatasetKey::Data, Some("Portland"));
		assert_eq!(doc.colorscheme.as_deref(), Some("Portland"));
		assert_eq!(doc.nodes, store.get(DatasetKey::Data).nodes);
		assert_eq!(doc.links, store.get(DatasetKey::Data).links);
		// The store stays pristine.
		assert_eq!(store.get(DatasetKey::Data).colorscheme, None);
	}

	#[test]
	fn repeated_selection_does_not_leak_between_calls() {
		let store = Datasets::load().unwrap();
		let first = store.select(DatasetKey::Data, Some("Portland"));
		let second = store.select(DatasetKey::Data, Some("Viridis"));
		assert_eq!(first.colorscheme.as_deref(), Some("Portland"));
		assert_eq!(second.colorscheme.as_deref(), Some("Viridis"));
		assert_eq!(store.get(DatasetKey::Data).colorscheme, None);

		let unstamped = store.select(DatasetKey::Data, None);
		assert_eq!(unstamped.colorscheme, None);
	}

	#[test]
	fn unknown_key_is_a_hard_error() {
		let err = "data3".parse::<DatasetKey>().unwrap_err();
		assert!(matches!(&err, DatasetError::UnknownKey(k) if k == "data3"));
		assert_eq!(err.to_string(), "unknown dataset key `data3`");
	}

	#[test]
	fn keys_round_trip_through_strings() {
		for key in DatasetKey::ALL {
			assert_eq!(key.as_str().parse::<DatasetKey>().unwrap(), key);
		}
	}
}
