//! Property contracts for the widgets in this crate.
//!
//! Each widget revision declares the property names it accepts and which of
//! them are required. Configuration is an explicit optional-field struct;
//! unset fields are omitted from the resolved map rather than carried as a
//! sentinel. Attributes the widget does not declare travel separately in
//! `additional_attributes` and are passed through untouched.

use std::collections::BTreeMap;

use serde_json::{Map, Value};
use thiserror::Error;

use super::network::GraphDocument;

#[derive(Debug, Error)]
pub enum PropsError {
	#[error("required argument `{name}` was not specified for `{component}`")]
	MissingRequiredArgument {
		component: &'static str,
		name: &'static str,
	},
	#[error("could not encode `{name}`: {source}")]
	Encode {
		name: &'static str,
		source: serde_json::Error,
	},
}

/// The declared surface of one widget revision.
///
/// Validation always runs against this revision's own `declared`/`required`
/// sets. A later revision with a larger surface carries its own spec and the
/// two validate independently.
pub struct ComponentSpec {
	pub type_name: &'static str,
	pub namespace: &'static str,
	pub declared: &'static [&'static str],
	pub required: &'static [&'static str],
}

/// The validated property view handed to the renderer: only explicitly set
/// declared entries plus every additional attribute.
#[derive(Debug)]
pub struct ResolvedProps {
	pub type_name: &'static str,
	pub namespace: &'static str,
	pub properties: Map<String, Value>,
}

impl ComponentSpec {
	pub fn resolve(
		&self,
		declared: Vec<(&'static str, Option<Value>)>,
		additional: &BTreeMap<String, String>,
	) -> Result<ResolvedProps, PropsError> {
		for &name in self.required {
			let present = declared
				.iter()
				.any(|(key, value)| *key == name && value.is_some());
			if !present {
				return Err(PropsError::MissingRequiredArgument {
					component: self.type_name,
					name,
				});
			}
		}

		let mut properties = Map::new();
		for (name, value) in declared {
			debug_assert!(
				self.declared.contains(&name),
				"`{name}` is not declared by `{}`",
				self.type_name
			);
			if let Some(value) = value {
				properties.insert(name.to_owned(), value);
			}
		}
		for (name, value) in additional {
			properties.insert(name.clone(), Value::String(value.clone()));
		}

		Ok(ResolvedProps {
			type_name: self.type_name,
			namespace: self.namespace,
			properties,
		})
	}
}

fn text(value: &Option<String>) -> Option<Value> {
	value.as_ref().map(|v| Value::String(v.clone()))
}

fn number(value: &Option<f64>) -> Option<Value> {
	value.and_then(|v| serde_json::Number::from_f64(v).map(Value::Number))
}

/// Configuration for the [`SvgIcon`](super::svg_icon::SvgIcon) widget.
/// Field defaults (empty name, `#000` fill, `100%` size, `icon` class) are
/// applied at render time, not stored here.
#[derive(Clone, Debug, Default)]
pub struct SvgIconConfig {
	pub name: Option<String>,
	pub style: Option<String>,
	pub fill: Option<String>,
	pub view_box: Option<String>,
	pub width: Option<String>,
	pub height: Option<String>,
	pub class_name: Option<String>,
	pub additional_attributes: BTreeMap<String, String>,
}

impl SvgIconConfig {
	pub const SPEC: ComponentSpec = ComponentSpec {
		type_name: "SvgIcon",
		namespace: "network_canvas",
		declared: &[
			"name",
			"style",
			"fill",
			"viewBox",
			"width",
			"height",
			"className",
		],
		required: &[],
	};

	pub fn resolve(&self) -> Result<ResolvedProps, PropsError> {
		Self::SPEC.resolve(
			vec![
				("name", text(&self.name)),
				("style", text(&self.style)),
				("fill", text(&self.fill)),
				("viewBox", text(&self.view_box)),
				("width", text(&self.width)),
				("height", text(&self.height)),
				("className", text(&self.class_name)),
			],
			&self.additional_attributes,
		)
	}
}

/// Configuration for the [`NetworkCanvas`](super::network::NetworkCanvas)
/// widget. `data` is the one required property; sizing and scaling fields
/// fall back to the widget defaults when unset.
#[derive(Clone, Debug, Default)]
pub struct NetworkConfig {
	pub id: Option<String>,
	pub data: Option<GraphDocument>,
	pub width: Option<f64>,
	pub height: Option<f64>,
	pub link_width: Option<f64>,
	pub max_link_width: Option<f64>,
	pub node_radius: Option<f64>,
	pub max_radius: Option<f64>,
	pub data_version: Option<String>,
	pub selected_id: Option<String>,
	pub additional_attributes: BTreeMap<String, String>,
}

impl NetworkConfig {
	pub const SPEC: ComponentSpec = ComponentSpec {
		type_name: "Network",
		namespace: "network_canvas",
		declared: &[
			"id",
			"data",
			"width",
			"height",
			"linkWidth",
			"maxLinkWidth",
			"nodeRadius",
			"maxRadius",
			"dataVersion",
			"selectedId",
		],
		required: &["data"],
	};

	pub fn resolve(&self) -> Result<ResolvedProps, PropsError> {
		let data = self
			.data
			.as_ref()
			.map(serde_json::to_value)
			.transpose()
			.map_err(|source| PropsError::Encode {
				name: "data",
				source,
			})?;
		Self::SPEC.resolve(
			vec![
				("id", text(&self.id)),
				("data", data),
				("width", number(&self.width)),
				("height", number(&self.height)),
				("linkWidth", number(&self.link_width)),
				("maxLinkWidth", number(&self.max_link_width)),
				("nodeRadius", number(&self.node_radius)),
				("maxRadius", number(&self.max_radius)),
				("dataVersion", text(&self.data_version)),
				("selectedId", text(&self.selected_id)),
			],
			&self.additional_attributes,
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn sample_document() -> GraphDocument {
		serde_json::from_str(
			r#"{"nodes": [{"id": "a"}], "links": [{"source": "a", "target": "a"}]}"#,
		)
		.unwrap()
	}

	#[test]
	fn single_set_property_resolves_to_exactly_that_entry() {
		for (key, config) in [
			(
				"fill",
				SvgIconConfig {
					fill: Some("#ff0000".into()),
					..Default::default()
				},
			),
			(
				"name",
				SvgIconConfig {
					name: Some("pan".into()),
					..Default::default()
				},
			),
			(
				"className",
				SvgIconConfig {
					class_name: Some("icon".into()),
					..Default::default()
				},
			),
		] {
			let resolved = config.resolve().unwrap();
			assert_eq!(resolved.properties.len(), 1, "for {key}");
			assert!(resolved.properties.contains_key(key));
		}
	}

	#[test]
	fn unset_fields_are_omitted_not_nulled() {
		let resolved = SvgIconConfig::default().resolve().unwrap();
		assert!(resolved.properties.is_empty());
		assert_eq!(resolved.type_name, "SvgIcon");
		assert_eq!(resolved.namespace, "network_canvas");
	}

	#[test]
	fn missing_required_data_names_the_property() {
		let err = NetworkConfig::default().resolve().unwrap_err();
		match err {
			PropsError::MissingRequiredArgument { component, name } => {
				assert_eq!(component, "Network");
				assert_eq!(name, "data");
			}
			other => panic!("unexpected error: {other}"),
		}
		let message = NetworkConfig::default().resolve().unwrap_err().to_string();
		assert!(message.contains("`data`"));
	}

	#[test]
	fn network_with_data_resolves() {
		let config = NetworkConfig {
			id: Some("net".into()),
			data: Some(sample_document()),
			height: Some(550.0),
			node_radius: Some(17.0),
			..Default::default()
		};
		let resolved = config.resolve().unwrap();
		assert_eq!(resolved.properties.len(), 4);
		assert_eq!(resolved.properties["height"], serde_json::json!(550.0));
		assert_eq!(resolved.properties["data"]["nodes"][0]["id"], "a");
		// Unset declared properties stay out of the map.
		assert!(!resolved.properties.contains_key("width"));
	}

	#[test]
	fn additional_attributes_pass_through() {
		let config = SvgIconConfig {
			fill: Some("#000".into()),
			additional_attributes: BTreeMap::from([(
				"data-name".to_owned(),
				"pan".to_owned(),
			)]),
			..Default::default()
		};
		let resolved = config.resolve().unwrap();
		assert_eq!(resolved.properties["data-name"], "pan");
		assert_eq!(resolved.properties.len(), 2);
	}

	#[test]
	fn revisions_validate_against_their_own_declared_sets() {
		const V1: ComponentSpec = ComponentSpec {
			type_name: "Widget",
			namespace: "network_canvas",
			declared: &["label"],
			required: &[],
		};
		const V2: ComponentSpec = ComponentSpec {
			type_name: "Widget",
			namespace: "network_canvas",
			declared: &["label", "source"],
			required: &["source"],
		};

		let inputs = vec![("label", Some(Value::String("x".into())))];
		assert!(V1.resolve(inputs.clone(), &BTreeMap::new()).is_ok());
		let err = V2
			.resolve(
				vec![("label", Some(Value::String("x".into()))), ("source", None)],
				&BTreeMap::new(),
			)
			.unwrap_err();
		assert!(matches!(
			err,
			PropsError::MissingRequiredArgument { name: "source", .. }
		));
	}
}
