use serde::{Deserialize, Serialize};

/// One node of a graph document.
///
/// `id` is required, must be unique, and is used both in links and as the
/// node text. `radius` is a relative radius, scaled so the largest node in
/// the document ends up at the widget's `max_radius`. `color` is a css color
/// string and wins over any colorscheme-derived color.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
	pub id: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub radius: Option<f64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub color: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub group: Option<u32>,
}

/// One edge of a graph document. `source` and `target` must match node ids.
/// `width` is a relative width, scaled by the widget's `max_link_width`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphLink {
	pub source: String,
	pub target: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub width: Option<f64>,
}

/// A complete node-link document, as loaded from the dataset JSON files.
///
/// `colorscheme` is never present on disk; the dataset selector stamps it
/// onto the copy it returns.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
	pub nodes: Vec<GraphNode>,
	pub links: Vec<GraphLink>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub colorscheme: Option<String>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_minimal_document() {
		let doc: GraphDocument = serde_json::from_str(
			r#"{"nodes": [{"id": "a"}, {"id": "b"}], "links": [{"source": "a", "target": "b"}]}"#,
		)
		.unwrap();
		assert_eq!(doc.nodes.len(), 2);
		assert_eq!(doc.nodes[0].id, "a");
		assert_eq!(doc.nodes[0].radius, None);
		assert_eq!(doc.links[0].width, None);
		assert_eq!(doc.colorscheme, None);
	}

	#[test]
	fn parses_optional_node_and_link_fields() {
		let doc: GraphDocument = serde_json::from_str(
			r##"{
				"nodes": [{"id": "a", "radius": 2, "color": "#fff", "group": 3}],
				"links": [{"source": "a", "target": "a", "width": 1.5}]
			}"##,
		)
		.unwrap();
		assert_eq!(doc.nodes[0].radius, Some(2.0));
		assert_eq!(doc.nodes[0].color.as_deref(), Some("#fff"));
		assert_eq!(doc.nodes[0].group, Some(3));
		assert_eq!(doc.links[0].width, Some(1.5));
	}

	#[test]
	fn colorscheme_is_omitted_when_unset() {
		let doc = GraphDocument::default();
		let json = serde_json::to_value(&doc).unwrap();
		assert!(json.get("colorscheme").is_none());
	}
}
