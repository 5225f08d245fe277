use std::collections::{HashMap, HashSet};
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};

use super::scale;
use super::types::GraphDocument;

/// Categorical fallback palette, used when a node has neither an explicit
/// color nor an active document colorscheme.
const COLORS: &[&str] = &[
	"#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
	"#bcbd22", "#17becf",
];

pub const ZOOM_MIN: f64 = 1.0;
pub const ZOOM_MAX: f64 = 5.0;

const HIT_MARGIN: f64 = 6.0;

/// Sizing defaults for the widget, matching the original figure defaults.
#[derive(Clone, Copy, Debug)]
pub struct NetworkOptions {
	pub link_width: f64,
	pub max_link_width: f64,
	pub node_radius: f64,
	pub max_radius: f64,
}

impl Default for NetworkOptions {
	fn default() -> Self {
		Self {
			link_width: 4.0,
			max_link_width: 20.0,
			node_radius: 10.0,
			max_radius: 20.0,
		}
	}
}

#[derive(Clone, Debug, Default)]
pub struct NodeInfo {
	pub id: String,
	pub color: String,
	pub radius: f64,
}

#[derive(Clone, Debug, Default)]
pub struct LinkInfo {
	pub width: f64,
}

#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub node_idx: Option<DefaultNodeIdx>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f32,
	pub node_start_y: f32,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

#[derive(Clone, Debug, Default)]
pub struct HoverState {
	pub node: Option<DefaultNodeIdx>,
	pub neighbors: HashSet<DefaultNodeIdx>,
	pub highlight_t: f64,
	pub prev_node: Option<DefaultNodeIdx>,
	pub prev_neighbors: HashSet<DefaultNodeIdx>,
	delay_t: f64,
}

pub struct NetworkState {
	pub graph: ForceGraph<NodeInfo, LinkInfo>,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub hover: HoverState,
	pub selected: Option<DefaultNodeIdx>,
	pub width: f64,
	pub height: f64,
	pub animation_running: bool,
	pub flow_time: f64,
	edges: Vec<(DefaultNodeIdx, DefaultNodeIdx)>,
}

impl NetworkState {
	pub fn new(data: &GraphDocument, options: NetworkOptions, width: f64, height: f64) -> Self {
		let mut graph = ForceGraph::new(SimulationParameters {
			force_charge: 150.0,
			force_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
		});
		let mut id_to_idx = HashMap::new();
		let mut edges = Vec::new();

		let scheme = data.colorscheme.as_deref().and_then(scale::by_name);
		let max_group = data.nodes.iter().filter_map(|n| n.group).max();

		// Relative radii/widths are scaled so the largest lands on the
		// configured maximum; nodes/links without one use the flat default.
		let max_found_radius = data
			.nodes
			.iter()
			.filter_map(|n| n.radius)
			.fold(0.0_f64, f64::max)
			.max(1.0);
		let max_found_width = data
			.links
			.iter()
			.filter_map(|l| l.width)
			.fold(0.0_f64, f64::max)
			.max(1.0);

		let node_count = data.nodes.len().max(1);
		for (i, node) in data.nodes.iter().enumerate() {
			let color = node.color.clone().unwrap_or_else(|| match scheme {
				Some(stops) => {
					let t = match (node.group, max_group) {
						(Some(g), Some(max)) if max > 0 => g as f64 / max as f64,
						_ => i as f64 / (node_count - 1).max(1) as f64,
					};
					scale::sample(stops, t)
				}
				None => match node.group {
					Some(g) => COLORS[g as usize % COLORS.len()].into(),
					None => COLORS[i % COLORS.len()].into(),
				},
			});
			let radius = node
				.radius
				.map(|r| r * options.max_radius / max_found_radius)
				.unwrap_or(options.node_radius);

			let angle = (i as f64) * 2.0 * PI / node_count as f64;
			let (x, y) = ((100.0 * angle.cos()) as f32, (100.0 * angle.sin()) as f32);

			let idx = graph.add_node(NodeData {
				x,
				y,
				mass: 10.0,
				is_anchor: false,
				user_data: NodeInfo {
					id: node.id.clone(),
					color,
					radius,
				},
			});
			id_to_idx.insert(node.id.clone(), idx);
		}

		for link in &data.links {
			if let (Some(&src), Some(&tgt)) =
				(id_to_idx.get(&link.source), id_to_idx.get(&link.target))
			{
				let width = link
					.width
					.map(|w| w * options.max_link_width / max_found_width)
					.unwrap_or(options.link_width);
				let mut edge = EdgeData::default();
				edge.user_data = LinkInfo { width };
				graph.add_edge(src, tgt, edge);
				edges.push((src, tgt));
			}
		}

		Self {
			graph,
			edges,
			transform: ViewTransform {
				x: width / 2.0,
				y: height / 2.0,
				k: 1.0,
			},
			drag: DragState::default(),
			pan: PanState::default(),
			hover: HoverState::default(),
			selected: None,
			width,
			height,
			animation_running: true,
			flow_time: 0.0,
		}
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - gx, node.y() as f64 - gy);
			// Hit radius is in world-space, scales with zoom like nodes
			if (dx * dx + dy * dy).sqrt() < node.data.user_data.radius + HIT_MARGIN {
				found = Some(node.index());
			}
		});
		found
	}

	pub fn node_id(&self, idx: DefaultNodeIdx) -> Option<String> {
		let mut found = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				found = Some(node.data.user_data.id.clone());
			}
		});
		found
	}

	/// Mark `idx` as the selected node (or clear with `None`) and return the
	/// selected node's id for the component callback.
	pub fn select(&mut self, idx: Option<DefaultNodeIdx>) -> Option<String> {
		self.selected = idx;
		idx.and_then(|idx| self.node_id(idx))
	}

	/// Reset pan/zoom to the identity view, as a background click does.
	pub fn reset_zoom(&mut self) {
		self.transform = ViewTransform {
			x: self.width / 2.0,
			y: self.height / 2.0,
			k: 1.0,
		};
	}

	/// Zoom by `factor` toward the screen point `(sx, sy)`, clamped to the
	/// widget's scale extent.
	pub fn zoom_at(&mut self, sx: f64, sy: f64, factor: f64) {
		let new_k = (self.transform.k * factor).clamp(ZOOM_MIN, ZOOM_MAX);
		let ratio = new_k / self.transform.k;
		self.transform.x = sx - (sx - self.transform.x) * ratio;
		self.transform.y = sy - (sy - self.transform.y) * ratio;
		self.transform.k = new_k;
	}

	pub fn set_hover(&mut self, node: Option<DefaultNodeIdx>) {
		if self.hover.node == node {
			return;
		}
		let was_hovering = self.hover.node.is_some();

		// Save previous state for fade-out
		if was_hovering && node.is_none() {
			self.hover.prev_node = self.hover.node.take();
			self.hover.prev_neighbors = std::mem::take(&mut self.hover.neighbors);
		} else {
			self.hover.prev_node = None;
			self.hover.prev_neighbors.clear();
		}

		self.hover.node = node;
		self.hover.neighbors.clear();

		if let Some(idx) = node {
			if !was_hovering {
				self.hover.delay_t = 0.0;
			}
			for &(src, tgt) in &self.edges {
				if src == idx {
					self.hover.neighbors.insert(tgt);
				} else if tgt == idx {
					self.hover.neighbors.insert(src);
				}
			}
		}
	}

	pub fn is_highlighted(&self, idx: DefaultNodeIdx) -> bool {
		self.hover.node == Some(idx)
			|| self.hover.neighbors.contains(&idx)
			|| self.hover.prev_node == Some(idx)
			|| self.hover.prev_neighbors.contains(&idx)
	}

	pub fn is_hovered(&self, idx: DefaultNodeIdx) -> bool {
		self.hover.node == Some(idx) || self.hover.prev_node == Some(idx)
	}

	pub fn has_active_highlight(&self) -> bool {
		self.hover.node.is_some() || self.hover.prev_node.is_some()
	}

	pub fn tick(&mut self, dt: f32) {
		self.graph.update(dt);
		self.flow_time += dt as f64;

		// Keep nodes inside the viewport, less their own radius.
		let (half_w, half_h) = (self.width / 2.0, self.height / 2.0);
		self.graph.visit_nodes_mut(|node| {
			let r = node.data.user_data.radius;
			let max_x = (half_w - r).max(r) as f32;
			let max_y = (half_h - r).max(r) as f32;
			node.data.x = node.data.x.clamp(-max_x, max_x);
			node.data.y = node.data.y.clamp(-max_y, max_y);
		});

		let (target, delay, speed) = if self.hover.node.is_some() {
			(1.0, 0.08, 1.8)
		} else {
			(0.0, 0.0, 1.26)
		};

		if self.hover.node.is_some() {
			self.hover.delay_t = (self.hover.delay_t + dt as f64).min(delay);
			if self.hover.delay_t >= delay {
				self.hover.highlight_t += (target - self.hover.highlight_t) * speed * dt as f64;
			}
		} else {
			self.hover.highlight_t += (target - self.hover.highlight_t) * speed * dt as f64;
			if self.hover.highlight_t < 0.01 {
				self.hover.highlight_t = 0.0;
				self.hover.prev_node = None;
				self.hover.prev_neighbors.clear();
			}
		}
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::network::types::{GraphLink, GraphNode};

	fn node(id: &str, radius: Option<f64>, group: Option<u32>) -> GraphNode {
		GraphNode {
			id: id.into(),
			radius,
			color: None,
			group,
		}
	}

	fn document(colorscheme: Option<&str>) -> GraphDocument {
		GraphDocument {
			nodes: vec![
				node("a", Some(2.0), Some(0)),
				node("b", Some(1.0), Some(2)),
				node("c", None, Some(1)),
			],
			links: vec![
				GraphLink {
					source: "a".into(),
					target: "b".into(),
					width: Some(2.0),
				},
				GraphLink {
					source: "b".into(),
					target: "c".into(),
					width: None,
				},
				GraphLink {
					source: "a".into(),
					target: "ghost".into(),
					width: None,
				},
			],
			colorscheme: colorscheme.map(str::to_owned),
		}
	}

	fn collect_nodes(state: &NetworkState) -> Vec<NodeInfo> {
		let mut out = Vec::new();
		state
			.graph
			.visit_nodes(|n| out.push(n.data.user_data.clone()));
		out
	}

	#[test]
	fn radii_scale_to_max_radius() {
		let state = NetworkState::new(&document(None), NetworkOptions::default(), 800.0, 600.0);
		let nodes = collect_nodes(&state);
		let a = nodes.iter().find(|n| n.id == "a").unwrap();
		let b = nodes.iter().find(|n| n.id == "b").unwrap();
		let c = nodes.iter().find(|n| n.id == "c").unwrap();
		// Largest relative radius lands on max_radius, others scale linearly,
		// nodes without a radius get the flat default.
		assert_eq!(a.radius, 20.0);
		assert_eq!(b.radius, 10.0);
		assert_eq!(c.radius, 10.0);
	}

	#[test]
	fn links_to_unknown_nodes_are_dropped() {
		let state = NetworkState::new(&document(None), NetworkOptions::default(), 800.0, 600.0);
		assert_eq!(state.edges.len(), 2);
	}

	#[test]
	fn colorscheme_drives_node_colors_by_group() {
		let state = NetworkState::new(
			&document(Some("Greys")),
			NetworkOptions::default(),
			800.0,
			600.0,
		);
		let nodes = collect_nodes(&state);
		let a = nodes.iter().find(|n| n.id == "a").unwrap();
		let b = nodes.iter().find(|n| n.id == "b").unwrap();
		// group 0 of max 2 samples the low end, group 2 the high end.
		assert_eq!(a.color, "rgb(0, 0, 0)");
		assert_eq!(b.color, "rgb(255, 255, 255)");
	}

	#[test]
	fn missing_colorscheme_falls_back_to_categorical_palette() {
		let state = NetworkState::new(&document(None), NetworkOptions::default(), 800.0, 600.0);
		let nodes = collect_nodes(&state);
		let a = nodes.iter().find(|n| n.id == "a").unwrap();
		assert_eq!(a.color, COLORS[0]);
	}

	#[test]
	fn select_reports_the_node_id() {
		let mut state =
			NetworkState::new(&document(None), NetworkOptions::default(), 800.0, 600.0);
		let idx = state.edges[0].0;
		assert_eq!(state.select(Some(idx)).as_deref(), Some("a"));
		assert_eq!(state.selected, Some(idx));
		assert_eq!(state.select(None), None);
		assert_eq!(state.selected, None);
	}

	#[test]
	fn zoom_clamps_to_scale_extent() {
		let mut state =
			NetworkState::new(&document(None), NetworkOptions::default(), 800.0, 600.0);
		state.zoom_at(400.0, 300.0, 0.5);
		assert_eq!(state.transform.k, ZOOM_MIN);
		for _ in 0..20 {
			state.zoom_at(400.0, 300.0, 1.5);
		}
		assert_eq!(state.transform.k, ZOOM_MAX);
	}

	#[test]
	fn reset_zoom_restores_the_identity_view() {
		let mut state =
			NetworkState::new(&document(None), NetworkOptions::default(), 800.0, 600.0);
		state.zoom_at(10.0, 10.0, 1.5);
		state.transform.x += 50.0;
		state.reset_zoom();
		assert_eq!(state.transform.k, 1.0);
		assert_eq!(state.transform.x, 400.0);
		assert_eq!(state.transform.y, 300.0);
	}
}
