use std::collections::HashSet;

use crate::influence::{InfluenceGraph, LayoutResult, NodeStyle, Point, node_style, render_edges};

/// Share of the shorter canvas side covered by the layout's unit square.
const FIT: f64 = 0.42;
/// Extra pick slack around a marker, screen pixels.
pub const HIT_PADDING: f64 = 4.0;

/// Graph plus its computed positions; what the canvas is fed.
#[derive(Clone, Debug)]
pub struct InfluenceScene {
	/// Validated registry graph.
	pub graph: InfluenceGraph,
	/// Positions in `[-1, 1]`.
	pub layout: LayoutResult,
}

#[derive(Clone, Debug)]
pub struct PlacedNode {
	pub pos: Point,
	pub style: NodeStyle,
}

#[derive(Clone, Debug)]
pub struct PlacedEdge {
	pub a: usize,
	pub b: usize,
	pub weight: f64,
	pub from: Point,
	pub to: Point,
}

#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
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
	pub node: Option<usize>,
	pub neighbors: HashSet<usize>,
}

/// Canvas-side view of a laid-out graph: world coordinates, pan/zoom and hover.
pub struct InfluenceCanvasState {
	pub nodes: Vec<PlacedNode>,
	pub edges: Vec<PlacedEdge>,
	pub transform: ViewTransform,
	pub pan: PanState,
	pub hover: HoverState,
	pub width: f64,
	pub height: f64,
}

impl InfluenceCanvasState {
	pub fn new(scene: &InfluenceScene, width: f64, height: f64) -> Self {
		let radius = FIT * width.min(height);
		let world = |p: Point| Point::new(p.x * radius, p.y * radius);

		let nodes = scene
			.graph
			.nodes()
			.iter()
			.enumerate()
			.map(|(i, node)| PlacedNode {
				pos: scene.layout.at(i).map(world).unwrap_or_default(),
				style: node_style(node),
			})
			.collect();
		let edges = scene
			.graph
			.links()
			.zip(render_edges(&scene.graph, &scene.layout))
			.map(|((a, b, weight), (from, to))| PlacedEdge {
				a,
				b,
				weight,
				from: world(from),
				to: world(to),
			})
			.collect();

		Self {
			nodes,
			edges,
			transform: ViewTransform {
				x: width / 2.0,
				y: height / 2.0,
				k: 1.0,
			},
			pan: PanState::default(),
			hover: HoverState::default(),
			width,
			height,
		}
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	/// Topmost node under a screen position. Later nodes are drawn on top.
	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<usize> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let slack = HIT_PADDING / self.transform.k;
		self.nodes
			.iter()
			.enumerate()
			.rev()
			.find(|(_, node)| node.pos.distance(Point::new(gx, gy)) < node.style.size + slack)
			.map(|(i, _)| i)
	}

	pub fn set_hover(&mut self, node: Option<usize>) {
		if self.hover.node == node {
			return;
		}
		self.hover.node = node;
		self.hover.neighbors.clear();
		if let Some(idx) = node {
			for edge in &self.edges {
				if edge.a == idx {
					self.hover.neighbors.insert(edge.b);
				} else if edge.b == idx {
					self.hover.neighbors.insert(edge.a);
				}
			}
		}
	}

	pub fn is_highlighted(&self, idx: usize) -> bool {
		self.hover.node == Some(idx) || self.hover.neighbors.contains(&idx)
	}

	pub fn has_active_highlight(&self) -> bool {
		self.hover.node.is_some()
	}

	pub fn start_pan(&mut self, x: f64, y: f64) {
		self.pan = PanState {
			active: true,
			start_x: x,
			start_y: y,
			transform_start_x: self.transform.x,
			transform_start_y: self.transform.y,
		};
	}

	pub fn pan_to(&mut self, x: f64, y: f64) {
		if self.pan.active {
			self.transform.x = self.pan.transform_start_x + (x - self.pan.start_x);
			self.transform.y = self.pan.transform_start_y + (y - self.pan.start_y);
		}
	}

	/// Zoom by `factor` keeping the point under the cursor fixed.
	pub fn zoom_at(&mut self, x: f64, y: f64, factor: f64) {
		let new_k = (self.transform.k * factor).clamp(0.1, 10.0);
		let ratio = new_k / self.transform.k;
		self.transform.x = x - (x - self.transform.x) * ratio;
		self.transform.y = y - (y - self.transform.y) * ratio;
		self.transform.k = new_k;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::influence::{GraphEdge, GraphNode, build_graph, layout};

	fn scene() -> InfluenceScene {
		let graph = build_graph(
			[
				GraphNode::new("A", "US", 50.0),
				GraphNode::new("B", "KR", 50.0),
				GraphNode::new("C", "CN", 50.0),
			],
			[GraphEdge::new("A", "B", 0.9)],
		)
		.unwrap();
		let layout = layout(&graph, 42);
		InfluenceScene { graph, layout }
	}

	#[test]
	fn picks_node_under_cursor() {
		let state = InfluenceCanvasState::new(&scene(), 800.0, 600.0);
		let b = &state.nodes[1].pos;
		let (sx, sy) = (b.x + state.transform.x, b.y + state.transform.y);
		assert_eq!(state.node_at_position(sx, sy), Some(1));
		assert_eq!(state.node_at_position(-5000.0, -5000.0), None);
	}

	#[test]
	fn hover_highlights_neighbors_only() {
		let mut state = InfluenceCanvasState::new(&scene(), 800.0, 600.0);
		state.set_hover(Some(0));
		assert!(state.is_highlighted(0) && state.is_highlighted(1));
		assert!(!state.is_highlighted(2));
		state.set_hover(None);
		assert!(!state.has_active_highlight());
	}

	#[test]
	fn zoom_keeps_anchor_fixed() {
		let mut state = InfluenceCanvasState::new(&scene(), 800.0, 600.0);
		let before = state.screen_to_graph(100.0, 80.0);
		state.zoom_at(100.0, 80.0, 1.1);
		let after = state.screen_to_graph(100.0, 80.0);
		assert!((before.0 - after.0).abs() < 1e-9 && (before.1 - after.1).abs() < 1e-9);
	}

	#[test]
	fn edges_sit_on_node_positions() {
		let state = InfluenceCanvasState::new(&scene(), 800.0, 600.0);
		assert_eq!(state.edges.len(), 1);
		assert_eq!(state.edges[0].from, state.nodes[0].pos);
		assert_eq!(state.edges[0].to, state.nodes[1].pos);
	}
}
