use serde::Serialize;

use super::graph::{GraphNode, InfluenceGraph};
use super::layout::{LayoutResult, Point};

/// Colour for clusters without a palette entry.
pub const DEFAULT_COLOR: &str = "#7f7f7f";

/// Marker size per unit of power.
pub const SIZE_PER_POWER: f64 = 0.2;

const CLUSTER_COLORS: &[(&str, &str)] = &[
	("US", "#1f77b4"),
	("CN", "#d62728"),
	("KR", "#2ca02c"),
	("EU", "#9467bd"),
	("JP", "#ff7f0e"),
	("UK", "#17becf"),
	("IN", "#bcbd22"),
];

/// How one node should be drawn.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NodeStyle {
	/// Marker radius; proportional to power, never negative.
	pub size: f64,
	/// CSS colour string.
	pub color: &'static str,
	/// Hover/label text with the cluster and power value.
	pub label: String,
}

/// Palette lookup; case-insensitive, unknown codes get [`DEFAULT_COLOR`].
pub fn cluster_color(cluster: &str) -> &'static str {
	CLUSTER_COLORS
		.iter()
		.find(|(code, _)| code.eq_ignore_ascii_case(cluster.trim()))
		.map_or(DEFAULT_COLOR, |&(_, color)| color)
}

/// Visual attributes of a node.
pub fn node_style(node: &GraphNode) -> NodeStyle {
	NodeStyle {
		size: (node.power * SIZE_PER_POWER).max(0.0),
		color: cluster_color(&node.cluster),
		label: format!("{} ({}) | Power {}", node.name, node.cluster, node.power),
	}
}

/// Endpoint coordinates of every edge, in edge insertion order.
///
/// Edges whose endpoints are missing from `layout` are skipped.
pub fn render_edges(graph: &InfluenceGraph, layout: &LayoutResult) -> Vec<(Point, Point)> {
	graph
		.links()
		.filter_map(|(a, b, _)| Some((layout.at(a)?, layout.at(b)?)))
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::influence::{GraphEdge, build_graph, layout};

	#[test]
	fn unknown_cluster_falls_back_to_neutral() {
		assert_eq!(cluster_color("ZZ"), DEFAULT_COLOR);
		assert_eq!(cluster_color(""), DEFAULT_COLOR);
		assert_eq!(cluster_color("kr"), "#2ca02c");
	}

	#[test]
	fn size_tracks_power() {
		let big = node_style(&GraphNode::new("OpenAI", "US", 95.0));
		let small = node_style(&GraphNode::new("Naver", "KR", 40.0));
		assert!((big.size / small.size - 95.0 / 40.0).abs() < 1e-12);
		assert_eq!(big.label, "OpenAI (US) | Power 95");
		assert_eq!(node_style(&GraphNode::new("Odd", "??", -3.0)).size, 0.0);
	}

	#[test]
	fn edges_come_out_in_insertion_order() {
		let graph = build_graph(
			["A", "B", "C"].map(|n| GraphNode::new(n, "US", 1.0)),
			[
				GraphEdge::new("B", "C", 0.5),
				GraphEdge::new("A", "B", 0.9),
			],
		)
		.unwrap();
		let positions = layout(&graph, 42);
		let segments = render_edges(&graph, &positions);

		let at = |name: &str| positions.get(name).unwrap();
		assert_eq!(segments, [(at("B"), at("C")), (at("A"), at("B"))]);
	}
}
