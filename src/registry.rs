//! Built-in dataset: the layer table, the organization registry and their ties.
//!
//! Every function returns freshly owned values, so concurrent callers never
//! share a mutable dataset.

use crate::error::Result;
use crate::influence::{GraphEdge, GraphNode, InfluenceGraph, build_graph};
use crate::scoring::Layer;

/// (name, market share, CAGR, penetration)
const LAYERS: &[(&str, f64, f64, f64)] = &[
	("General", 35.0, 25.0, 25.0),
	("Enterprise", 43.0, 45.0, 55.0),
	("Command", 22.0, 55.0, 57.0),
];

/// (name, cluster, power, layer)
const ORGANIZATIONS: &[(&str, &str, f64, &str)] = &[
	("OpenAI", "US", 95.0, "General"),
	("Google DeepMind", "US", 92.0, "General"),
	("Anthropic", "US", 80.0, "General"),
	("Baidu", "CN", 70.0, "General"),
	("Naver", "KR", 48.0, "General"),
	("Microsoft", "US", 94.0, "Enterprise"),
	("Alibaba Cloud", "CN", 74.0, "Enterprise"),
	("Samsung SDS", "KR", 58.0, "Enterprise"),
	("SAP", "EU", 62.0, "Enterprise"),
	("Palantir", "US", 78.0, "Command"),
	("Anduril", "US", 60.0, "Command"),
	("Hanwha Aerospace", "KR", 52.0, "Command"),
	("Thales", "EU", 57.0, "Command"),
];

/// (a, b, strength)
const TIES: &[(&str, &str, f64)] = &[
	("OpenAI", "Microsoft", 0.95),
	("Anthropic", "Google DeepMind", 0.6),
	("Google DeepMind", "Samsung SDS", 0.4),
	("Microsoft", "SAP", 0.5),
	("Microsoft", "Palantir", 0.45),
	("Palantir", "Anduril", 0.55),
	("Anduril", "Hanwha Aerospace", 0.3),
	("Thales", "SAP", 0.35),
	("Baidu", "Alibaba Cloud", 0.5),
	("Naver", "Samsung SDS", 0.7),
	("Samsung SDS", "Hanwha Aerospace", 0.65),
	("OpenAI", "Anthropic", 0.2),
];

/// The three scored layers.
pub fn layers() -> Vec<Layer> {
	LAYERS
		.iter()
		.map(|&(name, share, cagr, penetration)| Layer::new(name, share, cagr, penetration))
		.collect()
}

/// Organization registry, each tagged with its layer.
pub fn organizations() -> Vec<GraphNode> {
	ORGANIZATIONS
		.iter()
		.map(|&(name, cluster, power, layer)| GraphNode::new(name, cluster, power).with_layer(layer))
		.collect()
}

/// Weighted ties between registry organizations.
pub fn edges() -> Vec<GraphEdge> {
	TIES.iter()
		.map(|&(a, b, weight)| GraphEdge::new(a, b, weight))
		.collect()
}

/// The validated registry graph.
pub fn influence_graph() -> Result<InfluenceGraph> {
	build_graph(organizations(), edges())
}
