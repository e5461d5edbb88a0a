use serde::Serialize;

use super::graph::{GraphNode, InfluenceGraph};
use crate::scoring::IndexTable;

/// Organizations of one layer next to that layer's index.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LayerMembers<'a> {
	/// Layer name.
	pub layer: &'a str,
	/// The layer's power index.
	pub power_index: f64,
	/// Graph nodes tagged with this layer, in graph order.
	pub members: Vec<&'a GraphNode>,
}

/// Join scored layers with the graph nodes that name them.
///
/// Optional by construction: untagged nodes and tags naming a layer that is
/// not in `table` are left out, and layers with no members still appear.
pub fn layer_members<'a>(table: &'a IndexTable, graph: &'a InfluenceGraph) -> Vec<LayerMembers<'a>> {
	table
		.rows()
		.iter()
		.map(|row| LayerMembers {
			layer: row.name(),
			power_index: row.power_index(),
			members: graph
				.nodes()
				.iter()
				.filter(|node| node.layer.as_deref() == Some(row.name()))
				.collect(),
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::influence::{GraphEdge, build_graph};
	use crate::registry;
	use crate::scoring::{Layer, WeightingProfile, compute_index};

	#[test]
	fn groups_nodes_by_layer() {
		let table = compute_index(
			&[Layer::new("General", 35.0, 25.0, 25.0), Layer::new("Empty", 1.0, 1.0, 1.0)],
			WeightingProfile::Balanced,
		)
		.unwrap();
		let graph = build_graph(
			[
				GraphNode::new("A", "US", 1.0).with_layer("General"),
				GraphNode::new("B", "KR", 1.0),
				GraphNode::new("C", "CN", 1.0).with_layer("Ghost"),
				GraphNode::new("D", "EU", 1.0).with_layer("General"),
			],
			Vec::<GraphEdge>::new(),
		)
		.unwrap();

		let joined = layer_members(&table, &graph);
		assert_eq!(joined.len(), 2);
		assert_eq!(joined[0].layer, "General");
		assert_eq!(joined[0].power_index, 29.0);
		let names: Vec<_> = joined[0].members.iter().map(|n| n.name.as_str()).collect();
		assert_eq!(names, ["A", "D"]);
		assert!(joined[1].members.is_empty());
	}

	#[test]
	fn registry_nodes_cover_every_layer() {
		let table = compute_index(&registry::layers(), WeightingProfile::Growth).unwrap();
		let graph = registry::influence_graph().unwrap();
		for group in layer_members(&table, &graph) {
			assert!(!group.members.is_empty(), "{} has no organizations", group.layer);
		}
	}
}
