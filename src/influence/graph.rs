use std::collections::{HashMap, HashSet};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, Result};

/// An organization in the influence graph.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
	/// Unique name, also the display label.
	pub name: String,
	/// Origin cluster, a region code such as `US` or `KR`.
	pub cluster: String,
	/// Influence score; drives node size.
	pub power: f64,
	/// Layer this organization belongs to, for joining with the index table.
	#[serde(default)]
	pub layer: Option<String>,
}

impl GraphNode {
	/// Node without a layer.
	pub fn new(name: impl Into<String>, cluster: impl Into<String>, power: f64) -> Self {
		Self {
			name: name.into(),
			cluster: cluster.into(),
			power,
			layer: None,
		}
	}

	/// Tag the node with a layer name.
	pub fn with_layer(mut self, layer: impl Into<String>) -> Self {
		self.layer = Some(layer.into());
		self
	}
}

/// Undirected relationship of strength `weight` in (0, 1].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
	/// One endpoint.
	pub source: String,
	/// The other endpoint.
	pub target: String,
	/// Relationship strength.
	pub weight: f64,
}

impl GraphEdge {
	/// Edge between two node names.
	pub fn new(source: impl Into<String>, target: impl Into<String>, weight: f64) -> Self {
		Self {
			source: source.into(),
			target: target.into(),
			weight,
		}
	}
}

/// A simple weighted graph: no dangling endpoints, no self-loops, one edge per pair.
///
/// Nodes and edges keep insertion order, which the layout and the edge
/// renderer both rely on for repeatable output.
#[derive(Clone, Debug, Default)]
pub struct InfluenceGraph {
	nodes: Vec<GraphNode>,
	edges: Vec<GraphEdge>,
	links: Vec<(usize, usize)>,
	index: HashMap<String, usize>,
	pairs: HashSet<(usize, usize)>,
}

impl InfluenceGraph {
	/// Nodes in insertion order.
	pub fn nodes(&self) -> &[GraphNode] {
		&self.nodes
	}

	/// Edges in insertion order.
	pub fn edges(&self) -> &[GraphEdge] {
		&self.edges
	}

	/// Edges as node positions plus weight, same order as [`Self::edges`].
	pub fn links(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
		self.links
			.iter()
			.zip(&self.edges)
			.map(|(&(a, b), edge)| (a, b, edge.weight))
	}

	/// Position of a node in [`Self::nodes`].
	pub fn node_index(&self, name: &str) -> Option<usize> {
		self.index.get(name).copied()
	}

	/// Node by name.
	pub fn node(&self, name: &str) -> Option<&GraphNode> {
		self.node_index(name).map(|i| &self.nodes[i])
	}

	/// Names of the nodes sharing an edge with `name`.
	pub fn neighbors(&self, name: &str) -> Vec<&str> {
		let Some(idx) = self.node_index(name) else {
			return Vec::new();
		};
		self.links
			.iter()
			.filter_map(|&(a, b)| match (a == idx, b == idx) {
				(true, _) => Some(self.nodes[b].name.as_str()),
				(_, true) => Some(self.nodes[a].name.as_str()),
				_ => None,
			})
			.collect()
	}

	/// Number of nodes.
	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	/// True when there are no nodes.
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	fn add_node(&mut self, node: GraphNode) -> Result<()> {
		if self.index.contains_key(&node.name) {
			return Err(DashboardError::DuplicateNode(node.name));
		}
		self.index.insert(node.name.clone(), self.nodes.len());
		self.nodes.push(node);
		Ok(())
	}

	/// Insert one edge after checking it against the graph invariants.
	///
	/// On error the graph is unchanged.
	pub fn add_edge(&mut self, edge: GraphEdge) -> Result<()> {
		let resolve = |name: &str| {
			self.node_index(name).ok_or_else(|| DashboardError::UnknownNode {
				source_node: edge.source.clone(),
				target_node: edge.target.clone(),
				missing: name.to_owned(),
			})
		};
		let a = resolve(&edge.source)?;
		let b = resolve(&edge.target)?;
		if a == b {
			return Err(DashboardError::SelfLoopEdge(edge.source));
		}
		if !(edge.weight > 0.0 && edge.weight <= 1.0) {
			return Err(DashboardError::InvalidEdgeWeight {
				source_node: edge.source,
				target_node: edge.target,
				weight: edge.weight,
			});
		}
		if !self.pairs.insert((a.min(b), a.max(b))) {
			return Err(DashboardError::DuplicateEdge(edge.source, edge.target));
		}
		self.links.push((a, b));
		self.edges.push(edge);
		Ok(())
	}
}

/// Validate and assemble a graph. Fails on the first offending node or edge.
pub fn build_graph(
	nodes: impl IntoIterator<Item = GraphNode>,
	edges: impl IntoIterator<Item = GraphEdge>,
) -> Result<InfluenceGraph> {
	let mut graph = InfluenceGraph::default();
	for node in nodes {
		graph.add_node(node).inspect_err(|e| warn!("{e}"))?;
	}
	for edge in edges {
		graph.add_edge(edge).inspect_err(|e| warn!("{e}"))?;
	}
	debug!(
		"built influence graph: {} nodes, {} edges",
		graph.nodes.len(),
		graph.edges.len()
	);
	Ok(graph)
}
