use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData};
use log::debug;

use super::graph::InfluenceGraph;
use super::layout::{LayoutEngine, LayoutResult, Point, rescale, seeded_positions};
use crate::config::SimulationConfig;

const NODE_MASS: f32 = 10.0;

/// Layout engine that runs the `force_graph` physics simulation for a fixed
/// number of ticks from a seeded scatter.
///
/// Springs in `force_graph` have uniform stiffness, so edge weights do not
/// shape this layout; use [`super::SpringLayout`] when they should.
#[derive(Clone, Copy, Debug, Default)]
pub struct ForceSimulation {
	/// Tick count, time step and force constants.
	pub config: SimulationConfig,
}

impl ForceSimulation {
	/// Engine with explicit settings.
	pub fn new(config: SimulationConfig) -> Self {
		Self { config }
	}
}

impl LayoutEngine for ForceSimulation {
	fn compute_layout(&self, graph: &InfluenceGraph, seed: u64) -> LayoutResult {
		let spread = self.config.spread;
		let mut sim: ForceGraph<usize, ()> = ForceGraph::new(self.config.parameters());

		let handles: Vec<DefaultNodeIdx> = seeded_positions(graph.len(), seed)
			.into_iter()
			.enumerate()
			.map(|(i, p)| {
				sim.add_node(NodeData {
					x: (p.x as f32 - 0.5) * 2.0 * spread,
					y: (p.y as f32 - 0.5) * 2.0 * spread,
					mass: NODE_MASS,
					is_anchor: false,
					user_data: i,
				})
			})
			.collect();
		for (a, b, _) in graph.links() {
			sim.add_edge(handles[a], handles[b], EdgeData::default());
		}

		for _ in 0..self.config.ticks {
			sim.update(self.config.dt);
		}

		let mut positions = vec![Point::default(); graph.len()];
		sim.visit_nodes(|node| {
			positions[node.data.user_data] = Point::new(node.x() as f64, node.y() as f64);
		});
		debug!(
			"force simulation placed {} nodes after {} ticks",
			positions.len(),
			self.config.ticks
		);

		rescale(&mut positions, self.config.scale);
		LayoutResult::from_positions(graph, positions)
	}
}
