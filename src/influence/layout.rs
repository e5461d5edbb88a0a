use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use super::graph::InfluenceGraph;
use crate::config::LayoutConfig;

/// A 2-D coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Point {
	/// Horizontal.
	pub x: f64,
	/// Vertical.
	pub y: f64,
}

impl Point {
	/// Build a point.
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	/// Euclidean distance.
	pub fn distance(self, other: Point) -> f64 {
		(self.x - other.x).hypot(self.y - other.y)
	}
}

/// Node name to coordinate, in graph node order.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct LayoutResult {
	positions: Vec<(String, Point)>,
}

impl LayoutResult {
	/// Pair node names with positions computed in node order.
	pub(crate) fn from_positions(graph: &InfluenceGraph, positions: Vec<Point>) -> Self {
		Self {
			positions: graph
				.nodes()
				.iter()
				.map(|node| node.name.clone())
				.zip(positions)
				.collect(),
		}
	}

	/// Coordinate of a node.
	pub fn get(&self, name: &str) -> Option<Point> {
		self.positions
			.iter()
			.find(|(node, _)| node == name)
			.map(|&(_, point)| point)
	}

	/// Coordinate of the node at `index` in graph order.
	pub fn at(&self, index: usize) -> Option<Point> {
		self.positions.get(index).map(|&(_, point)| point)
	}

	/// All entries in graph order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, Point)> {
		self.positions.iter().map(|(name, point)| (name.as_str(), *point))
	}

	/// Number of placed nodes.
	pub fn len(&self) -> usize {
		self.positions.len()
	}

	/// True when nothing was placed.
	pub fn is_empty(&self) -> bool {
		self.positions.is_empty()
	}
}

/// Anything that can place the nodes of a graph.
///
/// Implementations must return identical output for the same graph (same
/// insertion order) and seed.
pub trait LayoutEngine {
	/// Compute positions for every node of `graph`.
	fn compute_layout(&self, graph: &InfluenceGraph, seed: u64) -> LayoutResult;
}

/// Weighted Fruchterman-Reingold spring embedder.
///
/// Every pair repels with `k^2 / d`, every edge pulls with `w * d^2 / k`,
/// and the step length is capped by a temperature that cools linearly to zero.
#[derive(Clone, Copy, Debug, Default)]
pub struct SpringLayout {
	/// Iteration count, cooling schedule and output scale.
	pub config: LayoutConfig,
}

impl SpringLayout {
	/// Engine with explicit settings.
	pub fn new(config: LayoutConfig) -> Self {
		Self { config }
	}
}

impl LayoutEngine for SpringLayout {
	fn compute_layout(&self, graph: &InfluenceGraph, seed: u64) -> LayoutResult {
		let n = graph.len();
		let mut positions = seeded_positions(n, seed);
		if n == 0 {
			return LayoutResult::default();
		}

		let links: Vec<_> = graph.links().collect();
		let k = (1.0 / n as f64).sqrt();
		let mut temperature = self.config.initial_temperature;
		let cooling = temperature / (self.config.iterations as f64 + 1.0);

		for _ in 0..self.config.iterations {
			let mut forces = vec![Point::default(); n];

			for i in 0..n {
				for j in (i + 1)..n {
					let dx = positions[j].x - positions[i].x;
					let dy = positions[j].y - positions[i].y;
					let dist = dx.hypot(dy).max(0.01);

					let repulsion = k * k / dist;
					let (fx, fy) = (dx / dist * repulsion, dy / dist * repulsion);
					forces[i].x -= fx;
					forces[i].y -= fy;
					forces[j].x += fx;
					forces[j].y += fy;
				}
			}

			for &(i, j, weight) in &links {
				let dx = positions[j].x - positions[i].x;
				let dy = positions[j].y - positions[i].y;
				let dist = dx.hypot(dy).max(0.01);

				let attraction = weight * dist * dist / k;
				let (fx, fy) = (dx / dist * attraction, dy / dist * attraction);
				forces[i].x += fx;
				forces[i].y += fy;
				forces[j].x -= fx;
				forces[j].y -= fy;
			}

			for (position, force) in positions.iter_mut().zip(&forces) {
				let magnitude = force.x.hypot(force.y).max(0.01);
				let step = magnitude.min(temperature);
				position.x += force.x / magnitude * step;
				position.y += force.y / magnitude * step;
			}

			temperature -= cooling;
		}

		rescale(&mut positions, self.config.scale);
		LayoutResult::from_positions(graph, positions)
	}
}

/// Lay out `graph` with the default spring embedder.
pub fn layout(graph: &InfluenceGraph, seed: u64) -> LayoutResult {
	SpringLayout::default().compute_layout(graph, seed)
}

/// Uniform starting positions in the unit square, fixed by `seed`.
pub(crate) fn seeded_positions(n: usize, seed: u64) -> Vec<Point> {
	let mut rng = ChaCha8Rng::seed_from_u64(seed);
	(0..n)
		.map(|_| Point::new(rng.random::<f64>(), rng.random::<f64>()))
		.collect()
}

/// Centre on the mean and stretch so the largest coordinate magnitude is `scale`.
pub(crate) fn rescale(positions: &mut [Point], scale: f64) {
	if positions.is_empty() {
		return;
	}
	let n = positions.len() as f64;
	let cx = positions.iter().map(|p| p.x).sum::<f64>() / n;
	let cy = positions.iter().map(|p| p.y).sum::<f64>() / n;
	for p in positions.iter_mut() {
		p.x -= cx;
		p.y -= cy;
	}
	let extent = positions
		.iter()
		.map(|p| p.x.abs().max(p.y.abs()))
		.fold(0.0, f64::max);
	if extent > 0.0 {
		for p in positions.iter_mut() {
			p.x *= scale / extent;
			p.y *= scale / extent;
		}
	}
}
