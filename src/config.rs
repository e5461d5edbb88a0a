//! Tunables for the layout engines.

use force_graph::SimulationParameters;
use serde::{Deserialize, Serialize};

/// Seed used by the dashboard so renders of unchanged data never jitter.
pub const DEFAULT_SEED: u64 = 42;

/// Spring embedder settings.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
	/// Number of cooling steps.
	pub iterations: usize,
	/// Largest step a node may take on the first iteration, in unit-square units.
	pub initial_temperature: f64,
	/// Final positions are rescaled into `[-scale, scale]` on both axes.
	pub scale: f64,
}

impl Default for LayoutConfig {
	fn default() -> Self {
		Self {
			iterations: 50,
			initial_temperature: 0.1,
			scale: 1.0,
		}
	}
}

/// Settings for the `force_graph` backed engine.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
	/// Simulation steps run before positions are read back.
	pub ticks: usize,
	/// Time step per tick, seconds.
	pub dt: f32,
	/// Radius of the seeded starting scatter, in simulation units.
	pub spread: f32,
	/// Repulsion between every node pair.
	pub force_charge: f32,
	/// Spring stiffness along edges.
	pub force_spring: f32,
	/// Clamp on any single force.
	pub force_max: f32,
	/// Velocity scale.
	pub node_speed: f32,
	/// Velocity retained per tick.
	pub damping_factor: f32,
	/// Positions are rescaled into `[-scale, scale]` like the spring engine.
	pub scale: f64,
}

impl SimulationConfig {
	/// Parameters in the shape `force_graph` expects.
	pub fn parameters(&self) -> SimulationParameters {
		SimulationParameters {
			force_charge: self.force_charge,
			force_spring: self.force_spring,
			force_max: self.force_max,
			node_speed: self.node_speed,
			damping_factor: self.damping_factor,
		}
	}
}

impl Default for SimulationConfig {
	fn default() -> Self {
		Self {
			ticks: 300,
			dt: 0.016,
			spread: 100.0,
			force_charge: 150.0,
			force_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
			scale: 1.0,
		}
	}
}
