//! Validation failures raised by the scoring and graph engines.

use thiserror::Error;

use crate::table::Metric;

/// Every failure is a deterministic function of bad input; callers fix the
/// input and call again.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DashboardError {
	/// A weight is negative or not a finite number.
	#[error("invalid weighting profile: {component} = {value} (weights must be finite and non-negative)")]
	InvalidProfile {
		/// Which of the three weights was rejected.
		component: &'static str,
		/// The rejected value.
		value: f64,
	},

	/// The profile key does not name a known weighting model.
	#[error("unknown weighting profile `{0}` (expected balanced, growth or market)")]
	UnknownProfile(String),

	/// A raw metric is missing (NaN) or outside [0, 100].
	#[error("invalid layer `{layer}`: {metric} = {value} (expected a percentage in [0, 100])")]
	InvalidEntity {
		/// Name of the offending layer.
		layer: String,
		/// The metric column that failed.
		metric: Metric,
		/// The rejected value.
		value: f64,
	},

	/// Two rows of one table share a layer name.
	#[error("layer `{0}` appears more than once")]
	DuplicateEntity(String),

	/// An edge endpoint is not in the node set.
	#[error("edge {source_node} -- {target_node} references unknown node `{missing}`")]
	UnknownNode {
		/// First endpoint as given.
		source_node: String,
		/// Second endpoint as given.
		target_node: String,
		/// The endpoint that could not be resolved.
		missing: String,
	},

	/// Two registry entries share a node name.
	#[error("node `{0}` is defined more than once")]
	DuplicateNode(String),

	/// A second edge joins an already connected pair (in either direction).
	#[error("duplicate edge between `{0}` and `{1}`")]
	DuplicateEdge(String, String),

	/// An edge joins a node to itself.
	#[error("self-loop on node `{0}`")]
	SelfLoopEdge(String),

	/// Edge strength outside (0, 1].
	#[error("edge {source_node} -- {target_node} has weight {weight} (expected a value in (0, 1])")]
	InvalidEdgeWeight {
		/// First endpoint.
		source_node: String,
		/// Second endpoint.
		target_node: String,
		/// The rejected weight.
		weight: f64,
	},
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, DashboardError>;
