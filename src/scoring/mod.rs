//! Weighted power index over the layer table.

mod index;
mod profile;

pub use index::{IndexTable, Layer, ScoredLayer, compute_index};
pub use profile::{WeightingProfile, Weights};
