use std::collections::HashSet;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::profile::Weights;
use crate::error::{DashboardError, Result};
use crate::table::{Metric, round_tenth};

/// One scored category with its raw metrics. NaN marks a missing cell.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Layer {
	name: String,
	market_share: f64,
	cagr: f64,
	penetration: f64,
}

impl Layer {
	/// Raw metrics are percentages; range checks happen in [`compute_index`].
	pub fn new(name: impl Into<String>, market_share: f64, cagr: f64, penetration: f64) -> Self {
		Self {
			name: name.into(),
			market_share,
			cagr,
			penetration,
		}
	}

	/// Layer name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Raw metric value. [`Metric::PowerIndex`] is not a raw column and yields `None`.
	pub fn metric(&self, metric: Metric) -> Option<f64> {
		match metric {
			Metric::MarketShare => Some(self.market_share),
			Metric::Cagr => Some(self.cagr),
			Metric::Penetration => Some(self.penetration),
			Metric::PowerIndex => None,
		}
	}

	fn validate(&self) -> Result<()> {
		for metric in Metric::RAW {
			let value = self.metric(metric).unwrap_or(f64::NAN);
			if !(0.0..=100.0).contains(&value) {
				return Err(DashboardError::InvalidEntity {
					layer: self.name.clone(),
					metric,
					value,
				});
			}
		}
		Ok(())
	}

	fn score(&self, w: &Weights) -> f64 {
		round_tenth(w.share * self.market_share + w.cagr * self.cagr + w.penetration * self.penetration)
	}
}

/// A layer plus its derived power index.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScoredLayer {
	#[serde(flatten)]
	layer: Layer,
	power_index: f64,
}

impl ScoredLayer {
	/// Layer name.
	pub fn name(&self) -> &str {
		self.layer.name()
	}

	/// The raw record this row was scored from.
	pub fn layer(&self) -> &Layer {
		&self.layer
	}

	/// Derived index, rounded to one decimal.
	pub fn power_index(&self) -> f64 {
		self.power_index
	}

	/// Any column, raw or derived.
	pub fn value(&self, metric: Metric) -> f64 {
		self.layer.metric(metric).unwrap_or(self.power_index)
	}
}

/// Result of one scoring run. Rows keep input order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct IndexTable {
	weights: Weights,
	rows: Vec<ScoredLayer>,
}

impl IndexTable {
	/// Rows in input order.
	pub fn rows(&self) -> &[ScoredLayer] {
		&self.rows
	}

	/// The coefficients this table was computed with.
	pub fn weights(&self) -> Weights {
		self.weights
	}

	/// Look a row up by layer name.
	pub fn get(&self, name: &str) -> Option<&ScoredLayer> {
		self.rows.iter().find(|row| row.name() == name)
	}

	/// Rows by descending index; ties keep input order.
	pub fn ranked(&self) -> Vec<&ScoredLayer> {
		let mut ranked: Vec<_> = self.rows.iter().collect();
		ranked.sort_by(|a, b| b.power_index.total_cmp(&a.power_index));
		ranked
	}
}

/// Score every layer under `profile`.
///
/// `index = w_share * share + w_cagr * cagr + w_penetration * penetration`,
/// rounded half-to-even to one decimal. All or nothing: the first bad weight or
/// cell aborts the run. The input slice is only read.
pub fn compute_index(layers: &[Layer], profile: impl Into<Weights>) -> Result<IndexTable> {
	let weights = profile.into();
	weights.validate().inspect_err(|e| warn!("{e}"))?;

	let mut seen = HashSet::with_capacity(layers.len());
	for layer in layers {
		layer.validate().inspect_err(|e| warn!("{e}"))?;
		if !seen.insert(layer.name()) {
			warn!("duplicate layer {}", layer.name());
			return Err(DashboardError::DuplicateEntity(layer.name().to_owned()));
		}
	}

	let rows = layers
		.iter()
		.map(|layer| ScoredLayer {
			power_index: layer.score(&weights),
			layer: layer.clone(),
		})
		.collect();
	debug!("scored {} layers with {:?}", layers.len(), weights);
	Ok(IndexTable { weights, rows })
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::registry;
	use crate::scoring::WeightingProfile;

	fn indices(table: &IndexTable) -> Vec<(&str, f64)> {
		table.rows().iter().map(|row| (row.name(), row.power_index())).collect()
	}

	#[test]
	fn balanced_profile_scores() {
		let table = compute_index(&registry::layers(), WeightingProfile::Balanced).unwrap();
		assert_eq!(
			indices(&table),
			[("General", 29.0), ("Enterprise", 46.2), ("Command", 42.2)]
		);
	}

	#[test]
	fn growth_profile_scores() {
		let table = compute_index(&registry::layers(), WeightingProfile::Growth).unwrap();
		assert_eq!(
			indices(&table),
			[("General", 28.0), ("Enterprise", 46.4), ("Command", 45.5)]
		);
	}

	#[test]
	fn market_profile_scores() {
		let table = compute_index(&registry::layers(), WeightingProfile::Market).unwrap();
		assert_eq!(
			indices(&table),
			[("General", 30.0), ("Enterprise", 46.0), ("Command", 38.9)]
		);
	}

	#[test]
	fn profiles_do_not_leak_into_each_other() {
		let layers = registry::layers();
		let growth_alone = compute_index(&layers, WeightingProfile::Growth).unwrap();
		let _ = compute_index(&layers, WeightingProfile::Market).unwrap();
		let growth_after = compute_index(&layers, WeightingProfile::Growth).unwrap();
		assert_eq!(growth_alone, growth_after);
		assert_eq!(layers, registry::layers());
	}

	#[test]
	fn rows_are_scored_independently() {
		let mut layers = registry::layers();
		let before = compute_index(&layers, WeightingProfile::Balanced).unwrap();
		layers[2] = Layer::new("Command", 100.0, 0.0, 3.0);
		let after = compute_index(&layers, WeightingProfile::Balanced).unwrap();
		assert_eq!(before.rows()[..2], after.rows()[..2]);
	}

	#[test]
	fn extremes_follow_weight_sum() {
		let layers = [Layer::new("Zero", 0.0, 0.0, 0.0), Layer::new("Full", 100.0, 100.0, 100.0)];
		let heavy = Weights::new(0.7, 0.6, 0.2);
		for weights in [WeightingProfile::Growth.weights(), heavy] {
			let table = compute_index(&layers, weights).unwrap();
			assert_eq!(table.rows()[0].power_index(), 0.0);
			assert_eq!(table.rows()[1].power_index(), round_tenth(100.0 * weights.total()));
		}
		let table = compute_index(&layers, heavy).unwrap();
		assert_eq!(table.rows()[1].power_index(), 150.0);
	}

	#[test]
	fn ties_round_to_even() {
		let layers = [Layer::new("Low", 1.0, 0.0, 0.0), Layer::new("High", 3.0, 0.0, 0.0)];
		let table = compute_index(&layers, Weights::new(0.25, 0.0, 0.0)).unwrap();
		assert_eq!(indices(&table), [("Low", 0.2), ("High", 0.8)]);
	}

	#[test]
	fn out_of_range_metric_is_rejected() {
		let layers = [Layer::new("Rogue", 35.0, 101.0, 20.0)];
		assert_eq!(
			compute_index(&layers, WeightingProfile::Balanced),
			Err(DashboardError::InvalidEntity {
				layer: "Rogue".into(),
				metric: Metric::Cagr,
				value: 101.0
			})
		);
	}

	#[test]
	fn missing_metric_is_rejected() {
		let layers = [Layer::new("Blank", 35.0, 20.0, f64::NAN)];
		let err = compute_index(&layers, WeightingProfile::Balanced).unwrap_err();
		assert!(matches!(
			err,
			DashboardError::InvalidEntity { metric: Metric::Penetration, .. }
		));
	}

	#[test]
	fn negative_weight_is_rejected() {
		let err = compute_index(&registry::layers(), Weights::new(-0.2, 0.6, 0.6)).unwrap_err();
		assert!(matches!(err, DashboardError::InvalidProfile { component: "w_share", .. }));
	}

	#[test]
	fn duplicate_layer_names_are_rejected() {
		let layers = [Layer::new("General", 1.0, 1.0, 1.0), Layer::new("General", 2.0, 2.0, 2.0)];
		assert_eq!(
			compute_index(&layers, WeightingProfile::Balanced),
			Err(DashboardError::DuplicateEntity("General".into()))
		);
	}

	#[test]
	fn ranking_is_descending() {
		let table = compute_index(&registry::layers(), WeightingProfile::Growth).unwrap();
		let names: Vec<_> = table.ranked().into_iter().map(ScoredLayer::name).collect();
		assert_eq!(names, ["Enterprise", "Command", "General"]);
		assert_eq!(table.get("Command").map(ScoredLayer::power_index), Some(45.5));
		assert_eq!(table.rows()[0].value(Metric::MarketShare), 35.0);
	}
}
