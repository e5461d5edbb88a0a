//! Column names, rounding and the radar-chart table shared by the engines and the UI.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::scoring::IndexTable;

/// A column of the layer table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
	/// Market share, percent.
	MarketShare,
	/// Compound annual growth rate, percent.
	Cagr,
	/// Average industry penetration, percent.
	Penetration,
	/// The derived composite score.
	PowerIndex,
}

impl Metric {
	/// The three raw input columns in table order.
	pub const RAW: [Metric; 3] = [Metric::MarketShare, Metric::Cagr, Metric::Penetration];

	/// Radar chart axes in display order.
	pub const RADAR: [Metric; 4] = [
		Metric::MarketShare,
		Metric::Cagr,
		Metric::Penetration,
		Metric::PowerIndex,
	];

	/// Column header used by charts and exports.
	pub fn label(self) -> &'static str {
		match self {
			Metric::MarketShare => "MarketShare(%)",
			Metric::Cagr => "CAGR(%)",
			Metric::Penetration => "Industry Penetration(%)",
			Metric::PowerIndex => "PowerIndex",
		}
	}
}

impl fmt::Display for Metric {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

/// Round to one decimal place, ties to even on the scaled value.
///
/// `0.25 -> 0.2` and `0.75 -> 0.8`. Mirrors numpy/pandas `round(x, 1)`.
pub fn round_tenth(value: f64) -> f64 {
	(value * 10.0).round_ties_even() / 10.0
}

/// One axis of the radar chart: a metric and each layer's value on it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RadarRow {
	/// Axis.
	pub metric: Metric,
	/// Values in layer column order.
	pub values: Vec<f64>,
}

/// Radar-chart-ready view of an index table, keyed by metric then layer.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RadarTable {
	/// Layer names in column order.
	pub layers: Vec<String>,
	/// One row per [`Metric::RADAR`] axis.
	pub rows: Vec<RadarRow>,
}

impl RadarTable {
	/// Value at (metric, layer), if both exist.
	pub fn value(&self, metric: Metric, layer: &str) -> Option<f64> {
		let column = self.layers.iter().position(|name| name == layer)?;
		self.rows
			.iter()
			.find(|row| row.metric == metric)
			.map(|row| row.values[column])
	}

	/// Series for one layer across all axes, as a radar trace wants it.
	pub fn series(&self, layer: &str) -> Option<Vec<f64>> {
		let column = self.layers.iter().position(|name| name == layer)?;
		Some(self.rows.iter().map(|row| row.values[column]).collect())
	}
}

/// Pivot a scored table into radar form.
pub fn radar_table(table: &IndexTable) -> RadarTable {
	let layers = table.rows().iter().map(|row| row.name().to_owned()).collect();
	let rows = Metric::RADAR
		.into_iter()
		.map(|metric| RadarRow {
			metric,
			values: table.rows().iter().map(|row| row.value(metric)).collect(),
		})
		.collect();
	RadarTable { layers, rows }
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::registry;
	use crate::scoring::{WeightingProfile, compute_index};

	#[test]
	fn rounding_breaks_ties_to_even() {
		assert_eq!(round_tenth(0.25), 0.2);
		assert_eq!(round_tenth(0.75), 0.8);
		assert_eq!(round_tenth(2.5), 2.5);
		assert_eq!(round_tenth(46.2000000001), 46.2);
	}

	#[test]
	fn radar_is_keyed_by_metric_and_layer() {
		let table = compute_index(&registry::layers(), WeightingProfile::Balanced).unwrap();
		let radar = radar_table(&table);

		assert_eq!(radar.layers, ["General", "Enterprise", "Command"]);
		assert_eq!(radar.rows.len(), 4);
		assert_eq!(radar.value(Metric::Cagr, "Command"), Some(55.0));
		assert_eq!(radar.value(Metric::PowerIndex, "Enterprise"), Some(46.2));
		assert_eq!(radar.value(Metric::Cagr, "Nobody"), None);
		assert_eq!(radar.series("General"), Some(vec![35.0, 25.0, 25.0, 29.0]));
	}

	#[test]
	fn metric_labels_match_chart_headers() {
		assert_eq!(Metric::Penetration.to_string(), "Industry Penetration(%)");
		assert_eq!(Metric::RADAR.last(), Some(&Metric::PowerIndex));
	}
}
