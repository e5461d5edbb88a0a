use leptos::prelude::*;

use crate::scoring::{IndexTable, WeightingProfile};
use crate::table::RadarTable;

const LAYER_COLORS: &[&str] = &["#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd"];

/// Bar chart of the power index per layer, plus the ranking.
#[component]
pub fn IndexChart(table: IndexTable, profile: WeightingProfile) -> impl IntoView {
	let title = format!("AI Power Index by Layer, Weight Model: {}", profile.label());

	let bars = table
		.rows()
		.iter()
		.enumerate()
		.map(|(i, row)| {
			let style = format!(
				"height: {}%; background: {};",
				row.power_index().clamp(0.0, 100.0),
				LAYER_COLORS[i % LAYER_COLORS.len()]
			);
			let value = format!("{:.1}", row.power_index());
			let name = row.name().to_owned();
			view! {
				<div class="bar-column">
					<span class="bar-value">{value}</span>
					<div class="bar" style=style></div>
					<span class="bar-label">{name}</span>
				</div>
			}
		})
		.collect_view();

	let ranking = table
		.ranked()
		.into_iter()
		.map(|row| {
			let entry = format!("{} ({:.1})", row.name(), row.power_index());
			view! { <li>{entry}</li> }
		})
		.collect_view();

	view! {
		<section class="index-chart">
			<h3>{title}</h3>
			<div class="bars">{bars}</div>
			<ol class="ranking">{ranking}</ol>
		</section>
	}
}

/// Metric by layer comparison, the data behind the radar chart.
#[component]
pub fn RadarComparison(radar: RadarTable) -> impl IntoView {
	let header = radar
		.layers
		.iter()
		.map(|layer| {
			let layer = layer.clone();
			view! { <th>{layer}</th> }
		})
		.collect_view();

	let rows = radar
		.rows
		.iter()
		.map(|row| {
			let cells = row
				.values
				.iter()
				.map(|value| {
					let value = format!("{value:.1}");
					view! { <td>{value}</td> }
				})
				.collect_view();
			view! {
				<tr>
					<th>{row.metric.label()}</th>
					{cells}
				</tr>
			}
		})
		.collect_view();

	view! {
		<section class="radar-comparison">
			<h3>"AI Comparative Radar (Market vs Growth vs Penetration)"</h3>
			<table>
				<thead>
					<tr>
						<th>"Metric"</th>
						{header}
					</tr>
				</thead>
				<tbody>{rows}</tbody>
			</table>
		</section>
	}
}
