use leptos::prelude::*;

use crate::components::influence_graph::{InfluenceGraphCanvas, InfluenceScene};
use crate::components::power_index::{IndexChart, ProfileSelector, RadarComparison};
use crate::config::DEFAULT_SEED;
use crate::error::Result;
use crate::influence::layout;
use crate::registry;
use crate::scoring::{WeightingProfile, compute_index};
use crate::table::radar_table;

/// Graph and layout are computed once per page; the data never changes.
fn influence_scene() -> Result<InfluenceScene> {
	let graph = registry::influence_graph()?;
	let layout = layout(&graph, DEFAULT_SEED);
	Ok(InfluenceScene { graph, layout })
}

/// Dashboard page: index chart driven by the selected profile, and the influence graph.
#[component]
pub fn Home() -> impl IntoView {
	let profile = RwSignal::new(WeightingProfile::default());
	// Every profile change rescored from a fresh copy of the layer table.
	let table = Signal::derive(move || compute_index(&registry::layers(), profile.get()));

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="dashboard">
				<h1>"2030 AI Power Index Dashboard"</h1>
				<h4 class="subtitle">"AI Strength Scoring Model"</h4>
				<ProfileSelector profile=profile />

				<div class="panels">
					{move || {
						table
							.get()
							.map(|table| {
								let radar = radar_table(&table);
								view! {
									<IndexChart table=table profile=profile.get() />
									<RadarComparison radar=radar />
								}
							})
					}}
				</div>

				<div class="influence-panel">
					<h3>"Influence Network"</h3>
					{influence_scene().map(|scene| view! { <InfluenceGraphCanvas scene=scene height=600.0 /> })}
				</div>
			</div>
		</ErrorBoundary>
	}
}
