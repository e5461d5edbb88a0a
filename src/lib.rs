//! AI power index dashboard: weighted layer scoring, an attributed influence
//! graph with deterministic layout, and the Leptos client that renders both.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

// Core
pub mod config;
pub mod error;
pub mod influence;
pub mod registry;
pub mod scoring;
pub mod table;

// Presentation
mod components;
mod pages;

pub use error::{DashboardError, Result};
pub use influence::{
	GraphEdge, GraphNode, InfluenceGraph, LayoutEngine, LayoutResult, build_graph, layout,
	node_style, render_edges,
};
pub use scoring::{IndexTable, Layer, WeightingProfile, Weights, compute_index};
pub use table::{Metric, RadarTable, radar_table};

// Top-Level pages
use crate::pages::home::Home;
use crate::pages::not_found::NotFound;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// An app router which renders the dashboard and handles 404's
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />

		// sets the document title
		<Title text="AI Power Index Dashboard 2030" />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Home />
			</Routes>
		</Router>
	}
}
