use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::debug;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent};

use super::render;
use super::state::{InfluenceCanvasState, InfluenceScene};

type SharedState = Rc<RefCell<Option<InfluenceCanvasState>>>;

fn paint(canvas: &HtmlCanvasElement, state: &SharedState) {
	let Ok(Some(ctx)) = canvas.get_context("2d") else {
		return;
	};
	let Ok(ctx) = ctx.dyn_into::<CanvasRenderingContext2d>() else {
		return;
	};
	if let Some(ref s) = *state.borrow() {
		render::render(s, &ctx);
	}
}

fn local_position(canvas: &HtmlCanvasElement, ev: &MouseEvent) -> (f64, f64) {
	let rect = canvas.get_bounding_client_rect();
	(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	)
}

/// Canvas drawing of a laid-out influence graph with pan, zoom and hover highlight.
///
/// Positions come from the scene; the canvas never moves nodes itself, so
/// re-renders of unchanged data look identical.
#[component]
pub fn InfluenceGraphCanvas(
	#[prop(into)] scene: Signal<InfluenceScene>,
	#[prop(optional)] width: Option<f64>,
	#[prop(optional)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: SharedState = Rc::new(RefCell::new(None));

	let state_init = state.clone();
	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let parent = canvas.parent_element();
		let w = width.unwrap_or_else(|| parent.as_ref().map(|p| p.client_width() as f64).unwrap_or(800.0));
		let h = height.unwrap_or_else(|| parent.as_ref().map(|p| p.client_height() as f64).unwrap_or(600.0));
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let scene = scene.get();
		debug!("drawing influence graph with {} nodes", scene.graph.len());
		*state_init.borrow_mut() = Some(InfluenceCanvasState::new(&scene, w, h));
		paint(&canvas, &state_init);
	});

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let (x, y) = local_position(&canvas, &ev);
		if let Some(ref mut s) = *state_md.borrow_mut() {
			s.start_pan(x, y);
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let (x, y) = local_position(&canvas, &ev);
		if let Some(ref mut s) = *state_mm.borrow_mut() {
			if s.pan.active {
				s.pan_to(x, y);
			} else {
				let hovered = s.node_at_position(x, y);
				s.set_hover(hovered);
			}
		}
		paint(&canvas, &state_mm);
	};

	let state_mu = state.clone();
	let on_mouseup = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_mu.borrow_mut() {
			s.pan.active = false;
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.pan.active = false;
			s.set_hover(None);
		}
		if let Some(canvas) = canvas_ref.get() {
			paint(&canvas.into(), &state_ml);
		}
	};

	let state_wh = state.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let (x, y) = local_position(&canvas, &ev);
		if let Some(ref mut s) = *state_wh.borrow_mut() {
			let factor = if ev.delta_y() > 0.0 { 0.9 } else { 1.1 };
			s.zoom_at(x, y, factor);
		}
		paint(&canvas, &state_wh);
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="influence-graph-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:wheel=on_wheel
			style="display: block; cursor: grab;"
		/>
	}
}
