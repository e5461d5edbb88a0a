use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::state::InfluenceCanvasState;

/// Ties at or below this strength are drawn dashed.
const WEAK_TIE: f64 = 0.4;

pub fn render(state: &InfluenceCanvasState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str("#0a0d14");
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	draw_edges(state, ctx);
	draw_nodes(state, ctx);
	ctx.restore();
}

fn draw_edges(state: &InfluenceCanvasState, ctx: &CanvasRenderingContext2d) {
	let k = state.transform.k;
	let dimmed = state.has_active_highlight();

	for edge in &state.edges {
		let lit = state.is_highlighted(edge.a) && state.is_highlighted(edge.b);
		let alpha = match (dimmed, lit) {
			(false, _) => 0.35 + 0.5 * edge.weight,
			(true, true) => 0.95,
			(true, false) => 0.1,
		};

		ctx.set_stroke_style_str(&format!("rgba(156, 163, 175, {})", alpha));
		ctx.set_line_width((0.5 + 3.0 * edge.weight) / k);
		if edge.weight <= WEAK_TIE {
			let _ = ctx.set_line_dash(&js_sys::Array::of2(
				&JsValue::from_f64(6.0 / k),
				&JsValue::from_f64(4.0 / k),
			));
		} else {
			let _ = ctx.set_line_dash(&js_sys::Array::new());
		}

		ctx.begin_path();
		ctx.move_to(edge.from.x, edge.from.y);
		ctx.line_to(edge.to.x, edge.to.y);
		ctx.stroke();
	}
	let _ = ctx.set_line_dash(&js_sys::Array::new());
}

fn draw_nodes(state: &InfluenceCanvasState, ctx: &CanvasRenderingContext2d) {
	let k = state.transform.k;
	let dimmed = state.has_active_highlight();
	ctx.set_font(&format!("{}px sans-serif", 11.0 / k.max(0.5)));

	for (idx, node) in state.nodes.iter().enumerate() {
		let (x, y, radius) = (node.pos.x, node.pos.y, node.style.size);
		let alpha = if dimmed && !state.is_highlighted(idx) {
			0.25
		} else {
			1.0
		};

		ctx.set_global_alpha(alpha);
		ctx.begin_path();
		let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(node.style.color);
		ctx.fill();

		if state.hover.node == Some(idx) {
			ctx.set_stroke_style_str("rgba(255, 255, 255, 0.8)");
			ctx.set_line_width(2.0 / k);
			ctx.stroke();
		}

		ctx.set_fill_style_str("rgba(255, 255, 255, 0.85)");
		let _ = ctx.fill_text(&node.style.label, x + radius + 3.0, y + 4.0);
		ctx.set_global_alpha(1.0);
	}
}
