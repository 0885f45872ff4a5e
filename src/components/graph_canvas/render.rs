use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::state::{ARROW_SIZE, NODE_RADIUS, edge_segment, node_style};
use crate::graph::NodeId;
use crate::session::Session;

const BACKGROUND: &str = "#f9fafb";
const EDGE_IDLE: &str = "#888";
const EDGE_EXPLORED: &str = "#3b82f6";
const CURRENT_RING: &str = "#1d4ed8";

pub fn render(session: &Session, hovered: Option<NodeId>, ctx: &CanvasRenderingContext2d) {
	let layout = &session.config().layout;
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, layout.width, layout.height);
	draw_edges(session, ctx);
	draw_nodes(session, hovered, ctx);
}

fn draw_edges(session: &Session, ctx: &CanvasRenderingContext2d) {
	let graph = session.graph();
	let dashed = js_sys::Array::of2(&JsValue::from_f64(6.0), &JsValue::from_f64(4.0));
	let solid = js_sys::Array::new();

	for edge in graph.edges() {
		let (Some(from), Some(to)) = (graph.node(edge.source), graph.node(edge.target)) else {
			continue;
		};
		let Some(seg) = edge_segment(from, to) else {
			continue;
		};

		// Edges leaving a visited node have been queued by the traversal.
		let explored = session.is_visited(edge.source);
		let color = if explored { EDGE_EXPLORED } else { EDGE_IDLE };
		let _ = ctx.set_line_dash(if explored { &solid } else { &dashed });

		let (ux, uy) = seg.dir;
		let (tip_x, tip_y) = seg.end;
		let (back_x, back_y) = (tip_x - ux * ARROW_SIZE, tip_y - uy * ARROW_SIZE);

		ctx.set_stroke_style_str(color);
		ctx.set_line_width(2.0);
		ctx.begin_path();
		ctx.move_to(seg.start.0, seg.start.1);
		ctx.line_to(back_x, back_y);
		ctx.stroke();

		let _ = ctx.set_line_dash(&solid);
		ctx.set_fill_style_str(color);
		let (px, py) = (-uy * ARROW_SIZE * 0.5, ux * ARROW_SIZE * 0.5);
		ctx.begin_path();
		ctx.move_to(tip_x, tip_y);
		ctx.line_to(back_x + px, back_y + py);
		ctx.line_to(back_x - px, back_y - py);
		ctx.close_path();
		ctx.fill();
	}
	let _ = ctx.set_line_dash(&solid);
}

fn draw_nodes(session: &Session, hovered: Option<NodeId>, ctx: &CanvasRenderingContext2d) {
	let selection = session.selection();
	let current = if session.is_running() {
		session.current()
	} else {
		None
	};

	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");
	ctx.set_font("bold 12px sans-serif");

	for node in session.graph().nodes() {
		let style = node_style(
			selection,
			node.id,
			session.is_visited(node.id),
			hovered == Some(node.id),
		);

		if current == Some(node.id) {
			ctx.begin_path();
			let _ = ctx.arc(node.x, node.y, NODE_RADIUS + 5.0, 0.0, 2.0 * PI);
			ctx.set_stroke_style_str(CURRENT_RING);
			ctx.set_line_width(2.0);
			ctx.stroke();
		}

		ctx.begin_path();
		let _ = ctx.arc(node.x, node.y, NODE_RADIUS, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(style.fill);
		ctx.fill();
		ctx.set_stroke_style_str(style.stroke);
		ctx.set_line_width(style.line_width);
		ctx.stroke();

		ctx.set_fill_style_str("#333");
		let _ = ctx.fill_text(&node.label, node.x, node.y);
	}
}
