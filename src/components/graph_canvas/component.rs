use leptos::prelude::*;
use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use super::render;
use super::state::node_at_position;
use crate::graph::NodeId;
use crate::session::Session;

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok().flatten()?.dyn_into().ok()
}

fn event_position(canvas: &HtmlCanvasElement, ev: &MouseEvent) -> (f64, f64) {
	let rect = canvas.get_bounding_client_rect();
	// The drawing buffer may be scaled by CSS.
	let (sx, sy) = (
		canvas.width() as f64 / rect.width().max(1.0),
		canvas.height() as f64 / rect.height().max(1.0),
	);
	(
		(ev.client_x() as f64 - rect.left()) * sx,
		(ev.client_y() as f64 - rect.top()) * sy,
	)
}

/// Canvas view of the session graph. Clicking a node selects it.
#[component]
pub fn GraphCanvas(session: RwSignal<Session>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let hovered = RwSignal::new(None::<NodeId>);

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let hovered = hovered.get();
		session.with(|s| {
			let layout = &s.config().layout;
			canvas.set_width(layout.width as u32);
			canvas.set_height(layout.height as u32);
			if let Some(ctx) = context_2d(&canvas) {
				render::render(s, hovered, &ctx);
			}
		});
	});

	let hit = move |ev: &MouseEvent| -> Option<NodeId> {
		let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
		let (x, y) = event_position(&canvas, ev);
		session.with_untracked(|s| node_at_position(s.graph(), x, y))
	};

	let on_click = move |ev: MouseEvent| {
		let Some(id) = hit(&ev) else {
			return;
		};
		debug!("Clicked {}", id);
		session.update(|s| {
			let _ = s.select(id);
		});
	};

	let on_mousemove = move |ev: MouseEvent| {
		let node = hit(&ev);
		if hovered.get_untracked() != node {
			hovered.set(node);
		}
	};

	let on_mouseleave = move |_: MouseEvent| hovered.set(None);

	view! {
		<canvas
			node_ref=canvas_ref
			class="graph-canvas"
			on:click=on_click
			on:mousemove=on_mousemove
			on:mouseleave=on_mouseleave
			style:cursor=move || if hovered.get().is_some() { "pointer" } else { "default" }
		/>
	}
}
