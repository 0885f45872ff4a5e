use leptos::prelude::*;
use leptos_router::hooks::use_query_map;
use log::info;

use crate::components::algorithm_panel::AlgorithmPanel;
use crate::components::controls::Controls;
use crate::components::graph_canvas::GraphCanvas;
use crate::components::progress_chart::ProgressChart;
use crate::config::PlatformConfig;
use crate::graph::GraphError;
use crate::session::Session;

#[component]
fn Platform(session: RwSignal<Session>) -> impl IntoView {
	let history = Signal::derive(move || session.with(|s| s.history().to_vec()));
	let visit_order = move || {
		session.with(|s| {
			s.visited()
				.iter()
				.map(ToString::to_string)
				.collect::<Vec<_>>()
				.join(" → ")
		})
	};

	view! {
		<div class="platform">
			<h1>"Interactive Graph Algorithm Learning Platform"</h1>
			<AlgorithmPanel session=session />
			<div class="graph-frame">
				<GraphCanvas session=session />
			</div>
			<Controls session=session />
			<section class="progress">
				<h2>"Algorithm Progress"</h2>
				<p class="visit-order">{visit_order}</p>
				<ProgressChart history=history />
			</section>
		</div>
	}
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let query = use_query_map();
	let content = query
		.with_untracked(|q| PlatformConfig::from_params(|key| q.get(key)))
		.map_err(GraphError::from)
		.and_then(|config| Session::generate(config, &mut rand::thread_rng()))
		.map(|session| {
			info!("Session ready with {} nodes", session.graph().len());
			let session = RwSignal::new(session);
			view! { <Platform session=session /> }
		});

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<div class="error-text">
					<h1>"Unable to build the graph"</h1>
					<ul>
						{move || {
							errors
								.get()
								.into_iter()
								.map(|(_, e)| view! { <li>{e.to_string()}</li> })
								.collect_view()
						}}
					</ul>
				</div>
			}
		}>{content}</ErrorBoundary>
	}
}
