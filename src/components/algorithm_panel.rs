use leptos::prelude::*;
use log::warn;

use crate::algorithm::Algorithm;
use crate::session::Session;

/// Algorithm selector plus a short description of the current choice.
#[component]
pub fn AlgorithmPanel(session: RwSignal<Session>) -> impl IntoView {
	let algorithm = Memo::new(move |_| session.with(Session::algorithm));

	let on_change = move |ev: leptos::ev::Event| match event_target_value(&ev).parse::<Algorithm>() {
		Ok(choice) => session.update(|s| s.set_algorithm(choice)),
		Err(err) => warn!("{}", err),
	};

	let options = Algorithm::ALL
		.into_iter()
		.map(|a| {
			let suffix = (!a.is_runnable()).then_some(" (not yet available)");
			view! { <option value=a.key()>{a.name()}{suffix}</option> }
		})
		.collect_view();

	view! {
		<div class="algorithm-panel">
			<select
				class="algorithm-select"
				on:change=on_change
				prop:value=move || algorithm.get().key()
				disabled=move || session.with(Session::is_running)
			>
				{options}
			</select>
			<div class="alert" role="alert">
				<h2 class="alert-title">{move || algorithm.get().name()}</h2>
				<p class="alert-description">
					{move || algorithm.get().description()}
					<br />
					"Time Complexity: "
					{move || algorithm.get().complexity()}
				</p>
				<Show when=move || !algorithm.get().is_runnable()>
					<p class="alert-note">
						"Only breadth-first search can be animated at the moment."
					</p>
				</Show>
			</div>
		</div>
	}
}
