use leptos::prelude::*;
use log::{debug, error, info, trace};

use crate::session::{RunStatus, RunToken, Session, TickOutcome};
use crate::ticker::Ticker;

/// One-line description of where the user is in the select/run cycle.
pub fn status_line(session: &Session) -> String {
	let selection = session.selection();
	match session.status() {
		RunStatus::Running => format!("Running... {} steps so far", session.step_count()),
		RunStatus::Finished {
			reached_destination: true,
		} => format!("Destination reached in {} steps.", session.step_count()),
		RunStatus::Finished {
			reached_destination: false,
		} => format!(
			"Destination is unreachable, explored {} nodes.",
			session.step_count()
		),
		RunStatus::Idle => match (selection.source, selection.dest) {
			(None, _) => "Click a node to choose the source.".to_string(),
			(Some(source), None) => {
				format!("Source is {}. Click another node for the destination.", source)
			}
			(Some(source), Some(dest)) => format!("Ready to search from {} to {}.", source, dest),
		},
	}
}

type Driver = StoredValue<Ticker<IntervalHandle>>;

fn stop(driver: Driver) {
	driver.try_update_value(Ticker::stop);
}

fn advance(session: RwSignal<Session>, driver: Driver, token: RunToken) {
	let outcome = session.try_update(|s| s.tick(token));
	match outcome {
		Some(TickOutcome::Visited(node)) => debug!("Tick visited {}", node),
		Some(TickOutcome::Skipped(node)) => trace!("Tick skipped {}", node),
		Some(TickOutcome::Finished(finish)) => debug!("Tick finished after {} steps", finish.steps),
		Some(TickOutcome::Stale) | None => {}
	}
	driver.try_update_value(|t| t.observe(token, outcome));
}

/// Run / skip / reset buttons, the tick driver and the error alert.
#[component]
pub fn Controls(session: RwSignal<Session>) -> impl IntoView {
	let driver: Driver = StoredValue::new(Ticker::default());
	on_cleanup(move || stop(driver));

	let on_run = move |_| {
		stop(driver);
		let Some(Ok(token)) = session.try_update(Session::start_run) else {
			return;
		};
		let interval = session.with_untracked(|s| s.config().tick_interval);
		match set_interval_with_handle(move || advance(session, driver, token), interval) {
			Ok(handle) => {
				driver.try_update_value(|t| t.start(handle, token));
			}
			Err(err) => error!("Failed to schedule traversal ticks: {:?}", err),
		}
		// First step happens right away, the rest on the interval.
		advance(session, driver, token);
	};

	let on_skip = move |_| {
		stop(driver);
		session.update(|s| {
			s.finish_now();
		});
	};

	let on_reset = move |_| {
		stop(driver);
		session.update(Session::reset);
	};

	let on_regenerate = move |_| {
		stop(driver);
		session.update(|s| {
			if s.regenerate(&mut rand::thread_rng()).is_ok() {
				info!("Graph regenerated");
			}
		});
	};

	let running = move || session.with(Session::is_running);
	let error = move || session.with(|s| s.error().map(ToString::to_string));

	view! {
		<div class="controls">
			<button
				class="button primary"
				on:click=on_run
				disabled=move || !session.with(Session::can_run)
			>
				{move || if running() { "Running..." } else { "Run Algorithm" }}
			</button>
			<button class="button outline" on:click=on_skip disabled=move || !running()>
				"Skip to End"
			</button>
			<button class="button outline" on:click=on_reset>
				"Reset Selection"
			</button>
			<button class="button outline" on:click=on_regenerate>
				"New Graph"
			</button>
		</div>
		<p class="status-line">{move || session.with(status_line)}</p>
		{move || {
			error()
				.map(|message| {
					view! {
						<div class="alert error" role="alert">
							<span>{message}</span>
							<button
								class="button link"
								on:click=move |_| session.update(Session::dismiss_error)
							>
								"Dismiss"
							</button>
						</div>
					}
				})
		}}
	}
}
