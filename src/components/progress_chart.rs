use leptos::prelude::*;

use crate::session::ProgressPoint;

const WIDTH: f64 = 480.0;
const HEIGHT: f64 = 200.0;
const PAD: f64 = 30.0;

/// SVG `points` for the visited-count line, scaled into the plot area.
pub fn polyline_points(history: &[ProgressPoint], width: f64, height: f64, pad: f64) -> String {
	let max_step = history.iter().map(|p| p.step).max().unwrap_or(0).max(1) as f64;
	let max_visited = history.iter().map(|p| p.visited).max().unwrap_or(0).max(1) as f64;
	let (plot_w, plot_h) = (width - 2.0 * pad, height - 2.0 * pad);

	history
		.iter()
		.map(|p| {
			let x = pad + p.step as f64 / max_step * plot_w;
			let y = height - pad - p.visited as f64 / max_visited * plot_h;
			format!("{:.1},{:.1}", x, y)
		})
		.collect::<Vec<_>>()
		.join(" ")
}

/// Visited nodes plotted against step count.
#[component]
pub fn ProgressChart(#[prop(into)] history: Signal<Vec<ProgressPoint>>) -> impl IntoView {
	let points = move || history.with(|h| polyline_points(h, WIDTH, HEIGHT, PAD));
	let last = move || history.with(|h| h.last().copied());

	view! {
		<svg
			class="progress-chart"
			width=WIDTH.to_string()
			height=HEIGHT.to_string()
			viewBox=format!("0 0 {} {}", WIDTH, HEIGHT)
		>
			<line
				x1=PAD.to_string()
				y1=(HEIGHT - PAD).to_string()
				x2=(WIDTH - PAD).to_string()
				y2=(HEIGHT - PAD).to_string()
				stroke="#ccc"
			/>
			<line
				x1=PAD.to_string()
				y1=PAD.to_string()
				x2=PAD.to_string()
				y2=(HEIGHT - PAD).to_string()
				stroke="#ccc"
			/>
			<text x=(WIDTH - PAD).to_string() y=(HEIGHT - 8.0).to_string() text-anchor="end">
				"step"
			</text>
			<text x="4" y=(PAD - 10.0).to_string()>
				"visited"
			</text>
			<polyline points=points fill="none" stroke="#8884d8" stroke-width="2" />
		</svg>
		<p class="progress-legend">
			{move || match last() {
				Some(p) => format!("Step {} · {} visited", p.step, p.visited),
				None => "No run yet".to_string(),
			}}
		</p>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn scales_into_plot_area() {
		let history = [
			ProgressPoint {
				step: 0,
				visited: 0,
			},
			ProgressPoint {
				step: 2,
				visited: 2,
			},
		];
		assert_eq!(
			polyline_points(&history, 100.0, 60.0, 10.0),
			"10.0,50.0 90.0,10.0"
		);
	}

	#[test]
	fn empty_and_single_point() {
		assert_eq!(polyline_points(&[], 100.0, 60.0, 10.0), "");
		let start = [ProgressPoint {
			step: 0,
			visited: 0,
		}];
		assert_eq!(polyline_points(&start, 100.0, 60.0, 10.0), "10.0,50.0");
	}
}
