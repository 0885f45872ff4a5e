pub mod algorithm_panel;
pub mod controls;
pub mod graph_canvas;
pub mod progress_chart;
