//! Browser entry point: mounts the platform into the page body.

use graph_algorithm_platform::{App, init_logging};

fn main() {
	init_logging();
	leptos::mount::mount_to_body(App)
}
