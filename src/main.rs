//! Binary entry point: mounts the network explorer app.

use network_canvas::{App, init_logging};

fn main() {
	init_logging();
	leptos::mount::mount_to_body(App);
}
