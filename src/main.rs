//! CSR entry point: mounts the app into the document body.

use leptos::mount::mount_to_body;

use netviz_canvas::App;

fn main() {
	netviz_canvas::init_logging();
	mount_to_body(App);
}
