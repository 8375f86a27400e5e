use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{error, info};

use crate::components::network_graph::{GraphDocument, NetworkGraphCanvas, fetch_graph};

/// REST endpoint serving the topology document.
const GRAPH_ENDPOINT: &str = "http://127.0.0.1:5001/restapi/network/d3jsgraph";

/// Default Home Page: loads the topology once, then hands it to the canvas.
#[component]
pub fn Home() -> impl IntoView {
	let doc = RwSignal::new(Option::<GraphDocument>::None);
	let load_error = RwSignal::new(Option::<String>::None);

	spawn_local(async move {
		match fetch_graph(GRAPH_ENDPOINT).await {
			Ok(d) => {
				info!(
					"Loaded topology: {} nodes, {} links",
					d.nodes.len(),
					d.links.len()
				);
				doc.set(Some(d));
			}
			Err(e) => {
				error!("Topology fetch failed: {e}");
				load_error.set(Some(e.to_string()));
			}
		}
	});

	view! {
		<div class="graph-page">
			{move || match (load_error.get(), doc.get()) {
				(Some(err), _) => {
					view! {
						<div class="graph-error">
							<h1>"Failed to load topology"</h1>
							<p>{err}</p>
						</div>
					}
						.into_any()
				}
				(None, Some(d)) => {
					view! {
						<div class="graph-frame">
							<NetworkGraphCanvas doc=d />
							<div class="graph-overlay">
								<h1>"Network Topology"</h1>
								<p class="subtitle">"Drag nodes to reposition them."</p>
							</div>
						</div>
					}
						.into_any()
				}
				(None, None) => view! { <p class="graph-loading">"Loading topology..."</p> }.into_any(),
			}}
		</div>
	}
}
