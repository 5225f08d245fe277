use leptos::prelude::*;
use log::{error, warn};

use crate::components::network::{GraphDocument, NetworkCanvas, NetworkOptions, scale};
use crate::components::props::NetworkConfig;
use crate::datasets::{DatasetKey, Datasets};

/// Default Home Page: the dataset explorer over the preloaded documents.
#[component]
pub fn Home() -> impl IntoView {
	match Datasets::load() {
		Ok(store) => view! { <NetworkExplorer store=store /> }.into_any(),
		Err(err) => {
			error!("could not load graph datasets: {err}");
			view! {
				<main class="load-error">
					<h1>"Could not load graph data"</h1>
					<p>{err.to_string()}</p>
				</main>
			}
			.into_any()
		}
	}
}

#[component]
fn NetworkExplorer(store: Datasets) -> impl IntoView {
	let store = StoredValue::new(store);
	let (dataset, set_dataset) = signal(DatasetKey::Data);
	let (colorscheme, set_colorscheme) = signal(Some("Portland".to_owned()));
	let (selected, set_selected) = signal(None::<String>);

	let document: Memo<GraphDocument> = Memo::new(move |_| {
		store.with_value(|s| s.select(dataset.get(), colorscheme.get().as_deref()))
	});

	// Run the widget configuration through its property contract before
	// mounting; a contract violation surfaces in the error boundary below.
	let resolved = NetworkConfig {
		id: Some("net".to_owned()),
		data: Some(document.get_untracked()),
		height: Some(550.0),
		node_radius: Some(17.0),
		..Default::default()
	}
	.resolve();

	let on_dataset_change = move |ev: web_sys::Event| {
		let raw = event_target_value(&ev);
		match raw.parse::<DatasetKey>() {
			Ok(key) => set_dataset.set(key),
			// Fail closed: unknown keys keep the current document on screen.
			Err(err) => warn!("{err}; keeping `{}`", dataset.get_untracked()),
		}
	};
	let on_scheme_change = move |ev: web_sys::Event| {
		let raw = event_target_value(&ev);
		set_colorscheme.set((!raw.is_empty()).then_some(raw));
	};

	let selection_summary = move || {
		selected.get().map(|id| {
			let doc = document.get();
			format!(
				"You selected node \"{}\" on a graph with {} nodes and {} links",
				id,
				doc.nodes.len(),
				doc.links.len()
			)
		})
	};

	view! {
		<main class="explorer">
			<select
				class="explorer-dropdown"
				prop:value=move || dataset.get().as_str().to_owned()
				on:change=on_dataset_change
			>
				{DatasetKey::ALL
					.iter()
					.map(|key| view! { <option value=key.as_str()>{key.as_str()}</option> })
					.collect_view()}
			</select>
			<select
				class="explorer-dropdown"
				prop:value=move || colorscheme.get().unwrap_or_default()
				on:change=on_scheme_change
			>
				<option value="">"Select aggregation colorscale."</option>
				{scale::NAMES
					.iter()
					.map(|name| view! { <option value=*name>{*name}</option> })
					.collect_view()}
			</select>
			<h2>"Click a node to expand it, or the background to return"</h2>
			<div class="row" style="text-align: center;">
				<ErrorBoundary fallback=|errors| {
					view! {
						<h1>"Uh oh! Something went wrong!"</h1>

						<p>"Errors: "</p>
						<ul>
							{move || {
								errors
									.get()
									.into_iter()
									.map(|(_, e)| view! { <li>{e.to_string()}</li> })
									.collect_view()
							}}
						</ul>
					}
				}>
					{resolved
						.map(|_| {
							view! {
								<NetworkCanvas
									id=Some("net".to_owned())
									data=document
									height=Some(550.0)
									options=NetworkOptions {
										node_radius: 17.0,
										..Default::default()
									}
									on_select=Callback::new(move |id| set_selected.set(id))
								/>
							}
						})}
				</ErrorBoundary>
			</div>
			<p class="selection-summary">{selection_summary}</p>
		</main>
	}
}
