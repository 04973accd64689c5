//! kn-explorer: browser explorer for KN-Type ontology triples.
//!
//! The explorer lists the concept dictionary and triples of a category, the
//! relationship dictionary, and the depth-limited neighborhood of a selected entity as an interactive
//! force-directed graph.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, debug, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;
pub mod config;
pub mod data;
pub mod neighborhood;

use components::{CategoryNav, DictionaryTable, GraphPanel, RelationTable, TripleTable};
use config::ExplorerConfig;
use data::{DataError, KnStore, TripleSource};
use neighborhood::{SearchState, build, extract, restyle};

pub use components::force_graph::ForceGraphCanvas;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("kn-explorer: logging initialized");
}

/// Load the dataset from the `<script type="application/json">` element `element_id`.
pub fn load_store(element_id: &str) -> data::Result<KnStore> {
	let missing = || DataError::MissingElement(element_id.to_string());
	let window: Window = web_sys::window().ok_or_else(missing)?;
	let document = window.document().ok_or_else(missing)?;
	let element = document.get_element_by_id(element_id).ok_or_else(missing)?;
	let script: HtmlScriptElement = element.dyn_into().map_err(|_| missing())?;
	let json_text = script.text().map_err(|_| missing())?;

	let store = KnStore::from_json(&json_text)?;
	info!(
		"kn-explorer: loaded {} categories, {} kn-type rows, {} relations",
		store.categories().len(),
		store.row_count(),
		store.relationship_dictionary().len()
	);
	Ok(store)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tab {
	Dictionary,
	KnType,
	Relations,
}

/// Main application component.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = ExplorerConfig::default();
	provide_context(config.clone());

	let store = load_store(config.data_element_id).unwrap_or_else(|e| {
		warn!("kn-explorer: starting with an empty dataset: {}", e);
		KnStore::default()
	});
	let categories = store.categories().to_vec();
	let relations = store.relationship_dictionary().to_vec();
	let initial_category = store.first_category().map(|c| c.id.clone());
	let store = StoredValue::new(store);

	let active_category = RwSignal::new(initial_category);
	let center = RwSignal::new(None::<String>);
	let search = RwSignal::new(SearchState::new(&config));
	let tab = RwSignal::new(Tab::Dictionary);

	let concepts = Memo::new(move |_| {
		active_category
			.get()
			.map(|cat| store.with_value(|s| s.dictionary(&cat).to_vec()))
			.unwrap_or_default()
	});
	let rows = Memo::new(move |_| {
		active_category
			.get()
			.map(|cat| store.with_value(|s| s.kn_types(&cat).to_vec()))
			.unwrap_or_default()
	});
	let triples = Memo::new(move |_| {
		active_category
			.get()
			.map(|cat| store.with_value(|s| s.triples(&cat)))
			.unwrap_or_default()
	});
	let depth = Memo::new(move |_| search.with(|s| s.depth));
	let term = Memo::new(move |_| search.with(|s| s.term.clone()));

	let extraction = Memo::new(move |_| {
		let center = center.get();
		let depth = depth.get();
		let result = triples.with(|t| extract(t, center.as_deref(), depth));
		debug!(
			"kn-explorer: neighborhood of {:?} at depth {}: {} nodes, {} edges",
			center,
			depth,
			result.node_count(),
			result.edges.len()
		);
		result
	});
	// Unmarked model; a term change only re-marks it.
	let base_model = Memo::new(move |_| extraction.with(|e| build(e, "")));
	let model = Memo::new(move |_| {
		let term = term.get();
		base_model.with(|m| restyle(m, &term))
	});

	let on_category = Callback::new(move |id: String| {
		active_category.set(Some(id));
		center.set(None);
	});
	let on_entity = Callback::new(move |id: String| center.set(Some(id)));

	view! {
		<Html attr:lang="ko" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Knowlearn Ontology Explorer" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="explorer">
			<CategoryNav categories=categories active=active_category on_select=on_category />
			<main class="content">
				<div class="tabs">
					<button
						class="tab"
						class:active=move || tab.get() == Tab::Dictionary
						on:click=move |_| tab.set(Tab::Dictionary)
					>
						"개념사전"
					</button>
					<button
						class="tab"
						class:active=move || tab.get() == Tab::KnType
						on:click=move |_| tab.set(Tab::KnType)
					>
						"놀런타입"
					</button>
					<button
						class="tab"
						class:active=move || tab.get() == Tab::Relations
						on:click=move |_| tab.set(Tab::Relations)
					>
						"관계사전"
					</button>
				</div>
				<div class="tab-body" class:hidden=move || tab.get() != Tab::Dictionary>
					<DictionaryTable entries=concepts />
				</div>
				<div class="tab-body" class:hidden=move || tab.get() != Tab::KnType>
					<TripleTable rows=rows selected=center on_select=on_entity />
				</div>
				<div class="tab-body" class:hidden=move || tab.get() != Tab::Relations>
					<RelationTable entries=relations />
				</div>
			</main>
			<GraphPanel model=model center=center search=search on_node_select=on_entity />
		</div>
	}
}
