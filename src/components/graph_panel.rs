//! Graph panel: center header, search and depth controls, and the canvas.

use leptos::prelude::*;

use super::force_graph::ForceGraphCanvas;
use crate::config::ExplorerConfig;
use crate::neighborhood::{GraphModel, SearchState};

/// Neighborhood graph of the selected entity with its search controls.
///
/// `search` is owned by the caller so the extraction can follow depth changes.
#[component]
pub fn GraphPanel(
	#[prop(into)] model: Signal<GraphModel>,
	#[prop(into)] center: Signal<Option<String>>,
	search: RwSignal<SearchState>,
	on_node_select: Callback<String>,
) -> impl IntoView {
	let config = use_context::<ExplorerConfig>().unwrap_or_default();
	let (min_depth, max_depth) = (config.min_depth, config.max_depth);
	let config = StoredValue::new(config);

	let on_term = move |ev: web_sys::Event| {
		let term = event_target_value(&ev);
		search.update(|s| s.term = term);
	};
	let on_depth = move |ev: web_sys::Event| {
		let depth = config.with_value(|c| c.parse_depth(&event_target_value(&ev)));
		config.with_value(|c| search.update(|s| s.set_depth(depth, c)));
	};

	let title = move || match center.get() {
		Some(id) => id,
		None => "엔티티를 선택하세요".to_string(),
	};
	let count = move || format!("{}개", model.with(GraphModel::node_count));

	view! {
		<section class="graph-panel">
			<header class="graph-header">
				<div class="graph-title">
					<h2>{title}</h2>
					<span class="node-count">{count}</span>
				</div>
				<div class="graph-controls">
					<input
						type="search"
						class="graph-search"
						placeholder="노드 검색"
						prop:value=move || search.with(|s| s.term.clone())
						on:input=on_term
					/>
					<label class="depth-control">
						"깊이"
						<input
							type="number"
							min=min_depth
							max=max_depth
							prop:value=move || search.with(|s| s.depth).to_string()
							on:change=on_depth
						/>
					</label>
				</div>
			</header>
			<div class="graph-container">
				<Show
					when=move || center.with(Option::is_some)
					fallback=|| view! { <p class="empty">"표에서 엔티티를 클릭하면 주변 그래프가 표시됩니다."</p> }
				>
					<ForceGraphCanvas data=model on_node_select=on_node_select />
				</Show>
			</div>
			<p class="graph-hint">"드래그로 노드 이동, 휠로 확대/축소, 더블클릭으로 중심 변경"</p>
		</section>
	}
}
