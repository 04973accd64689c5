//! Category navigation sidebar.

use leptos::prelude::*;

use crate::data::{Category, filter_categories};

/// Lists the dataset categories with a name filter and marks the active one.
#[component]
pub fn CategoryNav(
	categories: Vec<Category>,
	#[prop(into)] active: Signal<Option<String>>,
	on_select: Callback<String>,
) -> impl IntoView {
	let categories = StoredValue::new(categories);
	let (query, set_query) = signal(String::new());

	let visible = move || {
		let q = query.get();
		categories.with_value(|all| {
			filter_categories(all, &q)
				.into_iter()
				.cloned()
				.collect::<Vec<_>>()
		})
	};

	view! {
		<nav class="lnb">
			<div class="lnb-header">
				<h1>"Knowlearn Ontology"</h1>
				<p class="subtitle">"Ontology-RAG Explorer"</p>
			</div>
			<input
				type="text"
				class="lnb-search"
				placeholder="카테고리 검색"
				prop:value=move || query.get()
				on:input=move |ev| set_query.set(event_target_value(&ev))
			/>
			<Show
				when=move || !visible().is_empty()
				fallback=move || {
					view! {
						<p class="empty">
							{move || {
								if query.get().is_empty() {
									"카테고리가 없습니다."
								} else {
									"검색 결과가 없습니다."
								}
							}}
						</p>
					}
				}
			>
				<ul class="lnb-list">
					{move || {
						visible()
							.into_iter()
							.map(|category| {
								let id = category.id.clone();
								let is_active = {
									let id = id.clone();
									move || active.get().as_deref() == Some(id.as_str())
								};
								view! {
									<li>
										<button
											class="lnb-item"
											class:active=is_active
											on:click=move |_| on_select.run(id.clone())
										>
											{category.name}
										</button>
									</li>
								}
							})
							.collect_view()
					}}
				</ul>
			</Show>
		</nav>
	}
}
