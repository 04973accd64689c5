//! KN Type table: the triples of the active category.

use leptos::prelude::*;

use crate::data::{KnTypeRow, chunk_bar_ratio};

/// Relative chunk-count bar shared by the list views.
#[component]
pub fn ChunkBar(ratio: f64, count: Option<u32>) -> impl IntoView {
	view! {
		<div class="chunk-bar">
			<div class="chunk-track">
				<div class="chunk-fill" style:width=format!("{}%", ratio * 100.0)></div>
			</div>
			<span class="chunk-count">{count.unwrap_or(0)}</span>
		</div>
	}
}

/// Subject-relation-object rows. Clicking an entity makes it the graph center.
#[component]
pub fn TripleTable(
	#[prop(into)] rows: Signal<Vec<KnTypeRow>>,
	#[prop(into)] selected: Signal<Option<String>>,
	on_select: Callback<String>,
) -> impl IntoView {
	let entity_cell = move |id: String| {
		let is_selected = {
			let id = id.clone();
			move || selected.get().as_deref() == Some(id.as_str())
		};
		let target = id.clone();
		view! {
			<td class="entity" class:selected=is_selected on:click=move |_| on_select.run(target.clone())>
				{id}
			</td>
		}
	};

	view! {
		<div class="table-view">
			<div class="view-header">
				<h2>"놀런타입 (KN Type)"</h2>
				<span class="muted">{move || format!("{} 개 타입 정의", rows.with(Vec::len))}</span>
			</div>
			<Show
				when=move || rows.with(|r| !r.is_empty())
				fallback=|| view! { <p class="empty">"이 카테고리에는 놀런타입 데이터가 없습니다."</p> }
			>
				<table class="data-table">
					<thead>
						<tr>
							<th>"주어 (Subject)"</th>
							<th>"관계 (Relation)"</th>
							<th>"목적어 (Object)"</th>
							<th>"청크 수"</th>
						</tr>
					</thead>
					<tbody>
						{move || {
							let rows = rows.get();
							let counts: Vec<Option<u32>> = rows.iter().map(|r| r.chunk_count).collect();
							rows.into_iter()
								.map(|row| {
									let ratio = chunk_bar_ratio(row.chunk_count, counts.iter().copied());
									view! {
										<tr>
											{entity_cell(row.triple.subject)}
											<td><span class="relation-tag">{row.triple.relation}</span></td>
											{entity_cell(row.triple.object)}
											<td><ChunkBar ratio=ratio count=row.chunk_count /></td>
										</tr>
									}
								})
								.collect_view()
						}}
					</tbody>
				</table>
			</Show>
		</div>
	}
}
