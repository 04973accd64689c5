//! Concept dictionary table of the active category.

use leptos::prelude::*;

use super::triple_table::ChunkBar;
use crate::data::{ConceptEntry, chunk_bar_ratio};

/// Category terms with their synonyms and chunk counts.
#[component]
pub fn DictionaryTable(#[prop(into)] entries: Signal<Vec<ConceptEntry>>) -> impl IntoView {
	view! {
		<div class="table-view">
			<div class="view-header">
				<h2>"개념사전 (Concept Dictionary)"</h2>
				<span class="muted">{move || format!("{} 개 용어", entries.with(Vec::len))}</span>
			</div>
			<Show
				when=move || entries.with(|e| !e.is_empty())
				fallback=|| view! { <p class="empty">"이 카테고리에는 사전 데이터가 없습니다."</p> }
			>
				<table class="data-table">
					<thead>
						<tr>
							<th>"용어(KR)"</th>
							<th>"용어(EN)"</th>
							<th>"설명"</th>
							<th>"유의어"</th>
							<th>"청크 수"</th>
						</tr>
					</thead>
					<tbody>
						{move || {
							let entries = entries.get();
							let counts: Vec<Option<u32>> = entries.iter().map(|e| e.chunk_count).collect();
							entries
								.into_iter()
								.map(|entry| {
									let ratio = chunk_bar_ratio(entry.chunk_count, counts.iter().copied());
									let title = entry.description.clone();
									let synonyms = entry
										.synonyms
										.into_iter()
										.map(|s| view! { <span class="synonym-chip">{s}</span> })
										.collect_view();
									view! {
										<tr>
											<td class="term">{entry.term_kr}</td>
											<td class="muted">{entry.term_en}</td>
											<td class="description" title=title>{entry.description}</td>
											<td><div class="synonyms">{synonyms}</div></td>
											<td><ChunkBar ratio=ratio count=entry.chunk_count /></td>
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
