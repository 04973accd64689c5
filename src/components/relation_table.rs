//! Relationship dictionary table.

use leptos::prelude::*;

use super::triple_table::ChunkBar;
use crate::data::{RelationEntry, chunk_bar_ratio};

/// Relation terms with descriptions and chunk counts.
#[component]
pub fn RelationTable(entries: Vec<RelationEntry>) -> impl IntoView {
	let counts: Vec<Option<u32>> = entries.iter().map(|e| e.chunk_count).collect();
	let count = entries.len();
	let body = entries
		.into_iter()
		.map(|entry| {
			let ratio = chunk_bar_ratio(entry.chunk_count, counts.iter().copied());
			let title = entry.description.clone();
			view! {
				<tr>
					<td class="entity">{entry.term_kr}</td>
					<td class="muted">{entry.term_en}</td>
					<td class="description" title=title>{entry.description}</td>
					<td><ChunkBar ratio=ratio count=entry.chunk_count /></td>
				</tr>
			}
		})
		.collect_view();

	view! {
		<div class="table-view">
			<div class="view-header">
				<h2>"관계사전 (Relationship Dictionary)"</h2>
				<span class="muted">{format!("{} 개 관계 유형", count)}</span>
			</div>
			{if count == 0 {
				view! { <p class="empty">"관계 정의 데이터가 없습니다."</p> }.into_any()
			} else {
				view! {
					<table class="data-table">
						<thead>
							<tr>
								<th>"용어(KR)"</th>
								<th>"용어(EN)"</th>
								<th>"설명"</th>
								<th>"청크 수"</th>
							</tr>
						</thead>
						<tbody>{body}</tbody>
					</table>
				}
					.into_any()
			}}
		</div>
	}
}
