//! Non-destructive search marking.
//!
//! Nodes are flagged rather than filtered so that the displayed graph stays
//! connected while a search term is active.

use super::model::NodeView;

/// Case-insensitive substring test. An empty term matches every id.
pub fn matches(id: &str, term: &str) -> bool {
	term.is_empty() || id.to_lowercase().contains(&term.to_lowercase())
}

/// Recompute `is_match` for every node, returning fresh records.
pub fn apply(nodes: &[NodeView], term: &str) -> Vec<NodeView> {
	nodes
		.iter()
		.map(|n| NodeView {
			is_match: matches(&n.id, term),
			..n.clone()
		})
		.collect()
}
