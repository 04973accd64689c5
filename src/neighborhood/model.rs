//! Render-ready node and edge records.

use super::extract::{Neighborhood, NodeRole};
use super::highlight;

/// A node as handed to the layout engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeView {
	pub id: String,
	pub role: NodeRole,
	/// Whether the node id matches the current search term.
	pub is_match: bool,
}

/// A labelled directed edge as handed to the layout engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeView {
	pub source: String,
	pub target: String,
	pub label: String,
}

/// Complete input for one graph rendering.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GraphModel {
	pub nodes: Vec<NodeView>,
	pub edges: Vec<EdgeView>,
}

impl GraphModel {
	pub fn node_count(&self) -> usize {
		self.nodes.len()
	}

	/// Number of nodes currently matching the search term.
	pub fn match_count(&self) -> usize {
		self.nodes.iter().filter(|n| n.is_match).count()
	}
}

/// Convert an extraction into view records, marking search matches.
pub fn build(extraction: &Neighborhood, search_term: &str) -> GraphModel {
	let nodes = extraction
		.nodes
		.iter()
		.map(|n| NodeView {
			id: n.id.clone(),
			role: n.role,
			is_match: highlight::matches(&n.id, search_term),
		})
		.collect();

	let edges = extraction
		.edges
		.iter()
		.map(|e| EdgeView {
			source: e.source.clone(),
			target: e.target.clone(),
			label: e.label.clone(),
		})
		.collect();

	GraphModel { nodes, edges }
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::data::Triple;
	use crate::neighborhood::extract;

	fn sample() -> Neighborhood {
		let triples = vec![
			Triple::new("Heart", "part_of", "Circulatory System"),
			Triple::new("Aorta", "connected_to", "Heart"),
		];
		extract(&triples, Some("Heart"), 1)
	}

	#[test]
	fn test_empty_term_matches_everything() {
		let model = build(&sample(), "");
		assert_eq!(model.node_count(), 3);
		assert_eq!(model.match_count(), 3);
	}

	#[test]
	fn test_term_marks_without_removing() {
		let model = build(&sample(), "heart");
		assert_eq!(model.node_count(), 3);
		assert_eq!(model.edges.len(), 2);
		let matched: Vec<&str> = model
			.nodes
			.iter()
			.filter(|n| n.is_match)
			.map(|n| n.id.as_str())
			.collect();
		assert_eq!(matched, ["Heart"]);
	}

	#[test]
	fn test_roles_and_labels_pass_through() {
		let model = build(&sample(), "");
		assert_eq!(model.nodes[0].role, NodeRole::Center);
		assert!(model.nodes[1..].iter().all(|n| n.role == NodeRole::Neighbor));
		assert_eq!(model.edges[1].source, "Aorta");
		assert_eq!(model.edges[1].target, "Heart");
		assert_eq!(model.edges[1].label, "connected_to");
	}

	#[test]
	fn test_empty_extraction_builds_empty_model() {
		let model = build(&Neighborhood::default(), "x");
		assert_eq!(model, GraphModel::default());
	}
}
