//! Neighborhood pipeline: extraction, view building and search marking.
//!
//! Every stage is a pure function of its inputs so the explorer can recompute
//! on each change of center, depth, search term or triple set:
//!
//! ```text
//! triples ──extract──▶ Neighborhood ──build──▶ GraphModel ──highlight──▶ GraphModel
//! ```

mod extract;
pub mod highlight;
mod model;

pub use extract::{Edge, NeighborNode, Neighborhood, NodeRole, extract};
pub use model::{EdgeView, GraphModel, NodeView, build};

use crate::config::ExplorerConfig;

/// Ephemeral search controls of the graph panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchState {
	pub term: String,
	pub depth: u32,
}

impl SearchState {
	pub fn new(config: &ExplorerConfig) -> Self {
		Self {
			term: String::new(),
			depth: config.clamp_depth(config.default_depth),
		}
	}

	/// Set the depth, clamped to the configured bounds.
	pub fn set_depth(&mut self, depth: u32, config: &ExplorerConfig) {
		self.depth = config.clamp_depth(depth);
	}
}

/// Re-mark an existing model for a new search term without re-extracting.
pub fn restyle(model: &GraphModel, term: &str) -> GraphModel {
	GraphModel {
		nodes: highlight::apply(&model.nodes, term),
		edges: model.edges.clone(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_search_state_defaults_and_clamps() {
		let config = ExplorerConfig::default();
		let mut state = SearchState::new(&config);
		assert_eq!(state.depth, 2);
		assert!(state.term.is_empty());

		state.set_depth(0, &config);
		assert_eq!(state.depth, 1);
		state.set_depth(9, &config);
		assert_eq!(state.depth, 5);
	}

	#[test]
	fn test_restyle_matches_fresh_build() {
		let triples = vec![
			crate::data::Triple::new("A", "r1", "B"),
			crate::data::Triple::new("B", "r2", "C"),
		];
		let extraction = extract(&triples, Some("A"), 2);
		let base = build(&extraction, "");
		assert_eq!(restyle(&base, "b"), build(&extraction, "b"));
	}
}
