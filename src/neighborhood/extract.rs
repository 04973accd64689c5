//! Bounded-depth neighborhood extraction over a triple list.
//!
//! Expansion is level-synchronized: each iteration takes every triple touching
//! the current frontier, records it as an edge, and promotes unvisited opposite
//! endpoints into the next frontier. An incidence index built once per call
//! keeps each iteration proportional to the frontier's degree. Within an
//! iteration edges are emitted in triple order.

use std::collections::{BTreeSet, HashMap, HashSet};

use crate::data::Triple;

/// Role of a node relative to the traversal origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeRole {
	Center,
	Neighbor,
}

/// A node discovered by the traversal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NeighborNode {
	pub id: String,
	pub role: NodeRole,
}

/// A directed edge derived from one triple occurrence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edge {
	pub source: String,
	pub target: String,
	pub label: String,
	/// Position of the originating triple in the input list.
	pub origin: usize,
}

/// Nodes and edges reachable from a center within the depth bound.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Neighborhood {
	pub nodes: Vec<NeighborNode>,
	pub edges: Vec<Edge>,
}

impl Neighborhood {
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	pub fn node_count(&self) -> usize {
		self.nodes.len()
	}

	pub fn center(&self) -> Option<&NeighborNode> {
		self.nodes.iter().find(|n| n.role == NodeRole::Center)
	}
}

/// Map from node id to the positions of well-formed triples touching it.
fn incidence_index(triples: &[Triple]) -> HashMap<&str, Vec<usize>> {
	let mut index: HashMap<&str, Vec<usize>> = HashMap::new();
	for (i, triple) in triples.iter().enumerate() {
		if !triple.is_well_formed() {
			continue;
		}
		index.entry(triple.subject.as_str()).or_default().push(i);
		if triple.object != triple.subject {
			index.entry(triple.object.as_str()).or_default().push(i);
		}
	}
	index
}

/// Extract the neighborhood of `center` up to `depth` expansion iterations.
///
/// A missing or empty center yields an empty result. A center that appears in
/// no triple yields the center alone. Each triple occurrence contributes at
/// most one edge no matter how many iterations see it.
pub fn extract(triples: &[Triple], center: Option<&str>, depth: u32) -> Neighborhood {
	let Some(center) = center.filter(|c| !c.is_empty()) else {
		return Neighborhood::default();
	};

	let mut result = Neighborhood {
		nodes: vec![NeighborNode {
			id: center.to_string(),
			role: NodeRole::Center,
		}],
		edges: Vec::new(),
	};
	if depth == 0 || triples.is_empty() {
		return result;
	}

	let index = incidence_index(triples);
	let mut visited: HashSet<&str> = HashSet::from([center]);
	let mut frontier: Vec<&str> = vec![center];
	let mut emitted: HashSet<usize> = HashSet::new();

	for _ in 0..depth {
		let frontier_set: HashSet<&str> = frontier.iter().copied().collect();
		let relevant: BTreeSet<usize> = frontier
			.iter()
			.filter_map(|id| index.get(id))
			.flatten()
			.copied()
			.collect();

		let mut next = Vec::new();
		for i in relevant {
			let triple = &triples[i];
			if emitted.insert(i) {
				result.edges.push(Edge {
					source: triple.subject.clone(),
					target: triple.object.clone(),
					label: triple.relation.clone(),
					origin: i,
				});
			}

			let mut discovered = Vec::with_capacity(2);
			if frontier_set.contains(triple.subject.as_str()) {
				discovered.push(triple.object.as_str());
			}
			if frontier_set.contains(triple.object.as_str()) {
				discovered.push(triple.subject.as_str());
			}
			for id in discovered {
				if visited.insert(id) {
					result.nodes.push(NeighborNode {
						id: id.to_string(),
						role: NodeRole::Neighbor,
					});
					next.push(id);
				}
			}
		}

		if next.is_empty() {
			break;
		}
		frontier = next;
	}

	result
}

#[cfg(test)]
mod tests {
	use super::*;

	fn ids(n: &Neighborhood) -> Vec<&str> {
		n.nodes.iter().map(|n| n.id.as_str()).collect()
	}

	fn labels(n: &Neighborhood) -> Vec<&str> {
		n.edges.iter().map(|e| e.label.as_str()).collect()
	}

	fn chain() -> Vec<Triple> {
		vec![
			Triple::new("A", "r1", "B"),
			Triple::new("B", "r2", "C"),
			Triple::new("C", "r3", "D"),
		]
	}

	#[test]
	fn test_no_center_is_empty() {
		assert!(extract(&chain(), None, 3).is_empty());
		assert!(extract(&chain(), Some(""), 3).is_empty());
	}

	#[test]
	fn test_empty_triples_yield_singleton() {
		let n = extract(&[], Some("A"), 2);
		assert_eq!(ids(&n), ["A"]);
		assert_eq!(n.nodes[0].role, NodeRole::Center);
		assert!(n.edges.is_empty());
	}

	#[test]
	fn test_depth_zero_yields_singleton() {
		let n = extract(&chain(), Some("B"), 0);
		assert_eq!(ids(&n), ["B"]);
		assert!(n.edges.is_empty());
	}

	#[test]
	fn test_chain_grows_one_hop_per_level() {
		let d1 = extract(&chain(), Some("A"), 1);
		assert_eq!(ids(&d1), ["A", "B"]);
		assert_eq!(labels(&d1), ["r1"]);

		let d2 = extract(&chain(), Some("A"), 2);
		assert_eq!(ids(&d2), ["A", "B", "C"]);
		assert_eq!(labels(&d2), ["r1", "r2"]);

		let d3 = extract(&chain(), Some("A"), 3);
		assert_eq!(ids(&d3), ["A", "B", "C", "D"]);
		assert_eq!(labels(&d3), ["r1", "r2", "r3"]);

		assert_eq!(extract(&chain(), Some("A"), 10), d3);
	}

	#[test]
	fn test_expands_against_edge_direction() {
		let n = extract(&chain(), Some("C"), 1);
		assert_eq!(ids(&n), ["C", "B", "D"]);
		assert_eq!(n.edges[0].source, "B");
		assert_eq!(n.edges[0].target, "C");
	}

	#[test]
	fn test_parallel_triples_stay_distinct() {
		let triples = vec![Triple::new("A", "r1", "B"), Triple::new("A", "r2", "B")];
		let n = extract(&triples, Some("A"), 1);
		assert_eq!(ids(&n), ["A", "B"]);
		assert_eq!(labels(&n), ["r1", "r2"]);
	}

	#[test]
	fn test_duplicate_occurrences_each_emit_once() {
		let triples = vec![
			Triple::new("A", "r", "B"),
			Triple::new("A", "r", "B"),
			Triple::new("B", "s", "A"),
		];
		let n = extract(&triples, Some("A"), 5);
		let origins: Vec<usize> = n.edges.iter().map(|e| e.origin).collect();
		assert_eq!(origins, [0, 1, 2]);
	}

	#[test]
	fn test_edge_between_known_nodes_is_emitted_later() {
		// A-B and A-C at level one, B-C only seen once B is in the frontier.
		let triples = vec![
			Triple::new("B", "x", "C"),
			Triple::new("A", "y", "B"),
			Triple::new("A", "z", "C"),
		];
		let d1 = extract(&triples, Some("A"), 1);
		assert_eq!(labels(&d1), ["y", "z"]);

		let d2 = extract(&triples, Some("A"), 2);
		assert_eq!(labels(&d2), ["y", "z", "x"]);
		assert_eq!(d2.node_count(), 3);
	}

	#[test]
	fn test_malformed_triples_are_skipped() {
		let triples = vec![
			Triple::new("A", "", "B"),
			Triple::new("", "r", "A"),
			Triple::new("A", "ok", "C"),
		];
		let n = extract(&triples, Some("A"), 2);
		assert_eq!(ids(&n), ["A", "C"]);
		assert_eq!(labels(&n), ["ok"]);
	}

	#[test]
	fn test_self_loop_adds_edge_only() {
		let triples = vec![Triple::new("A", "self", "A")];
		let n = extract(&triples, Some("A"), 3);
		assert_eq!(ids(&n), ["A"]);
		assert_eq!(labels(&n), ["self"]);
	}

	#[test]
	fn test_single_center_role() {
		let n = extract(&chain(), Some("B"), 3);
		let centers = n.nodes.iter().filter(|n| n.role == NodeRole::Center).count();
		assert_eq!(centers, 1);
		assert_eq!(n.center().map(|c| c.id.as_str()), Some("B"));
	}
}
