//! Neighborhood pipeline behaviour through the public API.

#![allow(unused_crate_dependencies)]

use std::collections::BTreeSet;

use kn_explorer::data::{KnStore, Triple, TripleSource};
use kn_explorer::neighborhood::{GraphModel, Neighborhood, NodeRole, build, extract, restyle};

fn chain() -> Vec<Triple> {
	vec![
		Triple::new("A", "r1", "B"),
		Triple::new("B", "r2", "C"),
		Triple::new("C", "r3", "D"),
	]
}

fn node_ids(n: &Neighborhood) -> BTreeSet<String> {
	n.nodes.iter().map(|n| n.id.clone()).collect()
}

fn edge_set(n: &Neighborhood) -> BTreeSet<(String, String, String)> {
	n.edges
		.iter()
		.map(|e| (e.source.clone(), e.target.clone(), e.label.clone()))
		.collect()
}

fn ids(expected: &[&str]) -> BTreeSet<String> {
	expected.iter().map(|s| s.to_string()).collect()
}

fn assert_singleton(n: &Neighborhood, center: &str) {
	assert_eq!(n.nodes.len(), 1);
	assert_eq!(n.nodes[0].id, center);
	assert_eq!(n.nodes[0].role, NodeRole::Center);
	assert!(n.edges.is_empty());
}

#[test]
fn test_absent_center_is_singleton() {
	assert_singleton(&extract(&chain(), Some("Z"), 3), "Z");
}

#[test]
fn test_zero_depth_is_singleton() {
	assert_singleton(&extract(&chain(), Some("A"), 0), "A");
	assert_singleton(&extract(&chain(), Some("B"), 0), "B");
}

#[test]
fn test_no_center_is_empty() {
	assert!(extract(&chain(), None, 2).is_empty());
	assert!(extract(&chain(), Some(""), 2).is_empty());
}

#[test]
fn test_extract_is_idempotent() {
	let triples = chain();
	let first = extract(&triples, Some("B"), 2);
	let second = extract(&triples, Some("B"), 2);
	assert_eq!(node_ids(&first), node_ids(&second));
	assert_eq!(edge_set(&first), edge_set(&second));
}

#[test]
fn test_node_set_grows_with_depth() {
	let mut triples = chain();
	triples.push(Triple::new("E", "r4", "A"));
	triples.push(Triple::new("D", "r5", "F"));
	for center in ["A", "C", "F"] {
		let mut previous = node_ids(&extract(&triples, Some(center), 0));
		for depth in 1..6 {
			let current = node_ids(&extract(&triples, Some(center), depth));
			assert!(current.is_superset(&previous), "{center} at depth {depth}");
			previous = current;
		}
	}
}

#[test]
fn test_chain_scenario() {
	let triples = chain();

	let d1 = extract(&triples, Some("A"), 1);
	assert_eq!(node_ids(&d1), ids(&["A", "B"]));
	assert_eq!(d1.center().map(|c| c.id.as_str()), Some("A"));
	assert_eq!(d1.edges.len(), 1);
	assert_eq!(
		(d1.edges[0].source.as_str(), d1.edges[0].target.as_str(), d1.edges[0].label.as_str()),
		("A", "B", "r1")
	);

	let d2 = extract(&triples, Some("A"), 2);
	assert_eq!(node_ids(&d2), ids(&["A", "B", "C"]));
	assert_eq!(d2.edges.len(), 2);

	let d3 = extract(&triples, Some("A"), 3);
	assert_eq!(node_ids(&d3), ids(&["A", "B", "C", "D"]));
	assert_eq!(d3.edges.len(), 3);

	let d10 = extract(&triples, Some("A"), 10);
	assert_eq!(node_ids(&d10), node_ids(&d3));
	assert_eq!(edge_set(&d10), edge_set(&d3));
	assert_eq!(d10.edges.len(), d3.edges.len());
}

#[test]
fn test_parallel_edges_are_kept() {
	let triples = vec![Triple::new("A", "r1", "B"), Triple::new("A", "r2", "B")];
	let n = extract(&triples, Some("A"), 1);
	assert_eq!(node_ids(&n), ids(&["A", "B"]));
	let labels: Vec<_> = n.edges.iter().map(|e| e.label.as_str()).collect();
	assert_eq!(labels, ["r1", "r2"]);
}

#[test]
fn test_triple_emitted_once_across_iterations() {
	// A-B is reachable from both frontier sides on later iterations.
	let triples = vec![
		Triple::new("A", "r1", "B"),
		Triple::new("B", "r2", "A"),
		Triple::new("B", "r3", "C"),
	];
	let n = extract(&triples, Some("A"), 5);
	assert_eq!(n.edges.len(), 3);
	assert_eq!(n.node_count(), 3);
}

#[test]
fn test_search_only_marks_nodes() {
	let extraction = extract(&chain(), Some("B"), 2);
	let plain = build(&extraction, "");
	let searched = build(&extraction, "c");

	let model_ids = |m: &GraphModel| m.nodes.iter().map(|n| n.id.clone()).collect::<BTreeSet<_>>();
	assert_eq!(model_ids(&plain), model_ids(&searched));
	assert_eq!(plain.edges, searched.edges);
	assert_eq!(plain.match_count(), plain.node_count());
	assert_eq!(searched.match_count(), 1);
	assert_eq!(restyle(&plain, "c"), searched);
}

#[test]
fn test_store_feeds_extraction() {
	let store = KnStore::from_json(
		r#"{
			"categories": [{ "id": "c1", "name": "General" }],
			"kn_type_data": {
				"c1": [
					{ "subject": "Water", "relation": "consists_of", "object": "Hydrogen", "chunk_count": 3 },
					{ "subject": "Water", "relation": "consists_of", "object": "Oxygen" },
					{ "relation": "orphan" }
				]
			}
		}"#,
	)
	.unwrap();

	let triples = store.triples("c1");
	assert_eq!(triples.len(), 3);
	let n = extract(&triples, Some("Oxygen"), 2);
	assert_eq!(node_ids(&n), ids(&["Hydrogen", "Oxygen", "Water"]));
	assert_eq!(n.edges.len(), 2);

	assert!(store.triples("missing").is_empty());
}
