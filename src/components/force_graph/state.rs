//! Graph simulation state and interaction tracking.
//!
//! Wraps the `force_graph` physics simulation. Node positions belong to the
//! simulation: this module only reads them for hit testing and to seed a
//! rebuilt simulation, never for graph logic.

use std::collections::{HashMap, HashSet};
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};

use super::scale::{ScaleConfig, ScaledValues};
use super::theme::{Color, Theme};
use crate::neighborhood::{EdgeView, GraphModel, NodeRole, NodeView};

/// Radius of the ring on which new nodes are seeded.
const SEED_RADIUS: f64 = 60.0;

/// Largest per-tick node movement, in world units, that counts as at rest.
const REST_MOTION: f32 = 0.05;

/// Consecutive resting ticks after which the simulation pauses.
const REST_TICKS: u32 = 60;

/// Lane of every edge, keyed by its position in `edges`.
///
/// Edges between the same two nodes fan out symmetrically around the straight
/// line regardless of their direction. Self-loops on a node nest from level 0.
fn edge_lanes(edges: &[EdgeView]) -> Vec<f64> {
	let mut groups: HashMap<(&str, &str), Vec<usize>> = HashMap::new();
	for (i, edge) in edges.iter().enumerate() {
		let (s, t) = (edge.source.as_str(), edge.target.as_str());
		groups.entry(if s <= t { (s, t) } else { (t, s) }).or_default().push(i);
	}

	let mut lanes = vec![0.0; edges.len()];
	for ((low, high), members) in groups {
		if low == high {
			for (level, &i) in members.iter().enumerate() {
				lanes[i] = level as f64;
			}
			continue;
		}
		let middle = (members.len() - 1) as f64 / 2.0;
		for (slot, &i) in members.iter().enumerate() {
			let lane = slot as f64 - middle;
			// Slots are laid out along low -> high; the left side flips for high -> low.
			lanes[i] = if edges[i].source == low { lane } else { -lane };
		}
	}
	lanes
}

/// Per-node display metadata attached to each node in the simulation.
#[derive(Clone, Debug)]
pub struct NodeInfo {
	pub view: NodeView,
	pub color: Color,
	/// Radius multiplier (1.0 = normal).
	pub size: f64,
}

/// One drawn edge: a single triple between two simulation nodes.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectedEdge {
	pub source: DefaultNodeIdx,
	pub target: DefaultNodeIdx,
	pub label: String,
	/// Lane among the edges sharing this node pair, counted to the left of the
	/// edge's own direction. `0.0` is the straight line. Self-loops use it as
	/// their nesting level.
	pub lane: f64,
}

impl DirectedEdge {
	pub fn is_loop(&self) -> bool {
		self.source == self.target
	}
}

/// Pan and zoom transform applied to the entire graph view.
#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	/// Zoom factor (1.0 = 100%, clamped to 0.1..10.0).
	pub k: f64,
}

/// Tracks an in-progress node drag operation.
#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub node_idx: Option<DefaultNodeIdx>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f32,
	pub node_start_y: f32,
}

/// Tracks an in-progress canvas pan operation.
#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

fn simulation() -> ForceGraph<NodeInfo> {
	ForceGraph::new(SimulationParameters {
		force_charge: 150.0,
		force_spring: 0.05,
		force_max: 100.0,
		node_speed: 3000.0,
		damping_factor: 0.9,
	})
}

/// Simulation state for the current [`GraphModel`] plus view interaction.
///
/// The simulation is replaced wholesale whenever a new model arrives; only
/// seed positions of surviving node ids carry over. The physics graph holds one
/// spring per connected node pair, while `edges` keeps every model edge with
/// its direction for drawing.
pub struct ForceGraphState {
	pub graph: ForceGraph<NodeInfo>,
	pub edges: Vec<DirectedEdge>,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub hovered: Option<DefaultNodeIdx>,
	pub width: f64,
	pub height: f64,
	/// False once the layout has come to rest; drawing continues either way.
	pub animation_running: bool,
	resting_ticks: u32,
	node_count: usize,
}

impl ForceGraphState {
	pub fn new(
		model: &GraphModel,
		width: f64,
		height: f64,
		theme: &Theme,
		config: &ScaleConfig,
	) -> Self {
		let mut state = Self {
			graph: simulation(),
			edges: Vec::new(),
			transform: ViewTransform {
				x: width / 2.0,
				y: height / 2.0,
				k: 1.0,
			},
			drag: DragState::default(),
			pan: PanState::default(),
			hovered: None,
			width,
			height,
			animation_running: true,
			resting_ticks: 0,
			node_count: 0,
		};
		state.load(model, theme, config);
		state
	}

	/// Replace the simulation with one built from `model`.
	pub fn load(&mut self, model: &GraphModel, theme: &Theme, config: &ScaleConfig) {
		let previous = self.positions();
		let mut graph = simulation();
		let mut id_to_idx = HashMap::with_capacity(model.nodes.len());
		let fresh = model
			.nodes
			.iter()
			.filter(|n| !previous.contains_key(&n.id))
			.count()
			.max(1);
		let mut seeded = 0usize;

		for node in &model.nodes {
			let (x, y) = match (previous.get(&node.id), node.role) {
				(Some(&pos), _) => pos,
				(None, NodeRole::Center) => (0.0, 0.0),
				(None, NodeRole::Neighbor) => {
					let angle = (seeded as f64) * 2.0 * PI / fresh as f64;
					seeded += 1;
					(
						(SEED_RADIUS * angle.cos()) as f32,
						(SEED_RADIUS * angle.sin()) as f32,
					)
				}
			};
			let size = match node.role {
				NodeRole::Center => config.center_size,
				NodeRole::Neighbor => 1.0,
			};

			let idx = graph.add_node(NodeData {
				x,
				y,
				mass: 10.0,
				is_anchor: false,
				user_data: NodeInfo {
					view: node.clone(),
					color: theme.node.color_for(node.role),
					size,
				},
			});
			id_to_idx.insert(node.id.as_str(), idx);
		}

		let mut edges = Vec::with_capacity(model.edges.len());
		let mut springs = HashSet::new();
		for (edge, lane) in model.edges.iter().zip(edge_lanes(&model.edges)) {
			let (Some(&src), Some(&tgt)) = (
				id_to_idx.get(edge.source.as_str()),
				id_to_idx.get(edge.target.as_str()),
			) else {
				continue;
			};
			edges.push(DirectedEdge {
				source: src,
				target: tgt,
				label: edge.label.clone(),
				lane,
			});
			// The simulation keeps one undirected edge per pair and cannot hold loops.
			if src != tgt && springs.insert((src.min(tgt), src.max(tgt))) {
				graph.add_edge(src, tgt, EdgeData::default());
			}
		}

		self.graph = graph;
		self.edges = edges;
		self.node_count = model.nodes.len();
		self.hovered = None;
		self.drag = DragState::default();
		self.wake();
	}

	/// Current finite positions keyed by node id.
	pub fn positions(&self) -> HashMap<String, (f32, f32)> {
		let mut out = HashMap::new();
		self.graph.visit_nodes(|node| {
			if node.x().is_finite() && node.y().is_finite() {
				out.insert(node.data.user_data.view.id.clone(), (node.x(), node.y()));
			}
		});
		out
	}

	pub fn node_count(&self) -> usize {
		self.node_count
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	pub fn node_at_position(
		&self,
		sx: f64,
		sy: f64,
		config: &ScaleConfig,
	) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let scale = ScaledValues::new(config, self.transform.k);
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - gx, node.y() as f64 - gy);
			let node_hit_radius = scale.hit_radius * node.data.user_data.size;
			if (dx * dx + dy * dy).sqrt() < node_hit_radius {
				found = Some(node.index());
			}
		});
		found
	}

	/// Id of the node at simulation index `idx`.
	pub fn node_id(&self, idx: DefaultNodeIdx) -> Option<String> {
		let mut id = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				id = Some(node.data.user_data.view.id.clone());
			}
		});
		id
	}

	pub fn set_hover(&mut self, node: Option<DefaultNodeIdx>) {
		self.hovered = node;
	}

	/// Advance the simulation one step and pause it once nodes stop moving.
	pub fn tick(&mut self, dt: f32) {
		let before = self.positions();
		self.graph.update(dt);
		let mut motion = 0.0f32;
		self.graph.visit_nodes(|node| {
			if let Some(&(x, y)) = before.get(&node.data.user_data.view.id) {
				motion = motion.max((node.x() - x).abs()).max((node.y() - y).abs());
			}
		});
		self.record_motion(motion);
	}

	/// Count a tick with the given largest node movement towards coming to rest.
	pub fn record_motion(&mut self, motion: f32) {
		if motion.is_finite() && motion <= REST_MOTION {
			self.resting_ticks += 1;
		} else {
			self.resting_ticks = 0;
		}
		if self.resting_ticks >= REST_TICKS {
			self.animation_running = false;
		}
	}

	/// Resume the simulation, e.g. after a node was moved by hand.
	pub fn wake(&mut self) {
		self.resting_ticks = 0;
		self.animation_running = true;
	}

	/// Adopt a new surface size, keeping the view centred.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.transform.x += (width - self.width) / 2.0;
		self.transform.y += (height - self.height) / 2.0;
		self.width = width;
		self.height = height;
	}
}
