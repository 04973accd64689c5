//! Zoom-dependent sizing for graph visuals.
//!
//! # Coordinate Spaces
//!
//! - **World-space**: the coordinate system of the simulation. Drawing happens
//!   in world-space after the pan/zoom transform is applied, so world-space
//!   sizes grow when zooming in.
//! - **Screen-space**: canvas pixels. A screen-space size is divided by the
//!   zoom factor `k` before drawing so that it stays visually constant.
//!
//! Edge labels are sized in world-space (they belong to the edge they annotate);
//! node labels are sized in screen-space so they stay readable at any zoom.

/// How a visual property scales with zoom level.
#[derive(Clone, Debug)]
pub enum ScaleBehavior {
	/// Constant screen-space size (pixels). Unaffected by zoom.
	Screen,
	/// World-space scaling, clamped to min/max screen-space bounds.
	Clamped { min_screen: f64, max_screen: f64 },
}

impl ScaleBehavior {
	/// World-space value for a base value at zoom `k`.
	pub fn apply(&self, base: f64, k: f64) -> f64 {
		match self {
			ScaleBehavior::Screen => base / k,
			ScaleBehavior::Clamped {
				min_screen,
				max_screen,
			} => {
				// screen_size = world_size * k
				let min_world = min_screen / k;
				let max_world = max_screen / k;
				base.clamp(min_world, max_world)
			}
		}
	}
}

/// Node sizing.
#[derive(Clone, Debug)]
pub struct NodeScaleConfig {
	/// Base node radius in world units.
	pub radius: f64,
	pub radius_behavior: ScaleBehavior,
	/// Hit detection radius in world units.
	pub hit_radius: f64,
	pub hit_behavior: ScaleBehavior,
	/// Label font size in screen pixels.
	pub label_size: f64,
	/// Gap between node centre and label top, as a multiple of the radius.
	pub label_offset: f64,
}

/// Edge line and arrow sizing.
#[derive(Clone, Debug)]
pub struct EdgeScaleConfig {
	/// Line width in screen pixels.
	pub line_width: f64,
	/// Arrow head length in world units.
	pub arrow_size: f64,
	pub arrow_behavior: ScaleBehavior,
	/// Distance between neighbouring lanes of edges that share a node pair, in world units.
	pub lane_spacing: f64,
	/// Radius of the innermost self-loop, in world units.
	pub loop_radius: f64,
}

/// Edge label placement constants, all in world units.
#[derive(Clone, Debug)]
pub struct EdgeLabelConfig {
	/// Upper bound of the label font size.
	pub max_font_size: f64,
	/// Space kept free at each end of the edge.
	pub node_margin: f64,
	/// Background padding as a fraction of the font size.
	pub padding: f64,
	/// Font size used when measuring label text.
	pub measure_font_size: f64,
}

/// Hover ring sizing in screen pixels.
#[derive(Clone, Debug)]
pub struct RingScaleConfig {
	pub width: f64,
	pub offset: f64,
}

/// Complete scale configuration for all graph elements.
#[derive(Clone, Debug)]
pub struct ScaleConfig {
	pub node: NodeScaleConfig,
	pub edge: EdgeScaleConfig,
	pub edge_label: EdgeLabelConfig,
	pub ring: RingScaleConfig,
	/// Radius multiplier applied to the center node.
	pub center_size: f64,
}

impl Default for ScaleConfig {
	fn default() -> Self {
		Self {
			node: NodeScaleConfig {
				radius: 5.0,
				radius_behavior: ScaleBehavior::Clamped {
					min_screen: 3.0,
					max_screen: f64::INFINITY,
				},
				hit_radius: 8.0,
				hit_behavior: ScaleBehavior::Clamped {
					min_screen: 6.0,
					max_screen: f64::INFINITY,
				},
				label_size: 11.0,
				label_offset: 1.4,
			},
			edge: EdgeScaleConfig {
				line_width: 1.2,
				arrow_size: 3.5,
				arrow_behavior: ScaleBehavior::Clamped {
					min_screen: 0.0,
					max_screen: 14.0,
				},
				lane_spacing: 12.0,
				loop_radius: 7.0,
			},
			edge_label: EdgeLabelConfig {
				max_font_size: 4.0,
				node_margin: 4.0,
				padding: 0.2,
				measure_font_size: 10.0,
			},
			ring: RingScaleConfig {
				width: 1.5,
				offset: 2.0,
			},
			center_size: 1.6,
		}
	}
}

/// Scale values resolved for one zoom level.
///
/// Create this once per frame and pass it to rendering functions. All sizes are
/// in world-space.
#[derive(Clone, Debug)]
pub struct ScaledValues {
	pub k: f64,
	pub node_radius: f64,
	pub hit_radius: f64,
	pub label_font_size: f64,
	/// CSS font shorthand for node labels.
	pub label_font: String,
	pub edge_line_width: f64,
	pub arrow_size: f64,
	pub ring_width: f64,
	pub ring_offset: f64,
}

impl ScaledValues {
	pub fn new(config: &ScaleConfig, k: f64) -> Self {
		let label_font_size = ScaleBehavior::Screen.apply(config.node.label_size, k);

		Self {
			k,
			node_radius: config.node.radius_behavior.apply(config.node.radius, k),
			hit_radius: config.node.hit_behavior.apply(config.node.hit_radius, k),
			label_font_size,
			label_font: format!("{}px sans-serif", label_font_size),
			edge_line_width: config.edge.line_width / k,
			arrow_size: config.edge.arrow_behavior.apply(config.edge.arrow_size, k),
			ring_width: config.ring.width / k,
			ring_offset: config.ring.offset / k,
		}
	}
}
