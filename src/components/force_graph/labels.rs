//! Label placement geometry.
//!
//! Pure computations behind the per-frame label drawing. Positions come from
//! the physics engine, which may not have placed a node yet; such endpoints
//! resolve to `None` and the label is skipped for that frame.

use std::f64::consts::{FRAC_PI_2, PI};

use super::scale::EdgeLabelConfig;

/// A resolved world-space position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	/// Accept simulation coordinates only when both are finite.
	pub fn resolve(x: f32, y: f32) -> Option<Self> {
		(x.is_finite() && y.is_finite()).then(|| Self {
			x: x as f64,
			y: y as f64,
		})
	}
}

/// Angle of the vector `(dx, dy)` folded into `[-π/2, π/2]` so text never renders upside down.
pub fn upright_angle(dx: f64, dy: f64) -> f64 {
	let angle = dy.atan2(dx);
	if angle > FRAC_PI_2 {
		angle - PI
	} else if angle < -FRAC_PI_2 {
		angle + PI
	} else {
		angle
	}
}

/// Unit vector from `from` towards `to`, or `None` when the points coincide.
pub fn direction(from: Point, to: Point) -> Option<(f64, f64)> {
	let (dx, dy) = (to.x - from.x, to.y - from.y);
	let len = (dx * dx + dy * dy).sqrt();
	(len >= 0.001).then(|| (dx / len, dy / len))
}

/// Midpoint of `start`..`end` pushed `offset` units to the left of the direction of travel.
///
/// A quadratic curve with control point `bend_point(s, e, 2.0 * o)` passes
/// through `bend_point(s, e, o)` halfway along.
pub fn bend_point(start: Point, end: Point, offset: f64) -> Point {
	let mid = Point {
		x: (start.x + end.x) / 2.0,
		y: (start.y + end.y) / 2.0,
	};
	match direction(start, end) {
		Some((ux, uy)) => Point {
			x: mid.x - uy * offset,
			y: mid.y + ux * offset,
		},
		None => mid,
	}
}

/// Circle `(centre, radius)` of a self-loop drawn above a node.
///
/// Loops nest outwards with `level`; each one crosses the node's rim.
pub fn self_loop(node: Point, node_radius: f64, loop_radius: f64, level: f64) -> (Point, f64) {
	let radius = loop_radius * (1.0 + level * 0.6);
	let centre = Point {
		x: node.x,
		y: node.y - node_radius - radius * 0.5,
	};
	(centre, radius)
}

/// Where and how large an edge label is drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeLabelLayout {
	/// Midpoint of the edge.
	pub center: Point,
	/// Rotation of the label.
	pub angle: f64,
	/// Room available for text along the edge.
	pub max_width: f64,
}

impl EdgeLabelLayout {
	/// Place a label on the straight line between `start` and `end`.
	///
	/// Returns `None` while either endpoint is unresolved, or when the edge is
	/// too short to hold any text after the end margins.
	pub fn place(
		start: Option<Point>,
		end: Option<Point>,
		config: &EdgeLabelConfig,
	) -> Option<Self> {
		let (start, end) = (start?, end?);
		let (dx, dy) = (end.x - start.x, end.y - start.y);
		let max_width = (dx * dx + dy * dy).sqrt() - config.node_margin * 2.0;
		if max_width <= 0.0 {
			return None;
		}

		Some(Self {
			center: Point {
				x: start.x + dx / 2.0,
				y: start.y + dy / 2.0,
			},
			angle: upright_angle(dx, dy),
			max_width,
		})
	}

	/// Place a label on the lane `offset` units left of the straight edge.
	///
	/// Room for text is measured along the straight edge.
	pub fn place_on_lane(
		start: Option<Point>,
		end: Option<Point>,
		offset: f64,
		config: &EdgeLabelConfig,
	) -> Option<Self> {
		let mut layout = Self::place(start, end, config)?;
		if offset != 0.0 {
			layout.center = bend_point(start?, end?, offset);
		}
		Some(layout)
	}

	/// Label sitting on top of a self-loop of `radius` centred at `centre`.
	pub fn on_loop(centre: Point, radius: f64) -> Self {
		Self {
			center: Point {
				x: centre.x,
				y: centre.y - radius,
			},
			angle: 0.0,
			max_width: radius * 4.0,
		}
	}

	/// Font size at which text of `measured_width` (measured at `measure_size`)
	/// fits the edge, capped at the configured maximum.
	pub fn fit_font_size(
		&self,
		measured_width: f64,
		measure_size: f64,
		config: &EdgeLabelConfig,
	) -> Option<f64> {
		if measured_width <= 0.0 || measure_size <= 0.0 {
			return None;
		}
		let width_per_unit = measured_width / measure_size;
		Some(config.max_font_size.min(self.max_width / width_per_unit))
	}
}

/// Background rectangle `(width, height)` behind a label of `text_width` at `font_size`.
pub fn label_background(text_width: f64, font_size: f64, padding: f64) -> (f64, f64) {
	let pad = font_size * padding;
	(text_width + pad, font_size + pad)
}

/// Top-centre anchor of a node label, below the node.
pub fn node_label_anchor(x: f64, y: f64, radius: f64, offset: f64) -> (f64, f64) {
	(x, y + radius * offset)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn config() -> EdgeLabelConfig {
		EdgeLabelConfig {
			max_font_size: 4.0,
			node_margin: 4.0,
			padding: 0.2,
			measure_font_size: 10.0,
		}
	}

	fn pt(x: f64, y: f64) -> Option<Point> {
		Some(Point { x, y })
	}

	#[test]
	fn test_resolve_rejects_non_finite() {
		assert!(Point::resolve(1.0, 2.0).is_some());
		assert!(Point::resolve(f32::NAN, 2.0).is_none());
		assert!(Point::resolve(0.0, f32::INFINITY).is_none());
	}

	#[test]
	fn test_upright_angle_stays_in_half_turn() {
		let steps = 32;
		for i in 0..steps {
			let theta = -PI + (i as f64) * 2.0 * PI / steps as f64;
			let a = upright_angle(theta.cos(), theta.sin());
			assert!((-FRAC_PI_2 - 1e-9..=FRAC_PI_2 + 1e-9).contains(&a), "{theta} -> {a}");
		}
	}

	#[test]
	fn test_upright_angle_reflects_leftward_edges() {
		assert!((upright_angle(-1.0, 0.0)).abs() < 1e-9);
		// Pointing down-left reads the same as up-right.
		let a = upright_angle(-1.0, 1.0);
		assert!((a - (-PI / 4.0)).abs() < 1e-9);
	}

	#[test]
	fn test_place_uses_midpoint() {
		let layout = EdgeLabelLayout::place(pt(0.0, 0.0), pt(20.0, 10.0), &config()).unwrap();
		assert_eq!(layout.center, Point { x: 10.0, y: 5.0 });
		assert!((layout.max_width - (500f64.sqrt() - 8.0)).abs() < 1e-9);
	}

	#[test]
	fn test_place_skips_unresolved_endpoints() {
		assert!(EdgeLabelLayout::place(None, pt(1.0, 1.0), &config()).is_none());
		assert!(EdgeLabelLayout::place(pt(1.0, 1.0), None, &config()).is_none());
	}

	#[test]
	fn test_place_skips_edges_shorter_than_margins() {
		assert!(EdgeLabelLayout::place(pt(0.0, 0.0), pt(8.0, 0.0), &config()).is_none());
	}

	#[test]
	fn test_font_size_capped_on_long_edges() {
		let layout = EdgeLabelLayout::place(pt(0.0, 0.0), pt(200.0, 0.0), &config()).unwrap();
		assert_eq!(layout.fit_font_size(30.0, 10.0, &config()), Some(4.0));
	}

	#[test]
	fn test_font_size_shrinks_to_fit() {
		// 6 units of room, text is 3 units wide per unit of font size.
		let short = EdgeLabelLayout::place(pt(0.0, 0.0), pt(14.0, 0.0), &config()).unwrap();
		let size = short.fit_font_size(30.0, 10.0, &config()).unwrap();
		assert!((size - 2.0).abs() < 1e-9);
		assert!(size * 3.0 <= short.max_width + 1e-9);
	}

	#[test]
	fn test_font_size_rejects_empty_measurement() {
		let layout = EdgeLabelLayout::place(pt(0.0, 0.0), pt(50.0, 0.0), &config()).unwrap();
		assert!(layout.fit_font_size(0.0, 10.0, &config()).is_none());
	}

	#[test]
	fn test_bend_point_offsets_to_the_left() {
		let (a, b) = (Point { x: 0.0, y: 0.0 }, Point { x: 10.0, y: 0.0 });
		assert_eq!(bend_point(a, b, 0.0), Point { x: 5.0, y: 0.0 });
		assert_eq!(bend_point(a, b, 3.0), Point { x: 5.0, y: 3.0 });
		// The same offset on the reversed edge lands on the other side.
		assert_eq!(bend_point(b, a, 3.0), Point { x: 5.0, y: -3.0 });
	}

	#[test]
	fn test_bend_point_on_coincident_endpoints_is_the_point() {
		let p = Point { x: 2.0, y: 2.0 };
		assert_eq!(bend_point(p, p, 5.0), p);
		assert!(direction(p, p).is_none());
	}

	#[test]
	fn test_lane_label_sits_off_the_straight_edge() {
		let straight = EdgeLabelLayout::place_on_lane(pt(0.0, 0.0), pt(40.0, 0.0), 0.0, &config()).unwrap();
		let laned = EdgeLabelLayout::place_on_lane(pt(0.0, 0.0), pt(40.0, 0.0), -6.0, &config()).unwrap();
		assert_eq!(straight.center, Point { x: 20.0, y: 0.0 });
		assert_eq!(laned.center, Point { x: 20.0, y: -6.0 });
		assert_eq!(laned.max_width, straight.max_width);
		assert!(EdgeLabelLayout::place_on_lane(None, pt(1.0, 1.0), 2.0, &config()).is_none());
	}

	#[test]
	fn test_self_loops_nest_above_the_node() {
		let node = Point { x: 0.0, y: 0.0 };
		let (inner_c, inner_r) = self_loop(node, 5.0, 7.0, 0.0);
		let (outer_c, outer_r) = self_loop(node, 5.0, 7.0, 1.0);
		assert!(inner_c.y < 0.0);
		assert!(outer_r > inner_r);
		// Both circles reach into the node.
		assert!(inner_c.y.abs() - inner_r < 5.0);
		assert!(outer_c.y.abs() - outer_r < 5.0);

		let label = EdgeLabelLayout::on_loop(inner_c, inner_r);
		assert_eq!(label.angle, 0.0);
		assert!(label.center.y < inner_c.y);
	}

	#[test]
	fn test_label_background_padding() {
		let (w, h) = label_background(10.0, 4.0, 0.2);
		assert!((w - 10.8).abs() < 1e-9);
		assert!((h - 4.8).abs() < 1e-9);
	}

	#[test]
	fn test_node_label_below_node() {
		assert_eq!(node_label_anchor(3.0, 4.0, 5.0, 2.0), (3.0, 14.0));
	}
}
