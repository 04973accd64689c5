//! Canvas rendering for the neighborhood graph.
//!
//! Rendering uses multiple passes for correct z-ordering:
//! 1. Background (screen space)
//! 2. Edge lines and arrow heads (world space); parallel edges fan out into
//!    curved lanes, self-loops circle above their node
//! 3. Edge labels on top of their edges
//! 4. Nodes, then node labels

use std::collections::HashMap;
use std::f64::consts::PI;

use force_graph::DefaultNodeIdx;
use web_sys::CanvasRenderingContext2d;

use super::labels::{self, EdgeLabelLayout, Point};
use super::scale::{ScaleConfig, ScaledValues};
use super::state::{ForceGraphState, NodeInfo};
use super::theme::Theme;

/// Renders the complete graph to the canvas.
pub fn render(
	state: &ForceGraphState,
	ctx: &CanvasRenderingContext2d,
	config: &ScaleConfig,
	theme: &Theme,
) {
	let scale = ScaledValues::new(config, state.transform.k);

	draw_background(state, ctx, theme);

	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);

	let ends = endpoints(state, &scale);
	draw_edges(state, &ends, ctx, config, &scale, theme);
	draw_edge_labels(state, &ends, ctx, config, theme);
	draw_nodes(state, ctx, config, &scale, theme);

	ctx.restore();
}

fn draw_background(state: &ForceGraphState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	match ctx.create_radial_gradient(
		state.width / 2.0,
		state.height / 2.0,
		0.0,
		state.width / 2.0,
		state.height / 2.0,
		state.width.max(state.height) * 0.8,
	) {
		Ok(gradient) => {
			let _ = gradient.add_color_stop(0.0, &theme.background.color_secondary.to_css());
			let _ = gradient.add_color_stop(1.0, &theme.background.color.to_css());
			#[allow(deprecated)]
			ctx.set_fill_style(&gradient);
		}
		Err(_) => ctx.set_fill_style_str(&theme.background.color.to_css()),
	}
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
}

fn endpoint_radius(node: &force_graph::Node<NodeInfo>, scale: &ScaledValues) -> f64 {
	scale.node_radius * node.data.user_data.size
}

/// Resolved position and look of a node, as needed to draw its edges.
struct Endpoint {
	at: Point,
	radius: f64,
	is_match: bool,
}

/// Positioned nodes of this frame. Nodes without a resolved position are left out.
fn endpoints(state: &ForceGraphState, scale: &ScaledValues) -> HashMap<DefaultNodeIdx, Endpoint> {
	let mut out = HashMap::new();
	state.graph.visit_nodes(|node| {
		if let Some(at) = Point::resolve(node.x(), node.y()) {
			out.insert(
				node.index(),
				Endpoint {
					at,
					radius: endpoint_radius(node, scale),
					is_match: node.data.user_data.view.is_match,
				},
			);
		}
	});
	out
}

fn edge_alpha(a: &Endpoint, b: &Endpoint, theme: &Theme) -> f64 {
	if a.is_match && b.is_match {
		1.0
	} else {
		theme.node.unmatched_alpha
	}
}

fn draw_edges(
	state: &ForceGraphState,
	ends: &HashMap<DefaultNodeIdx, Endpoint>,
	ctx: &CanvasRenderingContext2d,
	config: &ScaleConfig,
	scale: &ScaledValues,
	theme: &Theme,
) {
	let edge_color = theme.edge.color;
	ctx.set_line_width(scale.edge_line_width);

	for edge in &state.edges {
		let (Some(a), Some(b)) = (ends.get(&edge.source), ends.get(&edge.target)) else {
			continue;
		};
		let color = edge_color
			.with_alpha(edge_color.a * edge_alpha(a, b, theme))
			.to_css();
		ctx.set_stroke_style_str(&color);

		if edge.is_loop() {
			let (centre, radius) =
				labels::self_loop(a.at, a.radius, config.edge.loop_radius, edge.lane);
			ctx.begin_path();
			let _ = ctx.arc(centre.x, centre.y, radius, 0.0, 2.0 * PI);
			ctx.stroke();
			continue;
		}

		let control = labels::bend_point(a.at, b.at, 2.0 * edge.lane * config.edge.lane_spacing);
		let (Some((sx, sy)), Some((ex, ey))) = (
			labels::direction(a.at, control),
			labels::direction(control, b.at),
		) else {
			continue;
		};

		let (tip_x, tip_y) = (b.at.x - ex * b.radius, b.at.y - ey * b.radius);
		let (back_x, back_y) = (tip_x - ex * scale.arrow_size, tip_y - ey * scale.arrow_size);
		ctx.begin_path();
		ctx.move_to(a.at.x + sx * a.radius, a.at.y + sy * a.radius);
		ctx.quadratic_curve_to(control.x, control.y, back_x, back_y);
		ctx.stroke();

		ctx.set_fill_style_str(&color);
		let (px, py) = (-ey * scale.arrow_size * 0.5, ex * scale.arrow_size * 0.5);
		ctx.begin_path();
		ctx.move_to(tip_x, tip_y);
		ctx.line_to(back_x + px, back_y + py);
		ctx.line_to(back_x - px, back_y - py);
		ctx.close_path();
		ctx.fill();
	}
}

fn draw_edge_labels(
	state: &ForceGraphState,
	ends: &HashMap<DefaultNodeIdx, Endpoint>,
	ctx: &CanvasRenderingContext2d,
	config: &ScaleConfig,
	theme: &Theme,
) {
	let label_config = &config.edge_label;
	let measure_font = format!("{}px sans-serif", label_config.measure_font_size);

	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");

	for edge in &state.edges {
		let text = edge.label.as_str();
		if text.is_empty() {
			continue;
		}
		let (Some(a), Some(b)) = (ends.get(&edge.source), ends.get(&edge.target)) else {
			continue;
		};
		let layout = if edge.is_loop() {
			let (centre, radius) =
				labels::self_loop(a.at, a.radius, config.edge.loop_radius, edge.lane);
			EdgeLabelLayout::on_loop(centre, radius)
		} else {
			let Some(layout) = EdgeLabelLayout::place_on_lane(
				Some(a.at),
				Some(b.at),
				edge.lane * config.edge.lane_spacing,
				label_config,
			) else {
				continue;
			};
			layout
		};

		ctx.set_font(&measure_font);
		let Ok(metrics) = ctx.measure_text(text) else {
			continue;
		};
		let measured = metrics.width();
		let Some(font_size) =
			layout.fit_font_size(measured, label_config.measure_font_size, label_config)
		else {
			continue;
		};
		let text_width = measured * font_size / label_config.measure_font_size;
		let (bg_w, bg_h) = labels::label_background(text_width, font_size, label_config.padding);
		let alpha = edge_alpha(a, b, theme);

		ctx.save();
		let _ = ctx.translate(layout.center.x, layout.center.y);
		let _ = ctx.rotate(layout.angle);

		let bg = theme.edge.label_background;
		ctx.set_fill_style_str(&bg.with_alpha(bg.a * alpha).to_css());
		ctx.fill_rect(-bg_w / 2.0, -bg_h / 2.0, bg_w, bg_h);

		let fg = theme.edge.label_text;
		ctx.set_font(&format!("{}px sans-serif", font_size));
		ctx.set_fill_style_str(&fg.with_alpha(fg.a * alpha).to_css());
		let _ = ctx.fill_text(text, 0.0, 0.0);
		ctx.restore();
	}
}

fn draw_nodes(
	state: &ForceGraphState,
	ctx: &CanvasRenderingContext2d,
	config: &ScaleConfig,
	scale: &ScaledValues,
	theme: &Theme,
) {
	// Matched nodes last so they sit on top of dimmed ones.
	for matched_pass in [false, true] {
		state.graph.visit_nodes(|node| {
			if node.data.user_data.view.is_match == matched_pass {
				draw_node(state, ctx, config, scale, theme, node);
			}
		});
	}
}

fn draw_node(
	state: &ForceGraphState,
	ctx: &CanvasRenderingContext2d,
	config: &ScaleConfig,
	scale: &ScaledValues,
	theme: &Theme,
	node: &force_graph::Node<NodeInfo>,
) {
	let Some(Point { x, y }) = Point::resolve(node.x(), node.y()) else {
		return;
	};
	let info = &node.data.user_data;
	let radius = endpoint_radius(node, scale);
	let alpha = if info.view.is_match {
		1.0
	} else {
		theme.node.unmatched_alpha
	};

	ctx.set_global_alpha(alpha);
	ctx.begin_path();
	let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
	match ctx.create_radial_gradient(x - radius * 0.3, y - radius * 0.3, 0.0, x, y, radius) {
		Ok(gradient) => {
			let _ = gradient.add_color_stop(0.0, &info.color.lighten(0.4).to_css());
			let _ = gradient.add_color_stop(0.7, &info.color.to_css());
			let _ = gradient.add_color_stop(1.0, &info.color.darken(0.2).to_css());
			#[allow(deprecated)]
			ctx.set_fill_style(&gradient);
		}
		Err(_) => ctx.set_fill_style_str(&info.color.to_css()),
	}
	ctx.fill();

	if state.hovered == Some(node.index()) {
		ctx.begin_path();
		let _ = ctx.arc(x, y, radius + scale.ring_offset, 0.0, 2.0 * PI);
		ctx.set_stroke_style_str("rgba(255, 255, 255, 0.8)");
		ctx.set_line_width(scale.ring_width);
		ctx.stroke();
	}

	let (lx, ly) = labels::node_label_anchor(x, y, radius, config.node.label_offset);
	ctx.set_fill_style_str(&theme.node.label_text.to_css());
	ctx.set_font(&scale.label_font);
	ctx.set_text_align("center");
	ctx.set_text_baseline("top");
	let _ = ctx.fill_text(&info.view.id, lx, ly);
	ctx.set_global_alpha(1.0);
}
