//! Leptos component wrapping the force-directed graph canvas.
//!
//! The component creates an HTML canvas sized to its parent container and wires
//! up mouse/wheel handlers for node dragging, panning and zooming. An animation
//! loop runs via `requestAnimationFrame`, advancing the physics simulation and
//! redrawing each frame. A new [`GraphModel`] replaces the simulation wholesale.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;
use log::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent};

use super::render;
use super::scale::ScaleConfig;
use super::state::ForceGraphState;
use super::theme::Theme;
use super::viewport::{SizeObserver, ViewportSize};
use crate::neighborhood::GraphModel;

/// Bundles graph simulation state with visual configuration.
struct GraphContext {
	state: ForceGraphState,
	scale: ScaleConfig,
	theme: Theme,
	viewport: ViewportSize,
}

/// Shared flag telling the frame loop whether its component is still mounted.
#[derive(Clone, Debug)]
struct FrameGate(Arc<AtomicBool>);

impl FrameGate {
	fn open() -> Self {
		Self(Arc::new(AtomicBool::new(true)))
	}

	fn close(&self) {
		self.0.store(false, Ordering::Release);
	}

	fn is_open(&self) -> bool {
		self.0.load(Ordering::Acquire)
	}
}

/// Pointer position relative to the canvas' top-left corner.
fn pointer_position(canvas_ref: NodeRef<leptos::html::Canvas>, ev: &MouseEvent) -> Option<(f64, f64)> {
	let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
	let rect = canvas.get_bounding_client_rect();
	Some((
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}

/// Renders an interactive force-directed graph on a canvas element.
///
/// The canvas follows the size of its parent element; give the parent a
/// definite size and `position: relative`. Double-clicking a node reports its
/// id through `on_node_select`.
#[component]
pub fn ForceGraphCanvas(
	#[prop(into)] data: Signal<GraphModel>,
	#[prop(optional, into)] on_node_select: Option<Callback<String>>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<GraphContext>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let observer: Rc<RefCell<Option<SizeObserver>>> = Rc::new(RefCell::new(None));
	let (context_init, animate_init, observer_init) =
		(context.clone(), animate.clone(), observer.clone());
	let gate = FrameGate::open();
	let gate_init = gate.clone();
	on_cleanup(move || gate.close());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if context_init.borrow().is_some() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		let container = canvas.parent_element();

		let viewport = container
			.as_ref()
			.map(|p| ViewportSize::initial(p.client_width() as f64, p.client_height() as f64))
			.unwrap_or_default();
		canvas.set_width(viewport.width as u32);
		canvas.set_height(viewport.height as u32);

		let Some(ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			warn!("kn-explorer: 2d canvas context unavailable");
			return;
		};

		let theme = Theme::default();
		let scale = ScaleConfig::default();
		*context_init.borrow_mut() = Some(GraphContext {
			state: ForceGraphState::new(
				&data.get_untracked(),
				viewport.width,
				viewport.height,
				&theme,
				&scale,
			),
			scale,
			theme,
			viewport,
		});

		if let Some(container) = container {
			let (context_resize, canvas_resize) = (context_init.clone(), canvas.clone());
			let watched = SizeObserver::watch(&container, move |w, h| {
				if let Some(ref mut c) = *context_resize.borrow_mut() {
					if c.viewport.observe(w, h) {
						canvas_resize.set_width(c.viewport.width as u32);
						canvas_resize.set_height(c.viewport.height as u32);
						c.state.resize(c.viewport.width, c.viewport.height);
					}
				}
			});
			match watched {
				Ok(o) => *observer_init.borrow_mut() = Some(o),
				Err(e) => warn!("kn-explorer: resize observer unavailable: {:?}", e),
			}
		}

		let (context_anim, animate_inner, gate_anim) =
			(context_init.clone(), animate_init.clone(), gate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			// Unmounted: release the state and this closure, ending the loop.
			if !gate_anim.is_open() {
				context_anim.borrow_mut().take();
				let _ = animate_inner.borrow_mut().take();
				return;
			}
			if let Some(ref mut c) = *context_anim.borrow_mut() {
				if c.state.animation_running {
					c.state.tick(0.016);
				}
				render::render(&c.state, &ctx, &c.scale, &c.theme);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				if let Some(window) = web_sys::window() {
					let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
				}
			}
		}));
		if let (Some(cb), Some(window)) = (animate_init.borrow().as_ref(), web_sys::window()) {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let context_sync = context.clone();
	Effect::new(move |_| {
		let model = data.get();
		if let Some(ref mut c) = *context_sync.borrow_mut() {
			c.state.load(&model, &c.theme, &c.scale);
			debug!(
				"kn-explorer: graph reloaded with {} nodes, {} edges",
				c.state.node_count(),
				model.edges.len()
			);
		}
	});

	let context_md = context.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some((x, y)) = pointer_position(canvas_ref, &ev) else {
			return;
		};

		if let Some(ref mut c) = *context_md.borrow_mut() {
			if let Some(idx) = c.state.node_at_position(x, y, &c.scale) {
				c.state.drag.active = true;
				c.state.drag.node_idx = Some(idx);
				c.state.drag.start_x = x;
				c.state.drag.start_y = y;
				c.state.graph.visit_nodes(|node| {
					if node.index() == idx {
						c.state.drag.node_start_x = node.x();
						c.state.drag.node_start_y = node.y();
					}
				});
			} else {
				c.state.pan.active = true;
				c.state.pan.start_x = x;
				c.state.pan.start_y = y;
				c.state.pan.transform_start_x = c.state.transform.x;
				c.state.pan.transform_start_y = c.state.transform.y;
			}
		}
	};

	let context_mm = context.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = pointer_position(canvas_ref, &ev) else {
			return;
		};

		if let Some(ref mut c) = *context_mm.borrow_mut() {
			if !c.state.drag.active {
				let hovered = c.state.node_at_position(x, y, &c.scale);
				c.state.set_hover(hovered);
			}

			if c.state.drag.active {
				if let Some(idx) = c.state.drag.node_idx {
					let (dx, dy) = (
						(x - c.state.drag.start_x) / c.state.transform.k,
						(y - c.state.drag.start_y) / c.state.transform.k,
					);
					let (nx, ny) = (
						c.state.drag.node_start_x + dx as f32,
						c.state.drag.node_start_y + dy as f32,
					);
					c.state.graph.visit_nodes_mut(|node| {
						if node.index() == idx {
							node.data.x = nx;
							node.data.y = ny;
							node.data.is_anchor = true;
						}
					});
					c.state.wake();
				}
			} else if c.state.pan.active {
				c.state.transform.x = c.state.pan.transform_start_x + (x - c.state.pan.start_x);
				c.state.transform.y = c.state.pan.transform_start_y + (y - c.state.pan.start_y);
			}
		}
	};

	let context_mu = context.clone();
	let on_mouseup = move |_: MouseEvent| {
		if let Some(ref mut c) = *context_mu.borrow_mut() {
			c.state.drag.active = false;
			c.state.drag.node_idx = None;
			c.state.pan.active = false;
		}
	};

	let context_ml = context.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut c) = *context_ml.borrow_mut() {
			c.state.drag.active = false;
			c.state.drag.node_idx = None;
			c.state.pan.active = false;
			c.state.set_hover(None);
		}
	};

	let context_dc = context.clone();
	let on_dblclick = move |ev: MouseEvent| {
		let Some((x, y)) = pointer_position(canvas_ref, &ev) else {
			return;
		};
		let selected = context_dc.borrow().as_ref().and_then(|c| {
			c.state
				.node_at_position(x, y, &c.scale)
				.and_then(|idx| c.state.node_id(idx))
		});
		if let (Some(id), Some(cb)) = (selected, on_node_select) {
			cb.run(id);
		}
	};

	let context_wh = context.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let Some((x, y)) = pointer_position(canvas_ref, &ev) else {
			return;
		};

		if let Some(ref mut c) = *context_wh.borrow_mut() {
			let factor = if ev.delta_y() > 0.0 { 0.9 } else { 1.1 };
			let new_k = (c.state.transform.k * factor).clamp(0.1, 10.0);
			let ratio = new_k / c.state.transform.k;
			c.state.transform.x = x - (x - c.state.transform.x) * ratio;
			c.state.transform.y = y - (y - c.state.transform.y) * ratio;
			c.state.transform.k = new_k;
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="force-graph-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:dblclick=on_dblclick
			on:wheel=on_wheel
		/>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_frame_gate_closes_for_every_holder() {
		let gate = FrameGate::open();
		let held_by_loop = gate.clone();
		assert!(held_by_loop.is_open());
		gate.close();
		assert!(!held_by_loop.is_open());
	}
}
