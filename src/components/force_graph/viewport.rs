//! Container-driven canvas sizing.
//!
//! A `ResizeObserver` watches the canvas container's content box. Measurements
//! pass through [`ViewportSize`], which keeps the last positive size so a
//! collapsed or detached container never shrinks the canvas to nothing.

use wasm_bindgen::prelude::*;
use web_sys::{Element, ResizeObserver, ResizeObserverEntry};

/// Size used before the first valid measurement.
pub const FALLBACK_SIZE: (f64, f64) = (800.0, 600.0);

/// Last accepted render-surface size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportSize {
	pub width: f64,
	pub height: f64,
}

impl Default for ViewportSize {
	fn default() -> Self {
		Self {
			width: FALLBACK_SIZE.0,
			height: FALLBACK_SIZE.1,
		}
	}
}

impl ViewportSize {
	/// Start from an initial measurement, using the fallback where it is unusable.
	pub fn initial(width: f64, height: f64) -> Self {
		let mut size = Self::default();
		size.observe(width, height);
		size
	}

	/// Record a new measurement. Returns `true` when the size changed.
	///
	/// Zero, negative or non-finite dimensions are ignored.
	pub fn observe(&mut self, width: f64, height: f64) -> bool {
		let valid = |v: f64| v.is_finite() && v > 0.0;
		if !valid(width) || !valid(height) {
			return false;
		}
		let (width, height) = (width.floor(), height.floor());
		if width < 1.0 || height < 1.0 || (width == self.width && height == self.height) {
			return false;
		}
		self.width = width;
		self.height = height;
		true
	}
}

/// Owns a `ResizeObserver` and its callback; disconnects when dropped.
pub struct SizeObserver {
	observer: ResizeObserver,
	_callback: Closure<dyn FnMut(js_sys::Array)>,
}

impl SizeObserver {
	/// Watch `target`, invoking `on_resize` with each new content-box size.
	pub fn watch<F>(target: &Element, mut on_resize: F) -> Result<Self, JsValue>
	where
		F: FnMut(f64, f64) + 'static,
	{
		let callback = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
			let Some(entry) = entries.iter().last() else {
				return;
			};
			let entry: ResizeObserverEntry = entry.unchecked_into();
			let rect = entry.content_rect();
			on_resize(rect.width(), rect.height());
		});
		let observer = ResizeObserver::new(callback.as_ref().unchecked_ref())?;
		observer.observe(target);
		Ok(Self {
			observer,
			_callback: callback,
		})
	}
}

impl Drop for SizeObserver {
	fn drop(&mut self) {
		self.observer.disconnect();
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_initial_falls_back_on_zero() {
		assert_eq!(ViewportSize::initial(0.0, 0.0), ViewportSize::default());
		assert_eq!(
			ViewportSize::initial(640.0, 480.0),
			ViewportSize {
				width: 640.0,
				height: 480.0
			}
		);
	}

	#[test]
	fn test_observe_ignores_invalid_dimensions() {
		let mut size = ViewportSize::initial(640.0, 480.0);
		assert!(!size.observe(0.0, 300.0));
		assert!(!size.observe(300.0, -5.0));
		assert!(!size.observe(f64::NAN, 300.0));
		assert!(!size.observe(0.4, 0.4));
		assert_eq!(size.width, 640.0);
		assert_eq!(size.height, 480.0);
	}

	#[test]
	fn test_observe_reports_changes_only() {
		let mut size = ViewportSize::initial(640.0, 480.0);
		assert!(!size.observe(640.2, 480.7));
		assert!(size.observe(1024.0, 480.0));
		assert_eq!(size.width, 1024.0);
		assert!(!size.observe(1024.0, 480.0));
	}
}
