//! Visual theming for the neighborhood graph.

use crate::neighborhood::NodeRole;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Lighten the color by a factor (0.0 = unchanged, 1.0 = white)
	pub fn lighten(self, factor: f64) -> Self {
		let f = factor.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 + (255.0 - self.r as f64) * f) as u8,
			g: (self.g as f64 + (255.0 - self.g as f64) * f) as u8,
			b: (self.b as f64 + (255.0 - self.b as f64) * f) as u8,
			a: self.a,
		}
	}

	/// Darken the color by a factor (0.0 = unchanged, 1.0 = black)
	pub fn darken(self, factor: f64) -> Self {
		let f = 1.0 - factor.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 * f) as u8,
			g: (self.g as f64 * f) as u8,
			b: (self.b as f64 * f) as u8,
			a: self.a,
		}
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Background style configuration.
#[derive(Clone, Debug)]
pub struct BackgroundStyle {
	pub color: Color,
	/// Centre color of the radial gradient.
	pub color_secondary: Color,
}

/// Edge line and label colors.
#[derive(Clone, Debug)]
pub struct EdgeStyle {
	pub color: Color,
	/// Fill behind edge labels.
	pub label_background: Color,
	pub label_text: Color,
}

/// Node fill colors and search dimming.
#[derive(Clone, Debug)]
pub struct NodeStyle {
	pub center: Color,
	pub neighbor: Color,
	/// Opacity of nodes that do not match the active search term.
	pub unmatched_alpha: f64,
	pub label_text: Color,
}

impl NodeStyle {
	pub fn color_for(&self, role: NodeRole) -> Color {
		match role {
			NodeRole::Center => self.center,
			NodeRole::Neighbor => self.neighbor,
		}
	}
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	pub background: BackgroundStyle,
	pub edge: EdgeStyle,
	pub node: NodeStyle,
}

impl Default for Theme {
	fn default() -> Self {
		Self {
			background: BackgroundStyle {
				color: Color::rgb(22, 27, 34),
				color_secondary: Color::rgb(30, 35, 42),
			},
			edge: EdgeStyle {
				color: Color::rgba(140, 160, 180, 0.6),
				label_background: Color::rgba(22, 27, 34, 0.8),
				label_text: Color::rgb(169, 169, 169),
			},
			node: NodeStyle {
				center: Color::rgb(214, 137, 76),
				neighbor: Color::rgb(94, 129, 172),
				unmatched_alpha: 0.25,
				label_text: Color::rgba(255, 255, 255, 0.85),
			},
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_to_css_hex_and_rgba() {
		assert_eq!(Color::rgb(255, 0, 16).to_css(), "#ff0010");
		assert_eq!(Color::rgba(1, 2, 3, 0.5).to_css(), "rgba(1, 2, 3, 0.5)");
	}

	#[test]
	fn test_lighten_darken_bounds() {
		let c = Color::rgb(100, 100, 100);
		assert_eq!(c.lighten(1.0), Color::rgb(255, 255, 255));
		assert_eq!(c.darken(1.0), Color::rgb(0, 0, 0));
		assert_eq!(c.lighten(0.0), c);
	}

	#[test]
	fn test_role_colors_differ() {
		let theme = Theme::default();
		assert_ne!(
			theme.node.color_for(NodeRole::Center),
			theme.node.color_for(NodeRole::Neighbor)
		);
	}
}
