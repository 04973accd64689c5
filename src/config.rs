//! Explorer-wide settings.

/// Settings for the explorer shell and the neighborhood controls.
#[derive(Clone, Debug)]
pub struct ExplorerConfig {
	/// Smallest selectable traversal depth.
	pub min_depth: u32,
	/// Largest selectable traversal depth.
	pub max_depth: u32,
	/// Depth used until the user changes it.
	pub default_depth: u32,
	/// Id of the `<script type="application/json">` element holding the dataset.
	pub data_element_id: &'static str,
}

impl Default for ExplorerConfig {
	fn default() -> Self {
		Self {
			min_depth: 1,
			max_depth: 5,
			default_depth: 2,
			data_element_id: "kn-data",
		}
	}
}

impl ExplorerConfig {
	pub fn clamp_depth(&self, depth: u32) -> u32 {
		depth.clamp(self.min_depth, self.max_depth)
	}

	/// Parse a depth from form input, falling back to the default on garbage.
	pub fn parse_depth(&self, input: &str) -> u32 {
		input
			.trim()
			.parse::<u32>()
			.map(|d| self.clamp_depth(d))
			.unwrap_or_else(|_| self.clamp_depth(self.default_depth))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_depth() {
		let config = ExplorerConfig::default();
		assert_eq!(config.parse_depth("3"), 3);
		assert_eq!(config.parse_depth(" 7 "), 5);
		assert_eq!(config.parse_depth("0"), 1);
		assert_eq!(config.parse_depth("-1"), 2);
		assert_eq!(config.parse_depth(""), 2);
	}
}
