//! In-memory ontology store.
//!
//! The dataset is read once from embedded JSON and never written back. Views
//! depend on the narrow [`TripleSource`] capability for graph data and on
//! [`KnStore`] directly for list data.

mod error;
mod types;

pub use error::{DataError, Result};
pub use types::{Category, ConceptEntry, KnDataset, KnTypeRow, RelationEntry, Triple};

/// Lower bound of the denominator used for relative chunk bars.
const MIN_CHUNK_SCALE: u32 = 10;

/// Supplies the triples of one category.
pub trait TripleSource {
	/// All triples of `category`, in dataset order. Unknown categories yield nothing.
	fn triples(&self, category: &str) -> Vec<Triple>;
}

/// Read-only repository over a loaded [`KnDataset`].
#[derive(Clone, Debug, Default)]
pub struct KnStore {
	dataset: KnDataset,
}

impl KnStore {
	pub fn new(dataset: KnDataset) -> Self {
		Self { dataset }
	}

	/// Parse a dataset from its JSON text.
	pub fn from_json(json: &str) -> Result<Self> {
		let dataset = serde_json::from_str::<KnDataset>(json)?;
		Ok(Self::new(dataset))
	}

	pub fn categories(&self) -> &[Category] {
		&self.dataset.categories
	}

	/// The category selected when the explorer starts.
	pub fn first_category(&self) -> Option<&Category> {
		self.dataset.categories.first()
	}

	/// Concept dictionary terms of `category`.
	pub fn dictionary(&self, category: &str) -> &[ConceptEntry] {
		self.dataset
			.dictionary
			.get(category)
			.map(Vec::as_slice)
			.unwrap_or_default()
	}

	pub fn kn_types(&self, category: &str) -> &[KnTypeRow] {
		self.dataset
			.kn_type_data
			.get(category)
			.map(Vec::as_slice)
			.unwrap_or_default()
	}

	pub fn relationship_dictionary(&self) -> &[RelationEntry] {
		&self.dataset.relationship_dictionary
	}

	/// Total number of KN Type rows across all categories.
	pub fn row_count(&self) -> usize {
		self.dataset.kn_type_data.values().map(Vec::len).sum()
	}
}

impl TripleSource for KnStore {
	fn triples(&self, category: &str) -> Vec<Triple> {
		self.kn_types(category)
			.iter()
			.map(|row| row.triple.clone())
			.collect()
	}
}

/// Relative width in `[0, 1]` of a chunk-count bar within a list of rows.
///
/// The largest count in `counts` sets the scale, but never below 10 so that a
/// list of small counts does not render full-width bars.
pub fn chunk_bar_ratio<I>(count: Option<u32>, counts: I) -> f64
where
	I: IntoIterator<Item = Option<u32>>,
{
	let max = counts
		.into_iter()
		.map(|c| c.unwrap_or(0))
		.fold(MIN_CHUNK_SCALE, u32::max);
	(count.unwrap_or(0) as f64 / max as f64).clamp(0.0, 1.0)
}

/// Categories whose name contains `query`, ignoring case. An empty query keeps all.
pub fn filter_categories<'a>(categories: &'a [Category], query: &str) -> Vec<&'a Category> {
	let needle = query.to_lowercase();
	categories
		.iter()
		.filter(|c| needle.is_empty() || c.name.to_lowercase().contains(&needle))
		.collect()
}
