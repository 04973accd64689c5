//! Record shapes of the ontology dataset.

use serde::Deserialize;

/// A subject-relation-object fact.
///
/// Missing fields deserialize to empty strings; such a triple is kept in the
/// dataset but ignored by neighborhood extraction.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Triple {
	#[serde(default)]
	pub subject: String,
	#[serde(default)]
	pub relation: String,
	#[serde(default)]
	pub object: String,
}

impl Triple {
	pub fn new(
		subject: impl Into<String>,
		relation: impl Into<String>,
		object: impl Into<String>,
	) -> Self {
		Self {
			subject: subject.into(),
			relation: relation.into(),
			object: object.into(),
		}
	}

	/// True when subject, relation and object are all present.
	pub fn is_well_formed(&self) -> bool {
		!self.subject.is_empty() && !self.relation.is_empty() && !self.object.is_empty()
	}
}

/// A navigable category of the dataset.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Category {
	pub id: String,
	pub name: String,
}

/// One row of the KN Type table: a triple plus the number of source chunks it was seen in.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct KnTypeRow {
	#[serde(flatten)]
	pub triple: Triple,
	#[serde(default)]
	pub chunk_count: Option<u32>,
}

/// One term of a category's concept dictionary.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ConceptEntry {
	#[serde(default)]
	pub term_kr: String,
	#[serde(default)]
	pub term_en: String,
	#[serde(default)]
	pub description: String,
	#[serde(default)]
	pub synonyms: Vec<String>,
	#[serde(default)]
	pub chunk_count: Option<u32>,
}

/// One entry of the relationship dictionary.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct RelationEntry {
	#[serde(default)]
	pub term_kr: String,
	#[serde(default)]
	pub term_en: String,
	#[serde(default)]
	pub description: String,
	#[serde(default)]
	pub chunk_count: Option<u32>,
}

/// The complete mock dataset, keyed by category where the data is category scoped.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct KnDataset {
	#[serde(default)]
	pub categories: Vec<Category>,
	#[serde(default)]
	pub dictionary: std::collections::HashMap<String, Vec<ConceptEntry>>,
	#[serde(default)]
	pub kn_type_data: std::collections::HashMap<String, Vec<KnTypeRow>>,
	#[serde(default)]
	pub relationship_dictionary: Vec<RelationEntry>,
}
