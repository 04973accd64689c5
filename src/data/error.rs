//! Dataset loading errors.

use thiserror::Error;

/// Failures while reading the embedded dataset.
#[derive(Error, Debug)]
pub enum DataError {
	#[error("dataset element not found: #{0}")]
	MissingElement(String),

	#[error("failed to parse dataset: {0}")]
	Parse(#[from] serde_json::Error),
}

/// Result alias for dataset operations.
pub type Result<T> = std::result::Result<T, DataError>;
