//! Catalog error types.

use crate::models::ReferendumDecodeError;

/// Reasons a `ReferendumInfoFor` entry was left out of the catalog
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
	/// The storage key did not contain a referendum index
	#[error("invalid referendum key: {0}")]
	InvalidKey(String),

	/// The storage value could not be decoded against the runtime metadata
	#[error("undecodable storage value: {0}")]
	UndecodableValue(String),

	/// The value decoded, but not as a known `ReferendumInfo`
	#[error(transparent)]
	InvalidInfo(#[from] ReferendumDecodeError),
}
