//! Referendum catalog.
//!
//! Turns the raw entries of the `Referenda.ReferendumInfoFor` storage map into
//! normalized [`ReferendumRecord`]s. Only ongoing referenda are kept. Entries that
//! cannot be decoded are logged and skipped so one bad entry never fails a scan.

mod error;

pub use error::CatalogError;

use subxt::dynamic::Value;

use crate::models::{
	value::as_unsigned, CatalogStats, ReferendumEntry, ReferendumInfo, ReferendumRecord,
	UNKNOWN_SUBMITTER,
};

/// Reads the referendum index from the decoded map key
pub fn decode_index(keys: &[Value]) -> Result<u32, CatalogError> {
	let key = keys
		.first()
		.ok_or_else(|| CatalogError::InvalidKey("storage key has no values".into()))?;
	as_unsigned(key)
		.and_then(|index| u32::try_from(index).ok())
		.ok_or_else(|| CatalogError::InvalidKey(format!("{:?}", key)))
}

/// Decodes one storage entry.
///
/// Returns `Ok(None)` for referenda that are no longer ongoing.
pub fn decode_entry(entry: &ReferendumEntry) -> Result<Option<ReferendumRecord>, CatalogError> {
	let index = decode_index(&entry.keys)?;
	let value = entry
		.value
		.as_ref()
		.map_err(|e| CatalogError::UndecodableValue(e.clone()))?;

	let info = ReferendumInfo::try_from(value)?;
	let Some(status) = info.as_ongoing() else {
		tracing::debug!(index, state = info.state_name(), "Skipping referendum");
		return Ok(None);
	};

	Ok(Some(ReferendumRecord {
		index,
		track: status.track,
		is_ongoing: true,
		has_decision_deposit: status.has_decision_deposit,
		submitted_by: status
			.submitted_by
			.as_ref()
			.map(ToString::to_string)
			.unwrap_or_else(|| UNKNOWN_SUBMITTER.to_string()),
		in_deciding: status.in_deciding,
	}))
}

/// Builds the catalog of ongoing referenda, in iteration order.
pub fn build_catalog(entries: &[ReferendumEntry]) -> (Vec<ReferendumRecord>, CatalogStats) {
	let mut stats = CatalogStats {
		entries: entries.len(),
		..Default::default()
	};

	let records = entries
		.iter()
		.filter_map(|entry| match decode_entry(entry) {
			Ok(Some(record)) => {
				stats.ongoing += 1;
				Some(record)
			}
			Ok(None) => {
				stats.not_ongoing += 1;
				None
			}
			Err(e) => {
				stats.decode_failures += 1;
				match decode_index(&entry.keys) {
					Ok(index) => tracing::warn!("Failed to decode referendum {}: {}", index, e),
					Err(_) => tracing::warn!("Failed to decode referendum entry: {}", e),
				}
				None
			}
		})
		.collect();

	(records, stats)
}
