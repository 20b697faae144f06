//! Deposit need filtering.
//!
//! Selects the referenda that are ongoing, sit on one of the configured tracks and
//! have no decision deposit yet. Track ids are normalized when decoded, so matching
//! is plain equality.

use std::collections::BTreeSet;

use crate::models::{DepositTask, FilterSummary, ReferendumRecord, TrackId};

/// Whether `record` needs a decision deposit placed on one of `targets`
pub fn needs_deposit(record: &ReferendumRecord, targets: &BTreeSet<TrackId>) -> bool {
	record.is_ongoing && targets.contains(&record.track) && !record.has_decision_deposit
}

/// Returns a task for every record needing a deposit, preserving order
pub fn select_deposit_tasks(
	records: &[ReferendumRecord],
	targets: &BTreeSet<TrackId>,
) -> Vec<DepositTask> {
	records
		.iter()
		.filter(|record| needs_deposit(record, targets))
		.map(DepositTask::from)
		.collect()
}

/// Counts reported alongside the selected tasks
pub fn summarize(records: &[ReferendumRecord], targets: &BTreeSet<TrackId>) -> FilterSummary {
	let ongoing = records.iter().filter(|record| record.is_ongoing);

	FilterSummary {
		ongoing: ongoing.clone().count(),
		on_target_tracks: ongoing
			.clone()
			.filter(|record| targets.contains(&record.track))
			.count(),
		without_deposit: ongoing
			.clone()
			.filter(|record| !record.has_decision_deposit)
			.count(),
		needing_deposit: ongoing
			.filter(|record| needs_deposit(record, targets))
			.count(),
	}
}
