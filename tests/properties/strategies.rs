use decision_depositor::{
	models::{ReferendumEntry, ReferendumRecord, TrackId},
	utils::tests::builders::referendum::ReferendumEntryBuilder,
};
use proptest::prelude::*;

pub const MAX_TRACK: u16 = 40;
const MAX_COLLECTION_SIZE: usize = 30;

const TERMINAL_STATES: &[&str] = &["Approved", "Rejected", "Cancelled", "TimedOut", "Killed"];

pub fn track_strategy() -> impl Strategy<Value = TrackId> {
	(0..MAX_TRACK).prop_map(TrackId)
}

pub fn record_strategy() -> impl Strategy<Value = ReferendumRecord> {
	(
		any::<u32>(),
		track_strategy(),
		any::<bool>(),
		any::<bool>(),
		any::<bool>(),
	)
		.prop_map(
			|(index, track, is_ongoing, has_decision_deposit, in_deciding)| ReferendumRecord {
				index,
				track,
				is_ongoing,
				has_decision_deposit,
				submitted_by: "unknown".to_string(),
				in_deciding,
			},
		)
}

pub fn records_strategy() -> impl Strategy<Value = Vec<ReferendumRecord>> {
	prop::collection::vec(record_strategy(), 0..MAX_COLLECTION_SIZE)
}

pub fn targets_strategy() -> impl Strategy<Value = std::collections::BTreeSet<TrackId>> {
	prop::collection::btree_set(track_strategy(), 0..5)
}

/// Storage entries in every shape the catalog has to handle: ongoing (with and
/// without deposits, numeric or string tracks), finished, undecodable and keyless
pub fn entry_strategy() -> impl Strategy<Value = ReferendumEntry> {
	let ongoing = (any::<u32>(), 0..MAX_TRACK, any::<bool>(), any::<bool>(), any::<bool>())
		.prop_map(|(index, track, deposit, deciding, as_string)| {
			let mut builder = ReferendumEntryBuilder::new().index(index);
			builder = if as_string {
				builder.track_value(subxt::dynamic::Value::string(track.to_string()))
			} else {
				builder.track(track)
			};
			if deposit {
				builder = builder.with_decision_deposit();
			}
			if deciding {
				builder = builder.deciding();
			}
			builder.build()
		});

	let finished = (any::<u32>(), prop::sample::select(TERMINAL_STATES))
		.prop_map(|(index, state)| {
			ReferendumEntryBuilder::new()
				.index(index)
				.terminal(state)
				.build()
		});

	let broken = prop_oneof![
		any::<u32>().prop_map(|index| ReferendumEntryBuilder::new()
			.index(index)
			.undecodable("codec error")
			.build()),
		Just(ReferendumEntryBuilder::new().without_key().build()),
	];

	prop_oneof![6 => ongoing, 3 => finished, 1 => broken]
}

pub fn entries_strategy() -> impl Strategy<Value = Vec<ReferendumEntry>> {
	prop::collection::vec(entry_strategy(), 0..MAX_COLLECTION_SIZE)
}
