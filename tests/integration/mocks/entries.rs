//! Referendum storage fixtures.

use decision_depositor::{
	models::ReferendumEntry, utils::tests::builders::referendum::ReferendumEntryBuilder,
};

/// Three ongoing referenda: track 7 with a deposit (10), track 7 without (11) and
/// track 99 without (12), plus one approved referendum (13)
pub fn mixed_entries() -> Vec<ReferendumEntry> {
	vec![
		ReferendumEntryBuilder::new()
			.index(10)
			.track(7)
			.with_decision_deposit()
			.build(),
		ReferendumEntryBuilder::new().index(11).track(7).build(),
		ReferendumEntryBuilder::new().index(12).track(99).build(),
		ReferendumEntryBuilder::new()
			.index(13)
			.terminal("Approved")
			.build(),
	]
}
