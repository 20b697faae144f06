use crate::properties::strategies::{entries_strategy, targets_strategy};

use decision_depositor::services::{catalog::build_catalog, filter::select_deposit_tasks};
use proptest::{prelude::*, test_runner::Config};

proptest! {
	#![proptest_config(Config {
		failure_persistence: None,
		..Config::default()
	})]

	// Only ongoing referenda make it into the catalog, and every entry is counted once
	#[test]
	fn test_catalog_only_ongoing(entries in entries_strategy()) {
		let (records, stats) = build_catalog(&entries);

		prop_assert!(records.len() <= entries.len());
		prop_assert!(records.iter().all(|record| record.is_ongoing));
		prop_assert_eq!(stats.entries, entries.len());
		prop_assert_eq!(stats.ongoing, records.len());
		prop_assert_eq!(stats.ongoing + stats.not_ongoing + stats.decode_failures, stats.entries);
	}

	// Scanning is idempotent
	#[test]
	fn test_catalog_is_deterministic(entries in entries_strategy(), targets in targets_strategy()) {
		let (first, _) = build_catalog(&entries);
		let (second, _) = build_catalog(&entries);
		prop_assert_eq!(&first, &second);
		prop_assert_eq!(
			select_deposit_tasks(&first, &targets),
			select_deposit_tasks(&second, &targets)
		);
	}
}
