use crate::properties::strategies::{records_strategy, targets_strategy};

use decision_depositor::services::filter::{select_deposit_tasks, summarize};
use proptest::{prelude::*, test_runner::Config};

proptest! {
	#![proptest_config(Config {
		failure_persistence: None,
		..Config::default()
	})]

	// Every task comes from an ongoing record on a target track without a deposit
	#[test]
	fn test_tasks_need_deposit(records in records_strategy(), targets in targets_strategy()) {
		let tasks = select_deposit_tasks(&records, &targets);

		for task in &tasks {
			prop_assert!(targets.contains(&task.track));
			prop_assert!(records.iter().any(|record| record.index == task.index
				&& record.is_ongoing
				&& !record.has_decision_deposit));
		}
	}

	// Selection is exactly the qualifying records, in their original order
	#[test]
	fn test_selection_is_ordered_subsequence(
		records in records_strategy(),
		targets in targets_strategy()
	) {
		let expected: Vec<u32> = records
			.iter()
			.filter(|r| r.is_ongoing && targets.contains(&r.track) && !r.has_decision_deposit)
			.map(|r| r.index)
			.collect();
		let selected: Vec<u32> = select_deposit_tasks(&records, &targets)
			.iter()
			.map(|task| task.index)
			.collect();

		prop_assert_eq!(selected, expected);
	}

	// Records with a decision deposit never become tasks
	#[test]
	fn test_deposited_records_excluded(
		mut records in records_strategy(),
		targets in targets_strategy()
	) {
		for record in &mut records {
			record.has_decision_deposit = true;
		}
		prop_assert!(select_deposit_tasks(&records, &targets).is_empty());
	}

	// Summary counters are consistent with each other and the selection
	#[test]
	fn test_summary_bounds(records in records_strategy(), targets in targets_strategy()) {
		let summary = summarize(&records, &targets);
		let tasks = select_deposit_tasks(&records, &targets);

		prop_assert_eq!(summary.needing_deposit, tasks.len());
		prop_assert!(summary.needing_deposit <= summary.on_target_tracks);
		prop_assert!(summary.needing_deposit <= summary.without_deposit);
		prop_assert!(summary.on_target_tracks <= summary.ongoing);
		prop_assert!(summary.ongoing <= records.len());
	}
}
