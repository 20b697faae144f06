#![no_main]

use decision_depositor::{
	models::ReferendumEntry,
	services::catalog::build_catalog,
	utils::tests::builders::referendum::ReferendumEntryBuilder,
};
use libfuzzer_sys::fuzz_target;
use subxt::dynamic::Value;

fuzz_target!(|data: &[u8]| {
	let Some((&selector, rest)) = data.split_first() else {
		return;
	};
	let text = String::from_utf8_lossy(rest).to_string();
	let mut key = [0u8; 16];
	for (slot, byte) in key.iter_mut().zip(rest) {
		*slot = *byte;
	}

	let entry = match selector % 4 {
		// Arbitrary track text, as produced by human readable formatting
		0 => ReferendumEntryBuilder::new()
			.index(u32::from(selector))
			.track_value(Value::string(text))
			.build(),
		// Arbitrary key width
		1 => ReferendumEntry {
			keys: vec![Value::u128(u128::from_le_bytes(key))],
			value: ReferendumEntryBuilder::new().build_value(),
		},
		// Arbitrary state name
		2 => ReferendumEntryBuilder::new()
			.raw_value(Value::unnamed_variant(text, [Value::u128(1)]))
			.build(),
		_ => ReferendumEntryBuilder::new()
			.raw_value(Value::from_bytes(rest))
			.build(),
	};

	let (records, stats) = build_catalog(std::slice::from_ref(&entry));
	assert!(records.len() <= 1);
	assert_eq!(stats.entries, 1);
	assert_eq!(stats.ongoing + stats.not_ongoing + stats.decode_failures, 1);
});
