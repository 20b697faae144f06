use std::str::FromStr;

use decision_depositor::models::{decode_track, TrackId};
use proptest::{prelude::*, test_runner::Config};
use subxt::dynamic::Value;

fn with_thousands_separator(value: u16) -> String {
	let digits = value.to_string();
	let mut out = String::new();
	for (i, c) in digits.chars().enumerate() {
		if i > 0 && (digits.len() - i) % 3 == 0 {
			out.push(',');
		}
		out.push(c);
	}
	out
}

proptest! {
	#![proptest_config(Config {
		failure_persistence: None,
		..Config::default()
	})]

	// Numeric and human readable chain values normalize to the same track
	#[test]
	fn test_track_representation_independent(track in any::<u16>()) {
		let numeric = decode_track(&Value::u128(u128::from(track))).unwrap();
		let plain = decode_track(&Value::string(track.to_string())).unwrap();
		let grouped = decode_track(&Value::string(with_thousands_separator(track))).unwrap();

		prop_assert_eq!(numeric, TrackId(track));
		prop_assert_eq!(plain, numeric);
		prop_assert_eq!(grouped, numeric);
	}

	// Configured track lists keep every listed id, in order
	#[test]
	fn test_parse_list_keeps_ids(tracks in prop::collection::vec(any::<u16>(), 1..8)) {
		let input = tracks.iter().map(|t| format!(" {} ", t)).collect::<Vec<_>>().join(",");
		let parsed = TrackId::parse_list(&input).unwrap();

		prop_assert_eq!(parsed, tracks.into_iter().map(TrackId).collect::<Vec<_>>());
	}

	// Values beyond u16 are rejected rather than truncated
	#[test]
	fn test_out_of_range_rejected(value in (u32::from(u16::MAX) + 1)..u32::MAX) {
		prop_assert!(TrackId::from_str(&value.to_string()).is_err());
		prop_assert!(decode_track(&Value::u128(u128::from(value))).is_err());
	}
}
