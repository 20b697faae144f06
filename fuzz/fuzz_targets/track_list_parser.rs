#![no_main]

use decision_depositor::models::TrackId;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
	let Ok(input) = std::str::from_utf8(data) else {
		return;
	};

	if let Ok(tracks) = TrackId::parse_list(input) {
		assert!(!tracks.is_empty());

		// Formatting a parsed list and parsing it again gives the same ids
		let rendered = tracks
			.iter()
			.map(TrackId::to_string)
			.collect::<Vec<_>>()
			.join(",");
		assert_eq!(TrackId::parse_list(&rendered).ok(), Some(tracks));
	}
});
