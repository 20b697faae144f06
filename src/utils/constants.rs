//! Constants shared across the application

/// Networks the placer knows how to run against.
///
/// The set is static: networks are selected from this table by slug and are never
/// discovered at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownNetwork {
	pub slug: &'static str,
	pub name: &'static str,
	pub default_endpoint: &'static str,
}

pub const KNOWN_NETWORKS: &[KnownNetwork] = &[
	KnownNetwork {
		slug: "polkadot",
		name: "Polkadot",
		default_endpoint: "wss://rpc.polkadot.io",
	},
	KnownNetwork {
		slug: "kusama",
		name: "Kusama",
		default_endpoint: "wss://kusama-rpc.polkadot.io",
	},
];

/// Looks up a known network by slug
pub fn known_network(slug: &str) -> Option<&'static KnownNetwork> {
	KNOWN_NETWORKS.iter().find(|network| network.slug == slug)
}

/// Networks processed when no selection is given
pub const DEFAULT_NETWORKS: &str = "polkadot,kusama";

/// Development seed used when no account seed is configured
pub const DEFAULT_ACCOUNT_SEED: &str = "//Alice";

/// The small tipper track
pub const DEFAULT_TRACK_ID: &str = "30";

/// Pallet and storage entry holding referendum states
pub const REFERENDA_PALLET: &str = "Referenda";
pub const REFERENDUM_INFO_STORAGE: &str = "ReferendumInfoFor";
pub const PLACE_DECISION_DEPOSIT_CALL: &str = "place_decision_deposit";

/// Default directory for log files
pub const DEFAULT_LOG_DIR: &str = "logs/";
