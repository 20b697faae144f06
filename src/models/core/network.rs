//! Network configuration model.
//!
//! One [`NetworkConfig`] is built per configured network before any run starts and
//! passed explicitly into that network's run. Nothing reads ambient configuration
//! after loading.

use serde::{Deserialize, Serialize};
use std::{collections::BTreeSet, time::Duration};

use crate::models::{SecretString, TrackId};

/// Default pause between two deposit submissions from the same account
pub const DEFAULT_SUBMISSION_DELAY: Duration = Duration::from_secs(10);

/// Default upper bound on how long one submission may wait for a terminal status
pub const DEFAULT_SUBMISSION_TIMEOUT: Duration = Duration::from_secs(300);

/// Inclusion level at which a submission outcome is decided
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FinalityRequirement {
	/// Decide on the first block that includes the extrinsic
	#[default]
	InBlock,
	/// Wait until the including block is finalized. An `InBlock` notification is
	/// only provisional and is discarded if the block is retracted.
	Finalized,
}

/// Tuning for the sequential submission driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionSettings {
	/// Mandatory pause after each submission resolves
	pub inter_submission_delay: Duration,
	/// Upper bound on waiting for a terminal status of one submission
	pub submission_timeout: Duration,
	pub finality: FinalityRequirement,
}

impl Default for SubmissionSettings {
	fn default() -> Self {
		Self {
			inter_submission_delay: DEFAULT_SUBMISSION_DELAY,
			submission_timeout: DEFAULT_SUBMISSION_TIMEOUT,
			finality: FinalityRequirement::default(),
		}
	}
}

/// Everything needed to run the deposit pipeline against one network
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkConfig {
	/// Lowercase key used in the network selection list, e.g. `polkadot`
	pub slug: String,
	/// Display name, e.g. `Polkadot`
	pub name: String,
	/// WebSocket RPC endpoint
	pub endpoint: String,
	/// Secret URI (mnemonic with optional derivation path, or `//Dev` style)
	pub account_seed: SecretString,
	/// Address the operator expects the seed to derive to
	pub expected_address: Option<String>,
	/// Tracks whose referenda receive deposits
	pub tracks: BTreeSet<TrackId>,
	/// Submit deposits when `true`, only report when `false`
	pub place_deposits: bool,
	pub submission: SubmissionSettings,
}

impl NetworkConfig {
	/// Comma separated list of the target tracks, for logging
	pub fn tracks_display(&self) -> String {
		self.tracks
			.iter()
			.map(ToString::to_string)
			.collect::<Vec<_>>()
			.join(", ")
	}
}
