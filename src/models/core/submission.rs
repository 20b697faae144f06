//! Results of deposit placements and network runs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{DepositTask, TrackId};

/// Terminal result of one deposit placement attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionOutcome {
	pub index: u32,
	pub track: TrackId,
	pub success: bool,
	/// Hash of the block the outcome was decided in, present iff `success`
	pub block_hash: Option<String>,
	/// Extrinsic hash, absent when the submission was rejected before signing completed
	pub tx_hash: Option<String>,
	/// Human readable failure reason, present iff `!success`
	pub error: Option<String>,
}

impl SubmissionOutcome {
	pub fn succeeded(task: &DepositTask, block_hash: String, tx_hash: String) -> Self {
		Self {
			index: task.index,
			track: task.track,
			success: true,
			block_hash: Some(block_hash),
			tx_hash: Some(tx_hash),
			error: None,
		}
	}

	pub fn failed(task: &DepositTask, tx_hash: Option<String>, error: impl Into<String>) -> Self {
		Self {
			index: task.index,
			track: task.track,
			success: false,
			block_hash: None,
			tx_hash,
			error: Some(error.into()),
		}
	}
}

/// A failed placement, as listed in the results block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailedDeposit {
	pub index: u32,
	pub error: String,
}

/// Aggregate of every outcome produced by one driver run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositSummary {
	pub attempted: usize,
	pub successful: usize,
	pub failed: Vec<FailedDeposit>,
	pub outcomes: Vec<SubmissionOutcome>,
}

impl DepositSummary {
	pub fn from_outcomes(outcomes: Vec<SubmissionOutcome>) -> Self {
		let failed = outcomes
			.iter()
			.filter(|outcome| !outcome.success)
			.map(|outcome| FailedDeposit {
				index: outcome.index,
				error: outcome
					.error
					.clone()
					.unwrap_or_else(|| "Unknown error".to_string()),
			})
			.collect::<Vec<_>>();

		Self {
			attempted: outcomes.len(),
			successful: outcomes.len() - failed.len(),
			failed,
			outcomes,
		}
	}
}

/// Counters describing one scan of the referenda map
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
	/// Storage entries iterated
	pub entries: usize,
	/// Entries in the `Ongoing` state
	pub ongoing: usize,
	/// Entries in any terminal state
	pub not_ongoing: usize,
	/// Entries whose key or value could not be decoded
	pub decode_failures: usize,
}

/// Counters reported after filtering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSummary {
	pub ongoing: usize,
	pub on_target_tracks: usize,
	/// Ongoing referenda lacking a decision deposit, on any track
	pub without_deposit: usize,
	pub needing_deposit: usize,
}

/// What happened to the deposit tasks of one network
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum DepositPhase {
	/// Nothing needed a deposit
	Idle,
	/// Execution disabled, the tasks were only reported
	DryRun { would_place: Vec<DepositTask> },
	/// Deposits were submitted
	Executed { summary: DepositSummary },
}

/// Result of one network run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum NetworkRunStatus {
	Completed {
		chain: String,
		signer: String,
		catalog: CatalogStats,
		filter: FilterSummary,
		tasks: Vec<DepositTask>,
		deposits: DepositPhase,
	},
	Aborted {
		reason: String,
	},
	/// The network name is not in the known network table
	Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkReport {
	pub network: String,
	#[serde(flatten)]
	pub status: NetworkRunStatus,
}

/// Everything one invocation did, in network order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
	pub started_at: DateTime<Utc>,
	pub finished_at: DateTime<Utc>,
	pub networks: Vec<NetworkReport>,
}

impl RunReport {
	/// Report for `network`, if it was part of the run
	pub fn network(&self, network: &str) -> Option<&NetworkReport> {
		self.networks.iter().find(|report| report.network == network)
	}
}
