//! Transaction status tracking.
//!
//! A [`SubmissionTracker`] consumes the status updates of one submitted extrinsic and
//! resolves them into exactly one [`SubmissionOutcome`]. Success and failure are read
//! from the events emitted in the including block, not from the submission call.
//!
//! States:
//!
//! - `Pending`: submitted, not yet in a block
//! - `Included`: in a best block that is not final yet (only with
//!   [`FinalityRequirement::Finalized`]); a retraction moves back to `Pending`
//! - `Resolved`: the outcome is decided, later updates are ignored

use tracing::{info, instrument, warn};

use crate::{
	models::{
		DepositTask, DispatchError, FinalityRequirement, Inclusion, SubmissionOutcome,
		SubmissionSettings, TxStatusUpdate,
	},
	services::blockchain::{BlockChainError, DepositSigner, GovernanceClient, Submission},
};

/// Failure message when a module error cannot be resolved against metadata
pub const UNKNOWN_ERROR: &str = "Unknown error";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackerState {
	Pending,
	/// Included in a block that may still be retracted
	Included(Inclusion),
	Resolved(SubmissionOutcome),
}

/// State machine for a single deposit submission
pub struct SubmissionTracker<'a, C: GovernanceClient + ?Sized> {
	client: &'a C,
	task: &'a DepositTask,
	tx_hash: Option<String>,
	finality: FinalityRequirement,
	state: TrackerState,
	last_status: Option<&'static str>,
}

impl<'a, C: GovernanceClient + ?Sized> SubmissionTracker<'a, C> {
	pub fn new(
		client: &'a C,
		task: &'a DepositTask,
		tx_hash: Option<String>,
		finality: FinalityRequirement,
	) -> Self {
		Self {
			client,
			task,
			tx_hash,
			finality,
			state: TrackerState::Pending,
			last_status: None,
		}
	}

	pub fn state(&self) -> &TrackerState {
		&self.state
	}

	pub fn is_resolved(&self) -> bool {
		matches!(self.state, TrackerState::Resolved(_))
	}

	/// Name of the last status update seen
	pub fn last_status(&self) -> Option<&'static str> {
		self.last_status
	}

	/// Feeds one status update. Returns `true` once the submission is resolved.
	pub fn apply(&mut self, update: TxStatusUpdate) -> bool {
		if self.is_resolved() {
			return true;
		}

		info!("Current status: {}", update.name());
		self.last_status = Some(update.name());

		match update {
			TxStatusUpdate::Ready | TxStatusUpdate::Broadcast => {}
			TxStatusUpdate::NoLongerInBestBlock => {
				if matches!(self.state, TrackerState::Included(_)) {
					warn!(
						"Block including referendum #{} deposit was retracted",
						self.task.index
					);
					self.state = TrackerState::Pending;
				}
			}
			TxStatusUpdate::InBlock(inclusion) => match self.finality {
				FinalityRequirement::InBlock => self.resolve_inclusion(inclusion),
				FinalityRequirement::Finalized => {
					info!(
						"Included in block {}, waiting for finality",
						inclusion.block_hash
					);
					self.state = TrackerState::Included(inclusion);
				}
			},
			TxStatusUpdate::InBlockUnverified { block_hash, reason } => match self.finality {
				FinalityRequirement::InBlock => self.resolve_failure(format!(
					"Failed to read events of block {}: {}",
					block_hash, reason
				)),
				FinalityRequirement::Finalized => {
					warn!(
						"Could not read events of block {}, waiting for finality: {}",
						block_hash, reason
					);
				}
			},
			TxStatusUpdate::Finalized(inclusion) => self.resolve_inclusion(inclusion),
			TxStatusUpdate::Dropped(reason)
			| TxStatusUpdate::Invalid(reason)
			| TxStatusUpdate::Usurped(reason) => {
				let mut error = format!(
					"Transaction failed with status: {}",
					update_name(self.last_status)
				);
				if let Some(reason) = reason.filter(|reason| !reason.is_empty()) {
					error.push_str(&format!(" ({})", reason));
				}
				self.resolve_failure(error);
			}
		}

		self.is_resolved()
	}

	/// The status subscription reported an error
	pub fn stream_failed(&mut self, error: &BlockChainError) {
		if !self.is_resolved() {
			self.resolve_failure(error.message().to_string());
		}
	}

	/// The timeout expired before a terminal status
	pub fn timed_out(&mut self, timeout: std::time::Duration) {
		if !self.is_resolved() {
			self.resolve_failure(format!(
				"Timed out after {}s waiting for a terminal status (last status: {})",
				timeout.as_secs(),
				update_name(self.last_status)
			));
		}
	}

	/// Consumes the tracker. An unresolved submission ends as a failure.
	pub fn finish(mut self) -> SubmissionOutcome {
		if !self.is_resolved() {
			self.resolve_failure(format!(
				"Status subscription ended without a terminal status (last status: {})",
				update_name(self.last_status)
			));
		}

		match self.state {
			TrackerState::Resolved(outcome) => outcome,
			// resolve_failure always leaves the tracker resolved
			_ => SubmissionOutcome::failed(self.task, self.tx_hash, UNKNOWN_ERROR),
		}
	}

	fn resolve_inclusion(&mut self, inclusion: Inclusion) {
		match inclusion.dispatch_error() {
			Some(error) => {
				let message = self.describe(error);
				self.resolve_failure(message);
			}
			None => {
				info!(
					"✅ Successfully placed deposit for referendum #{}",
					self.task.index
				);
				self.state = TrackerState::Resolved(SubmissionOutcome::succeeded(
					self.task,
					inclusion.block_hash,
					self.tx_hash.clone().unwrap_or_default(),
				));
			}
		}
	}

	fn resolve_failure(&mut self, error: String) {
		warn!(
			"❌ Failed to place deposit for referendum #{}: {}",
			self.task.index, error
		);
		self.state = TrackerState::Resolved(SubmissionOutcome::failed(
			self.task,
			self.tx_hash.clone(),
			error,
		));
	}

	fn describe(&self, error: &DispatchError) -> String {
		match error {
			DispatchError::Module(module) => match self.client.decode_module_error(module) {
				Ok(details) => details.to_string(),
				Err(_) => UNKNOWN_ERROR.to_string(),
			},
			DispatchError::Other(text) => text.clone(),
		}
	}
}

fn update_name(name: Option<&'static str>) -> &'static str {
	name.unwrap_or("none")
}

/// Drives an already submitted extrinsic to its outcome.
///
/// The subscription is closed as soon as the outcome is decided or the timeout
/// expires.
pub async fn watch_submission<C: GovernanceClient + ?Sized>(
	client: &C,
	task: &DepositTask,
	submission: Submission,
	settings: &SubmissionSettings,
) -> SubmissionOutcome {
	let Submission {
		tx_hash,
		mut updates,
	} = submission;
	let mut tracker = SubmissionTracker::new(client, task, Some(tx_hash), settings.finality);

	let watch = async {
		while let Some(item) = updates.recv().await {
			match item {
				Ok(update) => {
					if tracker.apply(update) {
						break;
					}
				}
				Err(e) => {
					tracker.stream_failed(&e);
					break;
				}
			}
		}
	};

	if tokio::time::timeout(settings.submission_timeout, watch)
		.await
		.is_err()
	{
		tracker.timed_out(settings.submission_timeout);
	}

	// Unsubscribe
	updates.close();

	tracker.finish()
}

/// Submits the deposit for `task` and waits for its outcome
#[instrument(skip_all, fields(index = task.index))]
pub async fn place_deposit<C: GovernanceClient + ?Sized>(
	client: &C,
	signer: &DepositSigner,
	task: &DepositTask,
	settings: &SubmissionSettings,
) -> SubmissionOutcome {
	match client
		.submit_place_decision_deposit(task.index, signer)
		.await
	{
		Ok(submission) => {
			info!("Transaction submitted: {}", submission.tx_hash);
			watch_submission(client, task, submission, settings).await
		}
		Err(e) => {
			warn!("Transaction error: {}", e.message());
			SubmissionOutcome::failed(task, None, e.message())
		}
	}
}
