//! Sequential deposit submission.
//!
//! All deposits of a network are signed by the same account, so submissions are
//! strictly sequential: the next extrinsic is only built once the previous one is
//! resolved and the inter-submission delay has elapsed. Nonces are never tracked
//! locally, ordering and the delay keep them consistent.

use tracing::{info, instrument, warn};

use crate::{
	models::{DepositSummary, DepositTask, SubmissionSettings},
	services::{
		blockchain::{DepositSigner, GovernanceClient},
		submission::tracker::place_deposit,
	},
};

/// Places decision deposits one at a time
pub struct DepositDriver<'a, C: GovernanceClient + ?Sized> {
	client: &'a C,
	signer: &'a DepositSigner,
	settings: SubmissionSettings,
}

impl<'a, C: GovernanceClient + ?Sized> DepositDriver<'a, C> {
	pub fn new(client: &'a C, signer: &'a DepositSigner, settings: SubmissionSettings) -> Self {
		Self {
			client,
			signer,
			settings,
		}
	}

	/// Submits a deposit for every task in order and returns one outcome per task.
	///
	/// Failures never stop the run. The delay is applied after every outcome,
	/// including the last one.
	#[instrument(skip_all, fields(signer = %self.signer.address(), tasks = tasks.len()))]
	pub async fn run(&self, tasks: &[DepositTask]) -> DepositSummary {
		info!("Placing decision deposits...");
		info!("Account that will place deposits: {}", self.signer.address());

		let mut outcomes = Vec::with_capacity(tasks.len());
		for task in tasks {
			info!("Placing deposit for referendum #{}...", task.index);
			let outcome = place_deposit(self.client, self.signer, task, &self.settings).await;
			outcomes.push(outcome);

			let delay = self.settings.inter_submission_delay;
			info!(
				"Waiting {} seconds before next transaction...",
				delay.as_secs()
			);
			tokio::time::sleep(delay).await;
		}

		let summary = DepositSummary::from_outcomes(outcomes);
		log_results(&summary);
		summary
	}
}

/// Logs the deposit placement results block
pub fn log_results(summary: &DepositSummary) {
	info!("--- DEPOSIT PLACEMENT RESULTS ---");
	info!("Total attempted: {}", summary.attempted);
	info!("Successful: {}", summary.successful);
	info!("Failed: {}", summary.failed.len());

	if !summary.failed.is_empty() {
		warn!("Failed deposits:");
		for failed in &summary.failed {
			warn!("- Referendum #{}: {}", failed.index, failed.error);
		}
	}
}

/// The deposits a dry run would have placed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepositPlan {
	pub tasks: Vec<DepositTask>,
}

impl DepositPlan {
	pub fn new(tasks: Vec<DepositTask>) -> Self {
		Self { tasks }
	}

	/// Logs that nothing will be submitted, and how to enable submissions
	pub fn log(&self) {
		warn!(
			"⚠️ PLACE_DEPOSITS is set to false. No deposits will be placed ({} would be).",
			self.tasks.len()
		);
		info!(
			"To place deposits automatically, set PLACE_DEPOSITS=true in your .env file or when running the command."
		);
	}
}
