//! Core domain models for the decision deposit placer.
//!
//! This module contains the fundamental data structures that represent:
//! - Networks: per-network run configuration
//! - Referenda: normalized scan records and the deposit tasks derived from them
//! - Submissions: placement outcomes, summaries and run reports

mod network;
mod referendum;
mod submission;

pub use network::{
	FinalityRequirement, NetworkConfig, SubmissionSettings, DEFAULT_SUBMISSION_DELAY,
	DEFAULT_SUBMISSION_TIMEOUT,
};
pub use referendum::{DepositTask, ReferendumRecord, TrackId, TrackIdParseError, UNKNOWN_SUBMITTER};
pub use submission::{
	CatalogStats, DepositPhase, DepositSummary, FailedDeposit, FilterSummary, NetworkReport,
	NetworkRunStatus, RunReport, SubmissionOutcome,
};
