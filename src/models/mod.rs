//! Domain models and data structures for the decision deposit placer.
//!
//! This module contains all the core data structures used throughout the application:
//!
//! - `blockchain`: Substrate storage, event and transaction status types
//! - `config`: Configuration loading and validation
//! - `core`: Core domain models (NetworkConfig, ReferendumRecord, SubmissionOutcome)
//! - `security`: Secret handling

mod blockchain;
mod config;
mod core;
mod security;

// Re-export blockchain types
pub use blockchain::substrate::value;
pub use blockchain::substrate::{
	decode_account, decode_track, AccountBalance, DispatchError, ExtrinsicEvent, Inclusion,
	ModuleErrorDetails, ModuleErrorRef, OngoingReferendum, ReferendumDecodeError, ReferendumEntry,
	ReferendumInfo, TxStatusUpdate,
};

// Re-export core types
pub use core::{
	CatalogStats, DepositPhase, DepositSummary, DepositTask, FailedDeposit, FilterSummary,
	FinalityRequirement, NetworkConfig, NetworkReport, NetworkRunStatus, ReferendumRecord,
	RunReport, SubmissionOutcome, SubmissionSettings, TrackId, TrackIdParseError,
	DEFAULT_SUBMISSION_DELAY, DEFAULT_SUBMISSION_TIMEOUT, UNKNOWN_SUBMITTER,
};

// Re-export config types
pub use config::{ConfigError, ConfigLoader, EnvSource, ProcessEnv};

pub use security::SecretString;
