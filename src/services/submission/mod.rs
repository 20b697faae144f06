//! Decision deposit submission.
//!
//! - `tracker`: status state machine for one submitted extrinsic
//! - `driver`: sequential submission of every deposit task

mod driver;
mod tracker;

pub use driver::{log_results, DepositDriver, DepositPlan};
pub use tracker::{place_deposit, watch_submission, SubmissionTracker, TrackerState, UNKNOWN_ERROR};
