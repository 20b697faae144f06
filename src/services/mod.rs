//! Core services implementing the decision deposit pipeline.
//!
//! - `blockchain`: node access, signing and the subxt client
//! - `catalog`: decoding of referendum storage entries
//! - `filter`: selection of referenda needing a deposit
//! - `submission`: status tracking and sequential submission of deposits

pub mod blockchain;
pub mod catalog;
pub mod filter;
pub mod submission;
