//! Blockchain client interfaces and implementations.
//!
//! Provides the abstraction the deposit pipeline uses to talk to a node, and the
//! subxt backed implementation of it. Includes:
//!
//! - Governance client and connector traits
//! - Substrate client
//! - Signer derivation
//! - Error handling for blockchain operations

mod client;
mod clients;
mod error;
mod signer;

pub use client::{ChainConnector, GovernanceClient, StatusItem, Submission};
pub use clients::{SubxtClient, SubxtConnector};
pub use error::BlockChainError;
pub use signer::DepositSigner;
