//! Configuration repositories.
//!
//! - `network`: resolves the network selection into per-network configurations

mod error;
mod network;

pub use error::RepositoryError;
pub use network::{parse_selection, NetworkRepository, SelectedNetwork};
