//! Blockchain client implementations.
//!
//! - `substrate`: subxt based client for Substrate nodes

mod substrate {
	pub mod client;
}

pub use substrate::client::{SubxtClient, SubxtConnector};
