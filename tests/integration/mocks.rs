//! Mock implementations for testing purposes.
//!
//! - `clients`: mocked node connections and scripted status subscriptions
//! - `entries`: referendum storage fixtures

mod clients;
mod entries;

pub use clients::*;
pub use entries::*;
