//! Substrate chain data structures.
//!
//! This module contains the typed views over dynamically decoded SCALE values used
//! by the referendum scan and the transaction watcher:
//!
//! - `referendum`: the `ReferendumInfo` state of `pallet-referenda`
//! - `event`: extrinsic events, dispatch errors and status updates
//! - `value`: helpers to walk decoded values

mod event;
mod referendum;
pub mod value;

pub use event::{
	DispatchError, ExtrinsicEvent, Inclusion, ModuleErrorDetails, ModuleErrorRef, TxStatusUpdate,
};
pub use referendum::{
	decode_account, decode_track, OngoingReferendum, ReferendumDecodeError, ReferendumInfo,
};

/// One raw entry of the `Referenda.ReferendumInfoFor` storage map.
///
/// `keys` holds the decoded map keys (the referendum index). `value` holds the
/// decoded `ReferendumInfo`, or the reason it could not be decoded against the
/// runtime metadata.
#[derive(Debug, Clone)]
pub struct ReferendumEntry {
	pub keys: Vec<subxt::dynamic::Value>,
	pub value: Result<subxt::dynamic::Value, String>,
}

/// Free and reserved balance of an account, in the chain's smallest unit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AccountBalance {
	pub free: u128,
	pub reserved: u128,
}
