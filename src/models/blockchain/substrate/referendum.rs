//! `pallet-referenda` storage types.
//!
//! Mirrors the parts of `ReferendumInfo` this crate reads. Only the `Ongoing`
//! state carries data, every other state is terminal and only identifies itself.
//! <https://github.com/paritytech/polkadot-sdk/blob/master/substrate/frame/referenda/src/types.rs>

use std::str::FromStr;

use subxt::{dynamic::Value, utils::AccountId32};

use super::value::{
	as_bytes, as_composite, as_string, as_unsigned, as_variant, field, option_inner, single_field,
};
use crate::models::TrackId;

/// The on-chain state of one referendum
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferendumInfo {
	/// Being prepared or decided
	Ongoing(OngoingReferendum),
	/// Passed, ended at the contained block
	Approved { since: Option<u32> },
	/// Failed, ended at the contained block
	Rejected { since: Option<u32> },
	/// Cancelled by the canceller origin
	Cancelled { since: Option<u32> },
	/// Never entered deciding before the timeout
	TimedOut { since: Option<u32> },
	/// Killed by the killer origin
	Killed { since: Option<u32> },
}

/// The fields of `ReferendumStatus` used to decide whether a deposit is needed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OngoingReferendum {
	pub track: TrackId,
	/// `submission_deposit.who`
	pub submitted_by: Option<AccountId32>,
	pub has_decision_deposit: bool,
	pub in_deciding: bool,
}

impl ReferendumInfo {
	/// Name of the on-chain variant
	pub fn state_name(&self) -> &'static str {
		match self {
			Self::Ongoing(_) => "Ongoing",
			Self::Approved { .. } => "Approved",
			Self::Rejected { .. } => "Rejected",
			Self::Cancelled { .. } => "Cancelled",
			Self::TimedOut { .. } => "TimedOut",
			Self::Killed { .. } => "Killed",
		}
	}

	/// Returns the ongoing status, if any
	pub fn as_ongoing(&self) -> Option<&OngoingReferendum> {
		match self {
			Self::Ongoing(status) => Some(status),
			_ => None,
		}
	}
}

/// Reasons a storage value could not be read as a `ReferendumInfo`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReferendumDecodeError {
	#[error("value is not a variant")]
	NotAVariant,

	#[error("unknown referendum state '{0}'")]
	UnknownState(String),

	#[error("ongoing referendum has no '{0}' field")]
	MissingField(&'static str),

	#[error("invalid track id: {0}")]
	InvalidTrack(String),
}

impl TryFrom<&Value> for ReferendumInfo {
	type Error = ReferendumDecodeError;

	fn try_from(value: &Value) -> Result<Self, Self::Error> {
		let (name, fields) = as_variant(value).ok_or(ReferendumDecodeError::NotAVariant)?;
		let since = || {
			fields
				.values()
				.next()
				.and_then(as_unsigned)
				.and_then(|block| u32::try_from(block).ok())
		};

		match name {
			"Ongoing" => {
				// `Ongoing(ReferendumStatus)` wraps the status struct in an unnamed field
				let status = single_field(fields).and_then(as_composite).unwrap_or(fields);

				let track =
					field(status, "track").ok_or(ReferendumDecodeError::MissingField("track"))?;

				Ok(Self::Ongoing(OngoingReferendum {
					track: decode_track(track)?,
					submitted_by: field(status, "submission_deposit")
						.and_then(as_composite)
						.and_then(|deposit| field(deposit, "who"))
						.and_then(decode_account),
					has_decision_deposit: field(status, "decision_deposit")
						.and_then(option_inner)
						.is_some(),
					in_deciding: field(status, "deciding").and_then(option_inner).is_some(),
				}))
			}
			"Approved" => Ok(Self::Approved { since: since() }),
			"Rejected" => Ok(Self::Rejected { since: since() }),
			"Cancelled" => Ok(Self::Cancelled { since: since() }),
			"TimedOut" => Ok(Self::TimedOut { since: since() }),
			"Killed" => Ok(Self::Killed { since: since() }),
			other => Err(ReferendumDecodeError::UnknownState(other.to_string())),
		}
	}
}

/// Normalizes a track value into a [`TrackId`].
///
/// Track ids are `u16` on chain, but values that went through human readable
/// formatting arrive as strings such as `"30"` or `"1,000"`.
pub fn decode_track(value: &Value) -> Result<TrackId, ReferendumDecodeError> {
	if let Some(number) = as_unsigned(value) {
		return TrackId::try_from(number)
			.map_err(|e| ReferendumDecodeError::InvalidTrack(e.to_string()));
	}

	if let Some(text) = as_string(value) {
		let digits: String = text.chars().filter(|c| *c != ',').collect();
		return TrackId::from_str(&digits)
			.map_err(|e| ReferendumDecodeError::InvalidTrack(e.to_string()));
	}

	Err(ReferendumDecodeError::InvalidTrack(format!("{:?}", value)))
}

/// Reads an `AccountId32` from its raw bytes, or from an SS58 string
pub fn decode_account(value: &Value) -> Option<AccountId32> {
	if let Some(text) = as_string(value) {
		return AccountId32::from_str(text).ok();
	}

	let bytes: [u8; 32] = as_bytes(value)?.try_into().ok()?;
	Some(AccountId32::from(bytes))
}
