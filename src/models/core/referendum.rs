//! Referendum domain models.
//!
//! This module contains the normalized records built from a scan of the
//! `Referenda.ReferendumInfoFor` storage map and the tasks derived from them.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Literal used when the submission depositor of a referendum cannot be read
pub const UNKNOWN_SUBMITTER: &str = "unknown";

/// Identifier of a governance track.
///
/// The runtime stores track ids as `u16`. Values decoded from chain state or read
/// from configuration are normalized into this type as soon as they are parsed,
/// so track comparisons downstream are plain integer equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackId(pub u16);

impl TrackId {
	/// Returns the raw numeric id
	pub fn get(self) -> u16 {
		self.0
	}

	/// Parses a comma separated list of track ids such as `"30, 31"`.
	///
	/// Empty segments are ignored. An input without any id is rejected.
	pub fn parse_list(input: &str) -> Result<Vec<TrackId>, TrackIdParseError> {
		let tracks = input
			.split(',')
			.map(str::trim)
			.filter(|segment| !segment.is_empty())
			.map(TrackId::from_str)
			.collect::<Result<Vec<_>, _>>()?;

		if tracks.is_empty() {
			return Err(TrackIdParseError::Empty);
		}
		Ok(tracks)
	}
}

impl From<u16> for TrackId {
	fn from(value: u16) -> Self {
		Self(value)
	}
}

impl TryFrom<u128> for TrackId {
	type Error = TrackIdParseError;

	fn try_from(value: u128) -> Result<Self, Self::Error> {
		u16::try_from(value)
			.map(TrackId)
			.map_err(|_| TrackIdParseError::OutOfRange(value.to_string()))
	}
}

impl FromStr for TrackId {
	type Err = TrackIdParseError;

	/// Accepts surrounding whitespace and `_` digit separators. Commas are list
	/// separators at this level and are handled by [`TrackId::parse_list`].
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let cleaned: String = s
			.trim()
			.chars()
			.filter(|c| *c != '_' && !c.is_whitespace())
			.collect();

		if cleaned.is_empty() {
			return Err(TrackIdParseError::Empty);
		}

		let value = cleaned
			.parse::<u128>()
			.map_err(|_| TrackIdParseError::Invalid(s.to_string()))?;
		TrackId::try_from(value)
	}
}

impl fmt::Display for TrackId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// Errors produced while normalizing a track id
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrackIdParseError {
	#[error("track id list is empty")]
	Empty,

	#[error("'{0}' is not a valid track id")]
	Invalid(String),

	#[error("track id {0} does not fit in u16")]
	OutOfRange(String),
}

/// A referendum as seen by one scan of the chain.
///
/// Records are rebuilt on every run and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferendumRecord {
	/// Referendum index, the key of the storage map
	pub index: u32,
	/// Track the referendum was submitted on
	pub track: TrackId,
	/// Whether the on-chain state is `Ongoing`
	pub is_ongoing: bool,
	/// Whether somebody already placed the decision deposit
	pub has_decision_deposit: bool,
	/// SS58 address of the submission depositor, or [`UNKNOWN_SUBMITTER`]
	pub submitted_by: String,
	/// Whether the referendum entered its deciding period
	pub in_deciding: bool,
}

/// A referendum selected for a decision deposit placement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositTask {
	pub index: u32,
	pub track: TrackId,
	pub submitted_by: String,
}

impl From<&ReferendumRecord> for DepositTask {
	fn from(record: &ReferendumRecord) -> Self {
		Self {
			index: record.index,
			track: record.track,
			submitted_by: record.submitted_by.clone(),
		}
	}
}
