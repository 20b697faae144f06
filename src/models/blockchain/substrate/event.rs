//! Events and transaction status updates for submitted extrinsics.
//!
//! A submitted extrinsic is watched through a stream of [`TxStatusUpdate`]s. The two
//! inclusion updates carry the events the extrinsic emitted, from which the
//! submission outcome is decided.

use serde::{Deserialize, Serialize};
use subxt::dynamic::Value;

use super::value::{as_bytes, as_composite, as_unsigned, as_variant, field, single_field};

/// Index of a pallet error inside runtime metadata.
///
/// `error` holds the raw error bytes. The first byte is the variant index of the
/// pallet's `Error` enum, the rest is the encoded variant payload (if any).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleErrorRef {
	pub pallet_index: u8,
	pub error: Vec<u8>,
}

impl ModuleErrorRef {
	/// Variant index of the pallet error
	pub fn error_index(&self) -> u8 {
		self.error.first().copied().unwrap_or_default()
	}
}

/// A pallet error resolved against runtime metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleErrorDetails {
	pub pallet: String,
	pub error: String,
}

impl std::fmt::Display for ModuleErrorDetails {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}.{}", self.pallet, self.error)
	}
}

/// Reason a dispatched extrinsic failed, as reported by `System.ExtrinsicFailed`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DispatchError {
	/// A pallet returned one of its own errors
	Module(ModuleErrorRef),
	/// Any other dispatch error, rendered as text (e.g. `BadOrigin`, `Token(FundsUnavailable)`)
	Other(String),
}

impl DispatchError {
	/// Reads a `sp_runtime::DispatchError` value.
	///
	/// Both the legacy `Module { index, error: u8 }` and the current
	/// `Module(ModuleError { index, error: [u8; 4] })` layouts are understood.
	pub fn from_value(value: &Value) -> Self {
		let Some((name, fields)) = as_variant(value) else {
			return Self::Other(format!("{:?}", value));
		};

		if name == "Module" {
			let module = single_field(fields).and_then(as_composite).unwrap_or(fields);
			let pallet_index = field(module, "index")
				.and_then(as_unsigned)
				.and_then(|index| u8::try_from(index).ok());
			let error = field(module, "error").and_then(as_bytes);

			if let (Some(pallet_index), Some(error)) = (pallet_index, error) {
				return Self::Module(ModuleErrorRef {
					pallet_index,
					error,
				});
			}
		}

		Self::Other(render_variant(value))
	}
}

impl std::fmt::Display for DispatchError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Module(module) => write!(
				f,
				"Module {{ index: {}, error: 0x{} }}",
				module.pallet_index,
				hex::encode(&module.error)
			),
			Self::Other(text) => write!(f, "{}", text),
		}
	}
}

/// Renders nested unit-like variants as `Outer(Inner)`
fn render_variant(value: &Value) -> String {
	match as_variant(value) {
		Some((name, fields)) => match single_field(fields) {
			Some(inner) if as_variant(inner).is_some() => {
				format!("{}({})", name, render_variant(inner))
			}
			_ => name.to_string(),
		},
		None => format!("{:?}", value),
	}
}

/// An event emitted by the watched extrinsic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExtrinsicEvent {
	/// `System.ExtrinsicSuccess`
	Success,
	/// `System.ExtrinsicFailed`
	Failed(DispatchError),
	/// Any other event, kept for logging
	Other { pallet: String, variant: String },
}

impl ExtrinsicEvent {
	/// Builds an event from its pallet and variant names plus its decoded fields.
	///
	/// For `System.ExtrinsicFailed` the dispatch error is read from the
	/// `dispatch_error` field, or from the first field on runtimes with unnamed fields.
	pub fn from_parts(pallet: &str, variant: &str, fields: &Value) -> Self {
		match (pallet, variant) {
			("System", "ExtrinsicSuccess") => Self::Success,
			("System", "ExtrinsicFailed") => {
				let dispatch_error = as_composite(fields).and_then(|composite| {
					field(composite, "dispatch_error").or_else(|| composite.values().next())
				});
				match dispatch_error {
					Some(error) => Self::Failed(DispatchError::from_value(error)),
					None => Self::Failed(DispatchError::Other("undecodable dispatch error".into())),
				}
			}
			_ => Self::Other {
				pallet: pallet.to_string(),
				variant: variant.to_string(),
			},
		}
	}
}

/// A block containing the watched extrinsic, with the events it emitted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inclusion {
	pub block_hash: String,
	pub events: Vec<ExtrinsicEvent>,
}

impl Inclusion {
	/// Returns the dispatch error of the first `ExtrinsicFailed` event, if any
	pub fn dispatch_error(&self) -> Option<&DispatchError> {
		self.events.iter().find_map(|event| match event {
			ExtrinsicEvent::Failed(error) => Some(error),
			_ => None,
		})
	}
}

/// One notification from a transaction status subscription
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TxStatusUpdate {
	/// Validated and queued in the transaction pool
	Ready,
	/// Gossiped to peers
	Broadcast,
	/// The best block containing the transaction was retracted
	NoLongerInBestBlock,
	/// Included in a best block
	InBlock(Inclusion),
	/// Included in a best block whose events could not be read
	InBlockUnverified { block_hash: String, reason: String },
	/// Included in a finalized block
	Finalized(Inclusion),
	/// Removed from the pool, e.g. because the pool is full
	Dropped(Option<String>),
	/// Will never be valid (bad nonce, insufficient fees, bad signature)
	Invalid(Option<String>),
	/// Replaced by another transaction with the same nonce
	Usurped(Option<String>),
}

impl TxStatusUpdate {
	/// Name of the status, as printed in progress logs
	pub fn name(&self) -> &'static str {
		match self {
			Self::Ready => "Ready",
			Self::Broadcast => "Broadcast",
			Self::NoLongerInBestBlock => "Retracted",
			Self::InBlock(_) | Self::InBlockUnverified { .. } => "InBlock",
			Self::Finalized(_) => "Finalized",
			Self::Dropped(_) => "Dropped",
			Self::Invalid(_) => "Invalid",
			Self::Usurped(_) => "Usurped",
		}
	}

	/// Whether the status ends the subscription without inclusion
	pub fn is_terminal_failure(&self) -> bool {
		matches!(self, Self::Dropped(_) | Self::Invalid(_) | Self::Usurped(_))
	}
}
