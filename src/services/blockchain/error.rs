//! Blockchain error types and handling.
//!
//! This module provides the error type for everything that talks to a node:
//! connecting, querying, signing and submitting extrinsics.

use log::error;

/// Represents possible errors that can occur during blockchain operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockChainError {
	/// Errors related to network connectivity issues
	ConnectionError(String),

	/// Errors related to malformed requests or invalid responses
	RequestError(String),

	/// The runtime does not expose a storage entry, call or RPC this crate needs
	QueryUnavailable(String),

	/// Errors related to transaction construction, signing or submission
	TransactionError(String),

	/// The account seed could not be turned into a signer
	SignerError(String),

	/// Internal errors within the blockchain client
	InternalError(String),
}

impl BlockChainError {
	/// Formats the error message based on the error type
	fn format_message(&self) -> String {
		match self {
			Self::ConnectionError(msg) => format!("Connection error: {}", msg),
			Self::RequestError(msg) => format!("Request error: {}", msg),
			Self::QueryUnavailable(msg) => format!("Query unavailable: {}", msg),
			Self::TransactionError(msg) => format!("Transaction error: {}", msg),
			Self::SignerError(msg) => format!("Signer error: {}", msg),
			Self::InternalError(msg) => format!("Internal error: {}", msg),
		}
	}

	/// The message without the category prefix
	pub fn message(&self) -> &str {
		match self {
			Self::ConnectionError(msg)
			| Self::RequestError(msg)
			| Self::QueryUnavailable(msg)
			| Self::TransactionError(msg)
			| Self::SignerError(msg)
			| Self::InternalError(msg) => msg,
		}
	}

	/// Creates a new connection error with logging
	pub fn connection_error(msg: impl Into<String>) -> Self {
		let error = Self::ConnectionError(msg.into());
		error!("{}", error.format_message());
		error
	}

	/// Creates a new request error with logging
	pub fn request_error(msg: impl Into<String>) -> Self {
		let error = Self::RequestError(msg.into());
		error!("{}", error.format_message());
		error
	}

	/// Creates a new query unavailable error with logging
	pub fn query_unavailable(msg: impl Into<String>) -> Self {
		let error = Self::QueryUnavailable(msg.into());
		error!("{}", error.format_message());
		error
	}

	/// Creates a new transaction error with logging
	pub fn transaction_error(msg: impl Into<String>) -> Self {
		let error = Self::TransactionError(msg.into());
		error!("{}", error.format_message());
		error
	}

	/// Creates a new signer error with logging
	pub fn signer_error(msg: impl Into<String>) -> Self {
		let error = Self::SignerError(msg.into());
		error!("{}", error.format_message());
		error
	}

	/// Creates a new internal error with logging
	pub fn internal_error(msg: impl Into<String>) -> Self {
		let error = Self::InternalError(msg.into());
		error!("{}", error.format_message());
		error
	}
}

// Standard error trait implementations
impl std::fmt::Display for BlockChainError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.format_message())
	}
}

impl std::error::Error for BlockChainError {}

/// Conversion from subxt errors to BlockChainError
impl From<subxt::Error> for BlockChainError {
	fn from(err: subxt::Error) -> Self {
		Self::request_error(err.to_string())
	}
}
