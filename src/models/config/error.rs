//! Configuration error types.
//!
//! This module defines the error types that can occur while building
//! network configurations from the environment.

use log::error;
use std::{error::Error, fmt};

/// Errors that can occur during configuration operations
#[derive(Debug)]
#[allow(clippy::enum_variant_names)]
pub enum ConfigError {
	/// Configuration validation failed
	ValidationError(String),

	/// A value could not be parsed
	ParseError(String),

	/// The requested network is not in the known network table
	UnknownNetwork(String),
}

impl ConfigError {
	/// Format the error message for display
	fn format_message(&self) -> String {
		match self {
			Self::ValidationError(msg) => format!("Validation error: {}", msg),
			Self::ParseError(msg) => format!("Parse error: {}", msg),
			Self::UnknownNetwork(name) => format!("Unknown network: {}", name),
		}
	}

	/// Create a new validation error and log it
	pub fn validation_error(msg: impl Into<String>) -> Self {
		let error = Self::ValidationError(msg.into());
		error!("{}", error.format_message());
		error
	}

	/// Create a new parse error and log it
	pub fn parse_error(msg: impl Into<String>) -> Self {
		let error = Self::ParseError(msg.into());
		error!("{}", error.format_message());
		error
	}

	/// Create a new unknown network error and log it
	pub fn unknown_network(name: impl Into<String>) -> Self {
		let error = Self::UnknownNetwork(name.into());
		error!("{}", error.format_message());
		error
	}
}

impl fmt::Display for ConfigError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.format_message())
	}
}

impl Error for ConfigError {}

impl From<crate::models::TrackIdParseError> for ConfigError {
	fn from(err: crate::models::TrackIdParseError) -> Self {
		Self::parse_error(err.to_string())
	}
}
