//! Error types for repository operations.
//!
//! Raised when the selected networks cannot be turned into valid configurations.
//! These errors are fatal for the whole run.

use log::error;
use std::error::Error;
use std::fmt;

use crate::models::ConfigError;

/// Errors that can occur while loading network configurations
#[derive(Debug)]
pub enum RepositoryError {
	/// A configured value is present but invalid
	ValidationError(String),

	/// The configuration could not be read
	LoadError(String),
}

impl RepositoryError {
	/// Format an error message for display
	fn format_message(&self) -> String {
		match self {
			Self::ValidationError(msg) => format!("Validation error: {}", msg),
			Self::LoadError(msg) => format!("Load error: {}", msg),
		}
	}

	/// Create a new validation error with the given message
	///
	/// Also logs the error message at the error level.
	pub fn validation_error(msg: impl Into<String>) -> Self {
		let error = Self::ValidationError(msg.into());
		error!("{}", error.format_message());
		error
	}

	/// Create a new load error with the given message
	///
	/// Also logs the error message at the error level.
	pub fn load_error(msg: impl Into<String>) -> Self {
		let error = Self::LoadError(msg.into());
		error!("{}", error.format_message());
		error
	}
}

impl fmt::Display for RepositoryError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.format_message())
	}
}

impl Error for RepositoryError {}

impl From<ConfigError> for RepositoryError {
	fn from(err: ConfigError) -> Self {
		// The config constructors already logged this error
		match err {
			ConfigError::ValidationError(msg) => Self::ValidationError(msg),
			ConfigError::ParseError(msg) => Self::LoadError(msg),
			ConfigError::UnknownNetwork(name) => {
				Self::LoadError(format!("Unknown network: {}", name))
			}
		}
	}
}
