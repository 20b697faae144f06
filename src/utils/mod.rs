//! Utility modules for common functionality.
//!
//! This module provides various utility functions and types that are used across
//! the application. Currently includes:
//!
//! - constants: Constants for the application
//! - formatting: Balance and hash rendering
//! - logging: Logging utilities
//! - tests: Builders for test fixtures

mod formatting;

pub mod constants;
pub mod logging;
pub mod tests;

pub use constants::*;
pub use formatting::*;
