//! Logging utilities for the application
//!
//! This module provides utilities for setting up and configuring logging for the application.
//! It uses the `tracing_subscriber` crate to configure the logging.
//!
//! Output goes to stdout by default. When `LOG_MODE=file` is set, logs are written to a
//! daily rolling file in `LOG_DATA_DIR` (default `logs/`) instead, so every run of a
//! scheduled job appends to that day's file.
//!
//! The level comes from `RUST_LOG` when set, otherwise from `LOG_LEVEL`, otherwise `info`.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

use crate::utils::constants::DEFAULT_LOG_DIR;

/// File name prefix of rolling log files
const LOG_FILE_PREFIX: &str = "decision-depositor.log";

type LoggingResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync + 'static>>;

/// Setup logging for the application
///
/// Reads `LOG_MODE`, `LOG_DATA_DIR` and `LOG_LEVEL`. The returned guard flushes the
/// file writer on drop and must be kept alive until the process exits.
pub fn setup_logging() -> LoggingResult<Option<WorkerGuard>> {
	let log_mode = std::env::var("LOG_MODE").unwrap_or_default();

	if log_mode.eq_ignore_ascii_case("file") {
		let log_dir = std::env::var("LOG_DATA_DIR").unwrap_or_else(|_| DEFAULT_LOG_DIR.to_string());
		std::fs::create_dir_all(&log_dir)?;

		let appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE_PREFIX);
		let (writer, guard) = tracing_appender::non_blocking(appender);
		setup_logging_with_writer(writer, false)?;
		return Ok(Some(guard));
	}

	setup_logging_with_writer(std::io::stdout, true)?;
	Ok(None)
}

fn default_filter() -> EnvFilter {
	EnvFilter::try_from_default_env().unwrap_or_else(|_| {
		let level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
		EnvFilter::try_new(&level).unwrap_or_else(|_| EnvFilter::new("info"))
	})
}

/// Setup logging for the application with a custom writer
///
/// This function sets up the logging for the application with a custom writer.
/// It uses the `tracing_subscriber` crate to configure the logging.
pub fn setup_logging_with_writer<W>(writer: W, ansi: bool) -> LoggingResult<()>
where
	W: for<'writer> tracing_subscriber::fmt::MakeWriter<'writer> + Send + Sync + 'static,
{
	tracing_subscriber::registry()
		.with(default_filter())
		.with(
			fmt::layer()
				.with_writer(writer)
				.event_format(
					fmt::format()
						.with_level(true)
						.with_target(true)
						.with_thread_ids(false)
						.with_thread_names(false)
						.with_ansi(ansi)
						.compact(),
				)
				.fmt_fields(fmt::format::PrettyFields::new()),
		)
		.try_init()?;
	Ok(())
}
