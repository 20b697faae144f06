//! Decision deposit placer entry point.
//!
//! Runs once and exits; it is meant to be scheduled (cron, systemd timer, CI job).
//!
//! # Flow
//! 1. Loads `.env` and applies command line overrides
//! 2. Sets up logging
//! 3. Builds the configuration of every selected network
//! 4. Processes the networks one after another
//! 5. Optionally writes the JSON run report
//!
//! The exit code is 0 once every network was processed, whatever happened to
//! individual deposits, and 1 when the run could not start.

use std::{
	env::{set_var, var},
	path::PathBuf,
};

use anyhow::Context;
use clap::{Arg, Command};
use decision_depositor::{
	bootstrap::{run_networks, write_report},
	models::ProcessEnv,
	repositories::NetworkRepository,
	services::blockchain::SubxtConnector,
	utils::{constants::DEFAULT_NETWORKS, logging::setup_logging},
};
use dotenvy::dotenv;
use tracing::error;

async fn run(networks: String, report_path: Option<PathBuf>) -> anyhow::Result<()> {
	let repository = NetworkRepository::new(&networks, &ProcessEnv)
		.context("Invalid network configuration")?;

	let report = run_networks(&SubxtConnector, &repository.networks).await;

	if let Some(path) = report_path {
		write_report(&path, &report)?;
	}
	Ok(())
}

#[tokio::main]
async fn main() {
	// Initialize command-line interface
	let matches = Command::new("decision-depositor")
		.version(env!("CARGO_PKG_VERSION"))
		.about(
			"Places decision deposits on ongoing governance referenda of the configured tracks \
			 that do not have one yet.",
		)
		.arg(
			Arg::new("networks")
				.long("networks")
				.help("Comma separated networks to process (default: polkadot,kusama)")
				.value_name("NETWORKS"),
		)
		.arg(
			Arg::new("log-file")
				.long("log-file")
				.help("Write logs to file instead of stdout")
				.action(clap::ArgAction::SetTrue),
		)
		.arg(
			Arg::new("log-level")
				.long("log-level")
				.help("Set log level (trace, debug, info, warn, error)")
				.value_name("LEVEL"),
		)
		.arg(
			Arg::new("log-path")
				.long("log-path")
				.help("Path to store log files (default: logs/)")
				.value_name("PATH"),
		)
		.arg(
			Arg::new("report")
				.long("report")
				.help("Write a JSON report of the run to this file")
				.value_name("PATH")
				.value_parser(clap::value_parser!(PathBuf)),
		)
		.get_matches();

	// Load environment variables from .env file
	dotenv().ok();

	// Only apply CLI options if the corresponding environment variables are NOT already set
	if matches.get_flag("log-file") && var("LOG_MODE").is_err() {
		set_var("LOG_MODE", "file");
	}

	if let Some(level) = matches.get_one::<String>("log-level") {
		if var("LOG_LEVEL").is_err() {
			set_var("LOG_LEVEL", level);
		}
	}

	if let Some(path) = matches.get_one::<String>("log-path") {
		if var("LOG_DATA_DIR").is_err() {
			set_var("LOG_DATA_DIR", path);
		}
	}

	let log_guard = match setup_logging() {
		Ok(guard) => guard,
		Err(e) => {
			eprintln!("Failed to setup logging: {}", e);
			std::process::exit(1);
		}
	};

	// The flag wins over NETWORKS
	let networks = matches
		.get_one::<String>("networks")
		.cloned()
		.or_else(|| var("NETWORKS").ok().filter(|value| !value.trim().is_empty()))
		.unwrap_or_else(|| DEFAULT_NETWORKS.to_string());
	let report_path = matches.get_one::<PathBuf>("report").cloned();

	if let Err(e) = run(networks, report_path).await {
		error!("Fatal error: {:#}", e);
		drop(log_guard);
		std::process::exit(1);
	}
}
