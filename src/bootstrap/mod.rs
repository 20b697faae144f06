//! Bootstrap module for running the deposit pipeline against every selected network.
//!
//! Networks are processed strictly one after another. Each network gets its own
//! connection, which is dropped when the network run ends whatever its result. A
//! failing network is recorded as aborted and never stops the networks after it.
//!
//! # Pipeline
//! 1. Connect and query chain, node name and node version concurrently
//! 2. Derive the signer, warn on an unexpected address and log its balance
//! 3. Scan `Referenda.ReferendumInfoFor` into a catalog of ongoing referenda
//! 4. Select the referenda on the target tracks without a decision deposit
//! 5. Place the deposits, or report what would be placed

use anyhow::Context;
use chrono::Utc;
use std::path::Path;
use tracing::{error, info, instrument, warn};

use crate::{
	models::{
		DepositPhase, DepositTask, FilterSummary, NetworkConfig, NetworkReport, NetworkRunStatus,
		RunReport,
	},
	repositories::SelectedNetwork,
	services::{
		blockchain::{BlockChainError, ChainConnector, DepositSigner, GovernanceClient},
		catalog::build_catalog,
		filter::{select_deposit_tasks, summarize},
		submission::{DepositDriver, DepositPlan},
	},
	utils::format_balance,
};

/// Processes every selected network in order and collects their reports
pub async fn run_networks<C: ChainConnector>(
	connector: &C,
	networks: &[SelectedNetwork],
) -> RunReport {
	let started_at = Utc::now();
	info!(
		"Starting decision deposit placer for networks: {}",
		networks
			.iter()
			.map(SelectedNetwork::slug)
			.collect::<Vec<_>>()
			.join(", ")
	);

	let mut reports = Vec::with_capacity(networks.len());
	for network in networks {
		let status = match network {
			SelectedNetwork::Configured(config) => process_network(connector, config).await,
			SelectedNetwork::Unknown(slug) => {
				error!("Unknown network: {}", slug);
				NetworkRunStatus::Unknown
			}
		};
		reports.push(NetworkReport {
			network: network.slug().to_string(),
			status,
		});
	}

	info!("All networks processed.");
	RunReport {
		started_at,
		finished_at: Utc::now(),
		networks: reports,
	}
}

/// Runs the pipeline against one network. Errors abort only this network.
#[instrument(skip_all, fields(network = %config.slug))]
pub async fn process_network<C: ChainConnector>(
	connector: &C,
	config: &NetworkConfig,
) -> NetworkRunStatus {
	info!("==== PROCESSING {} ====", config.name.to_uppercase());
	info!("Connecting to {}...", config.endpoint);

	let client = match connector.connect(&config.endpoint).await {
		Ok(client) => client,
		Err(e) => return aborted(config, e),
	};

	let status = match run_pipeline(&client, config).await {
		Ok(status) => status,
		Err(e) => aborted(config, e),
	};

	info!("Disconnecting from the node...");
	drop(client);

	status
}

fn aborted(config: &NetworkConfig, error: BlockChainError) -> NetworkRunStatus {
	error!("Error processing {}: {}", config.name, error);
	NetworkRunStatus::Aborted {
		reason: error.to_string(),
	}
}

async fn run_pipeline<G: GovernanceClient + ?Sized>(
	client: &G,
	config: &NetworkConfig,
) -> Result<NetworkRunStatus, BlockChainError> {
	let (chain, node_name, node_version) = futures::try_join!(
		client.chain_name(),
		client.node_name(),
		client.node_version()
	)?;
	let decimals = client.token_decimals().await?;
	let signer = DepositSigner::from_seed(&config.account_seed)?;

	info!("--- ACCOUNT ---");
	info!(
		"Connected to chain: {} ({} v{})",
		chain, node_name, node_version
	);
	info!("Signer address: {}", signer.address());

	if let Some(expected) = &config.expected_address {
		if !signer.matches_address(expected) {
			warn!(
				"⚠️ Warning: The address generated from the seed ({}) doesn't match the provided SS58 address ({})",
				signer.address(),
				expected
			);
		}
	}

	let balance = client.account_balance(signer.account_id()).await?;
	info!(
		"Account balance: {} (free), {} (reserved)",
		format_balance(balance.free, decimals),
		format_balance(balance.reserved, decimals)
	);
	info!("Using track IDs: {}", config.tracks_display());

	info!("Getting all referenda...");
	let entries = client.referenda_entries().await?;
	info!("Total referenda found: {}", entries.len());

	info!("Analyzing active referendums");
	let (records, catalog) = build_catalog(&entries);
	let tasks = select_deposit_tasks(&records, &config.tracks);
	for task in &tasks {
		info!(
			"Found target referendum #{} without decision deposit",
			task.index
		);
	}

	let filter = summarize(&records, &config.tracks);
	log_summary(config, &filter);

	let deposits = if tasks.is_empty() {
		info!("No referenda currently need decision deposits.");
		DepositPhase::Idle
	} else {
		log_tasks(&tasks);
		if config.place_deposits {
			let driver = DepositDriver::new(client, &signer, config.submission);
			DepositPhase::Executed {
				summary: driver.run(&tasks).await,
			}
		} else {
			let plan = DepositPlan::new(tasks.clone());
			plan.log();
			DepositPhase::DryRun {
				would_place: plan.tasks,
			}
		}
	};

	Ok(NetworkRunStatus::Completed {
		chain,
		signer: signer.address(),
		catalog,
		filter,
		tasks,
		deposits,
	})
}

fn log_summary(config: &NetworkConfig, filter: &FilterSummary) {
	info!("--- SUMMARY ---");
	info!("Total ongoing Referendums: {}", filter.ongoing);
	info!(
		"Referendums on track {}: {}",
		config.tracks_display(),
		filter.on_target_tracks
	);
	info!(
		"Referendums without decision deposits (all tracks): {}",
		filter.without_deposit
	);
	info!(
		"Referendums without decision deposits: {}",
		filter.needing_deposit
	);
}

fn log_tasks(tasks: &[DepositTask]) {
	info!("Referenda without decision deposits that need action:");
	for task in tasks {
		info!(
			"- Referendum #{}, Submitted by: {}",
			task.index, task.submitted_by
		);
	}

	info!("Referendum indices that need deposits (use this for batch operations):");
	info!(
		"{}",
		tasks
			.iter()
			.map(|task| task.index.to_string())
			.collect::<Vec<_>>()
			.join(", ")
	);
}

/// Writes `report` to `path` as pretty printed JSON
pub fn write_report(path: &Path, report: &RunReport) -> anyhow::Result<()> {
	let json = serde_json::to_string_pretty(report).context("Failed to serialize run report")?;
	std::fs::write(path, json)
		.with_context(|| format!("Failed to write run report to {}", path.display()))?;
	info!("Run report written to {}", path.display());
	Ok(())
}
