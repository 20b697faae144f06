//! Integration tests for per-network orchestration.

use decision_depositor::{
	bootstrap::{process_network, run_networks, write_report},
	models::{DepositPhase, NetworkRunStatus, RunReport, TrackId},
	repositories::SelectedNetwork,
	services::blockchain::BlockChainError,
	utils::tests::builders::network::NetworkConfigBuilder,
};
use tracing_test::traced_test;

use crate::integration::mocks::{
	expect_node_info, mixed_entries, scripted_submission, successful_updates, MockChainConnector,
	MockGovernanceClient,
};

const ALICE: &str = "5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY";
const BOB: &str = "5FHneW46xGXgs5mUiveU4sbTyGBzmstUspZC92UhjJM694ty";

fn scanning_client() -> MockGovernanceClient {
	let mut client = MockGovernanceClient::new();
	expect_node_info(&mut client, "Kusama");
	client
		.expect_referenda_entries()
		.times(1)
		.returning(|| Ok(mixed_entries()));
	client
}

#[tokio::test]
async fn test_first_network_failure_does_not_stop_the_second() {
	let mut connector = MockChainConnector::new();
	connector
		.expect_connect()
		.withf(|endpoint| endpoint == "ws://polkadot.invalid:9944")
		.times(1)
		.returning(|_| Err(BlockChainError::connection_error("connection refused")));
	connector
		.expect_connect()
		.withf(|endpoint| endpoint == "ws://kusama.local:9944")
		.times(1)
		.returning(|_| {
			let mut client = scanning_client();
			client.expect_submit_place_decision_deposit().never();
			Ok(client)
		});

	let networks = vec![
		SelectedNetwork::Configured(
			NetworkConfigBuilder::new()
				.slug("polkadot")
				.endpoint("ws://polkadot.invalid:9944")
				.build(),
		),
		SelectedNetwork::Configured(
			NetworkConfigBuilder::new()
				.slug("kusama")
				.endpoint("ws://kusama.local:9944")
				.tracks(&[7])
				.build(),
		),
	];

	let report = run_networks(&connector, &networks).await;

	assert_eq!(report.networks.len(), 2);
	assert_eq!(
		report.network("polkadot").unwrap().status,
		NetworkRunStatus::Aborted {
			reason: "Connection error: connection refused".into()
		}
	);

	match &report.network("kusama").unwrap().status {
		NetworkRunStatus::Completed {
			chain,
			signer,
			catalog,
			filter,
			tasks,
			deposits,
		} => {
			assert_eq!(chain, "Kusama");
			assert_eq!(signer, ALICE);
			assert_eq!(catalog.entries, 4);
			assert_eq!(catalog.ongoing, 3);
			assert_eq!(filter.needing_deposit, 1);
			assert_eq!(tasks.len(), 1);
			assert_eq!(tasks[0].index, 11);
			assert_eq!(tasks[0].track, TrackId(7));
			assert_eq!(
				deposits,
				&DepositPhase::DryRun {
					would_place: tasks.clone()
				}
			);
		}
		other => panic!("unexpected status: {:?}", other),
	}
	assert!(report.started_at <= report.finished_at);
}

#[tokio::test]
async fn test_deposits_are_placed_when_enabled() {
	let mut connector = MockChainConnector::new();
	connector.expect_connect().times(1).returning(|_| {
		let mut client = MockGovernanceClient::new();
		expect_node_info(&mut client, "Polkadot");
		client
			.expect_referenda_entries()
			.returning(|| Ok(mixed_entries()));
		client
			.expect_submit_place_decision_deposit()
			.withf(|index, _| *index == 11 || *index == 12)
			.times(2)
			.returning(|index, _| {
				Ok(scripted_submission(
					&format!("0x{:02x}", index),
					successful_updates("0xb10c"),
				))
			});
		Ok(client)
	});

	let config = NetworkConfigBuilder::new()
		.tracks(&[7, 99])
		.place_deposits(true)
		.build();

	let status = process_network(&connector, &config).await;

	let summary = match status {
		NetworkRunStatus::Completed {
			deposits: DepositPhase::Executed { summary },
			..
		} => summary,
		other => panic!("unexpected status: {:?}", other),
	};
	assert_eq!(summary.attempted, 2);
	assert_eq!(summary.successful, 2);
	assert!(summary.failed.is_empty());
	assert_eq!(summary.outcomes[0].tx_hash.as_deref(), Some("0x0b"));
	assert_eq!(summary.outcomes[1].block_hash.as_deref(), Some("0xb10c"));
}

#[tokio::test]
async fn test_missing_referenda_storage_aborts_only_that_network() {
	let mut connector = MockChainConnector::new();
	connector
		.expect_connect()
		.withf(|endpoint| endpoint == "ws://solo.local:9944")
		.returning(|_| {
			let mut client = MockGovernanceClient::new();
			expect_node_info(&mut client, "Solochain");
			client.expect_referenda_entries().returning(|| {
				Err(BlockChainError::query_unavailable(
					"Referenda.ReferendumInfoFor is not present in the runtime metadata",
				))
			});
			Ok(client)
		});
	connector
		.expect_connect()
		.withf(|endpoint| endpoint == "ws://kusama.local:9944")
		.returning(|_| Ok(scanning_client()));

	let networks = vec![
		SelectedNetwork::Configured(
			NetworkConfigBuilder::new()
				.slug("polkadot")
				.endpoint("ws://solo.local:9944")
				.build(),
		),
		SelectedNetwork::Configured(
			NetworkConfigBuilder::new()
				.slug("kusama")
				.endpoint("ws://kusama.local:9944")
				.build(),
		),
	];

	let report = run_networks(&connector, &networks).await;

	assert!(matches!(
		&report.networks[0].status,
		NetworkRunStatus::Aborted { reason } if reason.starts_with("Query unavailable")
	));
	assert!(matches!(
		&report.networks[1].status,
		NetworkRunStatus::Completed {
			deposits: DepositPhase::Idle,
			..
		}
	));
}

#[tokio::test]
#[traced_test]
async fn test_unknown_network_is_logged_and_skipped() {
	let mut connector = MockChainConnector::new();
	connector.expect_connect().never();

	let report = run_networks(&connector, &[SelectedNetwork::Unknown("westend".into())]).await;

	assert_eq!(report.networks[0].network, "westend");
	assert_eq!(report.networks[0].status, NetworkRunStatus::Unknown);
	assert!(logs_contain("Unknown network: westend"));
}

#[tokio::test]
#[traced_test]
async fn test_address_mismatch_is_only_a_warning() {
	let mut connector = MockChainConnector::new();
	connector.expect_connect().returning(|_| Ok(scanning_client()));

	let config = NetworkConfigBuilder::new()
		.slug("kusama")
		.expected_address(BOB)
		.build();

	let status = process_network(&connector, &config).await;

	assert!(matches!(status, NetworkRunStatus::Completed { .. }));
	assert!(logs_contain("doesn't match the provided SS58 address"));
	assert!(logs_contain("Account balance: 1.2345 (free), 0 (reserved)"));
}

#[tokio::test]
async fn test_report_is_written_as_json() {
	let mut connector = MockChainConnector::new();
	connector
		.expect_connect()
		.returning(|_| Err(BlockChainError::connection_error("timeout")));

	let networks = vec![SelectedNetwork::Configured(NetworkConfigBuilder::new().build())];
	let report = run_networks(&connector, &networks).await;

	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("report.json");
	write_report(&path, &report).unwrap();

	let written: RunReport =
		serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
	assert_eq!(written, report);

	let json: serde_json::Value =
		serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
	assert_eq!(json["networks"][0]["network"], "polkadot");
	assert_eq!(json["networks"][0]["status"], "aborted");
}
