//! Mock implementations of the node client traits.
//!
//! - [`MockGovernanceClient`] - Mock implementation of a connected node
//! - [`MockChainConnector`] - Mock implementation of the connection factory
//!
//! Submissions are scripted: [`scripted_submission`] returns a subscription that
//! replays a fixed list of status updates and then ends.

use async_trait::async_trait;
use decision_depositor::{
	models::{
		AccountBalance, ExtrinsicEvent, Inclusion, ModuleErrorDetails, ModuleErrorRef,
		ReferendumEntry, TxStatusUpdate,
	},
	services::blockchain::{
		BlockChainError, ChainConnector, DepositSigner, GovernanceClient, StatusItem, Submission,
	},
};
use mockall::mock;
use subxt::utils::AccountId32;
use tokio::sync::mpsc;

mock! {
	/// Mock implementation of a connected node.
	pub GovernanceClient {}

	#[async_trait]
	impl GovernanceClient for GovernanceClient {
		async fn chain_name(&self) -> Result<String, BlockChainError>;
		async fn node_name(&self) -> Result<String, BlockChainError>;
		async fn node_version(&self) -> Result<String, BlockChainError>;
		async fn token_decimals(&self) -> Result<u32, BlockChainError>;
		async fn account_balance(
			&self,
			account: &AccountId32,
		) -> Result<AccountBalance, BlockChainError>;
		async fn referenda_entries(&self) -> Result<Vec<ReferendumEntry>, BlockChainError>;
		async fn submit_place_decision_deposit(
			&self,
			index: u32,
			signer: &DepositSigner,
		) -> Result<Submission, BlockChainError>;
		fn decode_module_error(
			&self,
			error: &ModuleErrorRef,
		) -> Result<ModuleErrorDetails, BlockChainError>;
	}
}

mock! {
	/// Mock implementation of the connection factory.
	pub ChainConnector {}

	#[async_trait]
	impl ChainConnector for ChainConnector {
		type Client = MockGovernanceClient;

		async fn connect(&self, endpoint: &str) -> Result<MockGovernanceClient, BlockChainError>;
	}
}

/// A subscription that yields `updates` in order and then closes
pub fn scripted_submission(tx_hash: &str, updates: Vec<StatusItem>) -> Submission {
	let (sender, receiver) = mpsc::channel(updates.len().max(1));
	for update in updates {
		sender
			.try_send(update)
			.expect("channel sized for every scripted update");
	}

	Submission {
		tx_hash: tx_hash.to_string(),
		updates: receiver,
	}
}

/// Broadcast, then included with `ExtrinsicSuccess`
pub fn successful_updates(block_hash: &str) -> Vec<StatusItem> {
	vec![
		Ok(TxStatusUpdate::Broadcast),
		Ok(TxStatusUpdate::InBlock(Inclusion {
			block_hash: block_hash.to_string(),
			events: vec![ExtrinsicEvent::Success],
		})),
	]
}

/// Answers the read-only startup queries of a healthy node
pub fn expect_node_info(client: &mut MockGovernanceClient, chain: &'static str) {
	client
		.expect_chain_name()
		.returning(move || Ok(chain.to_string()));
	client
		.expect_node_name()
		.returning(|| Ok("Parity Polkadot".to_string()));
	client
		.expect_node_version()
		.returning(|| Ok("1.17.0".to_string()));
	client.expect_token_decimals().returning(|| Ok(10));
	client.expect_account_balance().returning(|_| {
		Ok(AccountBalance {
			free: 12_345_000_000,
			reserved: 0,
		})
	});
}
