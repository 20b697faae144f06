//! Core blockchain client interface and traits.
//!
//! The deposit pipeline only talks to a node through [`GovernanceClient`]; connections
//! are opened through a [`ChainConnector`]. This keeps the scan, the filter and the
//! submission logic independent of the RPC stack, and lets tests drive them with
//! scripted responses.

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::{
	models::{AccountBalance, ModuleErrorDetails, ModuleErrorRef, ReferendumEntry, TxStatusUpdate},
	services::blockchain::{BlockChainError, DepositSigner},
};

/// Item type of a submission's status channel
pub type StatusItem = Result<TxStatusUpdate, BlockChainError>;

/// A submitted extrinsic and the receiving half of its status subscription.
///
/// Dropping or closing `updates` ends the subscription.
#[derive(Debug)]
pub struct Submission {
	/// Hash of the signed extrinsic
	pub tx_hash: String,
	pub updates: mpsc::Receiver<StatusItem>,
}

/// Operations the decision deposit placer needs from a connected node
#[async_trait]
pub trait GovernanceClient: Send + Sync {
	/// Name of the chain, from `system_chain`
	async fn chain_name(&self) -> Result<String, BlockChainError>;

	/// Name of the node implementation, from `system_name`
	async fn node_name(&self) -> Result<String, BlockChainError>;

	/// Version of the node, from `system_version`
	async fn node_version(&self) -> Result<String, BlockChainError>;

	/// Decimal exponent of the native token
	async fn token_decimals(&self) -> Result<u32, BlockChainError>;

	/// Free and reserved balance of `account`. Unknown accounts have a zero balance.
	async fn account_balance(
		&self,
		account: &subxt::utils::AccountId32,
	) -> Result<AccountBalance, BlockChainError>;

	/// Every entry of `Referenda.ReferendumInfoFor` at the latest block.
	///
	/// Fails with [`BlockChainError::QueryUnavailable`] if the runtime has no such
	/// storage entry. Entries that fail to decode are returned with an error value
	/// rather than failing the whole iteration.
	async fn referenda_entries(&self) -> Result<Vec<ReferendumEntry>, BlockChainError>;

	/// Signs and submits `Referenda.place_decision_deposit(index)` and subscribes to its
	/// status updates.
	///
	/// An error means the extrinsic never reached the pool.
	async fn submit_place_decision_deposit(
		&self,
		index: u32,
		signer: &DepositSigner,
	) -> Result<Submission, BlockChainError>;

	/// Resolves a pallet error against the runtime metadata
	fn decode_module_error(
		&self,
		error: &ModuleErrorRef,
	) -> Result<ModuleErrorDetails, BlockChainError>;
}

/// Opens connections to nodes
#[async_trait]
pub trait ChainConnector: Send + Sync {
	type Client: GovernanceClient;

	/// Connects to `endpoint`. The connection closes when the client is dropped.
	async fn connect(&self, endpoint: &str) -> Result<Self::Client, BlockChainError>;
}
