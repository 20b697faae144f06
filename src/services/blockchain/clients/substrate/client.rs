//! Substrate client implementation.
//!
//! Talks to a node over a single WebSocket connection through `subxt`. Runtime
//! metadata is fetched on connect, so storage entries, calls and events are all
//! handled dynamically and no generated runtime types are needed.

use async_trait::async_trait;
use futures::{Stream, StreamExt};
use subxt::{
	backend::{legacy::LegacyRpcMethods, rpc::RpcClient},
	dynamic::Value,
	ext::scale_value::ValueDef,
	tx::TxStatus,
	utils::AccountId32,
	OnlineClient, PolkadotConfig,
};
use tokio::sync::mpsc;
use tracing::instrument;

use crate::{
	models::{
		value::{as_composite, as_unsigned, field},
		AccountBalance, ExtrinsicEvent, Inclusion, ModuleErrorDetails, ModuleErrorRef,
		ReferendumEntry, TxStatusUpdate,
	},
	services::blockchain::{
		client::{ChainConnector, GovernanceClient, StatusItem, Submission},
		BlockChainError, DepositSigner,
	},
	utils::{format_hash, PLACE_DECISION_DEPOSIT_CALL, REFERENDA_PALLET, REFERENDUM_INFO_STORAGE},
};

/// Token decimals assumed when the node does not report `tokenDecimals`
const FALLBACK_TOKEN_DECIMALS: u32 = 12;

/// Buffered status updates per submission
const STATUS_CHANNEL_CAPACITY: usize = 16;

/// Client for a Substrate node running `pallet-referenda`
#[derive(Clone)]
pub struct SubxtClient {
	api: OnlineClient<PolkadotConfig>,
	rpc: LegacyRpcMethods<PolkadotConfig>,
}

impl SubxtClient {
	/// Connects to `endpoint` and downloads the runtime metadata
	pub async fn connect(endpoint: &str) -> Result<Self, BlockChainError> {
		let rpc_client = RpcClient::from_insecure_url(endpoint)
			.await
			.map_err(|e| BlockChainError::connection_error(format!("{}: {}", endpoint, e)))?;
		let api = OnlineClient::<PolkadotConfig>::from_rpc_client(rpc_client.clone())
			.await
			.map_err(|e| BlockChainError::connection_error(format!("{}: {}", endpoint, e)))?;
		let rpc = LegacyRpcMethods::<PolkadotConfig>::new(rpc_client);

		Ok(Self { api, rpc })
	}

	fn has_referenda_storage(&self) -> bool {
		self.api
			.metadata()
			.pallet_by_name(REFERENDA_PALLET)
			.and_then(|pallet| pallet.storage())
			.and_then(|storage| storage.entry_by_name(REFERENDUM_INFO_STORAGE))
			.is_some()
	}
}

#[async_trait]
impl GovernanceClient for SubxtClient {
	#[instrument(skip(self))]
	async fn chain_name(&self) -> Result<String, BlockChainError> {
		self.rpc
			.system_chain()
			.await
			.map_err(|e| BlockChainError::request_error(format!("system_chain: {}", e)))
	}

	#[instrument(skip(self))]
	async fn node_name(&self) -> Result<String, BlockChainError> {
		self.rpc
			.system_name()
			.await
			.map_err(|e| BlockChainError::request_error(format!("system_name: {}", e)))
	}

	#[instrument(skip(self))]
	async fn node_version(&self) -> Result<String, BlockChainError> {
		self.rpc
			.system_version()
			.await
			.map_err(|e| BlockChainError::request_error(format!("system_version: {}", e)))
	}

	#[instrument(skip(self))]
	async fn token_decimals(&self) -> Result<u32, BlockChainError> {
		let properties = self
			.rpc
			.system_properties()
			.await
			.map_err(|e| BlockChainError::request_error(format!("system_properties: {}", e)))?;

		// Multi-token chains report an array, the first entry is the native token
		let decimals = properties.get("tokenDecimals").and_then(|decimals| {
			decimals
				.as_u64()
				.or_else(|| decimals.as_array()?.first()?.as_u64())
		});

		Ok(decimals
			.and_then(|decimals| u32::try_from(decimals).ok())
			.unwrap_or(FALLBACK_TOKEN_DECIMALS))
	}

	#[instrument(skip(self), fields(account = %account))]
	async fn account_balance(
		&self,
		account: &AccountId32,
	) -> Result<AccountBalance, BlockChainError> {
		let address =
			subxt::dynamic::storage("System", "Account", vec![Value::from_bytes(account.0)]);
		let info = self.api.storage().at_latest().await?.fetch(&address).await?;

		let Some(info) = info else {
			return Ok(AccountBalance::default());
		};
		let info = info.to_value().map_err(subxt::Error::from)?.remove_context();

		let data = as_composite(&info)
			.and_then(|info| field(info, "data"))
			.and_then(as_composite)
			.ok_or_else(|| BlockChainError::request_error("Unexpected System.Account layout"))?;
		let amount = |name: &str| field(data, name).and_then(as_unsigned).unwrap_or_default();

		Ok(AccountBalance {
			free: amount("free"),
			reserved: amount("reserved"),
		})
	}

	#[instrument(skip(self))]
	async fn referenda_entries(&self) -> Result<Vec<ReferendumEntry>, BlockChainError> {
		if !self.has_referenda_storage() {
			return Err(BlockChainError::query_unavailable(format!(
				"{}.{} is not present in the runtime metadata",
				REFERENDA_PALLET, REFERENDUM_INFO_STORAGE
			)));
		}

		let address = subxt::dynamic::storage(
			REFERENDA_PALLET,
			REFERENDUM_INFO_STORAGE,
			Vec::<Value>::new(),
		);
		let mut pairs = self.api.storage().at_latest().await?.iter(address).await?;

		let mut entries = Vec::new();
		while let Some(pair) = pairs.next().await {
			let entry = match pair {
				Ok(pair) => ReferendumEntry {
					keys: pair.keys,
					value: pair
						.value
						.to_value()
						.map(|value| value.remove_context())
						.map_err(|e| e.to_string()),
				},
				Err(e) => ReferendumEntry {
					keys: Vec::new(),
					value: Err(e.to_string()),
				},
			};
			entries.push(entry);
		}

		Ok(entries)
	}

	#[instrument(skip(self, signer), fields(signer = %signer.address()))]
	async fn submit_place_decision_deposit(
		&self,
		index: u32,
		signer: &DepositSigner,
	) -> Result<Submission, BlockChainError> {
		let call = subxt::dynamic::tx(
			REFERENDA_PALLET,
			PLACE_DECISION_DEPOSIT_CALL,
			vec![Value::u128(u128::from(index))],
		);

		let progress = self
			.api
			.tx()
			.sign_and_submit_then_watch_default(&call, signer.keypair())
			.await
			.map_err(|e| BlockChainError::transaction_error(e.to_string()))?;
		let tx_hash = format_hash(progress.extrinsic_hash());

		let statuses = progress.then(|status| async move {
			match status {
				Ok(status) => convert_status(status).await,
				Err(e) => Err(BlockChainError::transaction_error(e.to_string())),
			}
		});

		let (sender, updates) = mpsc::channel(STATUS_CHANNEL_CAPACITY);
		tokio::spawn(forward_status_updates(Box::pin(statuses), sender));

		Ok(Submission { tx_hash, updates })
	}

	fn decode_module_error(
		&self,
		error: &ModuleErrorRef,
	) -> Result<ModuleErrorDetails, BlockChainError> {
		let metadata = self.api.metadata();
		let pallet = metadata.pallet_by_index(error.pallet_index).ok_or_else(|| {
			BlockChainError::internal_error(format!("No pallet with index {}", error.pallet_index))
		})?;
		let variant = pallet
			.error_variant_by_index(error.error_index())
			.ok_or_else(|| {
				BlockChainError::internal_error(format!(
					"Pallet {} has no error with index {}",
					pallet.name(),
					error.error_index()
				))
			})?;

		Ok(ModuleErrorDetails {
			pallet: pallet.name().to_string(),
			error: variant.name.clone(),
		})
	}
}

/// Pumps status updates into the submission channel.
///
/// Stops after a terminal status, when the subscription ends, or as soon as the
/// receiver is closed, even while waiting on the node. Dropping `statuses`
/// unsubscribes from the node and releases its client handle.
async fn forward_status_updates<S>(mut statuses: S, sender: mpsc::Sender<StatusItem>)
where
	S: Stream<Item = StatusItem> + Unpin,
{
	loop {
		let item = tokio::select! {
			_ = sender.closed() => break,
			item = statuses.next() => match item {
				Some(item) => item,
				None => break,
			},
		};

		let terminal = match &item {
			Ok(update) => {
				update.is_terminal_failure() || matches!(update, TxStatusUpdate::Finalized(_))
			}
			Err(_) => true,
		};

		if sender.send(item).await.is_err() || terminal {
			break;
		}
	}
}

async fn convert_status(
	status: TxStatus<PolkadotConfig, OnlineClient<PolkadotConfig>>,
) -> StatusItem {
	let update = match status {
		TxStatus::Validated { .. } => TxStatusUpdate::Ready,
		TxStatus::Broadcasted { .. } => TxStatusUpdate::Broadcast,
		TxStatus::NoLongerInBestBlock { .. } => TxStatusUpdate::NoLongerInBestBlock,
		TxStatus::InBestBlock(tx) => {
			let block_hash = format_hash(tx.block_hash());
			match inclusion(tx).await {
				Ok(inclusion) => TxStatusUpdate::InBlock(inclusion),
				Err(e) => TxStatusUpdate::InBlockUnverified {
					block_hash,
					reason: e.message().to_string(),
				},
			}
		}
		TxStatus::InFinalizedBlock(tx) => TxStatusUpdate::Finalized(inclusion(tx).await?),
		TxStatus::Error { message } | TxStatus::Dropped { message } => {
			TxStatusUpdate::Dropped(Some(message))
		}
		TxStatus::Invalid { message } => TxStatusUpdate::Invalid(Some(message)),
	};
	Ok(update)
}

/// Collects the events the extrinsic emitted in the including block
async fn inclusion(
	tx: subxt::tx::TxInBlock<PolkadotConfig, OnlineClient<PolkadotConfig>>,
) -> Result<Inclusion, BlockChainError> {
	let block_hash = format_hash(tx.block_hash());
	let events = tx.fetch_events().await?;

	let mut decoded = Vec::new();
	for event in events.iter() {
		let event = event?;
		let fields = Value {
			value: ValueDef::Composite(event.field_values()?),
			context: 0u32,
		}
		.remove_context();
		decoded.push(ExtrinsicEvent::from_parts(
			event.pallet_name(),
			event.variant_name(),
			&fields,
		));
	}

	Ok(Inclusion {
		block_hash,
		events: decoded,
	})
}

/// Opens [`SubxtClient`] connections
#[derive(Debug, Clone, Copy, Default)]
pub struct SubxtConnector;

#[async_trait]
impl ChainConnector for SubxtConnector {
	type Client = SubxtClient;

	async fn connect(&self, endpoint: &str) -> Result<SubxtClient, BlockChainError> {
		SubxtClient::connect(endpoint).await
	}
}
