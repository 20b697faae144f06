//! Signer derivation for the depositing account.

use std::str::FromStr;

use subxt::utils::AccountId32;
use subxt_signer::{sr25519::Keypair, SecretUri};

use crate::{models::SecretString, services::blockchain::BlockChainError};

/// sr25519 keypair of the account placing deposits
#[derive(Clone)]
pub struct DepositSigner {
	keypair: Keypair,
	account_id: AccountId32,
}

impl DepositSigner {
	/// Derives the signer from a secret URI: a mnemonic or hex seed with optional
	/// `//hard/soft` derivation junctions, or a dev account such as `//Alice`.
	pub fn from_seed(seed: &SecretString) -> Result<Self, BlockChainError> {
		let uri = SecretUri::from_str(seed.as_str())
			.map_err(|e| BlockChainError::signer_error(format!("Invalid secret URI: {}", e)))?;
		let keypair = Keypair::from_uri(&uri).map_err(|e| {
			BlockChainError::signer_error(format!("Failed to derive keypair: {}", e))
		})?;
		let account_id = AccountId32::from(keypair.public_key().0);

		Ok(Self {
			keypair,
			account_id,
		})
	}

	pub fn keypair(&self) -> &Keypair {
		&self.keypair
	}

	pub fn account_id(&self) -> &AccountId32 {
		&self.account_id
	}

	/// SS58 address of the signer (generic substrate prefix)
	pub fn address(&self) -> String {
		self.account_id.to_string()
	}

	/// Whether `expected` (SS58, any network prefix) is the signer's account.
	///
	/// Unparsable addresses never match.
	pub fn matches_address(&self, expected: &str) -> bool {
		AccountId32::from_str(expected.trim())
			.map(|expected| expected == self.account_id)
			.unwrap_or(false)
	}
}

impl std::fmt::Debug for DepositSigner {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("DepositSigner")
			.field("account_id", &self.account_id)
			.finish_non_exhaustive()
	}
}
