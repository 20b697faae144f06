use std::{collections::BTreeSet, time::Duration};

use crate::{
	models::{
		ConfigLoader, FinalityRequirement, NetworkConfig, SecretString, SubmissionSettings,
		TrackId,
	},
	utils::constants::{known_network, DEFAULT_ACCOUNT_SEED, DEFAULT_TRACK_ID},
};

use super::{error::ConfigError, EnvSource};

/// Reads `<PREFIX>_<NAME>`, falling back to the global `<NAME>`
fn scoped(env: &impl EnvSource, prefix: &str, name: &str) -> Option<String> {
	let scoped_key = format!("{}_{}", prefix, name);
	env.first_of(&[scoped_key.as_str(), name])
}

fn is_true(value: Option<String>) -> bool {
	value
		.map(|v| v.trim().eq_ignore_ascii_case("true"))
		.unwrap_or(false)
}

fn parse_secs(
	env: &impl EnvSource,
	prefix: &str,
	name: &str,
	default: Duration,
) -> Result<Duration, ConfigError> {
	match scoped(env, prefix, name) {
		Some(value) => value
			.trim()
			.parse::<u64>()
			.map(Duration::from_secs)
			.map_err(|e| ConfigError::parse_error(format!("{}: {}", name, e))),
		None => Ok(default),
	}
}

impl ConfigLoader for NetworkConfig {
	fn load_from_env<E: EnvSource>(slug: &str, env: &E) -> Result<Self, ConfigError> {
		let slug = slug.trim().to_ascii_lowercase();
		let known = known_network(&slug).ok_or_else(|| ConfigError::unknown_network(&slug))?;
		let prefix = slug.to_ascii_uppercase();

		let endpoint = env
			.get(&format!("{}_RPC_ENDPOINT", prefix))
			.unwrap_or_else(|| known.default_endpoint.to_string());

		let account_seed = scoped(env, &prefix, "ACCOUNT_SEED")
			.map(SecretString::new)
			.unwrap_or_else(|| SecretString::from(DEFAULT_ACCOUNT_SEED));

		let tracks =
			scoped(env, &prefix, "TRACK_ID").unwrap_or_else(|| DEFAULT_TRACK_ID.to_string());
		let tracks = TrackId::parse_list(&tracks)?
			.into_iter()
			.collect::<BTreeSet<_>>();

		// Either the scoped or the global flag enables execution
		let place_deposits = is_true(env.get(&format!("{}_PLACE_DEPOSITS", prefix)))
			|| is_true(env.get("PLACE_DEPOSITS"));

		let finality = if is_true(scoped(env, &prefix, "REQUIRE_FINALIZED")) {
			FinalityRequirement::Finalized
		} else {
			FinalityRequirement::InBlock
		};

		let defaults = SubmissionSettings::default();
		let config = NetworkConfig {
			slug,
			name: known.name.to_string(),
			endpoint,
			account_seed,
			expected_address: scoped(env, &prefix, "SS58_ADDRESS"),
			tracks,
			place_deposits,
			submission: SubmissionSettings {
				inter_submission_delay: parse_secs(
					env,
					&prefix,
					"SUBMISSION_DELAY_SECS",
					defaults.inter_submission_delay,
				)?,
				submission_timeout: parse_secs(
					env,
					&prefix,
					"SUBMISSION_TIMEOUT_SECS",
					defaults.submission_timeout,
				)?,
				finality,
			},
		};

		if let Err(validation_error) = config.validate() {
			return Err(ConfigError::validation_error(format!(
				"{}: {}",
				config.slug, validation_error
			)));
		}

		Ok(config)
	}

	fn validate(&self) -> Result<(), String> {
		// Validate endpoint
		let endpoint = url::Url::parse(&self.endpoint)
			.map_err(|e| format!("Invalid RPC endpoint '{}': {}", self.endpoint, e))?;
		if !matches!(endpoint.scheme(), "ws" | "wss") {
			return Err("RPC endpoint must start with ws:// or wss://".to_string());
		}

		if self.account_seed.is_empty() {
			return Err("Account seed must not be empty".to_string());
		}

		if self.tracks.is_empty() {
			return Err("At least one track id is required".to_string());
		}

		if self.submission.submission_timeout.is_zero() {
			return Err("Submission timeout must be greater than 0".to_string());
		}

		Ok(())
	}
}
