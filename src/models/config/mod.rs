use std::collections::HashMap;

mod error;
mod network_config;

pub use error::ConfigError;

/// Key/value source the configuration is read from.
///
/// The binary reads the process environment (after `.env` is loaded); tests pass
/// a plain map so no global state is touched.
pub trait EnvSource {
	/// Returns the value for `key`. Blank values count as unset.
	fn get(&self, key: &str) -> Option<String>;

	/// Returns the first set value among `keys`
	fn first_of(&self, keys: &[&str]) -> Option<String> {
		keys.iter().find_map(|key| self.get(key))
	}
}

/// The process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
	fn get(&self, key: &str) -> Option<String> {
		std::env::var(key).ok().filter(|value| !value.trim().is_empty())
	}
}

impl EnvSource for HashMap<String, String> {
	fn get(&self, key: &str) -> Option<String> {
		HashMap::get(self, key)
			.filter(|value| !value.trim().is_empty())
			.cloned()
	}
}

/// Common interface for loading configuration
pub trait ConfigLoader: Sized {
	/// Builds the configuration identified by `slug` from `env`
	fn load_from_env<E: EnvSource>(slug: &str, env: &E) -> Result<Self, ConfigError>;

	fn validate(&self) -> Result<(), String>;
}
