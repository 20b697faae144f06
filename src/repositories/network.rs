use crate::{
	models::{ConfigLoader, EnvSource, NetworkConfig},
	repositories::error::RepositoryError,
	utils::constants::known_network,
};

/// One entry of the network selection list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectedNetwork {
	Configured(NetworkConfig),
	/// A name missing from the known network table; logged and skipped at run time
	Unknown(String),
}

impl SelectedNetwork {
	pub fn slug(&self) -> &str {
		match self {
			Self::Configured(config) => &config.slug,
			Self::Unknown(slug) => slug,
		}
	}
}

/// Splits a comma separated network list into lowercase slugs, keeping order
pub fn parse_selection(selection: &str) -> Vec<String> {
	selection
		.split(',')
		.map(|slug| slug.trim().to_ascii_lowercase())
		.filter(|slug| !slug.is_empty())
		.collect()
}

/// Resolved configurations of the selected networks, in selection order
#[derive(Debug, Clone)]
pub struct NetworkRepository {
	pub networks: Vec<SelectedNetwork>,
}

impl NetworkRepository {
	/// Builds the configuration of every selected network from `env`.
	///
	/// Fails on the first known network whose configuration is invalid.
	pub fn new<E: EnvSource>(selection: &str, env: &E) -> Result<Self, RepositoryError> {
		let slugs = parse_selection(selection);
		if slugs.is_empty() {
			return Err(RepositoryError::validation_error("No networks selected"));
		}

		let mut networks = Vec::with_capacity(slugs.len());
		for slug in slugs {
			let network = match known_network(&slug) {
				Some(_) => SelectedNetwork::Configured(NetworkConfig::load_from_env(&slug, env)?),
				None => SelectedNetwork::Unknown(slug),
			};
			networks.push(network);
		}

		Ok(Self { networks })
	}

	pub fn get(&self, slug: &str) -> Option<&NetworkConfig> {
		self.networks.iter().find_map(|network| match network {
			SelectedNetwork::Configured(config) if config.slug == slug => Some(config),
			_ => None,
		})
	}

	pub fn slugs(&self) -> Vec<&str> {
		self.networks.iter().map(SelectedNetwork::slug).collect()
	}
}
