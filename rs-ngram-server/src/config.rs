use std::io;

use figment::providers::{Env, Serialized};
use figment::Figment;
use serde::{Deserialize, Serialize};

/// Server settings.
///
/// Sources, lowest priority first:
/// - built-in defaults
/// - `NGRAM_HOST`, `NGRAM_PORT`, `NGRAM_WORKERS` (a `.env` file is loaded first)
/// - `PORT`, as set by most hosting platforms
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ServerConfig {
	pub host: String,
	pub port: u16,
	pub workers: usize,
}

impl Default for ServerConfig {
	fn default() -> Self {
		Self {
			host: "0.0.0.0".to_owned(),
			port: 5000,
			workers: num_cpus::get(),
		}
	}
}

impl ServerConfig {
	/// Loads the configuration from the environment.
	pub fn load() -> io::Result<Self> {
		// Missing .env is fine
		let _ = dotenvy::dotenv();
		Self::from_figment(Self::figment())
	}

	fn figment() -> Figment {
		Figment::from(Serialized::defaults(Self::default()))
			.merge(Env::prefixed("NGRAM_"))
			.merge(Env::raw().only(&["port"]))
	}

	fn from_figment(figment: Figment) -> io::Result<Self> {
		let config: Self = figment
			.extract()
			.map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, format!("Invalid configuration: {e}")))?;
		if config.workers == 0 {
			return Err(io::Error::new(io::ErrorKind::InvalidInput, "Invalid configuration: workers must be >= 1"));
		}
		Ok(config)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use figment::Jail;

	#[test]
	fn defaults_without_environment() {
		Jail::expect_with(|_| {
			let config = ServerConfig::from_figment(ServerConfig::figment()).unwrap();
			assert_eq!(config.host, "0.0.0.0");
			assert_eq!(config.port, 5000);
			assert!(config.workers >= 1);
			Ok(())
		});
	}

	#[test]
	fn prefixed_variables_override_defaults() {
		Jail::expect_with(|jail| {
			jail.set_env("NGRAM_HOST", "127.0.0.1");
			jail.set_env("NGRAM_PORT", "8080");
			jail.set_env("NGRAM_WORKERS", "2");
			let config = ServerConfig::from_figment(ServerConfig::figment()).unwrap();
			assert_eq!(config, ServerConfig { host: "127.0.0.1".into(), port: 8080, workers: 2 });
			Ok(())
		});
	}

	#[test]
	fn bare_port_wins() {
		Jail::expect_with(|jail| {
			jail.set_env("NGRAM_PORT", "8080");
			jail.set_env("PORT", "10000");
			let config = ServerConfig::from_figment(ServerConfig::figment()).unwrap();
			assert_eq!(config.port, 10000);
			Ok(())
		});
	}

	#[test]
	fn zero_workers_is_rejected() {
		Jail::expect_with(|jail| {
			jail.set_env("NGRAM_WORKERS", "0");
			assert!(ServerConfig::from_figment(ServerConfig::figment()).is_err());
			Ok(())
		});
	}

	#[test]
	fn invalid_port_is_rejected() {
		Jail::expect_with(|jail| {
			jail.set_env("PORT", "not-a-port");
			assert!(ServerConfig::from_figment(ServerConfig::figment()).is_err());
			Ok(())
		});
	}
}
