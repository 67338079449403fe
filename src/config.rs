use std::sync::Arc;
use std::time::Duration;

use common::{DbPool, Error};
use deadpool_diesel::postgres::{Manager, Pool};
use store::{MemoryStore, PgStore, SharedStore};
use tracing::Level;
use url::Url;

#[derive(Clone, Debug)]
pub struct Config {
	/// Absent when the service should keep everything in memory
	pub database_url: Option<String>,

	pub base_url:        Url,
	pub bind_address:    String,
	pub request_timeout: Duration,
	pub log_level:       Level,
}

impl Config {
	fn get_env_var(var: &str) -> Option<String> { std::env::var(var).ok() }

	fn get_env_var_or(var: &str, default: &str) -> String {
		Self::get_env_var(var).unwrap_or_else(|| default.to_string())
	}

	/// Create a new [`Config`] from environment variables
	///
	/// # Panics
	/// Panics if an environment variable holds an invalid value
	#[must_use]
	pub fn from_env() -> Self {
		let database_url = Self::get_env_var("DATABASE_URL");

		let base_url = Self::get_env_var_or("BASE_URL", "http://localhost")
			.parse::<Url>()
			.unwrap_or_else(|e| panic!("BASE_URL must be a valid url: {e}"));

		let bind_address = Self::get_env_var_or("BIND_ADDRESS", "0.0.0.0:80");

		let request_timeout = Duration::from_secs(
			Self::get_env_var_or("REQUEST_TIMEOUT_SECONDS", "10")
				.parse::<u64>()
				.unwrap_or_else(|e| {
					panic!("REQUEST_TIMEOUT_SECONDS must be a number: {e}")
				}),
		);

		let log_level = Self::get_env_var_or("LOG_LEVEL", "info")
			.parse::<Level>()
			.unwrap_or_else(|e| panic!("LOG_LEVEL must be a log level: {e}"));

		Self { database_url, base_url, bind_address, request_timeout, log_level }
	}

	/// Create a database pool for the given config, if a database is
	/// configured
	///
	/// # Panics
	/// Panics if creating the pool fails
	#[must_use]
	pub fn create_database_pool(&self) -> Option<DbPool> {
		let database_url = self.database_url.as_ref()?;

		let manager = Manager::new(
			database_url.to_string(),
			deadpool_diesel::Runtime::Tokio1,
		);

		Some(Pool::builder(manager).build().unwrap())
	}

	/// Create the store all request handlers share
	///
	/// Falls back to a [`MemoryStore`] when no database is configured
	///
	/// # Panics
	/// Panics if creating the database pool fails
	#[must_use]
	pub fn create_store(&self) -> SharedStore {
		if let Some(pool) = self.create_database_pool() {
			info!("using postgres store");

			Arc::new(PgStore::new(pool))
		} else {
			warn!("DATABASE_URL not set, keeping all data in memory");

			Arc::new(MemoryStore::new())
		}
	}

	/// Build the absolute url of a path below the configured base url
	///
	/// # Errors
	/// Errors if `path` is not a valid relative url
	pub fn absolute_url(&self, path: &str) -> Result<Url, Error> {
		Ok(self.base_url.join(path)?)
	}
}

impl Default for Config {
	fn default() -> Self {
		Self {
			database_url:    None,
			base_url:        Url::parse("http://localhost").unwrap(),
			bind_address:    "0.0.0.0:80".to_string(),
			request_timeout: Duration::from_secs(10),
			log_level:       Level::INFO,
		}
	}
}
