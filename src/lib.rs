//! # Restaurant API library

#[macro_use]
extern crate tracing;

use axum::extract::FromRef;
use store::SharedStore;

mod config;

pub mod controllers;
pub mod routes;
pub mod schemas;

pub use config::*;

/// Common state of the app
#[derive(Clone)]
pub struct AppState {
	pub config: Config,
	pub store:  SharedStore,
}

impl AppState {
	/// Build the state for the given config, connecting to its store
	#[must_use]
	pub fn new(config: Config) -> Self {
		let store = config.create_store();

		Self { config, store }
	}
}

impl FromRef<AppState> for Config {
	fn from_ref(input: &AppState) -> Self { input.config.clone() }
}

impl FromRef<AppState> for SharedStore {
	fn from_ref(input: &AppState) -> Self { input.store.clone() }
}
