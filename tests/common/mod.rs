use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use restaurant_api::schemas::image::ImageResponse;
use restaurant_api::schemas::restaurant::RestaurantResponse;
use restaurant_api::{AppState, Config, routes};
use serde_json::json;
use store::{MemoryStore, PgStore, SharedStore};

mod mock_db;

use mock_db::{DATABASE_PROVIDER, DatabaseGuard};

#[allow(dead_code)]
pub struct TestEnv {
	pub app:      TestServer,
	pub store:    SharedStore,
	pub db_guard: Option<DatabaseGuard>,
}

#[allow(dead_code)]
impl TestEnv {
	/// Get a test environment backed by an in-memory store
	///
	/// # Panics
	/// Panics if building the test server fails
	pub fn new() -> Self { Self::with_store(Arc::new(MemoryStore::new()), None) }

	/// Get a test environment backed by a temporary `PostgreSQL` database
	///
	/// # Panics
	/// Panics if `DATABASE_URL` is not set or creating the database fails
	pub async fn with_database() -> Self {
		let guard = (*DATABASE_PROVIDER).acquire().await;
		let store = Arc::new(PgStore::new(guard.create_pool()));

		Self::with_store(store, Some(guard))
	}

	fn with_store(store: SharedStore, db_guard: Option<DatabaseGuard>) -> Self {
		let state = AppState { config: Config::default(), store: store.clone() };
		let app = routes::get_app_router(state);

		let test_server = TestServer::builder().build(app).unwrap();

		TestEnv { app: test_server, store, db_guard }
	}

	/// Create a restaurant through the API and return its id
	pub async fn create_restaurant(&self, name: &str) -> i32 {
		let response = self
			.app
			.post("/api/restaurant")
			.json(&json!({
				"name": name,
				"description": "A place to eat",
			}))
			.await;

		assert_eq!(response.status_code(), StatusCode::CREATED);

		response.json::<RestaurantResponse>().id
	}

	/// Create an image below a restaurant through the API and return its id
	pub async fn create_image(&self, restaurant_id: i32, name: &str) -> i32 {
		let response = self
			.app
			.post(&format!("/api/restaurant/{restaurant_id}/image"))
			.json(&json!({ "name": name }))
			.await;

		assert_eq!(response.status_code(), StatusCode::CREATED);

		response.json::<ImageResponse>().id
	}
}
