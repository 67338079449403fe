use std::sync::LazyLock;

use common::{DbConn, DbPool};
use deadpool_diesel::postgres::{Manager, Pool};
use diesel::RunQueryDsl;
use diesel_migrations::{
	EmbeddedMigrations,
	MigrationHarness,
	embed_migrations,
};
use url::Url;
use uuid::Uuid;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

/// Hands out scratch databases on the server `DATABASE_URL` points at
pub static DATABASE_PROVIDER: LazyLock<DatabaseProvider> =
	LazyLock::new(DatabaseProvider::from_env);

pub struct DatabaseProvider {
	server_url: Url,
	admin_pool: DbPool,
}

/// A migrated scratch database, dropped together with the guard
pub struct DatabaseGuard {
	admin_conn: DbConn,
	name:       String,
	url:        Url,
}

fn pool_for(url: &Url) -> DbPool {
	let manager =
		Manager::new(url.to_string(), deadpool_diesel::Runtime::Tokio1);

	Pool::builder(manager)
		.build()
		.unwrap_or_else(|e| panic!("could not build a pool for {url}: {e}"))
}

async fn run_sql(conn: &DbConn, statement: String) {
	conn.interact(move |conn| diesel::sql_query(&statement).execute(conn))
		.await
		.expect("database connection panicked")
		.unwrap_or_else(|e| panic!("admin statement failed: {e}"));
}

impl DatabaseProvider {
	/// # Panics
	/// Panics if `DATABASE_URL` is missing or not a url
	fn from_env() -> Self {
		let server_url = std::env::var("DATABASE_URL")
			.expect("set DATABASE_URL to run the ignored postgres tests")
			.parse::<Url>()
			.expect("DATABASE_URL must be a postgres url");

		let admin_pool = pool_for(&server_url);

		Self { server_url, admin_pool }
	}

	/// Create an empty scratch database with all migrations applied
	///
	/// # Panics
	/// Panics if the database server refuses any step
	pub async fn acquire(&self) -> DatabaseGuard {
		let name = format!("restaurant_test_{}", Uuid::new_v4().simple());

		let mut url = self.server_url.clone();
		url.set_path(&name);

		let admin_conn = self
			.admin_pool
			.get()
			.await
			.expect("could not reach the database server");

		run_sql(&admin_conn, format!("CREATE DATABASE {name};")).await;

		let guard = DatabaseGuard { admin_conn, name, url };

		let conn = guard
			.create_pool()
			.get()
			.await
			.expect("could not connect to the scratch database");

		conn.interact(|conn| {
			conn.run_pending_migrations(MIGRATIONS).map(|_| ())
		})
		.await
		.expect("database connection panicked")
		.unwrap_or_else(|e| panic!("migrations failed: {e}"));

		guard
	}
}

impl DatabaseGuard {
	/// A fresh pool on the scratch database
	#[must_use]
	pub fn create_pool(&self) -> DbPool { pool_for(&self.url) }
}

impl Drop for DatabaseGuard {
	fn drop(&mut self) {
		let statement = format!("DROP DATABASE {} WITH (FORCE);", self.name);

		futures::executor::block_on(run_sql(&self.admin_conn, statement));
	}
}
