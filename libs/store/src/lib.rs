//! Persistence gateway for restaurants and images
//!
//! [`Repository`] is the generic save/lookup contract for a single entity
//! type. [`Store`] bundles the repositories the application needs and is
//! implemented by [`PgStore`] (diesel on `PostgreSQL`) and [`MemoryStore`].

#[macro_use]
extern crate tracing;

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDateTime;
use common::Error;
use models::{Entity, Image, Restaurant, Visibility};

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Durable save and lookup of a single entity type
#[async_trait]
pub trait Repository<E: Entity>: Send + Sync {
	/// Upsert the full current state of `entity`
	///
	/// Unsaved entities get an id assigned, which is written back into
	/// `entity`. Saving the same state twice has no further effect.
	///
	/// # Errors
	/// Errors if `entity` has an id the store does not know, was never given
	/// a creation timestamp, or if the backing storage fails
	async fn save(&self, entity: &mut E) -> Result<(), Error>;

	/// Look up an entity by its id
	///
	/// Soft deleted entities are only returned for
	/// [`Visibility::WithDeleted`].
	///
	/// # Errors
	/// Errors with [`Error::NotFound`] if no visible entity has this id
	async fn find_by_id(&self, id: i32, visibility: Visibility)
	-> Result<E, Error>;
}

/// Every repository the application works with
#[async_trait]
pub trait Store: Repository<Restaurant> + Repository<Image> {
	/// Check that the backing storage responds
	///
	/// # Errors
	/// Errors if the backing storage cannot be reached
	async fn ping(&self) -> Result<(), Error>;
}

/// A [`Store`] shared between request handlers
pub type SharedStore = Arc<dyn Store>;

impl dyn Store {
	/// Look up an entity of any stored type, see [`Repository::find_by_id`]
	///
	/// # Errors
	/// Errors with [`Error::NotFound`] if no visible entity has this id
	pub async fn find<E>(&self, id: i32, visibility: Visibility) -> Result<E, Error>
	where
		E: Entity,
		Self: Repository<E>,
	{
		Repository::<E>::find_by_id(self, id, visibility).await
	}

	/// Save an entity of any stored type, see [`Repository::save`]
	///
	/// # Errors
	/// Errors if saving fails
	pub async fn persist<E>(&self, entity: &mut E) -> Result<(), Error>
	where
		E: Entity,
		Self: Repository<E>,
	{
		Repository::<E>::save(self, entity).await
	}
}

/// Get the creation instant an entity must carry before it can be saved
fn creation_instant<E: Entity>(entity: &E) -> Result<NaiveDateTime, Error> {
	entity.created_at().ok_or_else(|| {
		Error::Infallible(format!(
			"{} saved without a creation timestamp",
			E::KIND
		))
	})
}

/// Get the restaurant an image must belong to before it can be saved
fn owning_restaurant(image: &Image) -> Result<i32, Error> {
	image.restaurant().ok_or_else(|| {
		Error::ValidationError("an image must belong to a restaurant".to_string())
	})
}
