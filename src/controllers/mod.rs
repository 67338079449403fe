//! Defines controller functions that correspond to individual routes

use axum::extract::State;
use axum::response::NoContent;
use common::Error;
use models::Entity;
use store::SharedStore;

pub mod image;
pub mod restaurant;

/// Check if the store and webserver are functional
#[instrument(skip(store))]
pub async fn healthcheck(
	State(store): State<SharedStore>,
) -> Result<NoContent, Error> {
	store.ping().await?;

	Ok(NoContent)
}

/// Narrow an id taken from the path to the stored id type
///
/// Ids outside of that range can never exist, so they are not found rather
/// than malformed.
pub(crate) fn stored_id<E: Entity>(id: i64) -> Result<i32, Error> {
	i32::try_from(id).map_err(|_| Error::not_found(E::KIND, id))
}
