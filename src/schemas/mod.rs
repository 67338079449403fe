//! Request and response bodies of the API

use common::Error;
use models::{Entity, Timestamped, Visibility};
use serde::{Deserialize, Serialize};

pub mod image;
pub mod restaurant;

pub trait BuildResponse<R> {
	/// Turn a saved entity into its wire representation
	///
	/// # Errors
	/// Errors if the entity was never saved
	fn build_response(self) -> Result<R, Error>;
}

/// Query options accepted by every `show` endpoint
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShowOptions {
	/// Explicitly ask for soft deleted entities as well
	pub with_deleted: bool,
}

impl ShowOptions {
	#[must_use]
	pub fn visibility(self) -> Visibility { self.with_deleted.into() }
}

/// Get the id and creation instant every response carries
fn saved_identity<E: Entity>(
	entity: &E,
) -> Result<(i32, chrono::NaiveDateTime), Error> {
	match (entity.id(), entity.created_at()) {
		(Some(id), Some(created_at)) => Ok((id, created_at)),
		_ => {
			Err(Error::Infallible(format!(
				"cannot respond with an unsaved {}",
				E::KIND
			)))
		},
	}
}
