use chrono::NaiveDateTime;
use common::Error;
use models::{Image, SoftDeletable, Timestamped};
use serde::{Deserialize, Serialize};

use crate::schemas::{BuildResponse, saved_identity};

#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageResponse {
	pub id:         i32,
	pub name:       String,
	pub restaurant: Option<i32>,
	pub created_at: NaiveDateTime,
	pub updated_at: Option<NaiveDateTime>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub deleted_at: Option<NaiveDateTime>,
}

impl BuildResponse<ImageResponse> for Image {
	fn build_response(self) -> Result<ImageResponse, Error> {
		let (id, created_at) = saved_identity(&self)?;

		Ok(ImageResponse {
			id,
			restaurant: self.restaurant(),
			updated_at: self.updated_at(),
			deleted_at: self.deleted_at(),
			name: self.name,
			created_at,
		})
	}
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CreateImageRequest {
	pub name: String,
}

impl CreateImageRequest {
	/// Build a new [`Image`] for a restaurant, created at the given instant
	#[must_use]
	pub fn to_entity(
		self,
		restaurant_id: i32,
		created_at: NaiveDateTime,
	) -> Image {
		let mut image = Image::new(self.name, restaurant_id);
		image.set_created_at(created_at);

		image
	}
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct UpdateImageRequest {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub name:       Option<String>,
	/// Move the image to another restaurant
	#[serde(skip_serializing_if = "Option::is_none")]
	pub restaurant: Option<i32>,
}
