use chrono::NaiveDateTime;
use common::Error;
use models::{OpeningHours, Restaurant, SoftDeletable, Timestamped};
use serde::{Deserialize, Serialize};

use crate::schemas::{BuildResponse, saved_identity};

#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantResponse {
	pub id:              i32,
	pub name:            String,
	pub description:     String,
	pub am_opening_time: Option<OpeningHours>,
	pub pm_opening_time: OpeningHours,
	pub max_guest:       i32,
	pub images:          Vec<i32>,
	pub created_at:      NaiveDateTime,
	pub updated_at:      Option<NaiveDateTime>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub deleted_at:      Option<NaiveDateTime>,
}

impl BuildResponse<RestaurantResponse> for Restaurant {
	fn build_response(self) -> Result<RestaurantResponse, Error> {
		let (id, created_at) = saved_identity(&self)?;

		Ok(RestaurantResponse {
			id,
			images: self.images().iter().copied().collect(),
			updated_at: self.updated_at(),
			deleted_at: self.deleted_at(),
			name: self.name,
			description: self.description,
			am_opening_time: self.am_opening_time,
			pm_opening_time: self.pm_opening_time,
			max_guest: self.max_guest,
			created_at,
		})
	}
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRestaurantRequest {
	pub name:            String,
	pub description:     String,
	#[serde(default)]
	pub am_opening_time: Option<OpeningHours>,
	#[serde(default)]
	pub pm_opening_time: OpeningHours,
	#[serde(default)]
	pub max_guest:       i32,
}

impl CreateRestaurantRequest {
	/// Build the new [`Restaurant`], created at the given instant
	#[must_use]
	pub fn to_entity(self, created_at: NaiveDateTime) -> Restaurant {
		let mut restaurant = Restaurant::new(self.name, self.description);

		restaurant.am_opening_time = self.am_opening_time;
		restaurant.pm_opening_time = self.pm_opening_time;
		restaurant.max_guest = self.max_guest;
		restaurant.set_created_at(created_at);

		restaurant
	}
}

/// A partial restaurant, only the fields that are present get applied
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateRestaurantRequest {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub name:            Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub description:     Option<String>,
	/// `null` clears the morning hours, leaving the field out keeps them
	#[serde(
		with = "::serde_with::rust::double_option",
		skip_serializing_if = "Option::is_none"
	)]
	pub am_opening_time: Option<Option<OpeningHours>>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub pm_opening_time: Option<OpeningHours>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub max_guest:       Option<i32>,
}

impl UpdateRestaurantRequest {
	/// Populate an existing [`Restaurant`] with the fields of this request
	pub fn apply_to(self, restaurant: &mut Restaurant) {
		if let Some(name) = self.name {
			restaurant.name = name;
		}

		if let Some(description) = self.description {
			restaurant.description = description;
		}

		if let Some(am_opening_time) = self.am_opening_time {
			restaurant.am_opening_time = am_opening_time;
		}

		if let Some(pm_opening_time) = self.pm_opening_time {
			restaurant.pm_opening_time = pm_opening_time;
		}

		if let Some(max_guest) = self.max_guest {
			restaurant.max_guest = max_guest;
		}
	}
}
