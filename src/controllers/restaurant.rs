use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, NoContent};
use chrono::Utc;
use common::Error;
use models::{Entity, Restaurant, SoftDeletable, Timestamped, Visibility};
use store::SharedStore;

use crate::Config;
use crate::controllers::stored_id;
use crate::schemas::restaurant::{
	CreateRestaurantRequest,
	RestaurantResponse,
	UpdateRestaurantRequest,
};
use crate::schemas::{BuildResponse, ShowOptions};

/// The path of the show endpoint of a restaurant
pub(crate) fn show_path(id: i32) -> String {
	format!("/api/restaurant/{id}/show")
}

#[instrument(skip(store, config))]
pub async fn create_restaurant(
	State(store): State<SharedStore>,
	State(config): State<Config>,
	Json(request): Json<CreateRestaurantRequest>,
) -> Result<impl IntoResponse, Error> {
	let mut restaurant = request.to_entity(Utc::now().naive_utc());

	store.persist(&mut restaurant).await?;

	let id = restaurant.id().ok_or_else(|| {
		Error::Infallible("saved restaurant has no id".to_string())
	})?;
	let location = config.absolute_url(&show_path(id))?;

	let response: RestaurantResponse = restaurant.build_response()?;

	Ok((
		StatusCode::CREATED,
		[(header::LOCATION, location.to_string())],
		Json(response),
	))
}

#[instrument(skip(store))]
pub async fn get_restaurant(
	State(store): State<SharedStore>,
	Path(id): Path<i64>,
	Query(options): Query<ShowOptions>,
) -> Result<impl IntoResponse, Error> {
	let id = stored_id::<Restaurant>(id)?;
	let restaurant =
		store.find::<Restaurant>(id, options.visibility()).await?;

	let response: RestaurantResponse = restaurant.build_response()?;

	Ok((StatusCode::OK, Json(response)))
}

#[instrument(skip(store))]
pub async fn update_restaurant(
	State(store): State<SharedStore>,
	Path(id): Path<i64>,
	Json(request): Json<UpdateRestaurantRequest>,
) -> Result<NoContent, Error> {
	let id = stored_id::<Restaurant>(id)?;
	let mut restaurant = store.find::<Restaurant>(id, Visibility::Live).await?;

	request.apply_to(&mut restaurant);
	restaurant.set_updated_at(Utc::now().naive_utc());

	store.persist(&mut restaurant).await?;

	info!("updated restaurant {id}");

	Ok(NoContent)
}

#[instrument(skip(store))]
pub async fn delete_restaurant(
	State(store): State<SharedStore>,
	Path(id): Path<i64>,
) -> Result<NoContent, Error> {
	let id = stored_id::<Restaurant>(id)?;
	let mut restaurant = store.find::<Restaurant>(id, Visibility::Live).await?;

	let now = Utc::now().naive_utc();
	restaurant.soft_delete(now);
	restaurant.set_updated_at(now);

	store.persist(&mut restaurant).await?;

	info!("deleted restaurant {id}");

	Ok(NoContent)
}
