use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, NoContent};
use chrono::Utc;
use common::Error;
use models::{
	Entity,
	Image,
	Restaurant,
	SoftDeletable,
	Timestamped,
	Visibility,
};
use store::SharedStore;

use crate::Config;
use crate::controllers::stored_id;
use crate::schemas::image::{
	CreateImageRequest,
	ImageResponse,
	UpdateImageRequest,
};
use crate::schemas::{BuildResponse, ShowOptions};

/// The path of the show endpoint of an image
pub(crate) fn show_path(id: i32) -> String { format!("/api/image/{id}/show") }

#[instrument(skip(store, config))]
pub async fn create_image(
	State(store): State<SharedStore>,
	State(config): State<Config>,
	Path(restaurant_id): Path<i64>,
	Json(request): Json<CreateImageRequest>,
) -> Result<impl IntoResponse, Error> {
	let restaurant_id = stored_id::<Restaurant>(restaurant_id)?;

	// Images may only be added to live restaurants
	store.find::<Restaurant>(restaurant_id, Visibility::Live).await?;

	let mut image = request.to_entity(restaurant_id, Utc::now().naive_utc());

	store.persist(&mut image).await?;

	let id = image
		.id()
		.ok_or_else(|| Error::Infallible("saved image has no id".to_string()))?;
	let location = config.absolute_url(&show_path(id))?;

	let response: ImageResponse = image.build_response()?;

	Ok((
		StatusCode::CREATED,
		[(header::LOCATION, location.to_string())],
		Json(response),
	))
}

#[instrument(skip(store))]
pub async fn get_image(
	State(store): State<SharedStore>,
	Path(id): Path<i64>,
	Query(options): Query<ShowOptions>,
) -> Result<impl IntoResponse, Error> {
	let id = stored_id::<Image>(id)?;
	let image = store.find::<Image>(id, options.visibility()).await?;

	let response: ImageResponse = image.build_response()?;

	Ok((StatusCode::OK, Json(response)))
}

#[instrument(skip(store))]
pub async fn update_image(
	State(store): State<SharedStore>,
	Path(id): Path<i64>,
	Json(request): Json<UpdateImageRequest>,
) -> Result<NoContent, Error> {
	let id = stored_id::<Image>(id)?;
	let mut image = store.find::<Image>(id, Visibility::Live).await?;

	if let Some(name) = request.name {
		image.name = name;
	}

	if let Some(target_id) = request.restaurant {
		move_image(&store, &mut image, target_id).await?;
	}

	image.set_updated_at(Utc::now().naive_utc());

	store.persist(&mut image).await?;

	info!("updated image {id}");

	Ok(NoContent)
}

/// Hand an image over to another, live restaurant
async fn move_image(
	store: &SharedStore,
	image: &mut Image,
	target_id: i32,
) -> Result<(), Error> {
	if image.restaurant() == Some(target_id) {
		return Ok(());
	}

	let target = store.find::<Restaurant>(target_id, Visibility::Live).await;

	let mut target = match target {
		Ok(target) => target,
		Err(Error::NotFound(_)) => {
			return Err(Error::ValidationError(
				"'restaurant' does not reference an existing entity".to_string(),
			));
		},
		Err(e) => return Err(e),
	};

	let previous = match image.restaurant() {
		Some(previous_id) => {
			Some(
				store
					.find::<Restaurant>(previous_id, Visibility::WithDeleted)
					.await?,
			)
		},
		None => None,
	};

	target.add_image(image)?;

	if let Some(mut previous) = previous {
		previous.remove_image(image)?;
	}

	debug!("moved image to restaurant {target_id}");

	Ok(())
}

#[instrument(skip(store))]
pub async fn delete_image(
	State(store): State<SharedStore>,
	Path(id): Path<i64>,
) -> Result<NoContent, Error> {
	let id = stored_id::<Image>(id)?;
	let mut image = store.find::<Image>(id, Visibility::Live).await?;

	let now = Utc::now().naive_utc();
	image.soft_delete(now);
	image.set_updated_at(now);

	store.persist(&mut image).await?;

	info!("deleted image {id}");

	Ok(NoContent)
}
