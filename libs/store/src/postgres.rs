use async_trait::async_trait;
use chrono::NaiveDateTime;
use common::{DbPool, Error};
use db::{image, restaurant};
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::sql_types::Bool;
use models::{
	Entity,
	Image,
	OpeningHours,
	Restaurant,
	SoftDeletable,
	SoftDelete,
	Timestamped,
	Timestamps,
	Visibility,
};

use crate::{Repository, Store, creation_instant, owning_restaurant};

/// A [`Store`] backed by a `PostgreSQL` database
#[derive(Clone)]
pub struct PgStore {
	pool: DbPool,
}

impl PgStore {
	#[must_use]
	pub fn new(pool: DbPool) -> Self { Self { pool } }
}

#[derive(Clone, Debug, Queryable, Selectable)]
#[diesel(table_name = restaurant)]
#[diesel(check_for_backend(Pg))]
struct RestaurantRow {
	id:              i32,
	name:            String,
	description:     String,
	am_opening_time: Option<OpeningHours>,
	pm_opening_time: OpeningHours,
	max_guest:       i32,
	created_at:      NaiveDateTime,
	updated_at:      Option<NaiveDateTime>,
	deleted_at:      Option<NaiveDateTime>,
}

impl From<RestaurantRow> for Restaurant {
	fn from(row: RestaurantRow) -> Self {
		Restaurant::from_stored(
			row.id,
			row.name,
			row.description,
			row.am_opening_time,
			row.pm_opening_time,
			row.max_guest,
			Timestamps::new(Some(row.created_at), row.updated_at),
			SoftDelete::new(row.deleted_at),
		)
	}
}

/// The full writable state of a restaurant
#[derive(AsChangeset, Debug, Insertable)]
#[diesel(table_name = restaurant)]
#[diesel(treat_none_as_null = true)]
struct RestaurantState {
	name:            String,
	description:     String,
	am_opening_time: Option<OpeningHours>,
	pm_opening_time: OpeningHours,
	max_guest:       i32,
	created_at:      NaiveDateTime,
	updated_at:      Option<NaiveDateTime>,
	deleted_at:      Option<NaiveDateTime>,
}

impl RestaurantState {
	fn of(entity: &Restaurant) -> Result<Self, Error> {
		Ok(Self {
			name:            entity.name.clone(),
			description:     entity.description.clone(),
			am_opening_time: entity.am_opening_time.clone(),
			pm_opening_time: entity.pm_opening_time.clone(),
			max_guest:       entity.max_guest,
			created_at:      creation_instant(entity)?,
			updated_at:      entity.updated_at(),
			deleted_at:      entity.deleted_at(),
		})
	}
}

#[derive(Clone, Debug, Queryable, Selectable)]
#[diesel(table_name = image)]
#[diesel(check_for_backend(Pg))]
struct ImageRow {
	id:            i32,
	name:          String,
	restaurant_id: i32,
	created_at:    NaiveDateTime,
	updated_at:    Option<NaiveDateTime>,
	deleted_at:    Option<NaiveDateTime>,
}

impl From<ImageRow> for Image {
	fn from(row: ImageRow) -> Self {
		Image::from_stored(
			row.id,
			row.name,
			row.restaurant_id,
			Timestamps::new(Some(row.created_at), row.updated_at),
			SoftDelete::new(row.deleted_at),
		)
	}
}

/// The full writable state of an image
#[derive(AsChangeset, Debug, Insertable)]
#[diesel(table_name = image)]
#[diesel(treat_none_as_null = true)]
struct ImageState {
	name:          String,
	restaurant_id: i32,
	created_at:    NaiveDateTime,
	updated_at:    Option<NaiveDateTime>,
	deleted_at:    Option<NaiveDateTime>,
}

impl ImageState {
	fn of(entity: &Image) -> Result<Self, Error> {
		Ok(Self {
			name:          entity.name.clone(),
			restaurant_id: owning_restaurant(entity)?,
			created_at:    creation_instant(entity)?,
			updated_at:    entity.updated_at(),
			deleted_at:    entity.deleted_at(),
		})
	}
}

#[async_trait]
impl Repository<Restaurant> for PgStore {
	#[instrument(skip_all)]
	async fn save(&self, entity: &mut Restaurant) -> Result<(), Error> {
		let state = RestaurantState::of(entity)?;
		let known_id = entity.id();

		let conn = self.pool.get().await?;

		let saved_id = conn
			.interact(move |conn| {
				use self::restaurant::dsl::*;

				match known_id {
					Some(r_id) => {
						diesel::update(restaurant.find(r_id))
							.set(&state)
							.returning(id)
							.get_result::<i32>(conn)
					},
					None => {
						diesel::insert_into(restaurant)
							.values(&state)
							.returning(id)
							.get_result::<i32>(conn)
					},
				}
			})
			.await??;

		entity.assign_id(saved_id);

		debug!("saved restaurant {saved_id}");

		Ok(())
	}

	#[instrument(skip(self))]
	async fn find_by_id(
		&self,
		r_id: i32,
		visibility: Visibility,
	) -> Result<Restaurant, Error> {
		let with_deleted = visibility.includes_deleted();

		let conn = self.pool.get().await?;

		let found = conn
			.interact(move |conn| {
				let row = restaurant::table
					.find(r_id)
					.filter(
						with_deleted
							.into_sql::<Bool>()
							.or(restaurant::deleted_at.is_null()),
					)
					.select(RestaurantRow::as_select())
					.get_result(conn)
					.optional()?;

				let Some(row) = row else {
					return Ok(None);
				};

				let image_ids = image::table
					.filter(image::restaurant_id.eq(r_id))
					.filter(image::deleted_at.is_null())
					.order(image::id.asc())
					.select(image::id)
					.load::<i32>(conn)?;

				Ok::<_, diesel::result::Error>(Some((row, image_ids)))
			})
			.await??;

		let Some((row, image_ids)) = found else {
			return Err(Error::not_found(Restaurant::KIND, r_id));
		};

		let mut restaurant = Restaurant::from(row);
		restaurant.load_images(image_ids);

		Ok(restaurant)
	}
}

#[async_trait]
impl Repository<Image> for PgStore {
	#[instrument(skip_all)]
	async fn save(&self, entity: &mut Image) -> Result<(), Error> {
		let state = ImageState::of(entity)?;
		let known_id = entity.id();

		let conn = self.pool.get().await?;

		let saved_id = conn
			.interact(move |conn| {
				use self::image::dsl::*;

				match known_id {
					Some(i_id) => {
						diesel::update(image.find(i_id))
							.set(&state)
							.returning(id)
							.get_result::<i32>(conn)
					},
					None => {
						diesel::insert_into(image)
							.values(&state)
							.returning(id)
							.get_result::<i32>(conn)
					},
				}
			})
			.await??;

		entity.assign_id(saved_id);

		debug!("saved image {saved_id}");

		Ok(())
	}

	#[instrument(skip(self))]
	async fn find_by_id(
		&self,
		i_id: i32,
		visibility: Visibility,
	) -> Result<Image, Error> {
		let with_deleted = visibility.includes_deleted();

		let conn = self.pool.get().await?;

		let row = conn
			.interact(move |conn| {
				use self::image::dsl::*;

				image
					.find(i_id)
					.filter(with_deleted.into_sql::<Bool>().or(deleted_at.is_null()))
					.select(ImageRow::as_select())
					.get_result(conn)
					.optional()
			})
			.await??;

		row.map(Image::from).ok_or_else(|| Error::not_found(Image::KIND, i_id))
	}
}

#[async_trait]
impl Store for PgStore {
	#[instrument(skip(self))]
	async fn ping(&self) -> Result<(), Error> {
		let conn = self.pool.get().await?;

		conn.interact(|conn| diesel::sql_query("SELECT 1").execute(conn))
			.await??;

		Ok(())
	}
}
