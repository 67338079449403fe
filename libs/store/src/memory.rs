use std::collections::BTreeMap;

use async_trait::async_trait;
use common::Error;
use models::{Entity, Image, Restaurant, SoftDeletable, Visibility};
use parking_lot::RwLock;

use crate::{Repository, Store, creation_instant, owning_restaurant};

/// A [`Store`] keeping every entity in process memory
///
/// Writes take a single lock, so concurrent saves of the same entity simply
/// overwrite each other.
#[derive(Debug, Default)]
pub struct MemoryStore {
	tables: RwLock<Tables>,
}

#[derive(Debug, Default)]
struct Tables {
	restaurants:        BTreeMap<i32, Restaurant>,
	images:             BTreeMap<i32, Image>,
	last_restaurant_id: i32,
	last_image_id:      i32,
}

impl MemoryStore {
	#[must_use]
	pub fn new() -> Self { Self::default() }
}

impl Tables {
	/// The ids of all live images pointing at the given restaurant
	fn live_images_of(&self, restaurant_id: i32) -> Vec<i32> {
		self.images
			.iter()
			.filter(|(_, image)| {
				image.restaurant() == Some(restaurant_id) && !image.is_deleted()
			})
			.map(|(id, _)| *id)
			.collect()
	}
}

#[async_trait]
impl Repository<Restaurant> for MemoryStore {
	#[instrument(skip_all)]
	async fn save(&self, entity: &mut Restaurant) -> Result<(), Error> {
		creation_instant(entity)?;

		let mut tables = self.tables.write();

		let id = match entity.id() {
			Some(id) if tables.restaurants.contains_key(&id) => id,
			Some(id) => return Err(Error::not_found(Restaurant::KIND, id)),
			None => {
				tables.last_restaurant_id += 1;
				tables.last_restaurant_id
			},
		};

		entity.assign_id(id);

		// The image view is derived from the images table on every read
		let mut row = entity.clone();
		row.load_images([]);

		tables.restaurants.insert(id, row);

		debug!("saved restaurant {id}");

		Ok(())
	}

	#[instrument(skip(self))]
	async fn find_by_id(
		&self,
		id: i32,
		visibility: Visibility,
	) -> Result<Restaurant, Error> {
		let tables = self.tables.read();

		let mut restaurant = tables
			.restaurants
			.get(&id)
			.filter(|r| visibility.admits(*r))
			.cloned()
			.ok_or_else(|| Error::not_found(Restaurant::KIND, id))?;

		restaurant.load_images(tables.live_images_of(id));

		Ok(restaurant)
	}
}

#[async_trait]
impl Repository<Image> for MemoryStore {
	#[instrument(skip_all)]
	async fn save(&self, entity: &mut Image) -> Result<(), Error> {
		creation_instant(entity)?;
		let restaurant_id = owning_restaurant(entity)?;

		let mut tables = self.tables.write();

		if !tables.restaurants.contains_key(&restaurant_id) {
			return Err(Error::ValidationError(
				"'restaurant' does not reference an existing entity".to_string(),
			));
		}

		let id = match entity.id() {
			Some(id) if tables.images.contains_key(&id) => id,
			Some(id) => return Err(Error::not_found(Image::KIND, id)),
			None => {
				tables.last_image_id += 1;
				tables.last_image_id
			},
		};

		entity.assign_id(id);
		tables.images.insert(id, entity.clone());

		debug!("saved image {id}");

		Ok(())
	}

	#[instrument(skip(self))]
	async fn find_by_id(
		&self,
		id: i32,
		visibility: Visibility,
	) -> Result<Image, Error> {
		self.tables
			.read()
			.images
			.get(&id)
			.filter(|i| visibility.admits(*i))
			.cloned()
			.ok_or_else(|| Error::not_found(Image::KIND, id))
	}
}

#[async_trait]
impl Store for MemoryStore {
	async fn ping(&self) -> Result<(), Error> { Ok(()) }
}
