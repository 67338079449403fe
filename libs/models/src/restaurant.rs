use std::collections::BTreeSet;

use common::Error;

use crate::{
	Entity,
	Image,
	OpeningHours,
	SoftDeletable,
	SoftDelete,
	Timestamped,
	Timestamps,
};

/// A restaurant and the ids of the images it owns
///
/// `images` is the inverse side of the image relation, the authoritative
/// link is [`Image::restaurant`]. Stores fill it in when loading a
/// restaurant and ignore it when saving one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Restaurant {
	id:                  Option<i32>,
	pub name:            String,
	pub description:     String,
	pub am_opening_time: Option<OpeningHours>,
	pub pm_opening_time: OpeningHours,
	pub max_guest:       i32,
	images:              BTreeSet<i32>,
	timestamps:          Timestamps,
	soft_delete:         SoftDelete,
}

impl Restaurant {
	/// Create a new, unsaved [`Restaurant`]
	#[must_use]
	pub fn new(name: String, description: String) -> Self {
		Self { name, description, ..Default::default() }
	}

	/// Rebuild a [`Restaurant`] from its stored state
	#[must_use]
	#[allow(clippy::too_many_arguments)]
	pub fn from_stored(
		id: i32,
		name: String,
		description: String,
		am_opening_time: Option<OpeningHours>,
		pm_opening_time: OpeningHours,
		max_guest: i32,
		timestamps: Timestamps,
		soft_delete: SoftDelete,
	) -> Self {
		Self {
			id: Some(id),
			name,
			description,
			am_opening_time,
			pm_opening_time,
			max_guest,
			images: BTreeSet::new(),
			timestamps,
			soft_delete,
		}
	}

	/// The ids of the images owned by this restaurant
	#[must_use]
	pub fn images(&self) -> &BTreeSet<i32> { &self.images }

	/// Replace the image view with the ids a store resolved for this
	/// restaurant
	pub fn load_images<I: IntoIterator<Item = i32>>(&mut self, image_ids: I) {
		self.images = image_ids.into_iter().collect();
	}

	/// Add an image to this restaurant and point it back here
	///
	/// Adding an image that is already present changes nothing.
	///
	/// # Errors
	/// Errors if either entity was never saved
	pub fn add_image(&mut self, image: &mut Image) -> Result<(), Error> {
		let (restaurant_id, image_id) = self.association_ids(image)?;

		if self.images.insert(image_id) {
			image.set_restaurant(Some(restaurant_id));
		}

		Ok(())
	}

	/// Remove an image from this restaurant
	///
	/// The back reference of the image is only cleared when it still points
	/// to this restaurant, an image that was moved elsewhere keeps its new
	/// owner.
	///
	/// # Errors
	/// Errors if either entity was never saved
	pub fn remove_image(&mut self, image: &mut Image) -> Result<(), Error> {
		let (restaurant_id, image_id) = self.association_ids(image)?;

		if self.images.remove(&image_id)
			&& image.restaurant() == Some(restaurant_id)
		{
			image.set_restaurant(None);
		}

		Ok(())
	}

	fn association_ids(&self, image: &Image) -> Result<(i32, i32), Error> {
		let Some(restaurant_id) = self.id else {
			return Err(Error::Infallible(
				"restaurant must be saved before it owns images".to_string(),
			));
		};

		let Some(image_id) = image.id() else {
			return Err(Error::Infallible(
				"image must be saved before it can be associated".to_string(),
			));
		};

		Ok((restaurant_id, image_id))
	}
}

impl Entity for Restaurant {
	const KIND: &'static str = "restaurant";

	fn id(&self) -> Option<i32> { self.id }

	fn assign_id(&mut self, id: i32) {
		match self.id {
			None => self.id = Some(id),
			Some(current) if current != id => {
				warn!("ignoring id {id} for restaurant {current}");
			},
			Some(_) => {},
		}
	}
}

impl Timestamped for Restaurant {
	fn timestamps(&self) -> &Timestamps { &self.timestamps }

	fn timestamps_mut(&mut self) -> &mut Timestamps { &mut self.timestamps }
}

impl SoftDeletable for Restaurant {
	fn soft_delete_marker(&self) -> &SoftDelete { &self.soft_delete }

	fn soft_delete_marker_mut(&mut self) -> &mut SoftDelete {
		&mut self.soft_delete
	}
}
