use crate::{Entity, SoftDeletable, SoftDelete, Timestamped, Timestamps};

/// An image belonging to a [`Restaurant`](crate::Restaurant)
///
/// This is the owning side of the relation, `restaurant` is the foreign key.
/// It is only ever `None` in memory, after the image was detached with
/// [`Restaurant::remove_image`](crate::Restaurant::remove_image).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Image {
	id:          Option<i32>,
	pub name:    String,
	restaurant:  Option<i32>,
	timestamps:  Timestamps,
	soft_delete: SoftDelete,
}

impl Image {
	/// Create a new, unsaved [`Image`] for the given restaurant
	#[must_use]
	pub fn new(name: String, restaurant_id: i32) -> Self {
		Self { name, restaurant: Some(restaurant_id), ..Default::default() }
	}

	/// Rebuild an [`Image`] from its stored state
	#[must_use]
	pub fn from_stored(
		id: i32,
		name: String,
		restaurant_id: i32,
		timestamps: Timestamps,
		soft_delete: SoftDelete,
	) -> Self {
		Self {
			id: Some(id),
			name,
			restaurant: Some(restaurant_id),
			timestamps,
			soft_delete,
		}
	}

	/// The id of the owning restaurant
	#[must_use]
	pub fn restaurant(&self) -> Option<i32> { self.restaurant }

	pub fn set_restaurant(&mut self, restaurant_id: Option<i32>) {
		self.restaurant = restaurant_id;
	}
}

impl Entity for Image {
	const KIND: &'static str = "image";

	fn id(&self) -> Option<i32> { self.id }

	fn assign_id(&mut self, id: i32) {
		match self.id {
			None => self.id = Some(id),
			Some(current) if current != id => {
				warn!("ignoring id {id} for image {current}");
			},
			Some(_) => {},
		}
	}
}

impl Timestamped for Image {
	fn timestamps(&self) -> &Timestamps { &self.timestamps }

	fn timestamps_mut(&mut self) -> &mut Timestamps { &mut self.timestamps }
}

impl SoftDeletable for Image {
	fn soft_delete_marker(&self) -> &SoftDelete { &self.soft_delete }

	fn soft_delete_marker_mut(&mut self) -> &mut SoftDelete {
		&mut self.soft_delete
	}
}
