use chrono::NaiveDateTime;

/// Logical deletion marker of an entity
///
/// A set `deleted_at` means the entity is gone for every normal read, the
/// row itself is never removed. Filtering deleted entities out is up to the
/// store, see [`Visibility`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SoftDelete {
	deleted_at: Option<NaiveDateTime>,
}

impl SoftDelete {
	#[must_use]
	pub fn new(deleted_at: Option<NaiveDateTime>) -> Self { Self { deleted_at } }

	#[must_use]
	pub fn deleted_at(&self) -> Option<NaiveDateTime> { self.deleted_at }

	pub fn set_deleted_at(&mut self, deleted_at: Option<NaiveDateTime>) {
		self.deleted_at = deleted_at;
	}

	#[must_use]
	pub fn is_deleted(&self) -> bool { self.deleted_at.is_some() }
}

/// An entity embedding a [`SoftDelete`] marker
pub trait SoftDeletable {
	fn soft_delete_marker(&self) -> &SoftDelete;

	fn soft_delete_marker_mut(&mut self) -> &mut SoftDelete;

	fn deleted_at(&self) -> Option<NaiveDateTime> {
		self.soft_delete_marker().deleted_at()
	}

	fn set_deleted_at(&mut self, deleted_at: Option<NaiveDateTime>) {
		self.soft_delete_marker_mut().set_deleted_at(deleted_at);
	}

	fn is_deleted(&self) -> bool { self.soft_delete_marker().is_deleted() }

	/// Mark this entity as deleted at the given instant
	fn soft_delete(&mut self, at: NaiveDateTime) {
		self.set_deleted_at(Some(at));
	}

	/// Bring a soft deleted entity back
	fn restore(&mut self) { self.set_deleted_at(None); }
}

/// Which entities a read is allowed to return
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
	/// Only entities that were never soft deleted
	#[default]
	Live,
	/// Soft deleted entities as well
	WithDeleted,
}

impl Visibility {
	#[must_use]
	pub fn includes_deleted(self) -> bool { self == Self::WithDeleted }

	/// Check whether an entity may be returned under this visibility
	#[must_use]
	pub fn admits<E: SoftDeletable + ?Sized>(self, entity: &E) -> bool {
		self.includes_deleted() || !entity.is_deleted()
	}
}

impl From<bool> for Visibility {
	fn from(with_deleted: bool) -> Self {
		if with_deleted { Self::WithDeleted } else { Self::Live }
	}
}
