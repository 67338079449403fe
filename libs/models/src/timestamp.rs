use chrono::NaiveDateTime;

/// Creation and last update instants of an entity
///
/// This is plain storage, nothing in here reads the clock. Whoever creates
/// an entity sets `created_at` once before it is first saved, and every
/// later saved mutation sets `updated_at`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Timestamps {
	created_at: Option<NaiveDateTime>,
	updated_at: Option<NaiveDateTime>,
}

impl Timestamps {
	#[must_use]
	pub fn new(
		created_at: Option<NaiveDateTime>,
		updated_at: Option<NaiveDateTime>,
	) -> Self {
		Self { created_at, updated_at }
	}

	#[must_use]
	pub fn created_at(&self) -> Option<NaiveDateTime> { self.created_at }

	pub fn set_created_at(&mut self, created_at: NaiveDateTime) {
		self.created_at = Some(created_at);
	}

	#[must_use]
	pub fn updated_at(&self) -> Option<NaiveDateTime> { self.updated_at }

	pub fn set_updated_at(&mut self, updated_at: NaiveDateTime) {
		self.updated_at = Some(updated_at);
	}
}

/// An entity embedding [`Timestamps`]
pub trait Timestamped {
	fn timestamps(&self) -> &Timestamps;

	fn timestamps_mut(&mut self) -> &mut Timestamps;

	fn created_at(&self) -> Option<NaiveDateTime> {
		self.timestamps().created_at()
	}

	fn set_created_at(&mut self, created_at: NaiveDateTime) {
		self.timestamps_mut().set_created_at(created_at);
	}

	fn updated_at(&self) -> Option<NaiveDateTime> {
		self.timestamps().updated_at()
	}

	fn set_updated_at(&mut self, updated_at: NaiveDateTime) {
		self.timestamps_mut().set_updated_at(updated_at);
	}
}
