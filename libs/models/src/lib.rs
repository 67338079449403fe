//! Restaurant and image entities together with the lifecycle behaviours
//! they share

#[macro_use]
extern crate tracing;

mod image;
mod opening_time;
mod restaurant;
mod soft_delete;
mod timestamp;

pub use image::*;
pub use opening_time::*;
pub use restaurant::*;
pub use soft_delete::*;
pub use timestamp::*;

/// A record that a store can persist and look up by id
///
/// Every entity carries both lifecycle behaviours, which lets a store
/// enforce the creation timestamp and soft delete contracts generically.
pub trait Entity:
	Timestamped + SoftDeletable + Clone + Send + Sync + 'static
{
	/// Human readable entity kind, used in errors and logs
	const KIND: &'static str;

	/// The store assigned id, if this entity was ever saved
	fn id(&self) -> Option<i32>;

	/// Assign the store generated id
	///
	/// Ids are immutable once assigned, later calls are ignored.
	fn assign_id(&mut self, id: i32);
}
