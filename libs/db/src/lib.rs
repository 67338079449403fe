//! Diesel table definitions shared by the store implementations

mod schema;

pub use schema::*;
