pub mod config;
pub mod coordinate;
pub mod errors;
pub mod trip;

pub use coordinate::Coordinate;
pub use trip::{Catalog, Trip, TripId};
