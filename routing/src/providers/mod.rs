pub mod fixed;
pub mod graphhopper;

use crate::route::Route;
use async_trait::async_trait;
use common::types::Coordinate;

/// What `reverse_geocode` answers when a coordinate cannot be turned into an address
pub const UNKNOWN_ADDRESS: &str = "unknown";

/// A routing and geocoding backend. Lookups never fail outward: a failed lookup is reported as
/// "no route" or as [`UNKNOWN_ADDRESS`], so one bad request cannot abort a whole ranking.
#[async_trait]
pub trait RouteProvider: Send + Sync {
    /// The first path the backend reports from `origin` to `destination`, if there is one.
    async fn find_route(&self, origin: Coordinate, destination: Coordinate) -> Option<Route>;

    /// A "street, state" style description of `coordinate`.
    async fn reverse_geocode(&self, coordinate: Coordinate) -> String;
}
