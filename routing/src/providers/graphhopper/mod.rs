//! Client for the GraphHopper routing and geocoding APIs.
//!
//! Only the first path of a routing answer and the first hit of a geocoding answer are used.
//! Response parsing is kept apart from the HTTP plumbing so it can be tested without a server.

mod client;
mod error;
mod parser;
mod response;

pub use client::GraphHopperClient;
pub use error::RoutingError;
