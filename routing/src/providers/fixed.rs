use crate::providers::{RouteProvider, UNKNOWN_ADDRESS};
use crate::route::Route;
use async_trait::async_trait;
use common::types::Coordinate;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Don't call any service, instead answer from a hard-coded lookup table.
/// Useful for testing or when routes were calculated elsewhere. Routes are directional, so
/// a -> b may differ from b -> a.
#[derive(Default)]
pub struct FixedRouteProvider {
    routes: Vec<(Coordinate, Coordinate, Route)>,
    addresses: Vec<(Coordinate, String)>,
    latency: Option<Duration>,
    lookups: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl FixedRouteProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_route(mut self, origin: Coordinate, destination: Coordinate, route: Route) -> Self {
        self.routes.push((origin, destination, route));
        self
    }

    pub fn with_address(mut self, coordinate: Coordinate, address: &str) -> Self {
        self.addresses.push((coordinate, address.to_string()));
        self
    }

    /// Delay every route lookup, simulating a remote service
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Number of route lookups answered so far
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    /// Highest number of route lookups that were running at the same time
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RouteProvider for FixedRouteProvider {
    async fn find_route(&self, origin: Coordinate, destination: Coordinate) -> Option<Route> {
        let running = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(running, Ordering::SeqCst);

        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        self.lookups.fetch_add(1, Ordering::SeqCst);

        self.routes
            .iter()
            .find(|(from, to, _)| *from == origin && *to == destination)
            .map(|(_, _, route)| route.clone())
    }

    async fn reverse_geocode(&self, coordinate: Coordinate) -> String {
        self.addresses
            .iter()
            .find(|(known, _)| *known == coordinate)
            .map(|(_, address)| address.clone())
            .unwrap_or_else(|| UNKNOWN_ADDRESS.to_string())
    }
}
