//! Matches a customer request against the trip catalog.
//!
//! For every trip two legs are routed: customer origin -> trip start (pickup) and
//! trip end -> customer destination (dropoff). The detour cost of a trip is the sum of both legs.
//! A trip with a leg that cannot be routed is left out entirely, it is never ranked with a
//! partial cost.

use crate::candidate::Candidate;
use crate::providers::RouteProvider;
use crate::proximity::ProximityChecker;
use crate::session::MatchOutcome;
use common::types::config::matching::MatchingConfig;
use common::types::{Catalog, Coordinate, Trip};
use futures::{future, FutureExt, StreamExt};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchRequest {
    pub origin: Coordinate,
    pub destination: Coordinate,
}

pub struct TripRanker {
    provider: Arc<dyn RouteProvider>,
    proximity: ProximityChecker,
    max_concurrent_trips: usize,
}

impl TripRanker {
    pub fn new(provider: Arc<dyn RouteProvider>, config: &MatchingConfig) -> Self {
        Self {
            provider,
            proximity: ProximityChecker::from(&config.proximity),
            max_concurrent_trips: config.max_concurrent_trips.max(1),
        }
    }

    pub fn provider(&self) -> &Arc<dyn RouteProvider> {
        &self.provider
    }

    /// All trips that can be reached, cheapest detour first. Trips with the same cost keep their
    /// catalog order.
    pub async fn rank(&self, request: MatchRequest, catalog: &Catalog) -> Vec<Candidate> {
        debug!(
            target: "matching",
            "Ranking {} trips for {} -> {}",
            catalog.len(), request.origin, request.destination
        );

        // Must stay `Send`: axum handlers await the ranking
        let evaluations: Vec<_> = catalog
            .trips()
            .iter()
            .map(|trip| self.evaluate(request, trip).boxed())
            .collect();

        // `buffered` keeps catalog order, which the stable sort below relies on for ties
        let mut candidates: Vec<Candidate> = futures::stream::iter(evaluations)
            .buffered(self.max_concurrent_trips)
            .filter_map(future::ready)
            .collect()
            .await;

        candidates.sort_by(|a, b| a.total_time.total_cmp(&b.total_time));

        info!(
            target: "matching",
            "{} of {} trips can be matched to {} -> {}",
            candidates.len(), catalog.len(), request.origin, request.destination
        );
        candidates
    }

    /// Rank the catalog and resolve the addresses of both customer points at the same time.
    pub async fn submit(&self, request: MatchRequest, catalog: &Catalog) -> MatchOutcome {
        let (candidates, origin_address, destination_address) = futures::join!(
            self.rank(request, catalog),
            self.provider.reverse_geocode(request.origin),
            self.provider.reverse_geocode(request.destination),
        );

        MatchOutcome { request, origin_address, destination_address, candidates }
    }

    async fn evaluate(&self, request: MatchRequest, trip: &Trip) -> Option<Candidate> {
        let (pickup, dropoff) = futures::join!(
            self.provider.find_route(request.origin, trip.start),
            self.provider.find_route(trip.end, request.destination),
        );

        let (Some(pickup), Some(dropoff)) = (pickup, dropoff) else {
            debug!(target: "matching", "Skipping trip {}, one of its legs has no route", trip.id);
            return None;
        };

        let total_time = pickup.duration_minutes + dropoff.duration_minutes;
        let total_distance = pickup.distance_km + dropoff.distance_km;

        let on_route = self.proximity.is_on_route(request.origin, &pickup.path)
            && self.proximity.is_on_route(request.destination, &dropoff.path);
        if on_route {
            // On-route matches are costed exactly like any other detour
            debug!(target: "matching", "Request lies on both legs of trip {}", trip.id);
        }

        Some(Candidate {
            trip: trip.clone(),
            pickup,
            dropoff,
            total_time,
            total_distance,
            on_route,
        })
    }
}
