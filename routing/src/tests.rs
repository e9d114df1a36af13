use crate::providers::fixed::FixedRouteProvider;
use crate::ranking::MatchRequest;
use crate::route::{Instruction, Route};
use chrono::NaiveTime;
use common::types::{Catalog, Coordinate, Trip, TripId};

pub(crate) fn coordinate(lat: f64, lng: f64) -> Coordinate {
    Coordinate::new(lat, lng).unwrap()
}

/// A route going straight from `from` to `to` with a single instruction
pub(crate) fn straight_route(from: Coordinate, to: Coordinate, minutes: f64, km: f64) -> Route {
    Route {
        path: vec![from, to],
        duration_minutes: minutes,
        distance_km: km,
        instructions: vec![Instruction {
            text: "Continue".to_string(),
            street_name: None,
            distance_m: km * 1_000.0,
            time_ms: minutes * 60_000.0,
        }],
    }
}

pub(crate) fn trip(id: &str, start: Coordinate, end: Coordinate) -> Trip {
    Trip {
        id: TripId(id.to_string()),
        name: format!("Trip {id}"),
        start,
        end,
        departure: NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
    }
}

/// A customer travelling from the edge of Ho Chi Minh City to Can Tho
pub(crate) fn request() -> MatchRequest {
    MatchRequest {
        origin: coordinate(10.71, 106.59),
        destination: coordinate(9.2, 105.2),
    }
}

/// Case 1 is the most simple case:
/// - 1 trip from (10.7, 106.6) to (9.18, 105.15)
/// - pickup leg takes 12 minutes (2 km), dropoff leg 35 minutes (30 km)
pub(crate) mod case_1 {
    use super::*;

    pub(crate) fn start() -> Coordinate {
        coordinate(10.7, 106.6)
    }

    pub(crate) fn end() -> Coordinate {
        coordinate(9.18, 105.15)
    }

    pub(crate) fn catalog() -> Catalog {
        Catalog::from_trips(vec![trip("SGN-CTO", start(), end())]).unwrap()
    }

    pub(crate) fn request() -> MatchRequest {
        super::request()
    }

    fn pickup() -> Route {
        straight_route(request().origin, start(), 12.0, 2.0)
    }

    fn dropoff() -> Route {
        straight_route(end(), request().destination, 35.0, 30.0)
    }

    pub(crate) fn provider() -> FixedRouteProvider {
        FixedRouteProvider::new()
            .with_route(request().origin, start(), pickup())
            .with_route(end(), request().destination, dropoff())
    }

    pub(crate) fn provider_without_pickup() -> FixedRouteProvider {
        FixedRouteProvider::new().with_route(end(), request().destination, dropoff())
    }

    pub(crate) fn provider_without_dropoff() -> FixedRouteProvider {
        FixedRouteProvider::new().with_route(request().origin, start(), pickup())
    }
}

/// Case 2 has
/// - 2 trips, both reachable
/// - "trip40" costs 20 + 20 minutes, "trip25" costs 10 + 15 minutes
/// trip40 comes first in the catalog, but trip25 must be ranked first.
pub(crate) mod case_2 {
    use super::*;

    pub(crate) fn catalog() -> Catalog {
        Catalog::from_trips(vec![
            trip("trip40", coordinate(10.8, 106.7), coordinate(9.3, 105.3)),
            trip("trip25", coordinate(10.75, 106.65), coordinate(9.25, 105.25)),
        ])
        .unwrap()
    }

    pub(crate) fn request() -> MatchRequest {
        super::request()
    }

    pub(crate) fn provider() -> FixedRouteProvider {
        let request = request();
        let legs = [(0, 20.0, 20.0), (1, 10.0, 15.0)];

        legs.into_iter().fold(FixedRouteProvider::new(), |provider, (idx, pickup, dropoff)| {
            let trip = catalog().trips()[idx].clone();
            provider
                .with_route(request.origin, trip.start, straight_route(request.origin, trip.start, pickup, pickup))
                .with_route(trip.end, request.destination, straight_route(trip.end, request.destination, dropoff, dropoff))
        })
    }
}
