use common::types::Coordinate;
use itertools::Itertools;

use super::error::RoutingError;
use super::response::{GeocodeHit, GeocodeResponse, ResponsePoints, RouteResponse};
use crate::polyline::{self, DEFAULT_MULTIPLIER};
use crate::route::{Instruction, Route};

const MS_PER_MINUTE: f64 = 60_000.0;
const M_PER_KM: f64 = 1_000.0;

pub(super) fn parse_route_response(resp: RouteResponse) -> Result<Route, RoutingError> {
    let path = resp.paths.into_iter().next().ok_or(RoutingError::NoPath)?;

    if !is_non_negative(path.time) {
        return Err(RoutingError::InvalidPath(format!("Invalid travel time {}", path.time)));
    }
    if !is_non_negative(path.distance) {
        return Err(RoutingError::InvalidPath(format!("Invalid distance {}", path.distance)));
    }

    let points = match path.points {
        ResponsePoints::Encoded(encoded) => {
            let multiplier = path.points_encoded_multiplier.unwrap_or(DEFAULT_MULTIPLIER);
            polyline::decode(&encoded, multiplier)?
        }
        ResponsePoints::LineString { coordinates } => coordinates
            .iter()
            .map(|position| match position.as_slice() {
                // GeoJSON positions are [lng, lat] with an optional elevation
                [lng, lat, ..] => Coordinate::new(*lat, *lng)
                    .map_err(|err| RoutingError::InvalidPath(err.to_string())),
                _ => Err(RoutingError::InvalidPath(format!("Invalid position {:?}", position))),
            })
            .collect::<Result<Vec<_>, _>>()?,
    };

    let instructions = path
        .instructions
        .into_iter()
        .map(|instruction| Instruction {
            text: instruction.text,
            street_name: instruction.street_name.filter(|name| !name.trim().is_empty()),
            distance_m: instruction.distance,
            time_ms: instruction.time,
        })
        .collect();

    Ok(Route {
        path: points,
        duration_minutes: path.time / MS_PER_MINUTE,
        distance_km: path.distance / M_PER_KM,
        instructions,
    })
}

pub(super) fn parse_geocode_response(resp: GeocodeResponse) -> Result<String, RoutingError> {
    let hit = resp.hits.first().ok_or(RoutingError::NoAddress)?;
    format_address(hit).ok_or(RoutingError::NoAddress)
}

/// "name, state" with missing or blank parts left out
fn format_address(hit: &GeocodeHit) -> Option<String> {
    let address = [&hit.name, &hit.state]
        .into_iter()
        .flatten()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .join(", ");

    (!address.is_empty()).then_some(address)
}

fn is_non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}
