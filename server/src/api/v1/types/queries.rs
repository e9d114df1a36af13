use common::types::Coordinate;
use serde::Deserialize;

#[derive(Deserialize)]
pub(crate) struct MatchQuery {
    pub(crate) origin: Coordinate,
    pub(crate) destination: Coordinate,
}

/// Plain numbers, validated by the handler so that a bad value yields a readable message
#[derive(Deserialize)]
pub(crate) struct GeocodeQuery {
    pub(crate) lat: f64,
    pub(crate) lng: f64,
}
