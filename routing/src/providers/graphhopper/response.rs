//! The subset of the GraphHopper response schema this crate reads. Everything else is ignored.

use serde::Deserialize;

#[derive(Deserialize)]
pub(super) struct RouteResponse {
    #[serde(default)]
    pub(super) paths: Vec<ResponsePath>,
}

#[derive(Deserialize)]
pub(super) struct ResponsePath {
    /// metres
    pub(super) distance: f64,
    /// milliseconds
    pub(super) time: f64,
    pub(super) points: ResponsePoints,
    pub(super) points_encoded_multiplier: Option<f64>,
    #[serde(default)]
    pub(super) instructions: Vec<ResponseInstruction>,
}

/// `points_encoded=true` (the default) yields a polyline string, otherwise a GeoJSON LineString
#[derive(Deserialize)]
#[serde(untagged)]
pub(super) enum ResponsePoints {
    Encoded(String),
    LineString { coordinates: Vec<Vec<f64>> },
}

#[derive(Deserialize)]
pub(super) struct ResponseInstruction {
    pub(super) text: String,
    pub(super) street_name: Option<String>,
    #[serde(default)]
    pub(super) distance: f64,
    #[serde(default)]
    pub(super) time: f64,
}

#[derive(Deserialize)]
pub(super) struct GeocodeResponse {
    #[serde(default)]
    pub(super) hits: Vec<GeocodeHit>,
}

#[derive(Deserialize)]
pub(super) struct GeocodeHit {
    pub(super) name: Option<String>,
    pub(super) state: Option<String>,
}

/// Body of non-2xx answers
#[derive(Deserialize)]
pub(super) struct ErrorResponse {
    pub(super) message: Option<String>,
}
