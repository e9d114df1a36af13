use common::types::Coordinate;
use serde::Serialize;

/// A path between two points as reported by a routing service
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    pub path: Vec<Coordinate>,
    pub duration_minutes: f64,
    pub distance_km: f64,
    pub instructions: Vec<Instruction>,
}

/// One turn-by-turn step of a route
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Instruction {
    pub text: String,
    pub street_name: Option<String>,
    pub distance_m: f64,
    pub time_ms: f64,
}

