use serde::{Deserialize, Serialize};

/// Roughly 100m at the equator; shrinks towards the poles along the longitude axis
pub const DEFAULT_PROXIMITY_THRESHOLD_DEGREES: f64 = 0.001;
pub const DEFAULT_MAX_CONCURRENT_TRIPS: usize = 16;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct MatchingConfig {
    #[serde(default)]
    pub proximity: ProximityConfig,
    /// Upper bound for trips whose legs are looked up at the same time
    #[serde(default = "default_max_concurrent_trips")]
    pub max_concurrent_trips: usize,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            proximity: ProximityConfig::default(),
            max_concurrent_trips: DEFAULT_MAX_CONCURRENT_TRIPS,
        }
    }
}

fn default_max_concurrent_trips() -> usize {
    DEFAULT_MAX_CONCURRENT_TRIPS
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ProximityConfig {
    #[serde(default)]
    pub mode: ProximityMode,
    #[serde(default = "default_threshold")]
    pub threshold_degrees: f64,
}

impl Default for ProximityConfig {
    fn default() -> Self {
        Self {
            mode: ProximityMode::default(),
            threshold_degrees: DEFAULT_PROXIMITY_THRESHOLD_DEGREES,
        }
    }
}

fn default_threshold() -> f64 {
    DEFAULT_PROXIMITY_THRESHOLD_DEGREES
}

/// How "close to a route" is measured. Switching modes changes which requests count as on-route.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProximityMode {
    /// Distance to the nearest polyline vertex
    #[default]
    Vertex,
    /// Distance to the nearest polyline segment
    Segment,
}
