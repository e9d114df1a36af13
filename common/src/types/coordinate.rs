use crate::types::errors::CoordinateError;
use geo::Point;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// A position in degrees (WGS84).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SerializedCoordinate")]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

/// Unchecked representation used while deserializing
#[derive(Deserialize)]
struct SerializedCoordinate {
    lat: f64,
    lng: f64,
}

impl TryFrom<SerializedCoordinate> for Coordinate {
    type Error = CoordinateError;

    fn try_from(value: SerializedCoordinate) -> Result<Self, Self::Error> {
        Coordinate::new(value.lat, value.lng)
    }
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Result<Self, CoordinateError> {
        let valid = lat.is_finite()
            && lng.is_finite()
            && (-90.0..=90.0).contains(&lat)
            && (-180.0..=180.0).contains(&lng);

        if valid {
            Ok(Self { lat, lng })
        } else {
            Err(CoordinateError::OutOfRange { lat, lng })
        }
    }
}

// Routing and geocoding services expect "lat,lng"
impl Display for Coordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

impl FromStr for Coordinate {
    type Err = CoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let format_error = || CoordinateError::Format(s.to_string());

        let (lat, lng) = s.split_once(',').ok_or_else(format_error)?;
        let lat = f64::from_str(lat.trim()).map_err(|_| format_error())?;
        let lng = f64::from_str(lng.trim()).map_err(|_| format_error())?;

        Coordinate::new(lat, lng)
    }
}

impl From<Coordinate> for Point<f64> {
    fn from(value: Coordinate) -> Self {
        Point::new(value.lng, value.lat)
    }
}
