use std::fmt;
use std::fmt::Formatter;
use crate::types::TripId;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum CoordinateError {
    Format(String),
    OutOfRange { lat: f64, lng: f64 },
}

impl fmt::Display for CoordinateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CoordinateError::Format(input) => {
                write!(f, "Cannot read coordinate '{}'. Example of valid format: 10.7769,106.7009", input)
            }
            CoordinateError::OutOfRange { lat, lng } => {
                write!(f, "Coordinate ({}, {}) is outside of the valid latitude/longitude range", lat, lng)
            }
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum CatalogError {
    Empty,
    DuplicateTripId(TripId),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Empty => write!(f, "The trip catalog does not contain any trips"),
            CatalogError::DuplicateTripId(id) => write!(f, "Trip ID {} is used more than once", id),
        }
    }
}
