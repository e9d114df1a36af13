//! Decoder for the encoded polyline format used by GraphHopper (and Google Maps).
//!
//! Every value is the delta to the previous point, multiplied by the precision, zig-zag encoded
//! and split into 5-bit chunks offset by 63 so that the result is printable ASCII.

use common::types::errors::CoordinateError;
use common::types::Coordinate;
use std::fmt;
use std::fmt::Display;

/// GraphHopper encodes with 5 decimal places unless `points_encoded_multiplier` says otherwise
pub const DEFAULT_MULTIPLIER: f64 = 1e5;

const CHUNK_OFFSET: u8 = 63;
const CONTINUATION_BIT: i64 = 0x20;
const CHUNK_MASK: i64 = 0x1f;
// 64 bit accumulator holds at most 12 chunks of 5 bits
const MAX_SHIFT: u32 = 60;

pub fn decode(encoded: &str, multiplier: f64) -> Result<Vec<Coordinate>, PolylineError> {
    if !(multiplier.is_finite() && multiplier > 0.0) {
        return Err(PolylineError::InvalidMultiplier(multiplier));
    }

    let bytes = encoded.as_bytes();
    let mut index = 0;
    let mut lat = 0i64;
    let mut lng = 0i64;
    let mut coordinates = Vec::with_capacity(bytes.len() / 4);

    while index < bytes.len() {
        let lat_delta = next_value(bytes, &mut index)?;
        let lng_delta = next_value(bytes, &mut index)?;
        lat = lat.checked_add(lat_delta).ok_or(PolylineError::Overflow { position: index })?;
        lng = lng.checked_add(lng_delta).ok_or(PolylineError::Overflow { position: index })?;

        let coordinate = Coordinate::new(lat as f64 / multiplier, lng as f64 / multiplier)
            .map_err(PolylineError::Coordinate)?;
        coordinates.push(coordinate);
    }

    Ok(coordinates)
}

fn next_value(bytes: &[u8], index: &mut usize) -> Result<i64, PolylineError> {
    let mut result = 0i64;
    let mut shift = 0u32;

    loop {
        let Some(&byte) = bytes.get(*index) else {
            return Err(PolylineError::Truncated);
        };
        if !(CHUNK_OFFSET..=126).contains(&byte) {
            return Err(PolylineError::InvalidCharacter { position: *index, character: byte as char });
        }
        if shift > MAX_SHIFT {
            return Err(PolylineError::Overflow { position: *index });
        }
        *index += 1;

        let chunk = (byte - CHUNK_OFFSET) as i64;
        result |= (chunk & CHUNK_MASK) << shift;
        shift += 5;

        if chunk < CONTINUATION_BIT {
            break;
        }
    }

    // Undo zig-zag encoding
    Ok(if result & 1 == 1 { !(result >> 1) } else { result >> 1 })
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum PolylineError {
    Truncated,
    InvalidCharacter { position: usize, character: char },
    Overflow { position: usize },
    InvalidMultiplier(f64),
    Coordinate(CoordinateError),
}

impl Display for PolylineError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PolylineError::Truncated => write!(f, "Polyline ends in the middle of a point"),
            PolylineError::InvalidCharacter { position, character } => {
                write!(f, "Invalid character '{}' at position {} of polyline", character, position)
            }
            PolylineError::Overflow { position } => {
                write!(f, "Polyline value starting before position {} is too long", position)
            }
            PolylineError::InvalidMultiplier(multiplier) => {
                write!(f, "Invalid polyline multiplier {}", multiplier)
            }
            PolylineError::Coordinate(err) => write!(f, "{}", err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: &[Coordinate], expected: &[(f64, f64)]) {
        assert_eq!(actual.len(), expected.len());
        for (coordinate, (lat, lng)) in actual.iter().zip(expected) {
            assert!((coordinate.lat - lat).abs() < 1e-9, "{} != {}", coordinate.lat, lat);
            assert!((coordinate.lng - lng).abs() < 1e-9, "{} != {}", coordinate.lng, lng);
        }
    }

    #[test]
    fn test_decode_reference_polyline() {
        let decoded = decode("_p~iF~ps|U_ulLnnqC_mqNvxq`@", DEFAULT_MULTIPLIER).unwrap();
        assert_close(&decoded, &[(38.5, -120.2), (40.7, -120.95), (43.252, -126.453)]);
    }

    #[test]
    fn test_decode_with_custom_multiplier() {
        // Same values read with 6 decimal places are a tenth of the size
        let decoded = decode("_p~iF~ps|U", 1e6).unwrap();
        assert_close(&decoded, &[(3.85, -12.02)]);
    }

    #[test]
    fn test_decode_empty() {
        assert_eq!(decode("", DEFAULT_MULTIPLIER), Ok(vec![]));
    }

    #[test]
    fn test_decode_truncated() {
        // latitude without longitude
        assert_eq!(decode("_p~iF", DEFAULT_MULTIPLIER), Err(PolylineError::Truncated));
        // continuation bit set on the last chunk
        assert_eq!(decode("_p~iF~ps|", DEFAULT_MULTIPLIER), Err(PolylineError::Truncated));
    }

    #[test]
    fn test_decode_invalid_character() {
        assert_eq!(
            decode("_p~iF ps|U", DEFAULT_MULTIPLIER),
            Err(PolylineError::InvalidCharacter { position: 5, character: ' ' })
        );
    }

    #[test]
    fn test_decode_overflow() {
        let endless = "~".repeat(20);
        assert!(matches!(decode(&endless, DEFAULT_MULTIPLIER), Err(PolylineError::Overflow { .. })));
    }

    #[test]
    fn test_reject_invalid_multiplier() {
        assert_eq!(decode("_p~iF~ps|U", 0.0), Err(PolylineError::InvalidMultiplier(0.0)));
    }
}
