use either::Either;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::time::Duration;

/// Upper bound for a single outbound request
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
#[serde(try_from = "SerializedTimeout", into = "SerializedTimeout")]
pub struct Timeout(pub Duration);

/// Serialized representation of a Timeout
/// Either 10 (seconds) or "10s", "500ms", "2m" (String)
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(transparent)]
struct SerializedTimeout {
    #[serde(with = "either::serde_untagged")]
    value: Either<u64, String>,
}

#[derive(thiserror::Error, Debug)]
pub struct TimeoutError;

impl Display for TimeoutError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Wrong timeout format, expected a positive duration. Examples of valid formats: 10, 10s, 500ms, 2m")
    }
}

impl TryFrom<SerializedTimeout> for Timeout {
    type Error = TimeoutError;

    fn try_from(value: SerializedTimeout) -> Result<Self, Self::Error> {
        let duration = match value.value {
            Either::Right(value) => {
                let regex = Regex::new(r"^(\d+)\s*(ms|s|m)?$").map_err(|_| TimeoutError)?;
                let caps = regex.captures(value.trim()).ok_or(TimeoutError)?;
                let amount = u64::from_str(&caps[1]).map_err(|_| TimeoutError)?;

                match caps.get(2).map(|unit| unit.as_str()) {
                    Some("ms") => Duration::from_millis(amount),
                    Some("m") => Duration::from_secs(amount.checked_mul(60).ok_or(TimeoutError)?),
                    _ => Duration::from_secs(amount),
                }
            }
            Either::Left(seconds) => Duration::from_secs(seconds),
        };

        // A zero timeout would fail every request
        if duration.is_zero() {
            return Err(TimeoutError);
        }

        Ok(Self(duration))
    }
}

impl From<Timeout> for SerializedTimeout {
    fn from(value: Timeout) -> Self {
        Self { value: Either::Right(format!("{}ms", value.0.as_millis())) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> Result<Timeout, TimeoutError> {
        Timeout::try_from(SerializedTimeout { value: Either::Right(raw.to_string()) })
    }

    #[test]
    fn test_parse_units() {
        assert_eq!(parse("10").unwrap(), Timeout(Duration::from_secs(10)));
        assert_eq!(parse("10s").unwrap(), Timeout(Duration::from_secs(10)));
        assert_eq!(parse("250ms").unwrap(), Timeout(Duration::from_millis(250)));
        assert_eq!(parse("2m").unwrap(), Timeout(Duration::from_secs(120)));
        assert!(parse("soon").is_err());
        assert!(parse("-1s").is_err());
    }

    #[test]
    fn test_reject_overflowing_minutes() {
        assert!(parse("307445734561825861m").is_err());
        assert!(parse("99999999999999999999s").is_err());
    }

    #[test]
    fn test_reject_zero() {
        assert!(parse("0s").is_err());
        assert!(parse("0ms").is_err());
        assert!(serde_json::from_str::<Timeout>("0").is_err());
    }

    #[test]
    fn test_numbers_are_seconds() {
        let timeout: Timeout = serde_json::from_str("3").unwrap();
        assert_eq!(timeout, Timeout(Duration::from_secs(3)));
    }

    #[test]
    fn test_serialize_as_millis() {
        let json = serde_json::to_string(&Timeout(Duration::from_secs(2))).unwrap();
        assert_eq!(json, r#""2000ms""#);
    }
}
