use crate::polyline::PolylineError;
use std::fmt;
use std::fmt::Display;

/// Errors encountered while talking to the routing service
#[derive(thiserror::Error, Debug)]
pub enum RoutingError {
    Http(#[from] reqwest::Error),
    Json(reqwest::Error),
    Url(#[from] url::ParseError),
    /// The service answered with an error status
    Api(String),
    NoPath,
    InvalidPath(String),
    Polyline(#[from] PolylineError),
    NoAddress,
}

impl Display for RoutingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let err: &dyn Display = match self {
            RoutingError::Http(err) => err,
            RoutingError::Json(err) => err,
            RoutingError::Url(err) => err,
            RoutingError::Api(message) => message,
            RoutingError::NoPath => &"No path found",
            RoutingError::InvalidPath(reason) => reason,
            RoutingError::Polyline(err) => err,
            RoutingError::NoAddress => &"No address found",
        };
        write!(f, "{}", err)
    }
}
