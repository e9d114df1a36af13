use async_trait::async_trait;
use common::types::config::RoutingConfig;
use common::types::Coordinate;
use log::{debug, warn};
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;

use super::error::RoutingError;
use super::parser::{parse_geocode_response, parse_route_response};
use super::response::{ErrorResponse, GeocodeResponse, RouteResponse};
use crate::providers::{RouteProvider, UNKNOWN_ADDRESS};
use crate::route::Route;

/// Thin HTTP client for GraphHopper's `/route` and `/geocode` endpoints.
#[derive(Debug, Clone)]
pub struct GraphHopperClient {
    client: Client,
    base_url: Url,
    api_key: Option<String>,
    profile: String,
    locale: String,
}

impl GraphHopperClient {
    pub fn new(config: &RoutingConfig) -> Result<Self, RoutingError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout.0);
        }
        let client = builder.build()?;

        // Url::join would replace the last path segment otherwise
        let mut base_url = config.base_url.clone();
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            client,
            base_url,
            api_key: config.api_key.clone(),
            profile: config.profile.clone(),
            locale: config.locale.clone(),
        })
    }

    /// Ask for the fastest path from `origin` to `destination`.
    pub async fn route(&self, origin: Coordinate, destination: Coordinate) -> Result<Route, RoutingError> {
        let mut url = self.endpoint("route")?;
        url.query_pairs_mut()
            .append_pair("point", &origin.to_string())
            .append_pair("point", &destination.to_string())
            .append_pair("profile", &self.profile)
            .append_pair("locale", &self.locale)
            .append_pair("instructions", "true")
            .append_pair("calc_points", "true");

        let response = self.client.get(url).send().await?;
        let parsed: RouteResponse = read_body(response).await?;
        parse_route_response(parsed)
    }

    /// Look up the address closest to `coordinate`.
    pub async fn geocode(&self, coordinate: Coordinate) -> Result<String, RoutingError> {
        let mut url = self.endpoint("geocode")?;
        url.query_pairs_mut()
            .append_pair("point", &coordinate.to_string())
            .append_pair("reverse", "true")
            .append_pair("locale", &self.locale);

        let response = self.client.get(url).send().await?;
        let parsed: GeocodeResponse = read_body(response).await?;
        parse_geocode_response(parsed)
    }

    fn endpoint(&self, name: &str) -> Result<Url, RoutingError> {
        let mut url = self.base_url.join(name)?;
        if let Some(key) = &self.api_key {
            url.query_pairs_mut().append_pair("key", key);
        }
        Ok(url)
    }
}

async fn read_body<T: DeserializeOwned>(response: Response) -> Result<T, RoutingError> {
    let status = response.status();
    if status.is_success() {
        return response.json::<T>().await.map_err(RoutingError::Json);
    }

    let message = response
        .json::<ErrorResponse>()
        .await
        .ok()
        .and_then(|body| body.message)
        .unwrap_or_else(|| status.to_string());
    Err(RoutingError::Api(message))
}

#[async_trait]
impl RouteProvider for GraphHopperClient {
    async fn find_route(&self, origin: Coordinate, destination: Coordinate) -> Option<Route> {
        match self.route(origin, destination).await {
            Ok(route) => {
                debug!(
                    target: "routing",
                    "Route {} -> {}: {:.1} min, {:.1} km",
                    origin, destination, route.duration_minutes, route.distance_km
                );
                Some(route)
            }
            Err(err) => {
                warn!(target: "routing", "No route from {} to {}: {}", origin, destination, err);
                None
            }
        }
    }

    async fn reverse_geocode(&self, coordinate: Coordinate) -> String {
        self.geocode(coordinate).await.unwrap_or_else(|err| {
            warn!(target: "routing", "Reverse geocoding {} failed: {}", coordinate, err);
            UNKNOWN_ADDRESS.to_string()
        })
    }
}
