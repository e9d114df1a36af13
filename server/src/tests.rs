use crate::build;
use chrono::NaiveTime;
use common::types::config::matching::MatchingConfig;
use common::types::{Catalog, Coordinate, Trip, TripId};
use reqwest::StatusCode;
use routing::providers::fixed::FixedRouteProvider;
use routing::ranking::TripRanker;
use routing::route::Route;
use routing::session::NO_CANDIDATES_MESSAGE;
use serde_json::{json, Value};
use std::sync::Arc;

const ORIGIN: Coordinate = Coordinate { lat: 10.71, lng: 106.59 };
const DESTINATION: Coordinate = Coordinate { lat: 9.2, lng: 105.2 };

fn route(from: Coordinate, to: Coordinate, minutes: f64) -> Route {
    Route { path: vec![from, to], duration_minutes: minutes, distance_km: minutes, instructions: vec![] }
}

fn trip(id: &str, start: Coordinate, end: Coordinate) -> Trip {
    Trip {
        id: TripId(id.to_string()),
        name: format!("Trip {id}"),
        start,
        end,
        departure: NaiveTime::from_hms_opt(21, 0, 0).unwrap(),
    }
}

/// Two trips: "slow" costs 40 minutes, "fast" costs 25 minutes
fn catalog() -> Catalog {
    Catalog::from_trips(vec![
        trip("slow", Coordinate { lat: 10.8, lng: 106.7 }, Coordinate { lat: 9.3, lng: 105.3 }),
        trip("fast", Coordinate { lat: 10.75, lng: 106.65 }, Coordinate { lat: 9.25, lng: 105.25 }),
    ])
    .unwrap()
}

fn provider() -> FixedRouteProvider {
    let catalog = catalog();
    let [slow, fast] = catalog.trips() else { unreachable!() };

    FixedRouteProvider::new()
        .with_route(ORIGIN, slow.start, route(ORIGIN, slow.start, 20.0))
        .with_route(slow.end, DESTINATION, route(slow.end, DESTINATION, 20.0))
        .with_route(ORIGIN, fast.start, route(ORIGIN, fast.start, 10.0))
        .with_route(fast.end, DESTINATION, route(fast.end, DESTINATION, 15.0))
        .with_address(ORIGIN, "Nguyen Hue, Ho Chi Minh City")
        .with_address(DESTINATION, "Ninh Kieu, Can Tho")
}

/// Start the API on an ephemeral port and return its base url
async fn start(provider: FixedRouteProvider) -> String {
    let ranker = TripRanker::new(Arc::new(provider), &MatchingConfig::default());
    let (listener, app) = build(ranker, catalog(), "127.0.0.1:0".parse().unwrap()).await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
    format!("http://{addr}/api/v1")
}

fn match_body() -> Value {
    json!({
        "origin": { "lat": ORIGIN.lat, "lng": ORIGIN.lng },
        "destination": { "lat": DESTINATION.lat, "lng": DESTINATION.lng }
    })
}

#[tokio::test]
async fn matching_ranks_trips() {
    let base = start(provider()).await;
    let client = reqwest::Client::new();

    let response = client.post(format!("{base}/matching")).json(&match_body()).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["origin_address"], "Nguyen Hue, Ho Chi Minh City");
    assert_eq!(body["destination_address"], "Ninh Kieu, Can Tho");
    assert_eq!(body["candidates"][0]["trip_id"], "fast");
    assert_eq!(body["candidates"][0]["total_minutes"], 25.0);
    assert_eq!(body["candidates"][0]["departure"], "21:00");
    assert_eq!(body["candidates"][1]["trip_id"], "slow");
    assert_eq!(body["candidates"][1]["pickup"]["path"][0]["lat"], ORIGIN.lat);
}

#[tokio::test]
async fn matching_without_candidates_is_not_found() {
    let base = start(FixedRouteProvider::new()).await;
    let client = reqwest::Client::new();

    let response = client.post(format!("{base}/matching")).json(&match_body()).send().await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(response.text().await.unwrap(), NO_CANDIDATES_MESSAGE);
}

#[tokio::test]
async fn matching_rejects_invalid_coordinates() {
    let base = start(provider()).await;
    let client = reqwest::Client::new();
    let body = json!({
        "origin": { "lat": 123.0, "lng": 106.59 },
        "destination": { "lat": DESTINATION.lat, "lng": DESTINATION.lng }
    });

    let response = client.post(format!("{base}/matching")).json(&body).send().await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn latest_returns_newest_outcome() {
    let base = start(provider()).await;
    let client = reqwest::Client::new();

    let before = client.get(format!("{base}/matching/latest")).send().await.unwrap();
    assert_eq!(before.status(), StatusCode::NOT_FOUND);

    client.post(format!("{base}/matching")).json(&match_body()).send().await.unwrap();

    let after = client.get(format!("{base}/matching/latest")).send().await.unwrap();
    assert_eq!(after.status(), StatusCode::OK);
    let body: Value = after.json().await.unwrap();
    assert_eq!(body["candidates"][0]["trip_id"], "fast");
}

#[tokio::test]
async fn trips_lists_catalog() {
    let base = start(provider()).await;

    let body: Value = reqwest::get(format!("{base}/trips")).await.unwrap().json().await.unwrap();

    assert_eq!(body.as_array().unwrap().len(), 2);
    assert_eq!(body[0]["id"], "slow");
    assert_eq!(body[1]["departure"], "21:00");
}

#[tokio::test]
async fn geocode_resolves_address() {
    let base = start(provider()).await;

    let known: Value = reqwest::get(format!("{base}/geocode?lat=10.71&lng=106.59"))
        .await.unwrap().json().await.unwrap();
    assert_eq!(known["address"], "Nguyen Hue, Ho Chi Minh City");

    let unknown: Value = reqwest::get(format!("{base}/geocode?lat=1&lng=1"))
        .await.unwrap().json().await.unwrap();
    assert_eq!(unknown["address"], "unknown");

    let invalid = reqwest::get(format!("{base}/geocode?lat=1&lng=200")).await.unwrap();
    assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);
}
