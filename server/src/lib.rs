mod api;
#[cfg(test)]
mod tests;

use axum::routing::{get, post};
use axum::Router;
use common::types::Catalog;
use log::info;
use routing::ranking::TripRanker;
use routing::session::MatchingSession;
use std::fmt::Display;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::RwLock;

struct AppData {
    ranker: TripRanker,
    catalog: Catalog,
    session: RwLock<MatchingSession>,
}

pub async fn build(
    ranker: TripRanker,
    catalog: Catalog,
    bind: SocketAddr,
) -> Result<(TcpListener, Router), ServerError> {
    let app_data = Arc::new(AppData {
        ranker,
        catalog,
        session: RwLock::new(MatchingSession::new()),
    });

    let app = Router::new()
        .route("/api/v1/matching", post(api::v1::matching::endpoint))
        .route("/api/v1/matching/latest", get(api::v1::matching::latest))
        .route("/api/v1/trips", get(api::v1::trips::endpoint))
        .route("/api/v1/geocode", get(api::v1::geocode::endpoint))
        .with_state(app_data);

    let listener = TcpListener::bind(bind).await?;
    info!(target: "server", "Listening on {}", listener.local_addr()?);

    Ok((listener, app))
}

#[derive(thiserror::Error, Debug)]
pub enum ServerError {
    Io(#[from] std::io::Error),
}

impl Display for ServerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServerError::Io(err) => write!(f, "{}", err),
        }
    }
}
