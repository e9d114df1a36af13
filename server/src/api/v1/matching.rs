use crate::api::v1::types::queries::MatchQuery;
use crate::api::v1::types::responses::MatchResponse;
use crate::AppData;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use routing::ranking::MatchRequest;
use routing::session::MatchOutcome;
use std::sync::Arc;

pub(crate) async fn endpoint(
    State(app_data): State<Arc<AppData>>,
    query: Result<Json<MatchQuery>, JsonRejection>,
) -> Result<Json<MatchResponse>, (StatusCode, String)> {
    let Json(query) = query.map_err(|rejection| (StatusCode::BAD_REQUEST, rejection.body_text()))?;
    let request = MatchRequest { origin: query.origin, destination: query.destination };

    let ticket = app_data.session.write().await.begin();
    let outcome = app_data.ranker.submit(request, &app_data.catalog).await;
    app_data.session.write().await.complete(ticket, outcome.clone());

    to_response(&outcome)
}

/// The outcome of the newest submission that finished
pub(crate) async fn latest(
    State(app_data): State<Arc<AppData>>,
) -> Result<Json<MatchResponse>, (StatusCode, String)> {
    let session = app_data.session.read().await;
    let outcome = session
        .latest()
        .ok_or((StatusCode::NOT_FOUND, "Nothing was matched yet".to_string()))?;

    to_response(outcome)
}

fn to_response(outcome: &MatchOutcome) -> Result<Json<MatchResponse>, (StatusCode, String)> {
    match outcome.empty_message() {
        Some(message) => Err((StatusCode::NOT_FOUND, message.to_string())),
        None => Ok(Json(MatchResponse::from(outcome))),
    }
}
