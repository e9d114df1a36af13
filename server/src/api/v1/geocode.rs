use crate::api::v1::types::queries::GeocodeQuery;
use crate::api::v1::types::responses::GeocodeResponse;
use crate::AppData;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use common::types::Coordinate;
use std::sync::Arc;

pub(crate) async fn endpoint(
    State(app_data): State<Arc<AppData>>,
    Query(query): Query<GeocodeQuery>,
) -> Result<Json<GeocodeResponse>, (StatusCode, String)> {
    let coordinate = Coordinate::new(query.lat, query.lng)
        .map_err(|err| (StatusCode::BAD_REQUEST, err.to_string()))?;

    let address = app_data.ranker.provider().reverse_geocode(coordinate).await;

    Ok(Json(GeocodeResponse { address }))
}
