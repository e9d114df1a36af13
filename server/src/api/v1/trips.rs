use crate::AppData;
use axum::extract::State;
use axum::Json;
use common::types::Catalog;
use std::sync::Arc;

pub(crate) async fn endpoint(State(app_data): State<Arc<AppData>>) -> Json<Catalog> {
    Json(app_data.catalog.clone())
}
