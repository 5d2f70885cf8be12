use std::sync::Arc;

use axum::{extract::State as AxumState, http::StatusCode, response::IntoResponse, Json};

use crate::state::State;

/// `GET /api/data`: the complete portal record. No parameters are consulted;
/// the response is identical for every request in a process run.
pub async fn data_handler(AxumState(state): AxumState<Arc<State>>) -> impl IntoResponse {
    (StatusCode::OK, Json(state.record.clone())).into_response()
}
