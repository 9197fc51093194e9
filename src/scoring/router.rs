use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::json;

use super::domain::Evaluation;
use super::engine::ScoreUpdateEngine;

/// Router builder exposing the refresh endpoint for evaluation batches.
pub fn evaluation_router(engine: Arc<ScoreUpdateEngine>) -> Router {
    Router::new()
        .route("/api/v1/evaluations/refresh", post(refresh_handler))
        .with_state(engine)
}

/// Run one engine pass over the submitted evaluations and return them.
///
/// The engine is synchronous and may block on registry lookups, so the
/// pass runs on the blocking-task pool.
pub(crate) async fn refresh_handler(
    State(engine): State<Arc<ScoreUpdateEngine>>,
    Json(mut evaluations): Json<Vec<Evaluation>>,
) -> Response {
    let refreshed = tokio::task::spawn_blocking(move || {
        engine.update_all(&mut evaluations);
        evaluations
    })
    .await;

    match refreshed {
        Ok(evaluations) => (StatusCode::OK, Json(evaluations)).into_response(),
        Err(err) => {
            let payload = json!({ "error": err.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}
