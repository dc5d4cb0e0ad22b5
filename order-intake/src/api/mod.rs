//! HTTP routes for order-intake

pub mod entries;
pub mod health;
pub mod store_status;

use axum::extract::DefaultBodyLimit;
use axum::extract::rejection::JsonRejection;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use shared::error::AppError;
use tower_http::trace::TraceLayer;

use crate::error::ServiceError;
use crate::state::AppState;

/// Order bodies are short text; anything bigger is rejected before parsing
const MAX_BODY_BYTES: usize = 64 * 1024;

type ApiResult<T> = Result<Json<T>, ServiceError>;

/// Unwrap a JSON body, answering malformed ones with `{error}` like every other failure
fn body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload.map(|Json(value)| value).map_err(|rejection| {
        tracing::debug!(error = %rejection, "Rejected request body");
        AppError::invalid_request("Invalid request body")
    })
}

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    let orders = Router::new()
        .route("/submit", post(entries::submit))
        .route("/entries", get(entries::list))
        .route("/entries/{id}/status", put(entries::update_status));

    let gate = Router::new().route(
        "/store-status",
        get(store_status::get_store_status).put(store_status::update_store_status),
    );

    Router::new()
        .route("/", get(health::running))
        .route("/health", get(health::health_check))
        .merge(orders)
        .merge(gate)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
