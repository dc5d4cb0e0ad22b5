//! Liveness endpoints

use axum::Json;
use axum::extract::State;
use shared::response::RunningResponse;

use crate::state::AppState;

/// GET /
pub async fn running() -> Json<RunningResponse> {
    Json(RunningResponse {
        status: "Order intake API is running".to_string(),
    })
}

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "order-intake",
        "version": env!("CARGO_PKG_VERSION"),
        "datastore": state.store_kind,
    }))
}
