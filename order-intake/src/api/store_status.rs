//! Store status endpoints (shared-secret guarded)

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use shared::models::{StoreStatus, StoreStatusUpdate};
use shared::response::StoreStatusResponse;

use crate::auth::PresentedKey;
use crate::state::AppState;

use super::{ApiResult, body};

/// GET /store-status
pub async fn get_store_status(
    State(state): State<AppState>,
    key: PresentedKey,
) -> ApiResult<StoreStatus> {
    let status = state.store_status.get(key.as_deref()).await?;
    Ok(Json(status))
}

/// PUT /store-status
///
/// The key is checked before the body, so a bad key is always a 403.
pub async fn update_store_status(
    State(state): State<AppState>,
    key: PresentedKey,
    payload: Result<Json<StoreStatusUpdate>, JsonRejection>,
) -> ApiResult<StoreStatusResponse> {
    if payload.is_err() {
        state.store_status.check(key.as_deref())?;
    }
    let update = body(payload)?;
    let status = state.store_status.set(key.as_deref(), &update).await?;
    Ok(Json(StoreStatusResponse::ok(status)))
}
