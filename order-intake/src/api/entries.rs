//! Order entry endpoints: submit, list, update status

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
};
use shared::error::ErrorCode;
use shared::request::{EntriesQuery, SubmitEntry, UpdateEntryStatus};
use shared::response::{EntriesResponse, EntryResponse};

use crate::error::ServiceError;
use crate::state::AppState;

use super::{ApiResult, body};

/// POST /submit
pub async fn submit(
    State(state): State<AppState>,
    payload: Result<Json<SubmitEntry>, JsonRejection>,
) -> ApiResult<EntryResponse> {
    let submission = body(payload)?;
    let entry = state.entries.create(submission).await?;
    Ok(Json(EntryResponse::ok(entry)))
}

/// GET /entries?status=
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<EntriesQuery>,
) -> ApiResult<EntriesResponse> {
    let entries = state.entries.list(query.status_filter()).await?;
    Ok(Json(EntriesResponse { entries }))
}

/// PUT /entries/{id}/status
///
/// A non-numeric id cannot name an entry, so it is answered like an unknown one.
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateEntryStatus>, JsonRejection>,
) -> ApiResult<EntryResponse> {
    let id: i64 = id
        .parse()
        .map_err(|_| ServiceError::from(ErrorCode::OrderNotFound))?;
    let update = body(payload)?;
    let entry = state.entries.update_status(id, update.status).await?;
    Ok(Json(EntryResponse::ok(entry)))
}
