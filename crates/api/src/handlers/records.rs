//! Handlers for the record endpoints.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use jilu_core::dates;
use jilu_core::types::DbId;
use jilu_db::models::record::{CreateRecord, Record, UpdateRecord};
use jilu_db::repositories::RecordRepo;

use crate::error::AppResult;
use crate::response::{Ack, Payload};
use crate::state::AppState;

/// Payload for GET /api/get-records.
#[derive(Debug, Serialize)]
pub struct RecordList {
    pub data: Vec<Record>,
}

/// POST /api/add-record
///
/// The date is normalized to `YYYY-MM-DD` before the insert; anything
/// the normalizer passes through unchanged is left for the database to
/// reject.
pub async fn add_record(
    State(state): State<AppState>,
    Json(mut input): Json<CreateRecord>,
) -> AppResult<impl IntoResponse> {
    input.date = input.date.map(|d| dates::normalize_date(&d));

    RecordRepo::create(&state.pool, &input).await?;

    Ok(Json(Ack::success()))
}

/// GET /api/get-records
pub async fn get_records(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let records = RecordRepo::list(&state.pool).await?;

    Ok(Json(Payload::success(RecordList { data: records })))
}

/// PUT /api/update-record/{id}
///
/// Overwrites all four fields. An unknown id acknowledges without
/// touching any row.
pub async fn update_record(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(mut input): Json<UpdateRecord>,
) -> AppResult<impl IntoResponse> {
    input.date = input.date.map(|d| dates::normalize_date(&d));

    let matched = RecordRepo::update(&state.pool, id, &input).await?;
    if !matched {
        tracing::debug!(id, "Update matched no record");
    }

    Ok(Json(Ack::success()))
}

/// DELETE /api/delete-record/{id}
///
/// An unknown id acknowledges without touching any row.
pub async fn delete_record(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = RecordRepo::delete(&state.pool, id).await?;
    if !deleted {
        tracing::debug!(id, "Delete matched no record");
    }

    Ok(Json(Ack::success()))
}
