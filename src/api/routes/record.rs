use axum::{extract::State, Json};

use crate::api::models::{ClearedResponse, UpdatedResponse};
use crate::api::AppState;
use crate::errors::LabReportError;
use crate::models::ReportRecord;

pub async fn get_record(
    State(state): State<AppState>,
) -> Result<Json<ReportRecord>, LabReportError> {
    state.storage.load_record().map(Json)
}

/// Replace the whole record. Edits never patch individual fields; the
/// client always sends the complete updated record.
pub async fn update_record(
    State(state): State<AppState>,
    Json(record): Json<ReportRecord>,
) -> Result<Json<UpdatedResponse>, LabReportError> {
    state.storage.save_record(&record)?;
    Ok(Json(UpdatedResponse { updated: true }))
}

pub async fn clear_record(
    State(state): State<AppState>,
) -> Result<Json<ClearedResponse>, LabReportError> {
    let cleared = state.storage.clear_record()?;
    Ok(Json(ClearedResponse { cleared }))
}
