use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

use crate::api::AppState;
use crate::render::{page, preview};

pub async fn index(
    State(state): State<AppState>,
) -> Result<Html<String>, (StatusCode, Json<Value>)> {
    let record = state
        .storage
        .load_record()
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({"error": e.to_string()}))))?;

    let markup = preview::render(&record);
    state.printer.capture(&markup).await;

    Ok(Html(page::render(&record, &markup)))
}

pub async fn preview_fragment(
    State(state): State<AppState>,
) -> Result<Html<String>, (StatusCode, Json<Value>)> {
    let record = state
        .storage
        .load_record()
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({"error": e.to_string()}))))?;

    let markup = preview::render(&record);
    state.printer.capture(&markup).await;

    Ok(Html(markup))
}

/// The scoped print view. Without a captured preview there is nothing to
/// print, so the route answers 204 and touches nothing.
pub async fn print_view(State(state): State<AppState>) -> Response {
    match state.printer.document().await {
        Some(doc) => Html(doc).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}
