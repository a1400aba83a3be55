use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::api::models::ErrorResponse;
use crate::errors::LabReportError;

impl IntoResponse for LabReportError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            LabReportError::UnknownField(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
