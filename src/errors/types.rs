use thiserror::Error;

#[derive(Debug, Error)]
pub enum LabReportError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}
