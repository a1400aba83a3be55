use serde::Serialize;

#[derive(Serialize)]
pub struct UpdatedResponse {
    pub updated: bool,
}

#[derive(Serialize)]
pub struct ClearedResponse {
    pub cleared: bool,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
