pub mod errors;
pub mod models;
pub mod routes;

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::errors::LabReportError;
use crate::render::print::PrintController;
use crate::store::Storage;

#[derive(Clone)]
pub struct AppState {
    pub storage: Storage,
    pub printer: PrintController,
}

pub fn create_app_state(db_path: &str) -> Result<AppState, LabReportError> {
    let storage = Storage::new(db_path)?;
    Ok(AppState {
        storage,
        printer: PrintController::new(),
    })
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::pages::index))
        .route("/print", get(routes::pages::print_view))
        .route("/api/health", get(routes::health::health_check))
        .route(
            "/api/record",
            get(routes::record::get_record)
                .put(routes::record::update_record)
                .delete(routes::record::clear_record),
        )
        .route("/api/preview", get(routes::pages::preview_fragment))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
