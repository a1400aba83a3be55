use tracing::info;

use crate::api;
use crate::cli::commands::ServeArgs;
use crate::errors::LabReportError;

pub async fn handle_serve(args: ServeArgs) -> Result<(), LabReportError> {
    info!(
        host = %args.host,
        port = args.port,
        built = env!("BUILD_TIMESTAMP"),
        "Starting lab report editor"
    );

    let state = api::create_app_state(&args.db)?;
    let app = api::build_router(state);

    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Editor available at http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| LabReportError::Internal(format!("Server error: {}", e)))?;

    Ok(())
}
