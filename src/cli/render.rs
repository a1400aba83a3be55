use tracing::info;

use crate::cli::commands::RenderArgs;
use crate::errors::LabReportError;
use crate::render::{preview, print};
use crate::store::Storage;

/// Write the printable cover page to disk, for printing outside the editor.
pub async fn handle_render(args: RenderArgs) -> Result<(), LabReportError> {
    let storage = Storage::new(&args.db)?;
    let record = storage.load_record()?;

    let document = print::render_document(&preview::render(&record));
    tokio::fs::write(&args.output, &document).await?;

    info!(path = %args.output, "Cover page written");
    println!("Wrote {}", args.output);
    Ok(())
}
