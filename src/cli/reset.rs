use crate::cli::commands::ResetArgs;
use crate::errors::LabReportError;
use crate::store::Storage;

pub async fn handle_reset(args: ResetArgs) -> Result<(), LabReportError> {
    let storage = Storage::new(&args.db)?;

    if storage.clear_record()? {
        println!("Saved record removed; the built-in sample is back.");
    } else {
        println!("Nothing was saved.");
    }
    Ok(())
}
