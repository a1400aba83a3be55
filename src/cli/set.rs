use tracing::info;

use crate::cli::commands::SetArgs;
use crate::errors::LabReportError;
use crate::models::Field;
use crate::store::Storage;

pub async fn handle_set(args: SetArgs) -> Result<(), LabReportError> {
    let field = Field::parse(&args.field)
        .ok_or_else(|| LabReportError::UnknownField(args.field.clone()))?;

    let storage = Storage::new(&args.db)?;
    let record = storage.load_record()?.with_field(field, args.value);
    storage.save_record(&record)?;

    info!(field = field.name(), "Field updated");
    println!("{} = {}", field.name(), record.get(field));
    Ok(())
}
