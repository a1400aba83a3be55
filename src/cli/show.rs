use console::style;

use crate::cli::commands::ShowArgs;
use crate::errors::LabReportError;
use crate::models::Field;
use crate::store::Storage;

pub async fn handle_show(args: ShowArgs) -> Result<(), LabReportError> {
    let storage = Storage::new(&args.db)?;
    let record = storage.load_record()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&record)?);
        return Ok(());
    }

    for field in Field::ALL {
        let label = format!("{:>15}", field.label());
        println!("{}  {}", style(label).bold(), record.get(field));
    }

    println!();
    match storage.last_saved_at()? {
        Some(saved) => println!("Last saved at {}", saved),
        None => println!("Nothing saved yet; showing the built-in sample."),
    }

    Ok(())
}
