use labreport::cli::commands::{RenderArgs, ResetArgs, SetArgs};
use labreport::cli::{render, reset, set};
use labreport::errors::LabReportError;
use labreport::models::ReportRecord;
use labreport::store::Storage;
use std::fs;
use tempfile::TempDir;

fn db_path(dir: &TempDir) -> String {
    dir.path().join("labreport.db").to_str().unwrap().to_string()
}

#[tokio::test]
async fn test_set_persists_a_single_field() {
    let dir = TempDir::new().unwrap();
    let db = db_path(&dir);

    set::handle_set(SetArgs {
        field: "semester".to_string(),
        value: "Spring 2026".to_string(),
        db: db.clone(),
    })
    .await
    .unwrap();

    let record = Storage::new(&db).unwrap().load_record().unwrap();
    assert_eq!(record.semester, "Spring 2026");
    // Other fields keep their sample values
    assert_eq!(record.university, ReportRecord::sample().university);
}

#[tokio::test]
async fn test_set_rejects_unknown_field() {
    let dir = TempDir::new().unwrap();
    let db = db_path(&dir);

    let err = set::handle_set(SetArgs {
        field: "gpa".to_string(),
        value: "4.0".to_string(),
        db: db.clone(),
    })
    .await
    .unwrap_err();

    assert!(matches!(err, LabReportError::UnknownField(_)));
    // The failed edit stored nothing
    let storage = Storage::new(&db).unwrap();
    assert!(storage.last_saved_at().unwrap().is_none());
}

#[tokio::test]
async fn test_reset_drops_the_saved_record() {
    let dir = TempDir::new().unwrap();
    let db = db_path(&dir);

    set::handle_set(SetArgs {
        field: "name".to_string(),
        value: "Someone Else".to_string(),
        db: db.clone(),
    })
    .await
    .unwrap();

    reset::handle_reset(ResetArgs { db: db.clone() }).await.unwrap();

    let record = Storage::new(&db).unwrap().load_record().unwrap();
    assert_eq!(record, ReportRecord::sample());
}

#[tokio::test]
async fn test_render_writes_the_printable_document() {
    let dir = TempDir::new().unwrap();
    let db = db_path(&dir);
    let output = dir.path().join("cover.html");

    set::handle_set(SetArgs {
        field: "courseTitle".to_string(),
        value: "Compiler Design Lab".to_string(),
        db: db.clone(),
    })
    .await
    .unwrap();

    render::handle_render(RenderArgs {
        output: output.to_str().unwrap().to_string(),
        db: db.clone(),
    })
    .await
    .unwrap();

    let document = fs::read_to_string(&output).unwrap();
    assert!(document.starts_with("<!DOCTYPE html>"));
    assert!(document.contains("Compiler Design Lab"));
    assert!(document.contains("window.print()"));
}
