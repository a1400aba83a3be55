use super::Storage;
use crate::errors::LabReportError;
use crate::models::ReportRecord;
use chrono::Utc;

/// The one key the record blob lives under.
pub const RECORD_KEY: &str = "labReportData";

impl Storage {
    pub fn get_value(&self, key: &str) -> Result<Option<String>, LabReportError> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn
            .prepare("SELECT value FROM storage WHERE key = ?1")
            .map_err(|e| LabReportError::Storage(format!("Query failed: {}", e)))?;

        match stmt.query_row(rusqlite::params![key], |row: &rusqlite::Row| {
            row.get::<_, String>(0)
        }) {
            Ok(v) => Ok(Some(v)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(LabReportError::Storage(format!("Query error: {}", e))),
        }
    }

    pub fn set_value(&self, key: &str, value: &str) -> Result<(), LabReportError> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT OR REPLACE INTO storage (key, value, updated_at) VALUES (?1, ?2, ?3)",
            rusqlite::params![key, value, Utc::now().to_rfc3339()],
        )
        .map_err(|e| LabReportError::Storage(format!("Insert failed: {}", e)))?;
        Ok(())
    }

    pub fn delete_value(&self, key: &str) -> Result<bool, LabReportError> {
        let conn = self.conn.lock().unwrap();
        let deleted = conn
            .execute("DELETE FROM storage WHERE key = ?1", rusqlite::params![key])
            .map_err(|e| LabReportError::Storage(format!("Delete failed: {}", e)))?;
        Ok(deleted > 0)
    }

    /// Load the saved record, or the built-in sample when nothing is stored.
    ///
    /// A blob with missing keys loads leniently (those fields read empty);
    /// a blob that is not valid JSON propagates as an error.
    pub fn load_record(&self) -> Result<ReportRecord, LabReportError> {
        match self.get_value(RECORD_KEY)? {
            Some(blob) => Ok(serde_json::from_str(&blob)?),
            None => Ok(ReportRecord::sample()),
        }
    }

    /// Persist the whole record as one serialized blob. Every edit replaces
    /// the full value; there are no partial writes.
    pub fn save_record(&self, record: &ReportRecord) -> Result<(), LabReportError> {
        let blob = serde_json::to_string(record)?;
        self.set_value(RECORD_KEY, &blob)
    }

    /// Drop the saved record. Returns whether anything was stored.
    pub fn clear_record(&self) -> Result<bool, LabReportError> {
        self.delete_value(RECORD_KEY)
    }

    /// When the record was last saved, if ever.
    pub fn last_saved_at(&self) -> Result<Option<String>, LabReportError> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn
            .prepare("SELECT updated_at FROM storage WHERE key = ?1")
            .map_err(|e| LabReportError::Storage(format!("Query failed: {}", e)))?;

        match stmt.query_row(rusqlite::params![RECORD_KEY], |row: &rusqlite::Row| {
            row.get::<_, String>(0)
        }) {
            Ok(v) => Ok(Some(v)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(LabReportError::Storage(format!("Query error: {}", e))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Field;

    #[test]
    fn test_load_without_saved_record_returns_sample() {
        let storage = Storage::in_memory().unwrap();
        let record = storage.load_record().unwrap();
        assert_eq!(record, ReportRecord::sample());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let storage = Storage::in_memory().unwrap();
        let record = ReportRecord::sample().with_field(Field::Semester, "Spring 2026");
        storage.save_record(&record).unwrap();

        assert_eq!(storage.load_record().unwrap(), record);
    }

    #[test]
    fn test_saved_blob_parses_back_to_record() {
        let storage = Storage::in_memory().unwrap();
        let record = ReportRecord::sample().with_field(Field::Name, "Another Student");
        storage.save_record(&record).unwrap();

        let blob = storage.get_value(RECORD_KEY).unwrap().unwrap();
        let parsed: ReportRecord = serde_json::from_str(&blob).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_save_replaces_previous_record() {
        let storage = Storage::in_memory().unwrap();
        storage
            .save_record(&ReportRecord::sample().with_field(Field::Id, "first"))
            .unwrap();
        storage
            .save_record(&ReportRecord::sample().with_field(Field::Id, "second"))
            .unwrap();

        assert_eq!(storage.load_record().unwrap().id, "second");
    }

    #[test]
    fn test_load_with_partial_blob_reads_missing_fields_empty() {
        let storage = Storage::in_memory().unwrap();
        storage
            .set_value(RECORD_KEY, r#"{"university": "Elsewhere Institute"}"#)
            .unwrap();

        let record = storage.load_record().unwrap();
        assert_eq!(record.university, "Elsewhere Institute");
        assert_eq!(record.lab_title, "");
        assert_eq!(record.submitted_to, "");
    }

    #[test]
    fn test_load_with_invalid_blob_is_an_error() {
        let storage = Storage::in_memory().unwrap();
        storage.set_value(RECORD_KEY, "not json at all").unwrap();

        assert!(storage.load_record().is_err());
    }

    #[test]
    fn test_clear_record() {
        let storage = Storage::in_memory().unwrap();
        assert!(!storage.clear_record().unwrap());

        storage.save_record(&ReportRecord::sample()).unwrap();
        assert!(storage.clear_record().unwrap());
        assert_eq!(storage.load_record().unwrap(), ReportRecord::sample());
    }

    #[test]
    fn test_last_saved_at_tracks_saves() {
        let storage = Storage::in_memory().unwrap();
        assert!(storage.last_saved_at().unwrap().is_none());

        storage.save_record(&ReportRecord::sample()).unwrap();
        assert!(storage.last_saved_at().unwrap().is_some());
    }

    #[test]
    fn test_persists_across_file_reopen() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("labreport.db");
        let path = path.to_str().unwrap();

        let record = ReportRecord::sample().with_field(Field::Program, "M.Sc in CSE");
        {
            let storage = Storage::new(path).unwrap();
            storage.save_record(&record).unwrap();
        }

        let reopened = Storage::new(path).unwrap();
        assert_eq!(reopened.load_record().unwrap(), record);
    }
}
