use crate::errors::LabReportError;
use rusqlite::Connection;
use std::path::Path;
use std::sync::{Arc, Mutex};

/// The on-disk persistence layer: a single SQLite file holding a key-value
/// `storage` table, the local-storage analogue for a self-hosted tool.
pub struct Storage {
    pub(crate) conn: Arc<Mutex<Connection>>,
}

impl Storage {
    pub fn new(path: &str) -> Result<Self, LabReportError> {
        // Ensure parent directory exists
        if let Some(parent) = Path::new(path).parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)
            .map_err(|e| LabReportError::Storage(format!("Failed to open database: {}", e)))?;

        conn.execute_batch("PRAGMA journal_mode=WAL;")
            .map_err(|e| LabReportError::Storage(format!("Failed to set pragmas: {}", e)))?;

        let storage = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        storage.initialize()?;
        Ok(storage)
    }

    pub fn in_memory() -> Result<Self, LabReportError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| LabReportError::Storage(format!("Failed to open in-memory db: {}", e)))?;
        let storage = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        storage.initialize()?;
        Ok(storage)
    }

    fn initialize(&self) -> Result<(), LabReportError> {
        let conn = self.conn.lock().unwrap();
        conn.execute_batch(super::schema::CREATE_TABLES)
            .map_err(|e| LabReportError::Storage(format!("Failed to create tables: {}", e)))?;
        Ok(())
    }
}

impl Clone for Storage {
    fn clone(&self) -> Self {
        Self {
            conn: self.conn.clone(),
        }
    }
}
