use std::path::Path;
use std::sync::Mutex;

use rusqlite::{params, Connection, OptionalExtension};
use tracing::{debug, info};

use super::Storage;
use crate::error::GradebookError;

/// SQLite-backed key-value store.
/// Every write is committed before `set` returns.
pub struct SqliteStorage {
    conn: Mutex<Connection>,
}

impl SqliteStorage {
    /// Create or open the database at `db_path`.
    /// Typically called with: app.path().app_data_dir()?.join("gradebook.db")
    pub fn open(db_path: &Path) -> Result<Self, GradebookError> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                GradebookError::Storage(format!("Failed to create data dir: {}", e))
            })?;
        }

        let conn = Connection::open(db_path)?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at TEXT NOT NULL DEFAULT (datetime('now'))
            )",
            [],
        )?;

        info!("Opened gradebook database at {:?}", db_path);
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn connection(&self) -> Result<std::sync::MutexGuard<'_, Connection>, GradebookError> {
        self.conn
            .lock()
            .map_err(|e| GradebookError::Storage(format!("Database lock poisoned: {}", e)))
    }
}

impl Storage for SqliteStorage {
    fn get(&self, key: &str) -> Result<Option<String>, GradebookError> {
        let conn = self.connection()?;
        let value = conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), GradebookError> {
        let conn = self.connection()?;
        conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = datetime('now')",
            params![key, value],
        )?;
        debug!("Stored {} bytes under key {}", value.len(), key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_storage() -> (SqliteStorage, TempDir) {
        let dir = TempDir::new().unwrap();
        let storage = SqliteStorage::open(&dir.path().join("gradebook.db")).unwrap();
        (storage, dir)
    }

    #[test]
    fn test_missing_key_is_none() {
        let (storage, _dir) = create_test_storage();
        assert_eq!(storage.get("history").unwrap(), None);
    }

    #[test]
    fn test_set_overwrites() {
        let (storage, _dir) = create_test_storage();

        storage.set("dark", "false").unwrap();
        storage.set("dark", "true").unwrap();
        assert_eq!(storage.get("dark").unwrap(), Some("true".to_string()));
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("gradebook.db");

        {
            let storage = SqliteStorage::open(&path).unwrap();
            storage.set("lang", "en").unwrap();
        }

        let reopened = SqliteStorage::open(&path).unwrap();
        assert_eq!(reopened.get("lang").unwrap(), Some("en".to_string()));
    }
}
