use std::sync::Arc;

use tracing::{info, warn};

use super::types::{HistoryEntry, Persistence};
use crate::storage::{Storage, HISTORY_KEY};

/// Append-only history of saved results, mirrored to [`Storage`].
///
/// The full sequence is rewritten on every mutation, so what is on disk
/// always matches what `all()` returns unless a write failed.
pub struct HistoryStore {
    storage: Arc<dyn Storage>,
    entries: Vec<HistoryEntry>,
}

impl HistoryStore {
    /// Load the persisted history. Missing or malformed data yields an
    /// empty history.
    pub fn load(storage: Arc<dyn Storage>) -> Self {
        let entries = match storage.get(HISTORY_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<HistoryEntry>>(&raw) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!("Discarding malformed history ({} bytes): {}", raw.len(), e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Failed to read history, starting empty: {}", e);
                Vec::new()
            }
        };

        info!("Loaded {} history entries", entries.len());
        Self { storage, entries }
    }

    /// Add an entry to the end and persist the whole sequence.
    pub fn append(&mut self, entry: HistoryEntry) -> Persistence {
        self.entries.push(entry);
        info!("Appended history entry #{}", self.entries.len());
        self.flush()
    }

    /// Drop every entry and persist the empty sequence.
    pub fn clear(&mut self) -> Persistence {
        let removed = self.entries.len();
        self.entries.clear();
        info!("Cleared {} history entries", removed);
        self.flush()
    }

    /// Entries in insertion order.
    pub fn all(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn flush(&self) -> Persistence {
        let serialized = match serde_json::to_string(&self.entries) {
            Ok(json) => json,
            Err(e) => {
                warn!("Failed to serialize history: {}", e);
                return Persistence::SessionOnly;
            }
        };

        match self.storage.set(HISTORY_KEY, &serialized) {
            Ok(()) => Persistence::Durable,
            Err(e) => {
                warn!("History kept in memory only: {}", e);
                Persistence::SessionOnly
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GradebookError;
    use crate::grading::Scheme;
    use crate::storage::{MemoryStorage, SqliteStorage};
    use tempfile::TempDir;

    struct ReadOnlyStorage;

    impl Storage for ReadOnlyStorage {
        fn get(&self, _key: &str) -> Result<Option<String>, GradebookError> {
            Ok(None)
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), GradebookError> {
            Err(GradebookError::Storage("quota exceeded".to_string()))
        }
    }

    fn entry(grade: f64) -> HistoryEntry {
        HistoryEntry::new(vec![grade], Some(grade), grade, Scheme::Standard)
    }

    #[test]
    fn test_append_persists_immediately() {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        let mut store = HistoryStore::load(storage.clone());

        assert_eq!(store.append(entry(76.0)), Persistence::Durable);
        assert_eq!(store.append(entry(30.0)), Persistence::Durable);

        let reloaded = HistoryStore::load(storage);
        assert_eq!(reloaded.all(), store.all());
        assert_eq!(reloaded.all()[0].grade, 76.0);
        assert_eq!(reloaded.all()[1].grade, 30.0);
    }

    #[test]
    fn test_all_is_stable_between_mutations() {
        let mut store = HistoryStore::load(Arc::new(MemoryStorage::new()));
        store.append(entry(50.0));

        let first = store.all().to_vec();
        let second = store.all().to_vec();
        assert_eq!(first, second);
    }

    #[test]
    fn test_append_then_clear_is_empty() {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        let mut store = HistoryStore::load(storage.clone());
        store.append(entry(10.0));
        store.append(entry(20.0));

        assert_eq!(store.clear(), Persistence::Durable);
        assert!(store.all().is_empty());
        assert!(HistoryStore::load(storage).is_empty());
    }

    #[test]
    fn test_malformed_history_treated_as_empty() {
        let storage = MemoryStorage::new();
        storage.set(HISTORY_KEY, "{not json").unwrap();

        let store = HistoryStore::load(Arc::new(storage));
        assert!(store.is_empty());
    }

    #[test]
    fn test_write_failure_degrades_to_session() {
        let mut store = HistoryStore::load(Arc::new(ReadOnlyStorage));

        assert_eq!(store.append(entry(88.0)), Persistence::SessionOnly);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_sqlite_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gradebook.db");

        {
            let storage: Arc<dyn Storage> = Arc::new(SqliteStorage::open(&path).unwrap());
            let mut store = HistoryStore::load(storage);
            store.append(HistoryEntry::new(vec![80.0, 90.0], Some(70.0), 76.0, Scheme::Standard));
            store.append(HistoryEntry::new(vec![100.0], None, 30.0, Scheme::Custom));
        }

        let storage: Arc<dyn Storage> = Arc::new(SqliteStorage::open(&path).unwrap());
        let store = HistoryStore::load(storage);
        assert_eq!(store.len(), 2);
        assert_eq!(store.all()[0].scores, vec![80.0, 90.0]);
        assert_eq!(store.all()[1].secondary, 0.0);
        assert_eq!(store.all()[1].scheme, Scheme::Custom);
    }
}
