pub mod calculator;
mod commands;
pub mod countdown;
mod error;
pub mod grading;
pub mod history;
pub mod offline;
pub mod preferences;
pub mod session;
pub mod storage;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use tauri::Manager;

pub use error::GradebookError;
pub use history::{HistoryEntry, HistoryStore, Persistence};
pub use session::{GradeForm, Intent, Session, Update};

use commands::AppState;
use countdown::CountdownTimer;
use storage::{MemoryStorage, SqliteStorage, Storage};

const DATABASE_FILE: &str = "gradebook.db";

/// Open the on-disk store, or fall back to session-only memory storage.
fn open_storage(data_dir: anyhow::Result<PathBuf>) -> Arc<dyn Storage> {
    let opened = data_dir.and_then(|dir| {
        let path = dir.join(DATABASE_FILE);
        SqliteStorage::open(&path)
            .with_context(|| format!("Failed to open database at {:?}", path))
    });

    match opened {
        Ok(storage) => Arc::new(storage),
        Err(e) => {
            tracing::warn!("Falling back to in-memory storage: {:#}", e);
            Arc::new(MemoryStorage::new())
        }
    }
}

pub fn run() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tauri::Builder::default()
        .manage(CountdownTimer::new())
        .invoke_handler(tauri::generate_handler![
            commands::grade::dispatch,
            commands::grade::get_preferences,
            commands::grade::share_text,
            commands::history::get_history,
            commands::history::export_history_csv,
            commands::calculator::press_calculator_key,
            commands::countdown::start_countdown,
            commands::countdown::stop_countdown,
        ])
        .setup(|app| {
            let data_dir = app
                .path()
                .app_data_dir()
                .context("No app data directory");
            let storage = open_storage(data_dir);
            app.manage(AppState::new(Session::open(storage)));
            Ok(())
        })
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_storage_uses_database() {
        let dir = TempDir::new().unwrap();
        let storage = open_storage(Ok(dir.path().to_path_buf()));
        storage.set("lang", "en").unwrap();

        assert!(dir.path().join(DATABASE_FILE).exists());
    }

    #[test]
    fn test_open_storage_degrades_to_memory() {
        let storage = open_storage(Err(anyhow::anyhow!("no data dir")));
        storage.set("dark", "true").unwrap();
        assert_eq!(storage.get("dark").unwrap(), Some("true".to_string()));
    }
}
