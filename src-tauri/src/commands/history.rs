//! Tauri commands for reading and exporting the grade history.

use tauri::State;
use tracing::info;

use super::AppState;
use crate::history::{self, HistoryEntry};

/// All saved entries, oldest first.
#[tauri::command]
pub fn get_history(state: State<'_, AppState>) -> Result<Vec<HistoryEntry>, String> {
    let session = state.session()?;
    let entries = session.history().to_vec();
    info!("Listed {} history entries", entries.len());
    Ok(entries)
}

/// CSV rendering of the history, or `None` when it is empty.
#[tauri::command]
pub fn export_history_csv(state: State<'_, AppState>) -> Result<Option<String>, String> {
    let session = state.session()?;
    let csv = history::to_csv(session.history());
    info!(
        "Exported history: {}",
        csv.as_ref()
            .map(|c| format!("{} bytes", c.len()))
            .unwrap_or_else(|| "nothing to export".to_string())
    );
    Ok(csv)
}
