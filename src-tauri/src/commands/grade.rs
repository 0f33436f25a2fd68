//! Tauri commands for the grade form and preferences.

use tauri::State;
use tracing::info;

use super::AppState;
use crate::preferences::Preferences;
use crate::session::{Intent, Update};

/// Apply a user intent and return what the UI should re-render.
#[tauri::command]
pub fn dispatch(state: State<'_, AppState>, intent: Intent) -> Result<Update, String> {
    let mut session = state.session()?;
    let update = session.handle(intent)?;
    Ok(update)
}

#[tauri::command]
pub fn get_preferences(state: State<'_, AppState>) -> Result<Preferences, String> {
    let prefs = state.session()?.preferences();
    info!(
        "Preferences requested: language={}, dark={}",
        prefs.language.as_str(),
        prefs.dark
    );
    Ok(prefs)
}

/// Text for the share sheet or clipboard.
#[tauri::command]
pub fn share_text(state: State<'_, AppState>) -> Result<String, String> {
    Ok(state.session()?.share_text())
}
