use tauri::{AppHandle, Emitter, State};
use tracing::warn;

use crate::countdown::{parse_target, CountdownTimer};

/// Event carrying each [`crate::countdown::CountdownTick`].
pub const TICK_EVENT: &str = "countdown-tick";

/// Start counting down to `target`. Returns `false` when the date could not
/// be read, in which case nothing changes.
#[tauri::command]
pub async fn start_countdown(
    app: AppHandle,
    timer: State<'_, CountdownTimer>,
    target: String,
) -> Result<bool, String> {
    let Some(target) = parse_target(&target) else {
        return Ok(false);
    };

    timer.start(target, move |tick| {
        if let Err(e) = app.emit(TICK_EVENT, tick) {
            warn!("Failed to emit countdown tick: {}", e);
        }
    })?;
    Ok(true)
}

#[tauri::command]
pub async fn stop_countdown(timer: State<'_, CountdownTimer>) -> Result<(), String> {
    timer.stop()?;
    Ok(())
}
