pub mod calculator;
pub mod countdown;
pub mod grade;
pub mod history;

use std::sync::{Mutex, MutexGuard};

use crate::session::Session;

/// Session shared by every command.
pub struct AppState {
    pub session: Mutex<Session>,
}

impl AppState {
    pub fn new(session: Session) -> Self {
        Self {
            session: Mutex::new(session),
        }
    }

    pub fn session(&self) -> Result<MutexGuard<'_, Session>, String> {
        self.session
            .lock()
            .map_err(|e| format!("Session lock poisoned: {}", e))
    }
}
