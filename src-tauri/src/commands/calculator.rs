use crate::calculator::{self, Key};

/// Apply one keypad press and return the new display text.
#[tauri::command]
pub fn press_calculator_key(display: String, key: String) -> String {
    calculator::press(&display, &Key::from_label(&key))
}
