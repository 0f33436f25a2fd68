use std::collections::HashMap;
use std::sync::Mutex;

use super::Storage;
use crate::error::GradebookError;

/// Process-local storage. Contents vanish when the app exits.
#[derive(Default)]
pub struct MemoryStorage {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, GradebookError> {
        let values = self
            .values
            .lock()
            .map_err(|e| GradebookError::Storage(format!("Memory store poisoned: {}", e)))?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), GradebookError> {
        let mut values = self
            .values
            .lock()
            .map_err(|e| GradebookError::Storage(format!("Memory store poisoned: {}", e)))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
