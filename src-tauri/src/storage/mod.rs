//! Key-value string persistence.
//!
//! Everything the app remembers between launches lives under a handful of
//! fixed keys. [`SqliteStorage`] is the durable backend; [`MemoryStorage`]
//! keeps the app usable for a session when the database cannot be opened.

mod memory;
mod sqlite;

pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;

use crate::error::GradebookError;

/// Key holding the selected language tag.
pub const LANGUAGE_KEY: &str = "lang";
/// Key holding the dark theme flag (`"true"` / `"false"`).
pub const DARK_KEY: &str = "dark";
/// Key holding the JSON-serialized history sequence.
pub const HISTORY_KEY: &str = "history";

/// A string key-value store.
pub trait Storage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, GradebookError>;

    fn set(&self, key: &str, value: &str) -> Result<(), GradebookError>;
}
