use thiserror::Error;

#[derive(Debug, Error)]
pub enum GradebookError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Countdown error: {0}")]
    Countdown(String),
}

impl From<GradebookError> for String {
    fn from(err: GradebookError) -> Self {
        err.to_string()
    }
}

impl From<rusqlite::Error> for GradebookError {
    fn from(err: rusqlite::Error) -> Self {
        GradebookError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for GradebookError {
    fn from(err: serde_json::Error) -> Self {
        GradebookError::Serialization(err.to_string())
    }
}
