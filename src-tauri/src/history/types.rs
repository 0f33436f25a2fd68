use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::grading::Scheme;

/// One saved computation. Never modified after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub timestamp: DateTime<Utc>,
    /// Primary scores as parsed when the entry was saved.
    pub scores: Vec<f64>,
    /// Secondary score, `0.0` when none was entered.
    pub secondary: f64,
    /// Unrounded final grade.
    pub grade: f64,
    pub scheme: Scheme,
}

impl HistoryEntry {
    pub fn new(scores: Vec<f64>, secondary: Option<f64>, grade: f64, scheme: Scheme) -> Self {
        Self {
            timestamp: Utc::now(),
            scores,
            secondary: secondary.unwrap_or(0.0),
            grade,
            scheme,
        }
    }
}

/// Whether a history mutation reached durable storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Persistence {
    Durable,
    /// The write failed; the change only lives in this session.
    SessionOnly,
}
