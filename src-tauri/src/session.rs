//! Application state and the intent controller.
//!
//! The frontend never mutates state directly. It sends an [`Intent`],
//! [`Session::handle`] maps it onto the grading and history calls, and the
//! resulting [`Update`] tells the frontend what to re-render.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::grading::{self, GradeError, GradeOutcome, Scheme, Weight};
use crate::history::{HistoryEntry, HistoryStore, Persistence};
use crate::preferences::{Language, PreferenceStore, Preferences};
use crate::storage::Storage;

/// Raw values of the grade form, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GradeForm {
    pub scores: String,
    #[serde(default)]
    pub secondary: String,
    #[serde(default)]
    pub scheme: Scheme,
    #[serde(default = "default_weight")]
    pub weight: u8,
}

fn default_weight() -> u8 {
    Weight::default().primary()
}

/// Something the user asked for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum Intent {
    Compute(GradeForm),
    Save(GradeForm),
    ClearHistory,
    SetLanguage(Language),
    SetDark(bool),
}

/// User-facing message keys. The frontend owns the wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Notice {
    MissingPrimaryScores,
    Saved,
    Cleared,
}

/// New history contents after a save or clear.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryChange {
    pub notice: Notice,
    pub entries: Vec<HistoryEntry>,
    pub persistence: Persistence,
}

/// What changed as a result of an intent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum Update {
    Computed(GradeOutcome),
    Notice(Notice),
    HistoryChanged(HistoryChange),
    Preferences(Preferences),
}

/// The last successful computation and the form it came from.
struct CurrentResult {
    form: GradeForm,
    outcome: GradeOutcome,
}

/// Everything the app keeps between intents.
pub struct Session {
    preferences: PreferenceStore,
    history: HistoryStore,
    current: Option<CurrentResult>,
}

impl Session {
    pub fn open(storage: Arc<dyn Storage>) -> Self {
        Self {
            preferences: PreferenceStore::load(storage.clone()),
            history: HistoryStore::load(storage),
            current: None,
        }
    }

    /// Apply an intent. Only a malformed request is an error; a missing
    /// score is reported as [`Notice::MissingPrimaryScores`].
    pub fn handle(&mut self, intent: Intent) -> Result<Update, GradeError> {
        match intent {
            Intent::Compute(form) => self.compute(&form),
            Intent::Save(form) => self.save(&form),
            Intent::ClearHistory => Ok(self.clear_history()),
            Intent::SetLanguage(language) => {
                if let Err(e) = self.preferences.set_language(language) {
                    warn!("Language change not persisted: {}", e);
                }
                Ok(Update::Preferences(self.preferences.current()))
            }
            Intent::SetDark(dark) => {
                if let Err(e) = self.preferences.set_dark(dark) {
                    warn!("Theme change not persisted: {}", e);
                }
                Ok(Update::Preferences(self.preferences.current()))
            }
        }
    }

    pub fn preferences(&self) -> Preferences {
        self.preferences.current()
    }

    pub fn history(&self) -> &[HistoryEntry] {
        self.history.all()
    }

    pub fn current(&self) -> Option<&GradeOutcome> {
        self.current.as_ref().map(|current| &current.outcome)
    }

    fn compute(&mut self, form: &GradeForm) -> Result<Update, GradeError> {
        let weight = Weight::new(form.weight)?;
        let scores = grading::parse_scores(&form.scores);
        let secondary = grading::parse_secondary(&form.secondary);

        match grading::evaluate(form.scheme, &scores, secondary, weight) {
            Ok(outcome) => {
                debug!(
                    "Computed {} under {} from {} scores",
                    outcome.display,
                    form.scheme.as_str(),
                    scores.len()
                );
                self.current = Some(CurrentResult {
                    form: form.clone(),
                    outcome: outcome.clone(),
                });
                Ok(Update::Computed(outcome))
            }
            Err(GradeError::MissingPrimaryScores) => {
                self.current = None;
                Ok(Update::Notice(Notice::MissingPrimaryScores))
            }
            Err(e) => Err(e),
        }
    }

    /// Record the current result. Computes first when nothing has been
    /// computed for this form yet.
    fn save(&mut self, form: &GradeForm) -> Result<Update, GradeError> {
        let up_to_date = self
            .current
            .as_ref()
            .is_some_and(|current| current.form == *form);
        if !up_to_date {
            self.compute(form)?;
        }

        let Some(outcome) = self.current() else {
            info!("Save skipped: nothing computed");
            return Ok(Update::Notice(Notice::MissingPrimaryScores));
        };

        let entry = HistoryEntry::new(
            grading::parse_scores(&form.scores),
            grading::parse_secondary(&form.secondary),
            outcome.value,
            form.scheme,
        );
        let persistence = self.history.append(entry);

        Ok(Update::HistoryChanged(HistoryChange {
            notice: Notice::Saved,
            entries: self.history.all().to_vec(),
            persistence,
        }))
    }

    fn clear_history(&mut self) -> Update {
        let persistence = self.history.clear();
        Update::HistoryChanged(HistoryChange {
            notice: Notice::Cleared,
            entries: Vec::new(),
            persistence,
        })
    }

    /// Text handed to the share sheet or clipboard.
    pub fn share_text(&self) -> String {
        share_text(self.current().map(|outcome| outcome.display.as_str()))
    }
}

pub fn share_text(display: Option<&str>) -> String {
    format!(
        "My academic grade: {}",
        display.unwrap_or("Not calculated yet")
    )
}
