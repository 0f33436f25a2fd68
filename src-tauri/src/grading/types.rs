use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lower bound of a valid score.
pub const MIN_SCORE: f64 = 0.0;
/// Upper bound of a valid score.
pub const MAX_SCORE: f64 = 100.0;

/// Primary scores that survived parsing. Every value is in `[0, 100]`.
pub type ScoreList = Vec<f64>;

/// Grading formula selector.
///
/// `az` is the historic tag of the standard scheme and is accepted on input.
/// Unrecognized tags fall back to [`Scheme::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scheme {
    #[default]
    #[serde(alias = "az")]
    Standard,
    Custom,
    #[serde(other)]
    Other,
}

impl Scheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Standard => "standard",
            Scheme::Custom => "custom",
            Scheme::Other => "other",
        }
    }

    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "standard" | "az" => Scheme::Standard,
            "custom" => Scheme::Custom,
            _ => Scheme::Other,
        }
    }

    /// Whether the scheme refuses to compute without primary scores.
    pub fn requires_primary(&self) -> bool {
        matches!(self, Scheme::Standard | Scheme::Custom)
    }
}

/// Percentage of the final grade carried by the primary average.
///
/// The secondary share is always derived as `100 - weight`, so the two
/// can never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Weight(u8);

impl Weight {
    pub const MAX: u8 = 100;

    pub fn new(percent: u8) -> Result<Self, GradeError> {
        if percent > Self::MAX {
            return Err(GradeError::WeightOutOfRange(percent));
        }
        Ok(Self(percent))
    }

    pub fn primary(&self) -> u8 {
        self.0
    }

    pub fn secondary(&self) -> u8 {
        Self::MAX - self.0
    }

    pub fn primary_fraction(&self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl Default for Weight {
    /// Mirrors the fixed split of the standard scheme.
    fn default() -> Self {
        Self(40)
    }
}

impl TryFrom<u8> for Weight {
    type Error = GradeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Weight::new(value)
    }
}

impl From<Weight> for u8 {
    fn from(weight: Weight) -> Self {
        weight.0
    }
}

/// Conditions the engine reports instead of a grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GradeError {
    #[error("Enter at least one primary score")]
    MissingPrimaryScores,

    #[error("Weight {0} is outside 0-100")]
    WeightOutOfRange(u8),
}

impl From<GradeError> for String {
    fn from(err: GradeError) -> Self {
        err.to_string()
    }
}

/// Advisory hint shown next to the result. Localized by the frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tip {
    Excellent,
    ImprovePrimary,
    ImproveSecondary,
    EnterScores,
}

/// A successful computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeOutcome {
    /// Unrounded grade, kept for saving.
    pub value: f64,
    /// Grade formatted with two decimals.
    pub display: String,
    pub tip: Tip,
}
