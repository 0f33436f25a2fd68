//! Grade formulas for each scheme.

use super::tips::select_tip;
use super::types::{GradeError, GradeOutcome, Scheme, Weight};

/// Share of the primary average under the standard scheme.
const STANDARD_PRIMARY_SHARE: f64 = 0.4;
/// Share of the secondary score under the standard scheme.
const STANDARD_SECONDARY_SHARE: f64 = 0.6;

/// Arithmetic mean, `0.0` for an empty slice.
pub fn average(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Apply `scheme` to the parsed scores.
///
/// `weight` is only read by [`Scheme::Custom`]. An absent secondary score
/// counts as zero in the weighted schemes and is left out of the mean in
/// [`Scheme::Other`].
pub fn compute(
    scheme: Scheme,
    scores: &[f64],
    secondary: Option<f64>,
    weight: Weight,
) -> Result<f64, GradeError> {
    if scheme.requires_primary() && scores.is_empty() {
        return Err(GradeError::MissingPrimaryScores);
    }

    let grade = match scheme {
        Scheme::Standard => {
            average(scores) * STANDARD_PRIMARY_SHARE
                + secondary.unwrap_or(0.0) * STANDARD_SECONDARY_SHARE
        }
        Scheme::Custom => {
            let primary_share = weight.primary_fraction();
            average(scores) * primary_share + secondary.unwrap_or(0.0) * (1.0 - primary_share)
        }
        Scheme::Other => {
            let mut all: Vec<f64> = scores.to_vec();
            all.extend(secondary);
            if all.is_empty() {
                return Err(GradeError::MissingPrimaryScores);
            }
            average(&all)
        }
    };

    Ok(grade)
}

/// Compute the grade and attach its display form and tip.
pub fn evaluate(
    scheme: Scheme,
    scores: &[f64],
    secondary: Option<f64>,
    weight: Weight,
) -> Result<GradeOutcome, GradeError> {
    let value = compute(scheme, scores, secondary, weight)?;
    Ok(GradeOutcome {
        value,
        display: format!("{:.2}", value),
        tip: select_tip(value, scores, secondary),
    })
}
