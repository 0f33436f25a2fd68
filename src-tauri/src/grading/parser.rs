use super::types::{ScoreList, MAX_SCORE, MIN_SCORE};

/// Parse comma-separated primary scores.
///
/// Tokens are trimmed and converted whole. Anything that fails conversion,
/// is NaN, or lies outside `[0, 100]` is dropped; the filtered list is the
/// result, never an error.
pub fn parse_scores(raw: &str) -> ScoreList {
    if raw.trim().is_empty() {
        return Vec::new();
    }

    raw.split(',')
        .filter_map(|token| token.trim().parse::<f64>().ok())
        .filter(|value| (MIN_SCORE..=MAX_SCORE).contains(value))
        .collect()
}

/// Parse the optional secondary score. Empty or unparsable input is absent.
pub fn parse_secondary(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}
