use super::engine::average;
use super::types::Tip;

/// Final grades at or above this earn the excellent tip.
const EXCELLENT_THRESHOLD: f64 = 90.0;

/// Pick the advisory tip for a computed grade.
///
/// When both inputs are present the lower of the primary average and the
/// secondary score names the improvement target; a tie points at the
/// secondary score.
pub fn select_tip(final_grade: f64, scores: &[f64], secondary: Option<f64>) -> Tip {
    if final_grade >= EXCELLENT_THRESHOLD {
        return Tip::Excellent;
    }

    match secondary {
        Some(secondary) if !scores.is_empty() => {
            if average(scores) < secondary {
                Tip::ImprovePrimary
            } else {
                Tip::ImproveSecondary
            }
        }
        _ => Tip::EnterScores,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excellent_wins() {
        assert_eq!(select_tip(90.0, &[10.0], Some(100.0)), Tip::Excellent);
        assert_eq!(select_tip(95.5, &[], None), Tip::Excellent);
    }

    #[test]
    fn test_lower_component_is_target() {
        assert_eq!(select_tip(60.0, &[50.0, 60.0], Some(80.0)), Tip::ImprovePrimary);
        assert_eq!(select_tip(60.0, &[80.0], Some(50.0)), Tip::ImproveSecondary);
    }

    #[test]
    fn test_tie_targets_secondary() {
        assert_eq!(select_tip(70.0, &[70.0], Some(70.0)), Tip::ImproveSecondary);
    }

    #[test]
    fn test_generic_tip_without_both_inputs() {
        assert_eq!(select_tip(40.0, &[80.0], None), Tip::EnterScores);
        assert_eq!(select_tip(40.0, &[], Some(40.0)), Tip::EnterScores);
    }
}
