//! Delimited-text export of the history.

use super::types::HistoryEntry;

const HEADER: &str = "Date,KSQ,BSQ,Final,Scheme";
const SCORE_DELIMITER: &str = ";";

/// Render the history as CSV. Returns `None` when there is nothing to export.
pub fn to_csv(entries: &[HistoryEntry]) -> Option<String> {
    if entries.is_empty() {
        return None;
    }

    let mut lines = Vec::with_capacity(entries.len() + 1);
    lines.push(HEADER.to_string());

    for entry in entries {
        let scores = entry
            .scores
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(SCORE_DELIMITER);

        lines.push(format!(
            "{},{},{},{},{}",
            entry.timestamp.to_rfc3339(),
            scores,
            entry.secondary,
            entry.grade,
            entry.scheme.as_str()
        ));
    }

    Some(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grading::Scheme;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_empty_history_exports_nothing() {
        assert_eq!(to_csv(&[]), None);
    }

    #[test]
    fn test_rows_follow_header() {
        let entries = vec![
            HistoryEntry {
                timestamp: Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap(),
                scores: vec![80.0, 90.0],
                secondary: 70.0,
                grade: 76.0,
                scheme: Scheme::Standard,
            },
            HistoryEntry {
                timestamp: Utc.with_ymd_and_hms(2026, 3, 2, 10, 0, 0).unwrap(),
                scores: vec![77.5],
                secondary: 0.0,
                grade: 23.25,
                scheme: Scheme::Custom,
            },
        ];

        let csv = to_csv(&entries).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Date,KSQ,BSQ,Final,Scheme");
        assert_eq!(lines[1], "2026-03-01T09:30:00+00:00,80;90,70,76,standard");
        assert_eq!(lines[2], "2026-03-02T10:00:00+00:00,77.5,0,23.25,custom");
    }
}
