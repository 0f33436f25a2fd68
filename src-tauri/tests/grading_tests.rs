use std::sync::Arc;

use gradebook_tauri::grading::{compute, parse_scores, GradeError, Scheme, Weight};
use gradebook_tauri::history::{HistoryEntry, HistoryStore};
use gradebook_tauri::session::{GradeForm, Intent, Notice, Session, Update};
use gradebook_tauri::storage::{MemoryStorage, SqliteStorage, Storage, HISTORY_KEY};
use tempfile::TempDir;

fn form(scores: &str, secondary: &str, scheme: Scheme, weight: u8) -> GradeForm {
    GradeForm {
        scores: scores.to_string(),
        secondary: secondary.to_string(),
        scheme,
        weight,
    }
}

#[test]
fn test_parse_filters_documented_example() {
    assert_eq!(parse_scores("90, 105, -3, abc, 77.5"), vec![90.0, 77.5]);
    assert!(parse_scores("").is_empty());
}

#[test]
fn test_standard_and_custom_examples() {
    let standard = compute(Scheme::Standard, &[80.0, 90.0], Some(70.0), Weight::default()).unwrap();
    assert_eq!(format!("{:.2}", standard), "76.00");

    let custom = compute(Scheme::Custom, &[100.0], Some(0.0), Weight::new(30).unwrap()).unwrap();
    assert_eq!(format!("{:.2}", custom), "30.00");
}

#[test]
fn test_complementary_weight_is_exact() {
    for percent in 0..=100u8 {
        let weight = Weight::new(percent).unwrap();
        assert_eq!(weight.primary() + weight.secondary(), 100);
        assert_eq!(weight.secondary(), 100 - percent);
    }
    assert_eq!(Weight::new(101), Err(GradeError::WeightOutOfRange(101)));
}

#[test]
fn test_missing_scores_blocks_save() {
    let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
    let mut session = Session::open(storage.clone());

    let computed = session
        .handle(Intent::Compute(form("", "70", Scheme::Standard, 40)))
        .unwrap();
    assert_eq!(computed, Update::Notice(Notice::MissingPrimaryScores));

    let saved = session
        .handle(Intent::Save(form("", "70", Scheme::Standard, 40)))
        .unwrap();
    assert_eq!(saved, Update::Notice(Notice::MissingPrimaryScores));

    assert!(session.history().is_empty());
    assert_eq!(storage.get(HISTORY_KEY).unwrap(), None);
}

#[test]
fn test_history_survives_restart() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("gradebook.db");

    {
        let storage: Arc<dyn Storage> = Arc::new(SqliteStorage::open(&path).unwrap());
        let mut session = Session::open(storage);
        session
            .handle(Intent::Save(form("80, 90", "70", Scheme::Standard, 40)))
            .unwrap();
        session
            .handle(Intent::Save(form("100", "", Scheme::Custom, 30)))
            .unwrap();
    }

    let storage: Arc<dyn Storage> = Arc::new(SqliteStorage::open(&path).unwrap());
    let session = Session::open(storage);
    let grades: Vec<String> = session
        .history()
        .iter()
        .map(|entry| format!("{:.2}", entry.grade))
        .collect();
    assert_eq!(grades, vec!["76.00", "30.00"]);
}

#[test]
fn test_append_clear_all_is_empty() {
    let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
    let mut store = HistoryStore::load(storage.clone());

    store.append(HistoryEntry::new(vec![55.0], Some(65.0), 61.0, Scheme::Standard));
    store.clear();

    assert!(store.all().is_empty());
    assert_eq!(store.all(), store.all());
    assert!(HistoryStore::load(storage).all().is_empty());
}

#[test]
fn test_legacy_scheme_tags_load() {
    let storage = MemoryStorage::new();
    storage
        .set(
            HISTORY_KEY,
            r#"[
                {"timestamp":"2026-01-10T12:00:00Z","scores":[80.0],"secondary":70.0,"grade":74.0,"scheme":"az"},
                {"timestamp":"2026-01-11T12:00:00Z","scores":[60.0],"secondary":0.0,"grade":60.0,"scheme":"us"}
            ]"#,
        )
        .unwrap();

    let store = HistoryStore::load(Arc::new(storage));
    assert_eq!(store.len(), 2);
    assert_eq!(store.all()[0].scheme, Scheme::Standard);
    assert_eq!(store.all()[1].scheme, Scheme::Other);
}
