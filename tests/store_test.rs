mod common;

use chrono::Utc;
use fitcalc::core::macros::GoalProfile;
use fitcalc::models::profile::{Goals, ProfileUpdate};
use fitcalc::models::settings::{Settings, UnitSystem};
use fitcalc::models::tracking::{TrackingUpdate, WeightEntry};
use fitcalc::store::{
    KeyValueBackend, MemoryBackend, PROFILE_KEY, SCHEMA_VERSION, SETTINGS_KEY, SqliteBackend,
    Store, TRACKING_KEY, VERSION_KEY,
};

fn weight(d: u32, w: f64) -> WeightEntry {
    WeightEntry {
        date: common::date(2026, 6, d),
        weight: w,
        note: None,
    }
}

// ── version stamp ───────────────────────────────────────────────────────────

#[test]
fn test_new_store_stamps_version() {
    let store = common::memory_store();
    assert_eq!(store.schema_version().unwrap().as_deref(), Some(SCHEMA_VERSION));
}

#[test]
fn test_existing_version_is_left_alone() {
    let backend = MemoryBackend::new();
    backend.set(VERSION_KEY, "0.9").unwrap();
    let store = Store::new(backend).unwrap();
    assert_eq!(store.schema_version().unwrap().as_deref(), Some("0.9"));
}

// ── profile ─────────────────────────────────────────────────────────────────

#[test]
fn test_profile_absent_initially() {
    let (_dir, store) = common::setup_store();
    assert!(store.user_profile().unwrap().is_none());
}

#[test]
fn test_profile_round_trip() {
    let (_dir, store) = common::setup_store();
    let saved = store
        .save_user_profile(ProfileUpdate {
            demographics: Some(common::reference_male()),
            ..ProfileUpdate::default()
        })
        .unwrap();

    let loaded = store.user_profile().unwrap().unwrap();
    assert_eq!(loaded, saved);
    assert_eq!(loaded.demographics, common::reference_male());
}

/// Scenario: every save stamps updatedAt no earlier than the save began.
#[test]
fn test_save_stamps_updated_at() {
    let store = common::memory_store();
    let first = store.save_user_profile(ProfileUpdate::default()).unwrap();
    let before = Utc::now();
    let second = store
        .save_user_profile(ProfileUpdate {
            goals: Some(Goals {
                objective: GoalProfile::Bulking,
                ..Goals::default()
            }),
            ..ProfileUpdate::default()
        })
        .unwrap();

    assert!(second.updated_at >= before);
    assert_eq!(second.created_at, first.created_at);
    assert_eq!(second.id, first.id);
    assert_eq!(second.goals.objective, GoalProfile::Bulking);
}

#[test]
fn test_partial_save_keeps_other_sections() {
    let store = common::memory_store();
    store
        .save_user_profile(ProfileUpdate {
            demographics: Some(common::reference_female()),
            ..ProfileUpdate::default()
        })
        .unwrap();
    let p = store
        .save_user_profile(ProfileUpdate {
            goals: Some(Goals::default()),
            ..ProfileUpdate::default()
        })
        .unwrap();
    assert_eq!(p.demographics, common::reference_female());
}

/// Scenario: a corrupt stored profile reads as absent instead of failing.
#[test]
fn test_corrupt_profile_reads_as_none() {
    let store = common::memory_store();
    store.backend().set(PROFILE_KEY, "{not json").unwrap();
    assert!(store.user_profile().unwrap().is_none());

    // A save recovers by starting from the defaults.
    let p = store.save_user_profile(ProfileUpdate::default()).unwrap();
    assert_eq!(p.demographics.weight, 70.0);
}

// ── tracking ────────────────────────────────────────────────────────────────

#[test]
fn test_tracking_empty_when_absent() {
    let (_dir, store) = common::setup_store();
    assert_eq!(store.tracking_data().unwrap().entry_count(), 0);
}

#[test]
fn test_tracking_append_persists_sorted() {
    let (_dir, store) = common::setup_store();
    for (d, w) in [(10, 81.0), (2, 83.0), (6, 82.0)] {
        let current = store.tracking_data().unwrap();
        store
            .save_tracking_data(TrackingUpdate::append_weight(&current, weight(d, w)))
            .unwrap();
    }
    let data = store.tracking_data().unwrap();
    let days: Vec<f64> = data.weight.iter().map(|e| e.weight).collect();
    assert_eq!(days, vec![83.0, 82.0, 81.0]);
}

#[test]
fn test_corrupt_tracking_reads_as_empty() {
    let store = common::memory_store();
    store.backend().set(TRACKING_KEY, "[1, 2").unwrap();
    assert_eq!(store.tracking_data().unwrap().entry_count(), 0);
}

// ── settings ────────────────────────────────────────────────────────────────

#[test]
fn test_settings_default_then_saved() {
    let store = common::memory_store();
    assert_eq!(store.settings().unwrap(), Settings::default());

    let s = Settings {
        units: UnitSystem::Imperial,
        ..Settings::default()
    };
    store.save_settings(&s).unwrap();
    assert_eq!(store.settings().unwrap(), s);
}

// ── clear ───────────────────────────────────────────────────────────────────

#[test]
fn test_clear_removes_documents_keeps_version() {
    let (_dir, store) = common::setup_store();
    store.save_user_profile(ProfileUpdate::default()).unwrap();
    store.save_settings(&Settings::default()).unwrap();
    let current = store.tracking_data().unwrap();
    store
        .save_tracking_data(TrackingUpdate::append_weight(&current, weight(1, 80.0)))
        .unwrap();

    store.clear_all_data().unwrap();

    assert!(store.user_profile().unwrap().is_none());
    assert_eq!(store.tracking_data().unwrap().entry_count(), 0);
    assert!(store.backend().get(SETTINGS_KEY).unwrap().is_none());
    assert_eq!(store.schema_version().unwrap().as_deref(), Some(SCHEMA_VERSION));
}

#[test]
fn test_clear_on_empty_store_is_ok() {
    let store = common::memory_store();
    store.clear_all_data().unwrap();
    assert!(store.user_profile().unwrap().is_none());
}

// ── backends ────────────────────────────────────────────────────────────────

#[test]
fn test_sqlite_persists_across_reopen() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("kv.db");
    {
        let store = Store::open(&path).unwrap();
        store
            .save_user_profile(ProfileUpdate {
                demographics: Some(common::reference_male()),
                ..ProfileUpdate::default()
            })
            .unwrap();
    }
    let store = Store::open(&path).unwrap();
    let p = store.user_profile().unwrap().unwrap();
    assert_eq!(p.demographics.weight, 80.0);
}

#[test]
fn test_sqlite_set_many_and_remove() {
    let backend = SqliteBackend::open_in_memory().unwrap();
    backend.set_many(&[("a", "1"), ("b", "2")]).unwrap();
    backend.set("a", "3").unwrap();
    assert_eq!(backend.get("a").unwrap().as_deref(), Some("3"));
    assert_eq!(backend.get("b").unwrap().as_deref(), Some("2"));
    backend.remove("b").unwrap();
    assert!(backend.get("b").unwrap().is_none());
}

#[cfg(unix)]
#[test]
fn test_sqlite_file_is_private() {
    use std::os::unix::fs::PermissionsExt;
    let (dir, _store) = common::setup_store();
    let mode = std::fs::metadata(dir.path().join("test.db"))
        .unwrap()
        .permissions()
        .mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn test_memory_backend_len() {
    let backend = MemoryBackend::new();
    assert!(backend.is_empty());
    backend.set("k", "v").unwrap();
    backend.set("k", "w").unwrap();
    assert_eq!(backend.len(), 1);
}
