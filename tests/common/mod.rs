#![allow(dead_code)]

use chrono::NaiveDate;
use fitcalc::models::profile::{ActivityLevel, Demographics, Gender};
use fitcalc::store::{MemoryBackend, SqliteBackend, Store};
use tempfile::TempDir;

/// Create a store over a temporary SQLite file.
pub fn setup_store() -> (TempDir, Store<SqliteBackend>) {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("test.db");
    let store = Store::open(&db_path).unwrap();
    (dir, store)
}

pub fn memory_store() -> Store<MemoryBackend> {
    Store::new(MemoryBackend::new()).unwrap()
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// 30-year-old, 80 kg, 180 cm, moderately active.
pub fn reference_male() -> Demographics {
    Demographics {
        age: 30,
        gender: Gender::Male,
        weight: 80.0,
        height: 180.0,
        activity_level: ActivityLevel::Moderate,
        body_fat: None,
    }
}

/// Same body data with the female constant.
pub fn reference_female() -> Demographics {
    Demographics {
        gender: Gender::Female,
        ..reference_male()
    }
}

pub fn approx(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol
}
