//! Profile, tracking and settings documents over a key-value backend.
//!
//! Each document lives under its own key as one JSON blob. Saves are
//! read-merge-write of the whole blob: the last writer wins and nothing
//! guards against a concurrent writer in between.

mod backend;
mod export;
mod sqlite;

pub use backend::{KeyValueBackend, MemoryBackend};
pub use sqlite::SqliteBackend;

use anyhow::Result;
use chrono::Utc;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::models::profile::{ProfileUpdate, UserProfile};
use crate::models::settings::Settings;
use crate::models::tracking::{TrackingData, TrackingUpdate};

pub const PROFILE_KEY: &str = "fitcalc.profile";
pub const TRACKING_KEY: &str = "fitcalc.tracking";
pub const SETTINGS_KEY: &str = "fitcalc.settings";
pub const VERSION_KEY: &str = "fitcalc.version";

/// Written once to `VERSION_KEY`; nothing reads it back yet.
pub const SCHEMA_VERSION: &str = "1.0";

pub struct Store<B: KeyValueBackend> {
    backend: B,
}

impl Store<SqliteBackend> {
    pub fn open(path: &std::path::Path) -> Result<Self> {
        Self::new(SqliteBackend::open(path)?)
    }
}

impl<B: KeyValueBackend> Store<B> {
    /// Wrap a backend, stamping the schema version if it has none.
    pub fn new(backend: B) -> Result<Self> {
        if backend.get(VERSION_KEY)?.is_none() {
            backend.set(VERSION_KEY, SCHEMA_VERSION)?;
        }
        Ok(Self { backend })
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn schema_version(&self) -> Result<Option<String>> {
        self.backend.get(VERSION_KEY)
    }

    /// Parse the document under `key`. Absent and unparseable both give
    /// `None`; the parse error only goes to the log.
    fn read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let Some(raw) = self.backend.get(key)? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(v) => Ok(Some(v)),
            Err(e) => {
                warn!(key, error = %e, "ignoring unreadable stored document");
                Ok(None)
            }
        }
    }

    fn write<T: serde::Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string(value)?;
        debug!(key, bytes = json.len(), "writing document");
        self.backend.set(key, &json)
    }

    pub fn user_profile(&self) -> Result<Option<UserProfile>> {
        self.read(PROFILE_KEY)
    }

    /// Merge `update` over the stored profile (or the defaults) and write it back.
    pub fn save_user_profile(&self, update: ProfileUpdate) -> Result<UserProfile> {
        let mut profile = self.user_profile()?.unwrap_or_default();
        profile.merge(update);
        profile.updated_at = Utc::now();
        self.write(PROFILE_KEY, &profile)?;
        Ok(profile)
    }

    pub fn tracking_data(&self) -> Result<TrackingData> {
        Ok(self.read(TRACKING_KEY)?.unwrap_or_default())
    }

    pub fn save_tracking_data(&self, update: TrackingUpdate) -> Result<TrackingData> {
        let mut data = self.tracking_data()?;
        data.apply(update);
        self.write(TRACKING_KEY, &data)?;
        Ok(data)
    }

    pub fn settings(&self) -> Result<Settings> {
        Ok(self.read(SETTINGS_KEY)?.unwrap_or_default())
    }

    pub fn save_settings(&self, settings: &Settings) -> Result<()> {
        self.write(SETTINGS_KEY, settings)
    }

    /// Drop the three documents. The schema version stays.
    pub fn clear_all_data(&self) -> Result<()> {
        for key in [PROFILE_KEY, TRACKING_KEY, SETTINGS_KEY] {
            self.backend.remove(key)?;
        }
        debug!("cleared all stored documents");
        Ok(())
    }
}
