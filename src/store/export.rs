use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;
use tracing::{debug, warn};

use super::{KeyValueBackend, PROFILE_KEY, SCHEMA_VERSION, SETTINGS_KEY, Store, TRACKING_KEY};
use crate::models::profile::UserProfile;
use crate::models::settings::Settings;
use crate::models::tracking::TrackingData;

/// Stored documents are carried as raw JSON so an import writes back the
/// exact bytes that were exported.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportBundle {
    user_profile: Option<Box<RawValue>>,
    tracking_data: Option<Box<RawValue>>,
    settings: Option<Box<RawValue>>,
    export_date: DateTime<Utc>,
    version: &'static str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ImportBundle {
    #[serde(default)]
    user_profile: Option<Box<RawValue>>,
    #[serde(default)]
    tracking_data: Option<Box<RawValue>>,
    #[serde(default)]
    settings: Option<Box<RawValue>>,
}

/// `Some(raw)` only if `raw` parses as `T`.
fn checked<'a, T: serde::de::DeserializeOwned>(
    section: &str,
    raw: &'a Option<Box<RawValue>>,
) -> std::result::Result<Option<&'a str>, ()> {
    match raw {
        None => Ok(None),
        Some(r) => match serde_json::from_str::<T>(r.get()) {
            Ok(_) => Ok(Some(r.get())),
            Err(e) => {
                warn!(section, error = %e, "import section does not match its record type");
                Err(())
            }
        },
    }
}

impl<B: KeyValueBackend> Store<B> {
    fn raw(&self, key: &str) -> Result<Option<Box<RawValue>>> {
        let Some(text) = self.backend.get(key)? else {
            return Ok(None);
        };
        match RawValue::from_string(text) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) => {
                warn!(key, error = %e, "leaving unreadable document out of export");
                Ok(None)
            }
        }
    }

    /// Pretty JSON holding all three documents plus a version and timestamp.
    pub fn export_data(&self) -> Result<String> {
        let bundle = ExportBundle {
            user_profile: self.raw(PROFILE_KEY)?,
            tracking_data: self.raw(TRACKING_KEY)?,
            settings: self.raw(SETTINGS_KEY)?,
            export_date: Utc::now(),
            version: SCHEMA_VERSION,
        };
        Ok(serde_json::to_string_pretty(&bundle)?)
    }

    /// Replace every document present in `json`; leave the others alone.
    ///
    /// Returns `Ok(false)` without writing anything when the payload is not
    /// valid JSON or a section does not match its record type.
    pub fn import_data(&self, json: &str) -> Result<bool> {
        let bundle: ImportBundle = match serde_json::from_str(json) {
            Ok(b) => b,
            Err(e) => {
                warn!(error = %e, "rejecting malformed import");
                return Ok(false);
            }
        };

        let (Ok(profile), Ok(tracking), Ok(settings)) = (
            checked::<UserProfile>("userProfile", &bundle.user_profile),
            checked::<TrackingData>("trackingData", &bundle.tracking_data),
            checked::<Settings>("settings", &bundle.settings),
        ) else {
            return Ok(false);
        };

        let writes: Vec<(&str, &str)> = [
            (PROFILE_KEY, profile),
            (TRACKING_KEY, tracking),
            (SETTINGS_KEY, settings),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key, v)))
        .collect();

        self.backend.set_many(&writes)?;
        debug!(documents = writes.len(), "import applied");
        Ok(true)
    }
}
