use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::core::energy::BmrMethod;
use crate::core::hydration::Climate;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub log: LogConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub defaults: Defaults,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LogConfig {
    /// `tracing` filter directive used when `FITCALC_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Database file name inside the data directory.
    #[serde(default = "default_store_file")]
    pub file: String,
}

fn default_store_file() -> String {
    "data.db".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            file: default_store_file(),
        }
    }
}

/// Fallbacks for calculator flags the profile does not cover.
#[derive(Debug, Serialize, Deserialize)]
pub struct Defaults {
    #[serde(default = "default_bmr_method")]
    pub bmr_method: BmrMethod,
    #[serde(default = "default_climate")]
    pub climate: Climate,
}

fn default_bmr_method() -> BmrMethod {
    BmrMethod::MifflinStJeor
}
fn default_climate() -> Climate {
    Climate::Temperate
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            bmr_method: default_bmr_method(),
            climate: default_climate(),
        }
    }
}

impl Config {
    /// Load config from the standard path, or return defaults.
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::path();
        if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            Ok(toml::from_str(&contents)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to the standard path.
    pub fn save(&self) -> anyhow::Result<()> {
        let path = Self::path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                std::fs::set_permissions(parent, std::fs::Permissions::from_mode(0o700))?;
            }
        }
        let contents = toml::to_string_pretty(self)?;

        #[cfg(unix)]
        {
            use std::fs::{self, OpenOptions};
            use std::io::Write;
            use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

            let mut options = OpenOptions::new();
            options.write(true).create(true).truncate(true).mode(0o600);
            let mut file = options.open(&path)?;
            file.write_all(contents.as_bytes())?;

            // An existing file keeps its old mode through open(); fix it up.
            let mut perms = file.metadata()?.permissions();
            if perms.mode() & 0o777 != 0o600 {
                perms.set_mode(0o600);
                fs::set_permissions(&path, perms)?;
            }
        }
        #[cfg(not(unix))]
        {
            std::fs::write(&path, contents)?;
        }

        Ok(())
    }

    /// Apply a `key = value` pair from `fitcalc config set`.
    pub fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        match key {
            "log.level" => self.log.level = value.to_string(),
            "store.file" => {
                if value.is_empty() || value.contains(std::path::MAIN_SEPARATOR) {
                    anyhow::bail!("store.file must be a plain file name");
                }
                self.store.file = value.to_string();
            }
            "defaults.bmr_method" => self.defaults.bmr_method = value.parse()?,
            "defaults.climate" => self.defaults.climate = value.parse()?,
            _ => anyhow::bail!("unknown config key: {}", key),
        }
        Ok(())
    }

    pub fn data_dir() -> PathBuf {
        if let Ok(home) = std::env::var("FITCALC_HOME") {
            return PathBuf::from(home);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".fitcalc")
    }

    pub fn path() -> PathBuf {
        Self::data_dir().join("config.toml")
    }

    pub fn db_path(&self) -> PathBuf {
        Self::data_dir().join(&self.store.file)
    }
}
