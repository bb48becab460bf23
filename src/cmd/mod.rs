pub mod calc;
pub mod config;
pub mod data;
pub mod init;
pub mod plan;
pub mod profile;
pub mod track;

use anyhow::Result;
use serde_json::Value;

use fitcalc::core::units::{self, Quantity};
use fitcalc::models::config::Config;
use fitcalc::models::profile::{Demographics, UserProfile};
use fitcalc::models::settings::UnitSystem;
use fitcalc::output;
use fitcalc::store::{SqliteBackend, Store};

use crate::cli::BodyArgs;

/// What every store-backed command needs: config, an open store and the
/// unit system inputs are given in.
pub struct Context {
    pub config: Config,
    pub store: Store<SqliteBackend>,
    pub units: UnitSystem,
}

impl Context {
    pub fn load() -> Result<Self> {
        let config = Config::load()?;
        let store = Store::open(&config.db_path())?;
        let units = store.settings()?.units;
        Ok(Self {
            config,
            store,
            units,
        })
    }

    /// The stored profile, or the defaults when none has been saved.
    pub fn profile(&self) -> Result<UserProfile> {
        Ok(self.store.user_profile()?.unwrap_or_default())
    }

    pub fn mass_in(&self, value: f64) -> f64 {
        units::from_input(value, Quantity::Mass, self.units)
    }

    pub fn length_in(&self, value: f64) -> f64 {
        units::from_input(value, Quantity::Length, self.units)
    }

    /// Profile demographics with any flags given on the command line
    /// laid over them.
    pub fn demographics(&self, base: Demographics, args: &BodyArgs) -> Result<Demographics> {
        let mut d = base;
        if let Some(age) = args.age {
            d.age = age;
        }
        if let Some(g) = &args.gender {
            d.gender = g.parse()?;
        }
        if let Some(w) = args.weight {
            d.weight = self.mass_in(w);
        }
        if let Some(h) = args.height {
            d.height = self.length_in(h);
        }
        if let Some(a) = &args.activity {
            d.activity_level = a.parse()?;
        }
        if args.body_fat.is_some() {
            d.body_fat = args.body_fat;
        }
        Ok(d)
    }
}

pub fn print_success(command: &str, data: Value) -> Result<()> {
    let out = output::success(command, data);
    println!("{}", serde_json::to_string(&out)?);
    Ok(())
}
