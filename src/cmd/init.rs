use anyhow::Result;
use std::io::{self, Write};
use std::str::FromStr;

use fitcalc::models::config::Config;
use fitcalc::models::profile::{Demographics, Goals, ProfileUpdate};
use fitcalc::store::Store;

pub fn run(skip: bool) -> Result<()> {
    let config = Config::load().unwrap_or_default();
    config.save()?;
    let store = Store::open(&config.db_path())?;

    if !skip {
        println!("fitcalc: initial setup (metric units)\n");

        let demographics = Demographics {
            age: prompt_parse("Age")?,
            gender: prompt_parse("Gender (male/female)")?,
            weight: prompt_parse("Weight (kg)")?,
            height: prompt_parse("Height (cm)")?,
            activity_level: prompt_parse(
                "Activity level (sedentary/light/moderate/active/very_active)",
            )?,
            body_fat: None,
        };
        let goals = Goals {
            objective: prompt_parse("Goal (cutting/maintenance/bulking/recomposition)")?,
            ..Goals::default()
        };

        store.save_user_profile(ProfileUpdate {
            demographics: Some(demographics),
            goals: Some(goals),
            ..ProfileUpdate::default()
        })?;

        println!("\nSetup complete. Data stored in {:?}", Config::data_dir());
    } else {
        if store.user_profile()?.is_none() {
            store.save_user_profile(ProfileUpdate::default())?;
        }
        println!("Config initialized with defaults at {:?}", Config::path());
    }

    Ok(())
}

fn prompt_string(label: &str) -> Result<String> {
    print!("{}: ", label);
    io::stdout().flush()?;
    let mut buf = String::new();
    if io::stdin().read_line(&mut buf)? == 0 {
        anyhow::bail!("input closed during setup; rerun with --skip for defaults");
    }
    Ok(buf.trim().to_string())
}

/// Ask until the answer parses.
fn prompt_parse<T>(label: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    loop {
        let s = prompt_string(label)?;
        match s.parse::<T>() {
            Ok(v) => return Ok(v),
            Err(e) => println!("{}", e),
        }
    }
}
