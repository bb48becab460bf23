//! Projected body weight under a fixed calorie intake.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::{self, Result, ValidationError};
use super::rounding::RoundingPolicy;

/// Energy stored in a kilogram of body tissue.
pub const KCAL_PER_KG: f64 = 7700.0;
/// Daily deficit above which a refeed day is scheduled.
pub const REFEED_DEFICIT_KCAL: f64 = 400.0;
pub const REFEED_INTERVAL_DAYS: u32 = 7;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Experience {
    Beginner,
    Intermediate,
    Advanced,
}

impl Experience {
    /// Share of a surplus that lands as lean mass.
    pub fn muscle_gain_ratio(self) -> f64 {
        match self {
            Self::Beginner => 0.7,
            Self::Intermediate => 0.6,
            Self::Advanced => 0.4,
        }
    }
}

impl FromStr for Experience {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            _ => anyhow::bail!(
                "invalid experience: {} (expected beginner/intermediate/advanced)",
                s
            ),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WeekProjection {
    pub week: u32,
    pub weight: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BalanceProjection {
    pub daily_balance_kcal: f64,
    pub weekly_change_kg: f64,
    pub total_change_kg: f64,
    /// Lean share of a gain; zero when losing.
    pub lean_gain_kg: f64,
    pub fat_change_kg: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refeed_every_days: Option<u32>,
    pub weeks: Vec<WeekProjection>,
}

pub fn project_weight(
    start_weight: f64,
    tdee: f64,
    intake: f64,
    weeks: u32,
    experience: Experience,
) -> Result<BalanceProjection> {
    let start = error::positive("weight", start_weight)?;
    let tdee = error::positive("tdee", tdee)?;
    let intake = error::non_negative("intake", intake)?;
    if weeks == 0 {
        return Err(ValidationError::TooFewWeeks {
            required: 1,
            got: 0,
        });
    }

    let daily = intake - tdee;
    let weekly = daily * 7.0 / KCAL_PER_KG;
    let total = weekly * weeks as f64;
    let (lean, fat) = if total > 0.0 {
        let lean = total * experience.muscle_gain_ratio();
        (lean, total - lean)
    } else {
        (0.0, total)
    };
    let tenth = |v: f64| RoundingPolicy::Tenth.apply(v);

    Ok(BalanceProjection {
        daily_balance_kcal: RoundingPolicy::Integer.apply(daily),
        weekly_change_kg: RoundingPolicy::Hundredth.apply(weekly),
        total_change_kg: tenth(total),
        lean_gain_kg: tenth(lean),
        fat_change_kg: tenth(fat),
        refeed_every_days: (-daily > REFEED_DEFICIT_KCAL).then_some(REFEED_INTERVAL_DAYS),
        weeks: (1..=weeks)
            .map(|w| WeekProjection {
                week: w,
                weight: tenth(start + weekly * w as f64),
            })
            .collect(),
    })
}
