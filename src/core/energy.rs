//! Resting and total daily energy expenditure.
//!
//! Three published BMR equations are supported. TDEE multiplies BMR by the
//! activity factor; bulk and cut targets are fixed offsets from TDEE.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::{self, Result, ValidationError};
use super::rounding::RoundingPolicy;
use crate::models::profile::{ActivityLevel, Demographics, Gender};

/// Calorie surplus for a lean bulk.
pub const BULK_FACTOR: f64 = 1.15;
/// Calorie deficit for a cut.
pub const CUT_FACTOR: f64 = 0.80;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BmrMethod {
    /// Roza & Shizgal (1984) revision of Harris-Benedict.
    HarrisBenedict,
    /// Mifflin et al. (1990).
    MifflinStJeor,
    /// Lean-mass based; needs a body fat percentage.
    KatchMcArdle,
}

impl std::fmt::Display for BmrMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HarrisBenedict => write!(f, "harris_benedict"),
            Self::MifflinStJeor => write!(f, "mifflin_st_jeor"),
            Self::KatchMcArdle => write!(f, "katch_mcardle"),
        }
    }
}

impl FromStr for BmrMethod {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "harris_benedict" | "harris" => Ok(Self::HarrisBenedict),
            "mifflin_st_jeor" | "mifflin" => Ok(Self::MifflinStJeor),
            "katch_mcardle" | "katch" => Ok(Self::KatchMcArdle),
            _ => anyhow::bail!(
                "invalid BMR method: {} (expected mifflin/harris/katch)",
                s
            ),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BmrResult {
    pub method: BmrMethod,
    pub activity_level: ActivityLevel,
    pub bmr: f64,
    pub tdee: f64,
    pub maintenance: f64,
    pub bulk: f64,
    pub cut: f64,
}

/// Unrounded BMR in kcal/day.
pub fn basal_metabolic_rate(d: &Demographics, method: BmrMethod) -> Result<f64> {
    let weight = error::positive("weight", d.weight)?;
    let height = error::positive("height", d.height)?;
    let age = d.age as f64;
    if d.age == 0 {
        return Err(ValidationError::NonPositive {
            field: "age",
            value: age,
        });
    }

    let bmr = match method {
        BmrMethod::MifflinStJeor => {
            let offset = match d.gender {
                Gender::Male => 5.0,
                Gender::Female => -161.0,
            };
            10.0 * weight + 6.25 * height - 5.0 * age + offset
        }
        BmrMethod::HarrisBenedict => match d.gender {
            Gender::Male => 88.362 + 13.397 * weight + 4.799 * height - 5.677 * age,
            Gender::Female => 447.593 + 9.247 * weight + 3.098 * height - 4.330 * age,
        },
        BmrMethod::KatchMcArdle => {
            let body_fat = d.body_fat.ok_or(ValidationError::MissingBodyFat)?;
            let body_fat = error::within("body_fat", body_fat, 0.0, 100.0)?;
            370.0 + 21.6 * lean_mass(weight, body_fat)
        }
    };
    Ok(bmr)
}

/// Lean body mass in kg.
pub fn lean_mass(weight: f64, body_fat_pct: f64) -> f64 {
    weight * (1.0 - body_fat_pct / 100.0)
}

pub fn total_daily_energy_expenditure(bmr: f64, activity: ActivityLevel) -> f64 {
    bmr * activity.multiplier()
}

/// BMR, TDEE and the derived maintenance/bulk/cut targets, in whole kcal.
pub fn compute_bmr(d: &Demographics, method: BmrMethod) -> Result<BmrResult> {
    let bmr = basal_metabolic_rate(d, method)?;
    let tdee = total_daily_energy_expenditure(bmr, d.activity_level);
    let round = |v: f64| RoundingPolicy::Integer.apply(v);

    Ok(BmrResult {
        method,
        activity_level: d.activity_level,
        bmr: round(bmr),
        tdee: round(tdee),
        maintenance: round(tdee),
        bulk: round(tdee * BULK_FACTOR),
        cut: round(tdee * CUT_FACTOR),
    })
}
