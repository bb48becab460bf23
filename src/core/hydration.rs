//! Daily water intake from body weight, activity, climate and training.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::{self, Result};
use super::rounding::RoundingPolicy;
use crate::models::profile::ActivityLevel;

/// Baseline water per kg of body weight.
pub const BASE_ML_PER_KG: f64 = 35.0;
/// Extra water per completed block of exercise.
pub const EXERCISE_ML_PER_BLOCK: f64 = 150.0;
pub const EXERCISE_BLOCK_MINUTES: u32 = 15;
pub const GLASS_ML: f64 = 250.0;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Climate {
    Cold,
    Temperate,
    Hot,
    HotHumid,
}

impl Climate {
    pub fn multiplier(self) -> f64 {
        match self {
            Self::Cold => 0.9,
            Self::Temperate => 1.0,
            Self::Hot => 1.2,
            Self::HotHumid => 1.3,
        }
    }
}

impl std::fmt::Display for Climate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cold => write!(f, "cold"),
            Self::Temperate => write!(f, "temperate"),
            Self::Hot => write!(f, "hot"),
            Self::HotHumid => write!(f, "hot_humid"),
        }
    }
}

impl FromStr for Climate {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "cold" => Ok(Self::Cold),
            "temperate" => Ok(Self::Temperate),
            "hot" => Ok(Self::Hot),
            "hot_humid" | "hot-humid" | "humid" => Ok(Self::HotHumid),
            _ => anyhow::bail!(
                "invalid climate: {} (expected cold/temperate/hot/hot_humid)",
                s
            ),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HydrationResult {
    pub base_ml: f64,
    pub activity_bonus_ml: f64,
    pub climate_multiplier: f64,
    pub exercise_bonus_ml: f64,
    pub total_ml: f64,
    pub total_liters: f64,
    pub glasses: u32,
}

pub fn compute_hydration_needs(
    weight: f64,
    activity: ActivityLevel,
    climate: Climate,
    exercise_minutes: u32,
) -> Result<HydrationResult> {
    let weight = error::positive("weight", weight)?;

    let base = weight * BASE_ML_PER_KG;
    let activity_bonus = activity.hydration_bonus_ml();
    // Only completed blocks count: 29 minutes earns one block, not two.
    let exercise_bonus = (exercise_minutes / EXERCISE_BLOCK_MINUTES) as f64 * EXERCISE_ML_PER_BLOCK;
    let total = RoundingPolicy::Integer
        .apply((base + activity_bonus) * climate.multiplier() + exercise_bonus);

    Ok(HydrationResult {
        base_ml: RoundingPolicy::Integer.apply(base),
        activity_bonus_ml: activity_bonus,
        climate_multiplier: climate.multiplier(),
        exercise_bonus_ml: exercise_bonus,
        total_ml: total,
        total_liters: RoundingPolicy::Tenth.apply(total / 1000.0),
        glasses: (total / GLASS_ML).ceil() as u32,
    })
}
