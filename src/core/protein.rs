use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::{self, Result, ValidationError};
use super::rounding::RoundingPolicy;

/// What the protein intake is meant to support.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProteinObjective {
    Sedentary,
    Endurance,
    Strength,
    FatLoss,
    MuscleGain,
}

impl ProteinObjective {
    /// Daily band in g per kg of body weight.
    pub fn grams_per_kg(self) -> (f64, f64) {
        match self {
            Self::Sedentary => (0.8, 1.0),
            Self::Endurance => (1.2, 1.6),
            Self::Strength => (1.6, 2.2),
            Self::FatLoss => (1.8, 2.7),
            Self::MuscleGain => (1.6, 2.2),
        }
    }
}

impl FromStr for ProteinObjective {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "sedentary" => Ok(Self::Sedentary),
            "endurance" => Ok(Self::Endurance),
            "strength" => Ok(Self::Strength),
            "fat_loss" | "fat-loss" => Ok(Self::FatLoss),
            "muscle_gain" | "muscle-gain" => Ok(Self::MuscleGain),
            _ => anyhow::bail!(
                "invalid protein objective: {} (expected sedentary/endurance/strength/fat_loss/muscle_gain)",
                s
            ),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProteinResult {
    pub objective: ProteinObjective,
    pub min_g: f64,
    pub max_g: f64,
    pub target_g: f64,
    pub per_meal_g: f64,
    pub meals_per_day: u32,
}

pub fn compute_protein_needs(
    weight: f64,
    objective: ProteinObjective,
    meals_per_day: u32,
) -> Result<ProteinResult> {
    let weight = error::positive("weight", weight)?;
    if meals_per_day == 0 {
        return Err(ValidationError::NonPositive {
            field: "meals_per_day",
            value: 0.0,
        });
    }

    let (lo, hi) = objective.grams_per_kg();
    let min = weight * lo;
    let max = weight * hi;
    let target = (min + max) / 2.0;
    let round = |v: f64| RoundingPolicy::Integer.apply(v);

    Ok(ProteinResult {
        objective,
        min_g: round(min),
        max_g: round(max),
        target_g: round(target),
        per_meal_g: round(target / meals_per_day as f64),
        meals_per_day,
    })
}
