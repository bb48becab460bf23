//! Calorie target to protein/fat/carbohydrate grams.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::{self, Result, ValidationError};
use super::rounding::RoundingPolicy;

pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_CARB: f64 = 4.0;
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// Training objective, shared by every calculator that needs a split or a
/// calorie adjustment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GoalProfile {
    Cutting,
    Maintenance,
    Bulking,
    Recomposition,
}

impl GoalProfile {
    pub fn preset_ratios(self) -> MacroRatios {
        let (protein, fat, carb) = match self {
            Self::Cutting => (35, 25, 40),
            Self::Maintenance => (30, 30, 40),
            Self::Bulking => (25, 25, 50),
            Self::Recomposition => (40, 30, 30),
        };
        MacroRatios { protein, fat, carb }
    }

    /// Multiplier applied to TDEE to get the daily calorie target.
    pub fn calorie_factor(self) -> f64 {
        match self {
            Self::Cutting => 0.80,
            Self::Maintenance => 1.0,
            Self::Bulking => 1.15,
            Self::Recomposition => 0.90,
        }
    }
}

impl std::fmt::Display for GoalProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cutting => write!(f, "cutting"),
            Self::Maintenance => write!(f, "maintenance"),
            Self::Bulking => write!(f, "bulking"),
            Self::Recomposition => write!(f, "recomposition"),
        }
    }
}

impl FromStr for GoalProfile {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "cutting" | "cut" => Ok(Self::Cutting),
            "maintenance" | "maintain" => Ok(Self::Maintenance),
            "bulking" | "bulk" => Ok(Self::Bulking),
            "recomposition" | "recomp" => Ok(Self::Recomposition),
            _ => anyhow::bail!(
                "invalid goal: {} (expected cutting/maintenance/bulking/recomposition)",
                s
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Macro {
    Protein,
    Fat,
    Carb,
}

/// Whole-percent split of calories. Always sums to 100.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MacroRatios {
    pub protein: u32,
    pub fat: u32,
    pub carb: u32,
}

impl MacroRatios {
    pub fn new(protein: u32, fat: u32, carb: u32) -> Result<Self> {
        let sum = protein.saturating_add(fat).saturating_add(carb);
        if sum != 100 {
            return Err(ValidationError::InvalidRatios { sum });
        }
        Ok(Self { protein, fat, carb })
    }

    pub fn get(&self, m: Macro) -> u32 {
        match m {
            Macro::Protein => self.protein,
            Macro::Fat => self.fat,
            Macro::Carb => self.carb,
        }
    }

    /// Pin one macro to `pct` and spread the remainder over the other two in
    /// proportion to their current shares.
    pub fn rebalance(&self, changed: Macro, pct: u32) -> Self {
        let pct = pct.min(100);
        let remaining = 100 - pct;
        let (a, b) = match changed {
            Macro::Protein => (Macro::Fat, Macro::Carb),
            Macro::Fat => (Macro::Protein, Macro::Carb),
            Macro::Carb => (Macro::Protein, Macro::Fat),
        };
        let (wa, wb) = (self.get(a), self.get(b));

        let share_a = if wa.saturating_add(wb) == 0 {
            remaining / 2
        } else {
            ((remaining as f64) * (wa as f64) / (wa as f64 + wb as f64)).round() as u32
        };
        let share_b = remaining - share_a;

        let mut out = *self;
        for (m, v) in [(changed, pct), (a, share_a), (b, share_b)] {
            match m {
                Macro::Protein => out.protein = v,
                Macro::Fat => out.fat = v,
                Macro::Carb => out.carb = v,
            }
        }
        out
    }

    pub fn sum(&self) -> u32 {
        self.protein.saturating_add(self.fat).saturating_add(self.carb)
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MacroResult {
    pub calories: f64,
    pub ratios: MacroRatios,
    pub protein_g: f64,
    pub fat_g: f64,
    pub carb_g: f64,
    pub protein_kcal: f64,
    pub fat_kcal: f64,
    pub carb_kcal: f64,
}

pub fn compute_macros(calories: f64, ratios: MacroRatios) -> Result<MacroResult> {
    let calories = error::positive("calories", calories)?;
    let ratios = MacroRatios::new(ratios.protein, ratios.fat, ratios.carb)?;

    let kcal = |pct: u32| calories * pct as f64 / 100.0;
    let (p_kcal, f_kcal, c_kcal) = (kcal(ratios.protein), kcal(ratios.fat), kcal(ratios.carb));
    let round = |v: f64| RoundingPolicy::Integer.apply(v);

    Ok(MacroResult {
        calories: round(calories),
        ratios,
        protein_g: round(p_kcal / KCAL_PER_G_PROTEIN),
        fat_g: round(f_kcal / KCAL_PER_G_FAT),
        carb_g: round(c_kcal / KCAL_PER_G_CARB),
        protein_kcal: round(p_kcal),
        fat_kcal: round(f_kcal),
        carb_kcal: round(c_kcal),
    })
}

/// Macros for a goal preset applied to a TDEE.
pub fn compute_goal_macros(tdee: f64, goal: GoalProfile) -> Result<MacroResult> {
    let tdee = error::positive("tdee", tdee)?;
    compute_macros(tdee * goal.calorie_factor(), goal.preset_ratios())
}
