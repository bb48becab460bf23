use serde::{Deserialize, Serialize};

use super::error::{self, Result};
use super::rounding::RoundingPolicy;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GlycemicBand {
    Low,
    Medium,
    High,
}

impl GlycemicBand {
    /// Glycemic index: low <= 55, medium 56-69, high >= 70.
    pub fn for_index(gi: f64) -> Self {
        if gi <= 55.0 {
            Self::Low
        } else if gi < 70.0 {
            Self::Medium
        } else {
            Self::High
        }
    }

    /// Glycemic load: low <= 10, medium 11-19, high >= 20.
    pub fn for_load(gl: f64) -> Self {
        if gl <= 10.0 {
            Self::Low
        } else if gl < 20.0 {
            Self::Medium
        } else {
            Self::High
        }
    }
}

/// One food in a meal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FoodItem {
    pub name: String,
    pub glycemic_index: f64,
    pub carbs_g: f64,
    #[serde(default)]
    pub fiber_g: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GlycemicResult {
    pub glycemic_index: f64,
    pub available_carbs_g: f64,
    pub glycemic_load: f64,
    pub index_band: GlycemicBand,
    pub load_band: GlycemicBand,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MealGlycemicResult {
    pub items: Vec<GlycemicResult>,
    pub total_load: f64,
    pub load_band: GlycemicBand,
}

pub fn compute_glycemic_load(gi: f64, carbs_g: f64, fiber_g: f64) -> Result<GlycemicResult> {
    let gi = error::within("glycemic_index", gi, 0.0, 100.0)?;
    let carbs = error::non_negative("carbs", carbs_g)?;
    let fiber = error::non_negative("fiber", fiber_g)?;

    let available = (carbs - fiber).max(0.0);
    let load = RoundingPolicy::Tenth.apply(gi * available / 100.0);

    Ok(GlycemicResult {
        glycemic_index: gi,
        available_carbs_g: available,
        glycemic_load: load,
        index_band: GlycemicBand::for_index(gi),
        load_band: GlycemicBand::for_load(load),
    })
}

/// Loads add up across the foods of a meal.
pub fn meal_glycemic_load(items: &[FoodItem]) -> Result<MealGlycemicResult> {
    let results = items
        .iter()
        .map(|i| compute_glycemic_load(i.glycemic_index, i.carbs_g, i.fiber_g))
        .collect::<Result<Vec<_>>>()?;
    let total = RoundingPolicy::Tenth.apply(results.iter().map(|r| r.glycemic_load).sum());

    Ok(MealGlycemicResult {
        items: results,
        total_load: total,
        load_band: GlycemicBand::for_load(total),
    })
}
