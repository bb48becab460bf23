use serde::{Deserialize, Serialize};

use super::energy::lean_mass;
use super::error::{self, Result};
use super::rounding::RoundingPolicy;
use crate::models::profile::Gender;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn classify(bmi: f64) -> Self {
        if bmi < 18.5 {
            Self::Underweight
        } else if bmi < 25.0 {
            Self::Normal
        } else if bmi < 30.0 {
            Self::Overweight
        } else {
            Self::Obese
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BmiResult {
    pub bmi: f64,
    pub category: BmiCategory,
    /// Weights giving a BMI of 18.5-25 at this height.
    pub healthy_range_kg: (f64, f64),
}

/// BMI = kg / m^2
pub fn compute_bmi(weight: f64, height_cm: f64) -> Result<BmiResult> {
    let weight = error::positive("weight", weight)?;
    let h = error::positive("height", height_cm)? / 100.0;
    let bmi = RoundingPolicy::Tenth.apply(weight / (h * h));
    Ok(BmiResult {
        bmi,
        category: BmiCategory::classify(bmi),
        healthy_range_kg: (
            RoundingPolicy::Tenth.apply(18.5 * h * h),
            RoundingPolicy::Tenth.apply(25.0 * h * h),
        ),
    })
}

/// Tape measurements for the US Navy method, all in cm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circumferences {
    pub waist: f64,
    pub neck: f64,
    /// Required for women.
    pub hip: Option<f64>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BodyFatResult {
    pub body_fat_pct: f64,
    pub fat_mass_kg: f64,
    pub lean_mass_kg: f64,
}

/// US Navy circumference estimate.
pub fn navy_body_fat(gender: Gender, height_cm: f64, c: Circumferences) -> Result<f64> {
    let height = error::positive("height", height_cm)?;
    let waist = error::positive("waist", c.waist)?;
    let neck = error::positive("neck", c.neck)?;

    let pct = match gender {
        Gender::Male => {
            let girth = error::positive("waist - neck", waist - neck)?;
            495.0 / (1.0324 - 0.19077 * girth.log10() + 0.15456 * height.log10()) - 450.0
        }
        Gender::Female => {
            let hip = error::positive("hip", c.hip.unwrap_or(f64::NAN))?;
            let girth = error::positive("waist + hip - neck", waist + hip - neck)?;
            495.0 / (1.29579 - 0.35004 * girth.log10() + 0.22100 * height.log10()) - 450.0
        }
    };
    Ok(RoundingPolicy::Tenth.apply(pct.clamp(0.0, 100.0)))
}

pub fn compute_body_fat(
    gender: Gender,
    weight: f64,
    height_cm: f64,
    c: Circumferences,
) -> Result<BodyFatResult> {
    let weight = error::positive("weight", weight)?;
    let pct = navy_body_fat(gender, height_cm, c)?;
    let lean = lean_mass(weight, pct);
    Ok(BodyFatResult {
        body_fat_pct: pct,
        fat_mass_kg: RoundingPolicy::Tenth.apply(weight - lean),
        lean_mass_kg: RoundingPolicy::Tenth.apply(lean),
    })
}
