//! One-repetition maximum estimation and loading tables.
//!
//! The estimate is the mean of four regression formulas. Each formula is
//! exposed on its own so callers can show the spread.

use serde::Serialize;

use super::error::{self, Result, ValidationError};
use super::rounding::RoundingPolicy;

/// Past this many reps the regressions stop tracking real maxima.
pub const MAX_REPS: u32 = 30;

/// Brzycki: w * 36 / (37 - r)
pub fn brzycki(weight: f64, reps: u32) -> f64 {
    weight * 36.0 / (37.0 - reps as f64)
}

/// Epley: w * (1 + r / 30)
pub fn epley(weight: f64, reps: u32) -> f64 {
    weight * (1.0 + reps as f64 / 30.0)
}

/// McGlothin: 100w / (101.3 - 2.67123r)
pub fn mcglothin(weight: f64, reps: u32) -> f64 {
    100.0 * weight / (101.3 - 2.67123 * reps as f64)
}

/// Lombardi: w * r^0.10
pub fn lombardi(weight: f64, reps: u32) -> f64 {
    weight * (reps as f64).powf(0.10)
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Estimates {
    pub brzycki: f64,
    pub epley: f64,
    pub mcglothin: f64,
    pub lombardi: f64,
}

impl Estimates {
    pub fn mean(&self) -> f64 {
        (self.brzycki + self.epley + self.mcglothin + self.lombardi) / 4.0
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RepRange {
    pub min: u32,
    pub max: u32,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PercentageRow {
    pub percent: u32,
    pub load: f64,
    pub reps: RepRange,
    pub purpose: &'static str,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OneRepMaxResult {
    pub weight: f64,
    pub reps: u32,
    pub estimates: Estimates,
    pub one_rep_max: f64,
    pub table: Vec<PercentageRow>,
}

/// (percent of 1RM, rep range, training purpose), heaviest first.
const LOADING_TABLE: [(u32, u32, u32, &str); 8] = [
    (95, 1, 2, "max strength"),
    (90, 3, 4, "max strength"),
    (85, 5, 6, "strength"),
    (80, 7, 8, "strength"),
    (75, 9, 10, "hypertrophy"),
    (70, 11, 12, "hypertrophy"),
    (65, 13, 15, "muscular endurance"),
    (60, 16, 20, "muscular endurance"),
];

/// Each formula's 1RM. A single rep is its own maximum, so every
/// estimate is the lifted weight.
pub fn estimate(weight: f64, reps: u32) -> Result<Estimates> {
    let weight = error::positive("weight", weight)?;
    if !(1..=MAX_REPS).contains(&reps) {
        return Err(ValidationError::OutOfRange {
            field: "reps",
            min: 1.0,
            max: MAX_REPS as f64,
            value: reps as f64,
        });
    }
    if reps == 1 {
        return Ok(Estimates {
            brzycki: weight,
            epley: weight,
            mcglothin: weight,
            lombardi: weight,
        });
    }
    Ok(Estimates {
        brzycki: brzycki(weight, reps),
        epley: epley(weight, reps),
        mcglothin: mcglothin(weight, reps),
        lombardi: lombardi(weight, reps),
    })
}

/// Averaged 1RM rounded to one decimal.
pub fn one_rep_max(weight: f64, reps: u32) -> Result<f64> {
    Ok(RoundingPolicy::Tenth.apply(estimate(weight, reps)?.mean()))
}

pub fn percentage_table(one_rep_max: f64) -> Vec<PercentageRow> {
    LOADING_TABLE
        .iter()
        .map(|&(percent, min, max, purpose)| PercentageRow {
            percent,
            load: RoundingPolicy::HalfKg.apply(one_rep_max * percent as f64 / 100.0),
            reps: RepRange { min, max },
            purpose,
        })
        .collect()
}

pub fn compute_one_rep_max(weight: f64, reps: u32) -> Result<OneRepMaxResult> {
    let estimates = estimate(weight, reps)?;
    let orm = one_rep_max(weight, reps)?;
    let tenth = |v: f64| RoundingPolicy::Tenth.apply(v);

    Ok(OneRepMaxResult {
        weight,
        reps,
        estimates: Estimates {
            brzycki: tenth(estimates.brzycki),
            epley: tenth(estimates.epley),
            mcglothin: tenth(estimates.mcglothin),
            lombardi: tenth(estimates.lombardi),
        },
        one_rep_max: orm,
        table: percentage_table(orm),
    })
}

/// Reps a lifter should manage at `load` given their 1RM (inverse Epley).
pub fn reps_at_load(one_rep_max: f64, load: f64) -> Result<u32> {
    let orm = error::positive("one_rep_max", one_rep_max)?;
    let load = error::positive("load", load)?;
    if load >= orm {
        return Ok(1);
    }
    Ok((30.0 * (orm / load - 1.0)).floor().max(1.0) as u32)
}
