//! Week-by-week load targets between a current and a target working weight.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::{self, Result, ValidationError};
use super::periodization::{self, DELOAD_INTERVAL};
use super::rounding::RoundingPolicy;

/// Deload weeks drop the load by 20%.
pub const DELOAD_FACTOR: f64 = 0.8;

const DOUBLE_PROGRESSION_REPS: [u32; 3] = [8, 10, 12];
const WAVE_REPS: [u32; 3] = [7, 5, 3];
const WAVE_LOADS: [f64; 3] = [0.90, 0.95, 1.0];

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProgressionStrategy {
    Linear,
    DoubleProgression,
    Periodized,
    WaveLoading,
}

impl std::fmt::Display for ProgressionStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Linear => write!(f, "linear"),
            Self::DoubleProgression => write!(f, "double_progression"),
            Self::Periodized => write!(f, "periodized"),
            Self::WaveLoading => write!(f, "wave_loading"),
        }
    }
}

impl FromStr for ProgressionStrategy {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "linear" => Ok(Self::Linear),
            "double_progression" | "double-progression" | "double" => {
                Ok(Self::DoubleProgression)
            }
            "periodized" => Ok(Self::Periodized),
            "wave_loading" | "wave-loading" | "wave" => Ok(Self::WaveLoading),
            _ => anyhow::bail!(
                "invalid strategy: {} (expected linear/double_progression/periodized/wave_loading)",
                s
            ),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProgressionWeek {
    pub week: u32,
    pub weight: f64,
    pub sets: u32,
    pub reps: u32,
    pub deload: bool,
    pub note: &'static str,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProgressionPlan {
    pub strategy: ProgressionStrategy,
    pub current_weight: f64,
    pub target_weight: f64,
    pub total_increase: f64,
    pub weeks: Vec<ProgressionWeek>,
}

fn plate(v: f64) -> f64 {
    RoundingPolicy::Plate.apply(v)
}

fn week(
    week: u32,
    weight: f64,
    sets: u32,
    reps: u32,
    deload: bool,
    note: &'static str,
) -> ProgressionWeek {
    ProgressionWeek {
        week,
        weight: plate(weight),
        sets,
        reps,
        deload,
        note,
    }
}

fn is_deload(w: u32, total: u32) -> bool {
    w % DELOAD_INTERVAL == 0 && w != total
}

fn linear(current: f64, target: f64, weeks: u32) -> Vec<ProgressionWeek> {
    let step = (target - current) / weeks as f64;
    (1..=weeks)
        .map(|w| {
            let load = current + step * w as f64;
            if is_deload(w, weeks) {
                week(w, load * DELOAD_FACTOR, 2, 8, true, "deload")
            } else {
                week(w, load, 3, 8, false, "add load every week")
            }
        })
        .collect()
}

/// Reps climb 8 -> 10 -> 12 at a fixed load, then the load steps up and
/// reps reset. The first cycle runs at `current` and the last at `target`;
/// a plan of a single cycle (three weeks or fewer) has no cycle boundary to
/// step at, so it stays at `current` throughout.
fn double_progression(current: f64, target: f64, weeks: u32) -> Vec<ProgressionWeek> {
    let cycle_len = DOUBLE_PROGRESSION_REPS.len() as u32;
    let cycles = weeks.div_ceil(cycle_len);
    let step = if cycles > 1 {
        (target - current) / (cycles - 1) as f64
    } else {
        0.0
    };

    (1..=weeks)
        .map(|w| {
            let cycle = (w - 1) / cycle_len;
            let pos = ((w - 1) % cycle_len) as usize;
            let load = current + step * cycle as f64;
            let note = if pos == 0 && cycle > 0 {
                "load up, reset reps"
            } else {
                "add reps"
            };
            week(w, load, 3, DOUBLE_PROGRESSION_REPS[pos], false, note)
        })
        .collect()
}

/// Four-week blocks: volume, strength, intensity, deload.
fn periodized(current: f64, target: f64, weeks: u32) -> Vec<ProgressionWeek> {
    let blocks = weeks.div_ceil(DELOAD_INTERVAL);
    (1..=weeks)
        .map(|w| {
            let block = (w - 1) / DELOAD_INTERVAL;
            let peak = current + (target - current) * (block + 1) as f64 / blocks as f64;
            match (w - 1) % DELOAD_INTERVAL {
                0 => week(w, peak * 0.90, 3, 10, false, "volume"),
                1 => week(w, peak * 0.95, 4, 8, false, "strength"),
                2 => week(w, peak, 4, 6, false, "intensity"),
                _ => week(w, peak * DELOAD_FACTOR, 2, 8, true, "deload"),
            }
        })
        .collect()
}

/// Three-week waves at 90/95/100% of a rising wave top.
fn wave_loading(current: f64, target: f64, weeks: u32) -> Vec<ProgressionWeek> {
    let wave_len = WAVE_REPS.len() as u32;
    let waves = weeks.div_ceil(wave_len);
    (1..=weeks)
        .map(|w| {
            let wave = (w - 1) / wave_len;
            let pos = ((w - 1) % wave_len) as usize;
            let top = current + (target - current) * (wave + 1) as f64 / waves as f64;
            week(w, top * WAVE_LOADS[pos], 3, WAVE_REPS[pos], false, "wave")
        })
        .collect()
}

pub fn generate_progression_weeks(
    current_weight: f64,
    target_weight: f64,
    weeks: u32,
    strategy: ProgressionStrategy,
) -> Result<ProgressionPlan> {
    let current = error::positive("current_weight", current_weight)?;
    let target = error::positive("target_weight", target_weight)?;
    if weeks == 0 {
        return Err(ValidationError::TooFewWeeks {
            required: 1,
            got: 0,
        });
    }
    periodization::check_max_weeks(weeks)?;

    let plan = match strategy {
        ProgressionStrategy::Linear => linear(current, target, weeks),
        ProgressionStrategy::DoubleProgression => double_progression(current, target, weeks),
        ProgressionStrategy::Periodized => periodized(current, target, weeks),
        ProgressionStrategy::WaveLoading => wave_loading(current, target, weeks),
    };

    Ok(ProgressionPlan {
        strategy,
        current_weight: current,
        target_weight: target,
        total_increase: RoundingPolicy::Tenth.apply(target - current),
        weeks: plan,
    })
}
