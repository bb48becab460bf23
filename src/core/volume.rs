//! Training volume, intensity and time under tension.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

use super::error::{self, Result, ValidationError};
use super::rounding::RoundingPolicy;

/// Seconds per phase of a rep: lowering, bottom pause, lifting, top pause.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tempo {
    pub eccentric: u32,
    pub bottom_pause: u32,
    pub concentric: u32,
    pub top_pause: u32,
}

impl Tempo {
    pub fn seconds_per_rep(&self) -> u32 {
        self.eccentric + self.bottom_pause + self.concentric + self.top_pause
    }
}

impl FromStr for Tempo {
    type Err = ValidationError;

    /// `3-1-2-0` or `31X0`. An explosive `X` counts as one second.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let invalid = || ValidationError::InvalidTempo(s.to_string());
        let re = Regex::new(r"^([0-9xX])-?([0-9xX])-?([0-9xX])-?([0-9xX])$")
            .map_err(|_| invalid())?;
        let caps = re.captures(s.trim()).ok_or_else(invalid)?;
        let secs = |i: usize| -> u32 {
            match &caps[i] {
                "x" | "X" => 1,
                d => d.parse().unwrap_or(0),
            }
        };
        Ok(Self {
            eccentric: secs(1),
            bottom_pause: secs(2),
            concentric: secs(3),
            top_pause: secs(4),
        })
    }
}

/// `sets` sets of `reps` reps at `weight` kg.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SetGroup {
    pub exercise: String,
    pub weight: f64,
    pub reps: u32,
    pub sets: u32,
}

impl FromStr for SetGroup {
    type Err = anyhow::Error;

    /// `squat:100x5x3` (exercise optional, sets default to 1).
    fn from_str(s: &str) -> anyhow::Result<Self> {
        let (exercise, load) = match s.split_once(':') {
            Some((e, rest)) => (e.trim().to_string(), rest),
            None => ("exercise".to_string(), s),
        };
        let parts: Vec<&str> = load.split(['x', 'X']).map(str::trim).collect();
        if !(2..=3).contains(&parts.len()) {
            anyhow::bail!("set must look like WEIGHTxREPS[xSETS], got: {}", s);
        }
        let weight: f64 = parts[0]
            .parse()
            .map_err(|_| anyhow::anyhow!("invalid weight in set: {}", s))?;
        let reps: u32 = parts[1]
            .parse()
            .map_err(|_| anyhow::anyhow!("invalid reps in set: {}", s))?;
        let sets: u32 = match parts.get(2) {
            Some(p) => p
                .parse()
                .map_err(|_| anyhow::anyhow!("invalid set count in set: {}", s))?,
            None => 1,
        };
        Ok(Self {
            exercise,
            weight,
            reps,
            sets,
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct ExerciseVolume {
    pub sets: u32,
    pub reps: u32,
    pub tonnage: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct VolumeSummary {
    pub total_sets: u32,
    pub total_reps: u32,
    pub tonnage: f64,
    pub average_load: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relative_intensity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_under_tension_s: Option<u32>,
    pub by_exercise: BTreeMap<String, ExerciseVolume>,
}

/// A session total that no longer fits in a `u32`.
fn too_many(field: &'static str, value: f64) -> ValidationError {
    ValidationError::OutOfRange {
        field,
        min: 0.0,
        max: u32::MAX as f64,
        value,
    }
}

/// Aggregate a session. `one_rep_max` turns average load into a percentage;
/// `tempo` adds total time under tension.
pub fn summarize_volume(
    groups: &[SetGroup],
    one_rep_max: Option<f64>,
    tempo: Option<Tempo>,
) -> Result<VolumeSummary> {
    let mut by_exercise: BTreeMap<String, ExerciseVolume> = BTreeMap::new();
    let (mut total_sets, mut total_reps, mut tonnage) = (0u32, 0u32, 0.0);

    for g in groups {
        let weight = error::non_negative("weight", g.weight)?;
        let reps = g
            .reps
            .checked_mul(g.sets)
            .ok_or_else(|| too_many("reps", g.reps as f64 * g.sets as f64))?;
        let load = weight * reps as f64;

        let entry = by_exercise.entry(g.exercise.clone()).or_default();
        entry.sets = entry
            .sets
            .checked_add(g.sets)
            .ok_or_else(|| too_many("sets", entry.sets as f64 + g.sets as f64))?;
        entry.reps = entry
            .reps
            .checked_add(reps)
            .ok_or_else(|| too_many("reps", entry.reps as f64 + reps as f64))?;
        entry.tonnage += load;

        total_sets = total_sets
            .checked_add(g.sets)
            .ok_or_else(|| too_many("sets", total_sets as f64 + g.sets as f64))?;
        total_reps = total_reps
            .checked_add(reps)
            .ok_or_else(|| too_many("reps", total_reps as f64 + reps as f64))?;
        tonnage += load;
    }

    let average_load = if total_reps == 0 {
        0.0
    } else {
        tonnage / total_reps as f64
    };
    let relative_intensity = match one_rep_max {
        Some(orm) => {
            let orm = error::positive("one_rep_max", orm)?;
            Some(RoundingPolicy::Tenth.apply(average_load / orm * 100.0))
        }
        None => None,
    };

    let time_under_tension_s = match tempo {
        Some(t) => Some(
            t.seconds_per_rep().checked_mul(total_reps).ok_or_else(|| {
                too_many(
                    "time_under_tension_s",
                    t.seconds_per_rep() as f64 * total_reps as f64,
                )
            })?,
        ),
        None => None,
    };

    for v in by_exercise.values_mut() {
        v.tonnage = RoundingPolicy::Tenth.apply(v.tonnage);
    }

    Ok(VolumeSummary {
        total_sets,
        total_reps,
        tonnage: RoundingPolicy::Tenth.apply(tonnage),
        average_load: RoundingPolicy::Tenth.apply(average_load),
        relative_intensity,
        time_under_tension_s,
        by_exercise,
    })
}
