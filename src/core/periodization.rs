//! Splits a training cycle into named phases.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::{Result, ValidationError};

/// Every Nth week of a cycle is a deload.
pub const DELOAD_INTERVAL: u32 = 4;

/// Longest plan any generator will lay out (ten years).
pub const MAX_WEEKS: u32 = 520;

/// Reject plans longer than `MAX_WEEKS`.
pub(crate) fn check_max_weeks(weeks: u32) -> Result<()> {
    if weeks > MAX_WEEKS {
        return Err(ValidationError::OutOfRange {
            field: "weeks",
            min: 1.0,
            max: MAX_WEEKS as f64,
            value: weeks as f64,
        });
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Objective {
    Strength,
    Hypertrophy,
    Competition,
}

impl std::fmt::Display for Objective {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Strength => write!(f, "strength"),
            Self::Hypertrophy => write!(f, "hypertrophy"),
            Self::Competition => write!(f, "competition"),
        }
    }
}

impl FromStr for Objective {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "strength" => Ok(Self::Strength),
            "hypertrophy" => Ok(Self::Hypertrophy),
            "competition" => Ok(Self::Competition),
            _ => anyhow::bail!(
                "invalid objective: {} (expected strength/hypertrophy/competition)",
                s
            ),
        }
    }
}

struct PhaseTemplate {
    name: &'static str,
    share: f64,
    intensity: &'static str,
    volume: &'static str,
    rep_range: &'static str,
    focus: &'static str,
}

const HYPERTROPHY: &[PhaseTemplate] = &[
    PhaseTemplate {
        name: "Accumulation",
        share: 0.6,
        intensity: "65-75% 1RM",
        volume: "high",
        rep_range: "8-12",
        focus: "work capacity and muscle growth",
    },
    PhaseTemplate {
        name: "Intensification",
        share: 0.4,
        intensity: "75-85% 1RM",
        volume: "moderate",
        rep_range: "6-8",
        focus: "heavier loading on the same movements",
    },
];

const STRENGTH: &[PhaseTemplate] = &[
    PhaseTemplate {
        name: "Hypertrophy base",
        share: 0.35,
        intensity: "65-75% 1RM",
        volume: "high",
        rep_range: "8-10",
        focus: "muscle mass and technique",
    },
    PhaseTemplate {
        name: "Maximal strength",
        share: 0.40,
        intensity: "80-88% 1RM",
        volume: "moderate",
        rep_range: "3-6",
        focus: "force production",
    },
    PhaseTemplate {
        name: "Peaking",
        share: 0.25,
        intensity: "90-95% 1RM",
        volume: "low",
        rep_range: "1-3",
        focus: "expressing maximal strength",
    },
];

const COMPETITION: &[PhaseTemplate] = &[
    PhaseTemplate {
        name: "General preparation",
        share: 0.30,
        intensity: "60-70% 1RM",
        volume: "high",
        rep_range: "8-12",
        focus: "general fitness and weak points",
    },
    PhaseTemplate {
        name: "Specific preparation",
        share: 0.30,
        intensity: "70-85% 1RM",
        volume: "moderate-high",
        rep_range: "4-6",
        focus: "competition lifts",
    },
    PhaseTemplate {
        name: "Pre-competition",
        share: 0.25,
        intensity: "85-95% 1RM",
        volume: "moderate",
        rep_range: "2-3",
        focus: "openers and heavy singles",
    },
    PhaseTemplate {
        name: "Taper",
        share: 0.15,
        intensity: "90-100% 1RM",
        volume: "low",
        rep_range: "1-2",
        focus: "recovery before the meet",
    },
];

impl Objective {
    fn templates(self) -> &'static [PhaseTemplate] {
        match self {
            Self::Hypertrophy => HYPERTROPHY,
            Self::Strength => STRENGTH,
            Self::Competition => COMPETITION,
        }
    }

    pub fn phase_count(self) -> u32 {
        self.templates().len() as u32
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Phase {
    pub name: &'static str,
    pub weeks: u32,
    pub start_week: u32,
    pub end_week: u32,
    pub intensity: &'static str,
    pub volume: &'static str,
    pub rep_range: &'static str,
    pub focus: &'static str,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PeriodizationPlan {
    pub objective: Objective,
    pub total_weeks: u32,
    pub phases: Vec<Phase>,
    pub deload_weeks: Vec<u32>,
}

/// Largest-remainder apportionment with a floor of one week per phase.
fn allocate_weeks(total: u32, shares: &[f64]) -> Vec<u32> {
    let exact: Vec<f64> = shares.iter().map(|s| s * total as f64).collect();
    let mut weeks: Vec<u32> = exact.iter().map(|e| e.floor() as u32).collect();

    let mut leftover = total - weeks.iter().sum::<u32>();
    let mut order: Vec<usize> = (0..shares.len()).collect();
    order.sort_by(|&a, &b| {
        let ra = exact[a] - exact[a].floor();
        let rb = exact[b] - exact[b].floor();
        rb.total_cmp(&ra).then(a.cmp(&b))
    });
    for &i in order.iter().cycle() {
        if leftover == 0 {
            break;
        }
        weeks[i] += 1;
        leftover -= 1;
    }

    // Short cycles: lend a week from the longest phase to any empty one.
    while let Some(empty) = weeks.iter().position(|&w| w == 0) {
        let (longest, _) = weeks
            .iter()
            .enumerate()
            .max_by(|(ia, a), (ib, b)| a.cmp(b).then(ib.cmp(ia)))
            .unwrap_or((0, &0));
        if weeks[longest] <= 1 {
            break;
        }
        weeks[longest] -= 1;
        weeks[empty] += 1;
    }
    weeks
}

pub fn deload_weeks(total_weeks: u32) -> Vec<u32> {
    (1..=total_weeks / DELOAD_INTERVAL)
        .map(|n| n * DELOAD_INTERVAL)
        .collect()
}

pub fn generate_periodization_phases(
    total_weeks: u32,
    objective: Objective,
) -> Result<PeriodizationPlan> {
    let templates = objective.templates();
    let required = templates.len() as u32;
    check_max_weeks(total_weeks)?;
    if total_weeks < required {
        return Err(ValidationError::TooFewWeeks {
            required,
            got: total_weeks,
        });
    }

    let shares: Vec<f64> = templates.iter().map(|t| t.share).collect();
    let weeks = allocate_weeks(total_weeks, &shares);

    let mut start = 1;
    let phases = templates
        .iter()
        .zip(weeks)
        .map(|(t, w)| {
            let phase = Phase {
                name: t.name,
                weeks: w,
                start_week: start,
                end_week: start + w - 1,
                intensity: t.intensity,
                volume: t.volume,
                rep_range: t.rep_range,
                focus: t.focus,
            };
            start += w;
            phase
        })
        .collect();

    Ok(PeriodizationPlan {
        objective,
        total_weeks,
        phases,
        deload_weeks: deload_weeks(total_weeks),
    })
}
