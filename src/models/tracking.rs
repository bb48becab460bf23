use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeightEntry {
    pub date: NaiveDate,
    /// Kilograms.
    pub weight: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MeasurementEntry {
    pub date: NaiveDate,
    /// Centimetres.
    pub value: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutEntry {
    pub date: NaiveDate,
    pub name: String,
    pub duration_minutes: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NutritionEntry {
    pub date: NaiveDate,
    pub calories: f64,
    #[serde(default)]
    pub protein: f64,
    #[serde(default)]
    pub carbs: f64,
    #[serde(default)]
    pub fat: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HydrationEntry {
    pub date: NaiveDate,
    /// Millilitres.
    pub amount: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceEntry {
    pub date: NaiveDate,
    pub weight: f64,
    pub reps: u32,
    pub one_rep_max: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BodyFatEntry {
    pub date: NaiveDate,
    pub percent: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SleepEntry {
    pub date: NaiveDate,
    pub hours: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<u8>,
}

/// Subjective 1-10 rating (fatigue, energy, motivation).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoreEntry {
    pub date: NaiveDate,
    pub score: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InjuryEntry {
    pub date: NaiveDate,
    pub body_part: String,
    pub severity: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Which subjective score list an entry goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreKind {
    Fatigue,
    Energy,
    Motivation,
}

impl std::str::FromStr for ScoreKind {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "fatigue" => Ok(Self::Fatigue),
            "energy" => Ok(Self::Energy),
            "motivation" => Ok(Self::Motivation),
            _ => anyhow::bail!("invalid score kind: {} (expected fatigue/energy/motivation)", s),
        }
    }
}

/// Everything the user has logged over time.
///
/// Lists only grow. `weight` and each `measurements` list stay sorted by
/// date; the rest keep insertion order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrackingData {
    #[serde(default)]
    pub weight: Vec<WeightEntry>,
    #[serde(default)]
    pub measurements: BTreeMap<String, Vec<MeasurementEntry>>,
    #[serde(default)]
    pub workouts: Vec<WorkoutEntry>,
    #[serde(default)]
    pub nutrition: Vec<NutritionEntry>,
    #[serde(default)]
    pub hydration: Vec<HydrationEntry>,
    #[serde(default)]
    pub performance: BTreeMap<String, Vec<PerformanceEntry>>,
    #[serde(default)]
    pub body_fat: Vec<BodyFatEntry>,
    #[serde(default)]
    pub sleep: Vec<SleepEntry>,
    #[serde(default)]
    pub fatigue: Vec<ScoreEntry>,
    #[serde(default)]
    pub energy: Vec<ScoreEntry>,
    #[serde(default)]
    pub motivation: Vec<ScoreEntry>,
    #[serde(default)]
    pub injuries: Vec<InjuryEntry>,
}

impl TrackingData {
    /// Replace every list present in `update`, then restore date order.
    pub fn apply(&mut self, update: TrackingUpdate) {
        let TrackingUpdate {
            weight,
            measurements,
            workouts,
            nutrition,
            hydration,
            performance,
            body_fat,
            sleep,
            fatigue,
            energy,
            motivation,
            injuries,
        } = update;

        if let Some(v) = weight {
            self.weight = v;
        }
        if let Some(v) = measurements {
            self.measurements = v;
        }
        if let Some(v) = workouts {
            self.workouts = v;
        }
        if let Some(v) = nutrition {
            self.nutrition = v;
        }
        if let Some(v) = hydration {
            self.hydration = v;
        }
        if let Some(v) = performance {
            self.performance = v;
        }
        if let Some(v) = body_fat {
            self.body_fat = v;
        }
        if let Some(v) = sleep {
            self.sleep = v;
        }
        if let Some(v) = fatigue {
            self.fatigue = v;
        }
        if let Some(v) = energy {
            self.energy = v;
        }
        if let Some(v) = motivation {
            self.motivation = v;
        }
        if let Some(v) = injuries {
            self.injuries = v;
        }
        self.sort_dated();
    }

    /// Stable sort, so same-day entries keep the order they were logged in.
    pub fn sort_dated(&mut self) {
        self.weight.sort_by_key(|e| e.date);
        for entries in self.measurements.values_mut() {
            entries.sort_by_key(|e| e.date);
        }
    }

    pub fn latest_weight(&self) -> Option<&WeightEntry> {
        self.weight.last()
    }

    pub fn latest_body_fat(&self) -> Option<&BodyFatEntry> {
        self.body_fat.iter().max_by_key(|e| e.date)
    }

    /// Best estimated 1RM logged for an exercise.
    pub fn best_one_rep_max(&self, exercise: &str) -> Option<f64> {
        self.performance
            .get(exercise)?
            .iter()
            .map(|e| e.one_rep_max)
            .fold(None, |best, v| Some(best.map_or(v, |b: f64| b.max(v))))
    }

    /// Number of entries across every list.
    pub fn entry_count(&self) -> usize {
        self.weight.len()
            + self.measurements.values().map(Vec::len).sum::<usize>()
            + self.workouts.len()
            + self.nutrition.len()
            + self.hydration.len()
            + self.performance.values().map(Vec::len).sum::<usize>()
            + self.body_fat.len()
            + self.sleep.len()
            + self.fatigue.len()
            + self.energy.len()
            + self.motivation.len()
            + self.injuries.len()
    }
}

/// Partial tracking data: each present list replaces the stored one.
#[derive(Debug, Clone, Default)]
pub struct TrackingUpdate {
    pub weight: Option<Vec<WeightEntry>>,
    pub measurements: Option<BTreeMap<String, Vec<MeasurementEntry>>>,
    pub workouts: Option<Vec<WorkoutEntry>>,
    pub nutrition: Option<Vec<NutritionEntry>>,
    pub hydration: Option<Vec<HydrationEntry>>,
    pub performance: Option<BTreeMap<String, Vec<PerformanceEntry>>>,
    pub body_fat: Option<Vec<BodyFatEntry>>,
    pub sleep: Option<Vec<SleepEntry>>,
    pub fatigue: Option<Vec<ScoreEntry>>,
    pub energy: Option<Vec<ScoreEntry>>,
    pub motivation: Option<Vec<ScoreEntry>>,
    pub injuries: Option<Vec<InjuryEntry>>,
}

impl TrackingUpdate {
    /// Update that appends `entry` to a copy of the current weight list.
    pub fn append_weight(current: &TrackingData, entry: WeightEntry) -> Self {
        let mut list = current.weight.clone();
        list.push(entry);
        Self {
            weight: Some(list),
            ..Self::default()
        }
    }

    pub fn append_measurement(
        current: &TrackingData,
        body_part: &str,
        entry: MeasurementEntry,
    ) -> Self {
        let mut map = current.measurements.clone();
        map.entry(body_part.to_string()).or_default().push(entry);
        Self {
            measurements: Some(map),
            ..Self::default()
        }
    }

    pub fn append_performance(
        current: &TrackingData,
        exercise: &str,
        entry: PerformanceEntry,
    ) -> Self {
        let mut map = current.performance.clone();
        map.entry(exercise.to_string()).or_default().push(entry);
        Self {
            performance: Some(map),
            ..Self::default()
        }
    }

    pub fn append_hydration(current: &TrackingData, entry: HydrationEntry) -> Self {
        let mut list = current.hydration.clone();
        list.push(entry);
        Self {
            hydration: Some(list),
            ..Self::default()
        }
    }

    pub fn append_body_fat(current: &TrackingData, entry: BodyFatEntry) -> Self {
        let mut list = current.body_fat.clone();
        list.push(entry);
        Self {
            body_fat: Some(list),
            ..Self::default()
        }
    }

    pub fn append_sleep(current: &TrackingData, entry: SleepEntry) -> Self {
        let mut list = current.sleep.clone();
        list.push(entry);
        Self {
            sleep: Some(list),
            ..Self::default()
        }
    }

    pub fn append_nutrition(current: &TrackingData, entry: NutritionEntry) -> Self {
        let mut list = current.nutrition.clone();
        list.push(entry);
        Self {
            nutrition: Some(list),
            ..Self::default()
        }
    }

    pub fn append_workout(current: &TrackingData, entry: WorkoutEntry) -> Self {
        let mut list = current.workouts.clone();
        list.push(entry);
        Self {
            workouts: Some(list),
            ..Self::default()
        }
    }

    pub fn append_injury(current: &TrackingData, entry: InjuryEntry) -> Self {
        let mut list = current.injuries.clone();
        list.push(entry);
        Self {
            injuries: Some(list),
            ..Self::default()
        }
    }

    pub fn append_score(current: &TrackingData, kind: ScoreKind, entry: ScoreEntry) -> Self {
        let list = match kind {
            ScoreKind::Fatigue => &current.fatigue,
            ScoreKind::Energy => &current.energy,
            ScoreKind::Motivation => &current.motivation,
        };
        let mut list = list.clone();
        list.push(entry);
        match kind {
            ScoreKind::Fatigue => Self {
                fatigue: Some(list),
                ..Self::default()
            },
            ScoreKind::Energy => Self {
                energy: Some(list),
                ..Self::default()
            },
            ScoreKind::Motivation => Self {
                motivation: Some(list),
                ..Self::default()
            },
        }
    }
}
