use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use crate::core::energy::BmrMethod;
use crate::core::hydration::Climate;
use crate::core::macros::{GoalProfile, MacroRatios};
use crate::models::settings::Settings;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[serde(alias = "M", alias = "m")]
    Male,
    #[serde(alias = "F", alias = "f")]
    Female,
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Male => write!(f, "male"),
            Self::Female => write!(f, "female"),
        }
    }
}

impl FromStr for Gender {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "male" | "m" | "M" => Ok(Self::Male),
            "female" | "f" | "F" => Ok(Self::Female),
            _ => anyhow::bail!("invalid gender: {} (expected male/female)", s),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        Self::Sedentary,
        Self::Light,
        Self::Moderate,
        Self::Active,
        Self::VeryActive,
    ];

    /// TDEE multiplier applied to BMR.
    pub fn multiplier(self) -> f64 {
        match self {
            Self::Sedentary => 1.2,
            Self::Light => 1.375,
            Self::Moderate => 1.55,
            Self::Active => 1.725,
            Self::VeryActive => 1.9,
        }
    }

    /// Extra daily water in ml on top of the weight-based baseline.
    pub fn hydration_bonus_ml(self) -> f64 {
        match self {
            Self::Sedentary => 0.0,
            Self::Light => 250.0,
            Self::Moderate => 500.0,
            Self::Active => 750.0,
            Self::VeryActive => 1000.0,
        }
    }
}

impl std::fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sedentary => write!(f, "sedentary"),
            Self::Light => write!(f, "light"),
            Self::Moderate => write!(f, "moderate"),
            Self::Active => write!(f, "active"),
            Self::VeryActive => write!(f, "very_active"),
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "sedentary" => Ok(Self::Sedentary),
            "light" => Ok(Self::Light),
            "moderate" => Ok(Self::Moderate),
            "active" => Ok(Self::Active),
            "very_active" | "very-active" => Ok(Self::VeryActive),
            _ => anyhow::bail!(
                "invalid activity level: {} (expected sedentary/light/moderate/active/very_active)",
                s
            ),
        }
    }
}

/// Body data every energy calculator starts from.
///
/// `weight` is kilograms and `height` centimetres. Range hints are not
/// enforced: out-of-range values are stored and computed as given.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Demographics {
    pub age: u32,
    pub gender: Gender,
    pub weight: f64,
    pub height: f64,
    pub activity_level: ActivityLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_fat: Option<f64>,
}

impl Default for Demographics {
    fn default() -> Self {
        Self {
            age: 30,
            gender: Gender::Male,
            weight: 70.0,
            height: 170.0,
            activity_level: ActivityLevel::Moderate,
            body_fat: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goals {
    pub objective: GoalProfile,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekly_workouts: Option<u32>,
}

impl Default for Goals {
    fn default() -> Self {
        Self {
            objective: GoalProfile::Maintenance,
            target_weight: None,
            weekly_workouts: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub bmr_method: BmrMethod,
    /// Custom split; `None` means use the goal preset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub macro_ratios: Option<MacroRatios>,
    pub meals_per_day: u32,
    pub climate: Climate,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            bmr_method: BmrMethod::MifflinStJeor,
            macro_ratios: None,
            meals_per_day: 4,
            climate: Climate::Temperate,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub demographics: Demographics,
    pub goals: Goals,
    pub preferences: Preferences,
    pub settings: Settings,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    /// The hard-coded profile a first save merges over.
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            demographics: Demographics::default(),
            goals: Goals::default(),
            preferences: Preferences::default(),
            settings: Settings::default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Shallow merge: each section present in `update` replaces ours wholesale.
    pub fn merge(&mut self, update: ProfileUpdate) {
        if let Some(d) = update.demographics {
            self.demographics = d;
        }
        if let Some(g) = update.goals {
            self.goals = g;
        }
        if let Some(p) = update.preferences {
            self.preferences = p;
        }
        if let Some(s) = update.settings {
            self.settings = s;
        }
    }
}

impl Default for UserProfile {
    fn default() -> Self {
        Self::new()
    }
}

/// Partial profile for `Store::save_user_profile`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(default)]
    pub demographics: Option<Demographics>,
    #[serde(default)]
    pub goals: Option<Goals>,
    #[serde(default)]
    pub preferences: Option<Preferences>,
    #[serde(default)]
    pub settings: Option<Settings>,
}
