use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(
    name = "fitcalc",
    version,
    about = "Fitness and nutrition calculators with a local profile"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as human-readable text instead of JSON
    #[arg(long = "human", short = 'H', global = true)]
    pub human: bool,

    /// Override the entry date for track commands (YYYY-MM-DD)
    #[arg(long, global = true)]
    pub date: Option<NaiveDate>,
}

/// Body values a calculator can take from flags instead of the profile.
#[derive(clap::Args, Debug, Default, Clone)]
pub struct BodyArgs {
    /// Age in years
    #[arg(long)]
    pub age: Option<u32>,
    /// male or female
    #[arg(long)]
    pub gender: Option<String>,
    /// Body weight (kg, or lbs with imperial units)
    #[arg(long)]
    pub weight: Option<f64>,
    /// Height (cm, or in with imperial units)
    #[arg(long)]
    pub height: Option<f64>,
    /// sedentary, light, moderate, active, very_active
    #[arg(long)]
    pub activity: Option<String>,
    /// Body fat percentage
    #[arg(long)]
    pub body_fat: Option<f64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the config file and an initial profile
    Init {
        /// Skip interactive setup, use defaults
        #[arg(long)]
        skip: bool,
    },

    /// Show or edit the stored profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },

    /// Record tracking entries
    Track {
        #[command(subcommand)]
        action: TrackAction,
    },

    /// Basal metabolic rate and daily energy expenditure
    Bmr {
        #[command(flatten)]
        body: BodyArgs,
        /// mifflin, harris or katch
        #[arg(long)]
        method: Option<String>,
    },

    /// Protein / fat / carbohydrate split for a calorie target
    Macros {
        /// Calorie target; defaults to the profile TDEE adjusted for the goal
        #[arg(long)]
        calories: Option<f64>,
        /// cutting, maintenance, bulking, recomposition
        #[arg(long)]
        goal: Option<String>,
        /// Protein percentage; the other two are rebalanced around it
        #[arg(long)]
        protein: Option<u32>,
        /// Fat percentage
        #[arg(long)]
        fat: Option<u32>,
        /// Carbohydrate percentage
        #[arg(long)]
        carb: Option<u32>,
    },

    /// Daily protein requirement
    Protein {
        /// sedentary, endurance, strength, fat_loss, muscle_gain
        #[arg(long, default_value = "strength")]
        objective: String,
        /// Body weight (kg, or lbs with imperial units)
        #[arg(long)]
        weight: Option<f64>,
        /// Meals per day
        #[arg(long)]
        meals: Option<u32>,
    },

    /// Daily water requirement
    Hydration {
        /// Body weight (kg, or lbs with imperial units)
        #[arg(long)]
        weight: Option<f64>,
        /// sedentary, light, moderate, active, very_active
        #[arg(long)]
        activity: Option<String>,
        /// cold, temperate, hot, hot_humid
        #[arg(long)]
        climate: Option<String>,
        /// Minutes of exercise today
        #[arg(long, default_value_t = 0)]
        exercise: u32,
    },

    /// Glycemic load of a food, or of a meal given as JSON
    Glycemic {
        /// Glycemic index (0-100)
        #[arg(required_unless_present = "meal")]
        gi: Option<f64>,
        /// Carbohydrates in grams
        #[arg(required_unless_present = "meal")]
        carbs: Option<f64>,
        /// Fiber in grams
        #[arg(long, default_value_t = 0.0)]
        fiber: f64,
        /// JSON array of {name, glycemic_index, carbs_g, fiber_g}
        #[arg(long)]
        meal: Option<String>,
    },

    /// Estimate a one-rep max and loading table
    #[command(name = "one-rm")]
    OneRm {
        /// Weight lifted (kg, or lbs with imperial units)
        weight: f64,
        /// Reps completed
        reps: u32,
    },

    /// Session volume, intensity and time under tension
    Volume {
        /// Sets as [EXERCISE:]WEIGHTxREPS[xSETS], repeatable
        #[arg(long = "set", required = true)]
        sets: Vec<String>,
        /// One-rep max for relative intensity
        #[arg(long)]
        one_rm: Option<f64>,
        /// Tempo such as 3-1-2-0
        #[arg(long)]
        tempo: Option<String>,
    },

    /// BMI and, with tape measurements, US Navy body fat
    Body {
        #[command(flatten)]
        body: BodyArgs,
        /// Waist circumference
        #[arg(long)]
        waist: Option<f64>,
        /// Neck circumference
        #[arg(long)]
        neck: Option<f64>,
        /// Hip circumference (women)
        #[arg(long)]
        hip: Option<f64>,
    },

    /// Project body weight under a daily calorie intake
    Balance {
        /// Daily calorie intake
        #[arg(long)]
        intake: f64,
        /// Number of weeks to project
        #[arg(long, default_value_t = 12)]
        weeks: u32,
        /// beginner, intermediate, advanced
        #[arg(long, default_value = "intermediate")]
        experience: String,
    },

    /// Split a training cycle into phases
    Periodize {
        /// Cycle length in weeks
        weeks: u32,
        /// strength, hypertrophy, competition
        #[arg(long, default_value = "strength")]
        objective: String,
    },

    /// Week-by-week loads from a current to a target weight
    Progress {
        /// Current working weight
        current: f64,
        /// Target working weight
        target: f64,
        /// Number of weeks
        weeks: u32,
        /// linear, double_progression, periodized, wave_loading
        #[arg(long, default_value = "linear")]
        strategy: String,
    },

    /// Export profile, tracking data and settings as JSON
    Export {
        /// Write to a file instead of stdout
        #[arg(long)]
        output: Option<String>,
    },

    /// Import a previous export
    Import {
        /// Path to the export file
        file: String,
    },

    /// Delete the stored profile, tracking data and settings
    Clear {
        /// Confirm deletion
        #[arg(long)]
        yes: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Print a shell completion script
    Completions {
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Show the stored profile
    Show,
    /// Update profile fields
    Set {
        #[command(flatten)]
        body: BodyArgs,
        /// cutting, maintenance, bulking, recomposition
        #[arg(long)]
        goal: Option<String>,
        /// Target body weight
        #[arg(long)]
        target_weight: Option<f64>,
        /// mifflin, harris or katch
        #[arg(long)]
        bmr_method: Option<String>,
        /// Meals per day
        #[arg(long)]
        meals: Option<u32>,
        /// cold, temperate, hot, hot_humid
        #[arg(long)]
        climate: Option<String>,
        /// metric or imperial
        #[arg(long)]
        units: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum TrackAction {
    /// Log body weight
    Weight {
        value: f64,
        #[arg(long)]
        note: Option<String>,
    },
    /// Log a body measurement (e.g. waist, chest, arm)
    Measure { body_part: String, value: f64 },
    /// Log a set and its estimated 1RM
    Lift {
        exercise: String,
        weight: f64,
        reps: u32,
    },
    /// Log water intake
    Water { amount: f64 },
    /// Log body fat percentage
    BodyFat { percent: f64 },
    /// Log a night of sleep
    Sleep {
        hours: f64,
        /// Quality 1-5
        #[arg(long)]
        quality: Option<u8>,
    },
    /// Log a meal or day of eating
    Meal {
        calories: f64,
        #[arg(long, default_value_t = 0.0)]
        protein: f64,
        #[arg(long, default_value_t = 0.0)]
        carbs: f64,
        #[arg(long, default_value_t = 0.0)]
        fat: f64,
    },
    /// Log a workout
    Workout {
        name: String,
        minutes: u32,
        /// Total tonnage
        #[arg(long)]
        volume: Option<f64>,
    },
    /// Log fatigue, energy or motivation (1-10)
    Score { kind: String, score: u8 },
    /// Log an injury
    Injury {
        body_part: String,
        /// Severity 1-10
        severity: u8,
        #[arg(long)]
        note: Option<String>,
    },
    /// Show the tracking summary
    Show,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Set a config value
    Set {
        /// Config key (e.g. log.level, defaults.bmr_method)
        key: String,
        /// Config value
        value: String,
    },
}
