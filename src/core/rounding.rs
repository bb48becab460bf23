use serde::{Deserialize, Serialize};

/// Granularity a calculator rounds its outputs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingPolicy {
    /// Whole units (kcal, ml, grams).
    Integer,
    /// One decimal (1RM estimates, BMI, glycemic load).
    Tenth,
    /// Two decimals (weekly weight change).
    Hundredth,
    /// Quarter steps.
    Quarter,
    /// Nearest 0.5 kg.
    HalfKg,
    /// Nearest 1.25 kg, the smallest common plate pair.
    Plate,
}

impl RoundingPolicy {
    pub fn step(self) -> f64 {
        match self {
            Self::Integer => 1.0,
            Self::Tenth => 0.1,
            Self::Hundredth => 0.01,
            Self::Quarter => 0.25,
            Self::HalfKg => 0.5,
            Self::Plate => 1.25,
        }
    }

    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::Integer => value.round(),
            // (x / 0.1).round() * 0.1 leaves 115.10000000000001
            Self::Tenth => (value * 10.0).round() / 10.0,
            Self::Hundredth => (value * 100.0).round() / 100.0,
            _ => {
                let step = self.step();
                (value / step).round() * step
            }
        }
    }
}
