use thiserror::Error;

/// Reasons a calculator refuses its inputs.
///
/// Range hints (age 15-100, weight 30-200 kg, ...) are not enforced here;
/// only values no formula can work with are rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    #[error("{field} must be greater than zero (got {value})")]
    NonPositive { field: &'static str, value: f64 },

    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f64 },

    #[error("{field} must be between {min} and {max} (got {value})")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
        value: f64,
    },

    #[error("Katch-McArdle requires a body fat percentage")]
    MissingBodyFat,

    #[error("plan needs at least {required} weeks (got {got})")]
    TooFewWeeks { required: u32, got: u32 },

    #[error("macro ratios must sum to 100 (got {sum})")]
    InvalidRatios { sum: u32 },

    #[error("invalid tempo: {0} (expected e.g. 3-1-2-0 or 31X0)")]
    InvalidTempo(String),
}

pub type Result<T> = std::result::Result<T, ValidationError>;

/// Reject NaN and infinities.
pub fn finite(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValidationError::NotFinite { field })
    }
}

/// Finite and strictly positive.
pub fn positive(field: &'static str, value: f64) -> Result<f64> {
    let v = finite(field, value)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(ValidationError::NonPositive { field, value: v })
    }
}

/// Finite and zero or above.
pub fn non_negative(field: &'static str, value: f64) -> Result<f64> {
    let v = finite(field, value)?;
    if v >= 0.0 {
        Ok(v)
    } else {
        Err(ValidationError::Negative { field, value: v })
    }
}

/// Finite and inside `[min, max]`.
pub fn within(field: &'static str, value: f64, min: f64, max: f64) -> Result<f64> {
    let v = finite(field, value)?;
    if (min..=max).contains(&v) {
        Ok(v)
    } else {
        Err(ValidationError::OutOfRange {
            field,
            min,
            max,
            value: v,
        })
    }
}
