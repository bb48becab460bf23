use super::rounding::RoundingPolicy;
use crate::models::settings::UnitSystem;

const KG_TO_LBS: f64 = 2.20462;
const IN_TO_CM: f64 = 2.54;
const FLOZ_TO_ML: f64 = 29.5735;

/// Physical quantity a stored (metric) number represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    /// kg
    Mass,
    /// cm
    Length,
    /// ml
    Volume,
}

impl Quantity {
    pub fn metric_unit(self) -> &'static str {
        match self {
            Self::Mass => "kg",
            Self::Length => "cm",
            Self::Volume => "ml",
        }
    }

    pub fn imperial_unit(self) -> &'static str {
        match self {
            Self::Mass => "lbs",
            Self::Length => "in",
            Self::Volume => "fl oz",
        }
    }
}

/// Convert a stored (metric) value to display value + display unit string.
pub fn to_display(value: f64, quantity: Quantity, units: UnitSystem) -> (f64, &'static str) {
    if !units.is_imperial() {
        return (value, quantity.metric_unit());
    }

    let converted = match quantity {
        Quantity::Mass => value * KG_TO_LBS,
        Quantity::Length => value / IN_TO_CM,
        Quantity::Volume => value / FLOZ_TO_ML,
    };
    (RoundingPolicy::Tenth.apply(converted), quantity.imperial_unit())
}

/// Return the display unit string for a quantity in the active unit system.
pub fn display_unit(quantity: Quantity, units: UnitSystem) -> &'static str {
    to_display(0.0, quantity, units).1
}

/// Convert a user-input value (in their configured unit system) to metric for storage.
pub fn from_input(value: f64, quantity: Quantity, units: UnitSystem) -> f64 {
    if !units.is_imperial() {
        return value;
    }

    match quantity {
        Quantity::Mass => value / KG_TO_LBS,
        Quantity::Length => value * IN_TO_CM,
        Quantity::Volume => value * FLOZ_TO_ML,
    }
}
