//! The calculation layer: independent pure functions over primitive and
//! record inputs. Nothing here touches storage.

pub mod balance;
pub mod body;
pub mod energy;
pub mod error;
pub mod glycemic;
pub mod hydration;
pub mod macros;
pub mod periodization;
pub mod progression;
pub mod protein;
pub mod rounding;
pub mod strength;
pub mod units;
pub mod volume;

pub use error::ValidationError;
pub use rounding::RoundingPolicy;
