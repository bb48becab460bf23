pub mod config;
pub mod profile;
pub mod settings;
pub mod tracking;

pub use profile::{ActivityLevel, Demographics, Gender, ProfileUpdate, UserProfile};
pub use settings::{Settings, UnitSystem};
pub use tracking::{TrackingData, TrackingUpdate};
