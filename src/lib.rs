//! Fitness and nutrition calculators with a local profile and tracking store.
//!
//! [`core`] holds the formulas, [`store`] persists the user profile and
//! tracking history, [`output`] renders results for the CLI.

pub mod core;
pub mod models;
pub mod output;
pub mod store;
