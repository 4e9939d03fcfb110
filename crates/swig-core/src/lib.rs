//! # swig-core
//!
//! Foundation crate for swig.
//! Defines the shared types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod tracing_setup;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::SwigConfig;
pub use errors::{SwigError, SwigResult};
pub use models::{Category, DrinkDisplay, DrinkLevel, Game, IntoxicationLevel, Rule};
