//! # swig-rules
//!
//! The rule engine: a static catalog of rule templates, a category-diverse
//! weighted selector, drink escalation, and materialization of templates
//! into concrete rule text.

pub mod catalog;
pub mod engine;
pub mod escalator;
pub mod materializer;
pub mod selector;

pub use catalog::{catalog, validate_catalog, CatalogError, RuleTemplate, CATALOG};
pub use engine::RuleEngine;
pub use escalator::{calculate_effective_drink, drink_display};
pub use materializer::{MaterializeContext, MaterializedRule};
pub use selector::select_rules;
