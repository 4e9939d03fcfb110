//! # swig-games
//!
//! Game lifecycle on top of the rule engine and a `GameStorage` backend:
//! preview generation, game creation and lookup, re-rolls, and custom rules.

pub mod requests;
pub mod service;
pub mod validation;

pub use requests::{CreateGameRequest, CustomRuleRequest, GenerateRulesRequest, NewRuleInput};
pub use service::GameService;
