//! Domain models shared across the workspace.

pub mod category;
pub mod drink;
pub mod game;
pub mod intoxication;
pub mod rule;

pub use category::Category;
pub use drink::{DrinkDisplay, DrinkLevel};
pub use game::{Game, GameWithRules};
pub use intoxication::IntoxicationLevel;
pub use rule::Rule;
