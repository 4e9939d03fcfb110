use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Category, DrinkLevel};

/// A persisted rule belonging to a game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    pub id: String,
    pub game_id: String,
    pub text: String,
    pub category: Category,
    pub weight: f64,
    pub base_drink: DrinkLevel,
    /// Post-escalation intensity shown to players. Never above `DrinkLevel::MAX`.
    pub effective_drink: i32,
    pub is_custom: bool,
    /// 1-based, contiguous within a game.
    pub order: u32,
    pub created_at: DateTime<Utc>,
}
