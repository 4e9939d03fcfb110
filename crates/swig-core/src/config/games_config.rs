use serde::{Deserialize, Serialize};

use super::defaults;

/// Game lifecycle configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GamesConfig {
    /// Days a game stays reachable after creation.
    pub expiry_days: i64,
    /// Generated rules produced by a full re-roll.
    pub reroll_count: usize,
    /// Selection weight stored on user-authored rules.
    pub custom_rule_weight: f64,
}

impl Default for GamesConfig {
    fn default() -> Self {
        Self {
            expiry_days: defaults::DEFAULT_EXPIRY_DAYS,
            reroll_count: defaults::DEFAULT_REROLL_COUNT,
            custom_rule_weight: defaults::DEFAULT_CUSTOM_RULE_WEIGHT,
        }
    }
}
