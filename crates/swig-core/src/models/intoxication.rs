use std::fmt;

use serde::{Deserialize, Serialize};

/// Caller-facing intoxication level. 1-based: level 1 leaves every rule at
/// its base drink, each step above adds one drink level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IntoxicationLevel(i32);

impl IntoxicationLevel {
    /// Lowest valid level.
    pub const MIN: i32 = 1;

    pub fn new(value: i32) -> Self {
        Self(value)
    }

    pub fn value(self) -> i32 {
        self.0
    }

    /// Whether the level is usable for a game (>= 1).
    pub fn is_valid(self) -> bool {
        self.0 >= Self::MIN
    }

    /// 0-based amount added to a base drink during escalation.
    /// Never negative, so escalation never drops below the base drink.
    pub fn escalation_offset(self) -> i32 {
        self.0.saturating_sub(1).max(0)
    }
}

impl Default for IntoxicationLevel {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl fmt::Display for IntoxicationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for IntoxicationLevel {
    fn from(value: i32) -> Self {
        Self::new(value)
    }
}
