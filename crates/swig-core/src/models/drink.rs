use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::SwigError;

/// Ordinal drink intensity. Shot is the ceiling; nothing escalates past it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
pub enum DrinkLevel {
    Sip = 0,
    Gulp = 1,
    Pull = 2,
    Shot = 3,
}

/// Name and icon shown next to a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DrinkDisplay {
    pub name: &'static str,
    pub icon: &'static str,
}

impl DrinkLevel {
    /// Highest level, as an integer.
    pub const MAX: i32 = DrinkLevel::Shot as i32;

    /// All levels, lowest first.
    pub const ALL: [DrinkLevel; 4] = [
        DrinkLevel::Sip,
        DrinkLevel::Gulp,
        DrinkLevel::Pull,
        DrinkLevel::Shot,
    ];

    /// Integer value of the level.
    pub fn value(self) -> i32 {
        self as i32
    }

    /// Exact lookup; `None` for anything outside 0..=3.
    pub fn from_value(value: i32) -> Option<Self> {
        match value {
            0 => Some(Self::Sip),
            1 => Some(Self::Gulp),
            2 => Some(Self::Pull),
            3 => Some(Self::Shot),
            _ => None,
        }
    }

    pub fn display(self) -> DrinkDisplay {
        match self {
            Self::Sip => DrinkDisplay { name: "Sip", icon: "🥤" },
            Self::Gulp => DrinkDisplay { name: "Gulp", icon: "🥃" },
            Self::Pull => DrinkDisplay { name: "Pull", icon: "🍺" },
            Self::Shot => DrinkDisplay { name: "Shot", icon: "🥃" },
        }
    }
}

impl fmt::Display for DrinkLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display().name)
    }
}

impl From<DrinkLevel> for i32 {
    fn from(level: DrinkLevel) -> Self {
        level.value()
    }
}

impl TryFrom<i32> for DrinkLevel {
    type Error = SwigError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::from_value(value)
            .ok_or_else(|| SwigError::invalid("drink level", format!("{value} is not 0..=3")))
    }
}
