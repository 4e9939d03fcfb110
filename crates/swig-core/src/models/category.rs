use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::SwigError;

/// Thematic tag on a rule. Used only for diversity bookkeeping during
/// selection; categories carry no weight of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Camera,
    Film,
    Technique,
    Location,
    Equipment,
    General,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 6] = [
        Category::Camera,
        Category::Film,
        Category::Technique,
        Category::Location,
        Category::Equipment,
        Category::General,
    ];

    /// Storage / wire tag.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Camera => "camera",
            Self::Film => "film",
            Self::Technique => "technique",
            Self::Location => "location",
            Self::Equipment => "equipment",
            Self::General => "general",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = SwigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| SwigError::invalid("category", format!("unknown category '{s}'")))
    }
}
