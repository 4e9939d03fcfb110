use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{IntoxicationLevel, Rule};

/// A drinking game bound to one video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: String,
    pub title: String,
    pub video_id: String,
    pub video_title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_thumbnail: Option<String>,
    pub intoxication_level: IntoxicationLevel,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub is_active: bool,
}

impl Game {
    /// Active and not yet past its expiry.
    pub fn is_available(&self, now: DateTime<Utc>) -> bool {
        self.is_active && self.expires_at >= now
    }
}

/// A game together with its rules, ordered by `order`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameWithRules {
    pub game: Game,
    pub rules: Vec<Rule>,
}
