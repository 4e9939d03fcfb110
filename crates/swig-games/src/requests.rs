//! Inbound payloads. Categories and drink levels arrive unchecked and are
//! validated by the service.

use serde::{Deserialize, Serialize};
use swig_core::models::IntoxicationLevel;

/// Preview rules for a video without creating a game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRulesRequest {
    pub video_id: String,
    pub video_title: String,
    pub number_of_rules: usize,
    pub intoxication_level: IntoxicationLevel,
}

/// One rule of a new game, typically taken from a preview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRuleInput {
    pub text: String,
    pub category: String,
    pub base_drink: i32,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub is_custom: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGameRequest {
    /// Defaults to `"{video_title} Drinking Game"`.
    #[serde(default)]
    pub title: Option<String>,
    pub video_id: String,
    pub video_title: String,
    #[serde(default)]
    pub video_thumbnail: Option<String>,
    pub intoxication_level: IntoxicationLevel,
    pub rules: Vec<NewRuleInput>,
}

/// A user-authored rule added to an existing game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomRuleRequest {
    pub text: String,
    pub category: String,
    pub base_drink: i32,
}
