#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use swig_core::models::{Category, DrinkLevel, Game, IntoxicationLevel, Rule};

pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
}

pub fn make_game(id: &str) -> Game {
    Game {
        id: id.to_string(),
        title: format!("Video {id} Drinking Game"),
        video_id: format!("vid-{id}"),
        video_title: format!("Video {id}"),
        video_thumbnail: Some(format!("https://img.example/{id}.jpg")),
        intoxication_level: IntoxicationLevel::new(2),
        created_at: t0(),
        expires_at: t0() + Duration::days(90),
        is_active: true,
    }
}

pub fn make_rule(game_id: &str, id: &str, order: u32, is_custom: bool) -> Rule {
    Rule {
        id: id.to_string(),
        game_id: game_id.to_string(),
        text: format!("When the host does {id}"),
        category: Category::Film,
        weight: 0.5,
        base_drink: DrinkLevel::Gulp,
        effective_drink: 2,
        is_custom,
        order,
        created_at: t0(),
    }
}

pub fn ids(rules: &[Rule]) -> Vec<&str> {
    rules.iter().map(|r| r.id.as_str()).collect()
}

pub fn orders(rules: &[Rule]) -> Vec<u32> {
    rules.iter().map(|r| r.order).collect()
}
