//! Insert, get, count, and expiry cleanup for games.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};

use swig_core::models::{Game, IntoxicationLevel, Rule};
use swig_core::SwigResult;

use super::{format_timestamp, parse_timestamp, rule_ops};
use crate::to_storage_err;

const GAME_COLUMNS: &str = "id, title, video_id, video_title, video_thumbnail,
    intoxication_level, created_at, expires_at, is_active";

/// Insert a game and its initial rules. All-or-nothing.
pub fn insert_game(conn: &Connection, game: &Game, rules: &[Rule]) -> SwigResult<()> {
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| to_storage_err(format!("insert_game begin: {e}")))?;

    match insert_game_inner(&tx, game, rules) {
        Ok(()) => {
            tx.commit()
                .map_err(|e| to_storage_err(format!("insert_game commit: {e}")))?;
            Ok(())
        }
        Err(e) => {
            let _ = tx.rollback();
            Err(e)
        }
    }
}

fn insert_game_inner(conn: &Connection, game: &Game, rules: &[Rule]) -> SwigResult<()> {
    conn.execute(
        "INSERT INTO games (
            id, title, video_id, video_title, video_thumbnail,
            intoxication_level, created_at, expires_at, is_active
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            game.id,
            game.title,
            game.video_id,
            game.video_title,
            game.video_thumbnail,
            game.intoxication_level.value(),
            format_timestamp(game.created_at),
            format_timestamp(game.expires_at),
            game.is_active as i32,
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;

    for rule in rules {
        rule_ops::insert_rule(conn, rule)?;
    }
    Ok(())
}

pub fn get_game(conn: &Connection, id: &str) -> SwigResult<Option<Game>> {
    let sql = format!("SELECT {GAME_COLUMNS} FROM games WHERE id = ?1");
    let result = conn
        .query_row(&sql, params![id], |row| Ok(row_to_game(row)))
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;
    result.transpose()
}

pub fn count_games(conn: &Connection) -> SwigResult<usize> {
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM games", [], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(count as usize)
}

/// Delete games whose expiry is before `now`. Their rules go with them via
/// `ON DELETE CASCADE`.
pub fn delete_expired(conn: &Connection, now: DateTime<Utc>) -> SwigResult<usize> {
    conn.execute(
        "DELETE FROM games WHERE expires_at < ?1",
        params![format_timestamp(now)],
    )
    .map_err(|e| to_storage_err(e.to_string()))
}

fn row_to_game(row: &Row<'_>) -> SwigResult<Game> {
    let get_err = |e: rusqlite::Error| to_storage_err(e.to_string());

    let created_at: String = row.get(6).map_err(get_err)?;
    let expires_at: String = row.get(7).map_err(get_err)?;
    let is_active: i32 = row.get(8).map_err(get_err)?;

    Ok(Game {
        id: row.get(0).map_err(get_err)?,
        title: row.get(1).map_err(get_err)?,
        video_id: row.get(2).map_err(get_err)?,
        video_title: row.get(3).map_err(get_err)?,
        video_thumbnail: row.get(4).map_err(get_err)?,
        intoxication_level: IntoxicationLevel::new(row.get(5).map_err(get_err)?),
        created_at: parse_timestamp("games", &created_at)?,
        expires_at: parse_timestamp("games", &expires_at)?,
        is_active: is_active != 0,
    })
}
