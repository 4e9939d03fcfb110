//! v001: games, rules.

use rusqlite::Connection;

use swig_core::SwigResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> SwigResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS games (
            id                 TEXT PRIMARY KEY,
            title              TEXT NOT NULL,
            video_id           TEXT NOT NULL,
            video_title        TEXT NOT NULL,
            video_thumbnail    TEXT,
            intoxication_level INTEGER NOT NULL,
            created_at         TEXT NOT NULL,
            expires_at         TEXT NOT NULL,
            is_active          INTEGER NOT NULL DEFAULT 1
        );

        CREATE INDEX IF NOT EXISTS idx_games_video ON games(video_id);

        CREATE TABLE IF NOT EXISTS rules (
            id              TEXT PRIMARY KEY,
            game_id         TEXT NOT NULL REFERENCES games(id) ON DELETE CASCADE,
            text            TEXT NOT NULL,
            category        TEXT NOT NULL,
            weight          REAL NOT NULL,
            base_drink      INTEGER NOT NULL CHECK (base_drink BETWEEN 0 AND 3),
            effective_drink INTEGER NOT NULL,
            is_custom       INTEGER NOT NULL DEFAULT 0,
            rule_order      INTEGER NOT NULL,
            created_at      TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_rules_game_order ON rules(game_id, rule_order);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
