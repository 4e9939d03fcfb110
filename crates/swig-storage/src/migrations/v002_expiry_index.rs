//! v002: index backing expired-game cleanup.

use rusqlite::Connection;

use swig_core::SwigResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> SwigResult<()> {
    conn.execute_batch("CREATE INDEX IF NOT EXISTS idx_games_expires ON games(expires_at);")
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
