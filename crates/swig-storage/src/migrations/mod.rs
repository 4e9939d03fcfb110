//! Versioned schema migrations, tracked in the `schema_version` table.
//! Each pending migration runs in its own transaction together with its
//! ledger row, so a failed step leaves the previous version intact.

pub mod v001_games_and_rules;
pub mod v002_expiry_index;

use rusqlite::{params, Connection};

use swig_core::errors::StorageError;
use swig_core::SwigResult;

use crate::to_storage_err;

type MigrationFn = fn(&Connection) -> SwigResult<()>;

/// All migrations, in order.
const MIGRATIONS: &[(u32, &str, MigrationFn)] = &[
    (1, "games_and_rules", v001_games_and_rules::migrate),
    (2, "expiry_index", v002_expiry_index::migrate),
];

/// Latest schema version this build knows about.
pub const LATEST_VERSION: u32 = 2;

/// Apply every migration newer than the recorded version. Returns the number
/// applied.
pub fn run_migrations(conn: &Connection) -> SwigResult<usize> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version    INTEGER PRIMARY KEY,
            name       TEXT NOT NULL,
            applied_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;

    let current = current_version(conn)?;
    let mut applied = 0;

    for (version, name, migrate) in MIGRATIONS {
        if *version <= current {
            continue;
        }
        let failed = |reason: String| StorageError::MigrationFailed {
            version: *version,
            reason,
        };

        let tx = conn
            .unchecked_transaction()
            .map_err(|e| failed(e.to_string()))?;
        if let Err(e) = migrate(&tx) {
            let _ = tx.rollback();
            return Err(failed(e.to_string()).into());
        }
        tx.execute(
            "INSERT INTO schema_version (version, name) VALUES (?1, ?2)",
            params![version, name],
        )
        .map_err(|e| failed(e.to_string()))?;
        tx.commit().map_err(|e| failed(e.to_string()))?;

        tracing::info!(version = *version, name = *name, "applied migration");
        applied += 1;
    }

    Ok(applied)
}

/// Highest applied version, or 0 on a fresh database.
pub fn current_version(conn: &Connection) -> SwigResult<u32> {
    conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |row| row.get(0),
    )
    .map_err(|e| to_storage_err(e.to_string()))
}
