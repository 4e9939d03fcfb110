//! StorageEngine: owns the ConnectionPool, runs migrations on open, and
//! implements `GameStorage`.

use std::path::Path;

use chrono::{DateTime, Utc};

use swig_core::config::StorageConfig;
use swig_core::models::{Game, Rule};
use swig_core::traits::GameStorage;
use swig_core::SwigResult;

use crate::migrations;
use crate::pool::ConnectionPool;
use crate::queries::{game_ops, rule_ops};

/// The main storage engine.
pub struct StorageEngine {
    pool: ConnectionPool,
    /// File-backed engines read through the pool. In-memory engines read
    /// through the writer, the only connection holding data.
    use_read_pool: bool,
}

impl StorageEngine {
    /// Open a storage engine backed by a file on disk.
    pub fn open(path: &Path, read_pool_size: usize) -> SwigResult<Self> {
        let pool = ConnectionPool::open(path, read_pool_size)?;
        let engine = Self {
            pool,
            use_read_pool: true,
        };
        engine.initialize()?;
        tracing::info!(path = %path.display(), read_pool_size, "storage opened");
        Ok(engine)
    }

    /// Open the database named by `config`.
    pub fn from_config(config: &StorageConfig) -> SwigResult<Self> {
        Self::open(Path::new(&config.db_path), config.read_pool_size)
    }

    /// Open an in-memory storage engine (for testing).
    pub fn open_in_memory() -> SwigResult<Self> {
        let pool = ConnectionPool::open_in_memory()?;
        let engine = Self {
            pool,
            use_read_pool: false,
        };
        engine.initialize()?;
        Ok(engine)
    }

    fn initialize(&self) -> SwigResult<()> {
        self.pool.writer.with_conn(|conn| {
            let applied = migrations::run_migrations(conn)?;
            if applied > 0 {
                tracing::debug!(applied, "schema migrated");
            }
            Ok(())
        })
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &ConnectionPool {
        &self.pool
    }

    pub fn schema_version(&self) -> SwigResult<u32> {
        self.with_reader(migrations::current_version)
    }

    /// Delete games that expired before `now`, with their rules.
    pub fn purge_expired(&self, now: DateTime<Utc>) -> SwigResult<usize> {
        let purged = self
            .pool
            .writer
            .with_conn(|conn| game_ops::delete_expired(conn, now))?;
        if purged > 0 {
            tracing::info!(purged, "expired games purged");
        }
        Ok(purged)
    }

    fn with_reader<F, T>(&self, f: F) -> SwigResult<T>
    where
        F: FnOnce(&rusqlite::Connection) -> SwigResult<T>,
    {
        if self.use_read_pool {
            self.pool.readers.with_conn(f)
        } else {
            self.pool.writer.with_conn(f)
        }
    }
}

impl GameStorage for StorageEngine {
    fn create_game(&self, game: &Game, rules: &[Rule]) -> SwigResult<()> {
        self.pool
            .writer
            .with_conn(|conn| game_ops::insert_game(conn, game, rules))
    }

    fn get_game(&self, id: &str) -> SwigResult<Option<Game>> {
        self.with_reader(|conn| game_ops::get_game(conn, id))
    }

    fn count_games(&self) -> SwigResult<usize> {
        self.with_reader(game_ops::count_games)
    }

    fn list_rules(&self, game_id: &str) -> SwigResult<Vec<Rule>> {
        self.with_reader(|conn| rule_ops::list_rules(conn, game_id))
    }

    fn get_rule(&self, game_id: &str, rule_id: &str) -> SwigResult<Option<Rule>> {
        self.with_reader(|conn| rule_ops::get_rule(conn, game_id, rule_id))
    }

    fn insert_rule(&self, rule: &Rule) -> SwigResult<()> {
        self.pool
            .writer
            .with_conn(|conn| rule_ops::insert_rule(conn, rule))
    }

    fn update_rule(&self, rule: &Rule) -> SwigResult<()> {
        self.pool
            .writer
            .with_conn(|conn| rule_ops::update_rule(conn, rule))
    }

    fn delete_rule(&self, game_id: &str, rule_id: &str) -> SwigResult<bool> {
        self.pool
            .writer
            .with_conn(|conn| rule_ops::delete_rule(conn, game_id, rule_id))
    }

    fn remove_rule(&self, game_id: &str, rule_id: &str) -> SwigResult<bool> {
        self.pool
            .writer
            .with_conn(|conn| rule_ops::remove_rule(conn, game_id, rule_id))
    }

    fn replace_generated_rules(&self, game_id: &str, rules: &[Rule]) -> SwigResult<Vec<Rule>> {
        self.pool
            .writer
            .with_conn(|conn| rule_ops::replace_generated_rules(conn, game_id, rules))
    }

    fn renumber_rules(&self, game_id: &str) -> SwigResult<()> {
        self.pool
            .writer
            .with_conn(|conn| rule_ops::renumber_rules(conn, game_id))
    }
}
