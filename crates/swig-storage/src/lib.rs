//! # swig-storage
//!
//! SQLite persistence for games and their rules. `StorageEngine` owns a
//! single writer connection and a pool of read connections, runs versioned
//! migrations on open, and implements `GameStorage`.

pub mod engine;
pub mod migrations;
pub mod pool;
pub mod queries;

pub use engine::StorageEngine;

use swig_core::errors::StorageError;
use swig_core::SwigError;

/// Wrap a SQLite failure message as a `SwigError`.
pub fn to_storage_err(message: impl Into<String>) -> SwigError {
    SwigError::Storage(StorageError::SqliteError {
        message: message.into(),
    })
}
