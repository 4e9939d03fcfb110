//! Connection pool managing read/write connections.

pub mod pragmas;
pub mod read_pool;
pub mod write_connection;

use std::path::{Path, PathBuf};

use swig_core::SwigResult;

pub use read_pool::ReadPool;
pub use write_connection::WriteConnection;

/// Manages the single write connection and the read connection pool.
pub struct ConnectionPool {
    pub writer: WriteConnection,
    pub readers: ReadPool,
    pub db_path: Option<PathBuf>,
}

impl ConnectionPool {
    /// Open a connection pool for the given database file. The writer opens
    /// first so the file exists before the read-only connections attach.
    pub fn open(path: &Path, read_pool_size: usize) -> SwigResult<Self> {
        let writer = WriteConnection::open(path)?;
        let readers = ReadPool::open(path, read_pool_size)?;
        Ok(Self {
            writer,
            readers,
            db_path: Some(path.to_path_buf()),
        })
    }

    /// In-memory pool. Each in-memory connection is its own database, so only
    /// the writer holds data; there is no read pool.
    pub fn open_in_memory() -> SwigResult<Self> {
        Ok(Self {
            writer: WriteConnection::open_in_memory()?,
            readers: ReadPool::empty(),
            db_path: None,
        })
    }
}
