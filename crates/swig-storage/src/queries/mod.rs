//! SQL for games and rules. Every function takes a plain `&Connection`;
//! multi-statement operations open their own transaction.

pub mod game_ops;
pub mod rule_ops;

use chrono::{DateTime, SecondsFormat, Utc};

use swig_core::errors::StorageError;
use swig_core::SwigError;

/// Fixed-width RFC 3339 in UTC, so string comparison in SQL matches time order.
pub(crate) fn format_timestamp(t: DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

/// Parse an RFC 3339 column value.
pub(crate) fn parse_timestamp(table: &str, raw: &str) -> Result<DateTime<Utc>, SwigError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| corrupt(table, format!("bad timestamp '{raw}': {e}")))
}

pub(crate) fn corrupt(table: &str, details: impl Into<String>) -> SwigError {
    SwigError::Storage(StorageError::CorruptRow {
        table: table.to_string(),
        details: details.into(),
    })
}
