//! RFC 3339 text <-> `DateTime<Utc>` for `created_at` columns

use chrono::{DateTime, Utc};
use rusqlite::types::Type;
use rusqlite::Row;

pub(crate) fn to_column(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339()
}

/// Unparseable text is a conversion error, never a silent fallback.
pub(crate) fn from_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<DateTime<Utc>> {
    let raw: String = row.get(idx)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}
