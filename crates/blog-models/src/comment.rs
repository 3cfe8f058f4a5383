//! Comment record

use chrono::{DateTime, Utc};
use rusqlite::Row;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::timestamp;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub text: String,
    pub created_at: DateTime<Utc>,
    /// Author
    pub user_id: i64,
    pub post_id: i64,
}

impl Comment {
    pub(crate) const COLUMNS: &'static str = "id, comment_text, created_at, user_id, post_id";

    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            text: row.get(1)?,
            created_at: timestamp::from_column(row, 2)?,
            user_id: row.get(3)?,
            post_id: row.get(4)?,
        })
    }
}

impl fmt::Display for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Comment(id={}, text={}, user_id={}, post_id={})",
            self.id, self.text, self.user_id, self.post_id
        )
    }
}
