//! Post record

use chrono::{DateTime, Utc};
use rusqlite::Row;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::timestamp;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    /// At most 128 characters
    pub title: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
    /// Owning user
    pub user_id: i64,
}

impl Post {
    pub(crate) const COLUMNS: &'static str = "id, post_title, post_text, created_at, user_id";

    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            title: row.get(1)?,
            text: row.get(2)?,
            created_at: timestamp::from_column(row, 3)?,
            user_id: row.get(4)?,
        })
    }
}

impl fmt::Display for Post {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Post(id={}, title={}, text={}, user_id={})",
            self.id, self.title, self.text, self.user_id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let post = Post {
            id: 1,
            title: "Videos".to_string(),
            text: "some text".to_string(),
            created_at: Utc::now(),
            user_id: 3,
        };
        assert_eq!(
            post.to_string(),
            "Post(id=1, title=Videos, text=some text, user_id=3)"
        );
    }
}
