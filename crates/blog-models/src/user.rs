//! User record

use rusqlite::Row;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Assigned by the store on insert
    pub id: i64,
    /// Unique login, at most 32 characters
    pub login: String,
    /// Stored as given, no hashing
    pub password: String,
    /// Display name, at most 20 characters
    pub username: Option<String>,
    pub age: Option<i64>,
}

impl User {
    pub(crate) const COLUMNS: &'static str = "id, login, password, username, age";

    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            login: row.get(1)?,
            password: row.get(2)?,
            username: row.get(3)?,
            age: row.get(4)?,
        })
    }

    /// Whether the login marks this user as an administrator.
    pub fn is_admin(&self) -> bool {
        self.login.contains("admin")
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "User(id={}, {}, password={}, username={}, age=",
            self.id,
            self.login,
            self.password,
            self.username.as_deref().unwrap_or("None"),
        )?;
        match self.age {
            Some(age) => write!(f, "{age})"),
            None => f.write_str("None)"),
        }
    }
}
