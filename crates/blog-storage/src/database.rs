//! Database connection and session scope

use parking_lot::Mutex;
use rusqlite::Connection;
use std::path::Path;
use std::sync::Arc;

use crate::schema::create_schema;
use crate::Result;

/// Log target used for echoed SQL statements.
pub const SQL_LOG_TARGET: &str = "blog_storage::sql";

pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path)?;

        // Enable foreign keys
        conn.pragma_update(None, "foreign_keys", "ON")?;

        let _: String =
            conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))?;

        create_schema(&conn)?;

        tracing::debug!(path = %path.display(), "Opened database");

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.pragma_update(None, "foreign_keys", "ON")?;
        create_schema(&conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Log every statement executed on this connection.
    pub fn set_echo(&self, enabled: bool) {
        let mut conn = self.conn.lock();
        if enabled {
            conn.trace(Some(echo_statement));
        } else {
            conn.trace(None);
        }
    }

    /// Run `f` in autocommit mode: each write is persisted as soon as it executes.
    pub fn with_connection<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        let conn = self.conn.lock();
        f(&conn)
    }
}

fn echo_statement(sql: &str) {
    tracing::info!(target: SQL_LOG_TARGET, "{}", sql);
}

impl Clone for Database {
    fn clone(&self) -> Self {
        Self {
            conn: Arc::clone(&self.conn),
        }
    }
}
