//! Blog Storage Layer
//!
//! SQLite persistence for users, posts and comments.
//! There is no staging: every write commits as soon as it executes.

mod database;
mod error;
mod schema;

pub use database::{Database, SQL_LOG_TARGET};
pub use error::StorageError;

/// Re-exported so callers can name the session handle without a direct dependency.
pub use rusqlite::Connection;

pub type Result<T> = std::result::Result<T, StorageError>;
