//! Store configuration

use std::path::PathBuf;

use crate::error::CoreError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path to the SQLite database file
    pub database_path: PathBuf,
    /// Log every SQL statement
    pub echo: bool,
}

impl Config {
    pub fn new(database_path: impl Into<PathBuf>) -> Self {
        Self {
            database_path: database_path.into(),
            echo: true,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.database_path.as_os_str().is_empty() {
            return Err(CoreError::Config("database path is empty".to_string()));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new("blog.db")
    }
}
