//! Table definitions
//!
//! Column widths are enforced with CHECK constraints since SQLite does not
//! honour declared VARCHAR sizes.

use crate::Result;
use rusqlite::Connection;

/// Create any missing tables and indexes. Existing tables are left alone.
pub fn create_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY,
            login TEXT NOT NULL UNIQUE CHECK (length(login) <= 32),
            password TEXT NOT NULL CHECK (length(password) <= 32),
            username TEXT CHECK (username IS NULL OR length(username) <= 20),
            age INTEGER
        );

        CREATE TABLE IF NOT EXISTS posts (
            id INTEGER PRIMARY KEY,
            post_title TEXT NOT NULL CHECK (length(post_title) <= 128),
            post_text TEXT NOT NULL,
            created_at TEXT NOT NULL,
            user_id INTEGER NOT NULL,
            FOREIGN KEY (user_id) REFERENCES users(id)
        );

        CREATE INDEX IF NOT EXISTS idx_posts_user ON posts(user_id);

        CREATE TABLE IF NOT EXISTS comments (
            id INTEGER PRIMARY KEY,
            comment_text TEXT NOT NULL,
            created_at TEXT NOT NULL,
            user_id INTEGER NOT NULL,
            post_id INTEGER NOT NULL,
            FOREIGN KEY (user_id) REFERENCES users(id),
            FOREIGN KEY (post_id) REFERENCES posts(id)
        );

        CREATE INDEX IF NOT EXISTS idx_comments_user ON comments(user_id);
        CREATE INDEX IF NOT EXISTS idx_comments_post ON comments(post_id);
    "#,
    )?;

    tracing::debug!("Schema ready: users, posts, comments");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_names(conn: &Connection) -> Vec<String> {
        let mut stmt = conn
            .prepare("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
            .unwrap();
        stmt.query_map([], |row| row.get(0))
            .unwrap()
            .collect::<rusqlite::Result<Vec<String>>>()
            .unwrap()
    }

    fn fresh() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        create_schema(&conn).unwrap();
        conn
    }

    fn insert_user(conn: &Connection, login: &str, password: &str) -> rusqlite::Result<usize> {
        conn.execute(
            "INSERT INTO users (login, password) VALUES (?1, ?2)",
            [login, password],
        )
    }

    #[test]
    fn test_fresh_database_gets_all_tables() {
        let conn = fresh();
        assert_eq!(table_names(&conn), vec!["comments", "posts", "users"]);
    }

    #[test]
    fn test_create_schema_twice_keeps_rows() {
        let conn = fresh();
        insert_user(&conn, "keep", "me").unwrap();

        create_schema(&conn).unwrap();

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_login_width_is_enforced() {
        let conn = fresh();
        assert!(insert_user(&conn, &"x".repeat(33), "pw").is_err());
        assert!(insert_user(&conn, &"x".repeat(32), "pw").is_ok());
    }

    #[test]
    fn test_password_width_is_enforced() {
        let conn = fresh();
        assert!(insert_user(&conn, "long", &"p".repeat(33)).is_err());
        assert!(insert_user(&conn, "exact", &"p".repeat(32)).is_ok());
    }

    #[test]
    fn test_username_width_is_enforced() {
        let conn = fresh();
        let insert = |login: &str, username: &str| {
            conn.execute(
                "INSERT INTO users (login, password, username) VALUES (?1, 'pw', ?2)",
                [login, username],
            )
        };
        assert!(insert("wide", "u".repeat(21).as_str()).is_err());
        assert!(insert("narrow", "u".repeat(20).as_str()).is_ok());
    }
}
