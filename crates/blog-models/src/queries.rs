//! Read and create operations
//!
//! Each function runs directly against the session handle it is given.
//! Writes are not staged: on an autocommit connection an insert is durable
//! when the function returns.

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension, Params, Row};

use crate::comment::Comment;
use crate::post::Post;
use crate::timestamp;
use crate::user::User;
use crate::Result;

fn query_all<T, P, F>(conn: &Connection, sql: &str, params: P, map: F) -> Result<Vec<T>>
where
    P: Params,
    F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
{
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params, map)?
        .collect::<rusqlite::Result<Vec<T>>>()?;
    Ok(rows)
}

/// All users in id order.
pub fn list_users(conn: &Connection) -> Result<Vec<User>> {
    let users = query_all(
        conn,
        &format!("SELECT {} FROM users ORDER BY id", User::COLUMNS),
        [],
        User::from_row,
    )?;
    tracing::debug!(count = users.len(), "Listed users");
    Ok(users)
}

/// All posts in id order.
pub fn list_posts(conn: &Connection) -> Result<Vec<Post>> {
    let posts = query_all(
        conn,
        &format!("SELECT {} FROM posts ORDER BY id", Post::COLUMNS),
        [],
        Post::from_row,
    )?;
    tracing::debug!(count = posts.len(), "Listed posts");
    Ok(posts)
}

/// All comments in id order.
pub fn list_comments(conn: &Connection) -> Result<Vec<Comment>> {
    let comments = query_all(
        conn,
        &format!("SELECT {} FROM comments ORDER BY id", Comment::COLUMNS),
        [],
        Comment::from_row,
    )?;
    tracing::debug!(count = comments.len(), "Listed comments");
    Ok(comments)
}

/// Insert a user with no display name or age. A taken login is a constraint error.
pub fn create_user(conn: &Connection, login: &str, password: &str) -> Result<User> {
    conn.execute(
        "INSERT INTO users (login, password) VALUES (?1, ?2)",
        params![login, password],
    )?;

    let user = User {
        id: conn.last_insert_rowid(),
        login: login.to_string(),
        password: password.to_string(),
        username: None,
        age: None,
    };

    tracing::info!(user_id = user.id, login = %user.login, "Created user");

    Ok(user)
}

pub fn create_post(conn: &Connection, title: &str, text: &str, user: &User) -> Result<Post> {
    let created_at = Utc::now();
    conn.execute(
        "INSERT INTO posts (post_title, post_text, created_at, user_id) VALUES (?1, ?2, ?3, ?4)",
        params![title, text, timestamp::to_column(&created_at), user.id],
    )?;

    let post = Post {
        id: conn.last_insert_rowid(),
        title: title.to_string(),
        text: text.to_string(),
        created_at,
        user_id: user.id,
    };

    tracing::info!(post_id = post.id, user_id = user.id, "Created post");

    Ok(post)
}

pub fn create_comment(conn: &Connection, text: &str, user: &User, post: &Post) -> Result<Comment> {
    let created_at = Utc::now();
    conn.execute(
        "INSERT INTO comments (comment_text, created_at, user_id, post_id) VALUES (?1, ?2, ?3, ?4)",
        params![text, timestamp::to_column(&created_at), user.id, post.id],
    )?;

    let comment = Comment {
        id: conn.last_insert_rowid(),
        text: text.to_string(),
        created_at,
        user_id: user.id,
        post_id: post.id,
    };

    tracing::info!(
        comment_id = comment.id,
        user_id = user.id,
        post_id = post.id,
        "Created comment"
    );

    Ok(comment)
}

pub fn get_user_by_id(conn: &Connection, id: i64) -> Result<Option<User>> {
    let user = conn
        .query_row(
            &format!("SELECT {} FROM users WHERE id = ?1", User::COLUMNS),
            [id],
            User::from_row,
        )
        .optional()?;
    Ok(user)
}

pub fn get_post_by_id(conn: &Connection, id: i64) -> Result<Option<Post>> {
    let post = conn
        .query_row(
            &format!("SELECT {} FROM posts WHERE id = ?1", Post::COLUMNS),
            [id],
            Post::from_row,
        )
        .optional()?;
    Ok(post)
}

/// Users whose login contains "admin". SQLite's LIKE ignores ASCII case,
/// so the match uses instr() to stay case-sensitive.
pub fn get_admin_users(conn: &Connection) -> Result<Vec<User>> {
    query_all(
        conn,
        &format!(
            "SELECT {} FROM users WHERE instr(login, 'admin') > 0 ORDER BY id",
            User::COLUMNS
        ),
        [],
        User::from_row,
    )
}

pub fn posts_by_user(conn: &Connection, user: &User) -> Result<Vec<Post>> {
    query_all(
        conn,
        &format!(
            "SELECT {} FROM posts WHERE user_id = ?1 ORDER BY id",
            Post::COLUMNS
        ),
        [user.id],
        Post::from_row,
    )
}

pub fn comments_by_user(conn: &Connection, user: &User) -> Result<Vec<Comment>> {
    query_all(
        conn,
        &format!(
            "SELECT {} FROM comments WHERE user_id = ?1 ORDER BY id",
            Comment::COLUMNS
        ),
        [user.id],
        Comment::from_row,
    )
}

pub fn comments_for_post(conn: &Connection, post: &Post) -> Result<Vec<Comment>> {
    query_all(
        conn,
        &format!(
            "SELECT {} FROM comments WHERE post_id = ?1 ORDER BY id",
            Comment::COLUMNS
        ),
        [post.id],
        Comment::from_row,
    )
}
