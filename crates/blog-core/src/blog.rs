//! Store coordinator

use std::fmt;

use blog_models::{Comment, Post, User};
use blog_storage::{Connection, Database};

use crate::config::Config;
use crate::Result;

/// Owns the open database for the lifetime of a run.
pub struct Blog {
    db: Database,
}

impl Blog {
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        // Ensure data directory exists
        if let Some(parent) = config.database_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::open(&config.database_path)?;
        db.set_echo(config.echo);

        tracing::info!(
            path = %config.database_path.display(),
            echo = config.echo,
            "Opened blog store"
        );

        Ok(Self { db })
    }

    pub fn open_in_memory() -> Result<Self> {
        Ok(Self {
            db: Database::open_in_memory()?,
        })
    }

    /// Run `f` against an autocommit session.
    pub fn session<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> blog_storage::Result<T>,
    {
        Ok(self.db.with_connection(f)?)
    }

    /// Snapshot of the whole store: the first user and post, every table, and the admins.
    pub fn report(&self) -> Result<Report> {
        let report = self.session(|conn| {
            Ok(Report {
                first_user: blog_models::get_user_by_id(conn, 1)?,
                first_post: blog_models::get_post_by_id(conn, 1)?,
                users: blog_models::list_users(conn)?,
                comments: blog_models::list_comments(conn)?,
                posts: blog_models::list_posts(conn)?,
                admins: blog_models::get_admin_users(conn)?,
            })
        })?;

        tracing::info!(
            users = report.users.len(),
            posts = report.posts.len(),
            comments = report.comments.len(),
            admins = report.admins.len(),
            "Built store report"
        );

        Ok(report)
    }
}

#[derive(Debug, Clone)]
pub struct Report {
    pub first_user: Option<User>,
    pub first_post: Option<Post>,
    pub users: Vec<User>,
    pub comments: Vec<Comment>,
    pub posts: Vec<Post>,
    pub admins: Vec<User>,
}

fn write_optional<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    value: Option<&T>,
) -> fmt::Result {
    match value {
        Some(v) => writeln!(f, "{label}: {v}"),
        None => writeln!(f, "{label}: None"),
    }
}

fn write_section<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    items: &[T],
) -> fmt::Result {
    writeln!(f, "{label} ({}):", items.len())?;
    for item in items {
        writeln!(f, "  {item}")?;
    }
    Ok(())
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_optional(f, "user 1", self.first_user.as_ref())?;
        write_optional(f, "post 1", self.first_post.as_ref())?;
        write_section(f, "users", &self.users)?;
        write_section(f, "comments", &self.comments)?;
        write_section(f, "posts", &self.posts)?;
        write_section(f, "admins", &self.admins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blog_models::{create_comment, create_post, create_user};

    #[test]
    fn test_report_on_empty_store() {
        let blog = Blog::open_in_memory().unwrap();
        let report = blog.report().unwrap();

        assert!(report.first_user.is_none());
        assert!(report.first_post.is_none());
        assert!(report.users.is_empty());
        assert_eq!(
            report.to_string(),
            "user 1: None\npost 1: None\nusers (0):\ncomments (0):\nposts (0):\nadmins (0):\n"
        );
    }

    #[test]
    fn test_report_after_seeding() {
        let blog = Blog::open_in_memory().unwrap();
        let (user, post) = blog
            .session(|conn| {
                let user = create_user(conn, "Ignat", "1234")?;
                let admin = create_user(conn, "admin", "root")?;
                let post = create_post(conn, "Videos", "some text", &user)?;
                create_comment(conn, "some comment", &admin, &post)?;
                Ok((user, post))
            })
            .unwrap();

        let report = blog.report().unwrap();
        assert_eq!(report.first_user, Some(user));
        assert_eq!(report.first_post, Some(post));
        assert_eq!(report.users.len(), 2);
        assert_eq!(report.comments.len(), 1);
        assert_eq!(report.admins.len(), 1);
        assert_eq!(report.admins[0].login, "admin");

        let rendered = report.to_string();
        assert!(rendered.contains("post 1: Post(id=1, title=Videos, text=some text, user_id=1)"));
        assert!(rendered.contains("  Comment(id=1, text=some comment, user_id=2, post_id=1)"));
    }

    #[test]
    fn test_new_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("blog.db");

        let blog = Blog::new(Config::new(&path)).unwrap();
        blog.session(|conn| create_user(conn, "Mark", "Mark1"))
            .unwrap();
        drop(blog);

        assert!(path.exists());
        let reopened = Blog::new(Config::new(&path)).unwrap();
        let users = reopened.session(blog_models::list_users).unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].login, "Mark");
    }

    #[test]
    fn test_new_rejects_empty_path() {
        let result = Blog::new(Config::new(""));
        assert!(matches!(result, Err(crate::CoreError::Config(_))));
    }
}
