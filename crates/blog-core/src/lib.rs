//! Blog Core
//!
//! Opens the store described by a [`Config`] and exposes it to callers as
//! sessions. Re-exports the record types and operations from `blog-models`.

mod blog;
mod config;
mod error;

pub use blog::{Blog, Report};
pub use config::Config;
pub use error::CoreError;

pub use blog_models::{
    comments_by_user, comments_for_post, create_comment, create_post, create_user,
    get_admin_users, get_post_by_id, get_user_by_id, list_comments, list_posts, list_users,
    posts_by_user, Comment, Post, User,
};
pub use blog_storage::{Connection, Database, StorageError};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
