//! Blog Models
//!
//! Record types for users, posts and comments, plus the operations that
//! read and create them. Every operation takes a live session handle
//! (`&Connection`) as its first argument.

mod comment;
mod post;
mod queries;
mod timestamp;
mod user;

pub use comment::Comment;
pub use post::Post;
pub use queries::{
    comments_by_user, comments_for_post, create_comment, create_post, create_user,
    get_admin_users, get_post_by_id, get_user_by_id, list_comments, list_posts, list_users,
    posts_by_user,
};
pub use user::User;

pub use blog_storage::{Result, StorageError};
