//! Post store port.

use crate::domain::{Post, PostId};

/// Exclusive owner of posts, likes and comments.
///
/// Lookups by a missing id are never errors: reads and updates return
/// `None`, every other mutation is a silent no-op. Collection reads return
/// independent copies, never live views.
pub trait PostStore: Send + Sync {
    /// Create a post with the next sequential id and record it.
    fn add_post(&self, author: &str, title: &str, content: &str) -> Post;

    /// Overwrite title and content. Nothing is recorded in the activity log.
    fn update_post(&self, id: PostId, title: &str, content: &str) -> Option<Post>;

    /// Remove a post together with its likes and comments.
    fn delete_post(&self, id: PostId);

    /// All posts, newest first.
    fn get_all_posts(&self) -> Vec<Post>;

    /// Posts whose author equals `username` exactly, newest first.
    fn get_posts_by_user(&self, username: &str) -> Vec<Post>;

    fn get_post_by_id(&self, id: PostId) -> Option<Post>;

    /// Like a post once per username. Repeats are ignored.
    fn add_like(&self, post_id: PostId, username: &str);

    /// Append a comment. The text is not validated.
    fn add_comment(&self, post_id: PostId, author: &str, text: &str);

    /// Number of posts currently stored.
    fn post_count(&self) -> usize;
}
