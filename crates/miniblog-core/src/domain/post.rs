use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Post identifier, assigned sequentially by the store starting at 1.
pub type PostId = u64;

/// Post entity - a single authored blog entry with its likes and comments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    /// Free-text username copied at creation time, not a user reference.
    pub author: String,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub comments: Vec<Comment>,
    pub likes: Vec<Like>,
}

impl Post {
    /// Create a new post with no likes or comments.
    pub fn new(id: PostId, author: String, title: String, content: String) -> Self {
        Self {
            id,
            author,
            title,
            content,
            created_at: Utc::now(),
            comments: Vec::new(),
            likes: Vec::new(),
        }
    }

    /// Whether `username` already liked this post. Case-sensitive.
    pub fn is_liked_by(&self, username: &str) -> bool {
        self.likes.iter().any(|l| l.username == username)
    }

    pub fn like_count(&self) -> usize {
        self.likes.len()
    }

    pub fn comment_count(&self) -> usize {
        self.comments.len()
    }
}

/// A single user's endorsement of a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Like {
    pub username: String,
}

impl Like {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }
}

/// Free-text reply attached to a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub author: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Create a comment stamped with the current time.
    pub fn new(author: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            text: text.into(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_post_is_empty() {
        let post = Post::new(1, "serhii".into(), "Title".into(), "Body".into());

        assert_eq!(post.like_count(), 0);
        assert_eq!(post.comment_count(), 0);
        assert!(!post.is_liked_by("serhii"));
    }

    #[test]
    fn test_is_liked_by_is_case_sensitive() {
        let mut post = Post::new(1, "serhii".into(), "Title".into(), "Body".into());
        post.likes.push(Like::new("Bob"));

        assert!(post.is_liked_by("Bob"));
        assert!(!post.is_liked_by("bob"));
    }
}
