//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use miniblog_core::analytics::{AuthorTotals, PostSummary, PostTotals};
use miniblog_core::domain::{ActivityAction, ActivityEntry, Comment, Post, PostId};

/// Request to login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response containing a bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
    pub username: String,
}

/// The logged-in user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeResponse {
    pub username: String,
}

/// Request to create or edit a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostRequest {
    pub title: String,
    pub content: String,
}

/// Request to comment on a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentRequest {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentResponse {
    pub author: String,
    pub text: String,
    pub created_at: String,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            author: comment.author,
            text: comment.text,
            created_at: comment.created_at.to_rfc3339(),
        }
    }
}

/// A post as shown to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: PostId,
    pub author: String,
    pub title: String,
    pub content: String,
    pub created_at: String,
    pub likes: Vec<String>,
    pub comments: Vec<CommentResponse>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            author: post.author,
            title: post.title,
            content: post.content,
            created_at: post.created_at.to_rfc3339(),
            likes: post.likes.into_iter().map(|l| l.username).collect(),
            comments: post.comments.into_iter().map(Into::into).collect(),
        }
    }
}

/// One activity log line with its rendered message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityResponse {
    pub username: String,
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub action: ActivityAction,
    pub message: String,
}

impl From<ActivityEntry> for ActivityResponse {
    fn from(entry: ActivityEntry) -> Self {
        let message = entry.to_string();
        Self {
            username: entry.username,
            timestamp: entry.timestamp,
            action: entry.action,
            message,
        }
    }
}

/// Query of the analytics endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyticsQuery {
    pub author: Option<String>,
}

/// Per-post summaries plus global and per-author totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsResponse {
    pub posts: Vec<PostSummary>,
    pub totals: PostTotals,
    pub by_author: AuthorTotals,
    pub summary: Vec<String>,
}
