//! Domain-level error types.
//!
//! Store operations never fail: a missing post is an `Option::None` or a
//! silent no-op. These errors are raised by callers that need to turn such
//! outcomes into a refusal, e.g. the HTTP layer.

use thiserror::Error;

use crate::domain::PostId;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Post not found: {id}")]
    PostNotFound { id: PostId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("User {username} does not own post {id}")]
    NotOwner { username: String, id: PostId },
}
