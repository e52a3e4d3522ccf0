//! Activity log entries.
//!
//! Entries hold denormalized copies of the username and the title or
//! comment text, so they stay readable after the post they describe is
//! edited or deleted.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What a user did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActivityAction {
    PostCreated { title: String },
    PostLiked { title: String },
    PostCommented { text: String },
}

/// One recorded user action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub username: String,
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub action: ActivityAction,
}

impl ActivityEntry {
    pub fn new(username: impl Into<String>, action: ActivityAction) -> Self {
        Self {
            username: username.into(),
            timestamp: Utc::now(),
            action,
        }
    }

    pub fn post_created(username: impl Into<String>, title: impl Into<String>) -> Self {
        Self::new(
            username,
            ActivityAction::PostCreated {
                title: title.into(),
            },
        )
    }

    pub fn post_liked(username: impl Into<String>, title: impl Into<String>) -> Self {
        Self::new(
            username,
            ActivityAction::PostLiked {
                title: title.into(),
            },
        )
    }

    pub fn post_commented(username: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(username, ActivityAction::PostCommented { text: text.into() })
    }

    /// Override the recorded time.
    pub fn at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Short machine name of the action, e.g. `post_liked`.
    pub fn kind(&self) -> &'static str {
        match self.action {
            ActivityAction::PostCreated { .. } => "post_created",
            ActivityAction::PostLiked { .. } => "post_liked",
            ActivityAction::PostCommented { .. } => "post_commented",
        }
    }
}

impl fmt::Display for ActivityEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let time = self.timestamp.format("%H:%M");
        match &self.action {
            ActivityAction::PostCreated { title } => {
                write!(f, "{} - user {} created post: '{}'.", time, self.username, title)
            }
            ActivityAction::PostLiked { title } => {
                write!(f, "{} - user {} liked post: '{}'.", time, self.username, title)
            }
            ActivityAction::PostCommented { text } => {
                write!(f, "{} - user {} left a comment: '{}'.", time, self.username, text)
            }
        }
    }
}
