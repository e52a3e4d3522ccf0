use serde::{Deserialize, Serialize};

/// Blog user - a fixed credential pair used only for authentication.
///
/// Posts do not reference users; a post's author is a copy of the
/// username that was authenticated when it was created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogUser {
    pub username: String,
    pub password: String,
}

impl BlogUser {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Exact, case-sensitive match of both fields.
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}
