//! User directory port.

use crate::domain::BlogUser;

/// Fixed credential store.
pub trait UserDirectory: Send + Sync {
    /// Return the user whose username and password both match exactly.
    fn authenticate(&self, username: &str, password: &str) -> Option<BlogUser>;

    /// The configured users.
    fn get_all(&self) -> Vec<BlogUser>;
}
