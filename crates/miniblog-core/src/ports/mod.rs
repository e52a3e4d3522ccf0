//! Ports - trait definitions for the stores the domain depends on.
//! These are the "interfaces" that infrastructure must implement.

mod activity_log;
mod auth;
mod post_store;
mod user_directory;

pub use activity_log::ActivityLog;
pub use auth::{AuthError, TokenClaims, TokenService};
pub use post_store::PostStore;
pub use user_directory::UserDirectory;
