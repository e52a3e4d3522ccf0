//! # MiniBlog Infrastructure
//!
//! Concrete implementations of the ports defined in `miniblog-core`.
//! Everything lives in process memory and is lost on restart.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - In-memory stores only
//! - `auth` - JWT bearer tokens

pub mod activity;
pub mod store;
pub mod users;

#[cfg(feature = "auth")]
pub mod auth;

pub use activity::InMemoryActivityLog;
pub use store::InMemoryPostStore;
pub use users::FixedUserDirectory;

#[cfg(feature = "auth")]
pub use auth::{JwtConfig, JwtTokenService};
