//! Application state - shared across all handlers.

use std::sync::Arc;

use miniblog_core::ports::{ActivityLog, PostStore, TokenService, UserDirectory};
use miniblog_infra::{FixedUserDirectory, InMemoryActivityLog, InMemoryPostStore, JwtTokenService};

/// Shared application state.
///
/// Cloning shares the same store and log.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostStore>,
    pub activity: Arc<dyn ActivityLog>,
    pub users: Arc<dyn UserDirectory>,
    pub tokens: Arc<dyn TokenService>,
}

impl AppState {
    /// Build a fresh store and activity log around the given user directory
    /// and token service.
    pub fn new(users: Arc<dyn UserDirectory>, tokens: Arc<dyn TokenService>) -> Self {
        let activity: Arc<dyn ActivityLog> = Arc::new(InMemoryActivityLog::new());
        let posts: Arc<dyn PostStore> = Arc::new(InMemoryPostStore::new(activity.clone()));

        Self {
            posts,
            activity,
            users,
            tokens,
        }
    }

    /// Build the state from environment configuration.
    pub fn from_env() -> Self {
        let users = FixedUserDirectory::from_env();
        tracing::info!(users = users.get_all().len(), "User directory loaded");

        let state = Self::new(Arc::new(users), Arc::new(JwtTokenService::from_env()));
        tracing::info!("Application state initialized");
        state
    }
}
