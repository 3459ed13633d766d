//! Application state - shared across all handlers.

use std::sync::Arc;

use postboard_core::ports::{AuthError, PostStore};
use postboard_infra::{Argon2PasswordService, DemoAccount, InMemoryPostStore};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostStore>,
    pub account: Arc<DemoAccount>,
}

impl AppState {
    /// Build the state from configuration. Fails only if the demo password
    /// cannot be hashed.
    pub fn new(config: &AppConfig) -> Result<Self, AuthError> {
        let posts: Arc<dyn PostStore> = if config.seed_posts {
            Arc::new(InMemoryPostStore::seeded())
        } else {
            Arc::new(InMemoryPostStore::new())
        };

        let account = DemoAccount::new(
            config.demo_email.clone(),
            &config.demo_password,
            Arc::new(Argon2PasswordService::new()),
        )?;

        tracing::info!(demo_email = %account.email(), "Application state initialized");

        Ok(Self {
            posts,
            account: Arc::new(account),
        })
    }
}
