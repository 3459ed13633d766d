//! Server configuration loaded from environment variables.

use std::env;

/// Development server configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Login accepted by `POST /api/auth/login`.
    pub demo_email: String,
    pub demo_password: String,
    /// Start with a few demo posts instead of an empty list.
    pub seed_posts: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5173,
            demo_email: "demo@example.com".to_string(),
            demo_password: "password123".to_string(),
            seed_posts: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            demo_email: lookup("DEMO_EMAIL").unwrap_or(defaults.demo_email),
            demo_password: lookup("DEMO_PASSWORD").unwrap_or(defaults.demo_password),
            seed_posts: lookup("SEED_POSTS")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(defaults.seed_posts),
        }
    }
}
