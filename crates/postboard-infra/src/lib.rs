//! # Postboard Infrastructure
//!
//! Concrete implementations of the ports defined in `postboard-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external services, in-memory only
//! - `http` - `PostApi`/`AuthApi` over HTTP via reqwest
//! - `auth` - Argon2 password hashing

pub mod api;
pub mod store;

#[cfg(feature = "auth")]
pub mod auth;

// Re-exports - In-Memory
pub use api::InMemoryPostApi;
pub use store::InMemoryPostStore;

// Re-exports - HTTP
#[cfg(feature = "http")]
pub use api::{HttpApiConfig, HttpPostApi};

#[cfg(feature = "auth")]
pub use auth::{Argon2PasswordService, DemoAccount};
