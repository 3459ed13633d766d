//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod api;
mod auth;
mod store;

pub use api::{AuthApi, PostApi};
pub use auth::{AuthError, PasswordService};
pub use store::PostStore;
