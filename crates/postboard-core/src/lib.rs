//! # Postboard Core
//!
//! The domain layer of Postboard.
//! This crate holds the post list view model and its pure derivation pipeline,
//! with zero infrastructure dependencies. Adapters live in `postboard-infra`.

pub mod domain;
pub mod error;
pub mod ports;
pub mod view;

pub use error::{ApiError, DomainError};
pub use view::{PostViewModel, SessionModel};
