//! Middleware and request-pipeline helpers.

pub mod error;
