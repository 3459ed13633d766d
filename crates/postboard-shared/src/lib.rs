//! # Postboard Shared
//!
//! Wire types shared between the post API client and the development server.
//! The client side is deliberately lenient: the same post can arrive as
//! `{id}` or `{_id}`, inside `records` or `data`, with fields missing.

pub mod dto;
pub mod response;

pub use dto::{
    CreatePostRequest, LoginRequest, PostListEnvelope, PostListResponse, RawAuthor, RawPost,
};
pub use response::{ApiResponse, ErrorResponse};
