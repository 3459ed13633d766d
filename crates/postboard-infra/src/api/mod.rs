//! Post API adapters - HTTP and in-memory fallback.

mod memory;
pub mod normalize;

#[cfg(feature = "http")]
mod http;

pub use memory::InMemoryPostApi;

#[cfg(feature = "http")]
pub use http::{HttpApiConfig, HttpPostApi};
