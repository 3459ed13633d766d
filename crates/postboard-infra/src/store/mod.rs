//! Post storage implementations.

mod memory;

pub use memory::InMemoryPostStore;
