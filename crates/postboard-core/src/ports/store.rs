use async_trait::async_trait;

use crate::domain::{NewPost, Post};
use crate::error::StoreError;

/// Server-side post storage.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// All posts in insertion order.
    async fn list(&self) -> Result<Vec<Post>, StoreError>;

    /// Store a new post, assigning its id and creation time.
    async fn insert(&self, post: NewPost) -> Result<Post, StoreError>;
}
