//! In-memory post store - backs the development server.
//!
//! Note: Data is lost on process restart.

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use postboard_core::domain::{NewPost, Post};
use postboard_core::error::StoreError;
use postboard_core::ports::PostStore;

/// Post store using a `Vec` behind an async RwLock. Insertion order is kept.
pub struct InMemoryPostStore {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self::with_posts(Vec::new())
    }

    /// Start with an existing list of posts.
    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self {
            posts: RwLock::new(posts),
        }
    }

    /// A handful of demo posts, some with and some without authors and dates.
    pub fn seeded() -> Self {
        Self::with_posts(vec![
            Post::new("Welcome to Postboard", "Search and sort the list from the viewer.")
                .with_id("65a1f0c9e2b4d1a7")
                .with_created_at("2024-06-01T09:30:00Z")
                .with_author("Ada"),
            Post::new("banana bread", "A recipe that sorts by title, not by case.")
                .with_id("65a1f0c9e2b4d1a8")
                .with_created_at("2024-01-01T12:00:00Z"),
            Post::new("Release notes", "Posts without a date sort to the bottom.")
                .with_id("65a1f0c9e2b4d1a9")
                .with_author("grace"),
        ])
    }
}

impl Default for InMemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn list(&self) -> Result<Vec<Post>, StoreError> {
        Ok(self.posts.read().await.clone())
    }

    async fn insert(&self, new_post: NewPost) -> Result<Post, StoreError> {
        if new_post.title.is_empty() {
            return Err(StoreError::Constraint("title must not be empty".to_string()));
        }

        let post = Post::new(new_post.title, new_post.content)
            .with_id(Uuid::new_v4().simple().to_string())
            .with_created_at(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true));

        self.posts.write().await.push(post.clone());
        tracing::debug!(id = ?post.id, "Post stored");
        Ok(post)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_assigns_id_and_date() {
        let store = InMemoryPostStore::new();
        let post = store.insert(NewPost::new("Hello", "world")).await.unwrap();

        assert!(post.id.is_some());
        assert!(post.timestamp_millis() > 0);
        assert_eq!(store.list().await.unwrap(), vec![post]);
    }

    #[tokio::test]
    async fn test_insert_rejects_empty_title() {
        let store = InMemoryPostStore::new();
        let err = store.insert(NewPost::new("", "x")).await.unwrap_err();
        assert!(matches!(err, StoreError::Constraint(_)));
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_keeps_insertion_order() {
        let store = InMemoryPostStore::seeded();
        store.insert(NewPost::new("last", "")).await.unwrap();

        let titles: Vec<_> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(titles.first().map(String::as_str), Some("Welcome to Postboard"));
        assert_eq!(titles.last().map(String::as_str), Some("last"));
    }
}
