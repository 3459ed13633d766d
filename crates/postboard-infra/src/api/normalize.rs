//! Wire-to-domain normalization.
//!
//! Everything downstream of this module sees only canonical [`Post`] values.

use postboard_core::domain::{Author, Post};
use postboard_shared::{PostListEnvelope, RawAuthor, RawPost};
use serde_json::Value;

/// Turn a `GET /api/post` body into canonical posts.
///
/// Items come from `records`, else `data`, else nothing. Items that are not
/// JSON objects are skipped.
pub fn normalize_post_list(body: Value) -> Vec<Post> {
    PostListEnvelope::from_value(body)
        .into_items()
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value::<RawPost>(item) {
            Ok(raw) => Some(normalize_post(raw)),
            Err(e) => {
                tracing::warn!(index, error = %e, "Skipping unreadable post item");
                None
            }
        })
        .collect()
}

/// Map one wire post to the canonical shape.
///
/// `id` wins over `_id`. Empty identifiers and author names count as absent.
pub fn normalize_post(raw: RawPost) -> Post {
    Post {
        id: non_empty(raw.id).or_else(|| non_empty(raw.underscore_id)),
        title: raw.title.unwrap_or_default(),
        content: raw.content.unwrap_or_default(),
        created_at: non_empty(raw.created_at),
        author: raw
            .author
            .and_then(|a| non_empty(a.name))
            .map(Author::new),
    }
}

/// The wire form the development server sends.
pub fn to_raw_post(post: &Post) -> RawPost {
    RawPost {
        id: post.id.clone(),
        underscore_id: None,
        title: Some(post.title.clone()),
        content: Some(post.content.clone()),
        created_at: post.created_at.clone(),
        author: post.author.as_ref().map(|a| RawAuthor {
            name: Some(a.name.clone()),
        }),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_records_body() {
        let posts = normalize_post_list(json!({
            "records": [{"id": "1", "title": "Hi", "content": "c", "createdAt": "2024-01-01"}]
        }));

        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id.as_deref(), Some("1"));
        assert_eq!(posts[0].title, "Hi");
        assert_eq!(posts[0].created_at.as_deref(), Some("2024-01-01"));
        assert_eq!(posts[0].author, None);
    }

    #[test]
    fn test_data_body_with_underscore_ids() {
        let posts = normalize_post_list(json!({
            "data": [
                {"_id": "65a1f0", "title": "Mongo", "author": {"name": "Ada"}},
                {"id": "7", "_id": "ignored", "title": "Both"}
            ]
        }));

        assert_eq!(posts[0].id.as_deref(), Some("65a1f0"));
        assert_eq!(posts[0].display_author(), "Ada");
        assert_eq!(posts[1].id.as_deref(), Some("7"));
    }

    #[test]
    fn test_empty_object_is_empty_list() {
        assert!(normalize_post_list(json!({})).is_empty());
    }

    #[test]
    fn test_malformed_items_degrade() {
        let posts = normalize_post_list(json!({
            "records": [
                "just a string",
                {"title": null, "author": {"name": ""}},
                {"id": ""}
            ]
        }));

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].title, "");
        assert_eq!(posts[0].author, None);
        assert_eq!(posts[1].id, None);
        assert_eq!(posts[1].list_key(1).to_string(), "@1");
    }

    #[test]
    fn test_raw_post_from_server_normalizes_back() {
        let post = Post::new("Hello", "body")
            .with_id("abc")
            .with_created_at("2024-02-02T10:00:00Z")
            .with_author("Grace");

        assert_eq!(normalize_post(to_raw_post(&post)), post);
    }
}
