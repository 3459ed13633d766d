//! Data Transfer Objects - request/response bodies of the post API.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A post as it appears on the wire.
///
/// Servers disagree on the id field name (`id` vs `_id`) and sometimes send
/// numbers or `null` where strings are expected, so every field is optional
/// and scalar values are stringified.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPost {
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,

    #[serde(
        rename = "_id",
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub underscore_id: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub content: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient_author",
        skip_serializing_if = "Option::is_none"
    )]
    pub author: Option<RawAuthor>,
}

/// Nested author object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawAuthor {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
}

/// Body of `GET /api/post` as the client reads it.
///
/// Items are taken from `records`, then `data`; anything else yields an empty
/// list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostListEnvelope {
    #[serde(default)]
    pub records: Option<Value>,
    #[serde(default)]
    pub data: Option<Value>,
}

impl PostListEnvelope {
    /// Read the envelope out of an arbitrary JSON document.
    ///
    /// A document that is not an object has neither field.
    pub fn from_value(body: Value) -> Self {
        match body {
            Value::Object(_) => serde_json::from_value(body).unwrap_or_default(),
            _ => Self::default(),
        }
    }

    /// The raw list items, `records` first.
    pub fn into_items(self) -> Vec<Value> {
        match (self.records, self.data) {
            (Some(Value::Array(items)), _) => items,
            (_, Some(Value::Array(items))) => items,
            _ => Vec::new(),
        }
    }
}

/// Body of `GET /api/post` as the development server writes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostListResponse {
    pub records: Vec<RawPost>,
}

/// Request to create a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    #[serde(default)]
    pub content: String,
}

/// Request to log in.
#[derive(Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

fn lenient_author<'de, D>(deserializer: D) -> Result<Option<RawAuthor>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        value @ Value::Object(_) => serde_json::from_value(value).ok(),
        _ => None,
    })
}
