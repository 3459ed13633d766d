use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Content used by `addPost` when the caller supplies none.
pub const DEFAULT_CONTENT: &str = "New content created";

const UNKNOWN_AUTHOR: &str = "Unknown";
const MISSING_AUTHOR_SORT_NAME: &str = "z";
const SHORT_ID_LEN: usize = 6;

/// Post entity - the canonical shape every adapter normalizes into.
///
/// Every field except `title` and `content` may be absent on the wire, and
/// those two degrade to empty strings rather than failing the whole fetch.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: Option<String>,
    pub title: String,
    pub content: String,
    pub created_at: Option<String>,
    pub author: Option<Author>,
}

/// Author of a post. Only the display name is carried.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
}

impl Author {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Key a presentation layer uses to identify a rendered row.
///
/// `Position` is only used when the post carries no identifier at all, and it
/// does not survive a reordering of the list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PostKey {
    Id(String),
    Position(usize),
}

impl fmt::Display for PostKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostKey::Id(id) => write!(f, "{}", id),
            PostKey::Position(index) => write!(f, "@{}", index),
        }
    }
}

impl Post {
    /// Create a post with the given title and content and nothing else.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_created_at(mut self, created_at: impl Into<String>) -> Self {
        self.created_at = Some(created_at.into());
        self
    }

    pub fn with_author(mut self, name: impl Into<String>) -> Self {
        self.author = Some(Author::new(name));
        self
    }

    /// Author name, if the post has an author.
    pub fn author_name(&self) -> Option<&str> {
        self.author.as_ref().map(|a| a.name.as_str())
    }

    /// Name shown to the user: `"Unknown"` when there is no author.
    pub fn display_author(&self) -> &str {
        self.author_name().unwrap_or(UNKNOWN_AUTHOR)
    }

    /// Name used by the `user` sort: `"z"` when there is no author, so
    /// anonymous posts land after named ones.
    pub fn sort_author(&self) -> &str {
        self.author_name().unwrap_or(MISSING_AUTHOR_SORT_NAME)
    }

    /// Milliseconds since the Unix epoch parsed from `created_at`.
    ///
    /// Missing or unparsable timestamps map to `0`.
    pub fn timestamp_millis(&self) -> i64 {
        self.created_at
            .as_deref()
            .and_then(parse_timestamp_millis)
            .unwrap_or(0)
    }

    /// Row key for this post at `position` in the rendered sequence.
    pub fn list_key(&self, position: usize) -> PostKey {
        match &self.id {
            Some(id) => PostKey::Id(id.clone()),
            None => PostKey::Position(position),
        }
    }

    /// The id chip: `#` followed by the first six characters of the id.
    pub fn short_id(&self) -> Option<String> {
        self.id
            .as_ref()
            .map(|id| format!("#{}", id.chars().take(SHORT_ID_LEN).collect::<String>()))
    }
}

/// Parse the timestamp formats servers commonly emit.
///
/// Zone-less forms are read as UTC.
fn parse_timestamp_millis(raw: &str) -> Option<i64> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.timestamp_millis());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.timestamp_millis());
    }
    // ISO 8601 with a basic offset, e.g. `+0000`
    if let Ok(dt) = DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f%z") {
        return Some(dt.timestamp_millis());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt.and_utc().timestamp_millis());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().timestamp_millis())
}

/// A post the user wants to create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub content: String,
}

impl NewPost {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Login credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

// Keep the password out of logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}
