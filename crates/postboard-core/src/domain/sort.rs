use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use icu_collator::{Collator, CollatorOptions, Strength};
use serde::{Deserialize, Serialize};

use super::Post;
use crate::error::DomainError;

/// Sort order the user picked for the post list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Newest first by `created_at`.
    #[default]
    Date,
    /// Ascending title, locale-aware.
    Title,
    /// Ascending author name, locale-aware. Anonymous posts sort as `"z"`.
    User,
    /// Ascending id, plain code-point comparison.
    Id,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [SortKey::Date, SortKey::Title, SortKey::User, SortKey::Id];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Date => "date",
            SortKey::Title => "title",
            SortKey::User => "user",
            SortKey::Id => "id",
        }
    }

    /// Compare two posts under this key.
    ///
    /// Returns `Equal` for tied keys so a stable sort keeps their input order.
    pub fn compare(&self, a: &Post, b: &Post) -> Ordering {
        match self {
            SortKey::Date => b.timestamp_millis().cmp(&a.timestamp_millis()),
            SortKey::Title => locale_cmp(&a.title, &b.title),
            SortKey::User => locale_cmp(a.sort_author(), b.sort_author()),
            SortKey::Id => a
                .id
                .as_deref()
                .unwrap_or_default()
                .cmp(b.id.as_deref().unwrap_or_default()),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "date" => Ok(SortKey::Date),
            "title" => Ok(SortKey::Title),
            "user" | "author" => Ok(SortKey::User),
            "id" => Ok(SortKey::Id),
            other => Err(DomainError::Validation(format!(
                "unknown sort key '{}', expected one of date, title, user, id",
                other
            ))),
        }
    }
}

thread_local! {
    static ROOT_COLLATOR: Option<Collator> = root_collator();
}

fn root_collator() -> Option<Collator> {
    let mut options = CollatorOptions::new();
    options.strength = Some(Strength::Tertiary);

    match Collator::try_new(&Default::default(), options) {
        Ok(collator) => Some(collator),
        Err(e) => {
            tracing::warn!(error = %e, "Root collator unavailable, using case-folded ordering");
            None
        }
    }
}

/// Locale-aware ascending comparison using the root collation.
///
/// Accented letters sort next to their base letter (`"Émile" < "Fred"`).
/// Case only breaks ties, lowercase first (`"a" < "A"`).
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    ROOT_COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => folded_cmp(a, b),
    })
}

// Lowercase code points first, then lowercase before uppercase.
fn folded_cmp(a: &str, b: &str) -> Ordering {
    let folded_a = a.chars().flat_map(char::to_lowercase);
    let folded_b = b.chars().flat_map(char::to_lowercase);

    folded_a.cmp(folded_b).then_with(|| {
        a.chars()
            .map(char::is_uppercase)
            .cmp(b.chars().map(char::is_uppercase))
    })
}
