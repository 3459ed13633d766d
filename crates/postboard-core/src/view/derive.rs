//! The derivation pipeline: filter, then stable sort.
//!
//! Everything here borrows its input. The raw sequence is never reordered.

use crate::domain::{Post, SortKey};

/// Whether `post` matches an already-lowercased search needle.
///
/// Title, content and author name are searched; a missing author searches as
/// the empty string. An empty needle matches everything.
pub fn matches_search(post: &Post, needle_lower: &str) -> bool {
    if needle_lower.is_empty() {
        return true;
    }

    post.title.to_lowercase().contains(needle_lower)
        || post.content.to_lowercase().contains(needle_lower)
        || post
            .author_name()
            .is_some_and(|name| name.to_lowercase().contains(needle_lower))
}

/// Posts matching `search_text`, case-insensitively, in input order.
pub fn filter_posts<'a>(posts: &'a [Post], search_text: &str) -> Vec<&'a Post> {
    let needle = search_text.to_lowercase();
    posts
        .iter()
        .filter(|post| matches_search(post, &needle))
        .collect()
}

/// Filter `raw` by `search_text` and sort the survivors by `sort_key`.
///
/// Ties keep their relative order from `raw`.
pub fn derive_posts(raw: &[Post], search_text: &str, sort_key: SortKey) -> Vec<Post> {
    let mut filtered = filter_posts(raw, search_text);
    // `sort_by` is stable.
    filtered.sort_by(|a, b| sort_key.compare(a, b));
    filtered.into_iter().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Post> {
        vec![
            Post::new("Rust tips", "ownership and borrowing")
                .with_id("1")
                .with_created_at("2024-01-01")
                .with_author("Ferris"),
            Post::new("banana bread", "a recipe")
                .with_id("2")
                .with_created_at("2024-06-01"),
            Post::new("Async in practice", "tokio, futures")
                .with_id("3")
                .with_created_at("2023-12-31T23:59:59Z")
                .with_author("alice"),
            Post::new("untitled", "").with_id("4"),
        ]
    }

    fn ids(posts: &[Post]) -> Vec<&str> {
        posts.iter().map(|p| p.id.as_deref().unwrap_or("-")).collect()
    }

    #[test]
    fn test_empty_search_keeps_everything() {
        let raw = sample();
        let derived = derive_posts(&raw, "", SortKey::Id);
        assert_eq!(ids(&derived), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let raw = sample();

        let by_title = derive_posts(&raw, "RUST", SortKey::Id);
        assert_eq!(ids(&by_title), vec!["1"]);

        let by_content = derive_posts(&raw, "Tokio", SortKey::Id);
        assert_eq!(ids(&by_content), vec!["3"]);

        let by_author = derive_posts(&raw, "ferr", SortKey::Id);
        assert_eq!(ids(&by_author), vec!["1"]);
    }

    #[test]
    fn test_missing_author_is_not_matched_by_unknown() {
        let raw = sample();
        let derived = derive_posts(&raw, "unknown", SortKey::Id);
        assert!(derived.is_empty());
    }

    #[test]
    fn test_filter_result_is_subsequence_of_input() {
        let raw = sample();
        for needle in ["", "a", "in", "zzz", "e"] {
            let filtered = filter_posts(&raw, needle);
            let mut cursor = raw.iter();
            for post in filtered {
                assert!(
                    cursor.any(|candidate| std::ptr::eq(candidate, post)),
                    "filter reordered or invented posts for needle {:?}",
                    needle
                );
            }
        }
    }

    #[test]
    fn test_date_sort_newest_first_missing_last() {
        let raw = vec![
            Post::new("jan", "").with_created_at("2024-01-01"),
            Post::new("none", ""),
            Post::new("jun", "").with_created_at("2024-06-01"),
        ];
        let derived = derive_posts(&raw, "", SortKey::Date);
        let titles: Vec<_> = derived.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["jun", "jan", "none"]);
    }

    #[test]
    fn test_title_sort_is_case_insensitive() {
        let raw = sample();
        let derived = derive_posts(&raw, "", SortKey::Title);
        assert_eq!(ids(&derived), vec!["3", "2", "1", "4"]);
    }

    #[test]
    fn test_user_sort_puts_anonymous_after_named() {
        let raw = sample();
        let derived = derive_posts(&raw, "", SortKey::User);
        // alice, Ferris, then the two anonymous posts in input order
        assert_eq!(ids(&derived), vec!["3", "1", "2", "4"]);
    }

    #[test]
    fn test_title_sort_places_accented_titles_by_base_letter() {
        let raw = vec![
            Post::new("Zoe", "").with_id("z"),
            Post::new("Émile", "").with_id("e"),
            Post::new("Fred", "").with_id("f"),
        ];
        let derived = derive_posts(&raw, "", SortKey::Title);
        assert_eq!(ids(&derived), vec!["e", "f", "z"]);
    }

    #[test]
    fn test_user_sort_places_accented_authors_by_base_letter() {
        let raw = vec![
            Post::new("t", "").with_id("1").with_author("Zoë"),
            Post::new("t", "").with_id("2"),
            Post::new("t", "").with_id("3").with_author("bob"),
            Post::new("t", "").with_id("4").with_author("Ángel"),
        ];
        let derived = derive_posts(&raw, "", SortKey::User);
        // Ángel, bob, anonymous ("z"), then Zoë
        assert_eq!(ids(&derived), vec!["4", "3", "2", "1"]);
    }

    #[test]
    fn test_date_sort_accepts_basic_offset_timestamps() {
        let raw = vec![
            Post::new("old", "").with_created_at("2024-01-01"),
            Post::new("new", "").with_created_at("2024-06-01T10:00:00.000+0000"),
        ];
        let derived = derive_posts(&raw, "", SortKey::Date);
        let titles: Vec<_> = derived.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["new", "old"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let raw = vec![
            Post::new("same", "first").with_id("a"),
            Post::new("other", "x").with_id("b"),
            Post::new("same", "second").with_id("c"),
            Post::new("same", "third").with_id("d"),
        ];
        let derived = derive_posts(&raw, "", SortKey::Title);
        assert_eq!(ids(&derived), vec!["b", "a", "c", "d"]);

        // all dates missing: every key ties, input order survives
        let by_date = derive_posts(&raw, "", SortKey::Date);
        assert_eq!(ids(&by_date), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_derive_does_not_touch_input_and_is_repeatable() {
        let raw = sample();
        let before = raw.clone();

        let first = derive_posts(&raw, "", SortKey::Title);
        let second = derive_posts(&raw, "", SortKey::Title);

        assert_eq!(first, second);
        assert_eq!(raw, before);
    }
}
