//! Plain-text rendering of the view models.

use std::fmt::Write;

use postboard_core::domain::{Post, PostKey, SortKey, TodoList};

/// What the post list screen needs to draw itself.
pub struct ListView<'a> {
    pub posts: &'a [Post],
    pub total: usize,
    pub loading: bool,
    pub search_text: &'a str,
    pub sort_key: SortKey,
    pub user: Option<&'a str>,
}

pub fn render_list(view: &ListView<'_>) -> String {
    let mut out = String::new();

    if let Some(email) = view.user {
        let _ = writeln!(out, "Hello, {}", email);
    }
    let _ = write!(out, "Simple Posts  [sort: {}", view.sort_key);
    if !view.search_text.is_empty() {
        let _ = write!(out, ", search: {:?}", view.search_text);
    }
    let _ = writeln!(out, "]");
    let _ = writeln!(
        out,
        "Total Data: {}{}",
        view.total,
        if view.loading { "  (loading...)" } else { "" }
    );

    if view.posts.is_empty() {
        let _ = write!(out, "No posts to show.");
        return out;
    }

    for (position, post) in view.posts.iter().enumerate() {
        let chip = match post.list_key(position) {
            PostKey::Id(_) => post.short_id().unwrap_or_default(),
            key @ PostKey::Position(_) => key.to_string(),
        };
        let _ = writeln!(out, "{:<8} {}  ({})", chip, post.title, post.display_author());
        if !post.content.is_empty() {
            let _ = writeln!(out, "{:<8} {}", "", post.content);
        }
    }

    out.truncate(out.trim_end().len());
    out
}

pub fn render_todos(todos: &TodoList) -> String {
    let mut out = format!("My ToDos: {}", todos.len());
    for (index, item) in todos.iter().enumerate() {
        let _ = write!(out, "\n  [{}] {}", index, item);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view<'a>(posts: &'a [Post]) -> ListView<'a> {
        ListView {
            posts,
            total: posts.len(),
            loading: false,
            search_text: "",
            sort_key: SortKey::Date,
            user: None,
        }
    }

    #[test]
    fn test_empty_list() {
        let out = render_list(&view(&[]));
        assert!(out.contains("Total Data: 0"));
        assert!(out.ends_with("No posts to show."));
    }

    #[test]
    fn test_rows_show_chip_title_and_author() {
        let posts = vec![
            Post::new("Hello", "world")
                .with_id("65a1f0c9e2b4")
                .with_author("Ada"),
            Post::new("Anonymous", ""),
        ];
        let out = render_list(&view(&posts));

        assert!(out.contains("#65a1f0  Hello  (Ada)"));
        assert!(out.contains("         world"));
        assert!(out.contains("@1       Anonymous  (Unknown)"));
    }

    #[test]
    fn test_header_shows_controls() {
        let posts = vec![Post::new("a", "")];
        let mut v = view(&posts);
        v.search_text = "rust";
        v.sort_key = SortKey::Title;
        v.total = 5;
        v.loading = true;
        v.user = Some("me@example.com");

        let out = render_list(&v);
        assert!(out.starts_with("Hello, me@example.com\n"));
        assert!(out.contains("[sort: title, search: \"rust\"]"));
        assert!(out.contains("Total Data: 5  (loading...)"));
    }

    #[test]
    fn test_todos() {
        let mut todos = TodoList::new();
        todos.add("one");
        todos.add("two");
        assert_eq!(render_todos(&todos), "My ToDos: 2\n  [0] one\n  [1] two");
    }
}
