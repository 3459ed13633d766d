//! Domain entities - the core business objects.

mod post;
mod sort;
mod todo;

pub use post::{Author, Credentials, DEFAULT_CONTENT, NewPost, Post, PostKey};
pub use sort::{SortKey, locale_cmp};
pub use todo::TodoList;
