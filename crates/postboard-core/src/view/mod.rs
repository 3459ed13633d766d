//! View models - state the presentation layer reads and writes.

mod derive;
mod memo;
mod post_list;
mod session;

pub use derive::{derive_posts, filter_posts, matches_search};
pub use memo::Memo;
pub use post_list::{AddPostOutcome, FetchOutcome, PostViewModel};
pub use session::{LoginOutcome, SessionModel, is_email};
