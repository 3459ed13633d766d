//! Post list view model.
//!
//! Holds the raw post sequence plus the user's search text, sort key and title
//! input, and exposes the derived (filtered and sorted) sequence. Fetch and
//! add operations talk to a [`PostApi`] and never return an error: failures
//! are logged and leave the current posts in place.
//!
//! Concurrent fetches are ordered by ticket. A response is applied only if it
//! was requested after the last applied one, so a slow early request cannot
//! overwrite a newer list.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use tokio::sync::{Mutex, RwLock};

use super::derive::derive_posts;
use super::memo::Memo;
use crate::domain::{DEFAULT_CONTENT, NewPost, Post, SortKey};
use crate::error::ApiError;
use crate::ports::PostApi;

/// What a call to [`PostViewModel::fetch_posts`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The response replaced the raw posts.
    Applied { count: usize },
    /// A newer fetch already landed; this response was dropped.
    Stale,
    /// The request failed; the raw posts are unchanged.
    Failed,
}

/// What a call to [`PostViewModel::add_post`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddPostOutcome {
    /// Empty title: nothing was sent.
    Skipped,
    /// 2xx from the server; the list was reloaded and the input cleared.
    Created,
    /// The server answered with a non-2xx status.
    Rejected { status: u16 },
    /// The request did not complete or the answer was unreadable.
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct DeriveKey {
    revision: u64,
    search_text: String,
    sort_key: SortKey,
}

#[derive(Debug, Default)]
struct ViewState {
    raw_posts: Arc<[Post]>,
    /// Bumped every time `raw_posts` is replaced.
    revision: u64,
    search_text: String,
    sort_key: SortKey,
    title_input: String,
    applied_ticket: u64,
}

/// Decrements the in-flight counter when the fetch ends, even if the future
/// is dropped mid-request.
struct InFlightGuard<'a>(&'a AtomicUsize);

impl<'a> InFlightGuard<'a> {
    fn enter(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// View model for the post list.
pub struct PostViewModel<A: ?Sized> {
    api: Arc<A>,
    state: RwLock<ViewState>,
    derived: Mutex<Memo<DeriveKey, Arc<[Post]>>>,
    next_ticket: AtomicU64,
    in_flight: AtomicUsize,
}

impl<A: PostApi + ?Sized> PostViewModel<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            state: RwLock::new(ViewState::default()),
            derived: Mutex::new(Memo::new()),
            next_ticket: AtomicU64::new(0),
            in_flight: AtomicUsize::new(0),
        }
    }

    /// True while at least one fetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    /// Fetch the post list and replace the raw posts with it.
    pub async fn fetch_posts(&self) -> FetchOutcome {
        let ticket = self.next_ticket.fetch_add(1, Ordering::SeqCst) + 1;
        let _loading = InFlightGuard::enter(&self.in_flight);

        tracing::debug!(ticket, "Fetching posts");
        let result = self.api.list_posts().await;

        let mut state = self.state.write().await;
        match result {
            Ok(posts) if ticket > state.applied_ticket => {
                let count = posts.len();
                state.raw_posts = posts.into();
                state.revision += 1;
                state.applied_ticket = ticket;
                tracing::info!(ticket, count, "Posts loaded");
                FetchOutcome::Applied { count }
            }
            Ok(_) => {
                tracing::debug!(
                    ticket,
                    applied = state.applied_ticket,
                    "Dropping stale post list"
                );
                FetchOutcome::Stale
            }
            Err(e) => {
                tracing::warn!(ticket, error = %e, "Failed to fetch posts, keeping current list");
                FetchOutcome::Failed
            }
        }
    }

    /// Create a post, then reload the list and clear the title input.
    ///
    /// An empty `title` is a no-op. `content` defaults to
    /// [`DEFAULT_CONTENT`].
    pub async fn add_post(&self, title: &str, content: Option<&str>) -> AddPostOutcome {
        if title.is_empty() {
            tracing::debug!("Ignoring add with empty title");
            return AddPostOutcome::Skipped;
        }

        let new_post = NewPost::new(title, content.unwrap_or(DEFAULT_CONTENT));
        match self.api.create_post(&new_post).await {
            Ok(()) => {
                tracing::info!(title = %new_post.title, "Post created");
                self.fetch_posts().await;
                self.state.write().await.title_input.clear();
                AddPostOutcome::Created
            }
            Err(ApiError::UnexpectedStatus(status)) => {
                tracing::warn!(status, "Server rejected new post");
                AddPostOutcome::Rejected { status }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to create post");
                AddPostOutcome::Failed
            }
        }
    }

    /// Add a post from the current title input with the default content.
    pub async fn submit_title_input(&self) -> AddPostOutcome {
        let title = self.state.read().await.title_input.clone();
        self.add_post(&title, None).await
    }

    /// The filtered and sorted posts for the current inputs.
    ///
    /// Recomputed only when the raw posts, search text or sort key changed
    /// since the last call.
    pub async fn posts(&self) -> Arc<[Post]> {
        let (key, raw) = {
            let state = self.state.read().await;
            let key = DeriveKey {
                revision: state.revision,
                search_text: state.search_text.clone(),
                sort_key: state.sort_key,
            };
            (key, Arc::clone(&state.raw_posts))
        };

        let mut memo = self.derived.lock().await;
        memo.get_or_compute(key.clone(), || {
            derive_posts(&raw, &key.search_text, key.sort_key).into()
        })
    }

    /// The raw posts in fetch order.
    pub async fn raw_posts(&self) -> Arc<[Post]> {
        Arc::clone(&self.state.read().await.raw_posts)
    }

    /// Number of raw posts, regardless of the search filter.
    pub async fn total(&self) -> usize {
        self.state.read().await.raw_posts.len()
    }

    pub async fn search_text(&self) -> String {
        self.state.read().await.search_text.clone()
    }

    pub async fn set_search_text(&self, text: impl Into<String>) {
        self.state.write().await.search_text = text.into();
    }

    pub async fn sort_key(&self) -> SortKey {
        self.state.read().await.sort_key
    }

    pub async fn set_sort_key(&self, key: SortKey) {
        self.state.write().await.sort_key = key;
    }

    pub async fn title_input(&self) -> String {
        self.state.read().await.title_input.clone()
    }

    pub async fn set_title_input(&self, text: impl Into<String>) {
        self.state.write().await.title_input = text.into();
    }

    /// `(hits, misses)` of the derived-list memo.
    pub async fn memo_stats(&self) -> (u64, u64) {
        self.derived.lock().await.stats()
    }
}
