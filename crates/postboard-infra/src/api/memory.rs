//! In-memory post API - used when no server is configured, and in tests.

use std::sync::Arc;

use async_trait::async_trait;

use postboard_core::domain::{Credentials, NewPost, Post};
use postboard_core::error::ApiError;
use postboard_core::ports::{AuthApi, PostApi, PostStore};

/// [`PostApi`] and [`AuthApi`] served straight from a [`PostStore`].
///
/// Store constraint violations surface as `400`, unavailability as a
/// network error, and unknown credentials as `401`, mirroring what the HTTP
/// adapter would see from the development server.
pub struct InMemoryPostApi {
    store: Arc<dyn PostStore>,
    account: Option<Credentials>,
}

impl InMemoryPostApi {
    pub fn new(store: Arc<dyn PostStore>) -> Self {
        Self {
            store,
            account: None,
        }
    }

    /// Accept logins for exactly this account.
    pub fn with_account(mut self, email: impl Into<String>, password: impl Into<String>) -> Self {
        self.account = Some(Credentials {
            email: email.into(),
            password: password.into(),
        });
        self
    }
}

#[async_trait]
impl PostApi for InMemoryPostApi {
    async fn list_posts(&self) -> Result<Vec<Post>, ApiError> {
        Ok(self.store.list().await?)
    }

    async fn create_post(&self, post: &NewPost) -> Result<(), ApiError> {
        self.store.insert(post.clone()).await?;
        Ok(())
    }
}

#[async_trait]
impl AuthApi for InMemoryPostApi {
    async fn login(&self, credentials: &Credentials) -> Result<(), ApiError> {
        match &self.account {
            Some(account) if account == credentials => Ok(()),
            _ => Err(ApiError::UnexpectedStatus(401)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use postboard_core::domain::SortKey;
    use postboard_core::view::{AddPostOutcome, LoginOutcome};
    use postboard_core::{PostViewModel, SessionModel};

    use crate::store::InMemoryPostStore;

    #[tokio::test]
    async fn test_view_model_over_memory() {
        let api = Arc::new(InMemoryPostApi::new(Arc::new(InMemoryPostStore::seeded())));
        let vm = PostViewModel::new(api);
        vm.fetch_posts().await;

        let newest = vm.posts().await;
        assert_eq!(newest[0].title, "Welcome to Postboard");
        assert_eq!(newest[2].title, "Release notes");

        vm.set_sort_key(SortKey::User).await;
        let by_user: Vec<_> = vm.posts().await.iter().map(|p| p.display_author().to_string()).collect();
        assert_eq!(by_user, vec!["Ada", "grace", "Unknown"]);

        assert_eq!(vm.add_post("Another", None).await, AddPostOutcome::Created);
        assert_eq!(vm.total().await, 4);
    }

    #[tokio::test]
    async fn test_login_against_configured_account() {
        let api = Arc::new(
            InMemoryPostApi::new(Arc::new(InMemoryPostStore::new()))
                .with_account("demo@example.com", "password123"),
        );
        let session = SessionModel::new(api);

        assert_eq!(
            session.login("demo@example.com", "wrong").await,
            LoginOutcome::Rejected { status: 401 }
        );
        assert_eq!(
            session.login("demo@example.com", "password123").await,
            LoginOutcome::LoggedIn
        );
    }
}
