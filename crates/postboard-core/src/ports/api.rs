use async_trait::async_trait;

use crate::domain::{Credentials, NewPost, Post};
use crate::error::ApiError;

/// Remote post API - the fetch collaborator of the post view model.
///
/// Implementations are responsible for normalizing whatever the server sends
/// into canonical [`Post`] values.
#[async_trait]
pub trait PostApi: Send + Sync {
    /// Fetch the full post list.
    async fn list_posts(&self) -> Result<Vec<Post>, ApiError>;

    /// Create a post. `Ok` means the server answered with a 2xx status.
    async fn create_post(&self, post: &NewPost) -> Result<(), ApiError>;
}

/// Remote login endpoint.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// `Ok` means the server accepted the credentials (2xx).
    async fn login(&self, credentials: &Credentials) -> Result<(), ApiError>;
}
