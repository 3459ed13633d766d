//! HTTP post API client built on reqwest.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::Value;

use postboard_core::domain::{Credentials, NewPost, Post};
use postboard_core::error::ApiError;
use postboard_core::ports::{AuthApi, PostApi};
use postboard_shared::{CreatePostRequest, LoginRequest};

use super::normalize::normalize_post_list;

const POSTS_PATH: &str = "/api/post";
const LOGIN_PATH: &str = "/api/auth/login";

/// Configuration for [`HttpPostApi`].
#[derive(Debug, Clone)]
pub struct HttpApiConfig {
    /// Scheme, host and port, e.g. `http://localhost:5173`.
    pub base_url: String,
    /// Whole-request timeout.
    pub timeout: Duration,
}

impl HttpApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// Post and login API over HTTP.
pub struct HttpPostApi {
    client: Client,
    posts_url: String,
    login_url: String,
}

impl HttpPostApi {
    pub fn new(config: &HttpApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let base = config.base_url.trim_end_matches('/');
        Ok(Self {
            client,
            posts_url: format!("{}{}", base, POSTS_PATH),
            login_url: format!("{}{}", base, LOGIN_PATH),
        })
    }

    fn check_status(response: &Response) -> Result<(), ApiError> {
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ApiError::UnexpectedStatus(status.as_u16()))
        }
    }
}

#[async_trait]
impl PostApi for HttpPostApi {
    async fn list_posts(&self) -> Result<Vec<Post>, ApiError> {
        let response = self
            .client
            .get(&self.posts_url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::check_status(&response)?;

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let body: Value = serde_json::from_slice(&bytes)
            .map_err(|e| ApiError::MalformedResponse(e.to_string()))?;

        let posts = normalize_post_list(body);
        tracing::debug!(url = %self.posts_url, count = posts.len(), "Fetched post list");
        Ok(posts)
    }

    async fn create_post(&self, post: &NewPost) -> Result<(), ApiError> {
        let body = CreatePostRequest {
            title: post.title.clone(),
            content: post.content.clone(),
        };

        let response = self
            .client
            .post(&self.posts_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        tracing::debug!(status = response.status().as_u16(), "Create post answered");
        Self::check_status(&response)
    }
}

#[async_trait]
impl AuthApi for HttpPostApi {
    async fn login(&self, credentials: &Credentials) -> Result<(), ApiError> {
        let body = LoginRequest {
            email: credentials.email.clone(),
            password: credentials.password.clone(),
        };

        let response = self
            .client
            .post(&self.login_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Self::check_status(&response)
    }
}
