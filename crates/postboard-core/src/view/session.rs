//! Login session view model.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::Credentials;
use crate::error::ApiError;
use crate::ports::AuthApi;

/// What a call to [`SessionModel::login`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    /// The email failed the format check; nothing was sent.
    InvalidEmail,
    LoggedIn,
    /// The server refused the credentials.
    Rejected { status: u16 },
    /// The server could not be reached.
    Failed,
}

/// Loose email shape check: `local@domain.tld`, no whitespace.
pub fn is_email(candidate: &str) -> bool {
    if candidate.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = candidate.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };

    !local.is_empty()
        && domain
            .find('.')
            .is_some_and(|dot| dot > 0 && !domain.ends_with('.'))
}

/// Tracks whether the user is logged in, and as whom.
pub struct SessionModel<A: ?Sized> {
    api: Arc<A>,
    email: RwLock<Option<String>>,
}

impl<A: AuthApi + ?Sized> SessionModel<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            email: RwLock::new(None),
        }
    }

    /// Validate the email, then ask the server. The password is not kept.
    pub async fn login(&self, email: &str, password: &str) -> LoginOutcome {
        if !is_email(email) {
            tracing::debug!("Rejecting login with malformed email");
            return LoginOutcome::InvalidEmail;
        }

        let credentials = Credentials {
            email: email.to_string(),
            password: password.to_string(),
        };

        match self.api.login(&credentials).await {
            Ok(()) => {
                tracing::info!(email = %credentials.email, "Logged in");
                *self.email.write().await = Some(credentials.email);
                LoginOutcome::LoggedIn
            }
            Err(ApiError::UnexpectedStatus(status)) => {
                tracing::warn!(status, "Login rejected");
                LoginOutcome::Rejected { status }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Login request failed");
                LoginOutcome::Failed
            }
        }
    }

    pub async fn logout(&self) {
        if let Some(email) = self.email.write().await.take() {
            tracing::info!(email = %email, "Logged out");
        }
    }

    pub async fn is_logged_in(&self) -> bool {
        self.email.read().await.is_some()
    }

    /// Email of the logged-in user.
    pub async fn email(&self) -> Option<String> {
        self.email.read().await.clone()
    }
}
