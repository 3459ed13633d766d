//! The single login account the development server accepts.

use std::sync::Arc;

use postboard_core::domain::Credentials;
use postboard_core::ports::{AuthError, PasswordService};

/// Email plus password hash. The plain password is dropped after hashing.
pub struct DemoAccount {
    email: String,
    password_hash: String,
    passwords: Arc<dyn PasswordService>,
}

impl DemoAccount {
    pub fn new(
        email: impl Into<String>,
        password: &str,
        passwords: Arc<dyn PasswordService>,
    ) -> Result<Self, AuthError> {
        let password_hash = passwords.hash(password)?;
        Ok(Self {
            email: email.into(),
            password_hash,
            passwords,
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Check a login attempt. Emails compare case-insensitively.
    pub fn authenticate(&self, credentials: &Credentials) -> Result<(), AuthError> {
        if !credentials.email.eq_ignore_ascii_case(&self.email) {
            return Err(AuthError::InvalidCredentials);
        }
        if self
            .passwords
            .verify(&credentials.password, &self.password_hash)?
        {
            Ok(())
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}
