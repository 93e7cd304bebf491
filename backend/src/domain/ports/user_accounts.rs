//! Driving port for signup and signin.
//!
//! Inbound adapters call this port to register accounts and exchange
//! credentials for bearer tokens without importing hashing, signing, or
//! persistence concerns.

use async_trait::async_trait;

use crate::domain::{AccessToken, Error, LoginCredentials, SignupCredentials, UserAccount};

/// Domain use-case port for account registration and authentication.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserAccounts: Send + Sync {
    /// Register a new account.
    ///
    /// # Errors
    /// `conflict` when the email is already registered.
    async fn signup(&self, credentials: &SignupCredentials) -> Result<UserAccount, Error>;

    /// Exchange credentials for a bearer token.
    ///
    /// # Errors
    /// `not_found` for an unknown email; `invalid_request` for a wrong
    /// password.
    async fn signin(&self, credentials: &LoginCredentials) -> Result<AccessToken, Error>;
}
