//! Port for registered account persistence.

use async_trait::async_trait;

use crate::domain::UserAccount;

use super::define_port_error;

define_port_error! {
    /// Errors raised by account repository adapters.
    pub enum UserAccountRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "account repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "account repository query failed: {message}",
        /// Another account already uses the email address.
        DuplicateEmail { email: String } =>
            "an account already exists for {email}",
    }
}

/// Port for account storage and lookup.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserAccountRepository: Send + Sync {
    /// Fetch an account by normalised email.
    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserAccount>, UserAccountRepositoryError>;

    /// Persist a new account.
    ///
    /// Adapters report unique-email violations as
    /// [`UserAccountRepositoryError::DuplicateEmail`].
    async fn insert(&self, account: &UserAccount) -> Result<(), UserAccountRepositoryError>;
}
