//! Port for issuing and verifying bearer credentials.

use crate::domain::{AccessToken, AuthenticatedUser, UserAccount};

use super::define_port_error;

define_port_error! {
    /// Errors raised by token adapters.
    pub enum TokenServiceError {
        /// The token has passed its expiry time.
        Expired => "token has expired",
        /// The token is malformed or its signature does not verify.
        Invalid { message: String } => "token is invalid: {message}",
        /// Signing a new token failed.
        Signing { message: String } => "token signing failed: {message}",
    }
}

/// Issues signed bearer tokens and recovers identities from them.
#[cfg_attr(test, mockall::automock)]
pub trait TokenService: Send + Sync {
    /// Issue a token identifying `account`.
    fn issue(&self, account: &UserAccount) -> Result<AccessToken, TokenServiceError>;

    /// Verify `token` and return the identity it carries.
    fn verify(&self, token: &str) -> Result<AuthenticatedUser, TokenServiceError>;
}
