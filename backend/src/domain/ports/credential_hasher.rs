//! Port for one-way password hashing.

use super::define_port_error;

define_port_error! {
    /// Errors raised by credential hashing adapters.
    pub enum CredentialHasherError {
        /// Hashing the password failed.
        Hash { message: String } => "password hashing failed: {message}",
        /// The stored hash could not be parsed.
        MalformedHash { message: String } => "stored password hash is malformed: {message}",
    }
}

/// Hashes passwords for storage and checks candidates against stored hashes.
#[cfg_attr(test, mockall::automock)]
pub trait CredentialHasher: Send + Sync {
    /// Produce a salted hash suitable for storage.
    fn hash(&self, password: &str) -> Result<String, CredentialHasherError>;

    /// Check `password` against `stored_hash`.
    ///
    /// Returns `Ok(false)` for a well-formed hash that does not match.
    fn verify(&self, password: &str, stored_hash: &str) -> Result<bool, CredentialHasherError>;
}
