//! Argon2id implementation of the `CredentialHasher` port.

use argon2::password_hash::{self, PasswordHasher, SaltString};
use argon2::{Argon2, PasswordHash, PasswordVerifier};

use crate::domain::ports::{CredentialHasher, CredentialHasherError};

/// Hashes passwords with Argon2id default parameters and a random salt.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2CredentialHasher;

impl CredentialHasher for Argon2CredentialHasher {
    fn hash(&self, password: &str) -> Result<String, CredentialHasherError> {
        let salt = SaltString::generate(rand::thread_rng());
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|err| CredentialHasherError::hash(err.to_string()))
    }

    fn verify(&self, password: &str, stored_hash: &str) -> Result<bool, CredentialHasherError> {
        let parsed = PasswordHash::new(stored_hash)
            .map_err(|err| CredentialHasherError::malformed_hash(err.to_string()))?;
        match Argon2::default().verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(password_hash::Error::Password) => Ok(false),
            Err(err) => Err(CredentialHasherError::hash(err.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashes_verify_against_the_original_password() {
        let hasher = Argon2CredentialHasher;
        let hash = hasher.hash("Secret1!").expect("hash");

        assert!(hash.starts_with("$argon2id$"));
        assert!(hasher.verify("Secret1!", &hash).expect("verify"));
        assert!(!hasher.verify("Secret2!", &hash).expect("verify"));
    }

    #[test]
    fn hashes_are_salted() {
        let hasher = Argon2CredentialHasher;
        let first = hasher.hash("Secret1!").expect("hash");
        let second = hasher.hash("Secret1!").expect("hash");
        assert_ne!(first, second);
    }

    #[test]
    fn malformed_hashes_are_reported() {
        let err = Argon2CredentialHasher
            .verify("Secret1!", "plaintext")
            .expect_err("not a PHC string");
        assert!(matches!(err, CredentialHasherError::MalformedHash { .. }));
    }
}
