//! HS256 JSON Web Token implementation of the `TokenService` port.
//!
//! Tokens carry `sub` (user id), `email`, `iat`, and `exp`. Expiry is
//! checked against wall-clock time on verification.

use std::fmt;
use std::sync::Arc;

use chrono::Duration;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::ports::{TokenService, TokenServiceError};
use crate::domain::{AccessToken, AuthenticatedUser, UserAccount, UserId};

/// Session length applied when no override is configured.
pub const DEFAULT_TOKEN_TTL_MINUTES: i64 = 30;

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    email: String,
    iat: i64,
    exp: i64,
}

/// Signs and verifies bearer tokens with a shared secret.
#[derive(Clone)]
pub struct JwtTokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl JwtTokenService {
    /// Build a service signing with `secret`; tokens expire after `ttl`.
    pub fn new(secret: &[u8], ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            ttl,
            clock,
        }
    }
}

impl fmt::Debug for JwtTokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtTokenService")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

impl TokenService for JwtTokenService {
    fn issue(&self, account: &UserAccount) -> Result<AccessToken, TokenServiceError> {
        let issued_at = self.clock.utc();
        let claims = Claims {
            sub: account.id.to_string(),
            email: account.email.clone(),
            iat: issued_at.timestamp(),
            exp: (issued_at + self.ttl).timestamp(),
        };
        encode(&Header::default(), &claims, &self.encoding)
            .map(AccessToken::new)
            .map_err(|err| TokenServiceError::signing(err.to_string()))
    }

    fn verify(&self, token: &str) -> Result<AuthenticatedUser, TokenServiceError> {
        let data = decode::<Claims>(token, &self.decoding, &Validation::default()).map_err(
            |err| match err.kind() {
                ErrorKind::ExpiredSignature => TokenServiceError::expired(),
                _ => TokenServiceError::invalid(err.to_string()),
            },
        )?;
        let id = Uuid::parse_str(&data.claims.sub)
            .map_err(|err| TokenServiceError::invalid(format!("bad subject: {err}")))?;
        Ok(AuthenticatedUser {
            id: UserId::from_uuid(id),
            email: data.claims.email,
        })
    }
}
