//! Credential adapters: Argon2 password hashing and HS256 bearer tokens.

mod argon2_hasher;
mod jwt_tokens;

pub use argon2_hasher::Argon2CredentialHasher;
pub use jwt_tokens::{DEFAULT_TOKEN_TTL_MINUTES, JwtTokenService};
