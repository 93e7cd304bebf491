//! Server settings loaded via OrthoConfig.

use std::net::{AddrParseError, SocketAddr};

use ortho_config::OrthoConfig;
use rand::RngCore;
use serde::Deserialize;
use tracing::warn;
use zeroize::Zeroizing;

use blog_backend::outbound::security::DEFAULT_TOKEN_TTL_MINUTES;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_POOL_SIZE: u32 = 10;
const EPHEMERAL_SECRET_LEN: usize = 32;

/// Configuration values controlling the HTTP server and its adapters.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "BLOG")]
pub struct BlogSettings {
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// PostgreSQL URL; the in-memory store is used when absent.
    pub database_url: Option<String>,
    /// Maximum pooled database connections.
    pub database_pool_size: Option<u32>,
    /// HS256 signing secret for access tokens.
    pub jwt_secret: Option<String>,
    /// Access token lifetime in minutes.
    pub token_ttl_minutes: Option<i64>,
    /// Permit a generated signing secret outside debug builds.
    #[ortho_config(default = false)]
    pub allow_ephemeral_secret: bool,
    /// Apply embedded migrations before serving.
    #[ortho_config(default = false)]
    pub run_migrations: bool,
}

impl BlogSettings {
    /// Parsed listen address, falling back to `0.0.0.0:8080`.
    pub fn bind_addr(&self) -> Result<SocketAddr, AddrParseError> {
        self.bind_addr
            .as_deref()
            .unwrap_or(DEFAULT_BIND_ADDR)
            .parse()
    }

    pub fn database_pool_size(&self) -> u32 {
        self.database_pool_size.unwrap_or(DEFAULT_POOL_SIZE)
    }

    pub fn token_ttl(&self) -> chrono::Duration {
        chrono::Duration::minutes(
            self.token_ttl_minutes
                .filter(|minutes| *minutes > 0)
                .unwrap_or(DEFAULT_TOKEN_TTL_MINUTES),
        )
    }

    /// Resolve the token signing secret.
    ///
    /// A random secret is generated in debug builds or when
    /// `allow_ephemeral_secret` is set; tokens then die with the process.
    ///
    /// # Errors
    /// Returns an error when no secret is configured and generation is not
    /// permitted.
    pub fn signing_secret(&self) -> std::io::Result<Zeroizing<Vec<u8>>> {
        if let Some(secret) = self.jwt_secret.as_deref().filter(|s| !s.is_empty()) {
            return Ok(Zeroizing::new(secret.as_bytes().to_vec()));
        }
        if cfg!(debug_assertions) || self.allow_ephemeral_secret {
            warn!("using temporary token signing secret (dev only)");
            let mut secret = Zeroizing::new(vec![0_u8; EPHEMERAL_SECRET_LEN]);
            rand::thread_rng().fill_bytes(secret.as_mut_slice());
            return Ok(secret);
        }
        Err(std::io::Error::other(
            "BLOG_JWT_SECRET is required; set BLOG_ALLOW_EPHEMERAL_SECRET=true for development",
        ))
    }
}
