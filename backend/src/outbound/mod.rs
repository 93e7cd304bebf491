//! Outbound adapters implementing the domain ports.
//!
//! - **memory**: in-process tables used when no database is configured
//! - **persistence**: PostgreSQL repositories using Diesel
//! - **security**: Argon2 password hashing and JWT bearer tokens

pub mod memory;
pub mod persistence;
pub mod security;
