//! Domain types, rules, and services for the blog backend.
//!
//! The content graph (posts, categories, comments, replies) is kept
//! consistent by the [`HierarchyValidator`], the [`CascadeCoordinator`], and
//! the [`ListingEngine`], all reached through the [`ContentService`] facade.
//! Accounts are handled by the [`AccountService`]. Both services implement
//! driving ports from [`ports`] and consume driven ports implemented by
//! outbound adapters.

pub mod account_service;
pub mod auth;
pub mod cascade;
pub mod content;
pub mod content_service;
pub mod error;
pub mod hierarchy;
pub mod listing;
pub mod ports;
pub mod store;
pub mod trace_id;

#[cfg(test)]
pub(crate) mod test_support;

pub use self::account_service::AccountService;
pub use self::auth::{
    AccessToken, AuthenticatedUser, CredentialValidationError, LoginCredentials,
    SignupCredentials, UserAccount,
};
pub use self::cascade::CascadeCoordinator;
pub use self::content::UserId;
pub use self::content_service::ContentService;
pub use self::error::{Error, ErrorCode};
pub use self::hierarchy::HierarchyValidator;
pub use self::listing::{ListingEngine, PostWithCategory, SearchResults};
pub use self::store::ContentStore;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
