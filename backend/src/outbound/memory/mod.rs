//! In-process adapters for every storage port.
//!
//! [`MemoryStore`] keeps all records behind one lock so that multi-table
//! effects, such as clearing post links when a category row disappears,
//! land atomically. The server falls back to it when no database is
//! configured, and the integration tests drive the HTTP surface through it.

mod accounts;
mod content;

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::ContentStore;
use crate::domain::content::{Category, Comment, Post, Reply};
use crate::domain::UserAccount;

#[derive(Debug, Default)]
struct Tables {
    posts: Vec<Post>,
    categories: Vec<Category>,
    comments: Vec<Comment>,
    replies: Vec<Reply>,
    accounts: Vec<UserAccount>,
}

/// Shared in-memory tables implementing the repository ports.
///
/// # Examples
/// ```
/// use blog_backend::outbound::memory::MemoryStore;
///
/// let store = MemoryStore::shared();
/// let _content = store.content_store();
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    /// Create an empty store behind an [`Arc`].
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Hand out the store as a [`ContentStore`].
    pub fn content_store(self: &Arc<Self>) -> ContentStore {
        ContentStore::new(
            Arc::clone(self) as _,
            Arc::clone(self) as _,
            Arc::clone(self) as _,
            Arc::clone(self) as _,
        )
    }
}
