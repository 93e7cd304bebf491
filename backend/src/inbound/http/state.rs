//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    CategoriesCommand, CategoriesQuery, CommentsCommand, CommentsQuery, PostsCommand, PostsQuery,
    TokenService, UserAccounts,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub posts: Arc<dyn PostsCommand>,
    pub posts_query: Arc<dyn PostsQuery>,
    pub categories: Arc<dyn CategoriesCommand>,
    pub categories_query: Arc<dyn CategoriesQuery>,
    pub comments: Arc<dyn CommentsCommand>,
    pub comments_query: Arc<dyn CommentsQuery>,
    pub accounts: Arc<dyn UserAccounts>,
    /// Verifies bearer credentials on `/blogs` routes.
    pub tokens: Arc<dyn TokenService>,
}

impl HttpState {
    /// Wire every content port to a single facade implementing all of them.
    pub fn new<C>(
        content: Arc<C>,
        accounts: Arc<dyn UserAccounts>,
        tokens: Arc<dyn TokenService>,
    ) -> Self
    where
        C: PostsCommand
            + PostsQuery
            + CategoriesCommand
            + CategoriesQuery
            + CommentsCommand
            + CommentsQuery
            + 'static,
    {
        Self {
            posts: content.clone(),
            posts_query: content.clone(),
            categories: content.clone(),
            categories_query: content.clone(),
            comments: content.clone(),
            comments_query: content,
            accounts,
            tokens,
        }
    }
}
