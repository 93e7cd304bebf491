//! Domain ports for the hexagonal boundary.
//!
//! Driven ports (`*Repository`, [`CredentialHasher`], [`TokenService`]) are
//! implemented by outbound adapters. Driving ports (`*Command`, `*Query`,
//! [`UserAccounts`]) are implemented by domain services and consumed by
//! inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod categories_command;
mod categories_query;
mod category_repository;
mod comment_repository;
mod comments_command;
mod comments_query;
mod credential_hasher;
mod post_repository;
mod posts_command;
mod posts_query;
mod reply_repository;
mod token_service;
mod user_account_repository;
mod user_accounts;

#[cfg(test)]
pub use categories_command::MockCategoriesCommand;
pub use categories_command::{
    CategoriesCommand, CreateCategoryRequest, DeleteCategoryRequest, RenameCategoryRequest,
};
#[cfg(test)]
pub use categories_query::MockCategoriesQuery;
pub use categories_query::CategoriesQuery;
#[cfg(test)]
pub use category_repository::MockCategoryRepository;
pub use category_repository::{CategoryRepository, CategoryRepositoryError};
#[cfg(test)]
pub use comment_repository::MockCommentRepository;
pub use comment_repository::{CommentRepository, CommentRepositoryError};
#[cfg(test)]
pub use comments_command::MockCommentsCommand;
pub use comments_command::{
    AddCommentRequest, AddReplyRequest, CommentsCommand, DeleteCommentRequest, DeleteReplyRequest,
    EditCommentRequest, EditReplyRequest,
};
#[cfg(test)]
pub use comments_query::MockCommentsQuery;
pub use comments_query::CommentsQuery;
#[cfg(test)]
pub use credential_hasher::MockCredentialHasher;
pub use credential_hasher::{CredentialHasher, CredentialHasherError};
#[cfg(test)]
pub use post_repository::MockPostRepository;
pub use post_repository::{PostRepository, PostRepositoryError};
#[cfg(test)]
pub use posts_command::MockPostsCommand;
pub use posts_command::{CreatePostRequest, DeletePostRequest, PostsCommand, UpdatePostRequest};
#[cfg(test)]
pub use posts_query::MockPostsQuery;
pub use posts_query::PostsQuery;
#[cfg(test)]
pub use reply_repository::MockReplyRepository;
pub use reply_repository::{ReplyRepository, ReplyRepositoryError};
#[cfg(test)]
pub use token_service::MockTokenService;
pub use token_service::{TokenService, TokenServiceError};
#[cfg(test)]
pub use user_account_repository::MockUserAccountRepository;
pub use user_account_repository::{UserAccountRepository, UserAccountRepositoryError};
#[cfg(test)]
pub use user_accounts::MockUserAccounts;
pub use user_accounts::UserAccounts;
