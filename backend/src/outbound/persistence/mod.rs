//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repositories translate between Diesel row structs and domain records and
//! carry no business rules. Connections come from a `bb8` pool of
//! `diesel-async` connections; schema changes ship as embedded migrations.

mod diesel_category_repository;
mod diesel_comment_repository;
pub(crate) mod diesel_error_mapping;
mod diesel_post_repository;
mod diesel_reply_repository;
mod diesel_user_account_repository;
mod migrations;
mod models;
pub(crate) mod pool;
mod schema;

pub use diesel_category_repository::DieselCategoryRepository;
pub use diesel_comment_repository::DieselCommentRepository;
pub use diesel_post_repository::DieselPostRepository;
pub use diesel_reply_repository::DieselReplyRepository;
pub use diesel_user_account_repository::DieselUserAccountRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
