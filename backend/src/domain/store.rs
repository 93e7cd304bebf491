//! The content store: the four repository ports the content services share,
//! and the mapping from their errors to domain errors.

use std::sync::Arc;

use tracing::debug;

use super::Error;
use super::ports::{
    CategoryRepository, CategoryRepositoryError, CommentRepository, CommentRepositoryError,
    PostRepository, PostRepositoryError, ReplyRepository, ReplyRepositoryError,
};

/// Repository handles for every content record kind.
///
/// Cloning is cheap; each handle is reference counted.
#[derive(Clone)]
pub struct ContentStore {
    /// Post storage (soft delete).
    pub posts: Arc<dyn PostRepository>,
    /// Category storage (hard delete).
    pub categories: Arc<dyn CategoryRepository>,
    /// Comment storage (hard delete).
    pub comments: Arc<dyn CommentRepository>,
    /// Reply storage (hard delete).
    pub replies: Arc<dyn ReplyRepository>,
}

impl ContentStore {
    /// Bundle the repositories.
    pub fn new(
        posts: Arc<dyn PostRepository>,
        categories: Arc<dyn CategoryRepository>,
        comments: Arc<dyn CommentRepository>,
        replies: Arc<dyn ReplyRepository>,
    ) -> Self {
        Self {
            posts,
            categories,
            comments,
            replies,
        }
    }
}

macro_rules! storage_error_mapper {
    ($name:ident, $error:ident) => {
        pub(crate) fn $name(error: $error) -> Error {
            debug!(%error, "content store call failed");
            match error {
                $error::Connection { message } => {
                    Error::internal(format!("storage unavailable: {message}"))
                }
                $error::Query { message } => Error::internal(format!("storage error: {message}")),
            }
        }
    };
}

storage_error_mapper!(map_post_error, PostRepositoryError);
storage_error_mapper!(map_category_error, CategoryRepositoryError);
storage_error_mapper!(map_comment_error, CommentRepositoryError);
storage_error_mapper!(map_reply_error, ReplyRepositoryError);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    #[rstest]
    #[case(PostRepositoryError::connection("refused"), "storage unavailable: refused")]
    #[case(PostRepositoryError::query("syntax"), "storage error: syntax")]
    fn storage_errors_become_internal(#[case] error: PostRepositoryError, #[case] message: &str) {
        let mapped = map_post_error(error);
        assert_eq!(mapped.code(), ErrorCode::InternalError);
        assert_eq!(mapped.message(), message);
    }

    #[rstest]
    fn reply_errors_keep_cause() {
        let mapped = map_reply_error(ReplyRepositoryError::query("deadlock detected"));
        assert!(mapped.message().contains("deadlock detected"));
    }
}
