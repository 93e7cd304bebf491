//! Content records: posts, categories, comments, and replies.

mod category;
mod discussion;
mod ids;
mod policy;
mod post;

pub use category::{Category, CategorySummary};
pub use discussion::{Comment, Reply};
pub use ids::{CategoryId, CommentId, PostId, ReplyId, UserId};
pub use policy::{DeletionPolicy, DeletionReceipt, EntityKind};
pub use post::{Post, PostChanges, PostFilter, PostStatus, UnknownPostStatus};

use serde_json::json;

use super::Error;

/// Reject blank text, returning the value untouched otherwise.
///
/// # Errors
/// Returns [`Error::invalid_request`] naming `field` when `value` is empty
/// once trimmed.
pub fn require_text(value: String, field: &'static str) -> Result<String, Error> {
    if value.trim().is_empty() {
        return Err(Error::invalid_request(format!("{field} must not be empty"))
            .with_details(json!({ "field": field, "code": "empty" })));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn blank_text_is_rejected(#[case] value: &str) {
        let err = require_text(value.to_owned(), "title").expect_err("blank text");
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        assert_eq!(err.message(), "title must not be empty");
    }

    #[rstest]
    fn text_is_returned_untouched() {
        let value = require_text(" Hello ".to_owned(), "comment").expect("valid text");
        assert_eq!(value, " Hello ");
    }
}
