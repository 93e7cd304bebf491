//! Blog posts and their publication status.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CategoryId, PostId};

/// Publication status of a post. Transitions are unrestricted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PostStatus {
    /// Not yet visible in published feeds.
    #[default]
    Draft,
    /// Visible in published feeds while the post is active.
    Published,
}

impl PostStatus {
    /// Stored and serialised representation.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Published => "Published",
        }
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when text does not name a [`PostStatus`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown post status: {0}")]
pub struct UnknownPostStatus(pub String);

impl FromStr for PostStatus {
    type Err = UnknownPostStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("draft") {
            Ok(Self::Draft)
        } else if s.eq_ignore_ascii_case("published") {
            Ok(Self::Published)
        } else {
            Err(UnknownPostStatus(s.to_owned()))
        }
    }
}

/// A blog post.
///
/// Posts are soft-deleted: `deleted_at` is stamped and `is_active` cleared in
/// the same write, and the row is retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    /// Stable identifier.
    pub id: PostId,
    /// Headline.
    pub title: String,
    /// Body text.
    pub description: String,
    /// Publication status.
    pub status: PostStatus,
    /// Cleared when the post is soft-deleted.
    pub is_active: bool,
    /// The single category linked to this post, if any.
    pub category_id: Option<CategoryId>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
    /// Soft-deletion timestamp.
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Post {
    /// Whether the post has been soft-deleted.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Whether the post belongs in published feeds.
    pub fn is_listed(&self) -> bool {
        self.status == PostStatus::Published && self.is_active
    }
}

/// Mutable fields accepted when editing a post. Absent fields are left
/// untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostChanges {
    /// Replacement headline.
    pub title: Option<String>,
    /// Replacement body text.
    pub description: Option<String>,
    /// Replacement status.
    pub status: Option<PostStatus>,
}

impl PostChanges {
    /// Whether no field would change.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.status.is_none()
    }

    /// Apply the changes to `post`, stamping `updated_at`.
    pub fn apply_to(&self, post: &mut Post, now: DateTime<Utc>) {
        if let Some(title) = &self.title {
            post.title.clone_from(title);
        }
        if let Some(description) = &self.description {
            post.description.clone_from(description);
        }
        if let Some(status) = self.status {
            post.status = status;
        }
        post.updated_at = now;
    }
}

/// Filter applied to published-feed queries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostFilter {
    title_contains: Option<String>,
}

impl PostFilter {
    /// Match every listed post.
    pub fn listed() -> Self {
        Self::default()
    }

    /// Match listed posts whose title contains `term`, ignoring case.
    ///
    /// Blank terms match everything.
    pub fn title_contains(term: impl Into<String>) -> Self {
        let term = term.into();
        let trimmed = term.trim();
        Self {
            title_contains: (!trimmed.is_empty()).then(|| trimmed.to_owned()),
        }
    }

    /// Case-insensitive title fragment, when one applies.
    pub fn title_term(&self) -> Option<&str> {
        self.title_contains.as_deref()
    }

    /// Evaluate the filter against an in-memory post.
    pub fn matches(&self, post: &Post) -> bool {
        if !post.is_listed() {
            return false;
        }
        match &self.title_contains {
            Some(term) => post.title.to_lowercase().contains(&term.to_lowercase()),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn post() -> Post {
        let now = Utc::now();
        Post {
            id: PostId::random(),
            title: "Rust Ownership Explained".to_owned(),
            description: "Borrowing in practice".to_owned(),
            status: PostStatus::Published,
            is_active: true,
            category_id: None,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    #[rstest]
    #[case("Draft", PostStatus::Draft)]
    #[case("published", PostStatus::Published)]
    #[case("PUBLISHED", PostStatus::Published)]
    fn status_parses_case_insensitively(#[case] raw: &str, #[case] expected: PostStatus) {
        assert_eq!(raw.parse::<PostStatus>(), Ok(expected));
    }

    #[rstest]
    fn unknown_status_is_rejected() {
        assert_eq!(
            "archived".parse::<PostStatus>(),
            Err(UnknownPostStatus("archived".to_owned()))
        );
    }

    #[rstest]
    fn status_defaults_to_draft() {
        assert_eq!(PostStatus::default(), PostStatus::Draft);
    }

    #[rstest]
    fn changes_only_touch_supplied_fields(mut post: Post) {
        let later = post.updated_at + chrono::Duration::minutes(5);
        let changes = PostChanges {
            status: Some(PostStatus::Draft),
            ..PostChanges::default()
        };

        changes.apply_to(&mut post, later);

        assert_eq!(post.title, "Rust Ownership Explained");
        assert_eq!(post.status, PostStatus::Draft);
        assert_eq!(post.updated_at, later);
    }

    #[rstest]
    #[case(PostFilter::listed(), true)]
    #[case(PostFilter::title_contains("ownership"), true)]
    #[case(PostFilter::title_contains("  "), true)]
    #[case(PostFilter::title_contains("lifetimes"), false)]
    fn filter_matches_title_fragment(
        post: Post,
        #[case] filter: PostFilter,
        #[case] expected: bool,
    ) {
        assert_eq!(filter.matches(&post), expected);
    }

    #[rstest]
    fn filter_excludes_inactive_and_draft_posts(mut post: Post) {
        post.is_active = false;
        assert!(!PostFilter::listed().matches(&post));

        post.is_active = true;
        post.status = PostStatus::Draft;
        assert!(!PostFilter::listed().matches(&post));
    }
}
