//! Shared builders for content service, cascade, and listing unit tests.

use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

use super::content::{
    Category, CategoryId, Comment, CommentId, Post, PostId, PostStatus, Reply, ReplyId, UserId,
};
use super::ports::{
    MockCategoryRepository, MockCommentRepository, MockPostRepository, MockReplyRepository,
};
use super::{AuthenticatedUser, ContentStore};

pub(crate) struct FixtureClock(pub(crate) DateTime<Utc>);

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

pub(crate) fn fixture_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 14, 9, 0, 0)
        .single()
        .expect("valid fixture timestamp")
}

pub(crate) fn fixture_clock() -> Arc<dyn Clock> {
    Arc::new(FixtureClock(fixture_now()))
}

pub(crate) fn actor() -> AuthenticatedUser {
    AuthenticatedUser {
        id: UserId::random(),
        email: "ada@example.com".to_owned(),
    }
}

pub(crate) fn post(category_id: Option<CategoryId>) -> Post {
    let created = fixture_now() - chrono::Duration::days(1);
    Post {
        id: PostId::random(),
        title: "Hello".to_owned(),
        description: "First post".to_owned(),
        status: PostStatus::Published,
        is_active: true,
        category_id,
        created_at: created,
        updated_at: created,
        deleted_at: None,
    }
}

pub(crate) fn category(parent_id: Option<CategoryId>) -> Category {
    let created = fixture_now() - chrono::Duration::days(1);
    Category {
        id: CategoryId::random(),
        name: "News".to_owned(),
        parent_id,
        created_at: created,
        updated_at: created,
        deleted_at: None,
    }
}

pub(crate) fn comment(post_id: PostId) -> Comment {
    let created = fixture_now() - chrono::Duration::hours(1);
    Comment {
        id: CommentId::random(),
        post_id,
        text: "Nice".to_owned(),
        created_at: created,
        updated_at: created,
        deleted_at: None,
    }
}

pub(crate) fn reply(comment_id: CommentId) -> Reply {
    let created = fixture_now() - chrono::Duration::minutes(5);
    Reply {
        id: ReplyId::random(),
        comment_id,
        text: "Thanks".to_owned(),
        created_at: created,
        updated_at: created,
        deleted_at: None,
    }
}

/// Mock repositories for each content kind.
#[derive(Default)]
pub(crate) struct MockStore {
    pub(crate) posts: MockPostRepository,
    pub(crate) categories: MockCategoryRepository,
    pub(crate) comments: MockCommentRepository,
    pub(crate) replies: MockReplyRepository,
}

impl MockStore {
    pub(crate) fn into_store(self) -> ContentStore {
        ContentStore::new(
            Arc::new(self.posts),
            Arc::new(self.categories),
            Arc::new(self.comments),
            Arc::new(self.replies),
        )
    }
}
