//! Internal Diesel row structs for database operations.
//!
//! These types never leave the persistence layer. Conversions into domain
//! records live beside each row type.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use tracing::warn;
use uuid::Uuid;

use crate::domain::UserAccount;
use crate::domain::content::{
    Category, CategoryId, Comment, CommentId, Post, PostId, PostStatus, Reply, ReplyId,
};
use crate::domain::UserId;

use super::schema::{categories, comments, posts, replies, users};

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: Uuid,
    pub email: String,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UserRow> for UserAccount {
    fn from(row: UserRow) -> Self {
        Self {
            id: UserId::from_uuid(row.id),
            email: row.email,
            username: row.username,
            password_hash: row.password_hash,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Insertable struct for creating new accounts.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub id: Uuid,
    pub email: &'a str,
    pub username: &'a str,
    pub password_hash: &'a str,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl<'a> From<&'a UserAccount> for NewUserRow<'a> {
    fn from(account: &'a UserAccount) -> Self {
        Self {
            id: *account.id.as_uuid(),
            email: &account.email,
            username: &account.username,
            password_hash: &account.password_hash,
            created_at: account.created_at,
            updated_at: account.updated_at,
        }
    }
}

/// Row struct for reading from the posts table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = posts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct PostRow {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub status: String,
    pub is_active: bool,
    pub category_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<PostRow> for Post {
    fn from(row: PostRow) -> Self {
        let status = row.status.parse().unwrap_or_else(|_| {
            warn!(
                value = %row.status,
                post_id = %row.id,
                "unrecognised post status, defaulting to Draft"
            );
            PostStatus::Draft
        });
        Self {
            id: PostId::from_uuid(row.id),
            title: row.title,
            description: row.description,
            status,
            is_active: row.is_active,
            category_id: row.category_id.map(CategoryId::from_uuid),
            created_at: row.created_at,
            updated_at: row.updated_at,
            deleted_at: row.deleted_at,
        }
    }
}

/// Insertable struct for creating posts.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = posts)]
pub(crate) struct NewPostRow<'a> {
    pub id: Uuid,
    pub title: &'a str,
    pub description: &'a str,
    pub status: &'a str,
    pub is_active: bool,
    pub category_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl<'a> From<&'a Post> for NewPostRow<'a> {
    fn from(post: &'a Post) -> Self {
        Self {
            id: *post.id.as_uuid(),
            title: &post.title,
            description: &post.description,
            status: post.status.as_str(),
            is_active: post.is_active,
            category_id: post.category_id.map(Uuid::from),
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

/// Changeset for the mutable post content columns.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = posts)]
pub(crate) struct PostContentUpdate<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub status: &'a str,
    pub updated_at: DateTime<Utc>,
}

impl<'a> From<&'a Post> for PostContentUpdate<'a> {
    fn from(post: &'a Post) -> Self {
        Self {
            title: &post.title,
            description: &post.description,
            status: post.status.as_str(),
            updated_at: post.updated_at,
        }
    }
}

/// Row struct for reading from the categories table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = categories)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CategoryRow {
    pub id: Uuid,
    pub name: String,
    pub parent_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Self {
            id: CategoryId::from_uuid(row.id),
            name: row.name,
            parent_id: row.parent_id.map(CategoryId::from_uuid),
            created_at: row.created_at,
            updated_at: row.updated_at,
            deleted_at: row.deleted_at,
        }
    }
}

/// Insertable struct for creating categories.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = categories)]
pub(crate) struct NewCategoryRow<'a> {
    pub id: Uuid,
    pub name: &'a str,
    pub parent_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl<'a> From<&'a Category> for NewCategoryRow<'a> {
    fn from(category: &'a Category) -> Self {
        Self {
            id: *category.id.as_uuid(),
            name: &category.name,
            parent_id: category.parent_id.map(Uuid::from),
            created_at: category.created_at,
            updated_at: category.updated_at,
        }
    }
}

/// Row struct for reading from the comments table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = comments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CommentRow {
    pub id: Uuid,
    pub post_id: Uuid,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<CommentRow> for Comment {
    fn from(row: CommentRow) -> Self {
        Self {
            id: CommentId::from_uuid(row.id),
            post_id: PostId::from_uuid(row.post_id),
            text: row.text,
            created_at: row.created_at,
            updated_at: row.updated_at,
            deleted_at: row.deleted_at,
        }
    }
}

/// Insertable struct for creating comments.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = comments)]
pub(crate) struct NewCommentRow<'a> {
    pub id: Uuid,
    pub post_id: Uuid,
    pub text: &'a str,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl<'a> From<&'a Comment> for NewCommentRow<'a> {
    fn from(comment: &'a Comment) -> Self {
        Self {
            id: *comment.id.as_uuid(),
            post_id: *comment.post_id.as_uuid(),
            text: &comment.text,
            created_at: comment.created_at,
            updated_at: comment.updated_at,
        }
    }
}

/// Row struct for reading from the replies table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = replies)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ReplyRow {
    pub id: Uuid,
    pub comment_id: Uuid,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<ReplyRow> for Reply {
    fn from(row: ReplyRow) -> Self {
        Self {
            id: ReplyId::from_uuid(row.id),
            comment_id: CommentId::from_uuid(row.comment_id),
            text: row.text,
            created_at: row.created_at,
            updated_at: row.updated_at,
            deleted_at: row.deleted_at,
        }
    }
}

/// Insertable struct for creating replies.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = replies)]
pub(crate) struct NewReplyRow<'a> {
    pub id: Uuid,
    pub comment_id: Uuid,
    pub text: &'a str,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl<'a> From<&'a Reply> for NewReplyRow<'a> {
    fn from(reply: &'a Reply) -> Self {
        Self {
            id: *reply.id.as_uuid(),
            comment_id: *reply.comment_id.as_uuid(),
            text: &reply.text,
            created_at: reply.created_at,
            updated_at: reply.updated_at,
        }
    }
}
