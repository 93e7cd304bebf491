//! Response DTOs for posts, categories, comments, and replies.

use pagination::Page;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::content::{Category, CategorySummary, Comment, DeletionReceipt, Post, Reply};
use crate::domain::{PostWithCategory, SearchResults};

/// Response payload for a post.
#[derive(Debug, Serialize, ToSchema)]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    #[schema(example = "Draft")]
    pub status: String,
    pub is_active: bool,
    pub category_id: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    pub deleted_at: Option<String>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.to_string(),
            title: post.title,
            description: post.description,
            status: post.status.as_str().to_owned(),
            is_active: post.is_active,
            category_id: post.category_id.map(|id| id.to_string()),
            created_at: post.created_at.to_rfc3339(),
            updated_at: post.updated_at.to_rfc3339(),
            deleted_at: post.deleted_at.map(|at| at.to_rfc3339()),
        }
    }
}

/// Category fields joined onto a post; both are null when no category
/// resolves.
#[derive(Debug, Serialize, ToSchema)]
pub struct CategorySummaryResponse {
    pub id: Option<String>,
    pub name: Option<String>,
}

impl From<CategorySummary> for CategorySummaryResponse {
    fn from(summary: CategorySummary) -> Self {
        Self {
            id: summary.id.map(|id| id.to_string()),
            name: summary.name,
        }
    }
}

/// A post with its category resolved.
#[derive(Debug, Serialize, ToSchema)]
pub struct PostWithCategoryResponse {
    #[serde(flatten)]
    pub post: PostResponse,
    pub category: CategorySummaryResponse,
}

impl From<PostWithCategory> for PostWithCategoryResponse {
    fn from(joined: PostWithCategory) -> Self {
        Self {
            post: joined.post.into(),
            category: joined.category.into(),
        }
    }
}

/// Response payload for unpaged search results.
#[derive(Debug, Serialize, ToSchema)]
pub struct SearchResponse {
    pub data: Vec<PostResponse>,
    pub total: u64,
}

impl From<SearchResults> for SearchResponse {
    fn from(results: SearchResults) -> Self {
        Self {
            data: results.data.into_iter().map(PostResponse::from).collect(),
            total: results.total,
        }
    }
}

/// Page envelope with the effective (clamped) limit.
#[derive(Debug, Serialize, ToSchema)]
pub struct PageResponse<T: ToSchema> {
    pub data: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
}

impl<D, T> From<Page<D>> for PageResponse<T>
where
    T: ToSchema + From<D>,
{
    fn from(page: Page<D>) -> Self {
        let Page {
            data,
            total,
            page,
            limit,
        } = page;
        Self {
            data: data.into_iter().map(T::from).collect(),
            total,
            page,
            limit,
        }
    }
}

/// Response payload for a category.
#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryResponse {
    pub id: String,
    pub name: String,
    pub parent_id: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id.to_string(),
            name: category.name,
            parent_id: category.parent_id.map(|id| id.to_string()),
            created_at: category.created_at.to_rfc3339(),
            updated_at: category.updated_at.to_rfc3339(),
        }
    }
}

/// Response payload for a comment.
#[derive(Debug, Serialize, ToSchema)]
pub struct CommentResponse {
    pub id: String,
    pub post_id: String,
    pub comment: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.to_string(),
            post_id: comment.post_id.to_string(),
            comment: comment.text,
            created_at: comment.created_at.to_rfc3339(),
            updated_at: comment.updated_at.to_rfc3339(),
        }
    }
}

/// Response payload for a reply.
#[derive(Debug, Serialize, ToSchema)]
pub struct ReplyResponse {
    pub id: String,
    pub comment_id: String,
    pub reply: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Reply> for ReplyResponse {
    fn from(reply: Reply) -> Self {
        Self {
            id: reply.id.to_string(),
            comment_id: reply.comment_id.to_string(),
            reply: reply.text,
            created_at: reply.created_at.to_rfc3339(),
            updated_at: reply.updated_at.to_rfc3339(),
        }
    }
}

/// Acknowledgement for a deletion.
#[derive(Debug, Serialize, ToSchema)]
pub struct DeletionResponse {
    pub id: String,
    #[schema(example = "post has been deleted!")]
    pub message: String,
}

impl From<DeletionReceipt> for DeletionResponse {
    fn from(receipt: DeletionReceipt) -> Self {
        Self {
            id: receipt.id.to_string(),
            message: receipt.message(),
        }
    }
}

/// Request payload for adding or editing a comment.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CommentBody {
    #[serde(alias = "text")]
    pub comment: Option<String>,
}

/// Request payload for adding or editing a reply.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ReplyBody {
    #[serde(alias = "text")]
    pub reply: Option<String>,
}
