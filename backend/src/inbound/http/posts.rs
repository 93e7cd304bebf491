//! Posts API handlers.
//!
//! ```text
//! POST   /blogs/posts {"title":"T","description":"D","status":"Published"}
//! GET    /blogs/posts/search?q=rust
//! GET    /blogs/posts/by-categories?page=1&limit=5
//! GET    /blogs/posts?page=1&limit=5
//! GET    /blogs/posts/{id}
//! PUT    /blogs/posts/{id} {"title":"New"}
//! DELETE /blogs/posts/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::content::{PostChanges, PostFilter, PostId};
use crate::domain::ports::{CreatePostRequest, DeletePostRequest, UpdatePostRequest};
use crate::inbound::http::ApiResult;
use crate::inbound::http::auth::Bearer;
use crate::inbound::http::content_dto::{
    DeletionResponse, PageResponse, PostResponse, PostWithCategoryResponse, SearchResponse,
};
use crate::inbound::http::error::ErrorEnvelope;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, PageQuery, parse_id, parse_status, require_field,
};

const POST_ID: FieldName = FieldName::new("id");

/// Request payload for `POST /blogs/posts`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreatePostBody {
    pub title: Option<String>,
    pub description: Option<String>,
    /// `Draft` or `Published`; defaults to `Draft`.
    pub status: Option<String>,
}

/// Request payload for `PUT /blogs/posts/{id}`. Absent fields are left
/// unchanged.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct UpdatePostBody {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
}

/// Query string for `GET /blogs/posts/search`.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Case-insensitive title fragment; blank matches every post.
    pub q: Option<String>,
}

/// Create a post.
#[utoipa::path(
    post,
    path = "/blogs/posts",
    request_body = CreatePostBody,
    responses(
        (status = 201, description = "Post created", body = PostResponse),
        (status = 400, description = "Invalid request", body = ErrorEnvelope),
        (status = 401, description = "Unauthorised", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tags = ["posts"],
    operation_id = "createPost"
)]
#[post("/posts")]
pub async fn create_post(
    state: web::Data<HttpState>,
    Bearer(actor): Bearer,
    payload: web::Json<CreatePostBody>,
) -> ApiResult<HttpResponse> {
    let body = payload.into_inner();
    let request = CreatePostRequest {
        actor,
        title: require_field(body.title, FieldName::new("title"))?,
        description: require_field(body.description, FieldName::new("description"))?,
        status: parse_status(body.status.as_deref())?,
    };
    let post = state.posts.create_post(request).await?;
    Ok(HttpResponse::Created().json(PostResponse::from(post)))
}

/// Search published posts by title.
#[utoipa::path(
    get,
    path = "/blogs/posts/search",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching posts, newest first", body = SearchResponse),
        (status = 401, description = "Unauthorised", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tags = ["posts"],
    operation_id = "searchPosts"
)]
#[get("/posts/search")]
pub async fn search_posts(
    state: web::Data<HttpState>,
    _auth: Bearer,
    query: web::Query<SearchQuery>,
) -> ApiResult<web::Json<SearchResponse>> {
    let filter = PostFilter::title_contains(query.into_inner().q.unwrap_or_default());
    let results = state.posts_query.search_posts(filter).await?;
    Ok(web::Json(results.into()))
}

/// Page through published posts with their categories joined.
#[utoipa::path(
    get,
    path = "/blogs/posts/by-categories",
    params(PageQuery),
    responses(
        (status = 200, description = "Joined page", body = PageResponse<PostWithCategoryResponse>),
        (status = 400, description = "Invalid page", body = ErrorEnvelope),
        (status = 401, description = "Unauthorised", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tags = ["posts"],
    operation_id = "listPostsByCategories"
)]
#[get("/posts/by-categories")]
pub async fn list_posts_by_categories(
    state: web::Data<HttpState>,
    _auth: Bearer,
    query: web::Query<PageQuery>,
) -> ApiResult<web::Json<PageResponse<PostWithCategoryResponse>>> {
    let request = query.to_request()?;
    let page = state.posts_query.list_posts_with_categories(request).await?;
    Ok(web::Json(page.into()))
}

/// Page through published posts, newest first.
#[utoipa::path(
    get,
    path = "/blogs/posts",
    params(PageQuery),
    responses(
        (status = 200, description = "Published feed", body = PageResponse<PostResponse>),
        (status = 400, description = "Invalid page", body = ErrorEnvelope),
        (status = 401, description = "Unauthorised", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tags = ["posts"],
    operation_id = "listPosts"
)]
#[get("/posts")]
pub async fn list_posts(
    state: web::Data<HttpState>,
    _auth: Bearer,
    query: web::Query<PageQuery>,
) -> ApiResult<web::Json<PageResponse<PostResponse>>> {
    let request = query.to_request()?;
    let page = state.posts_query.list_posts(request).await?;
    Ok(web::Json(page.into()))
}

/// Fetch a post, including soft-deleted ones.
#[utoipa::path(
    get,
    path = "/blogs/posts/{id}",
    params(("id" = String, Path, description = "Post identifier")),
    responses(
        (status = 200, description = "Post", body = PostResponse),
        (status = 400, description = "Invalid id", body = ErrorEnvelope),
        (status = 401, description = "Unauthorised", body = ErrorEnvelope),
        (status = 404, description = "Not found", body = ErrorEnvelope)
    ),
    tags = ["posts"],
    operation_id = "getPost"
)]
#[get("/posts/{id}")]
pub async fn get_post(
    state: web::Data<HttpState>,
    _auth: Bearer,
    path: web::Path<String>,
) -> ApiResult<web::Json<PostResponse>> {
    let post_id: PostId = parse_id(&path, POST_ID)?;
    let post = state.posts_query.get_post(&post_id).await?;
    Ok(web::Json(post.into()))
}

/// Update the supplied fields of a post.
#[utoipa::path(
    put,
    path = "/blogs/posts/{id}",
    params(("id" = String, Path, description = "Post identifier")),
    request_body = UpdatePostBody,
    responses(
        (status = 200, description = "Updated post", body = PostResponse),
        (status = 400, description = "Invalid request", body = ErrorEnvelope),
        (status = 401, description = "Unauthorised", body = ErrorEnvelope),
        (status = 404, description = "Not found", body = ErrorEnvelope)
    ),
    tags = ["posts"],
    operation_id = "updatePost"
)]
#[put("/posts/{id}")]
pub async fn update_post(
    state: web::Data<HttpState>,
    Bearer(actor): Bearer,
    path: web::Path<String>,
    payload: web::Json<UpdatePostBody>,
) -> ApiResult<web::Json<PostResponse>> {
    let post_id: PostId = parse_id(&path, POST_ID)?;
    let body = payload.into_inner();
    let changes = PostChanges {
        status: parse_status(body.status.as_deref())?,
        title: body.title,
        description: body.description,
    };
    let post = state
        .posts
        .update_post(UpdatePostRequest {
            actor,
            post_id,
            changes,
        })
        .await?;
    Ok(web::Json(post.into()))
}

/// Soft-delete a post and cascade to its comments, replies, and category.
#[utoipa::path(
    delete,
    path = "/blogs/posts/{id}",
    params(("id" = String, Path, description = "Post identifier")),
    responses(
        (status = 200, description = "Post deleted", body = DeletionResponse),
        (status = 400, description = "Invalid id", body = ErrorEnvelope),
        (status = 401, description = "Unauthorised", body = ErrorEnvelope),
        (status = 404, description = "Not found", body = ErrorEnvelope)
    ),
    tags = ["posts"],
    operation_id = "deletePost"
)]
#[delete("/posts/{id}")]
pub async fn delete_post(
    state: web::Data<HttpState>,
    Bearer(actor): Bearer,
    path: web::Path<String>,
) -> ApiResult<web::Json<DeletionResponse>> {
    let post_id: PostId = parse_id(&path, POST_ID)?;
    let receipt = state
        .posts
        .delete_post(DeletePostRequest { actor, post_id })
        .await?;
    Ok(web::Json(receipt.into()))
}

#[cfg(test)]
#[path = "posts_tests.rs"]
mod tests;
