//! Comments and replies API handlers.
//!
//! ```text
//! POST   /blogs/comments/{postId} {"comment":"Nice"}
//! GET    /blogs/comments?page=1&limit=15
//! GET    /blogs/comments/{id}
//! PUT    /blogs/comments/{id} {"comment":"Edited"}
//! DELETE /blogs/comments/{id}
//! POST   /blogs/comments/replies/{commentId} {"reply":"Thanks"}
//! GET    /blogs/comments/replies/{id}
//! PUT    /blogs/comments/replies/{id} {"reply":"Edited"}
//! DELETE /blogs/comments/replies/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::domain::content::{CommentId, PostId, ReplyId};
use crate::domain::ports::{
    AddCommentRequest, AddReplyRequest, DeleteCommentRequest, DeleteReplyRequest,
    EditCommentRequest, EditReplyRequest,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::auth::Bearer;
use crate::inbound::http::content_dto::{
    CommentBody, CommentResponse, DeletionResponse, PageResponse, ReplyBody, ReplyResponse,
};
use crate::inbound::http::error::ErrorEnvelope;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, PageQuery, parse_id, require_field};

const ID: FieldName = FieldName::new("id");
const COMMENT: FieldName = FieldName::new("comment");
const REPLY: FieldName = FieldName::new("reply");

/// Add a reply to a comment.
#[utoipa::path(
    post,
    path = "/blogs/comments/replies/{commentId}",
    params(("commentId" = String, Path, description = "Comment to reply to")),
    request_body = ReplyBody,
    responses(
        (status = 201, description = "Reply added", body = ReplyResponse),
        (status = 400, description = "Invalid request", body = ErrorEnvelope),
        (status = 401, description = "Unauthorised", body = ErrorEnvelope),
        (status = 404, description = "Comment not found", body = ErrorEnvelope)
    ),
    tags = ["comments"],
    operation_id = "addReply"
)]
#[post("/comments/replies/{comment_id}")]
pub async fn add_reply(
    state: web::Data<HttpState>,
    Bearer(actor): Bearer,
    path: web::Path<String>,
    payload: web::Json<ReplyBody>,
) -> ApiResult<HttpResponse> {
    let comment_id: CommentId = parse_id(&path, FieldName::new("commentId"))?;
    let text = require_field(payload.into_inner().reply, REPLY)?;
    let reply = state
        .comments
        .add_reply(AddReplyRequest {
            actor,
            comment_id,
            text,
        })
        .await?;
    Ok(HttpResponse::Created().json(ReplyResponse::from(reply)))
}

/// Fetch a reply.
#[utoipa::path(
    get,
    path = "/blogs/comments/replies/{id}",
    params(("id" = String, Path, description = "Reply identifier")),
    responses(
        (status = 200, description = "Reply", body = ReplyResponse),
        (status = 400, description = "Invalid id", body = ErrorEnvelope),
        (status = 401, description = "Unauthorised", body = ErrorEnvelope),
        (status = 404, description = "Not found", body = ErrorEnvelope)
    ),
    tags = ["comments"],
    operation_id = "getReply"
)]
#[get("/comments/replies/{id}")]
pub async fn get_reply(
    state: web::Data<HttpState>,
    _auth: Bearer,
    path: web::Path<String>,
) -> ApiResult<web::Json<ReplyResponse>> {
    let reply_id: ReplyId = parse_id(&path, ID)?;
    let reply = state.comments_query.get_reply(&reply_id).await?;
    Ok(web::Json(reply.into()))
}

/// Replace the text of a reply.
#[utoipa::path(
    put,
    path = "/blogs/comments/replies/{id}",
    params(("id" = String, Path, description = "Reply identifier")),
    request_body = ReplyBody,
    responses(
        (status = 200, description = "Edited reply", body = ReplyResponse),
        (status = 400, description = "Invalid request", body = ErrorEnvelope),
        (status = 401, description = "Unauthorised", body = ErrorEnvelope),
        (status = 404, description = "Not found", body = ErrorEnvelope)
    ),
    tags = ["comments"],
    operation_id = "editReply"
)]
#[put("/comments/replies/{id}")]
pub async fn edit_reply(
    state: web::Data<HttpState>,
    Bearer(actor): Bearer,
    path: web::Path<String>,
    payload: web::Json<ReplyBody>,
) -> ApiResult<web::Json<ReplyResponse>> {
    let reply_id: ReplyId = parse_id(&path, ID)?;
    let text = require_field(payload.into_inner().reply, REPLY)?;
    let reply = state
        .comments
        .edit_reply(EditReplyRequest {
            actor,
            reply_id,
            text,
        })
        .await?;
    Ok(web::Json(reply.into()))
}

/// Delete a reply.
#[utoipa::path(
    delete,
    path = "/blogs/comments/replies/{id}",
    params(("id" = String, Path, description = "Reply identifier")),
    responses(
        (status = 200, description = "Reply deleted", body = DeletionResponse),
        (status = 400, description = "Invalid id", body = ErrorEnvelope),
        (status = 401, description = "Unauthorised", body = ErrorEnvelope),
        (status = 404, description = "Not found", body = ErrorEnvelope)
    ),
    tags = ["comments"],
    operation_id = "deleteReply"
)]
#[delete("/comments/replies/{id}")]
pub async fn delete_reply(
    state: web::Data<HttpState>,
    Bearer(actor): Bearer,
    path: web::Path<String>,
) -> ApiResult<web::Json<DeletionResponse>> {
    let reply_id: ReplyId = parse_id(&path, ID)?;
    let receipt = state
        .comments
        .delete_reply(DeleteReplyRequest { actor, reply_id })
        .await?;
    Ok(web::Json(receipt.into()))
}

/// Add a comment to a live post.
#[utoipa::path(
    post,
    path = "/blogs/comments/{postId}",
    params(("postId" = String, Path, description = "Post to comment on")),
    request_body = CommentBody,
    responses(
        (status = 201, description = "Comment added", body = CommentResponse),
        (status = 400, description = "Invalid request", body = ErrorEnvelope),
        (status = 401, description = "Unauthorised", body = ErrorEnvelope),
        (status = 404, description = "Post not found", body = ErrorEnvelope)
    ),
    tags = ["comments"],
    operation_id = "addComment"
)]
#[post("/comments/{post_id}")]
pub async fn add_comment(
    state: web::Data<HttpState>,
    Bearer(actor): Bearer,
    path: web::Path<String>,
    payload: web::Json<CommentBody>,
) -> ApiResult<HttpResponse> {
    let post_id: PostId = parse_id(&path, FieldName::new("postId"))?;
    let text = require_field(payload.into_inner().comment, COMMENT)?;
    let comment = state
        .comments
        .add_comment(AddCommentRequest {
            actor,
            post_id,
            text,
        })
        .await?;
    Ok(HttpResponse::Created().json(CommentResponse::from(comment)))
}

/// Page through comments, newest first.
#[utoipa::path(
    get,
    path = "/blogs/comments",
    params(PageQuery),
    responses(
        (status = 200, description = "Comments", body = PageResponse<CommentResponse>),
        (status = 400, description = "Invalid page", body = ErrorEnvelope),
        (status = 401, description = "Unauthorised", body = ErrorEnvelope)
    ),
    tags = ["comments"],
    operation_id = "listComments"
)]
#[get("/comments")]
pub async fn list_comments(
    state: web::Data<HttpState>,
    _auth: Bearer,
    query: web::Query<PageQuery>,
) -> ApiResult<web::Json<PageResponse<CommentResponse>>> {
    let request = query.to_request()?;
    let page = state.comments_query.list_comments(request).await?;
    Ok(web::Json(page.into()))
}

/// Fetch a comment.
#[utoipa::path(
    get,
    path = "/blogs/comments/{id}",
    params(("id" = String, Path, description = "Comment identifier")),
    responses(
        (status = 200, description = "Comment", body = CommentResponse),
        (status = 400, description = "Invalid id", body = ErrorEnvelope),
        (status = 401, description = "Unauthorised", body = ErrorEnvelope),
        (status = 404, description = "Not found", body = ErrorEnvelope)
    ),
    tags = ["comments"],
    operation_id = "getComment"
)]
#[get("/comments/{id}")]
pub async fn get_comment(
    state: web::Data<HttpState>,
    _auth: Bearer,
    path: web::Path<String>,
) -> ApiResult<web::Json<CommentResponse>> {
    let comment_id: CommentId = parse_id(&path, ID)?;
    let comment = state.comments_query.get_comment(&comment_id).await?;
    Ok(web::Json(comment.into()))
}

/// Replace the text of a comment.
#[utoipa::path(
    put,
    path = "/blogs/comments/{id}",
    params(("id" = String, Path, description = "Comment identifier")),
    request_body = CommentBody,
    responses(
        (status = 200, description = "Edited comment", body = CommentResponse),
        (status = 400, description = "Invalid request", body = ErrorEnvelope),
        (status = 401, description = "Unauthorised", body = ErrorEnvelope),
        (status = 404, description = "Not found", body = ErrorEnvelope)
    ),
    tags = ["comments"],
    operation_id = "editComment"
)]
#[put("/comments/{id}")]
pub async fn edit_comment(
    state: web::Data<HttpState>,
    Bearer(actor): Bearer,
    path: web::Path<String>,
    payload: web::Json<CommentBody>,
) -> ApiResult<web::Json<CommentResponse>> {
    let comment_id: CommentId = parse_id(&path, ID)?;
    let text = require_field(payload.into_inner().comment, COMMENT)?;
    let comment = state
        .comments
        .edit_comment(EditCommentRequest {
            actor,
            comment_id,
            text,
        })
        .await?;
    Ok(web::Json(comment.into()))
}

/// Delete a comment and every reply to it.
#[utoipa::path(
    delete,
    path = "/blogs/comments/{id}",
    params(("id" = String, Path, description = "Comment identifier")),
    responses(
        (status = 200, description = "Comment deleted", body = DeletionResponse),
        (status = 400, description = "Invalid id", body = ErrorEnvelope),
        (status = 401, description = "Unauthorised", body = ErrorEnvelope),
        (status = 404, description = "Not found", body = ErrorEnvelope)
    ),
    tags = ["comments"],
    operation_id = "deleteComment"
)]
#[delete("/comments/{id}")]
pub async fn delete_comment(
    state: web::Data<HttpState>,
    Bearer(actor): Bearer,
    path: web::Path<String>,
) -> ApiResult<web::Json<DeletionResponse>> {
    let comment_id: CommentId = parse_id(&path, ID)?;
    let receipt = state
        .comments
        .delete_comment(DeleteCommentRequest { actor, comment_id })
        .await?;
    Ok(web::Json(receipt.into()))
}
