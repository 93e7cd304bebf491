//! Categories API handlers.
//!
//! ```text
//! POST   /blogs/categories/{postId} {"name":"News","parent_id":null}
//! GET    /blogs/categories/{id}
//! PUT    /blogs/categories/{id} {"name":"World"}
//! DELETE /blogs/categories/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::content::{CategoryId, PostId};
use crate::domain::ports::{CreateCategoryRequest, DeleteCategoryRequest, RenameCategoryRequest};
use crate::inbound::http::ApiResult;
use crate::inbound::http::auth::Bearer;
use crate::inbound::http::content_dto::{CategoryResponse, DeletionResponse};
use crate::inbound::http::error::ErrorEnvelope;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_id, parse_optional_id, require_field};

const CATEGORY_ID: FieldName = FieldName::new("id");
const NAME: FieldName = FieldName::new("name");

/// Request payload for creating a category on a post.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateCategoryBody {
    pub name: Option<String>,
    /// Existing category to nest under.
    #[serde(alias = "parentId")]
    pub parent_id: Option<String>,
}

/// Request payload for renaming a category.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct RenameCategoryBody {
    pub name: Option<String>,
}

/// Create a category and link it to a post.
#[utoipa::path(
    post,
    path = "/blogs/categories/{postId}",
    params(("postId" = String, Path, description = "Post to link")),
    request_body = CreateCategoryBody,
    responses(
        (status = 201, description = "Category created", body = CategoryResponse),
        (status = 400, description = "Invalid request", body = ErrorEnvelope),
        (status = 401, description = "Unauthorised", body = ErrorEnvelope),
        (status = 404, description = "Post or parent not found", body = ErrorEnvelope),
        (status = 409, description = "Post already has a category", body = ErrorEnvelope)
    ),
    tags = ["categories"],
    operation_id = "createCategory"
)]
#[post("/categories/{post_id}")]
pub async fn create_category(
    state: web::Data<HttpState>,
    Bearer(actor): Bearer,
    path: web::Path<String>,
    payload: web::Json<CreateCategoryBody>,
) -> ApiResult<HttpResponse> {
    let post_id: PostId = parse_id(&path, FieldName::new("postId"))?;
    let body = payload.into_inner();
    let request = CreateCategoryRequest {
        actor,
        post_id,
        name: require_field(body.name, NAME)?,
        parent_id: parse_optional_id(body.parent_id.as_deref(), FieldName::new("parent_id"))?,
    };
    let category = state.categories.create_category(request).await?;
    Ok(HttpResponse::Created().json(CategoryResponse::from(category)))
}

/// Fetch a category.
#[utoipa::path(
    get,
    path = "/blogs/categories/{id}",
    params(("id" = String, Path, description = "Category identifier")),
    responses(
        (status = 200, description = "Category", body = CategoryResponse),
        (status = 400, description = "Invalid id", body = ErrorEnvelope),
        (status = 401, description = "Unauthorised", body = ErrorEnvelope),
        (status = 404, description = "Not found", body = ErrorEnvelope)
    ),
    tags = ["categories"],
    operation_id = "getCategory"
)]
#[get("/categories/{id}")]
pub async fn get_category(
    state: web::Data<HttpState>,
    _auth: Bearer,
    path: web::Path<String>,
) -> ApiResult<web::Json<CategoryResponse>> {
    let category_id: CategoryId = parse_id(&path, CATEGORY_ID)?;
    let category = state.categories_query.get_category(&category_id).await?;
    Ok(web::Json(category.into()))
}

/// Rename a category.
#[utoipa::path(
    put,
    path = "/blogs/categories/{id}",
    params(("id" = String, Path, description = "Category identifier")),
    request_body = RenameCategoryBody,
    responses(
        (status = 200, description = "Renamed category", body = CategoryResponse),
        (status = 400, description = "Invalid request", body = ErrorEnvelope),
        (status = 401, description = "Unauthorised", body = ErrorEnvelope),
        (status = 404, description = "Not found", body = ErrorEnvelope)
    ),
    tags = ["categories"],
    operation_id = "renameCategory"
)]
#[put("/categories/{id}")]
pub async fn rename_category(
    state: web::Data<HttpState>,
    Bearer(actor): Bearer,
    path: web::Path<String>,
    payload: web::Json<RenameCategoryBody>,
) -> ApiResult<web::Json<CategoryResponse>> {
    let category_id: CategoryId = parse_id(&path, CATEGORY_ID)?;
    let name = require_field(payload.into_inner().name, NAME)?;
    let category = state
        .categories
        .rename_category(RenameCategoryRequest {
            actor,
            category_id,
            name,
        })
        .await?;
    Ok(web::Json(category.into()))
}

/// Detach a category from its posts and delete it.
///
/// Root categories that still have a child are refused with `409`.
#[utoipa::path(
    delete,
    path = "/blogs/categories/{id}",
    params(("id" = String, Path, description = "Category identifier")),
    responses(
        (status = 200, description = "Category deleted", body = DeletionResponse),
        (status = 400, description = "Invalid id", body = ErrorEnvelope),
        (status = 401, description = "Unauthorised", body = ErrorEnvelope),
        (status = 404, description = "Not found", body = ErrorEnvelope),
        (status = 409, description = "Category has a child", body = ErrorEnvelope)
    ),
    tags = ["categories"],
    operation_id = "deleteCategory"
)]
#[delete("/categories/{id}")]
pub async fn delete_category(
    state: web::Data<HttpState>,
    Bearer(actor): Bearer,
    path: web::Path<String>,
) -> ApiResult<web::Json<DeletionResponse>> {
    let category_id: CategoryId = parse_id(&path, CATEGORY_ID)?;
    let receipt = state
        .categories
        .delete_category(DeleteCategoryRequest { actor, category_id })
        .await?;
    Ok(web::Json(receipt.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::content::{DeletionReceipt, EntityKind};
    use crate::domain::test_support::{category, post};
    use crate::domain::{Error, hierarchy::PARENT_HAS_CHILD_MESSAGE};
    use crate::inbound::http::test_utils::{HttpMocks, authorised};
    use actix_web::http::StatusCode;
    use actix_web::test::{self as actix_test, TestRequest};
    use serde_json::{Value, json};

    #[actix_web::test]
    async fn create_category_links_the_post() {
        let target = post(None);
        let post_id = target.id;
        let parent = category(None);
        let parent_id = parent.id;
        let mut mocks = HttpMocks::default();
        mocks
            .categories
            .expect_create_category()
            .withf(move |request| {
                request.post_id == post_id
                    && request.name == "News"
                    && request.parent_id == Some(parent_id)
            })
            .times(1)
            .return_once(move |_| Ok(category(Some(parent_id))));

        let response = mocks
            .call(authorised(
                TestRequest::post()
                    .uri(&format!("/blogs/categories/{post_id}"))
                    .set_json(json!({ "name": "News", "parent_id": parent_id.to_string() })),
            ))
            .await;

        assert_eq!(response.status(), StatusCode::CREATED);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["parent_id"], parent_id.to_string());
    }

    #[actix_web::test]
    async fn second_category_is_a_conflict() {
        let mut mocks = HttpMocks::default();
        mocks
            .categories
            .expect_create_category()
            .times(1)
            .return_once(|_| Err(Error::conflict("Category for this post already exists!")));

        let response = mocks
            .call(authorised(
                TestRequest::post()
                    .uri(&format!("/blogs/categories/{}", post(None).id))
                    .set_json(json!({ "name": "Other" })),
            ))
            .await;

        assert_eq!(response.status(), StatusCode::CONFLICT);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["error"], "conflict");
        assert_eq!(body["statusCode"], 409);
    }

    #[actix_web::test]
    async fn malformed_parent_id_is_rejected() {
        let mut mocks = HttpMocks::default();
        mocks.categories.expect_create_category().never();

        let response = mocks
            .call(authorised(
                TestRequest::post()
                    .uri(&format!("/blogs/categories/{}", post(None).id))
                    .set_json(json!({ "name": "News", "parentId": "root" })),
            ))
            .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["details"]["field"], "parent_id");
    }

    #[actix_web::test]
    async fn rename_requires_a_name() {
        let response = HttpMocks::default()
            .call(authorised(
                TestRequest::put()
                    .uri(&format!("/blogs/categories/{}", category(None).id))
                    .set_json(json!({})),
            ))
            .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn get_category_returns_the_record() {
        let found = category(None);
        let id = found.id;
        let mut mocks = HttpMocks::default();
        mocks
            .categories_query
            .expect_get_category()
            .times(1)
            .return_once(move |_| Ok(found));

        let response = mocks
            .call(authorised(TestRequest::get().uri(&format!("/blogs/categories/{id}"))))
            .await;

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["name"], "News");
        assert_eq!(body["parent_id"], Value::Null);
    }

    #[actix_web::test]
    async fn deleting_a_parent_is_refused() {
        let mut mocks = HttpMocks::default();
        mocks
            .categories
            .expect_delete_category()
            .times(1)
            .return_once(|_| Err(Error::conflict(PARENT_HAS_CHILD_MESSAGE)));

        let response = mocks
            .call(authorised(
                TestRequest::delete().uri(&format!("/blogs/categories/{}", category(None).id)),
            ))
            .await;

        assert_eq!(response.status(), StatusCode::CONFLICT);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["message"], json!([PARENT_HAS_CHILD_MESSAGE]));
    }

    #[actix_web::test]
    async fn delete_category_returns_the_receipt() {
        let id = category(None).id;
        let mut mocks = HttpMocks::default();
        mocks
            .categories
            .expect_delete_category()
            .withf(move |request| request.category_id == id)
            .times(1)
            .return_once(move |_| Ok(DeletionReceipt::new(EntityKind::Category, id)));

        let response = mocks
            .call(authorised(TestRequest::delete().uri(&format!("/blogs/categories/{id}"))))
            .await;

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["message"], "category has been deleted!");
    }
}
