//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every handler under `/blogs`, `/users`, and
//! `/health`, together with the bearer security scheme that guards the
//! `/blogs` family. The document is served by Swagger UI in debug builds and
//! exported via `cargo run --bin openapi-dump`.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::inbound::http::content_dto::{
    CategoryResponse, CategorySummaryResponse, CommentBody, CommentResponse, DeletionResponse,
    PostResponse, PostWithCategoryResponse, ReplyBody, ReplyResponse, SearchResponse,
};
use crate::inbound::http::error::ErrorEnvelope;

/// Enrich the generated document with the bearer security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "BearerAuth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .description(Some("Access token issued by POST /users/signin."))
                    .build(),
            ),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Blog backend API",
        description = "Posts, categories, comments, and replies behind bearer authentication."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("BearerAuth" = [])),
    paths(
        crate::inbound::http::posts::create_post,
        crate::inbound::http::posts::search_posts,
        crate::inbound::http::posts::list_posts_by_categories,
        crate::inbound::http::posts::list_posts,
        crate::inbound::http::posts::get_post,
        crate::inbound::http::posts::update_post,
        crate::inbound::http::posts::delete_post,
        crate::inbound::http::categories::create_category,
        crate::inbound::http::categories::get_category,
        crate::inbound::http::categories::rename_category,
        crate::inbound::http::categories::delete_category,
        crate::inbound::http::comments::add_comment,
        crate::inbound::http::comments::list_comments,
        crate::inbound::http::comments::get_comment,
        crate::inbound::http::comments::edit_comment,
        crate::inbound::http::comments::delete_comment,
        crate::inbound::http::comments::add_reply,
        crate::inbound::http::comments::get_reply,
        crate::inbound::http::comments::edit_reply,
        crate::inbound::http::comments::delete_reply,
        crate::inbound::http::users::signup,
        crate::inbound::http::users::signin,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorEnvelope,
        PostResponse,
        PostWithCategoryResponse,
        CategorySummaryResponse,
        SearchResponse,
        CategoryResponse,
        CommentResponse,
        ReplyResponse,
        DeletionResponse,
        CommentBody,
        ReplyBody,
    )),
    tags(
        (name = "posts", description = "Blog posts and published feeds"),
        (name = "categories", description = "Post categories and their hierarchy"),
        (name = "comments", description = "Comments and replies"),
        (name = "users", description = "Signup and signin"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
