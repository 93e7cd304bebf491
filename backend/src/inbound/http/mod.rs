//! HTTP inbound adapter exposing REST endpoints.
//!
//! [`configure`] mounts the `/blogs` and `/users` route families and routes
//! extractor failures through the shared error envelope.

pub mod auth;
pub mod categories;
pub mod comments;
pub mod content_dto;
pub mod error;
pub mod health;
pub mod posts;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub mod validation;

use actix_web::web;

pub use error::ApiResult;

/// Register every API route and extractor configuration.
///
/// Literal segments (`/posts/search`, `/posts/by-categories`) are registered
/// before the `{id}` routes that would otherwise capture them.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use blog_backend::inbound::http::configure;
///
/// let app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
        .app_data(web::PathConfig::default().error_handler(error::path_error_handler))
        .app_data(web::QueryConfig::default().error_handler(error::query_error_handler))
        .service(
            web::scope("/blogs")
                .service(posts::search_posts)
                .service(posts::list_posts_by_categories)
                .service(posts::list_posts)
                .service(posts::create_post)
                .service(posts::get_post)
                .service(posts::update_post)
                .service(posts::delete_post)
                .service(categories::create_category)
                .service(categories::get_category)
                .service(categories::rename_category)
                .service(categories::delete_category)
                .service(comments::add_reply)
                .service(comments::get_reply)
                .service(comments::edit_reply)
                .service(comments::delete_reply)
                .service(comments::list_comments)
                .service(comments::add_comment)
                .service(comments::get_comment)
                .service(comments::edit_comment)
                .service(comments::delete_comment),
        )
        .service(
            web::scope("/users")
                .service(users::signup)
                .service(users::signin),
        );
}
