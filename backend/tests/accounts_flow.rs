//! Signup, signin, and bearer enforcement across the full app.

#[allow(dead_code)]
mod support;

use actix_web::http::StatusCode;
use actix_web::test::TestRequest;
use rstest::rstest;
use serde_json::json;

use blog_backend::domain::TRACE_ID_HEADER;
use blog_backend::domain::account_service::{
    EMAIL_TAKEN_MESSAGE, UNKNOWN_USER_MESSAGE, WRONG_PASSWORD_MESSAGE,
};
use blog_backend::inbound::http::auth::{LOGIN_REQUIRED_MESSAGE, SESSION_EXPIRED_MESSAGE};
use support::{bearer, send, sign_in, spawn_app};

#[actix_rt::test]
async fn signup_hides_the_password_and_rejects_reuse() {
    let app = spawn_app().await;
    let credentials = json!({
        "email": "ada@example.com",
        "username": "ada",
        "password": "Secret1!",
    });

    let (status, account) = send(
        &app,
        TestRequest::post().uri("/users/signup").set_json(&credentials),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(account["email"], "ada@example.com");
    assert!(account.get("password").is_none());
    assert!(account.get("passwordHash").is_none());

    let (status, body) = send(
        &app,
        TestRequest::post().uri("/users/signup").set_json(&credentials),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], json!([EMAIL_TAKEN_MESSAGE]));
}

#[actix_rt::test]
async fn signin_distinguishes_unknown_users_from_bad_passwords() {
    let app = spawn_app().await;
    sign_in(&app, "ada@example.com").await;

    let (status, body) = send(
        &app,
        TestRequest::post()
            .uri("/users/signin")
            .set_json(json!({ "email": "nobody@example.com", "password": "Secret1!" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], json!([UNKNOWN_USER_MESSAGE]));

    let (status, body) = send(
        &app,
        TestRequest::post()
            .uri("/users/signin")
            .set_json(json!({ "email": "ada@example.com", "password": "Wrong1!!" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], json!([WRONG_PASSWORD_MESSAGE]));
}

#[rstest]
#[case(None, LOGIN_REQUIRED_MESSAGE)]
#[case(Some("not-a-jwt"), SESSION_EXPIRED_MESSAGE)]
#[actix_rt::test]
async fn mutations_require_a_valid_token(
    #[case] token: Option<&str>,
    #[case] expected: &str,
) {
    let app = spawn_app().await;
    let mut req = TestRequest::post()
        .uri("/blogs/posts")
        .set_json(json!({ "title": "Hello", "description": "d" }));
    if let Some(token) = token {
        req = bearer(req, token);
    }

    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["statusCode"], 401);
    assert_eq!(body["message"], json!([expected]));
}

#[actix_rt::test]
async fn error_envelopes_echo_the_trace_header() {
    let app = spawn_app().await;
    let token = sign_in(&app, "ada@example.com").await;
    let req = bearer(
        TestRequest::get().uri("/blogs/posts/00000000-0000-0000-0000-000000000000"),
        &token,
    )
    .to_request();

    let response = actix_web::test::call_service(&app, req).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
        .expect("trace id header");
    let body: serde_json::Value = actix_web::test::read_body_json(response).await;
    assert_eq!(body["traceId"], header.as_str());
}
