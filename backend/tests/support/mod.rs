//! Shared harness driving the full HTTP app over the in-memory store.

use std::sync::Arc;

use actix_http::Request;
use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::http::header::AUTHORIZATION;
use actix_web::test::{self, TestRequest};
use actix_web::{App, web};
use mockable::{Clock, DefaultClock};
use serde_json::{Value, json};

use blog_backend::Trace;
use blog_backend::domain::{AccountService, ContentService};
use blog_backend::inbound::http::configure;
use blog_backend::inbound::http::state::HttpState;
use blog_backend::outbound::memory::MemoryStore;
use blog_backend::outbound::security::{Argon2CredentialHasher, JwtTokenService};

const SECRET: &[u8] = b"integration-test-secret";

/// Handler state over a fresh in-memory store.
pub fn memory_state() -> web::Data<HttpState> {
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    let store = MemoryStore::shared();
    let tokens = Arc::new(JwtTokenService::new(
        SECRET,
        chrono::Duration::minutes(30),
        Arc::clone(&clock),
    ));
    let content = Arc::new(ContentService::new(store.content_store(), Arc::clone(&clock)));
    let accounts = Arc::new(AccountService::new(
        store,
        Arc::new(Argon2CredentialHasher),
        tokens.clone(),
        clock,
    ));
    web::Data::new(HttpState::new(content, accounts, tokens))
}

/// Build the app the server runs, minus health checks and docs.
pub async fn spawn_app()
-> impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = actix_web::Error> {
    test::init_service(
        App::new()
            .app_data(memory_state())
            .wrap(Trace)
            .configure(configure),
    )
    .await
}

/// Send a request and decode the JSON body, if any.
pub async fn send<S, B>(app: &S, req: TestRequest) -> (StatusCode, Value)
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let response = test::call_service(app, req.to_request()).await;
    let status = response.status();
    let bytes = test::read_body(response).await;
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("JSON response body")
    };
    (status, body)
}

/// Register an account and return a bearer token for it.
pub async fn sign_in<S, B>(app: &S, email: &str) -> String
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let credentials = json!({ "email": email, "username": "writer", "password": "Secret1!" });
    let (status, _) = send(
        app,
        TestRequest::post().uri("/users/signup").set_json(&credentials),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "signup succeeds");
    let (status, body) = send(
        app,
        TestRequest::post()
            .uri("/users/signin")
            .set_json(json!({ "email": email, "password": "Secret1!" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "signin succeeds");
    body["access_token"]
        .as_str()
        .expect("access token")
        .to_owned()
}

/// Attach a bearer token.
pub fn bearer(req: TestRequest, token: &str) -> TestRequest {
    req.insert_header((AUTHORIZATION, format!("Bearer {token}")))
}

/// Create a post and return its JSON representation.
pub async fn create_post<S, B>(app: &S, token: &str, body: Value) -> Value
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let (status, post) = send(
        app,
        bearer(TestRequest::post().uri("/blogs/posts").set_json(body), token),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "post created: {post}");
    post
}

/// Read the `id` field of a JSON record.
pub fn id_of(record: &Value) -> String {
    record["id"].as_str().expect("record id").to_owned()
}

/// Authorised `GET` returning status and JSON body.
pub async fn get<S, B>(app: &S, token: &str, uri: &str) -> (StatusCode, Value)
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    send(app, bearer(TestRequest::get().uri(uri), token)).await
}
