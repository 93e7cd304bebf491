//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::header::AUTHORIZATION;
use actix_web::{App, test, web};

use crate::domain::ports::{
    MockCategoriesCommand, MockCategoriesQuery, MockCommentsCommand, MockCommentsQuery,
    MockPostsCommand, MockPostsQuery, MockTokenService, MockUserAccounts, TokenServiceError,
};
use crate::domain::test_support::actor;

use super::state::HttpState;

/// Bearer token accepted by [`HttpMocks::default`].
pub const TEST_TOKEN: &str = "test-token";

/// Token service accepting only [`TEST_TOKEN`].
pub fn accepting_tokens() -> MockTokenService {
    let mut tokens = MockTokenService::new();
    tokens.expect_verify().returning(|token| {
        if token == TEST_TOKEN {
            Ok(actor())
        } else {
            Err(TokenServiceError::invalid("signature mismatch"))
        }
    });
    tokens
}

/// Mock ports behind an [`HttpState`].
pub struct HttpMocks {
    pub posts: MockPostsCommand,
    pub posts_query: MockPostsQuery,
    pub categories: MockCategoriesCommand,
    pub categories_query: MockCategoriesQuery,
    pub comments: MockCommentsCommand,
    pub comments_query: MockCommentsQuery,
    pub accounts: MockUserAccounts,
    pub tokens: MockTokenService,
}

impl Default for HttpMocks {
    fn default() -> Self {
        Self {
            posts: MockPostsCommand::new(),
            posts_query: MockPostsQuery::new(),
            categories: MockCategoriesCommand::new(),
            categories_query: MockCategoriesQuery::new(),
            comments: MockCommentsCommand::new(),
            comments_query: MockCommentsQuery::new(),
            accounts: MockUserAccounts::new(),
            tokens: accepting_tokens(),
        }
    }
}

impl HttpMocks {
    pub fn into_state(self) -> web::Data<HttpState> {
        web::Data::new(HttpState {
            posts: Arc::new(self.posts),
            posts_query: Arc::new(self.posts_query),
            categories: Arc::new(self.categories),
            categories_query: Arc::new(self.categories_query),
            comments: Arc::new(self.comments),
            comments_query: Arc::new(self.comments_query),
            accounts: Arc::new(self.accounts),
            tokens: Arc::new(self.tokens),
        })
    }

    /// Send one request through the full route table.
    pub async fn call(self, req: test::TestRequest) -> ServiceResponse {
        let app = test::init_service(
            App::new()
                .app_data(self.into_state())
                .configure(super::configure),
        )
        .await;
        app.call(req.to_request())
            .await
            .expect("service call succeeds")
    }
}

/// Attach the accepted bearer token.
pub fn authorised(req: test::TestRequest) -> test::TestRequest {
    req.insert_header((AUTHORIZATION, format!("Bearer {TEST_TOKEN}")))
}
