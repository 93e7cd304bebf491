//! Bearer authentication for the `/blogs` route family.
//!
//! Handlers take a [`Bearer`] argument; the verified identity is then passed
//! explicitly into each content command as the acting user.

use std::future::{Ready, ready};

use actix_web::dev::Payload;
use actix_web::http::header::AUTHORIZATION;
use actix_web::{FromRequest, HttpRequest, web};
use tracing::debug;

use crate::domain::{AuthenticatedUser, Error};

use super::state::HttpState;

/// Message returned when no bearer credential accompanies the request.
pub const LOGIN_REQUIRED_MESSAGE: &str = "please login to continue";
/// Message returned when the bearer credential fails verification.
pub const SESSION_EXPIRED_MESSAGE: &str = "Session expired, please login to continue";

/// Identity extracted from `Authorization: Bearer <token>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bearer(pub AuthenticatedUser);

impl Bearer {
    /// The authenticated user.
    pub fn into_inner(self) -> AuthenticatedUser {
        self.0
    }
}

fn bearer_token(req: &HttpRequest) -> Option<&str> {
    let value = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

fn authenticate(req: &HttpRequest) -> Result<Bearer, Error> {
    let state = req
        .app_data::<web::Data<HttpState>>()
        .ok_or_else(|| Error::internal("HTTP state is not configured"))?;
    let token = bearer_token(req).ok_or_else(|| Error::unauthorized(LOGIN_REQUIRED_MESSAGE))?;
    state.tokens.verify(token).map(Bearer).map_err(|err| {
        debug!(error = %err, "bearer token rejected");
        Error::unauthorized(SESSION_EXPIRED_MESSAGE)
    })
}

impl FromRequest for Bearer {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::inbound::http::test_utils::{HttpMocks, TEST_TOKEN};
    use actix_web::test::TestRequest;
    use rstest::rstest;

    async fn extract(req: TestRequest) -> Result<Bearer, Error> {
        let (req, mut payload) = req
            .app_data(HttpMocks::default().into_state())
            .to_http_parts();
        Bearer::from_request(&req, &mut payload).await
    }

    #[actix_web::test]
    async fn valid_token_yields_identity() {
        let bearer = extract(
            TestRequest::default()
                .insert_header((AUTHORIZATION, format!("Bearer {TEST_TOKEN}"))),
        )
        .await
        .expect("authenticated");
        assert_eq!(bearer.into_inner().email, "ada@example.com");
    }

    #[rstest]
    #[case(None)]
    #[case(Some("Basic abc"))]
    #[case(Some("Bearer "))]
    #[actix_web::test]
    async fn missing_credentials_ask_for_login(#[case] header: Option<&str>) {
        let mut req = TestRequest::default();
        if let Some(value) = header {
            req = req.insert_header((AUTHORIZATION, value));
        }
        let err = extract(req).await.expect_err("unauthenticated");
        assert_eq!(err.code(), ErrorCode::Unauthorized);
        assert_eq!(err.message(), LOGIN_REQUIRED_MESSAGE);
    }

    #[actix_web::test]
    async fn rejected_tokens_report_an_expired_session() {
        let err = extract(
            TestRequest::default().insert_header((AUTHORIZATION, "Bearer forged")),
        )
        .await
        .expect_err("rejected token");
        assert_eq!(err.code(), ErrorCode::Unauthorized);
        assert_eq!(err.message(), SESSION_EXPIRED_MESSAGE);
    }
}
