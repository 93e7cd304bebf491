//! Users API handlers.
//!
//! ```text
//! POST /users/signup {"email":"ada@example.com","username":"ada","password":"Secret1!"}
//! POST /users/signin {"email":"ada@example.com","password":"Secret1!"}
//! ```

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    CredentialValidationError, Error, LoginCredentials, SignupCredentials, UserAccount,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorEnvelope;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::map_credential_error;

/// Signup request body for `POST /users/signup`.
#[derive(Deserialize, Serialize, ToSchema)]
pub struct SignupRequest {
    pub email: String,
    pub username: String,
    pub password: String,
}

impl TryFrom<SignupRequest> for SignupCredentials {
    type Error = CredentialValidationError;

    fn try_from(value: SignupRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(&value.email, &value.username, &value.password)
    }
}

/// Signin request body for `POST /users/signin`.
#[derive(Deserialize, Serialize, ToSchema)]
pub struct SigninRequest {
    pub email: String,
    pub password: String,
}

impl TryFrom<SigninRequest> for LoginCredentials {
    type Error = CredentialValidationError;

    fn try_from(value: SigninRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(&value.email, &value.password)
    }
}

/// Registered account, without its password hash.
#[derive(Debug, Serialize, ToSchema)]
pub struct AccountResponse {
    pub id: String,
    pub email: String,
    pub username: String,
    pub created_at: String,
}

impl From<UserAccount> for AccountResponse {
    fn from(account: UserAccount) -> Self {
        Self {
            id: account.id.to_string(),
            email: account.email,
            username: account.username,
            created_at: account.created_at.to_rfc3339(),
        }
    }
}

/// Bearer credential issued on signin.
#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    pub access_token: String,
}

fn validation_error(err: CredentialValidationError) -> Error {
    map_credential_error(&err)
}

/// Register a new account.
#[utoipa::path(
    post,
    path = "/users/signup",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "Account registered", body = AccountResponse),
        (status = 400, description = "Invalid request", body = ErrorEnvelope),
        (status = 409, description = "Email already registered", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tags = ["users"],
    operation_id = "signup",
    security([])
)]
#[post("/signup")]
pub async fn signup(
    state: web::Data<HttpState>,
    payload: web::Json<SignupRequest>,
) -> ApiResult<HttpResponse> {
    let credentials =
        SignupCredentials::try_from(payload.into_inner()).map_err(validation_error)?;
    let account = state.accounts.signup(&credentials).await?;
    Ok(HttpResponse::Created().json(AccountResponse::from(account)))
}

/// Exchange credentials for a bearer token.
#[utoipa::path(
    post,
    path = "/users/signin",
    request_body = SigninRequest,
    responses(
        (status = 200, description = "Signed in", body = TokenResponse),
        (status = 400, description = "Invalid request or wrong password", body = ErrorEnvelope),
        (status = 404, description = "Unknown email", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tags = ["users"],
    operation_id = "signin",
    security([])
)]
#[post("/signin")]
pub async fn signin(
    state: web::Data<HttpState>,
    payload: web::Json<SigninRequest>,
) -> ApiResult<web::Json<TokenResponse>> {
    let credentials =
        LoginCredentials::try_from(payload.into_inner()).map_err(validation_error)?;
    let token = state.accounts.signin(&credentials).await?;
    Ok(web::Json(TokenResponse {
        access_token: token.as_str().to_owned(),
    }))
}
