//! HTTP adapter mapping for domain errors.
//!
//! Every failure leaves the service as
//! `{statusCode, message: [..], error, traceId?, details?}`. Internal
//! messages are logged and replaced with a generic message on the wire.

use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::error;
use utoipa::ToSchema;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Message substituted for internal error details.
pub const REDACTED_MESSAGE: &str = "Internal server error";

/// Wire shape of every error response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEnvelope {
    /// HTTP status code repeated in the body.
    #[schema(example = 404)]
    pub status_code: u16,
    /// Human-readable messages.
    #[schema(example = json!(["post not found!"]))]
    pub message: Vec<String>,
    /// Stable kind tag: `invalid_request`, `unauthorized`, `not_found`,
    /// `conflict`, or `internal_error`.
    #[schema(example = "not_found")]
    pub error: String,
    /// Correlation identifier for the request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
    /// Supplementary structured details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub details: Option<Value>,
}

impl From<&Error> for ErrorEnvelope {
    fn from(err: &Error) -> Self {
        let status = status_for(err.code());
        let internal = matches!(err.code(), ErrorCode::InternalError);
        if internal {
            error!(detail = err.message(), trace_id = ?err.trace_id(), "internal error");
        }
        Self {
            status_code: status.as_u16(),
            message: vec![if internal {
                REDACTED_MESSAGE.to_owned()
            } else {
                err.message().to_owned()
            }],
            error: err.code().as_str().to_owned(),
            trace_id: err.trace_id().map(str::to_owned),
            details: if internal { None } else { err.details().cloned() },
        }
    }
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Conflict => StatusCode::CONFLICT,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        builder.json(ErrorEnvelope::from(self))
    }
}

fn extractor_error(message: String, source: &'static str) -> actix_web::Error {
    Error::invalid_request(message)
        .with_details(json!({ "source": source, "code": "malformed_request" }))
        .into()
}

/// Render JSON body extraction failures through the error envelope.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    extractor_error(err.to_string(), "body")
}

/// Render path extraction failures through the error envelope.
pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    extractor_error(err.to_string(), "path")
}

/// Render query extraction failures through the error envelope.
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    extractor_error(err.to_string(), "query")
}

#[cfg(test)]
mod tests;
