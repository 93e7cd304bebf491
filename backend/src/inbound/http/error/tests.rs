//! Tests for HTTP error mapping.

use super::*;
use actix_web::body::to_bytes;
use rstest::rstest;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

async fn envelope(error: &Error) -> (StatusCode, ErrorEnvelope) {
    let response = ResponseError::error_response(error);
    let status = response.status();
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    let body = serde_json::from_slice(&bytes).expect("envelope deserialises");
    (status, body)
}

#[rstest]
#[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::unauthorized("please login to continue"), StatusCode::UNAUTHORIZED)]
#[case(Error::not_found("post not found!"), StatusCode::NOT_FOUND)]
#[case(Error::conflict("email already exists!"), StatusCode::CONFLICT)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] err: Error, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&err), status);
}

#[actix_web::test]
async fn envelopes_carry_status_messages_and_kind() {
    let err = Error::conflict("Category for this post already exists!").with_trace_id(TRACE_ID);
    let (status, body) = envelope(&err).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body.status_code, 409);
    assert_eq!(body.message, vec!["Category for this post already exists!"]);
    assert_eq!(body.error, "conflict");
    assert_eq!(body.trace_id.as_deref(), Some(TRACE_ID));
}

#[actix_web::test]
async fn internal_errors_are_redacted() {
    let err = Error::internal("storage error: relation \"posts\" does not exist")
        .with_details(json!({ "table": "posts" }));
    let (status, body) = envelope(&err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body.message, vec![REDACTED_MESSAGE]);
    assert_eq!(body.error, "internal_error");
    assert!(body.details.is_none());
}

#[actix_web::test]
async fn trace_header_mirrors_the_error() {
    let err = Error::not_found("post not found!").with_trace_id(TRACE_ID);
    let response = ResponseError::error_response(&err);
    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .expect("trace id header")
        .to_str()
        .expect("ascii header");
    assert_eq!(header, TRACE_ID);
}

#[actix_web::test]
async fn validation_details_survive() {
    let err = Error::invalid_request("title must not be empty")
        .with_details(json!({ "field": "title", "code": "empty" }));
    let (_, body) = envelope(&err).await;
    assert_eq!(
        body.details
            .as_ref()
            .and_then(|d| d.get("field"))
            .and_then(Value::as_str),
        Some("title")
    );
}
