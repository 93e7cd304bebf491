//! Shared validation helpers for inbound HTTP adapters.

use std::str::FromStr;

use pagination::{PageRequest, PageRequestError};
use serde::Deserialize;
use serde_json::json;
use utoipa::IntoParams;

use crate::domain::content::{PostStatus, UnknownPostStatus};
use crate::domain::{CredentialValidationError, Error};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    InvalidUuid,
    InvalidPage,
    InvalidStatus,
    InvalidCredentials,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::InvalidUuid => "invalid_uuid",
            Self::InvalidPage => "invalid_page",
            Self::InvalidStatus => "invalid_status",
            Self::InvalidCredentials => "invalid_credentials",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

fn field_error(field: &str, message: impl Into<String>, code: ErrorCode) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field,
        "code": code.as_str(),
    }))
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let field = field.as_str();
    field_error(
        field,
        format!("missing required field: {field}"),
        ErrorCode::MissingField,
    )
}

/// Require an optional body field.
pub(crate) fn require_field<T>(value: Option<T>, field: FieldName) -> Result<T, Error> {
    value.ok_or_else(|| missing_field_error(field))
}

/// Parse a UUID-backed identifier from path or body text.
pub(crate) fn parse_id<T: FromStr>(value: &str, field: FieldName) -> Result<T, Error> {
    value.parse().map_err(|_| {
        let name = field.as_str();
        Error::invalid_request(format!("{name} must be a valid UUID")).with_details(json!({
            "field": name,
            "value": value,
            "code": ErrorCode::InvalidUuid.as_str(),
        }))
    })
}

pub(crate) fn parse_optional_id<T: FromStr>(
    value: Option<&str>,
    field: FieldName,
) -> Result<Option<T>, Error> {
    value.map(|raw| parse_id(raw, field)).transpose()
}

pub(crate) fn parse_status(value: Option<&str>) -> Result<Option<PostStatus>, Error> {
    value
        .map(|raw| {
            raw.parse()
                .map_err(|err: UnknownPostStatus| {
                    field_error("status", err.to_string(), ErrorCode::InvalidStatus)
                })
        })
        .transpose()
}

/// Raw `page` and `limit` query parameters.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// 1-based page number; defaults to 1.
    pub page: Option<String>,
    /// Requested page size; defaults to 10 and is clamped per listing.
    pub limit: Option<String>,
}

impl PageQuery {
    pub(crate) fn to_request(&self) -> Result<PageRequest, Error> {
        PageRequest::parse(self.page.as_deref(), self.limit.as_deref()).map_err(map_page_error)
    }
}

pub(crate) fn map_page_error(err: PageRequestError) -> Error {
    field_error(err.field().as_str(), err.to_string(), ErrorCode::InvalidPage)
}

pub(crate) fn map_credential_error(err: &CredentialValidationError) -> Error {
    field_error(err.field(), err.to_string(), ErrorCode::InvalidCredentials)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode as DomainCode;
    use crate::domain::content::PostId;
    use rstest::rstest;

    #[rstest]
    #[case(Some("0"), None, "page")]
    #[case(None, Some("abc"), "limit")]
    #[case(Some("-2"), None, "page")]
    fn malformed_pages_name_the_field(
        #[case] page: Option<&str>,
        #[case] limit: Option<&str>,
        #[case] field: &str,
    ) {
        let query = PageQuery {
            page: page.map(str::to_owned),
            limit: limit.map(str::to_owned),
        };
        let err = query.to_request().expect_err("invalid page");
        assert_eq!(err.code(), DomainCode::InvalidRequest);
        let details = err.details().expect("details");
        assert_eq!(details["field"], field);
        assert_eq!(details["code"], "invalid_page");
    }

    #[rstest]
    fn absent_page_parameters_use_defaults() {
        let request = PageQuery::default().to_request().expect("defaults");
        assert_eq!((request.page(), request.limit()), (1, 10));
    }

    #[rstest]
    fn ids_must_be_uuids() {
        let err = parse_id::<PostId>("nope", FieldName::new("id")).expect_err("bad id");
        assert_eq!(err.message(), "id must be a valid UUID");
        assert_eq!(err.details().expect("details")["value"], "nope");
    }

    #[rstest]
    #[case(Some("published"), Some(PostStatus::Published))]
    #[case(Some("Draft"), Some(PostStatus::Draft))]
    #[case(None, None)]
    fn statuses_parse_case_insensitively(
        #[case] raw: Option<&str>,
        #[case] expected: Option<PostStatus>,
    ) {
        assert_eq!(parse_status(raw).expect("valid status"), expected);
    }

    #[rstest]
    fn unknown_status_is_invalid() {
        let err = parse_status(Some("Archived")).expect_err("unknown status");
        assert_eq!(err.details().expect("details")["field"], "status");
    }
}
