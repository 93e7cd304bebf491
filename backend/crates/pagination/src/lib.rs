//! Offset pagination primitives shared by listing endpoints.
//!
//! Listings accept a 1-based `page` and a requested `limit`. Both arrive as
//! raw query text, are validated into a [`PageRequest`], and are then clamped
//! against a per-listing ceiling into a [`PageWindow`] that carries the offset
//! applied to the backing query. Results travel back to callers inside a
//! [`Page`] envelope reporting the effective (clamped) limit.

use serde::Serialize;
use thiserror::Error;

/// Page number used when the caller omits `page`.
pub const DEFAULT_PAGE: u32 = 1;

/// Page size requested when the caller omits `limit`.
pub const DEFAULT_LIMIT: u32 = 10;

/// Names the query parameter that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageField {
    /// The 1-based page number.
    Page,
    /// The requested page size.
    Limit,
}

impl PageField {
    /// Query parameter name as it appears on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Page => "page",
            Self::Limit => "limit",
        }
    }
}

impl std::fmt::Display for PageField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation failures raised while building a [`PageRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageRequestError {
    /// The parameter is not an integer.
    #[error("{field} must be a positive integer, got {value:?}")]
    NotANumber {
        /// Offending parameter.
        field: PageField,
        /// Raw text supplied by the caller.
        value: String,
    },
    /// The parameter is zero or negative.
    #[error("{field} must be a positive integer")]
    NotPositive {
        /// Offending parameter.
        field: PageField,
    },
}

impl PageRequestError {
    /// Parameter that failed validation.
    #[must_use]
    pub const fn field(&self) -> PageField {
        match self {
            Self::NotANumber { field, .. } | Self::NotPositive { field } => *field,
        }
    }
}

/// Validated page coordinates as requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    limit: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageRequest {
    /// Build a request from numeric coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`PageRequestError::NotPositive`] when either value is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use pagination::PageRequest;
    ///
    /// let request = PageRequest::new(2, 20).expect("positive coordinates");
    /// assert_eq!(request.page(), 2);
    /// assert!(PageRequest::new(0, 20).is_err());
    /// ```
    pub const fn new(page: u32, limit: u32) -> Result<Self, PageRequestError> {
        if page == 0 {
            return Err(PageRequestError::NotPositive {
                field: PageField::Page,
            });
        }
        if limit == 0 {
            return Err(PageRequestError::NotPositive {
                field: PageField::Limit,
            });
        }
        Ok(Self { page, limit })
    }

    /// Parse raw query parameters, applying [`DEFAULT_PAGE`] and
    /// [`DEFAULT_LIMIT`] to absent values.
    ///
    /// # Errors
    ///
    /// Returns [`PageRequestError::NotANumber`] for text that is not an
    /// integer and [`PageRequestError::NotPositive`] for zero or negative
    /// integers.
    pub fn parse(page: Option<&str>, limit: Option<&str>) -> Result<Self, PageRequestError> {
        let page_value = parse_field(page, PageField::Page, DEFAULT_PAGE)?;
        let limit_value = parse_field(limit, PageField::Limit, DEFAULT_LIMIT)?;
        Self::new(page_value, limit_value)
    }

    /// Requested 1-based page number.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Requested page size before clamping.
    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    /// Clamp the requested size to `max` and compute the row offset.
    ///
    /// A `max` of zero is treated as one so every window selects at least a
    /// single row.
    ///
    /// # Examples
    ///
    /// ```
    /// use pagination::PageRequest;
    ///
    /// let window = PageRequest::new(3, 100).expect("valid").clamp(15);
    /// assert_eq!(window.limit(), 15);
    /// assert_eq!(window.offset(), 30);
    /// ```
    #[must_use]
    pub fn clamp(self, max: u32) -> PageWindow {
        let limit = self.limit.min(max.max(1));
        let offset = u64::from(self.page - 1) * u64::from(limit);
        PageWindow {
            page: self.page,
            limit,
            offset,
        }
    }
}

fn parse_field(raw: Option<&str>, field: PageField, default: u32) -> Result<u32, PageRequestError> {
    let Some(text) = raw.map(str::trim) else {
        return Ok(default);
    };
    let value: i64 = text.parse().map_err(|_| PageRequestError::NotANumber {
        field,
        value: text.to_owned(),
    })?;
    if value <= 0 {
        return Err(PageRequestError::NotPositive { field });
    }
    u32::try_from(value).map_err(|_| PageRequestError::NotANumber {
        field,
        value: text.to_owned(),
    })
}

/// Effective slice of a listing after clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    page: u32,
    limit: u32,
    offset: u64,
}

impl PageWindow {
    /// 1-based page number.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Effective page size.
    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    /// Number of rows skipped before the page starts.
    #[must_use]
    pub const fn offset(&self) -> u64 {
        self.offset
    }
}

/// Page envelope returned by listing operations.
///
/// `total` counts every matching record regardless of the window, so a page
/// past the end of the listing carries an empty `data` array with the same
/// total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    /// Records in this page.
    pub data: Vec<T>,
    /// Count of all matching records.
    pub total: u64,
    /// 1-based page number.
    pub page: u32,
    /// Effective page size.
    pub limit: u32,
}

impl<T> Page<T> {
    /// Wrap `data` for the given window.
    #[must_use]
    pub const fn new(data: Vec<T>, total: u64, window: PageWindow) -> Self {
        Self {
            data,
            total,
            page: window.page,
            limit: window.limit,
        }
    }

    /// Transform every record while keeping the envelope.
    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            data: self.data.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            limit: self.limit,
        }
    }
}
