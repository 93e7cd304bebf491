//! Diesel and pool error mapping shared by every repository adapter.
//!
//! Each port error enum exposes `connection` and `query` constructors; the
//! [`port_error_mappers!`] macro wires those into `map_pool_error` and
//! `map_diesel_error` functions local to the adapter module.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use super::pool::PoolError;

/// Extract the message carried by a pool error.
pub(crate) fn pool_error_message(error: PoolError) -> String {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    }
}

/// Classified Diesel failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum DieselFailure {
    /// The connection dropped mid-operation.
    Connection(&'static str),
    /// A unique constraint rejected the write.
    UniqueViolation,
    /// Any other query failure.
    Query(&'static str),
}

/// Classify a Diesel error, logging the driver detail at debug level.
pub(crate) fn classify_diesel_error(error: &DieselError) -> DieselFailure {
    match error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => DieselFailure::Query("record not found"),
        DieselError::QueryBuilderError(_) => DieselFailure::Query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            DieselFailure::Connection("database connection error")
        }
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            DieselFailure::UniqueViolation
        }
        _ => DieselFailure::Query("database error"),
    }
}

/// Generate `map_pool_error` and `map_diesel_error` for a port error type
/// with `connection` and `query` constructors.
macro_rules! port_error_mappers {
    ($error:ty) => {
        fn map_pool_error(error: $crate::outbound::persistence::pool::PoolError) -> $error {
            <$error>::connection(
                $crate::outbound::persistence::diesel_error_mapping::pool_error_message(error),
            )
        }

        fn map_diesel_error(error: ::diesel::result::Error) -> $error {
            use $crate::outbound::persistence::diesel_error_mapping::{
                DieselFailure, classify_diesel_error,
            };
            match classify_diesel_error(&error) {
                DieselFailure::Connection(message) => <$error>::connection(message),
                DieselFailure::UniqueViolation => <$error>::query("unique constraint violated"),
                DieselFailure::Query(message) => <$error>::query(message),
            }
        }
    };
}

pub(crate) use port_error_mappers;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(DieselError::NotFound, DieselFailure::Query("record not found"))]
    #[case(DieselError::RollbackTransaction, DieselFailure::Query("database error"))]
    fn diesel_errors_classify(#[case] error: DieselError, #[case] expected: DieselFailure) {
        assert_eq!(classify_diesel_error(&error), expected);
    }

    #[rstest]
    fn pool_errors_keep_their_message() {
        assert_eq!(
            pool_error_message(PoolError::checkout("connection refused")),
            "connection refused"
        );
    }
}
