//! PostgreSQL-backed `UserAccountRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::UserAccount;
use crate::domain::ports::{UserAccountRepository, UserAccountRepositoryError};

use super::diesel_error_mapping::{DieselFailure, classify_diesel_error, pool_error_message};
use super::models::{NewUserRow, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::users;

fn map_pool_error(error: PoolError) -> UserAccountRepositoryError {
    UserAccountRepositoryError::connection(pool_error_message(error))
}

/// Map Diesel errors, reporting unique violations against `email`.
fn map_insert_error(error: &diesel::result::Error, email: &str) -> UserAccountRepositoryError {
    match classify_diesel_error(error) {
        DieselFailure::UniqueViolation => UserAccountRepositoryError::duplicate_email(email),
        DieselFailure::Connection(message) => UserAccountRepositoryError::connection(message),
        DieselFailure::Query(message) => UserAccountRepositoryError::query(message),
    }
}

fn map_diesel_error(error: diesel::result::Error) -> UserAccountRepositoryError {
    match classify_diesel_error(&error) {
        DieselFailure::Connection(message) => UserAccountRepositoryError::connection(message),
        DieselFailure::UniqueViolation => {
            UserAccountRepositoryError::query("unique constraint violated")
        }
        DieselFailure::Query(message) => UserAccountRepositoryError::query(message),
    }
}

/// Diesel-backed implementation of the `UserAccountRepository` port.
#[derive(Clone)]
pub struct DieselUserAccountRepository {
    pool: DbPool,
}

impl DieselUserAccountRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserAccountRepository for DieselUserAccountRepository {
    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserAccount>, UserAccountRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<UserRow> = users::table
            .filter(users::email.eq(email))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(UserAccount::from))
    }

    async fn insert(&self, account: &UserAccount) -> Result<(), UserAccountRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::insert_into(users::table)
            .values(NewUserRow::from(account))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|err| map_insert_error(&err, &account.email))
    }
}
