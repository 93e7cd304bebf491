//! PostgreSQL-backed `ReplyRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::content::{CommentId, Reply, ReplyId};
use crate::domain::ports::{ReplyRepository, ReplyRepositoryError};

use super::diesel_error_mapping::port_error_mappers;
use super::models::{NewReplyRow, ReplyRow};
use super::pool::DbPool;
use super::schema::replies;

port_error_mappers!(ReplyRepositoryError);

/// Diesel-backed implementation of the `ReplyRepository` port.
#[derive(Clone)]
pub struct DieselReplyRepository {
    pool: DbPool,
}

impl DieselReplyRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReplyRepository for DieselReplyRepository {
    async fn insert(&self, reply: &Reply) -> Result<(), ReplyRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::insert_into(replies::table)
            .values(NewReplyRow::from(reply))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn find_by_id(&self, id: &ReplyId) -> Result<Option<Reply>, ReplyRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<ReplyRow> = replies::table
            .find(id.as_uuid())
            .select(ReplyRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(Reply::from))
    }

    async fn update_text(
        &self,
        id: &ReplyId,
        text: &str,
        at: DateTime<Utc>,
    ) -> Result<(), ReplyRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::update(replies::table.find(id.as_uuid()))
            .set((replies::text.eq(text), replies::updated_at.eq(at)))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn delete(&self, id: &ReplyId) -> Result<bool, ReplyRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let removed = diesel::delete(replies::table.find(id.as_uuid()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(removed > 0)
    }

    async fn delete_by_comment(&self, comment_id: &CommentId) -> Result<u64, ReplyRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let removed =
            diesel::delete(replies::table.filter(replies::comment_id.eq(comment_id.as_uuid())))
                .execute(&mut conn)
                .await
                .map_err(map_diesel_error)?;
        Ok(removed as u64)
    }
}
