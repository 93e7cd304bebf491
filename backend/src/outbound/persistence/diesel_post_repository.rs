//! PostgreSQL-backed `PostRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::PgTextExpressionMethods;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::sql_types::Bool;
use diesel_async::RunQueryDsl;
use pagination::PageWindow;

use crate::domain::content::{CategoryId, Post, PostFilter, PostId, PostStatus};
use crate::domain::ports::{PostRepository, PostRepositoryError};

use super::diesel_error_mapping::port_error_mappers;
use super::models::{NewPostRow, PostContentUpdate, PostRow};
use super::pool::DbPool;
use super::schema::posts;

port_error_mappers!(PostRepositoryError);

type PostPredicate = Box<dyn BoxableExpression<posts::table, Pg, SqlType = Bool>>;

/// Escape `LIKE` metacharacters so the term matches literally.
pub(crate) fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped.push('%');
    escaped
}

fn listed_predicate(filter: &PostFilter) -> PostPredicate {
    let listed = posts::status
        .eq(PostStatus::Published.as_str())
        .and(posts::is_active.eq(true));
    match filter.title_term() {
        Some(term) => Box::new(listed.and(posts::title.ilike(like_pattern(term)))),
        None => Box::new(listed),
    }
}

fn sql_window(window: PageWindow) -> (i64, i64) {
    let offset = i64::try_from(window.offset()).unwrap_or(i64::MAX);
    (offset, i64::from(window.limit()))
}

/// Diesel-backed implementation of the `PostRepository` port.
#[derive(Clone)]
pub struct DieselPostRepository {
    pool: DbPool,
}

impl DieselPostRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for DieselPostRepository {
    async fn insert(&self, post: &Post) -> Result<(), PostRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::insert_into(posts::table)
            .values(NewPostRow::from(post))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn find_by_id(&self, id: &PostId) -> Result<Option<Post>, PostRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<PostRow> = posts::table
            .find(id.as_uuid())
            .select(PostRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(Post::from))
    }

    async fn update_content(&self, post: &Post) -> Result<(), PostRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::update(posts::table.find(post.id.as_uuid()))
            .set(PostContentUpdate::from(post))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn set_category(
        &self,
        id: &PostId,
        category: Option<CategoryId>,
        at: DateTime<Utc>,
    ) -> Result<(), PostRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::update(posts::table.find(id.as_uuid()))
            .set((
                posts::category_id.eq(category.map(uuid::Uuid::from)),
                posts::updated_at.eq(at),
            ))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn find_by_category(
        &self,
        category_id: &CategoryId,
    ) -> Result<Vec<Post>, PostRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<PostRow> = posts::table
            .filter(posts::category_id.eq(Some(*category_id.as_uuid())))
            .select(PostRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(Post::from).collect())
    }

    async fn mark_deleted(
        &self,
        id: &PostId,
        at: DateTime<Utc>,
    ) -> Result<(), PostRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::update(posts::table.find(id.as_uuid()))
            .set((
                posts::deleted_at.eq(Some(at)),
                posts::is_active.eq(false),
                posts::updated_at.eq(at),
            ))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn find_listed(
        &self,
        filter: &PostFilter,
        window: Option<PageWindow>,
    ) -> Result<Vec<Post>, PostRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let mut query = posts::table
            .into_boxed()
            .filter(listed_predicate(filter))
            .order((posts::created_at.desc(), posts::id.desc()))
            .select(PostRow::as_select());
        if let Some(window) = window {
            let (offset, limit) = sql_window(window);
            query = query.offset(offset).limit(limit);
        }
        let rows: Vec<PostRow> = query.load(&mut conn).await.map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(Post::from).collect())
    }

    async fn count_listed(&self, filter: &PostFilter) -> Result<u64, PostRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let total: i64 = posts::table
            .filter(listed_predicate(filter))
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(u64::try_from(total).unwrap_or_default())
    }
}
