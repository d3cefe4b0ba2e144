//! ContentRepository trait implementation over PostgreSQL.

use crate::connection::PgPool;
use crate::models::{ContentRow, NewContentRow};
use crate::schema::content_history::dsl::{
    category, content_history, created_at, id, topic,
};
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use diesel::dsl::count_star;
use diesel::prelude::*;
use hypecast_core::{ContentCategory, GeneratedContent};
use hypecast_error::{DatabaseError, DatabaseErrorKind, HypecastError, HypecastResult};
use hypecast_interface::{ContentRepository, ContentStats, HistoryEntry};
use std::collections::BTreeMap;
use tracing::instrument;

/// Database-backed content repository.
///
/// All queries run on the blocking thread pool; the async surface only
/// coordinates. Clone freely, the pool is shared.
#[derive(Clone)]
pub struct PostgresContentRepository {
    pool: PgPool,
}

impl PostgresContentRepository {
    /// Create a repository over an existing connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn checkout(
        pool: &PgPool,
    ) -> HypecastResult<diesel::r2d2::PooledConnection<diesel::r2d2::ConnectionManager<PgConnection>>>
    {
        pool.get()
            .map_err(|e| DatabaseError::new(DatabaseErrorKind::Pool(e.to_string())).into())
    }
}

fn join_error(e: tokio::task::JoinError) -> hypecast_error::HypecastError {
    DatabaseError::new(DatabaseErrorKind::Query(e.to_string())).into()
}

fn query_error(e: diesel::result::Error) -> hypecast_error::HypecastError {
    DatabaseError::new(DatabaseErrorKind::Query(e.to_string())).into()
}

#[async_trait]
impl ContentRepository for PostgresContentRepository {
    #[instrument(skip(self, content), fields(topic = %content.topic, category = %content.category))]
    async fn save(&self, content: &GeneratedContent) -> HypecastResult<(i32, DateTime<Utc>)> {
        let new_row = NewContentRow::from_content(content);
        let pool = self.pool.clone();

        tokio::task::spawn_blocking(move || {
            let mut conn = Self::checkout(&pool)?;
            diesel::insert_into(content_history)
                .values(&new_row)
                .returning((id, created_at))
                .get_result::<(i32, DateTime<Utc>)>(&mut *conn)
                .map_err(query_error)
        })
        .await
        .map_err(join_error)?
    }

    #[instrument(skip(self))]
    async fn get(&self, content_id: i32) -> HypecastResult<GeneratedContent> {
        let pool = self.pool.clone();

        let row = tokio::task::spawn_blocking(move || {
            let mut conn = Self::checkout(&pool)?;
            content_history
                .find(content_id)
                .select(ContentRow::as_select())
                .first::<ContentRow>(&mut *conn)
                .optional()
                .map_err(query_error)?
                .ok_or_else(|| {
                    HypecastError::from(DatabaseError::new(DatabaseErrorKind::NotFound(
                        content_id,
                    )))
                })
        })
        .await
        .map_err(join_error)??;

        row.into_content()
    }

    #[instrument(skip(self))]
    async fn history(
        &self,
        limit: i64,
        filter: Option<ContentCategory>,
    ) -> HypecastResult<Vec<HistoryEntry>> {
        let pool = self.pool.clone();

        let rows = tokio::task::spawn_blocking(move || {
            let mut conn = Self::checkout(&pool)?;
            let mut query = content_history
                .select((id, topic, category, created_at))
                .order(created_at.desc())
                .limit(limit)
                .into_boxed();
            if let Some(wanted) = filter {
                query = query.filter(category.eq(wanted.as_str()));
            }
            query
                .load::<(i32, String, String, DateTime<Utc>)>(&mut *conn)
                .map_err(query_error)
        })
        .await
        .map_err(join_error)??;

        Ok(rows
            .into_iter()
            .map(|(row_id, row_topic, row_category, row_created)| HistoryEntry {
                id: row_id,
                topic: row_topic,
                category: ContentCategory::from_identifier(&row_category),
                created_at: row_created,
            })
            .collect())
    }

    #[instrument(skip(self))]
    async fn delete(&self, content_id: i32) -> HypecastResult<()> {
        let pool = self.pool.clone();

        tokio::task::spawn_blocking(move || {
            let mut conn = Self::checkout(&pool)?;
            let deleted = diesel::delete(content_history.find(content_id))
                .execute(&mut *conn)
                .map_err(query_error)?;
            if deleted == 0 {
                return Err(DatabaseError::new(DatabaseErrorKind::NotFound(content_id)).into());
            }
            Ok(())
        })
        .await
        .map_err(join_error)?
    }

    #[instrument(skip(self))]
    async fn stats(&self) -> HypecastResult<ContentStats> {
        let pool = self.pool.clone();

        tokio::task::spawn_blocking(move || {
            let mut conn = Self::checkout(&pool)?;

            let total: i64 = content_history
                .select(count_star())
                .first(&mut *conn)
                .map_err(query_error)?;

            let week_ago = Utc::now() - Duration::days(7);
            let recent: i64 = content_history
                .filter(created_at.gt(week_ago))
                .select(count_star())
                .first(&mut *conn)
                .map_err(query_error)?;

            let breakdown: Vec<(String, i64)> = content_history
                .group_by(category)
                .select((category, count_star()))
                .load(&mut *conn)
                .map_err(query_error)?;

            Ok(ContentStats {
                total_content_generated: total,
                last_7_days: recent,
                category_breakdown: breakdown.into_iter().collect::<BTreeMap<String, i64>>(),
            })
        })
        .await
        .map_err(join_error)?
    }
}
