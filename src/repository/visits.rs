//! Page visits repository

use async_trait::async_trait;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::visit::{NewVisit, VisitRecord},
};

/// Append-only storage for page visits
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VisitStore: Send + Sync {
    /// Persist a visit; the timestamp is assigned by the store
    async fn create(&self, data: NewVisit) -> AppResult<VisitRecord>;
}

#[derive(Clone)]
pub struct VisitsRepository {
    pool: Pool<Postgres>,
}

impl VisitsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VisitStore for VisitsRepository {
    async fn create(&self, data: NewVisit) -> AppResult<VisitRecord> {
        let row = sqlx::query_as::<_, VisitRecord>(
            r#"
            INSERT INTO visits (id, page, user_agent)
            VALUES ($1, $2, $3)
            RETURNING id, page, visited_at, user_agent
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&data.page)
        .bind(&data.user_agent)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }
}
