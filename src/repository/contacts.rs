//! Contact messages repository

use async_trait::async_trait;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::contact::{ContactMessage, NewContactMessage},
};

/// Append-only storage for contact messages
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// Persist a message; `created_at` is assigned by the store
    async fn create(&self, data: NewContactMessage) -> AppResult<ContactMessage>;
}

#[derive(Clone)]
pub struct ContactsRepository {
    pool: Pool<Postgres>,
}

impl ContactsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactStore for ContactsRepository {
    async fn create(&self, data: NewContactMessage) -> AppResult<ContactMessage> {
        let row = sqlx::query_as::<_, ContactMessage>(
            r#"
            INSERT INTO contact_messages (id, name, email, message)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, message, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.message)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }
}
