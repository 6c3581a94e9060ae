//! Repository layer for database operations

pub mod contacts;
pub mod visits;

use sqlx::{Pool, Postgres};
use std::sync::Arc;

use crate::error::{AppError, AppResult};

pub use contacts::{ContactStore, ContactsRepository};
pub use visits::{VisitStore, VisitsRepository};

/// Main repository struct holding the collector stores
#[derive(Clone)]
pub struct Repository {
    pub pool: Option<Pool<Postgres>>,
    pub contacts: Arc<dyn ContactStore>,
    pub visits: Arc<dyn VisitStore>,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            contacts: Arc::new(ContactsRepository::new(pool.clone())),
            visits: Arc::new(VisitsRepository::new(pool.clone())),
            pool: Some(pool),
        }
    }

    /// Build a repository from arbitrary stores (no database pool attached)
    pub fn from_stores(contacts: Arc<dyn ContactStore>, visits: Arc<dyn VisitStore>) -> Self {
        Self {
            pool: None,
            contacts,
            visits,
        }
    }

    /// Round-trip to the database, if one is attached
    pub async fn ping(&self) -> AppResult<()> {
        if let Some(pool) = &self.pool {
            sqlx::query("SELECT 1")
                .execute(pool)
                .await
                .map_err(|e| AppError::Unavailable(e.to_string()))?;
        }
        Ok(())
    }
}
