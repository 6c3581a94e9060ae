//! Visit analytics service

use crate::{
    error::AppResult,
    models::visit::{NewVisit, VisitRecord},
    repository::Repository,
};

#[derive(Clone)]
pub struct VisitsService {
    repository: Repository,
}

impl VisitsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Record a page view
    pub async fn record(&self, data: NewVisit) -> AppResult<VisitRecord> {
        let visit = self.repository.visits.create(data).await?;
        tracing::debug!(page = %visit.page, "Visit recorded");
        Ok(visit)
    }
}
