//! Business logic services

pub mod blog;
pub mod contact;
pub mod email;
pub mod visits;

use std::sync::Arc;

use crate::{
    config::{BlogConfig, EmailConfig},
    error::AppResult,
    repository::Repository,
};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub contact: contact::ContactService,
    pub visits: visits::VisitsService,
    pub blog: blog::BlogService,
    repository: Repository,
}

impl Services {
    /// Create all services with the given repository.
    ///
    /// `mailer` is `None` when outbound email is not configured.
    pub fn new(
        repository: Repository,
        mailer: Option<Arc<dyn email::Mailer>>,
        email_config: &EmailConfig,
        blog_config: BlogConfig,
    ) -> AppResult<Self> {
        Ok(Self {
            contact: contact::ContactService::new(
                repository.clone(),
                mailer,
                email_config.contact_email.clone(),
                email_config.signature.clone(),
            ),
            visits: visits::VisitsService::new(repository.clone()),
            blog: blog::BlogService::new(blog_config)?,
            repository,
        })
    }

    /// Check that the backing store is reachable
    pub async fn ping(&self) -> AppResult<()> {
        self.repository.ping().await
    }
}
