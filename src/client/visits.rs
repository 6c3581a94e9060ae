use reqwest::Method;
use serde_json::Value;
use tokio::task::JoinHandle;

use crate::models::visit::VisitRequest;

use super::ApiClient;

/// Fire-and-forget page view reporting
#[derive(Clone)]
pub struct VisitTracker {
    client: ApiClient,
}

impl VisitTracker {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Report a page view in the background. The outcome is only logged.
    pub fn record(&self, page: impl Into<String>) -> JoinHandle<()> {
        let client = self.client.clone();
        let body = VisitRequest {
            page: Some(page.into()),
        };

        tokio::spawn(async move {
            if let Err(e) = client
                .request::<_, Value>(Method::POST, "/analytics/visit", Some(&body))
                .await
            {
                tracing::debug!(error = %e, "Visit not recorded");
            }
        })
    }
}
