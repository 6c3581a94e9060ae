//! Blog feed service (WordPress REST API)

use std::time::Duration;

use crate::{
    config::BlogConfig,
    error::{AppError, AppResult},
    models::blog::{BlogPost, WordPressPost},
};

#[derive(Clone)]
pub struct BlogService {
    client: reqwest::Client,
    api_url: String,
}

impl BlogService {
    pub fn new(config: BlogConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_url: config.wordpress_api_url.trim_end_matches('/').to_string(),
        })
    }

    /// Latest posts, or an empty list when the feed cannot be fetched
    pub async fn latest_posts(&self) -> Vec<BlogPost> {
        match self.fetch_posts().await {
            Ok(posts) => posts,
            Err(e) => {
                tracing::warn!(error = %e, "Error fetching blog posts");
                Vec::new()
            }
        }
    }

    async fn fetch_posts(&self) -> AppResult<Vec<BlogPost>> {
        let response = self
            .client
            .get(format!("{}/posts?_embed", self.api_url))
            .send()
            .await
            .map_err(|e| AppError::Upstream(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AppError::Upstream(format!(
                "Failed to fetch posts: HTTP {}",
                response.status()
            )));
        }

        let posts: Vec<WordPressPost> = response
            .json()
            .await
            .map_err(|e| AppError::Upstream(e.to_string()))?;

        Ok(posts.into_iter().map(BlogPost::from).collect())
    }
}
