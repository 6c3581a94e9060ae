//! Portfolio collector
//!
//! Backend for a personal portfolio site: stores contact-form submissions and
//! page-visit analytics in PostgreSQL, relays email notifications, proxies
//! the blog feed and serves the built front-end bundle.

use std::sync::Arc;

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

#[cfg(test)]
pub(crate) mod test_util;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
