//! Client for the collector API, as used by the presentation layer.
//!
//! [`ApiCall`] keeps the three observable states of a request (loading, last
//! error, last payload) and performs exactly one network attempt per call.
//! Nothing is queued, retried or deduplicated.

mod contact_form;
mod visits;

pub use contact_form::ContactForm;
pub use visits::VisitTracker;

use reqwest::{header::CONTENT_TYPE, Method};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::watch;

use crate::{
    config::ClientConfig,
    error::{AppError, AppResult},
};

const FALLBACK_ERROR: &str = "API request failed";

/// HTTP client bound to the collector's base URL
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.api_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// One request; non-2xx responses become errors carrying the body's
    /// `error` field when there is one.
    pub async fn request<B, T>(&self, method: Method, endpoint: &str, body: Option<&B>) -> AppResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let mut request = self
            .http
            .request(method, format!("{}{}", self.base_url, endpoint))
            .header(CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Upstream(e.to_string()))?;
        let status = response.status();
        let payload: Value = response
            .json()
            .await
            .map_err(|e| AppError::Upstream(e.to_string()))?;

        if !status.is_success() {
            let message = payload
                .get("error")
                .and_then(Value::as_str)
                .unwrap_or(FALLBACK_ERROR);
            return Err(AppError::Upstream(message.to_string()));
        }

        serde_json::from_value(payload).map_err(|e| AppError::Upstream(e.to_string()))
    }
}

/// Observable state of an [`ApiCall`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestState<T> {
    pub loading: bool,
    pub error: Option<String>,
    pub data: Option<T>,
}

impl<T> Default for RequestState<T> {
    fn default() -> Self {
        Self {
            loading: false,
            error: None,
            data: None,
        }
    }
}

/// Request wrapper exposing loading / error / data.
///
/// The state lives in a `watch` channel shared by all clones, so it can be
/// read or subscribed to while a call is in flight.
#[derive(Debug, Clone)]
pub struct ApiCall<T> {
    state: Arc<watch::Sender<RequestState<T>>>,
}

impl<T> Default for ApiCall<T> {
    fn default() -> Self {
        Self {
            state: Arc::new(watch::channel(RequestState::default()).0),
        }
    }
}

impl<T: DeserializeOwned + Clone> ApiCall<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current state
    pub fn state(&self) -> RequestState<T> {
        self.state.borrow().clone()
    }

    /// Receiver notified on every state change
    pub fn subscribe(&self) -> watch::Receiver<RequestState<T>> {
        self.state.subscribe()
    }

    pub fn loading(&self) -> bool {
        self.state.borrow().loading
    }

    pub fn error(&self) -> Option<String> {
        self.state.borrow().error.clone()
    }

    pub fn data(&self) -> Option<T> {
        self.state.borrow().data.clone()
    }

    /// Perform the call and update the state. Returns whether it succeeded.
    pub async fn call<B>(&self, client: &ApiClient, method: Method, endpoint: &str, body: Option<&B>) -> bool
    where
        B: Serialize + ?Sized,
    {
        self.state.send_modify(|state| state.loading = true);

        match client.request::<B, T>(method, endpoint, body).await {
            Ok(data) => {
                self.state.send_replace(RequestState {
                    loading: false,
                    error: None,
                    data: Some(data),
                });
                true
            }
            Err(e) => {
                let message = match e {
                    AppError::Upstream(msg) => msg,
                    other => other.to_string(),
                };
                self.state.send_replace(RequestState {
                    loading: false,
                    error: Some(message),
                    data: None,
                });
                false
            }
        }
    }
}
