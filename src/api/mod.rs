//! API handlers for the collector REST endpoints

pub mod analytics;
pub mod blog;
pub mod contact;
pub mod health;
pub mod openapi;

use std::path::Path;

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header::CONTENT_TYPE, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde::de::DeserializeOwned;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::{
    error::{AppError, ErrorResponse},
    AppState,
};

/// JSON body extractor reporting rejections as `{"error": ...}`.
///
/// A body sent without a JSON content type, or an empty JSON body, is read as
/// an empty object, so the handler answers with its usual required-field
/// error.
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(is_json_content_type);
        if !is_json {
            return Ok(ApiJson(T::default()));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(ApiJson(T::default()));
        }

        Json::<T>::from_bytes(&bytes)
            .map(|Json(value)| ApiJson(value))
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
    }
}

/// `application/json` or any `application/*+json`, parameters ignored
fn is_json_content_type(value: &str) -> bool {
    let essence = value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

/// Create the application router: API under `/api`, the presentation
/// bundle everywhere else.
pub fn router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let static_dir = state.config.server.static_dir.clone();

    let api = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Collector
        .route("/contact", post(contact::submit_contact))
        .route("/analytics/visit", post(analytics::record_visit))
        // Blog feed
        .route("/blog/posts", get(blog::list_posts))
        .fallback(api_not_found)
        .with_state(state);

    // Unknown paths fall back to index.html for client-side routing
    let bundle = ServeDir::new(&static_dir)
        .fallback(ServeFile::new(Path::new(&static_dir).join("index.html")));

    Router::new()
        .nest("/api", api)
        .merge(openapi::create_openapi_router())
        .fallback_service(bundle)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

async fn api_not_found() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Not found".to_string(),
        }),
    )
}
