//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{analytics, blog, contact, health};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio Collector API",
        version = "1.0.0",
        description = "Contact messages, visit analytics and blog feed for the portfolio site",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "/api", description = "Collector API")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Collector
        contact::submit_contact,
        analytics::record_visit,
        // Blog
        blog::list_posts,
    ),
    components(
        schemas(
            crate::models::contact::ContactRequest,
            crate::models::contact::ContactMessage,
            crate::models::contact::MessageResponse,
            crate::models::visit::VisitRequest,
            crate::models::visit::VisitRecord,
            crate::models::blog::BlogPost,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "contact", description = "Contact form submissions"),
        (name = "analytics", description = "Page visit analytics"),
        (name = "blog", description = "Blog feed")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
