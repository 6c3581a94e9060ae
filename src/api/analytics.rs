//! Page visit analytics endpoint

use axum::{
    extract::State,
    http::{header::USER_AGENT, HeaderMap},
    Json,
};

use crate::{
    error::AppResult,
    models::{
        contact::MessageResponse,
        visit::{NewVisit, VisitRequest},
    },
    AppState,
};

use super::ApiJson;

/// Record a page view
#[utoipa::path(
    post,
    path = "/analytics/visit",
    tag = "analytics",
    request_body = VisitRequest,
    responses(
        (status = 200, description = "Visit recorded", body = MessageResponse),
        (status = 400, description = "Page is missing", body = crate::error::ErrorResponse),
        (status = 500, description = "Visit could not be stored", body = crate::error::ErrorResponse)
    )
)]
pub async fn record_visit(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiJson(request): ApiJson<VisitRequest>,
) -> AppResult<Json<MessageResponse>> {
    let user_agent = headers
        .get(USER_AGENT)
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned());

    let data = NewVisit::from_request(request, user_agent)?;

    state
        .services
        .visits
        .record(data)
        .await
        .map_err(|e| e.or_generic("Failed to record visit"))?;

    Ok(Json(MessageResponse::new("Visit recorded")))
}
