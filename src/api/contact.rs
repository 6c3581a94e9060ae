//! Contact form endpoint

use axum::{extract::State, Json};

use crate::{
    error::AppResult,
    models::contact::{ContactRequest, MessageResponse, NewContactMessage},
    AppState,
};

use super::ApiJson;

/// Store a contact message and notify by email when configured
#[utoipa::path(
    post,
    path = "/contact",
    tag = "contact",
    request_body = ContactRequest,
    responses(
        (status = 200, description = "Message stored, possibly with an email advisory", body = MessageResponse),
        (status = 400, description = "A required field is missing", body = crate::error::ErrorResponse),
        (status = 500, description = "Message could not be stored", body = crate::error::ErrorResponse)
    )
)]
pub async fn submit_contact(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<ContactRequest>,
) -> AppResult<Json<MessageResponse>> {
    let data = NewContactMessage::try_from(request)?;

    let (_, outcome) = state
        .services
        .contact
        .submit(data)
        .await
        .map_err(|e| e.or_generic("Failed to process your message"))?;

    Ok(Json(MessageResponse::new(outcome.message())))
}
