//! Contact message model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::error::{AppError, AppResult};

pub const FIELDS_REQUIRED: &str = "All fields are required";

/// Stored contact form submission
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: Uuid,
    pub name: String,
    /// Stored as given, never format-checked
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Contact form submission as received from the browser.
///
/// Every field is optional at the wire level so that a missing, `null` or
/// empty value is reported as a validation failure rather than a parse error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct ContactRequest {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    #[validate(required, length(min = 1))]
    pub email: Option<String>,
    #[validate(required, length(min = 1))]
    pub message: Option<String>,
}

/// Validated contact message ready to be persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl TryFrom<ContactRequest> for NewContactMessage {
    type Error = AppError;

    fn try_from(req: ContactRequest) -> AppResult<Self> {
        req.validate()
            .map_err(|_| AppError::Validation(FIELDS_REQUIRED.to_string()))?;

        match (req.name, req.email, req.message) {
            (Some(name), Some(email), Some(message)) => Ok(Self { name, email, message }),
            _ => Err(AppError::Validation(FIELDS_REQUIRED.to_string())),
        }
    }
}

/// Success body shared by the collector endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}
