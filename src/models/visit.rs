//! Page visit model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::error::{AppError, AppResult};

pub const PAGE_REQUIRED: &str = "Page parameter is required";

/// Stored page view
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VisitRecord {
    pub id: Uuid,
    /// Page or section identifier
    pub page: String,
    #[sqlx(rename = "visited_at")]
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

/// Visit report sent by the browser
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct VisitRequest {
    #[validate(required, length(min = 1))]
    pub page: Option<String>,
}

/// Validated visit ready to be persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVisit {
    pub page: String,
    pub user_agent: Option<String>,
}

impl NewVisit {
    pub fn from_request(req: VisitRequest, user_agent: Option<String>) -> AppResult<Self> {
        req.validate()
            .map_err(|_| AppError::Validation(PAGE_REQUIRED.to_string()))?;

        let page = req
            .page
            .ok_or_else(|| AppError::Validation(PAGE_REQUIRED.to_string()))?;

        Ok(Self { page, user_agent })
    }
}
