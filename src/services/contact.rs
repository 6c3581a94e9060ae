//! Contact submission service

use chrono::Utc;
use std::sync::Arc;

use crate::{
    error::AppResult,
    models::contact::{ContactMessage, NewContactMessage},
    repository::Repository,
};

use super::email::{owner_notification, submitter_acknowledgement, Mailer};

/// What happened to the notification emails of a stored message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactOutcome {
    /// Stored and both notifications accepted by the transport
    Delivered,
    /// Stored, mail is not configured
    EmailUnavailable,
    /// Stored, at least one notification failed
    EmailFailed,
}

impl ContactOutcome {
    /// Advisory text returned to the browser
    pub fn message(&self) -> &'static str {
        match self {
            ContactOutcome::Delivered => "Message sent successfully",
            ContactOutcome::EmailUnavailable => {
                "Message saved successfully, but email notification could not be sent"
            }
            ContactOutcome::EmailFailed => {
                "Message saved successfully, but there was an issue sending email notifications"
            }
        }
    }
}

#[derive(Clone)]
struct Notifier {
    mailer: Arc<dyn Mailer>,
    owner_address: String,
    signature: String,
}

#[derive(Clone)]
pub struct ContactService {
    repository: Repository,
    notifier: Option<Notifier>,
}

impl ContactService {
    /// Notifications are sent only when both a mailer and an owner address exist
    pub fn new(
        repository: Repository,
        mailer: Option<Arc<dyn Mailer>>,
        owner_address: Option<String>,
        signature: String,
    ) -> Self {
        let notifier = match (mailer, owner_address.filter(|a| !a.is_empty())) {
            (Some(mailer), Some(owner_address)) => Some(Notifier {
                mailer,
                owner_address,
                signature,
            }),
            _ => None,
        };

        Self { repository, notifier }
    }

    /// Store a message, then attempt the two notifications once each.
    ///
    /// Only a storage failure is returned as an error; email failures are
    /// logged and reported through the outcome.
    pub async fn submit(&self, data: NewContactMessage) -> AppResult<(ContactMessage, ContactOutcome)> {
        let stored = self.repository.contacts.create(data).await?;
        tracing::info!(id = %stored.id, "Contact message stored");

        let Some(notifier) = &self.notifier else {
            tracing::error!("Email service not properly configured");
            return Ok((stored, ContactOutcome::EmailUnavailable));
        };

        let emails = [
            owner_notification(&notifier.owner_address, &stored, Utc::now()),
            submitter_acknowledgement(&stored, &notifier.signature),
        ];

        let mut failed = false;
        for email in emails {
            let to = email.to.clone();
            if let Err(e) = notifier.mailer.send(email).await {
                tracing::warn!(error = %e, to = %to, "Error sending email");
                failed = true;
            }
        }

        let outcome = if failed {
            ContactOutcome::EmailFailed
        } else {
            ContactOutcome::Delivered
        };
        Ok((stored, outcome))
    }
}
