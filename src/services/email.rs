//! Email service for contact form notifications

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use lettre::{
    message::{header::ContentType, Mailbox, Message, MultiPart, SinglePart},
    transport::smtp::authentication::Credentials,
    Address, SmtpTransport, Transport,
};
use std::str::FromStr;

use crate::{
    config::EmailConfig,
    error::{AppError, AppResult},
    models::contact::ContactMessage,
};

/// A rendered email waiting to be sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    /// Recipient, parsed only when the message is built
    pub to: String,
    pub subject: String,
    pub text: String,
    pub html: String,
}

/// Outbound mail transport. One attempt per call, no retries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: OutgoingEmail) -> AppResult<()>;
}

/// SMTP mailer holding a single shared transport
#[derive(Clone)]
pub struct SmtpMailer {
    transport: SmtpTransport,
    from: Mailbox,
}

impl SmtpMailer {
    pub fn new(config: &EmailConfig) -> AppResult<Self> {
        let sender = config
            .sender_address()
            .ok_or_else(|| AppError::Email("No sender address configured".to_string()))?;
        let address = Address::from_str(sender)
            .map_err(|e| AppError::Email(format!("Invalid from address: {}", e)))?;
        let from = Mailbox::new(config.smtp_from_name.clone(), address);

        let builder = if config.smtp_use_tls {
            SmtpTransport::starttls_relay(&config.smtp_host)
                .map_err(|e| AppError::Email(format!("Failed to create SMTP transport: {}", e)))?
        } else {
            SmtpTransport::builder_dangerous(&config.smtp_host)
        }
        .port(config.smtp_port);

        let builder = if let (Some(username), Some(password)) =
            (&config.smtp_username, &config.smtp_password)
        {
            builder.credentials(Credentials::new(username.clone(), password.clone()))
        } else {
            builder
        };

        Ok(Self {
            transport: builder.build(),
            from,
        })
    }

    /// Build the mailer when credentials and destination are present.
    /// Returns `None` (logged) otherwise, which degrades contact submissions
    /// to storage only.
    pub fn from_config(config: &EmailConfig) -> Option<Self> {
        if !config.is_configured() {
            tracing::error!("Email configuration missing, contact notifications disabled");
            return None;
        }

        match Self::new(config) {
            Ok(mailer) => Some(mailer),
            Err(e) => {
                tracing::error!(error = %e, "Failed to set up SMTP transport");
                None
            }
        }
    }

    fn build_message(&self, email: &OutgoingEmail) -> AppResult<Message> {
        let to = Mailbox::from_str(&email.to)
            .map_err(|e| AppError::Email(format!("Invalid to address: {}", e)))?;

        Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(email.subject.clone())
            .multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_PLAIN)
                            .body(email.text.clone()),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_HTML)
                            .body(email.html.clone()),
                    ),
            )
            .map_err(|e| AppError::Email(format!("Failed to build email: {}", e)))
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: OutgoingEmail) -> AppResult<()> {
        let message = self.build_message(&email)?;
        let transport = self.transport.clone();

        // lettre's SmtpTransport is blocking
        tokio::task::spawn_blocking(move || transport.send(&message))
            .await
            .map_err(|e| AppError::Internal(format!("Email task failed: {}", e)))?
            .map_err(|e| AppError::Email(format!("Failed to send email: {}", e)))?;

        Ok(())
    }
}

/// Notification to the site owner summarizing a submission
pub fn owner_notification(owner: &str, contact: &ContactMessage, received_at: DateTime<Utc>) -> OutgoingEmail {
    let received = received_at.format("%Y-%m-%d %H:%M:%S UTC");

    let text = format!(
        "New Contact Form Submission\n\nName: {name}\nEmail: {email}\nMessage:\n{message}\n\nReceived on: {received}\n",
        name = contact.name,
        email = contact.email,
        message = contact.message,
    );
    let html = format!(
        r#"<h2>New Contact Form Submission</h2>
<p><strong>Name:</strong> {name}</p>
<p><strong>Email:</strong> {email}</p>
<p><strong>Message:</strong></p>
<p>{message}</p>
<hr>
<p>Received on: {received}</p>"#,
        name = escape_html(&contact.name),
        email = escape_html(&contact.email),
        message = escape_html(&contact.message).replace('\n', "<br>"),
    );

    OutgoingEmail {
        to: owner.to_string(),
        subject: format!("New Portfolio Contact: {}", contact.name),
        text,
        html,
    }
}

/// Acknowledgement sent back to the submitter
pub fn submitter_acknowledgement(contact: &ContactMessage, signature: &str) -> OutgoingEmail {
    let text = format!(
        "Dear {name},\n\nI have received your message and will get back to you as soon as possible.\n\nBest regards,\n{signature}\n",
        name = contact.name,
    );
    let html = format!(
        r#"<h2>Thank you for reaching out!</h2>
<p>Dear {name},</p>
<p>I have received your message and will get back to you as soon as possible.</p>
<p>Best regards,<br>{signature}</p>"#,
        name = escape_html(&contact.name),
        signature = escape_html(signature),
    );

    OutgoingEmail {
        to: contact.email.clone(),
        subject: "Thank you for contacting me!".to_string(),
        text,
        html,
    }
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
