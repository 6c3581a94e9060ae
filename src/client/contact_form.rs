use reqwest::Method;

use crate::models::contact::{ContactRequest, MessageResponse};

use super::{ApiCall, ApiClient};

/// Contact form state: field values plus the submission request
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    submission: ApiCall<MessageResponse>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submission(&self) -> &ApiCall<MessageResponse> {
        &self.submission
    }

    /// Post the form to `/contact`. Fields are cleared only on success so the
    /// visitor can correct and resend after an error.
    pub async fn submit(&mut self, client: &ApiClient) -> bool {
        let body = ContactRequest {
            name: Some(self.name.clone()),
            email: Some(self.email.clone()),
            message: Some(self.message.clone()),
        };

        let ok = self
            .submission
            .call(client, Method::POST, "/contact", Some(&body))
            .await;
        if ok {
            self.name.clear();
            self.email.clear();
            self.message.clear();
        }
        ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::serve;
    use axum::{http::StatusCode, routing::post, Json, Router};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tokio::sync::{oneshot, Mutex};

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.name = "Ann".to_string();
        form.email = "ann@x.com".to_string();
        form.message = "Hi".to_string();
        form
    }

    #[tokio::test]
    async fn test_success_resets_fields() {
        let app = Router::new().route(
            "/api/contact",
            post(|Json(body): Json<Value>| async move {
                assert_eq!(body["name"], "Ann");
                Json(json!({ "message": "Message sent successfully" }))
            }),
        );
        let client = ApiClient::new(format!("{}/api", serve(app).await));

        let mut form = filled();
        assert!(form.submit(&client).await);
        assert!(form.name.is_empty() && form.email.is_empty() && form.message.is_empty());
        assert_eq!(
            form.submission().data().map(|d| d.message),
            Some("Message sent successfully".to_string())
        );
    }

    #[tokio::test]
    async fn test_failure_keeps_fields() {
        let app = Router::new().route(
            "/api/contact",
            post(|| async {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to process your message" })),
                )
            }),
        );
        let client = ApiClient::new(format!("{}/api", serve(app).await));

        let mut form = filled();
        assert!(!form.submit(&client).await);
        assert_eq!(form.name, "Ann");
        assert_eq!(
            form.submission().error().as_deref(),
            Some("Failed to process your message")
        );
    }

    #[tokio::test]
    async fn test_loading_observable_during_submit() {
        let (release, released) = oneshot::channel::<()>();
        let released = Arc::new(Mutex::new(Some(released)));
        let app = Router::new().route(
            "/api/contact",
            post(move || {
                let released = released.clone();
                async move {
                    if let Some(rx) = released.lock().await.take() {
                        let _ = rx.await;
                    }
                    Json(json!({ "message": "Message sent successfully" }))
                }
            }),
        );
        let client = ApiClient::new(format!("{}/api", serve(app).await));

        let mut form = filled();
        let submission = form.submission().clone();
        let mut states = submission.subscribe();

        let observer = async {
            states.wait_for(|s| s.loading).await.map(|_| ()).unwrap();
            assert!(submission.loading());
            release.send(()).unwrap();
        };
        let (ok, ()) = tokio::join!(form.submit(&client), observer);

        assert!(ok);
        assert!(!submission.loading());
        assert!(form.name.is_empty());
    }
}
