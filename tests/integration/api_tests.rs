//! API integration tests against a running server

use portfolio_server::client::{ApiClient, ContactForm};
use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:3000/api";

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_ready() {
    let client = Client::new();

    let response = client
        .get(format!("{}/ready", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
}

#[tokio::test]
#[ignore]
async fn test_contact_submission() {
    let client = Client::new();

    let response = client
        .post(format!("{}/contact", BASE_URL))
        .json(&json!({
            "name": "Integration Test",
            "email": "integration@example.com",
            "message": "Hello from the test suite"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["message"].as_str().unwrap().starts_with("Message"));
}

#[tokio::test]
#[ignore]
async fn test_contact_missing_fields() {
    let client = Client::new();

    let response = client
        .post(format!("{}/contact", BASE_URL))
        .json(&json!({ "name": "Integration Test" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "All fields are required");
}

#[tokio::test]
#[ignore]
async fn test_record_visit() {
    let client = Client::new();

    let response = client
        .post(format!("{}/analytics/visit", BASE_URL))
        .header("User-Agent", "portfolio-integration-tests")
        .json(&json!({ "page": "home" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Visit recorded");
}

#[tokio::test]
#[ignore]
async fn test_record_visit_missing_page() {
    let client = Client::new();

    let response = client
        .post(format!("{}/analytics/visit", BASE_URL))
        .json(&json!({}))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_blog_posts_always_a_list() {
    let client = Client::new();

    let response = client
        .get(format!("{}/blog/posts", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body.is_array());
}

#[tokio::test]
#[ignore]
async fn test_contact_form_client() {
    let api = ApiClient::new(BASE_URL);
    let mut form = ContactForm::new();
    form.name = "Form Client".to_string();
    form.email = "form@example.com".to_string();
    form.message = "Sent through ContactForm".to_string();

    assert!(form.submit(&api).await, "error: {:?}", form.submission().error());
    assert!(form.name.is_empty());
}
