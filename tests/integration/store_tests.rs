//! Repository tests against a real PostgreSQL database
//!
//! Run with: DATABASE_URL=postgres://... cargo test --test store_tests -- --ignored

use portfolio_server::{
    models::{NewContactMessage, NewVisit},
    repository::{ContactStore, ContactsRepository, VisitStore, VisitsRepository},
    AppError,
};
use sqlx::{postgres::PgPoolOptions, PgPool};

async fn pool() -> PgPool {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .expect("Failed to connect to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

#[tokio::test]
#[ignore]
async fn test_contact_insert_returns_stored_row() {
    let pool = pool().await;
    let repo = ContactsRepository::new(pool.clone());

    let stored = repo
        .create(NewContactMessage {
            name: "Store Test".to_string(),
            email: "store@example.com".to_string(),
            message: "Persisted through sqlx".to_string(),
        })
        .await
        .expect("Failed to insert contact message");

    assert_eq!(stored.name, "Store Test");
    assert_eq!(stored.email, "store@example.com");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM contact_messages WHERE id = $1")
        .bind(stored.id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
#[ignore]
async fn test_contact_empty_field_rejected_by_schema() {
    let repo = ContactsRepository::new(pool().await);

    let result = repo
        .create(NewContactMessage {
            name: String::new(),
            email: "store@example.com".to_string(),
            message: "Hi".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AppError::Database(_))));
}

#[tokio::test]
#[ignore]
async fn test_visit_insert_maps_timestamp_and_user_agent() {
    let repo = VisitsRepository::new(pool().await);

    let with_agent = repo
        .create(NewVisit {
            page: "hero".to_string(),
            user_agent: Some("Mozilla/5.0 (Größe)".to_string()),
        })
        .await
        .expect("Failed to insert visit");
    assert_eq!(with_agent.page, "hero");
    assert_eq!(with_agent.user_agent.as_deref(), Some("Mozilla/5.0 (Größe)"));

    let without_agent = repo
        .create(NewVisit {
            page: "tools".to_string(),
            user_agent: None,
        })
        .await
        .expect("Failed to insert visit");
    assert!(without_agent.user_agent.is_none());
}

#[tokio::test]
#[ignore]
async fn test_visit_empty_page_rejected_by_schema() {
    let repo = VisitsRepository::new(pool().await);

    let result = repo
        .create(NewVisit {
            page: String::new(),
            user_agent: None,
        })
        .await;

    assert!(matches!(result, Err(AppError::Database(_))));
}
