//! Blog feed endpoint

use axum::{extract::State, Json};

use crate::{models::blog::BlogPost, AppState};

/// Latest blog posts; empty when the feed is unreachable
#[utoipa::path(
    get,
    path = "/blog/posts",
    tag = "blog",
    responses(
        (status = 200, description = "Latest posts", body = Vec<BlogPost>)
    )
)]
pub async fn list_posts(State(state): State<AppState>) -> Json<Vec<BlogPost>> {
    Json(state.services.blog.latest_posts().await)
}
