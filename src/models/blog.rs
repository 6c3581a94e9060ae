//! Blog feed models

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Post as returned by the WordPress REST API (`/posts?_embed`)
#[derive(Debug, Clone, Deserialize)]
pub struct WordPressPost {
    pub id: i64,
    pub title: Rendered,
    pub excerpt: Rendered,
    pub date: String,
    pub link: String,
    #[serde(rename = "_embedded", default)]
    pub embedded: Option<Embedded>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Rendered {
    pub rendered: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Embedded {
    #[serde(rename = "wp:featuredmedia", default)]
    pub featured_media: Vec<FeaturedMedia>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeaturedMedia {
    pub source_url: Option<String>,
}

/// Post summary served to the blog section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: i64,
    pub title: String,
    /// Rendered HTML excerpt
    pub excerpt: String,
    pub date: String,
    pub link: String,
    pub featured_image: Option<String>,
}

impl From<WordPressPost> for BlogPost {
    fn from(post: WordPressPost) -> Self {
        let featured_image = post
            .embedded
            .and_then(|e| e.featured_media.into_iter().next())
            .and_then(|m| m.source_url);

        Self {
            id: post.id,
            title: post.title.rendered,
            excerpt: post.excerpt.rendered,
            date: post.date,
            link: post.link,
            featured_image,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wordpress_post_with_featured_media() {
        let raw = r#"{
            "id": 42,
            "title": {"rendered": "Shipping a portfolio"},
            "excerpt": {"rendered": "<p>Notes</p>"},
            "date": "2024-03-01T10:00:00",
            "link": "https://shrilogs.wordpress.com/2024/03/01/shipping",
            "status": "publish",
            "_embedded": {
                "wp:featuredmedia": [{"source_url": "https://img.example/cover.png"}]
            }
        }"#;

        let post: BlogPost = serde_json::from_str::<WordPressPost>(raw).unwrap().into();
        assert_eq!(post.id, 42);
        assert_eq!(post.title, "Shipping a portfolio");
        assert_eq!(post.featured_image.as_deref(), Some("https://img.example/cover.png"));
    }

    #[test]
    fn test_wordpress_post_without_embeds() {
        let raw = r#"{
            "id": 7,
            "title": {"rendered": "Draft"},
            "excerpt": {"rendered": ""},
            "date": "2024-01-01T00:00:00",
            "link": "https://shrilogs.wordpress.com/?p=7"
        }"#;

        let post: BlogPost = serde_json::from_str::<WordPressPost>(raw).unwrap().into();
        assert_eq!(post.featured_image, None);
    }
}
