use serde::{Deserialize, Serialize};

use super::post::Post;

/// Body of `POST /posts`. Never carries server-owned fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(default)]
    pub published: bool,
}

impl NewPost {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            ..Default::default()
        }
    }

    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = Some(tags.into());
        self
    }

    pub fn published(mut self, published: bool) -> Self {
        self.published = published;
        self
    }
}

/// Body of `PUT /posts/{id}`. Only present fields are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,
}

impl PostPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.summary.is_none()
            && self.author.is_none()
            && self.tags.is_none()
            && self.published.is_none()
    }

    /// Apply present fields onto `post`.
    pub fn apply_to(&self, post: &mut Post) {
        if let Some(title) = &self.title {
            post.title = title.clone();
        }
        if let Some(content) = &self.content {
            post.content = content.clone();
        }
        if let Some(summary) = &self.summary {
            post.summary = Some(summary.clone());
        }
        if let Some(author) = &self.author {
            post.author = Some(author.clone());
        }
        if let Some(tags) = &self.tags {
            post.tags = Some(tags.clone());
        }
        if let Some(published) = self.published {
            post.published = published;
        }
    }
}

/// Error body returned by the backend on 4xx/5xx responses
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiErrorBody {
    pub message: Option<String>,
    pub status: Option<u16>,
    pub error: Option<String>,
    pub timestamp: Option<String>,
    pub path: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_post_body_shape() {
        let body = NewPost::new("Hello", "World").published(true);
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"title": "Hello", "content": "World", "published": true})
        );
    }

    #[test]
    fn test_patch_only_sends_present_fields() {
        let patch = PostPatch {
            title: Some("New".into()),
            published: Some(false),
            ..Default::default()
        };
        let value = serde_json::to_value(&patch).unwrap();
        assert_eq!(value, serde_json::json!({"title": "New", "published": false}));
        assert!(PostPatch::default().is_empty());
    }

    #[test]
    fn test_patch_apply_keeps_absent_fields() {
        let mut post = Post::draft("Old", "Body");
        post.author = Some("ada".into());
        post.published = true;

        PostPatch {
            content: Some("Rewritten".into()),
            ..Default::default()
        }
        .apply_to(&mut post);

        assert_eq!(post.title, "Old");
        assert_eq!(post.content, "Rewritten");
        assert_eq!(post.author.as_deref(), Some("ada"));
        assert!(post.published);
    }

    #[test]
    fn test_error_body_tolerates_partial_json() {
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"message":"Post not found with id: 9","status":404}"#)
                .unwrap();
        assert_eq!(body.status, Some(404));
        assert_eq!(body.error, None);
    }
}
