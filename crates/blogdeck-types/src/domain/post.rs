use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::util::{split_tags, timestamp};

/// Backend-assigned post identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(i64);

impl PostId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for PostId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl FromStr for PostId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_start_matches('#');
        match trimmed.parse::<i64>() {
            Ok(id) if id > 0 => Ok(Self(id)),
            _ => Err(Error::InvalidPostId(s.to_string())),
        }
    }
}

/// A blog post as exchanged with the backend.
///
/// `id`, `created_at`, `updated_at` and `view_count` are owned by the server:
/// a post without an `id` has never been persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PostId>,

    pub title: String,

    pub content: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,

    #[serde(
        default,
        with = "timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<NaiveDateTime>,

    #[serde(
        default,
        with = "timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<NaiveDateTime>,

    #[serde(default)]
    pub published: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view_count: Option<u64>,
}

impl Post {
    /// Unsaved draft with the two required fields.
    pub fn draft(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            content: content.into(),
            summary: None,
            author: None,
            tags: None,
            created_at: None,
            updated_at: None,
            published: false,
            view_count: None,
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    pub fn views(&self) -> u64 {
        self.view_count.unwrap_or(0)
    }

    pub fn author_or_anonymous(&self) -> &str {
        match self.author.as_deref().map(str::trim) {
            Some(author) if !author.is_empty() => author,
            _ => "Anonymous",
        }
    }

    /// Tag labels, split on commas and trimmed
    pub fn tag_list(&self) -> Vec<&str> {
        self.tags.as_deref().map(split_tags).unwrap_or_default()
    }

    pub fn summary_text(&self) -> Option<&str> {
        self.summary
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_id_parse() {
        assert_eq!("42".parse::<PostId>().unwrap(), PostId::new(42));
        assert_eq!(" #7 ".parse::<PostId>().unwrap(), PostId::new(7));
        assert!("0".parse::<PostId>().is_err());
        assert!("-3".parse::<PostId>().is_err());
        assert!("abc".parse::<PostId>().is_err());
    }

    #[test]
    fn test_deserialize_backend_payload() {
        let json = r#"{
            "id": 5,
            "title": "Hello",
            "content": "World",
            "summary": null,
            "author": "ada",
            "tags": "rust, cli ,,tui",
            "createdAt": "2024-03-01T10:15:30.123456",
            "updatedAt": "2024-03-02T08:00:00",
            "published": true,
            "viewCount": 3
        }"#;

        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.id, Some(PostId::new(5)));
        assert_eq!(post.summary, None);
        assert_eq!(post.views(), 3);
        assert_eq!(post.tag_list(), vec!["rust", "cli", "tui"]);
        assert!(post.created_at.is_some());
        assert!(post.published);
    }

    #[test]
    fn test_minimal_payload_defaults() {
        let post: Post = serde_json::from_str(r#"{"title":"t","content":"c"}"#).unwrap();
        assert!(!post.is_persisted());
        assert!(!post.published);
        assert_eq!(post.views(), 0);
        assert_eq!(post.author_or_anonymous(), "Anonymous");
        assert!(post.tag_list().is_empty());
    }

    #[test]
    fn test_serialize_omits_server_fields_when_absent() {
        let post = Post::draft("Hello", "World");
        let value = serde_json::to_value(&post).unwrap();
        assert!(value.get("id").is_none());
        assert!(value.get("viewCount").is_none());
        assert!(value.get("createdAt").is_none());
        assert_eq!(value["published"], false);
    }

    #[test]
    fn test_blank_author_is_anonymous() {
        let mut post = Post::draft("t", "c");
        post.author = Some("   ".to_string());
        assert_eq!(post.author_or_anonymous(), "Anonymous");
    }
}
