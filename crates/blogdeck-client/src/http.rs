use std::time::Duration;

use blogdeck_types::{ApiErrorBody, NewPost, Post, PostId, PostPatch, SearchField};
use reqwest::{RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::api::{PostsApi, ensure_query};
use crate::config::ApiConfig;
use crate::error::{Error, Result};

/// `PostsApi` over HTTP/JSON.
///
/// No authentication headers are sent. Without a configured timeout the
/// reqwest default applies.
#[derive(Debug, Clone)]
pub struct HttpClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::build(base_url.into(), None)
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        Self::build(
            config.base_url().to_string(),
            config.timeout_secs.map(Duration::from_secs),
        )
    }

    /// Same client, different base URL (flag/env override).
    pub fn with_base_url(config: &ApiConfig, base_url: impl Into<String>) -> Result<Self> {
        Self::build(base_url.into(), config.timeout_secs.map(Duration::from_secs))
    }

    fn build(base_url: String, timeout: Option<Duration>) -> Result<Self> {
        let parsed = Url::parse(&base_url)
            .map_err(|e| Error::Config(format!("invalid base URL '{}': {}", base_url, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "base URL must be http or https: {}",
                base_url
            )));
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send_json<T: DeserializeOwned>(&self, op: &'static str, req: RequestBuilder) -> Result<T> {
        let response = self.dispatch(op, req).await?;
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| {
            tracing::warn!(op, error = %e, "could not decode response body");
            Error::Decode(e)
        })
    }

    async fn dispatch(&self, op: &'static str, req: RequestBuilder) -> Result<reqwest::Response> {
        let response = req
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(op, error = %e, "request failed");
                Error::Transport(e)
            })?;

        let status = response.status();
        tracing::debug!(op, status = status.as_u16(), url = %response.url(), "response");

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let err = error_from_status(status, &body);
        tracing::warn!(op, status = status.as_u16(), error = %err, "backend rejected request");
        Err(err)
    }
}

/// Map a failed response to `Error`, preferring the backend's own message.
fn error_from_status(status: StatusCode, body: &str) -> Error {
    let message = serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string()
        });

    if status == StatusCode::NOT_FOUND {
        Error::NotFound(message)
    } else {
        Error::Api {
            status: status.as_u16(),
            message,
        }
    }
}

impl PostsApi for HttpClient {
    async fn get_all_posts(&self) -> Result<Vec<Post>> {
        self.send_json("get_all_posts", self.http.get(self.url("/posts")))
            .await
    }

    async fn get_published_posts(&self) -> Result<Vec<Post>> {
        self.send_json(
            "get_published_posts",
            self.http.get(self.url("/posts/published")),
        )
        .await
    }

    async fn get_post_by_id(&self, id: PostId) -> Result<Post> {
        self.send_json(
            "get_post_by_id",
            self.http.get(self.url(&format!("/posts/{}/view", id))),
        )
        .await
    }

    async fn create_post(&self, post: &NewPost) -> Result<Post> {
        self.send_json("create_post", self.http.post(self.url("/posts")).json(post))
            .await
    }

    async fn update_post(&self, id: PostId, patch: &PostPatch) -> Result<Post> {
        self.send_json(
            "update_post",
            self.http
                .put(self.url(&format!("/posts/{}", id)))
                .json(patch),
        )
        .await
    }

    async fn delete_post(&self, id: PostId) -> Result<()> {
        self.dispatch(
            "delete_post",
            self.http.delete(self.url(&format!("/posts/{}", id))),
        )
        .await?;
        Ok(())
    }

    async fn toggle_publish(&self, id: PostId) -> Result<Post> {
        self.send_json(
            "toggle_publish",
            self.http.put(self.url(&format!("/posts/{}/publish", id))),
        )
        .await
    }

    async fn search(&self, field: SearchField, query: &str) -> Result<Vec<Post>> {
        ensure_query(field, query)?;
        self.send_json(
            "search",
            self.http
                .get(self.url(&format!("/posts/search/{}", field)))
                .query(&[("q", query)]),
        )
        .await
    }

    async fn get_total_posts_count(&self) -> Result<u64> {
        self.send_json(
            "get_total_posts_count",
            self.http.get(self.url("/posts/analytics/total")),
        )
        .await
    }

    async fn get_published_posts_count(&self) -> Result<u64> {
        self.send_json(
            "get_published_posts_count",
            self.http.get(self.url("/posts/analytics/published")),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_normalised() {
        let client = HttpClient::new("http://localhost:8888/api/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8888/api");
        assert_eq!(client.url("/posts"), "http://localhost:8888/api/posts");
    }

    #[test]
    fn test_rejects_invalid_base_url() {
        assert!(matches!(HttpClient::new("not a url"), Err(Error::Config(_))));
        assert!(matches!(
            HttpClient::new("ftp://example.com"),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_error_body_message_is_used() {
        let body = r#"{"message":"Title is required","status":400,"error":"Validation Error"}"#;
        match error_from_status(StatusCode::BAD_REQUEST, body) {
            Error::Api { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Title is required");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_404_maps_to_not_found() {
        let err = error_from_status(StatusCode::NOT_FOUND, "");
        assert!(err.is_not_found());
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_non_json_error_body_falls_back_to_reason() {
        match error_from_status(StatusCode::INTERNAL_SERVER_ERROR, "<html>boom</html>") {
            Error::Api { message, .. } => assert_eq!(message, "Internal Server Error"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_blank_search_is_never_sent() {
        // Port 9 (discard) would fail at transport level if a request went out.
        let client = HttpClient::new("http://127.0.0.1:9/api").unwrap();
        let err = client.search_by_title("   ").await.unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }
}
