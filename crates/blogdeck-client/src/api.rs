use std::future::Future;

use blogdeck_types::{NewPost, Post, PostId, PostPatch, SearchField};

use crate::error::{Error, Result};

/// The posts backend as a capability.
///
/// `HttpClient` talks to the real REST API; `InMemoryBackend` implements the
/// same contract for tests and the demo mode. Every method reports failure
/// through `Err`; nothing is retried.
pub trait PostsApi: Send + Sync {
    /// `GET /posts`
    fn get_all_posts(&self) -> impl Future<Output = Result<Vec<Post>>> + Send;

    /// `GET /posts/published`
    fn get_published_posts(&self) -> impl Future<Output = Result<Vec<Post>>> + Send;

    /// `GET /posts/{id}/view`
    ///
    /// Increments the post's view count on the backend before returning it.
    fn get_post_by_id(&self, id: PostId) -> impl Future<Output = Result<Post>> + Send;

    /// `POST /posts`
    fn create_post(&self, post: &NewPost) -> impl Future<Output = Result<Post>> + Send;

    /// `PUT /posts/{id}`
    fn update_post(
        &self,
        id: PostId,
        patch: &PostPatch,
    ) -> impl Future<Output = Result<Post>> + Send;

    /// `DELETE /posts/{id}`
    fn delete_post(&self, id: PostId) -> impl Future<Output = Result<()>> + Send;

    /// `PUT /posts/{id}/publish`
    fn toggle_publish(&self, id: PostId) -> impl Future<Output = Result<Post>> + Send;

    /// `GET /posts/search/{field}?q=`
    ///
    /// Blank queries are rejected with `Error::InvalidInput` and never sent.
    fn search(
        &self,
        field: SearchField,
        query: &str,
    ) -> impl Future<Output = Result<Vec<Post>>> + Send;

    /// `GET /posts/analytics/total`
    fn get_total_posts_count(&self) -> impl Future<Output = Result<u64>> + Send;

    /// `GET /posts/analytics/published`
    fn get_published_posts_count(&self) -> impl Future<Output = Result<u64>> + Send;

    fn search_by_title(&self, query: &str) -> impl Future<Output = Result<Vec<Post>>> + Send {
        self.search(SearchField::Title, query)
    }

    fn search_by_content(&self, query: &str) -> impl Future<Output = Result<Vec<Post>>> + Send {
        self.search(SearchField::Content, query)
    }

    fn search_by_tags(&self, query: &str) -> impl Future<Output = Result<Vec<Post>>> + Send {
        self.search(SearchField::Tags, query)
    }
}

pub(crate) fn ensure_query(field: SearchField, query: &str) -> Result<()> {
    if query.trim().is_empty() {
        return Err(Error::InvalidInput(format!(
            "search {} query cannot be empty",
            field
        )));
    }
    Ok(())
}
