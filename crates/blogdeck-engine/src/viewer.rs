use blogdeck_client::PostsApi;
use blogdeck_types::{Post, PostId};

/// Single-post view.
///
/// Fetching by id bumps the backend view count, so the post is fetched once
/// per target. Re-rendering the same target never fetches again; only
/// [`PostViewer::reload`] or a new target does.
#[derive(Debug, Clone, PartialEq)]
pub struct PostViewer {
    target: PostId,
    post: Option<Post>,
    fetched_for: Option<PostId>,
    loading: bool,
    confirming_delete: bool,
    error: Option<String>,
}

impl PostViewer {
    pub fn new(target: PostId) -> Self {
        Self {
            target,
            post: None,
            fetched_for: None,
            loading: false,
            confirming_delete: false,
            error: None,
        }
    }

    pub fn target(&self) -> PostId {
        self.target
    }

    pub fn post(&self) -> Option<&Post> {
        self.post.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_confirming_delete(&self) -> bool {
        self.confirming_delete
    }

    /// Load failure, shown in place of the post
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn needs_fetch(&self) -> bool {
        self.fetched_for != Some(self.target)
    }

    /// Point the viewer at another post. Same target is a no-op.
    pub fn retarget(&mut self, target: PostId) {
        if target != self.target {
            *self = Self::new(target);
        }
    }

    /// Fetch the target unless it was already fetched. Returns whether a
    /// request was made.
    pub async fn ensure_loaded<A: PostsApi>(&mut self, api: &A) -> bool {
        if !self.needs_fetch() {
            return false;
        }

        self.loading = true;
        self.fetched_for = Some(self.target);
        match api.get_post_by_id(self.target).await {
            Ok(post) => {
                self.post = Some(post);
                self.error = None;
            }
            Err(err) => {
                tracing::error!(id = %self.target, error = %err, "failed to fetch post");
                self.post = None;
                self.error = Some(if err.is_not_found() {
                    "Post not found".to_string()
                } else {
                    "Failed to load post".to_string()
                });
            }
        }
        self.loading = false;
        true
    }

    /// Explicit re-view: fetches again and counts another view.
    pub async fn reload<A: PostsApi>(&mut self, api: &A) -> bool {
        self.fetched_for = None;
        self.confirming_delete = false;
        self.ensure_loaded(api).await
    }

    /// Swap in a post returned by a non-view call (e.g. publish toggle).
    pub fn replace_post(&mut self, post: Post) {
        if post.id == Some(self.target) {
            self.post = Some(post);
        }
    }

    /// Open the delete confirmation; only possible once the post is loaded.
    pub fn request_delete(&mut self) -> bool {
        self.confirming_delete = self.post.is_some();
        self.confirming_delete
    }

    pub fn cancel_delete(&mut self) {
        self.confirming_delete = false;
    }

    /// Id to delete, if the confirmation is open.
    pub fn delete_target(&self) -> Option<PostId> {
        if !self.confirming_delete {
            return None;
        }
        self.post.as_ref().and_then(|p| p.id)
    }
}
