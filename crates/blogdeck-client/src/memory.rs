use std::collections::{BTreeMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard};

use blogdeck_types::{NewPost, Post, PostId, PostPatch, SearchField, char_len};
use chrono::NaiveDateTime;

use crate::api::{PostsApi, ensure_query};
use crate::error::{Error, Result};

/// One recorded call against the in-memory backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    GetAllPosts,
    GetPublishedPosts,
    GetPostById(PostId),
    CreatePost,
    UpdatePost(PostId),
    DeletePost(PostId),
    TogglePublish(PostId),
    Search(SearchField, String),
    TotalCount,
    PublishedCount,
}

#[derive(Debug, Default)]
struct Store {
    posts: BTreeMap<PostId, Post>,
    next_id: i64,
    calls: Vec<ApiCall>,
    failures: VecDeque<(u16, String)>,
    targeted: Vec<(ApiCall, u16, String)>,
}

/// Deterministic `PostsApi` kept entirely in memory.
///
/// Mirrors the blog backend: ids are sequential from 1, the published list is
/// newest first, searches are case-insensitive substring matches on the
/// trimmed query, and every fetch by id bumps the view count. Clones share
/// the same store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBackend {
    store: Arc<Mutex<Store>>,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend pre-populated with `posts`, created in order.
    pub fn with_posts(posts: impl IntoIterator<Item = NewPost>) -> Self {
        let backend = Self::new();
        for post in posts {
            backend.seed(post);
        }
        backend
    }

    /// Insert a post without recording a call or validating it.
    pub fn seed(&self, post: NewPost) -> Post {
        let mut store = self.lock();
        insert(&mut store, post, now())
    }

    /// Overwrite a stored view count (fixtures only).
    pub fn set_view_count(&self, id: PostId, views: u64) {
        if let Some(post) = self.lock().posts.get_mut(&id) {
            post.view_count = Some(views);
        }
    }

    /// Make the next call fail with `status`, regardless of operation.
    pub fn fail_next(&self, status: u16, message: impl Into<String>) {
        self.lock().failures.push_back((status, message.into()));
    }

    /// Make the next `call` fail with `status`; other calls are unaffected.
    pub fn fail_call(&self, call: ApiCall, status: u16, message: impl Into<String>) {
        self.lock().targeted.push((call, status, message.into()));
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.lock().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.lock().calls.clear();
    }

    /// Current contents, ordered by id
    pub fn snapshot(&self) -> Vec<Post> {
        self.lock().posts.values().cloned().collect()
    }

    fn lock(&self) -> MutexGuard<'_, Store> {
        self.store.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Record the call and pop an injected failure, if any.
    fn enter(&self, call: ApiCall) -> Result<MutexGuard<'_, Store>> {
        let mut store = self.lock();
        tracing::debug!(?call, "in-memory backend call");
        let targeted = store.targeted.iter().position(|(c, _, _)| *c == call);
        store.calls.push(call);

        let failure = match targeted {
            Some(index) => {
                let (_, status, message) = store.targeted.remove(index);
                Some((status, message))
            }
            None => store.failures.pop_front(),
        };
        if let Some((status, message)) = failure {
            return Err(if status == 404 {
                Error::NotFound(message)
            } else {
                Error::Api { status, message }
            });
        }
        Ok(store)
    }
}

fn now() -> NaiveDateTime {
    chrono::Utc::now().naive_utc()
}

fn insert(store: &mut Store, new: NewPost, at: NaiveDateTime) -> Post {
    store.next_id += 1;
    let id = PostId::new(store.next_id);
    let post = Post {
        id: Some(id),
        title: new.title,
        content: new.content,
        summary: new.summary,
        author: new.author,
        tags: new.tags,
        created_at: Some(at),
        updated_at: Some(at),
        published: new.published,
        view_count: Some(0),
    };
    store.posts.insert(id, post.clone());
    post
}

fn not_found(id: PostId) -> Error {
    Error::NotFound(format!("Blog post not found with id: {}", id))
}

fn validation(message: &str) -> Error {
    Error::Api {
        status: 400,
        message: message.to_string(),
    }
}

fn check_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(validation("Title is required"));
    }
    if char_len(title) > 200 {
        return Err(validation("Title must be less than 200 characters"));
    }
    Ok(())
}

fn check_content(content: &str) -> Result<()> {
    if content.trim().is_empty() {
        return Err(validation("Content is required"));
    }
    if char_len(content) > 10_000 {
        return Err(validation("Content must be less than 10000 characters"));
    }
    Ok(())
}

fn matches(post: &Post, field: SearchField, needle: &str) -> bool {
    let haystack = match field {
        SearchField::Title => Some(post.title.as_str()),
        SearchField::Content => Some(post.content.as_str()),
        SearchField::Tags => post.tags.as_deref(),
    };
    haystack.is_some_and(|h| h.to_lowercase().contains(needle))
}

impl PostsApi for InMemoryBackend {
    async fn get_all_posts(&self) -> Result<Vec<Post>> {
        let store = self.enter(ApiCall::GetAllPosts)?;
        Ok(store.posts.values().cloned().collect())
    }

    async fn get_published_posts(&self) -> Result<Vec<Post>> {
        let store = self.enter(ApiCall::GetPublishedPosts)?;
        let mut posts: Vec<Post> = store
            .posts
            .values()
            .filter(|p| p.published)
            .cloned()
            .collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(posts)
    }

    async fn get_post_by_id(&self, id: PostId) -> Result<Post> {
        let mut store = self.enter(ApiCall::GetPostById(id))?;
        let post = store.posts.get_mut(&id).ok_or_else(|| not_found(id))?;
        post.view_count = Some(post.views() + 1);
        Ok(post.clone())
    }

    async fn create_post(&self, post: &NewPost) -> Result<Post> {
        let mut store = self.enter(ApiCall::CreatePost)?;
        check_title(&post.title)?;
        check_content(&post.content)?;
        Ok(insert(&mut store, post.clone(), now()))
    }

    async fn update_post(&self, id: PostId, patch: &PostPatch) -> Result<Post> {
        let mut store = self.enter(ApiCall::UpdatePost(id))?;
        if let Some(title) = &patch.title {
            check_title(title)?;
        }
        if let Some(content) = &patch.content {
            check_content(content)?;
        }
        let post = store.posts.get_mut(&id).ok_or_else(|| not_found(id))?;
        patch.apply_to(post);
        // An omitted flag is stored as false, like the real service does
        post.published = patch.published.unwrap_or(false);
        post.updated_at = Some(now());
        Ok(post.clone())
    }

    async fn delete_post(&self, id: PostId) -> Result<()> {
        let mut store = self.enter(ApiCall::DeletePost(id))?;
        store.posts.remove(&id).map(|_| ()).ok_or_else(|| not_found(id))
    }

    async fn toggle_publish(&self, id: PostId) -> Result<Post> {
        let mut store = self.enter(ApiCall::TogglePublish(id))?;
        let post = store.posts.get_mut(&id).ok_or_else(|| not_found(id))?;
        post.published = !post.published;
        post.updated_at = Some(now());
        Ok(post.clone())
    }

    async fn search(&self, field: SearchField, query: &str) -> Result<Vec<Post>> {
        ensure_query(field, query)?;
        let store = self.enter(ApiCall::Search(field, query.to_string()))?;
        let needle = query.trim().to_lowercase();
        Ok(store
            .posts
            .values()
            .filter(|p| matches(p, field, &needle))
            .cloned()
            .collect())
    }

    async fn get_total_posts_count(&self) -> Result<u64> {
        let store = self.enter(ApiCall::TotalCount)?;
        Ok(store.posts.len() as u64)
    }

    async fn get_published_posts_count(&self) -> Result<u64> {
        let store = self.enter(ApiCall::PublishedCount)?;
        Ok(store.posts.values().filter(|p| p.published).count() as u64)
    }
}
