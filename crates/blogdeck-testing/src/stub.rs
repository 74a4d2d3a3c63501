//! The blog REST API served from an [`InMemoryBackend`].
//!
//! The server runs on its own thread with a current-thread runtime, so it
//! works from plain `#[test]` functions as well as from async tests.

use std::net::SocketAddr;
use std::thread::JoinHandle;

use anyhow::{Context, Result};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, put};
use axum::{Json, Router};
use blogdeck_client::{Error as ClientError, InMemoryBackend, PostsApi};
use blogdeck_types::{ApiErrorBody, NewPost, Post, PostId, PostPatch, SearchField};
use serde::Deserialize;
use tokio::sync::oneshot;

/// Running stub backend. Shuts down on drop.
///
/// # Example
/// ```no_run
/// use blogdeck_testing::{StubServer, fixtures};
///
/// let server = StubServer::start(fixtures::sample_backend()).unwrap();
/// println!("{}", server.base_url());
/// ```
pub struct StubServer {
    addr: SocketAddr,
    backend: InMemoryBackend,
    shutdown: Option<oneshot::Sender<()>>,
    thread: Option<JoinHandle<()>>,
}

impl StubServer {
    pub fn start(backend: InMemoryBackend) -> Result<Self> {
        let listener = std::net::TcpListener::bind("127.0.0.1:0")
            .context("Failed to bind stub server")?;
        listener.set_nonblocking(true)?;
        let addr = listener.local_addr()?;

        let (tx, rx) = oneshot::channel::<()>();
        let app = router(backend.clone());

        let thread = std::thread::Builder::new()
            .name("blogdeck-stub".to_string())
            .spawn(move || {
                let runtime = match tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
                {
                    Ok(rt) => rt,
                    Err(e) => {
                        eprintln!("stub server runtime failed: {}", e);
                        return;
                    }
                };

                let served = runtime.block_on(async move {
                    let listener = tokio::net::TcpListener::from_std(listener)?;
                    axum::serve(listener, app)
                        .with_graceful_shutdown(async {
                            let _ = rx.await;
                        })
                        .await
                });
                if let Err(e) = served {
                    eprintln!("stub server stopped: {}", e);
                }
            })
            .context("Failed to spawn stub server thread")?;

        Ok(Self {
            addr,
            backend,
            shutdown: Some(tx),
            thread: Some(thread),
        })
    }

    /// Base URL including the `/api` prefix, as the CLI expects it.
    pub fn base_url(&self) -> String {
        format!("http://{}/api", self.addr)
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// The backing store, for seeding and call inspection.
    pub fn backend(&self) -> &InMemoryBackend {
        &self.backend
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

fn router(backend: InMemoryBackend) -> Router {
    Router::new()
        .route("/api/posts", get(all_posts).post(create_post))
        .route("/api/posts/published", get(published_posts))
        .route("/api/posts/analytics/total", get(total_count))
        .route("/api/posts/analytics/published", get(published_count))
        .route("/api/posts/search/{field}", get(search))
        .route("/api/posts/{id}", put(update_post).delete(delete_post))
        .route("/api/posts/{id}/view", get(view_post))
        .route("/api/posts/{id}/publish", put(toggle_publish))
        .with_state(backend)
}

/// Backend failure rendered the way the real API renders it
struct ApiFailure(ClientError);

impl IntoResponse for ApiFailure {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            ClientError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            other => other
                .status()
                .and_then(|s| StatusCode::from_u16(s).ok())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        };
        let message = match self.0 {
            ClientError::NotFound(m) | ClientError::InvalidInput(m) => m,
            ClientError::Api { message, .. } => message,
            other => other.to_string(),
        };

        let body = ApiErrorBody {
            message: Some(message),
            status: Some(status.as_u16()),
            error: status.canonical_reason().map(str::to_string),
            ..Default::default()
        };
        (status, Json(body)).into_response()
    }
}

impl From<ClientError> for ApiFailure {
    fn from(err: ClientError) -> Self {
        Self(err)
    }
}

type Reply<T> = std::result::Result<Json<T>, ApiFailure>;

async fn all_posts(State(api): State<InMemoryBackend>) -> Reply<Vec<Post>> {
    Ok(Json(api.get_all_posts().await?))
}

async fn published_posts(State(api): State<InMemoryBackend>) -> Reply<Vec<Post>> {
    Ok(Json(api.get_published_posts().await?))
}

async fn view_post(State(api): State<InMemoryBackend>, Path(id): Path<i64>) -> Reply<Post> {
    Ok(Json(api.get_post_by_id(PostId::new(id)).await?))
}

async fn create_post(
    State(api): State<InMemoryBackend>,
    Json(body): Json<NewPost>,
) -> std::result::Result<(StatusCode, Json<Post>), ApiFailure> {
    let post = api.create_post(&body).await?;
    Ok((StatusCode::CREATED, Json(post)))
}

async fn update_post(
    State(api): State<InMemoryBackend>,
    Path(id): Path<i64>,
    Json(patch): Json<PostPatch>,
) -> Reply<Post> {
    Ok(Json(api.update_post(PostId::new(id), &patch).await?))
}

async fn delete_post(
    State(api): State<InMemoryBackend>,
    Path(id): Path<i64>,
) -> std::result::Result<StatusCode, ApiFailure> {
    api.delete_post(PostId::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn toggle_publish(State(api): State<InMemoryBackend>, Path(id): Path<i64>) -> Reply<Post> {
    Ok(Json(api.toggle_publish(PostId::new(id)).await?))
}

#[derive(Deserialize)]
struct SearchQuery {
    #[serde(default)]
    q: String,
}

async fn search(
    State(api): State<InMemoryBackend>,
    Path(field): Path<String>,
    Query(query): Query<SearchQuery>,
) -> Reply<Vec<Post>> {
    let field: SearchField = field
        .parse()
        .map_err(|e: blogdeck_types::Error| ClientError::InvalidInput(e.to_string()))?;
    Ok(Json(api.search(field, &query.q).await?))
}

async fn total_count(State(api): State<InMemoryBackend>) -> Reply<u64> {
    Ok(Json(api.get_total_posts_count().await?))
}

async fn published_count(State(api): State<InMemoryBackend>) -> Reply<u64> {
    Ok(Json(api.get_published_posts_count().await?))
}
