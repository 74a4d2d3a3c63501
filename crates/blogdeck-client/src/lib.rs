//! blogdeck-client: typed access to the blog manager REST API.
//!
//! # Overview
//!
//! [`PostsApi`] is the contract every view in blogdeck is written against.
//! Two implementations ship with this crate:
//!
//! - [`HttpClient`]: JSON over HTTP against the real backend.
//! - [`InMemoryBackend`]: a deterministic fake with the same semantics, used
//!   by tests and by `blogdeck demo`.
//!
//! # Quickstart
//!
//! ```no_run
//! use blogdeck_client::{HttpClient, PostsApi};
//! use blogdeck_types::NewPost;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = HttpClient::new("http://localhost:8888/api")?;
//!
//! let created = client
//!     .create_post(&NewPost::new("Hello", "World").published(true))
//!     .await?;
//! println!("created #{}", created.id.unwrap());
//!
//! // Fetching by id bumps the view count on the server.
//! let post = client.get_post_by_id(created.id.unwrap()).await?;
//! assert_eq!(post.views(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! # Failure model
//!
//! Every operation returns [`Error`] on transport failures, non-2xx statuses
//! and malformed bodies. Nothing is retried and blank search queries are
//! rejected before any request is made.

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod memory;

pub use api::PostsApi;
pub use config::{ApiConfig, BaseUrlSource, Config, DEFAULT_BASE_URL};
pub use error::{Error, Result};
pub use http::HttpClient;
pub use memory::{ApiCall, InMemoryBackend};
