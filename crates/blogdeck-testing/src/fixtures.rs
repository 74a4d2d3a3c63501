//! Sample posts shared by integration tests.

use blogdeck_client::InMemoryBackend;
use blogdeck_types::NewPost;

/// Three published posts and one draft, in creation order.
pub fn sample_posts() -> Vec<NewPost> {
    vec![
        NewPost::new(
            "Understanding ownership",
            "Every value in Rust has a single owner.",
        )
        .summary("Moves, borrows and lifetimes")
        .author("Ferris")
        .tags("rust, memory")
        .published(true),
        NewPost::new("Weeknight pasta", "Boil water. Add salt. Add pasta.")
            .author("Chef")
            .tags("cooking")
            .published(true),
        NewPost::new("Async in practice", "Futures do nothing unless polled.")
            .tags("rust, async")
            .published(true),
        NewPost::new("Unfinished thoughts", "Still writing this one."),
    ]
}

pub fn sample_backend() -> InMemoryBackend {
    InMemoryBackend::with_posts(sample_posts())
}
