use crate::presentation::TuiRenderer;
use anyhow::Result;
use blogdeck_client::InMemoryBackend;
use blogdeck_engine::ViewController;
use blogdeck_types::{NewPost, PostId};
use tokio::runtime::Runtime;

/// Interactive UI over a seeded in-memory backend. Nothing is persisted.
pub fn handle(rt: &Runtime) -> Result<()> {
    let backend = seeded_backend();
    tracing::info!(posts = backend.snapshot().len(), "starting demo");

    let mut controller = ViewController::new(backend);
    TuiRenderer::new().run(rt, &mut controller)
}

fn seeded_backend() -> InMemoryBackend {
    let backend = InMemoryBackend::with_posts(demo_posts());
    for (id, views) in [(1, 42), (2, 17), (3, 8), (4, 3)] {
        backend.set_view_count(PostId::new(id), views);
    }
    backend
}

fn demo_posts() -> Vec<NewPost> {
    vec![
        NewPost::new(
            "Getting started with blogdeck",
            "blogdeck talks to the blog manager REST API.\n\n\
             Press Esc to go back, / to search and n to write a new post.\n\
             Opening a post counts as a view; lists show a snapshot.\n\n\
             Press p while reading a post to move it to drafts and p again\n\
             to publish it. Drafts do not appear in the list.",
        )
        .summary("A short tour of the terminal client")
        .author("blogdeck")
        .tags("intro, tui")
        .published(true),
        NewPost::new(
            "Writing in three steps",
            "The editor splits a post into basic info, details and content.\n\
             Title and content are required. Ctrl+S saves from any step.",
        )
        .summary("How the create and edit forms work")
        .author("blogdeck")
        .tags("editor, tui")
        .published(true),
        NewPost::new(
            "Searching posts",
            "Search matches titles by default. Press f to switch to content or\n\
             tags, and a to go back to the full published list.",
        )
        .author("blogdeck")
        .tags("search")
        .published(true),
        NewPost::new(
            "Reading the numbers",
            "Analytics shows total and published counts from the backend and\n\
             view totals over the published posts currently loaded.",
        )
        .summary("Analytics at a glance")
        .tags("analytics")
        .published(true),
        NewPost::new(
            "Draft: ideas for next week",
            "Drafts are hidden from the published list. This one only shows\n\
             up in the analytics draft count and in `blogdeck list --all`.",
        )
        .tags("drafts"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_data_has_drafts_and_views() {
        let posts = seeded_backend().snapshot();
        assert_eq!(posts.len(), 5);
        assert_eq!(posts.iter().filter(|p| !p.published).count(), 1);
        assert_eq!(posts.iter().map(|p| p.views()).sum::<u64>(), 70);
    }

    #[test]
    fn test_key_hints_live_on_reachable_posts() {
        // the TUI list only shows published posts
        for post in seeded_backend().snapshot() {
            if post.content.contains("Press ") {
                assert!(post.published, "hint on hidden post: {}", post.title);
            }
        }
    }
}
