use blogdeck_client::{ApiCall, Error, InMemoryBackend, PostsApi};
use blogdeck_types::{NewPost, PostId, PostPatch, SearchField};

fn corpus() -> InMemoryBackend {
    InMemoryBackend::with_posts([
        NewPost::new("Rust ownership", "Borrowing explained")
            .tags("rust, memory")
            .published(true),
        NewPost::new("Draft notes", "Not ready").published(false),
        NewPost::new("Async Rust", "Futures and executors")
            .tags("rust,async")
            .published(true),
    ])
}

#[tokio::test]
async fn test_create_assigns_id_and_zero_views() {
    let backend = InMemoryBackend::new();
    let created = backend
        .create_post(&NewPost::new("Hello", "World").published(true))
        .await
        .unwrap();

    assert_eq!(created.id, Some(PostId::new(1)));
    assert_eq!(created.views(), 0);
    assert!(created.published);
    assert!(created.created_at.is_some());

    let published = backend.get_published_posts().await.unwrap();
    assert!(published.iter().any(|p| p.id == created.id));
}

#[tokio::test]
async fn test_fetch_by_id_increments_view_count_once_per_call() {
    let backend = corpus();
    let id = PostId::new(3);

    let first = backend.get_post_by_id(id).await.unwrap();
    let second = backend.get_post_by_id(id).await.unwrap();

    assert_eq!(second.views(), first.views() + 1);
    assert_eq!(first.title, second.title);
}

#[tokio::test]
async fn test_listing_does_not_increment_views() {
    let backend = corpus();
    backend.get_published_posts().await.unwrap();
    backend.get_all_posts().await.unwrap();
    backend.search_by_title("rust").await.unwrap();

    assert!(backend.snapshot().iter().all(|p| p.views() == 0));
}

#[tokio::test]
async fn test_published_list_is_newest_first_and_filtered() {
    let backend = corpus();
    let titles: Vec<String> = backend
        .get_published_posts()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.title)
        .collect();
    assert_eq!(titles, vec!["Async Rust", "Rust ownership"]);
}

#[tokio::test]
async fn test_search_fields_are_case_insensitive() {
    let backend = corpus();

    let by_title = backend.search(SearchField::Title, "  RUST ").await.unwrap();
    assert_eq!(by_title.len(), 2);

    let by_content = backend.search_by_content("futures").await.unwrap();
    assert_eq!(by_content.len(), 1);

    let by_tags = backend.search_by_tags("async").await.unwrap();
    assert_eq!(by_tags.len(), 1);

    let none = backend.search_by_title("zzz-no-match").await.unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn test_blank_search_is_rejected_without_a_call() {
    let backend = corpus();
    let err = backend.search_by_tags(" \t").await.unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));
    assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn test_update_applies_only_present_fields() {
    let backend = corpus();
    let updated = backend
        .update_post(
            PostId::new(2),
            &PostPatch {
                title: Some("Finished notes".into()),
                published: Some(true),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.title, "Finished notes");
    assert_eq!(updated.content, "Not ready");
    assert!(updated.published);
}

#[tokio::test]
async fn test_update_without_flag_stores_draft() {
    let backend = corpus();
    let before = backend.get_post_by_id(PostId::new(1)).await.unwrap();
    assert!(before.published);

    let updated = backend
        .update_post(
            PostId::new(1),
            &PostPatch {
                title: Some("Renamed".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.title, "Renamed");
    assert!(!updated.published);
}

#[tokio::test]
async fn test_server_side_validation_rejects_blank_title() {
    let backend = InMemoryBackend::new();
    let err = backend
        .create_post(&NewPost::new("   ", "body"))
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(400));
    assert!(backend.snapshot().is_empty());
}

#[tokio::test]
async fn test_delete_removes_from_every_listing() {
    let backend = corpus();
    backend.delete_post(PostId::new(1)).await.unwrap();

    assert!(
        backend
            .get_all_posts()
            .await
            .unwrap()
            .iter()
            .all(|p| p.id != Some(PostId::new(1)))
    );
    assert!(
        backend
            .get_published_posts()
            .await
            .unwrap()
            .iter()
            .all(|p| p.id != Some(PostId::new(1)))
    );

    let err = backend.get_post_by_id(PostId::new(1)).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_counts_and_toggle_publish() {
    let backend = corpus();
    assert_eq!(backend.get_total_posts_count().await.unwrap(), 3);
    assert_eq!(backend.get_published_posts_count().await.unwrap(), 2);

    let toggled = backend.toggle_publish(PostId::new(2)).await.unwrap();
    assert!(toggled.published);
    assert_eq!(backend.get_published_posts_count().await.unwrap(), 3);
}

#[tokio::test]
async fn test_injected_failure_hits_next_call_only() {
    let backend = corpus();
    backend.fail_next(500, "database unavailable");

    let err = backend.get_published_posts().await.unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert!(backend.get_published_posts().await.is_ok());

    assert_eq!(
        backend.calls(),
        vec![ApiCall::GetPublishedPosts, ApiCall::GetPublishedPosts]
    );
}

#[tokio::test]
async fn test_targeted_failure_skips_other_calls() {
    let backend = corpus();
    backend.fail_call(ApiCall::PublishedCount, 503, "busy");

    assert!(backend.get_published_posts().await.is_ok());
    assert_eq!(backend.get_total_posts_count().await.unwrap(), 3);
    let err = backend.get_published_posts_count().await.unwrap_err();
    assert_eq!(err.status(), Some(503));
    assert_eq!(backend.get_published_posts_count().await.unwrap(), 2);
}
