use blogdeck_client::{ApiCall, InMemoryBackend};
use blogdeck_engine::{Action, Field, NoticeLevel, Screen, ViewController, ViewMode};
use blogdeck_types::{NewPost, PostId, SearchField};

fn seeded() -> ViewController<InMemoryBackend> {
    ViewController::new(InMemoryBackend::with_posts([
        NewPost::new("Rust ownership", "Borrowing explained")
            .tags("rust")
            .published(true),
        NewPost::new("Cooking", "Pasta tonight").published(true),
        NewPost::new("Secret", "draft only"),
    ]))
}

fn count(calls: &[ApiCall], call: &ApiCall) -> usize {
    calls.iter().filter(|c| *c == call).count()
}

#[tokio::test]
async fn test_entering_posts_always_reloads() {
    let mut c = seeded();
    c.dispatch(Action::Navigate(ViewMode::Posts)).await;
    c.dispatch(Action::Back).await;
    c.dispatch(Action::Navigate(ViewMode::Posts)).await;

    assert_eq!(c.mode(), ViewMode::Posts);
    assert_eq!(count(&c.api().calls(), &ApiCall::GetPublishedPosts), 2);
    assert_eq!(c.posts().len(), 2);
    assert!(c.posts().iter().all(|p| p.published));
}

#[tokio::test]
async fn test_selecting_a_post_counts_exactly_one_view() {
    let mut c = seeded();
    c.show_posts().await;
    let id = c.posts()[0].id.unwrap();

    c.dispatch(Action::SelectPost(id)).await;
    assert_eq!(c.mode(), ViewMode::View);
    let viewer = c.viewer().unwrap();
    assert_eq!(viewer.post().unwrap().views(), 1);

    // another dispatch for the same id renders the cached post
    c.dispatch(Action::SelectPost(id)).await;
    assert_eq!(count(&c.api().calls(), &ApiCall::GetPostById(id)), 1);

    c.dispatch(Action::ReloadCurrent).await;
    assert_eq!(c.viewer().unwrap().post().unwrap().views(), 2);
}

#[tokio::test]
async fn test_list_views_are_stale_after_viewing() {
    let mut c = seeded();
    c.show_posts().await;
    let id = c.posts()[0].id.unwrap();
    c.select_post(id).await;

    let in_list = c.posts().iter().find(|p| p.id == Some(id)).unwrap();
    assert_eq!(in_list.views(), 0);

    c.back().await;
    let refreshed = c.posts().iter().find(|p| p.id == Some(id)).unwrap();
    assert_eq!(refreshed.views(), 1);
}

#[tokio::test]
async fn test_missing_post_shows_not_found_and_recovers() {
    let mut c = seeded();
    c.select_post(PostId::new(404)).await;

    let viewer = c.viewer().unwrap();
    assert!(viewer.post().is_none());
    assert_eq!(c.notice().unwrap().level, NoticeLevel::Error);

    c.back().await;
    assert_eq!(c.mode(), ViewMode::Posts);
}

#[tokio::test]
async fn test_create_success_returns_to_refreshed_list() {
    let mut c = seeded();
    c.dispatch(Action::Navigate(ViewMode::Create)).await;

    let form = c.form_mut().unwrap();
    form.set_field(Field::Title, "Fresh");
    form.set_field(Field::Content, "Body");
    form.set_published(true);
    c.dispatch(Action::SubmitForm).await;

    assert_eq!(c.mode(), ViewMode::Posts);
    assert!(c.posts().iter().any(|p| p.title == "Fresh"));
    assert_eq!(c.notice().unwrap().message, "Post created");
}

#[tokio::test]
async fn test_invalid_create_stays_on_form_without_calls() {
    let mut c = seeded();
    c.show_create();
    c.submit_form().await;

    assert!(c.api().calls().is_empty());
    match c.screen() {
        Screen::Create(form) => {
            assert_eq!(form.errors().get(Field::Title), Some("Title is required"));
        }
        other => panic!("expected create form, got {other:?}"),
    }
}

#[tokio::test]
async fn test_create_failure_keeps_form_with_message() {
    let mut c = seeded();
    c.show_create();
    let form = c.form_mut().unwrap();
    form.set_field(Field::Title, "Fresh");
    form.set_field(Field::Content, "Body");

    c.api().fail_next(500, "boom");
    c.submit_form().await;

    match c.screen() {
        Screen::Create(form) => {
            assert_eq!(
                form.submit_error(),
                Some("Failed to create post. Please try again.")
            );
            assert!(!form.is_submitting());
        }
        other => panic!("expected create form, got {other:?}"),
    }
}

#[tokio::test]
async fn test_cancel_create_makes_no_mutation() {
    let mut c = seeded();
    c.show_create();
    c.form_mut().unwrap().set_field(Field::Title, "Abandoned");
    c.back().await;

    assert_eq!(c.mode(), ViewMode::Posts);
    assert!(!c.api().calls().contains(&ApiCall::CreatePost));
}

#[tokio::test]
async fn test_edit_sends_changes_and_returns_to_list() {
    let mut c = seeded();
    c.select_post(PostId::new(1)).await;
    c.dispatch(Action::EditCurrent).await;
    assert_eq!(c.mode(), ViewMode::Edit);

    c.form_mut()
        .unwrap()
        .set_field(Field::Title, "Rust ownership, revised");
    c.submit_form().await;

    assert_eq!(c.mode(), ViewMode::Posts);
    assert!(c.api().calls().contains(&ApiCall::UpdatePost(PostId::new(1))));
    assert!(
        c.posts()
            .iter()
            .any(|p| p.title == "Rust ownership, revised")
    );
}

#[tokio::test]
async fn test_cancel_edit_discards_form_without_update() {
    let mut c = seeded();
    c.select_post(PostId::new(1)).await;
    c.dispatch(Action::EditCurrent).await;
    c.form_mut().unwrap().set_field(Field::Title, "Never saved");

    c.dispatch(Action::Back).await;

    assert_eq!(c.mode(), ViewMode::Posts);
    assert!(c.form_mut().is_none());
    assert!(
        !c.api()
            .calls()
            .iter()
            .any(|call| matches!(call, ApiCall::UpdatePost(_)))
    );
    assert!(c.posts().iter().all(|p| p.title != "Never saved"));

    // re-entering edit starts from the stored post
    c.select_post(PostId::new(1)).await;
    c.edit_current();
    assert_eq!(c.form_mut().unwrap().draft().title, "Rust ownership");
}

#[tokio::test]
async fn test_back_from_analytics_goes_home() {
    let mut c = seeded();
    c.dispatch(Action::Navigate(ViewMode::Analytics)).await;
    assert_eq!(c.mode(), ViewMode::Analytics);

    c.dispatch(Action::Back).await;
    assert_eq!(c.mode(), ViewMode::Home);
    assert_eq!(c.screen(), &Screen::Home);
}

#[tokio::test]
async fn test_delete_requires_confirmation() {
    let mut c = seeded();
    c.select_post(PostId::new(2)).await;

    c.dispatch(Action::ConfirmDelete).await;
    assert!(!c.api().calls().contains(&ApiCall::DeletePost(PostId::new(2))));

    c.dispatch(Action::RequestDelete).await;
    c.dispatch(Action::CancelDelete).await;
    c.dispatch(Action::ConfirmDelete).await;
    assert!(!c.api().calls().contains(&ApiCall::DeletePost(PostId::new(2))));

    c.dispatch(Action::RequestDelete).await;
    c.dispatch(Action::ConfirmDelete).await;
    assert_eq!(c.mode(), ViewMode::Posts);
    assert!(c.posts().iter().all(|p| p.id != Some(PostId::new(2))));
    assert_eq!(c.notice().unwrap().message, "Post deleted");
}

#[tokio::test]
async fn test_delete_failure_closes_confirmation() {
    let mut c = seeded();
    c.select_post(PostId::new(1)).await;
    c.request_delete();
    c.api().fail_next(500, "boom");
    c.confirm_delete().await;

    assert_eq!(c.mode(), ViewMode::View);
    assert!(!c.viewer().unwrap().is_confirming_delete());
    assert_eq!(c.notice().unwrap().message, "Failed to delete post");
}

#[tokio::test]
async fn test_search_uses_selected_field() {
    let mut c = seeded();
    c.show_posts().await;

    c.dispatch(Action::SetSearchField(SearchField::Content)).await;
    c.dispatch(Action::SetSearchTerm("pasta".into())).await;
    c.dispatch(Action::Search).await;

    assert_eq!(c.posts().len(), 1);
    assert_eq!(c.posts()[0].title, "Cooking");
    assert!(
        c.api()
            .calls()
            .contains(&ApiCall::Search(SearchField::Content, "pasta".into()))
    );

    c.dispatch(Action::ShowAll).await;
    assert_eq!(c.posts().len(), 2);
}

#[tokio::test]
async fn test_search_failure_sets_notice() {
    let mut c = seeded();
    c.set_search_term("rust");
    c.api().fail_next(500, "boom");
    c.run_search().await;
    assert_eq!(c.notice().unwrap().message, "Failed to search posts");
}

#[tokio::test]
async fn test_analytics_snapshot() {
    let mut c = seeded();
    c.api().set_view_count(PostId::new(1), 7);
    c.dispatch(Action::Navigate(ViewMode::Analytics)).await;

    match c.screen() {
        Screen::Analytics(Some(snapshot)) => {
            assert_eq!(snapshot.total_posts, 3);
            assert_eq!(snapshot.published_posts, 2);
            assert_eq!(snapshot.draft_posts(), 1);
            assert_eq!(snapshot.total_views, 7);
            assert_eq!(snapshot.avg_display(), "3.5");
        }
        other => panic!("expected analytics snapshot, got {other:?}"),
    }

    c.back().await;
    assert_eq!(c.mode(), ViewMode::Home);
}

#[tokio::test]
async fn test_analytics_failure_sets_notice() {
    let mut c = seeded();
    c.api().fail_call(ApiCall::PublishedCount, 500, "boom");
    c.show_analytics().await;

    assert_eq!(c.screen(), &Screen::Analytics(None));
    assert_eq!(
        c.notice().unwrap().message,
        "Failed to load analytics data. Please try again."
    );
    assert_eq!(c.posts().len(), 2);
}

#[tokio::test]
async fn test_toggle_publish_current() {
    let mut c = seeded();
    c.select_post(PostId::new(1)).await;
    c.dispatch(Action::TogglePublishCurrent).await;

    assert!(!c.viewer().unwrap().post().unwrap().published);
    assert_eq!(c.notice().unwrap().message, "Post moved to drafts");
}
