use crate::presentation::presenters::{present_analytics, present_post_detail, present_post_summary};
use crate::presentation::view_models::{
    AnalyticsScreenViewModel, FormFieldViewModel, PostFormViewModel, PostListScreenViewModel,
    PostViewScreenViewModel, StatusBarViewModel,
};
use blogdeck_client::PostsApi;
use blogdeck_engine::{AnalyticsSnapshot, Field, FormStep, PostForm, PostViewer, ViewController};

pub fn build_status_bar<A: PostsApi>(
    controller: &ViewController<A>,
    busy: bool,
    hints: &'static str,
) -> StatusBarViewModel {
    StatusBarViewModel {
        mode: controller.mode().as_str(),
        busy: busy || controller.is_loading(),
        notice: controller
            .notice()
            .map(|n| (n.level.into(), n.message.clone())),
        hints,
    }
}

pub fn build_post_list<A: PostsApi>(
    controller: &ViewController<A>,
    editing_search: bool,
) -> PostListScreenViewModel {
    PostListScreenViewModel {
        rows: controller.posts().iter().map(present_post_summary).collect(),
        search_term: controller.search_term().to_string(),
        search_field: controller.search_field().as_str(),
        editing_search,
        loading: controller.is_loading(),
    }
}

pub fn build_post_form(form: &PostForm, focus: usize) -> PostFormViewModel {
    let step = form.step();
    let fields = step
        .fields()
        .iter()
        .enumerate()
        .map(|(i, field)| {
            let (length, limit) = form.counter(*field);
            FormFieldViewModel {
                label: field.label(),
                value: form.draft().get(*field).to_string(),
                length,
                limit,
                error: form.errors().get(*field).map(str::to_string),
                focused: i == focus,
                multiline: *field == Field::Content,
            }
        })
        .collect();

    let other_step_errors = form
        .errors()
        .iter()
        .filter(|(field, _)| field.step() != step)
        .map(|(field, message)| format!("Step {}: {}", field.step().number(), message))
        .collect();

    PostFormViewModel {
        heading: if form.is_edit() { "Edit Post" } else { "Create New Post" },
        step: step.number(),
        step_count: FormStep::COUNT,
        step_title: step.title(),
        fields,
        published: (step == FormStep::Content).then_some(form.draft().published),
        other_step_errors,
        submit_error: form.submit_error().map(str::to_string),
        submitting: form.is_submitting(),
    }
}

/// `None` when there is no post to show (not-found fallback).
pub fn build_post_view(viewer: &PostViewer) -> Option<PostViewScreenViewModel> {
    viewer.post().map(|post| PostViewScreenViewModel {
        post: present_post_detail(post),
        confirming_delete: viewer.is_confirming_delete(),
    })
}

pub fn build_analytics(snapshot: Option<&AnalyticsSnapshot>) -> AnalyticsScreenViewModel {
    match snapshot {
        Some(snapshot) => AnalyticsScreenViewModel::Ready(present_analytics(snapshot).content),
        None => AnalyticsScreenViewModel::Unavailable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blogdeck_client::InMemoryBackend;

    #[test]
    fn test_form_view_model_tracks_focus_and_counters() {
        let mut form = PostForm::create();
        form.set_field(Field::Title, "Hello");

        let vm = build_post_form(&form, 1);
        assert_eq!(vm.step, 1);
        assert_eq!(vm.fields.len(), 2);
        assert_eq!(vm.fields[0].length, 5);
        assert_eq!(vm.fields[0].limit, Some(200));
        assert!(vm.fields[1].focused);
        assert_eq!(vm.published, None);
    }

    #[test]
    fn test_published_toggle_only_on_last_step() {
        let mut form = PostForm::create();
        form.next_step();
        form.next_step();
        let vm = build_post_form(&form, 0);
        assert_eq!(vm.published, Some(false));
        assert!(vm.fields[0].multiline);
    }

    #[tokio::test]
    async fn test_errors_on_other_steps_are_listed() {
        let api = InMemoryBackend::new();
        let mut form = PostForm::create();
        form.next_step();
        form.next_step();
        form.submit(&api).await;

        let vm = build_post_form(&form, 0);
        assert_eq!(vm.fields[0].error.as_deref(), Some("Content is required"));
        assert_eq!(vm.other_step_errors, vec!["Step 1: Title is required"]);
    }

    #[test]
    fn test_status_bar_carries_notice() {
        let controller = ViewController::new(InMemoryBackend::new());
        let vm = build_status_bar(&controller, false, "q quit");
        assert_eq!(vm.mode, "home");
        assert!(vm.notice.is_none());
        assert!(!vm.busy);
    }
}
