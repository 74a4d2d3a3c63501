use crate::presentation::view_models::{
    CancelledViewModel, CommandResultViewModel, FieldErrorViewModel, Guidance, ListScope,
    MutationKind, PostDetailViewModel, PostListViewModel, PostMutationViewModel,
    PostSummaryViewModel, StatusBadge, ValidationViewModel,
};
use blogdeck_engine::FieldErrors;
use blogdeck_types::{Post, PostId};
use chrono::NaiveDateTime;

fn timestamp(ts: Option<NaiveDateTime>) -> Option<String> {
    ts.map(|t| t.format("%Y-%m-%dT%H:%M:%S").to_string())
}

fn tags(post: &Post) -> Vec<String> {
    post.tag_list().into_iter().map(str::to_string).collect()
}

pub fn present_post_summary(post: &Post) -> PostSummaryViewModel {
    PostSummaryViewModel {
        id: post.id.map(PostId::get),
        title: post.title.clone(),
        author: post.author_or_anonymous().to_string(),
        summary: post.summary_text().map(str::to_string),
        tags: tags(post),
        published: post.published,
        view_count: post.views(),
        created_at: timestamp(post.created_at),
    }
}

pub fn present_post_detail(post: &Post) -> PostDetailViewModel {
    PostDetailViewModel {
        id: post.id.map(PostId::get),
        title: post.title.clone(),
        author: post.author_or_anonymous().to_string(),
        summary: post.summary_text().map(str::to_string),
        tags: tags(post),
        content: post.content.clone(),
        published: post.published,
        view_count: post.views(),
        created_at: timestamp(post.created_at),
        updated_at: timestamp(post.updated_at),
    }
}

pub fn present_post_list(
    posts: &[Post],
    scope: ListScope,
) -> CommandResultViewModel<PostListViewModel> {
    let searching = matches!(scope, ListScope::Search { .. });
    let content = PostListViewModel {
        scope,
        posts: posts.iter().map(present_post_summary).collect(),
    };

    if content.posts.is_empty() {
        let hint = if searching {
            Guidance::new("Try a different search term.")
        } else {
            Guidance::new("Create your first post")
                .with_command("blogdeck create --title <TITLE> --content <CONTENT>")
        };
        return CommandResultViewModel::new(content)
            .with_badge(StatusBadge::info("No posts found"))
            .with_suggestion(hint);
    }

    let label = match content.posts.len() {
        1 => "1 post".to_string(),
        n => format!("{} posts", n),
    };
    CommandResultViewModel::new(content)
        .with_badge(StatusBadge::info(label))
        .with_suggestion(Guidance::new("Read a post").with_command("blogdeck show <ID>"))
}

pub fn present_post_detail_result(post: &Post) -> CommandResultViewModel<PostDetailViewModel> {
    let detail = present_post_detail(post);
    let mut result = CommandResultViewModel::new(detail);
    if let Some(id) = post.id {
        result = result
            .with_suggestion(
                Guidance::new("Edit this post")
                    .with_command(format!("blogdeck edit {} --title <TITLE>", id)),
            )
            .with_suggestion(
                Guidance::new("Delete this post").with_command(format!("blogdeck delete {}", id)),
            );
    }
    result
}

fn mutation(
    action: MutationKind,
    id: PostId,
    post: Option<&Post>,
) -> CommandResultViewModel<PostMutationViewModel> {
    CommandResultViewModel::new(PostMutationViewModel {
        action,
        id: id.get(),
        post: post.map(present_post_detail),
    })
}

pub fn present_post_created(
    id: PostId,
    post: &Post,
) -> CommandResultViewModel<PostMutationViewModel> {
    let label = if post.published {
        "Post created and published"
    } else {
        "Post saved as draft"
    };
    mutation(MutationKind::Created, id, Some(post))
        .with_badge(StatusBadge::success(label))
        .with_suggestion(Guidance::new("Read it").with_command(format!("blogdeck show {}", id)))
}

pub fn present_post_updated(
    id: PostId,
    post: &Post,
) -> CommandResultViewModel<PostMutationViewModel> {
    mutation(MutationKind::Updated, id, Some(post)).with_badge(StatusBadge::success("Post updated"))
}

pub fn present_post_deleted(id: PostId) -> CommandResultViewModel<PostMutationViewModel> {
    mutation(MutationKind::Deleted, id, None).with_badge(StatusBadge::success("Post deleted"))
}

pub fn present_publish_toggled(
    id: PostId,
    post: &Post,
) -> CommandResultViewModel<PostMutationViewModel> {
    let (kind, label) = if post.published {
        (MutationKind::Published, "Post published")
    } else {
        (MutationKind::Unpublished, "Post moved to drafts")
    };
    mutation(kind, id, Some(post)).with_badge(StatusBadge::success(label))
}

pub fn present_validation_failure(
    errors: &FieldErrors,
) -> CommandResultViewModel<ValidationViewModel> {
    let errors = errors
        .iter()
        .map(|(field, message)| FieldErrorViewModel {
            field: field.label().to_lowercase(),
            message: message.to_string(),
        })
        .collect();

    CommandResultViewModel::new(ValidationViewModel { errors })
        .with_badge(StatusBadge::error("Validation failed"))
}

pub fn present_delete_cancelled(id: PostId) -> CommandResultViewModel<CancelledViewModel> {
    CommandResultViewModel::new(CancelledViewModel { id: id.get() })
        .with_badge(StatusBadge::info("Deletion cancelled"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use blogdeck_engine::{PostDraft, validate_draft};

    #[test]
    fn test_empty_search_suggests_new_term() {
        let result = present_post_list(
            &[],
            ListScope::Search {
                field: "title".into(),
                query: "zzz".into(),
            },
        );
        assert_eq!(result.badge.as_ref().unwrap().label, "No posts found");
        assert_eq!(
            result.suggestions[0].description,
            "Try a different search term."
        );
    }

    #[test]
    fn test_summary_keeps_raw_values() {
        let mut post = Post::draft("Hello", "World");
        post.id = Some(PostId::new(3));
        post.tags = Some("a, b".into());
        post.view_count = None;

        let vm = present_post_summary(&post);
        assert_eq!(vm.id, Some(3));
        assert_eq!(vm.tags, vec!["a", "b"]);
        assert_eq!(vm.view_count, 0);
        assert_eq!(vm.author, "Anonymous");
    }

    #[test]
    fn test_validation_failure_is_error_badge() {
        let errors = validate_draft(&PostDraft::default()).unwrap_err();
        let result = present_validation_failure(&errors);
        assert!(result.is_failure());
        assert_eq!(result.content.errors.len(), 2);
        assert_eq!(result.content.errors[0].field, "title");
    }
}
