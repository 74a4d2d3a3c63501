use crate::args::PostFieldArgs;
use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use anyhow::{Context, Result, bail};
use blogdeck_client::PostsApi;
use blogdeck_engine::validate_patch;
use blogdeck_types::{PostId, PostPatch};
use tokio::runtime::Runtime;

/// Partial update: only the flags given are sent, plus the current publish
/// state when neither `--publish` nor `--draft` is passed, since the backend
/// stores an omitted flag as a draft. The state is read from the full
/// listing so editing does not count as a view.
pub fn handle<A: PostsApi>(
    ctx: &HandlerContext,
    rt: &Runtime,
    api: &A,
    id: PostId,
    fields: PostFieldArgs,
    published: Option<bool>,
) -> Result<()> {
    let patch = PostPatch {
        title: fields.title,
        content: fields.content,
        summary: fields.summary,
        author: fields.author,
        tags: fields.tags,
        published,
    };

    if patch.is_empty() {
        bail!("Nothing to update: pass at least one field, --publish or --draft");
    }
    if let Err(errors) = validate_patch(&patch) {
        ctx.render(presenters::present_validation_failure(&errors))?;
        bail!("Validation failed ({} field(s))", errors.len());
    }

    let patch = if patch.published.is_some() {
        patch
    } else {
        let published = rt
            .block_on(current_publish_state(api, id))
            .with_context(|| format!("Failed to update post #{}", id))?;
        PostPatch {
            published: Some(published),
            ..patch
        }
    };

    let post = rt
        .block_on(api.update_post(id, &patch))
        .with_context(|| format!("Failed to update post #{}", id))?;

    ctx.render(presenters::present_post_updated(id, &post))
}

async fn current_publish_state<A: PostsApi>(api: &A, id: PostId) -> Result<bool> {
    let posts = api.get_all_posts().await?;
    match posts.iter().find(|p| p.id == Some(id)) {
        Some(post) => Ok(post.published),
        None => bail!("Blog post not found with id: {}", id.get()),
    }
}
