use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use anyhow::{Context, Result};
use blogdeck_client::PostsApi;
use blogdeck_types::PostId;
use tokio::runtime::Runtime;

/// Fetch one post. The backend counts this as a view.
pub fn handle<A: PostsApi>(ctx: &HandlerContext, rt: &Runtime, api: &A, id: PostId) -> Result<()> {
    let post = rt
        .block_on(api.get_post_by_id(id))
        .with_context(|| format!("Failed to load post #{}", id))?;

    ctx.render(presenters::present_post_detail_result(&post))
}
