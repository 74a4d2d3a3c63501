use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use anyhow::{Context, Result};
use blogdeck_client::PostsApi;
use blogdeck_types::PostId;
use tokio::runtime::Runtime;

pub fn handle<A: PostsApi>(ctx: &HandlerContext, rt: &Runtime, api: &A, id: PostId) -> Result<()> {
    let post = rt
        .block_on(api.toggle_publish(id))
        .with_context(|| format!("Failed to toggle publish state of post #{}", id))?;

    ctx.render(presenters::present_publish_toggled(id, &post))
}
