use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use anyhow::{Context, Result};
use blogdeck_client::PostsApi;
use blogdeck_types::PostId;
use std::io::{self, BufRead, Write};
use tokio::runtime::Runtime;

pub fn handle<A: PostsApi>(
    ctx: &HandlerContext,
    rt: &Runtime,
    api: &A,
    id: PostId,
    yes: bool,
) -> Result<()> {
    if !yes && !confirm(id)? {
        return ctx.render(presenters::present_delete_cancelled(id));
    }

    rt.block_on(api.delete_post(id))
        .with_context(|| format!("Failed to delete post #{}", id))?;

    ctx.render(presenters::present_post_deleted(id))
}

/// Prompt on stderr so stdout stays clean for `--format json`
fn confirm(id: PostId) -> Result<bool> {
    let mut stderr = io::stderr();
    write!(stderr, "Delete post #{}? [y/N] ", id)?;
    stderr.flush()?;

    let mut answer = String::new();
    io::stdin()
        .lock()
        .read_line(&mut answer)
        .context("Failed to read confirmation")?;

    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}
