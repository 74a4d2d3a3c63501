use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use anyhow::{Context, Result};
use blogdeck_client::PostsApi;
use blogdeck_engine::AnalyticsSnapshot;
use tokio::runtime::Runtime;

/// Counts from the backend, view totals over the published list.
pub fn handle<A: PostsApi>(ctx: &HandlerContext, rt: &Runtime, api: &A) -> Result<()> {
    let snapshot = rt
        .block_on(async {
            let posts = api.get_published_posts().await?;
            AnalyticsSnapshot::load(api, &posts).await
        })
        .context("Failed to load analytics data")?;

    ctx.render(presenters::present_analytics(&snapshot))
}
