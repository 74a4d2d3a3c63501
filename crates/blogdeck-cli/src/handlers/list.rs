use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use crate::presentation::view_models::ListScope;
use anyhow::{Context, Result};
use blogdeck_client::PostsApi;
use tokio::runtime::Runtime;

pub fn handle<A: PostsApi>(ctx: &HandlerContext, rt: &Runtime, api: &A, all: bool) -> Result<()> {
    let (posts, scope) = if all {
        (rt.block_on(api.get_all_posts()), ListScope::All)
    } else {
        (rt.block_on(api.get_published_posts()), ListScope::Published)
    };
    let posts = posts.context("Failed to load posts")?;

    ctx.render(presenters::present_post_list(&posts, scope))
}
