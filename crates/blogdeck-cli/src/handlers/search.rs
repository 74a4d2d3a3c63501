use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use crate::presentation::view_models::ListScope;
use anyhow::{Context, Result};
use blogdeck_client::PostsApi;
use blogdeck_types::SearchField;
use tokio::runtime::Runtime;

pub fn handle<A: PostsApi>(
    ctx: &HandlerContext,
    rt: &Runtime,
    api: &A,
    query: &str,
    field: SearchField,
) -> Result<()> {
    let posts = rt
        .block_on(api.search(field, query))
        .with_context(|| format!("Failed to search posts by {}", field))?;

    let scope = ListScope::Search {
        field: field.to_string(),
        query: query.to_string(),
    };
    ctx.render(presenters::present_post_list(&posts, scope))
}
