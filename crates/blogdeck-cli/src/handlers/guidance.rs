use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use anyhow::Result;
use std::path::Path;

pub fn handle(ctx: &HandlerContext, config_path: &Path, base_url: &str) -> Result<()> {
    ctx.render(presenters::present_guidance(config_path.exists(), base_url))
}
