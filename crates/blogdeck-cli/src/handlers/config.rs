use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use anyhow::{Context, Result, bail};
use blogdeck_client::config::resolve_base_url;
use blogdeck_client::{BaseUrlSource, Config, HttpClient};
use std::path::Path;

pub fn show(
    ctx: &HandlerContext,
    config_path: &Path,
    config: &Config,
    base_url: &str,
    source: BaseUrlSource,
) -> Result<()> {
    ctx.render(presenters::present_config(
        config_path,
        base_url,
        source,
        config.api.timeout_secs,
    ))
}

pub fn set(
    ctx: &HandlerContext,
    config_path: &Path,
    mut config: Config,
    url: Option<String>,
    timeout_secs: Option<u64>,
    flag_url: Option<&str>,
    env_url: Option<&str>,
) -> Result<()> {
    if url.is_none() && timeout_secs.is_none() {
        bail!("Nothing to set: pass --url and/or --timeout-secs");
    }

    if let Some(url) = url {
        // Reject what the client would reject at request time
        HttpClient::new(url.as_str())?;
        config.api.base_url = Some(url);
    }
    if let Some(secs) = timeout_secs {
        if secs == 0 {
            bail!("--timeout-secs must be greater than 0");
        }
        config.api.timeout_secs = Some(secs);
    }

    config
        .save_to(config_path)
        .with_context(|| format!("Failed to write config: {}", config_path.display()))?;
    tracing::info!(path = %config_path.display(), "config saved");

    let (base_url, source) = resolve_base_url(flag_url, env_url, &config);
    ctx.render(presenters::present_config_saved(
        config_path,
        &base_url,
        source,
        config.api.timeout_secs,
    ))
}
