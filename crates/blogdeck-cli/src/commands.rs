use super::args::{Cli, Commands, ConfigCommand};
use super::handlers::{self, HandlerContext};
use super::logging::{self, LogTarget};
use anyhow::{Context, Result};
use blogdeck_client::config::{
    BASE_URL_ENV, resolve_base_url, resolve_config_path, resolve_data_dir,
};
use blogdeck_client::{Config, HttpClient};
use tokio::runtime::Runtime;

pub fn run(cli: Cli) -> Result<()> {
    let interactive = matches!(cli.command, Some(Commands::Tui | Commands::Demo));
    let log_target = if interactive {
        LogTarget::File(resolve_data_dir()?.join("blogdeck.log"))
    } else {
        LogTarget::Stderr
    };
    logging::init(cli.log_level, log_target)?;

    let config_path = resolve_config_path(cli.config.as_deref())?;
    let config = Config::load_from(&config_path)
        .with_context(|| format!("Failed to load config: {}", config_path.display()))?;
    let env_url = std::env::var(BASE_URL_ENV).ok();
    let (base_url, source) =
        resolve_base_url(cli.base_url.as_deref(), env_url.as_deref(), &config);
    tracing::debug!(%base_url, ?source, config = %config_path.display(), "resolved backend");

    let ctx = HandlerContext::new(cli.format);

    let Some(command) = cli.command else {
        return handlers::guidance::handle(&ctx, &config_path, &base_url);
    };

    let connect = || -> Result<(Runtime, HttpClient)> {
        let client = HttpClient::with_base_url(&config.api, base_url.as_str())?;
        Ok((build_runtime()?, client))
    };

    match command {
        Commands::List { all } => {
            let (rt, client) = connect()?;
            handlers::list::handle(&ctx, &rt, &client, all)
        }

        Commands::Search { query, field } => {
            let (rt, client) = connect()?;
            handlers::search::handle(&ctx, &rt, &client, &query, field.into())
        }

        Commands::Show { id } => {
            let (rt, client) = connect()?;
            handlers::show::handle(&ctx, &rt, &client, id)
        }

        Commands::Create { fields, publish } => {
            let (rt, client) = connect()?;
            handlers::create::handle(&ctx, &rt, &client, &fields, publish)
        }

        Commands::Edit {
            id,
            fields,
            publish,
            draft,
        } => {
            let (rt, client) = connect()?;
            let published = match (publish, draft) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            };
            handlers::edit::handle(&ctx, &rt, &client, id, fields, published)
        }

        Commands::Delete { id, yes } => {
            let (rt, client) = connect()?;
            handlers::delete::handle(&ctx, &rt, &client, id, yes)
        }

        Commands::Publish { id } => {
            let (rt, client) = connect()?;
            handlers::publish::handle(&ctx, &rt, &client, id)
        }

        Commands::Analytics => {
            let (rt, client) = connect()?;
            handlers::analytics::handle(&ctx, &rt, &client)
        }

        Commands::Tui => {
            let (rt, client) = connect()?;
            handlers::tui::handle(&rt, client)
        }

        Commands::Demo => handlers::demo::handle(&build_runtime()?),

        Commands::Config { command } => match command {
            ConfigCommand::Show => {
                handlers::config::show(&ctx, &config_path, &config, &base_url, source)
            }
            ConfigCommand::Set { url, timeout_secs } => handlers::config::set(
                &ctx,
                &config_path,
                config,
                url,
                timeout_secs,
                cli.base_url.as_deref(),
                env_url.as_deref(),
            ),
        },
    }
}

fn build_runtime() -> Result<Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")
}
