// NOTE: Command Organization Rationale
//
// Why flat post commands (not `post list`, `post show`)?
// - Posts are the only resource; a namespace would only add typing
// - `config` is the one namespace because it manages the tool, not the blog

mod commands;

pub use commands::*;

use crate::types::{LogLevel, OutputFormat};
use clap::Parser;

#[derive(Parser)]
#[command(name = "blogdeck")]
#[command(about = "Manage blog posts from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// API base URL, e.g. http://localhost:8888/api
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Config file path (default: platform config dir)
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
