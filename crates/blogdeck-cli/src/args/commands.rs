use crate::types::SearchFieldArg;
use blogdeck_types::PostId;
use clap::{Args, Subcommand};

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "List published posts, newest first")]
    List {
        /// Include drafts
        #[arg(long)]
        all: bool,
    },

    #[command(about = "Search posts by title, content or tags")]
    Search {
        query: String,

        #[arg(long, default_value = "title")]
        field: SearchFieldArg,
    },

    #[command(about = "Show a post (counts as a view)")]
    Show { id: PostId },

    #[command(about = "Create a post")]
    Create {
        #[command(flatten)]
        fields: PostFieldArgs,

        /// Publish immediately instead of saving a draft
        #[arg(long)]
        publish: bool,
    },

    #[command(about = "Update fields of an existing post")]
    Edit {
        id: PostId,

        #[command(flatten)]
        fields: PostFieldArgs,

        #[arg(long, conflicts_with = "draft")]
        publish: bool,

        #[arg(long)]
        draft: bool,
    },

    #[command(about = "Delete a post")]
    Delete {
        id: PostId,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    #[command(about = "Toggle a post between published and draft")]
    Publish { id: PostId },

    #[command(about = "Show post and view statistics")]
    Analytics,

    #[command(about = "Open the interactive terminal UI")]
    Tui,

    #[command(about = "Open the terminal UI over sample data (no backend needed)")]
    Demo,

    #[command(about = "Show or change configuration")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct PostFieldArgs {
    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub content: Option<String>,

    #[arg(long)]
    pub summary: Option<String>,

    #[arg(long)]
    pub author: Option<String>,

    /// Comma-separated tags
    #[arg(long)]
    pub tags: Option<String>,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Print the effective configuration")]
    Show,

    #[command(about = "Write values to the config file")]
    Set {
        /// API base URL to save
        #[arg(long, value_name = "URL")]
        url: Option<String>,

        #[arg(long)]
        timeout_secs: Option<u64>,
    },
}
