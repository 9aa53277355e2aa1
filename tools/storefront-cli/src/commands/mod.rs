//! CLI command implementations.

pub mod config;
pub mod generate;
pub mod render;
pub mod routes;

use clap::{Args, Subcommand};

/// Arguments for the generate command.
#[derive(Args)]
pub struct GenerateArgs {
    /// Output directory (default: generate.output_dir from config).
    #[arg(short, long)]
    pub output: Option<String>,

    /// Deployment prefix (default: site.base_path from config).
    #[arg(short, long)]
    pub base_path: Option<String>,

    /// Catalog fixture to generate from.
    #[arg(long)]
    pub catalog: Option<String>,

    /// Built HTML file to take asset paths from.
    #[arg(long, conflicts_with = "no_assets")]
    pub assets: Option<String>,

    /// Generate documents without script and stylesheet tags.
    #[arg(long)]
    pub no_assets: bool,
}

/// Arguments for the render command.
#[derive(Args)]
pub struct RenderArgs {
    /// URL to render, e.g. "/product/85067212996/" or "/?search=젤리".
    pub url: String,

    /// Query parameter as key=value; overrides the URL's query string.
    #[arg(short, long)]
    pub query: Vec<String>,

    /// Deployment prefix (default: site.base_path from config).
    #[arg(short, long)]
    pub base_path: Option<String>,

    /// Catalog fixture to render from.
    #[arg(long)]
    pub catalog: Option<String>,

    /// Built HTML file to take asset paths from.
    #[arg(long)]
    pub assets: Option<String>,

    /// Print only the body fragment instead of the full document.
    #[arg(long)]
    pub fragment: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    /// Without a subcommand, print the default config file.
    #[command(subcommand)]
    pub command: Option<ConfigCommand>,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}
