//! CLI structure and argument parsing for `pagegen`.
//!
//! Two subcommands: `generate` runs the whole pipeline and exports the HTML;
//! `fetch` previews the scrape step for a list of URLs. Input validation
//! (non-empty product name and URL list) happens here in the CLI layer,
//! before the core pipeline is invoked.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Main CLI structure for the `pagegen` command.
#[derive(Parser, Clone, Debug)]
#[command(name = "pagegen")]
#[command(version)]
#[command(about = "Generate a product detail page from competitor URLs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging output
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Suppress informational messages (only show errors)
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable all ANSI colors in output (also respects `NO_COLOR` env)
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    /// Path to configuration file (overrides autodiscovery). Also via `PAGEGEN_CONFIG`.
    #[arg(long, global = true, value_name = "FILE", env = "PAGEGEN_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available subcommands.
#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// Generate a product page from competitor URLs and export the HTML
    Generate(GenerateArgs),

    /// Preview the scrape step: fetch URLs and show the extracted text
    Fetch {
        /// URLs to fetch
        #[arg(value_name = "URL", required = true)]
        urls: Vec<String>,
    },
}

/// Arguments for the `generate` subcommand.
#[derive(Args, Clone, Debug)]
pub struct GenerateArgs {
    /// Product name the page is written for
    #[arg(value_name = "PRODUCT")]
    pub product: String,

    /// Competitor URL to learn from (repeatable)
    #[arg(long = "url", short = 'u', value_name = "URL")]
    pub urls: Vec<String>,

    /// File with newline-delimited competitor URLs
    #[arg(long, value_name = "FILE")]
    pub urls_file: Option<PathBuf>,

    /// Free-text note folded into the prompt context
    #[arg(long, short = 'n', value_name = "TEXT")]
    pub note: Option<String>,

    /// Model to try before the configured candidate list
    #[arg(long, short = 'm', value_name = "MODEL")]
    pub model: Option<String>,

    /// Generation API key. Also via `GEMINI_API_KEY`.
    #[arg(
        long,
        short = 'k',
        value_name = "KEY",
        env = "GEMINI_API_KEY",
        hide_env_values = true
    )]
    pub api_key: String,

    /// Output file for the HTML (defaults to <product>_<YYYYMMDD>.html)
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,
}
