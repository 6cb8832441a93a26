use clap::{Parser, Subcommand};

use crate::config::TargetOverrides;

#[derive(Parser)]
#[command(name = "bogo")]
#[command(about = "Sort numbers using a language model (results not guaranteed)")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct Cli {
    /// List of numbers to sort
    #[arg(allow_negative_numbers = true)]
    pub numbers: Vec<f64>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Model name (default: MODEL_NAME or local-model)
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Chat-completion API base URL (default: API_URL or http://localhost:1234/v1)
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// API key sent as a bearer token (default: API_KEY or not-needed)
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Request timeout in seconds; no timeout when unset
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Disable coloured output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Enter numbers one per line, then sort them
    Interactive,
    /// Show configuration
    Config {
        /// Write a default config file if none exists
        #[arg(long)]
        init: bool,
    },
}

impl From<&Cli> for TargetOverrides {
    fn from(cli: &Cli) -> Self {
        Self {
            model: cli.model.clone(),
            api_url: cli.url.clone(),
            api_key: cli.api_key.clone(),
        }
    }
}
