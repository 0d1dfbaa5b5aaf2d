//! CLI module
//!
//! Argument parsing for the `structured-chat` binary.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// structured-chat - structured-answer chat server
///
/// Forwards questions and feedback to an OpenAI-compatible LLM API and
/// returns answers in a fixed four-field JSON format.
#[derive(Parser, Debug)]
#[command(
    name = "structured-chat",
    version,
    about = "Structured-answer chat server with feedback correction",
    after_help = "EXAMPLES:\n    \
                  structured-chat                              # Start the server\n    \
                  structured-chat --config my.toml             # Use a custom config file\n    \
                  structured-chat --port 9000                  # Override the listen port\n    \
                  structured-chat check-config                 # Print the resolved configuration"
)]
pub struct Cli {
    /// Path to the configuration file (optional; defaults apply when missing)
    #[arg(short, long, default_value = "structured-chat.toml", global = true)]
    pub config: PathBuf,

    /// Host address to bind, overriding config and HOST
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind, overriding config and PORT
    #[arg(long)]
    pub port: Option<u16>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate and print the resolved configuration (API key redacted)
    CheckConfig,
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
