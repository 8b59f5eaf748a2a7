//! Command-line arguments

use clap::Parser;
use std::path::PathBuf;

/// Storefront shopping-assistant chat
#[derive(Parser, Debug)]
#[command(name = "shopchat", version, about)]
pub struct Cli {
    /// Send a single message and print the reply (omit for interactive chat)
    pub message: Option<String>,

    /// Session identifier scoping the conversation state
    #[arg(long, value_name = "ID", default_value = "local")]
    pub session: String,

    /// Model or deployment identifier override
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Completion endpoint URL override
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Append a JSONL transcript of chat activity to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
