//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Bedrock using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Bedrock - Environment Configuration Resolver
#[derive(Parser, Debug)]
#[command(name = "bedrock")]
#[command(version, about, long_about = None)]
#[command(author = "Bedrock Contributors")]
pub struct Cli {
    /// Path to definitions file
    #[arg(short, long, default_value = "bedrock.toml", env = "BEDROCK_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "BEDROCK_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Directory for JSON log files (console-only when unset)
    #[arg(long, env = "BEDROCK_LOG_DIR")]
    pub log_dir: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve one environment into a validated parameter set
    Resolve(commands::resolve::ResolveArgs),

    /// Validate every environment in the definitions file
    ValidateConfig(commands::validate::ValidateArgs),

    /// List environments with a per-environment summary
    List(commands::list::ListArgs),

    /// Derive the chart release name and label set for an environment
    Labels(commands::labels::LabelsArgs),

    /// Initialize a new definitions file
    Init(commands::init::InitArgs),
}
