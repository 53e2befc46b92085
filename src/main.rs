// Bedrock - Environment Configuration Resolver
// Copyright (c) 2025 Bedrock Contributors
// Licensed under the MIT License

use bedrock::cli::{Cli, Commands};
use bedrock::config::LoggingConfig;
use bedrock::logging::init_logging;
use clap::Parser;
use std::process;

fn main() {
    // Load environment variables from .env file if present
    // This is optional - if .env doesn't exist, it's silently ignored
    let _ = dotenvy::dotenv();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging; file logging only when --log-dir is given
    let log_level = cli.log_level.as_deref().unwrap_or("info");
    let logging_config = match &cli.log_dir {
        Some(dir) => LoggingConfig {
            local_enabled: true,
            local_path: dir.clone(),
            local_rotation: "daily".to_string(),
            local_max_size_mb: 100,
        },
        None => LoggingConfig::console_only(),
    };
    let _guard = match init_logging(log_level, &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(5);
        }
    };

    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        "Bedrock - Environment Configuration Resolver"
    );

    // Execute command and get exit code
    let exit_code = match execute_command(&cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            5 // Fatal error exit code
        }
    };

    // Exit with appropriate code
    process::exit(exit_code);
}

/// Execute the CLI command
fn execute_command(cli: &Cli) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Resolve(args) => args.execute(&cli.config),
        Commands::ValidateConfig(args) => args.execute(&cli.config),
        Commands::List(args) => args.execute(&cli.config),
        Commands::Labels(args) => args.execute(&cli.config),
        Commands::Init(args) => args.execute(),
    }
}
