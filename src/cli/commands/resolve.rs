//! Resolve command implementation
//!
//! This module implements the `resolve` command: look up one environment,
//! validate it and print the full parameter set for the provisioning engine.

use crate::config::load_definitions;
use crate::core::resolver::resolve;
use crate::domain::BedrockError;
use clap::{Args, ValueEnum};

/// Output format for the resolved parameter set
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON, suitable as a provisioning variable file
    Json,
    /// TOML, matching the definitions file syntax
    Toml,
}

/// Arguments for the resolve command
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Environment to resolve (dev, staging, production)
    #[arg(short, long)]
    pub environment: String,

    /// Output format
    #[arg(long, value_enum, default_value = "json")]
    pub format: OutputFormat,
}

impl ResolveArgs {
    /// Execute the resolve command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        crate::log_resolve_start!(self.environment);

        // Load definitions
        let definitions = match load_definitions(config_path) {
            Ok(d) => d,
            Err(e) => {
                println!("❌ Failed to load definitions file");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        match resolve(&self.environment, &definitions) {
            Ok(config) => {
                crate::log_resolve_complete!(self.environment, config.cluster_name);
                let rendered = match self.format {
                    OutputFormat::Json => serde_json::to_string_pretty(&config)?,
                    OutputFormat::Toml => toml::to_string_pretty(&config)?,
                };
                println!("{rendered}");
                Ok(0)
            }
            Err(err @ BedrockError::EnvironmentNotFound { .. }) => {
                println!("❌ {err}");
                Ok(3) // Unknown environment exit code
            }
            Err(BedrockError::Validation(report)) => {
                println!(
                    "❌ Environment '{}' failed validation: {} issue(s)",
                    self.environment,
                    report.len()
                );
                for issue in report.issues() {
                    println!("   - {issue}");
                }
                Ok(2)
            }
            Err(err) => {
                println!("❌ {err}");
                Ok(5) // Fatal error exit code
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_args_debug() {
        let args = ResolveArgs {
            environment: "staging".to_string(),
            format: OutputFormat::Json,
        };
        let _ = format!("{args:?}");
    }

    #[test]
    fn test_missing_definitions_file_is_config_error() {
        let args = ResolveArgs {
            environment: "staging".to_string(),
            format: OutputFormat::Json,
        };
        let code = args.execute("definitely-missing.toml").unwrap();
        assert_eq!(code, 2);
    }
}
