//! Labels command implementation
//!
//! This module implements the `labels` command: derive the release name and
//! the recommended label set a chart renderer should stamp on every object
//! of an environment's release.

use crate::config::load_definitions;
use crate::core::release::{chart_labels, ReleaseName};
use crate::core::resolver::resolve;
use crate::domain::BedrockError;
use clap::Args;

/// Arguments for the labels command
#[derive(Args, Debug)]
pub struct LabelsArgs {
    /// Environment to derive labels for (dev, staging, production)
    #[arg(short, long)]
    pub environment: String,
}

impl LabelsArgs {
    /// Execute the labels command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(environment = %self.environment, "Deriving chart labels");

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
                let release = ReleaseName::new(&config.app_name, config.environment);
                let labels = chart_labels(&config);

                println!("release: {release}");
                for (key, value) in &labels {
                    println!("{key}: {value}");
                }
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
