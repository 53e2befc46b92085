//! List command implementation
//!
//! This module implements the `list` command for showing the environments a
//! definitions file declares, with a one-line summary per environment.

use crate::config::load_definitions;
use crate::core::resolver::resolve;
use crate::domain::BedrockError;
use clap::Args;

/// Arguments for the list command
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Also show instance types and tags per environment
    #[arg(long)]
    pub detailed: bool,
}

impl ListArgs {
    /// Execute the list command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Listing environments");

        // Load definitions
        let definitions = match load_definitions(config_path) {
            Ok(d) => d,
            Err(e) => {
                println!("❌ Failed to load definitions file");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        println!("📋 Environments in {config_path}:");
        println!();

        for name in definitions.environment_names() {
            match resolve(&name, &definitions) {
                Ok(config) => {
                    println!(
                        "  {:<12} cluster '{}' in {} (k8s {}, nodes {}/{}/{})",
                        name,
                        config.cluster_name,
                        config.region,
                        config.kubernetes_version,
                        config.node_group.min_size,
                        config.node_group.desired_size,
                        config.node_group.max_size,
                    );
                    if self.detailed {
                        println!(
                            "  {:<12} instance types: {}",
                            "",
                            config.node_instance_types.join(", ")
                        );
                        for (key, value) in &config.tags {
                            println!("  {:<12} tag {key}={value}", "");
                        }
                    }
                }
                Err(BedrockError::Validation(report)) => {
                    println!(
                        "  {:<12} (invalid: {} issue(s), run 'bedrock validate-config')",
                        name,
                        report.len()
                    );
                }
                Err(e) => {
                    println!("  {name:<12} (error: {e})");
                }
            }
        }

        println!();
        Ok(0)
    }
}
