//! Validate config command implementation
//!
//! This module implements the `validate-config` command: run every
//! environment in the definitions file through the resolver and print the
//! aggregated report per environment.

use crate::config::load_definitions;
use crate::core::resolver::resolve;
use crate::domain::BedrockError;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating definitions");

        println!("🔍 Validating definitions file: {config_path}");
        println!();

        // Load definitions
        let definitions = match load_definitions(config_path) {
            Ok(d) => {
                println!("✅ Definitions file loaded successfully");
                if d.defaults.is_empty() {
                    println!("   (no [defaults] table; every environment must be self-contained)");
                }
                println!();
                d
            }
            Err(e) => {
                println!("❌ Failed to load definitions file");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        let total = definitions.environments.len();
        let mut failures = 0usize;

        for name in definitions.environment_names() {
            match resolve(&name, &definitions) {
                Ok(config) => {
                    println!(
                        "✅ {name}: cluster '{}' in {} (k8s {}, nodes {}/{}/{})",
                        config.cluster_name,
                        config.region,
                        config.kubernetes_version,
                        config.node_group.min_size,
                        config.node_group.desired_size,
                        config.node_group.max_size,
                    );
                }
                Err(BedrockError::Validation(report)) => {
                    failures += 1;
                    println!("❌ {name}: {} issue(s)", report.len());
                    for issue in report.issues() {
                        println!("   - {issue}");
                    }
                }
                Err(e) => {
                    failures += 1;
                    println!("❌ {name}: {e}");
                }
            }
        }

        println!();
        if failures == 0 {
            println!("✅ All {total} environment(s) are valid");
            Ok(0)
        } else {
            println!("❌ {failures} of {total} environment(s) failed validation");
            Ok(2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_args_creation() {
        let args = ValidateArgs {};
        // Just ensure it compiles and can be created
        let _ = format!("{args:?}");
    }

    #[test]
    fn test_missing_definitions_file_is_config_error() {
        let args = ValidateArgs {};
        let code = args.execute("definitely-missing.toml").unwrap();
        assert_eq!(code, 2);
    }
}
