//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! definitions file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the definitions file
    #[arg(short, long, default_value = "bedrock.toml")]
    pub output: String,

    /// Include example values and comments
    #[arg(long)]
    pub with_examples: bool,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing definitions file");

        println!("📝 Initializing Bedrock definitions");
        println!();

        // Check if file already exists
        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Definitions file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        // Generate definitions content
        let content = if self.with_examples {
            Self::generate_definitions_with_examples()
        } else {
            Self::generate_minimal_definitions()
        };

        // Write to file
        match fs::write(&self.output, content) {
            Ok(_) => {
                println!("✅ Definitions file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your cluster settings", self.output);
                println!("  2. Validate the file: bedrock validate-config");
                println!("  3. Resolve an environment: bedrock resolve --environment staging");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write definitions file");
                println!("   Error: {e}");
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Generate minimal definitions
    fn generate_minimal_definitions() -> String {
        r#"# Bedrock Definitions File
# One [environments.<name>] table per deployment target; [defaults] is
# merged under every environment.

[defaults]
app_name = "my-app"
region = "us-east-1"
kubernetes_version = "1.31"

[defaults.tags]
ManagedBy = "terraform"
Project = "my-app"

[environments.dev]
environment = "dev"
cluster_name = "my-app-dev-eks"
node_instance_types = ["t3.small"]
node_group_min_size = 1
node_group_max_size = 2
node_group_desired_size = 1

[environments.dev.tags]
Environment = "dev"

[environments.staging]
environment = "staging"
cluster_name = "my-app-staging-eks"
node_instance_types = ["t3.medium"]
node_group_min_size = 2
node_group_max_size = 5
node_group_desired_size = 2

[environments.staging.tags]
Environment = "staging"

[environments.production]
environment = "production"
cluster_name = "my-app-production-eks"
node_instance_types = ["m5.large"]
node_group_min_size = 3
node_group_max_size = 10
node_group_desired_size = 3

[environments.production.tags]
Environment = "production"
"#
        .to_string()
    }

    /// Generate definitions with examples and comments
    fn generate_definitions_with_examples() -> String {
        r#"# Bedrock Definitions File
#
# This file declares one parameter set per deployment environment. The
# resolver merges each [environments.<name>] table over [defaults], then
# validates the result before handing it to the provisioning tooling.
#
# Values support environment variable substitution with ${VAR_NAME}.

# ============================================================================
# Defaults
# Merged under every environment; an environment table overrides field by
# field, tags key by key.
# ============================================================================
[defaults]
# Application name (used for release naming and labels)
app_name = "my-app"

# Target cloud region, e.g. us-east-1, eu-central-1
region = "us-east-1"

# Control-plane version as major.minor
kubernetes_version = "1.31"

[defaults.tags]
# Who owns the provisioning of these resources
ManagedBy = "terraform"

# Cost-tracking project identifier
Project = "my-app"

# ============================================================================
# Environments
# Recognized names: dev, staging, production. The Environment tag must equal
# the environment name.
# ============================================================================
[environments.dev]
environment = "dev"
cluster_name = "my-app-dev-eks"

# Instance types in preference order
node_instance_types = ["t3.small"]

# Node group sizing: min <= desired <= max
node_group_min_size = 1
node_group_max_size = 2
node_group_desired_size = 1

[environments.dev.tags]
Environment = "dev"

[environments.staging]
environment = "staging"
cluster_name = "my-app-staging-eks"
node_instance_types = ["t3.medium"]
node_group_min_size = 2
node_group_max_size = 5
node_group_desired_size = 2

[environments.staging.tags]
Environment = "staging"

[environments.production]
environment = "production"
cluster_name = "my-app-production-eks"

# Fall back to the second type when the first has no capacity
node_instance_types = ["m5.large", "m5a.large"]
node_group_min_size = 3
node_group_max_size = 10
node_group_desired_size = 3

[environments.production.tags]
Environment = "production"
"#
        .to_string()
    }
}
