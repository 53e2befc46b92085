//! Definitions file management for Bedrock.
//!
//! This module provides TOML-based loading and parsing of the environment
//! definitions file.
//!
//! # Overview
//!
//! Bedrock reads a single TOML file (`bedrock.toml` by default) with support
//! for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - A `[defaults]` table merged under every environment
//! - `BEDROCK_*` environment variable overrides
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use bedrock::config::load_definitions;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let definitions = load_definitions("bedrock.toml")?;
//! println!("Environments: {:?}", definitions.environment_names());
//! # Ok(())
//! # }
//! ```
//!
//! # Example Definitions File
//!
//! ```toml
//! [defaults]
//! app_name = "my-app"
//! region = "us-east-1"
//! kubernetes_version = "1.31"
//!
//! [defaults.tags]
//! ManagedBy = "terraform"
//! Project = "my-app"
//!
//! [environments.staging]
//! environment = "staging"
//! cluster_name = "my-app-staging-eks"
//! node_instance_types = ["t3.medium"]
//! node_group_min_size = 2
//! node_group_max_size = 5
//! node_group_desired_size = 2
//!
//! [environments.staging.tags]
//! Environment = "staging"
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::load_definitions;
pub use schema::{DefinitionsFile, EnvironmentDefinition, LoggingConfig};
