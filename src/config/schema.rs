//! Definitions file schema types
//!
//! This module defines the structure of the `bedrock.toml` definitions file:
//! a `[defaults]` overlay base, one `[environments.<name>]` table per
//! deployment target, and raw (not yet validated) definition records.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A raw environment definition record
///
/// Every field is optional so the same shape serves both the `[defaults]`
/// base and the per-environment overrides; a record only becomes an
/// [`crate::domain::EnvironmentConfig`] after merging and validation.
///
/// Unknown fields are rejected at parse time so a misspelled key fails
/// loudly instead of silently dropping out of the merge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnvironmentDefinition {
    /// Environment name; must match one of the recognized environments
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,

    /// Workload cluster name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_name: Option<String>,

    /// Application name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_name: Option<String>,

    /// Target cloud region
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    /// Control-plane version as `major.minor`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kubernetes_version: Option<String>,

    /// Instance types backing the node group
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_instance_types: Option<Vec<String>>,

    /// Minimum node group size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_group_min_size: Option<i64>,

    /// Maximum node group size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_group_max_size: Option<i64>,

    /// Desired node group size at provisioning time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_group_desired_size: Option<i64>,

    /// Resource tags
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<BTreeMap<String, String>>,
}

impl EnvironmentDefinition {
    /// Returns true if no field is set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// The parsed definitions file
///
/// Maps directly onto `bedrock.toml`. Loaded once into an immutable snapshot
/// at process start; the resolver only ever reads from it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefinitionsFile {
    /// Base record merged under every environment definition
    #[serde(default)]
    pub defaults: EnvironmentDefinition,

    /// One definition per environment, keyed by environment name
    #[serde(default)]
    pub environments: BTreeMap<String, EnvironmentDefinition>,
}

impl DefinitionsFile {
    /// Environment names present in the file, sorted
    pub fn environment_names(&self) -> Vec<String> {
        self.environments.keys().cloned().collect()
    }
}

/// Logging configuration for the CLI shell
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log file directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,

    /// Maximum log file size in MB
    #[serde(default = "default_local_max_size_mb")]
    pub local_max_size_mb: usize,
}

impl LoggingConfig {
    /// Validates the logging configuration
    pub fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "size"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_max_size_mb == 0 {
            return Err("logging.local_max_size_mb must be > 0".to_string());
        }

        Ok(())
    }

    /// Console-only configuration used by short-lived CLI invocations
    pub fn console_only() -> Self {
        Self {
            local_enabled: false,
            local_path: String::new(),
            local_rotation: default_local_rotation(),
            local_max_size_mb: default_local_max_size_mb(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
            local_max_size_mb: default_local_max_size_mb(),
        }
    }
}

// Default value functions
fn default_local_path() -> String {
    "/var/log/bedrock".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}

fn default_local_max_size_mb() -> usize {
    100
}
