//! Resolved environment configuration
//!
//! This module defines the validated, immutable parameter set handed to the
//! provisioning tooling, plus the closed set of deployment environments.

use crate::domain::names::{ClusterName, KubernetesVersion, Region};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Tag key whose value must always equal the environment name.
pub const ENVIRONMENT_TAG: &str = "Environment";

/// Tag keys every resolved configuration must carry.
pub const REQUIRED_TAGS: [&str; 3] = [ENVIRONMENT_TAG, "ManagedBy", "Project"];

/// Deployment environment
///
/// The closed set of recognized deployment targets. Lookup is case-sensitive:
/// `"dev"` parses, `"Dev"` does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Development environment
    Dev,
    /// Staging environment
    Staging,
    /// Production environment
    Production,
}

impl Environment {
    /// All recognized environments, in promotion order
    pub const ALL: [Environment; 3] = [
        Environment::Dev,
        Environment::Staging,
        Environment::Production,
    ];

    /// Returns the canonical lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Dev => "dev",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dev" => Ok(Environment::Dev),
            "staging" => Ok(Environment::Staging),
            "production" => Ok(Environment::Production),
            other => Err(format!(
                "unrecognized environment '{other}' (expected one of: dev, staging, production)"
            )),
        }
    }
}

/// Node group sizing bounds
///
/// Invariant: `min_size <= desired_size <= max_size`, enforced at validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeGroupSize {
    /// Minimum number of nodes the group may scale down to
    pub min_size: u32,

    /// Maximum number of nodes the group may scale up to
    pub max_size: u32,

    /// Node count requested at provisioning time
    pub desired_size: u32,
}

/// A fully validated environment configuration
///
/// This is the value object consumed by the external provisioning engine.
/// It is only ever constructed by validation (see [`crate::core::validation`])
/// and is immutable afterwards: no mutating methods are exposed, and callers
/// receive owned copies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    /// The environment this configuration deploys to
    pub environment: Environment,

    /// Workload cluster name
    pub cluster_name: ClusterName,

    /// Application name, used for release naming and labels
    pub app_name: String,

    /// Target cloud region
    pub region: Region,

    /// Control-plane version
    pub kubernetes_version: KubernetesVersion,

    /// Instance types backing the node group, in preference order
    pub node_instance_types: Vec<String>,

    /// Node group sizing bounds
    pub node_group: NodeGroupSize,

    /// Resource tags; always contains `Environment`, `ManagedBy` and `Project`
    pub tags: BTreeMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_round_trip() {
        for env in Environment::ALL {
            let parsed: Environment = env.as_str().parse().unwrap();
            assert_eq!(parsed, env);
        }
    }

    #[test]
    fn test_environment_parse_is_case_sensitive() {
        assert!("Dev".parse::<Environment>().is_err());
        assert!("STAGING".parse::<Environment>().is_err());
        assert!("".parse::<Environment>().is_err());
    }

    #[test]
    fn test_environment_parse_error_lists_recognized() {
        let err = "qa".parse::<Environment>().unwrap_err();
        assert!(err.contains("'qa'"));
        assert!(err.contains("dev, staging, production"));
    }

    #[test]
    fn test_environment_serde_lowercase() {
        let json = serde_json::to_string(&Environment::Production).unwrap();
        assert_eq!(json, "\"production\"");

        let parsed: Environment = serde_json::from_str("\"dev\"").unwrap();
        assert_eq!(parsed, Environment::Dev);
    }

    #[test]
    fn test_required_tags_include_environment_tag() {
        assert!(REQUIRED_TAGS.contains(&ENVIRONMENT_TAG));
    }
}
