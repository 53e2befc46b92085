//! Domain name types with validation
//!
//! This module provides newtype wrappers for the platform-facing names a
//! resolved environment carries. Each type ensures type safety and provides
//! validation for format compliance with the target platform's naming rules.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum cluster name length accepted by the target platform.
pub const MAX_CLUSTER_NAME_LEN: usize = 100;

/// Cluster name newtype wrapper
///
/// Represents the name of a workload cluster. Names must consist of
/// alphanumeric characters and hyphens, start with a letter, not end with a
/// hyphen, and stay within the platform length bound.
///
/// # Examples
///
/// ```
/// use bedrock::domain::names::ClusterName;
/// use std::str::FromStr;
///
/// let name = ClusterName::from_str("my-app-staging-eks").unwrap();
/// assert_eq!(name.as_str(), "my-app-staging-eks");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClusterName(String);

impl ClusterName {
    /// Creates a new ClusterName from a string
    ///
    /// # Errors
    ///
    /// Returns an error describing the violated naming rule
    pub fn new(name: impl Into<String>) -> Result<Self, String> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err("cluster name cannot be empty".to_string());
        }
        if name.len() > MAX_CLUSTER_NAME_LEN {
            return Err(format!(
                "cluster name must be at most {} characters, got {}",
                MAX_CLUSTER_NAME_LEN,
                name.len()
            ));
        }
        if !name.starts_with(|c: char| c.is_ascii_alphabetic()) {
            return Err(format!("cluster name must start with a letter, got '{name}'"));
        }
        if name.ends_with('-') {
            return Err(format!("cluster name cannot end with a hyphen, got '{name}'"));
        }
        if let Some(bad) = name.chars().find(|c| !c.is_ascii_alphanumeric() && *c != '-') {
            return Err(format!(
                "cluster name may only contain alphanumeric characters and hyphens, found '{bad}'"
            ));
        }
        Ok(Self(name))
    }

    /// Returns the cluster name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ClusterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ClusterName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for ClusterName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Region identifier newtype wrapper
///
/// Represents a cloud region identifier such as `us-east-1` or
/// `eu-central-1`: a two-letter area code, one or more lowercase location
/// segments, and a numeric suffix, all hyphen-separated.
///
/// # Examples
///
/// ```
/// use bedrock::domain::names::Region;
/// use std::str::FromStr;
///
/// let region = Region::from_str("us-east-1").unwrap();
/// assert_eq!(region.as_str(), "us-east-1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Region(String);

impl Region {
    /// Creates a new Region from a string
    ///
    /// # Errors
    ///
    /// Returns an error if the identifier doesn't match the region format
    pub fn new(region: impl Into<String>) -> Result<Self, String> {
        let region = region.into();
        if region.trim().is_empty() {
            return Err("region cannot be empty".to_string());
        }
        let re = Regex::new(r"^[a-z]{2}(-[a-z]+)+-\d$").unwrap();
        if !re.is_match(&region) {
            return Err(format!(
                "invalid region identifier '{region}' (expected format like 'us-east-1')"
            ));
        }
        Ok(Self(region))
    }

    /// Returns the region as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Region {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Kubernetes version newtype wrapper
///
/// Represents a `major.minor` control-plane version, e.g. `1.31`. Patch
/// versions are managed by the platform and are not part of the identifier.
///
/// # Examples
///
/// ```
/// use bedrock::domain::names::KubernetesVersion;
/// use std::str::FromStr;
///
/// let version = KubernetesVersion::from_str("1.31").unwrap();
/// assert_eq!(version.major(), 1);
/// assert_eq!(version.minor(), 31);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KubernetesVersion(String);

impl KubernetesVersion {
    /// Creates a new KubernetesVersion from a string
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a `major.minor` version
    pub fn new(version: impl Into<String>) -> Result<Self, String> {
        let version = version.into();
        let re = Regex::new(r"^\d+\.\d+$").unwrap();
        if !re.is_match(&version) {
            return Err(format!(
                "invalid Kubernetes version '{version}' (expected 'major.minor', e.g. '1.31')"
            ));
        }
        Ok(Self(version))
    }

    /// Returns the version as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Major version component
    pub fn major(&self) -> u32 {
        self.part(0)
    }

    /// Minor version component
    pub fn minor(&self) -> u32 {
        self.part(1)
    }

    // Components are digits-only by construction.
    fn part(&self, index: usize) -> u32 {
        self.0
            .split('.')
            .nth(index)
            .and_then(|p| p.parse().ok())
            .unwrap_or(0)
    }
}

impl fmt::Display for KubernetesVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for KubernetesVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for KubernetesVersion {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
