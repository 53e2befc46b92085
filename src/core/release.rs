//! Release naming for the chart renderer handoff
//!
//! The chart renderer consumes a release name and a label set derived from a
//! resolved configuration. Names are bounded by the Kubernetes 63-character
//! label limit, with trailing hyphens trimmed after truncation.

use crate::domain::environment::{Environment, EnvironmentConfig};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Maximum release name length (Kubernetes label value limit)
pub const MAX_RELEASE_NAME_LEN: usize = 63;

/// A chart release name, `<app>-<environment>` truncated to the label limit
///
/// # Examples
///
/// ```
/// use bedrock::core::release::ReleaseName;
/// use bedrock::domain::Environment;
///
/// let release = ReleaseName::new("my-app", Environment::Staging);
/// assert_eq!(release.as_str(), "my-app-staging");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReleaseName(String);

impl ReleaseName {
    /// Derives the release name for an application in an environment
    ///
    /// Expects an app name that already passed validation (non-empty).
    pub fn new(app_name: &str, environment: Environment) -> Self {
        let raw = format!("{app_name}-{environment}");
        let mut name: String = raw.chars().take(MAX_RELEASE_NAME_LEN).collect();
        while name.ends_with('-') {
            name.pop();
        }
        Self(name)
    }

    /// Returns the release name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ReleaseName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ReleaseName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The recommended label set for chart objects of a resolved configuration
pub fn chart_labels(config: &EnvironmentConfig) -> BTreeMap<String, String> {
    let release = ReleaseName::new(&config.app_name, config.environment);

    let mut labels = BTreeMap::new();
    labels.insert(
        "app.kubernetes.io/name".to_string(),
        config.app_name.clone(),
    );
    labels.insert(
        "app.kubernetes.io/instance".to_string(),
        release.into_inner(),
    );
    labels.insert(
        "app.kubernetes.io/managed-by".to_string(),
        "bedrock".to_string(),
    );
    labels.insert("environment".to_string(), config.environment.to_string());
    labels
}
