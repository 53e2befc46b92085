//! Environment resolution
//!
//! Looks up an environment definition by name, overlays it on the defaults
//! and validates the result. Pure function over its inputs: no I/O, no
//! logging, no retries — the same inputs always produce the same output.

use super::merge::merge;
use crate::config::schema::DefinitionsFile;
use crate::core::validation::validate_definition;
use crate::domain::environment::EnvironmentConfig;
use crate::domain::errors::{BedrockError, ValidationReport};
use crate::domain::result::Result;

/// Resolves one environment into a validated configuration
///
/// Lookup is by exact, case-sensitive name match against the definitions.
///
/// # Errors
///
/// - [`BedrockError::EnvironmentNotFound`] if the name is not defined,
///   carrying the sorted list of known environments
/// - [`BedrockError::Validation`] with the aggregated report if the merged
///   definition violates any field rule or invariant
pub fn resolve(environment_name: &str, definitions: &DefinitionsFile) -> Result<EnvironmentConfig> {
    let Some(definition) = definitions.environments.get(environment_name) else {
        return Err(BedrockError::EnvironmentNotFound {
            requested: environment_name.to_string(),
            known: definitions.environment_names(),
        });
    };

    let merged = merge(&definitions.defaults, definition);
    let config = validate_definition(&merged)?;

    // The definitions key is the lookup identity; a record declaring a
    // different environment under that key is mislabeled.
    if config.environment.as_str() != environment_name {
        let mut report = ValidationReport::new();
        report.push(
            "environment",
            format!(
                "definition under '{environment_name}' declares environment '{}'",
                config.environment
            ),
        );
        return Err(BedrockError::Validation(report));
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::EnvironmentDefinition;
    use std::collections::BTreeMap;

    fn definitions() -> DefinitionsFile {
        let defaults = EnvironmentDefinition {
            app_name: Some("my-app".to_string()),
            region: Some("us-east-1".to_string()),
            kubernetes_version: Some("1.31".to_string()),
            tags: Some(
                [
                    ("ManagedBy".to_string(), "terraform".to_string()),
                    ("Project".to_string(), "my-app".to_string()),
                ]
                .into_iter()
                .collect(),
            ),
            ..Default::default()
        };

        let mut environments = BTreeMap::new();
        environments.insert(
            "staging".to_string(),
            EnvironmentDefinition {
                environment: Some("staging".to_string()),
                cluster_name: Some("my-app-staging-eks".to_string()),
                node_instance_types: Some(vec!["t3.medium".to_string()]),
                node_group_min_size: Some(2),
                node_group_max_size: Some(5),
                node_group_desired_size: Some(2),
                tags: Some(
                    [("Environment".to_string(), "staging".to_string())]
                        .into_iter()
                        .collect(),
                ),
                ..Default::default()
            },
        );

        DefinitionsFile {
            defaults,
            environments,
        }
    }

    #[test]
    fn test_resolve_applies_defaults_overlay() {
        let config = resolve("staging", &definitions()).unwrap();
        assert_eq!(config.app_name, "my-app");
        assert_eq!(config.region.as_str(), "us-east-1");
        assert_eq!(config.cluster_name.as_str(), "my-app-staging-eks");
        assert_eq!(config.tags["ManagedBy"], "terraform");
        assert_eq!(config.tags["Environment"], "staging");
    }

    #[test]
    fn test_resolve_unknown_environment() {
        let err = resolve("qa", &definitions()).unwrap_err();
        match err {
            BedrockError::EnvironmentNotFound { requested, known } => {
                assert_eq!(requested, "qa");
                assert_eq!(known, vec!["staging".to_string()]);
            }
            other => panic!("expected EnvironmentNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_lookup_is_case_sensitive() {
        let err = resolve("Staging", &definitions()).unwrap_err();
        assert!(matches!(err, BedrockError::EnvironmentNotFound { .. }));
    }

    #[test]
    fn test_resolve_empty_name_is_not_found() {
        let err = resolve("", &definitions()).unwrap_err();
        assert!(matches!(err, BedrockError::EnvironmentNotFound { .. }));
    }

    #[test]
    fn test_resolve_surfaces_validation_report() {
        let mut defs = definitions();
        defs.environments
            .get_mut("staging")
            .unwrap()
            .node_group_desired_size = Some(9);

        let err = resolve("staging", &defs).unwrap_err();
        match err {
            BedrockError::Validation(report) => {
                assert!(report.names_field("node_group_desired_size"));
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_rejects_mislabeled_definition() {
        let mut defs = definitions();
        let staging = defs.environments.remove("staging").unwrap();
        defs.environments.insert("dev".to_string(), staging);

        let err = resolve("dev", &defs).unwrap_err();
        match err {
            BedrockError::Validation(report) => {
                assert!(report.names_field("environment"));
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_does_not_mutate_definitions() {
        let defs = definitions();
        let before = defs.clone();
        let _ = resolve("staging", &defs);
        let _ = resolve("qa", &defs);
        assert_eq!(defs, before);
    }
}
