//! Definition validation
//!
//! Turns a merged raw [`EnvironmentDefinition`] into a validated
//! [`EnvironmentConfig`]. Validation inspects every field and aggregates all
//! problems into a single [`ValidationReport`] so a caller fixing a
//! definitions file sees the complete list at once instead of one error per
//! run.

use crate::config::schema::EnvironmentDefinition;
use crate::domain::environment::{
    Environment, EnvironmentConfig, NodeGroupSize, ENVIRONMENT_TAG, REQUIRED_TAGS,
};
use crate::domain::errors::ValidationReport;
use crate::domain::names::{ClusterName, KubernetesVersion, Region};
use std::collections::BTreeMap;

/// Validates a merged definition and constructs the immutable configuration
///
/// # Errors
///
/// Returns a [`ValidationReport`] listing every missing or malformed field.
pub fn validate_definition(
    definition: &EnvironmentDefinition,
) -> Result<EnvironmentConfig, ValidationReport> {
    let mut report = ValidationReport::new();

    let environment = match definition.environment.as_deref() {
        None => {
            report.push("environment", "required field is missing");
            None
        }
        Some(value) if value.trim().is_empty() => {
            report.push("environment", "cannot be empty");
            None
        }
        Some(value) => match value.parse::<Environment>() {
            Ok(env) => Some(env),
            Err(reason) => {
                report.push("environment", reason);
                None
            }
        },
    };

    let cluster_name = match definition.cluster_name.as_deref() {
        None => {
            report.push("cluster_name", "required field is missing");
            None
        }
        Some(value) => match ClusterName::new(value) {
            Ok(name) => Some(name),
            Err(reason) => {
                report.push("cluster_name", reason);
                None
            }
        },
    };

    let app_name = match definition.app_name.as_deref() {
        None => {
            report.push("app_name", "required field is missing");
            None
        }
        Some(value) if value.trim().is_empty() => {
            report.push("app_name", "cannot be empty");
            None
        }
        Some(value) => Some(value.to_string()),
    };

    let region = match definition.region.as_deref() {
        None => {
            report.push("region", "required field is missing");
            None
        }
        Some(value) => match Region::new(value) {
            Ok(region) => Some(region),
            Err(reason) => {
                report.push("region", reason);
                None
            }
        },
    };

    let kubernetes_version = match definition.kubernetes_version.as_deref() {
        None => {
            report.push("kubernetes_version", "required field is missing");
            None
        }
        Some(value) => match KubernetesVersion::new(value) {
            Ok(version) => Some(version),
            Err(reason) => {
                report.push("kubernetes_version", reason);
                None
            }
        },
    };

    let node_instance_types = match &definition.node_instance_types {
        None => {
            report.push("node_instance_types", "required field is missing");
            None
        }
        Some(types) if types.is_empty() => {
            report.push(
                "node_instance_types",
                "must contain at least one instance type",
            );
            None
        }
        Some(types) if types.iter().any(|t| t.trim().is_empty()) => {
            report.push("node_instance_types", "instance type entries cannot be empty");
            None
        }
        Some(types) => Some(types.clone()),
    };

    let min_size = size_field(&mut report, "node_group_min_size", definition.node_group_min_size);
    let max_size = size_field(&mut report, "node_group_max_size", definition.node_group_max_size);
    let desired_size = size_field(
        &mut report,
        "node_group_desired_size",
        definition.node_group_desired_size,
    );

    let node_group = match (min_size, max_size, desired_size) {
        (Some(min_size), Some(max_size), Some(desired_size)) => {
            let mut ordered = true;
            if min_size > max_size {
                report.push(
                    "node_group_min_size",
                    format!("must be <= node_group_max_size (min={min_size}, max={max_size})"),
                );
                ordered = false;
            }
            if desired_size < min_size || desired_size > max_size {
                report.push(
                    "node_group_desired_size",
                    format!(
                        "must satisfy min <= desired <= max (min={min_size}, desired={desired_size}, max={max_size})"
                    ),
                );
                ordered = false;
            }
            ordered.then_some(NodeGroupSize {
                min_size,
                max_size,
                desired_size,
            })
        }
        _ => None,
    };

    let tags = validate_tags(&mut report, environment, definition.tags.as_ref());

    match (
        environment,
        cluster_name,
        app_name,
        region,
        kubernetes_version,
        node_instance_types,
        node_group,
        tags,
    ) {
        (
            Some(environment),
            Some(cluster_name),
            Some(app_name),
            Some(region),
            Some(kubernetes_version),
            Some(node_instance_types),
            Some(node_group),
            Some(tags),
        ) if report.is_empty() => Ok(EnvironmentConfig {
            environment,
            cluster_name,
            app_name,
            region,
            kubernetes_version,
            node_instance_types,
            node_group,
            tags,
        }),
        _ => Err(report),
    }
}

/// Checks one node group size field: present and non-negative
fn size_field(report: &mut ValidationReport, field: &str, value: Option<i64>) -> Option<u32> {
    match value {
        None => {
            report.push(field, "required field is missing");
            None
        }
        Some(v) if v < 0 => {
            report.push(field, format!("must be non-negative, got {v}"));
            None
        }
        Some(v) => match u32::try_from(v) {
            Ok(size) => Some(size),
            Err(_) => {
                report.push(field, format!("exceeds the supported range, got {v}"));
                None
            }
        },
    }
}

/// Checks required tags and the `Environment` tag consistency rule
fn validate_tags(
    report: &mut ValidationReport,
    environment: Option<Environment>,
    tags: Option<&BTreeMap<String, String>>,
) -> Option<BTreeMap<String, String>> {
    let Some(tags) = tags else {
        report.push("tags", "required field is missing");
        return None;
    };

    let mut valid = true;
    for key in REQUIRED_TAGS {
        match tags.get(key) {
            None => {
                report.push(format!("tags.{key}"), "required tag is missing");
                valid = false;
            }
            Some(value) if value.trim().is_empty() => {
                report.push(format!("tags.{key}"), "tag value cannot be empty");
                valid = false;
            }
            Some(_) => {}
        }
    }

    if let (Some(env), Some(value)) = (environment, tags.get(ENVIRONMENT_TAG)) {
        if !value.trim().is_empty() && value != env.as_str() {
            report.push(
                format!("tags.{ENVIRONMENT_TAG}"),
                format!("must equal environment '{env}', got '{value}'"),
            );
            valid = false;
        }
    }

    valid.then(|| tags.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn staging_definition() -> EnvironmentDefinition {
        EnvironmentDefinition {
            environment: Some("staging".to_string()),
            cluster_name: Some("my-app-staging-eks".to_string()),
            app_name: Some("my-app".to_string()),
            region: Some("us-east-1".to_string()),
            kubernetes_version: Some("1.31".to_string()),
            node_instance_types: Some(vec!["t3.medium".to_string()]),
            node_group_min_size: Some(2),
            node_group_max_size: Some(5),
            node_group_desired_size: Some(2),
            tags: Some(
                [
                    ("Environment".to_string(), "staging".to_string()),
                    ("ManagedBy".to_string(), "terraform".to_string()),
                    ("Project".to_string(), "my-app".to_string()),
                ]
                .into_iter()
                .collect(),
            ),
        }
    }

    #[test]
    fn test_valid_definition_passes() {
        let config = validate_definition(&staging_definition()).unwrap();
        assert_eq!(config.environment, Environment::Staging);
        assert_eq!(config.cluster_name.as_str(), "my-app-staging-eks");
        assert_eq!(config.region.as_str(), "us-east-1");
        assert_eq!(config.kubernetes_version.as_str(), "1.31");
        assert_eq!(config.node_group.min_size, 2);
        assert_eq!(config.node_group.max_size, 5);
        assert_eq!(config.node_group.desired_size, 2);
        assert_eq!(config.tags["Environment"], "staging");
    }

    #[test]
    fn test_empty_definition_reports_every_required_field() {
        let report = validate_definition(&EnvironmentDefinition::default()).unwrap_err();
        for field in [
            "environment",
            "cluster_name",
            "app_name",
            "region",
            "kubernetes_version",
            "node_instance_types",
            "node_group_min_size",
            "node_group_max_size",
            "node_group_desired_size",
            "tags",
        ] {
            assert!(report.names_field(field), "missing issue for {field}");
        }
    }

    #[test]
    fn test_issues_are_aggregated_not_first_error_only() {
        let mut definition = staging_definition();
        definition.region = Some("nowhere".to_string());
        definition.kubernetes_version = Some("latest".to_string());

        let report = validate_definition(&definition).unwrap_err();
        assert_eq!(report.len(), 2);
        assert!(report.names_field("region"));
        assert!(report.names_field("kubernetes_version"));
    }

    #[test]
    fn test_unrecognized_environment_rejected() {
        let mut definition = staging_definition();
        definition.environment = Some("qa".to_string());

        let report = validate_definition(&definition).unwrap_err();
        assert!(report.names_field("environment"));
    }

    #[test]
    fn test_size_ordering_enforced() {
        let mut definition = staging_definition();
        definition.node_group_desired_size = Some(9);

        let report = validate_definition(&definition).unwrap_err();
        assert!(report.names_field("node_group_desired_size"));
    }

    #[test]
    fn test_min_greater_than_max_rejected() {
        let mut definition = staging_definition();
        definition.node_group_min_size = Some(6);
        definition.node_group_desired_size = Some(6);

        let report = validate_definition(&definition).unwrap_err();
        assert!(report.names_field("node_group_min_size"));
    }

    #[test]
    fn test_negative_size_rejected() {
        let mut definition = staging_definition();
        definition.node_group_min_size = Some(-1);

        let report = validate_definition(&definition).unwrap_err();
        assert!(report.names_field("node_group_min_size"));
    }

    #[test]
    fn test_zero_sizes_allowed() {
        let mut definition = staging_definition();
        definition.node_group_min_size = Some(0);
        definition.node_group_desired_size = Some(0);

        let config = validate_definition(&definition).unwrap();
        assert_eq!(config.node_group.min_size, 0);
        assert_eq!(config.node_group.desired_size, 0);
    }

    #[test]
    fn test_empty_instance_types_rejected() {
        let mut definition = staging_definition();
        definition.node_instance_types = Some(vec![]);

        let report = validate_definition(&definition).unwrap_err();
        assert!(report.names_field("node_instance_types"));
    }

    #[test]
    fn test_missing_managed_by_tag_named_in_report() {
        let mut definition = staging_definition();
        definition
            .tags
            .as_mut()
            .unwrap()
            .remove("ManagedBy");

        let report = validate_definition(&definition).unwrap_err();
        assert!(report.names_field("tags.ManagedBy"));
        assert!(!report.names_field("tags.Project"));
    }

    #[test]
    fn test_environment_tag_must_match_environment() {
        let mut definition = staging_definition();
        definition
            .tags
            .as_mut()
            .unwrap()
            .insert("Environment".to_string(), "production".to_string());

        let report = validate_definition(&definition).unwrap_err();
        assert!(report.names_field("tags.Environment"));
    }
}
