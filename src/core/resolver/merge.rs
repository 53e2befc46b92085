//! Defaults overlay merge
//!
//! Produces a new definition where every field set in the override replaces
//! the corresponding field in the base. Tags are merged key-by-key with the
//! override winning on collision; all other fields are wholesale-replaced.
//! Neither input is mutated.

use crate::config::schema::EnvironmentDefinition;
use std::collections::BTreeMap;

/// Merges an override definition over a base definition
///
/// `merge(d, d)` returns a record equal to `d`: the operation is idempotent.
pub fn merge(
    base: &EnvironmentDefinition,
    overlay: &EnvironmentDefinition,
) -> EnvironmentDefinition {
    EnvironmentDefinition {
        environment: overlay
            .environment
            .clone()
            .or_else(|| base.environment.clone()),
        cluster_name: overlay
            .cluster_name
            .clone()
            .or_else(|| base.cluster_name.clone()),
        app_name: overlay.app_name.clone().or_else(|| base.app_name.clone()),
        region: overlay.region.clone().or_else(|| base.region.clone()),
        kubernetes_version: overlay
            .kubernetes_version
            .clone()
            .or_else(|| base.kubernetes_version.clone()),
        node_instance_types: overlay
            .node_instance_types
            .clone()
            .or_else(|| base.node_instance_types.clone()),
        node_group_min_size: overlay.node_group_min_size.or(base.node_group_min_size),
        node_group_max_size: overlay.node_group_max_size.or(base.node_group_max_size),
        node_group_desired_size: overlay
            .node_group_desired_size
            .or(base.node_group_desired_size),
        tags: merge_tags(base.tags.as_ref(), overlay.tags.as_ref()),
    }
}

/// Merges tag maps key-by-key; the override wins on key collision
fn merge_tags(
    base: Option<&BTreeMap<String, String>>,
    overlay: Option<&BTreeMap<String, String>>,
) -> Option<BTreeMap<String, String>> {
    match (base, overlay) {
        (None, None) => None,
        (Some(base), None) => Some(base.clone()),
        (None, Some(overlay)) => Some(overlay.clone()),
        (Some(base), Some(overlay)) => {
            let mut merged = base.clone();
            for (key, value) in overlay {
                merged.insert(key.clone(), value.clone());
            }
            Some(merged)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_override_wins_on_scalars() {
        let base = EnvironmentDefinition {
            region: Some("us-east-1".to_string()),
            kubernetes_version: Some("1.31".to_string()),
            ..Default::default()
        };
        let overlay = EnvironmentDefinition {
            region: Some("eu-central-1".to_string()),
            ..Default::default()
        };

        let merged = merge(&base, &overlay);
        assert_eq!(merged.region.as_deref(), Some("eu-central-1"));
        assert_eq!(merged.kubernetes_version.as_deref(), Some("1.31"));
    }

    #[test]
    fn test_sequences_are_wholesale_replaced() {
        let base = EnvironmentDefinition {
            node_instance_types: Some(vec!["t3.small".to_string(), "t3.medium".to_string()]),
            ..Default::default()
        };
        let overlay = EnvironmentDefinition {
            node_instance_types: Some(vec!["m5.large".to_string()]),
            ..Default::default()
        };

        let merged = merge(&base, &overlay);
        assert_eq!(
            merged.node_instance_types,
            Some(vec!["m5.large".to_string()])
        );
    }

    #[test]
    fn test_tags_merge_key_by_key() {
        let base = EnvironmentDefinition {
            tags: Some(tags(&[("ManagedBy", "terraform"), ("Project", "my-app")])),
            ..Default::default()
        };
        let overlay = EnvironmentDefinition {
            tags: Some(tags(&[("Environment", "dev"), ("Project", "my-app-dev")])),
            ..Default::default()
        };

        let merged = merge(&base, &overlay);
        let merged_tags = merged.tags.unwrap();
        assert_eq!(merged_tags["ManagedBy"], "terraform");
        assert_eq!(merged_tags["Environment"], "dev");
        // override wins on collision
        assert_eq!(merged_tags["Project"], "my-app-dev");
    }

    #[test]
    fn test_absent_tags_on_one_side() {
        let base = EnvironmentDefinition {
            tags: Some(tags(&[("ManagedBy", "terraform")])),
            ..Default::default()
        };
        let overlay = EnvironmentDefinition::default();

        let merged = merge(&base, &overlay);
        assert_eq!(merged.tags, base.tags);

        let merged = merge(&overlay, &base);
        assert_eq!(merged.tags, base.tags);

        let merged = merge(&overlay, &overlay);
        assert_eq!(merged.tags, None);
    }

    #[test]
    fn test_merge_is_idempotent() {
        let definition = EnvironmentDefinition {
            environment: Some("staging".to_string()),
            cluster_name: Some("my-app-staging-eks".to_string()),
            node_instance_types: Some(vec!["t3.medium".to_string()]),
            node_group_min_size: Some(2),
            tags: Some(tags(&[("Environment", "staging")])),
            ..Default::default()
        };

        assert_eq!(merge(&definition, &definition), definition);
    }

    #[test]
    fn test_inputs_are_not_mutated() {
        let base = EnvironmentDefinition {
            region: Some("us-east-1".to_string()),
            ..Default::default()
        };
        let overlay = EnvironmentDefinition {
            region: Some("eu-central-1".to_string()),
            ..Default::default()
        };
        let base_before = base.clone();
        let overlay_before = overlay.clone();

        let _ = merge(&base, &overlay);
        assert_eq!(base, base_before);
        assert_eq!(overlay, overlay_before);
    }
}
