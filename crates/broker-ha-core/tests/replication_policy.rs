// crates/broker-ha-core/tests/replication_policy.rs
// ============================================================================
// Module: Replication Policy Tests
// Description: Validate replication-backup configuration builds end to end.
// Purpose: Cover defaults, overrides, rejection paths, and schema identity.
// Dependencies: broker-ha-core, serde_json
// ============================================================================

//! Build-path tests for the replication-backup policy domain.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    reason = "Test-only assertions and helpers are permitted."
)]

use std::collections::BTreeSet;

use broker_ha_core::AttributeKind;
use broker_ha_core::Model;
use broker_ha_core::REPLICATION_BACKUP;
use broker_ha_core::REPLICATION_BACKUP_TEMPLATE;
use broker_ha_core::ReplicationBackupBuilder;
use broker_ha_core::ResolutionError;
use broker_ha_core::core::replication::DEFAULT_INITIAL_REPLICATION_SYNC_TIMEOUT_MS;
use broker_ha_core::core::replication::DEFAULT_MAX_SAVED_REPLICATED_JOURNAL_SIZE;
use serde_json::json;

#[test]
fn empty_model_resolves_declared_defaults() {
    let configuration = ReplicationBackupBuilder::new().build(&Model::new()).unwrap();
    assert!(!configuration.allow_failback);
    assert_eq!(
        configuration.initial_replication_sync_timeout,
        DEFAULT_INITIAL_REPLICATION_SYNC_TIMEOUT_MS
    );
    assert_eq!(
        configuration.max_saved_replicated_journal_size,
        DEFAULT_MAX_SAVED_REPLICATED_JOURNAL_SIZE
    );
    assert!(configuration.restart_backup);
    assert_eq!(configuration.cluster_name, None);
    assert_eq!(configuration.group_name, None);
    assert_eq!(configuration.scale_down, None);
}

#[test]
fn explicit_values_override_defaults() {
    let model = Model::new()
        .with("allow-failback", json!(true))
        .with("restart-backup", json!(false))
        .with("max-saved-replicated-journal-size", json!(5))
        .with("initial-replication-sync-timeout", json!(30_000));
    let configuration = ReplicationBackupBuilder::new().build(&model).unwrap();
    assert!(configuration.allow_failback);
    assert!(!configuration.restart_backup);
    assert_eq!(configuration.max_saved_replicated_journal_size, 5);
    assert_eq!(configuration.initial_replication_sync_timeout, 30_000);
    assert_eq!(configuration.cluster_name, None);
    assert_eq!(configuration.scale_down, None);
}

#[test]
fn negative_journal_size_is_rejected() {
    let model = Model::new().with("max-saved-replicated-journal-size", json!(-1));
    let err = ReplicationBackupBuilder::new().build(&model).unwrap_err();
    assert!(matches!(
        err,
        ResolutionError::InvalidAttributeValue {
            attribute: "max-saved-replicated-journal-size",
            ..
        }
    ));
    assert!(err.to_string().contains("max-saved-replicated-journal-size"));
}

#[test]
fn negative_sync_timeout_is_rejected() {
    let model = Model::new().with("initial-replication-sync-timeout", json!(-5));
    let err = ReplicationBackupBuilder::new().build(&model).unwrap_err();
    assert!(matches!(
        err,
        ResolutionError::InvalidAttributeValue { attribute: "initial-replication-sync-timeout", .. }
    ));
}

#[test]
fn mistyped_failback_flag_is_rejected() {
    let model = Model::new().with("allow-failback", json!("yes"));
    let err = ReplicationBackupBuilder::new().build(&model).unwrap_err();
    assert!(
        matches!(err, ResolutionError::InvalidAttributeValue { attribute: "allow-failback", .. })
    );
}

#[test]
fn empty_cluster_name_is_distinct_from_absent() {
    let named = Model::new().with("cluster-name", json!(""));
    let configuration = ReplicationBackupBuilder::new().build(&named).unwrap();
    assert_eq!(configuration.cluster_name, Some(String::new()));

    let unnamed = ReplicationBackupBuilder::new().build(&Model::new()).unwrap();
    assert_eq!(unnamed.cluster_name, None);
}

#[test]
fn repeated_builds_are_value_equal() {
    let model = Model::new()
        .with("group-name", json!("backup-group"))
        .with("initial-replication-sync-timeout", json!(12_000));
    let builder = ReplicationBackupBuilder::new();
    let first = builder.build(&model).unwrap();
    let second = builder.build(&model).unwrap();
    assert_eq!(first, second);
}

#[test]
fn schema_lists_attributes_in_declaration_order() {
    let names: Vec<&str> =
        REPLICATION_BACKUP.attributes().iter().map(|definition| definition.name()).collect();
    assert_eq!(
        names,
        [
            "cluster-name",
            "group-name",
            "allow-failback",
            "initial-replication-sync-timeout",
            "max-saved-replicated-journal-size",
            "restart-backup",
            "scale-down",
            "scale-down-cluster-name",
            "scale-down-group-name",
            "scale-down-discovery-group",
            "scale-down-connectors",
        ]
    );
}

#[test]
fn schema_names_stay_unique_across_the_merge() {
    let names: BTreeSet<&str> =
        REPLICATION_BACKUP.attributes().iter().map(|definition| definition.name()).collect();
    assert_eq!(names.len(), REPLICATION_BACKUP.attributes().len());
}

#[test]
fn schema_identities_share_one_attribute_set() {
    assert_ne!(REPLICATION_BACKUP.path(), REPLICATION_BACKUP_TEMPLATE.path());
    let live: Vec<&str> =
        REPLICATION_BACKUP.attributes().iter().map(|definition| definition.name()).collect();
    let template: Vec<&str> = REPLICATION_BACKUP_TEMPLATE
        .attributes()
        .iter()
        .map(|definition| definition.name())
        .collect();
    assert_eq!(live, template);
}

#[test]
fn attribute_lookup_reaches_the_merged_sub_schema() {
    let definition = REPLICATION_BACKUP.attribute("scale-down").unwrap();
    assert_eq!(definition.kind(), AttributeKind::Boolean);
    assert!(REPLICATION_BACKUP.attribute("journal-directory").is_none());
}
