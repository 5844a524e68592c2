// crates/broker-ha-core/tests/scale_down.rs
// ============================================================================
// Module: Scale-Down Tests
// Description: Validate nested scale-down resolution and error propagation.
// Purpose: Cover the enable gate, member resolution, and nested failures.
// Dependencies: broker-ha-core, serde_json
// ============================================================================

//! Nested sub-schema tests for the scale-down builder and its delegation.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    reason = "Test-only assertions and helpers are permitted."
)]

use broker_ha_core::Model;
use broker_ha_core::ReplicationBackupBuilder;
use broker_ha_core::ResolutionError;
use broker_ha_core::ScaleDownBuilder;
use broker_ha_core::ScaleDownConfiguration;
use serde_json::json;

#[test]
fn scale_down_is_disabled_by_default() {
    let resolved = ScaleDownBuilder::new().build(&Model::new()).unwrap();
    assert_eq!(resolved, None);
}

#[test]
fn enabled_scale_down_resolves_its_members() {
    let model = Model::new()
        .with("scale-down", json!(true))
        .with("scale-down-cluster-name", json!("remaining-cluster"))
        .with("scale-down-connectors", json!(["node-a", "node-b"]));
    let resolved = ScaleDownBuilder::new().build(&model).unwrap();
    assert_eq!(
        resolved,
        Some(ScaleDownConfiguration {
            cluster_name: Some("remaining-cluster".to_owned()),
            group_name: None,
            discovery_group: None,
            connectors: vec!["node-a".to_owned(), "node-b".to_owned()],
        })
    );
}

#[test]
fn enabled_scale_down_without_members_is_bare() {
    let model = Model::new().with("scale-down", json!(true));
    let resolved = ScaleDownBuilder::new().build(&model).unwrap();
    assert_eq!(resolved, Some(ScaleDownConfiguration::default()));
}

#[test]
fn discovery_group_conflicts_with_connectors() {
    let model = Model::new()
        .with("scale-down", json!(true))
        .with("scale-down-discovery-group", json!("dg-1"))
        .with("scale-down-connectors", json!(["node-a"]));
    let err = ScaleDownBuilder::new().build(&model).unwrap_err();
    assert!(matches!(
        err,
        ResolutionError::InvalidAttributeValue { attribute: "scale-down-discovery-group", .. }
    ));
    assert!(err.to_string().contains("scale-down-connectors"));
}

#[test]
fn delegation_surfaces_the_sub_configuration() {
    let model = Model::new()
        .with("scale-down", json!(true))
        .with("scale-down-group-name", json!("drain-group"));
    let configuration = ReplicationBackupBuilder::new().build(&model).unwrap();
    let scale_down = configuration.scale_down.unwrap();
    assert_eq!(scale_down.group_name, Some("drain-group".to_owned()));
}

#[test]
fn nested_failure_aborts_the_outer_build() {
    let model = Model::new().with("scale-down", json!("nope"));
    let err = ReplicationBackupBuilder::new().build(&model).unwrap_err();
    let ResolutionError::Nested(cause) = &err else {
        panic!("expected a nested resolution failure, got {err:?}");
    };
    assert!(matches!(
        **cause,
        ResolutionError::InvalidAttributeValue { attribute: "scale-down", .. }
    ));
}

#[test]
fn nested_failure_renders_the_cause_unchanged() {
    let model = Model::new().with("scale-down", json!("nope"));
    let inner = ScaleDownBuilder::new().build(&model).unwrap_err();
    let outer = ReplicationBackupBuilder::new().build(&model).unwrap_err();
    assert!(matches!(outer, ResolutionError::Nested(_)));
    assert_eq!(outer.to_string(), inner.to_string());
}
