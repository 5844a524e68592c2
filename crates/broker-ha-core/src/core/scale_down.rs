// crates/broker-ha-core/src/core/scale_down.rs
// ============================================================================
// Module: Broker HA Scale-Down Sub-Schema
// Description: Scale-down attribute set and resolved sub-configuration.
// Purpose: Declare how a decommissioned backup redistributes its messages.
// Dependencies: crate::core::attributes, serde
// ============================================================================

//! ## Overview
//! Scale-down is the sub-policy controlling message redistribution when a
//! backup is taken out of service instead of becoming active. Its attribute
//! set is declared here and merged into each owning policy schema without
//! altering its internal order; resolution of the subset is delegated to the
//! scale-down builder.
//! Invariants:
//! - `scale-down-discovery-group` and `scale-down-connectors` are mutually
//!   exclusive ways to locate redistribution targets.
//! - The sub-policy is disabled unless the model enables it; a disabled
//!   sub-policy yields no sub-configuration at all.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::attributes::AttributeDefinition;
use crate::core::attributes::AttributeKind;
use crate::core::attributes::DefaultValue;

// ============================================================================
// SECTION: Attribute Declarations
// ============================================================================

/// `scale-down`: enables the scale-down sub-policy. Disabled by default.
pub static SCALE_DOWN: AttributeDefinition =
    AttributeDefinition::required("scale-down", AttributeKind::Boolean)
        .with_default(DefaultValue::Bool(false));

/// `scale-down-cluster-name`: cluster to redistribute messages into.
pub static SCALE_DOWN_CLUSTER_NAME: AttributeDefinition =
    AttributeDefinition::optional("scale-down-cluster-name", AttributeKind::Str);

/// `scale-down-group-name`: broker group to redistribute messages into.
pub static SCALE_DOWN_GROUP_NAME: AttributeDefinition =
    AttributeDefinition::optional("scale-down-group-name", AttributeKind::Str);

/// `scale-down-discovery-group`: discovery group used to locate
/// redistribution targets.
pub static SCALE_DOWN_DISCOVERY_GROUP: AttributeDefinition =
    AttributeDefinition::optional("scale-down-discovery-group", AttributeKind::Str)
        .with_alternatives(&["scale-down-connectors"]);

/// `scale-down-connectors`: explicit connector list used to locate
/// redistribution targets.
pub static SCALE_DOWN_CONNECTORS: AttributeDefinition =
    AttributeDefinition::optional("scale-down-connectors", AttributeKind::StrList)
        .with_alternatives(&["scale-down-discovery-group"]);

/// Complete scale-down attribute subset, in declaration order. Owning
/// schemas merge this list verbatim.
pub static SCALE_DOWN_ATTRIBUTES: [&AttributeDefinition; 5] = [
    &SCALE_DOWN,
    &SCALE_DOWN_CLUSTER_NAME,
    &SCALE_DOWN_GROUP_NAME,
    &SCALE_DOWN_DISCOVERY_GROUP,
    &SCALE_DOWN_CONNECTORS,
];

// ============================================================================
// SECTION: Scale-Down Configuration
// ============================================================================

/// Resolved scale-down sub-configuration.
///
/// # Invariants
/// - Exists only when the sub-policy is enabled; absence of the whole value
///   means scale-down is off.
/// - Absent optional fields were undefined in the model; absence and empty
///   string are distinct states.
/// - Immutable after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleDownConfiguration {
    /// Cluster to redistribute messages into, when configured.
    pub cluster_name: Option<String>,
    /// Broker group to redistribute messages into, when configured.
    pub group_name: Option<String>,
    /// Discovery group used to locate redistribution targets.
    pub discovery_group: Option<String>,
    /// Explicit connector list used to locate redistribution targets.
    pub connectors: Vec<String>,
}
