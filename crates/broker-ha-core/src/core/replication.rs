// crates/broker-ha-core/src/core/replication.rs
// ============================================================================
// Module: Broker HA Replication Backup Schema
// Description: Attribute set and resolved configuration for the backup role.
// Purpose: Declare the replication-backup policy domain and its output value.
// Dependencies: crate::core::{attributes, scale_down, schema}, serde
// ============================================================================

//! ## Overview
//! The replication-backup domain declares the attributes an administrator
//! sets when a broker node acts as a replication backup: whether it fails
//! back to a returning live node, how long the initial journal sync may
//! take, how many replicated journals it retains, and whether it restarts as
//! a backup after failback. The scale-down subset is merged into the same
//! schema and resolved by its own builder.
//! Invariants:
//! - Attribute statics are process-wide and immutable.
//! - The live schema and the configuration-template schema share one
//!   attribute set under distinct addressing identities.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::LazyLock;

use serde::Deserialize;
use serde::Serialize;

use crate::core::attributes::AttributeDefinition;
use crate::core::attributes::AttributeKind;
use crate::core::attributes::DefaultValue;
use crate::core::attributes::ValueBounds;
use crate::core::scale_down::SCALE_DOWN_ATTRIBUTES;
use crate::core::scale_down::ScaleDownConfiguration;
use crate::core::schema::PolicyPath;
use crate::core::schema::Schema;

// ============================================================================
// SECTION: Defaults
// ============================================================================

/// Default initial replication sync timeout in milliseconds.
pub const DEFAULT_INITIAL_REPLICATION_SYNC_TIMEOUT_MS: i64 = 30_000;

/// Default number of replicated journals a backup keeps after failback.
pub const DEFAULT_MAX_SAVED_REPLICATED_JOURNAL_SIZE: i32 = 2;

// ============================================================================
// SECTION: Attribute Declarations
// ============================================================================

/// `cluster-name`: cluster configuration used for replication.
pub static CLUSTER_NAME: AttributeDefinition =
    AttributeDefinition::optional("cluster-name", AttributeKind::Str);

/// `group-name`: remote group of live brokers this backup may connect to.
pub static GROUP_NAME: AttributeDefinition =
    AttributeDefinition::optional("group-name", AttributeKind::Str);

/// `allow-failback`: whether the backup yields to a returning live node.
pub static ALLOW_FAILBACK: AttributeDefinition =
    AttributeDefinition::required("allow-failback", AttributeKind::Boolean)
        .with_default(DefaultValue::Bool(false));

/// `initial-replication-sync-timeout`: milliseconds to wait for the initial
/// journal synchronization. Non-negative.
pub static INITIAL_REPLICATION_SYNC_TIMEOUT: AttributeDefinition =
    AttributeDefinition::required("initial-replication-sync-timeout", AttributeKind::Long)
        .with_default(DefaultValue::Long(DEFAULT_INITIAL_REPLICATION_SYNC_TIMEOUT_MS))
        .with_bounds(ValueBounds::at_least(0));

/// `max-saved-replicated-journal-size`: how many replicated journals the
/// backup keeps before deleting the oldest. Non-negative.
pub static MAX_SAVED_REPLICATED_JOURNAL_SIZE: AttributeDefinition =
    AttributeDefinition::required("max-saved-replicated-journal-size", AttributeKind::Int)
        .with_default(DefaultValue::Int(DEFAULT_MAX_SAVED_REPLICATED_JOURNAL_SIZE))
        .with_bounds(ValueBounds::at_least(0));

/// `restart-backup`: whether the node restarts as a backup after failback.
pub static RESTART_BACKUP: AttributeDefinition =
    AttributeDefinition::required("restart-backup", AttributeKind::Boolean)
        .with_default(DefaultValue::Bool(true));

/// Scalar attribute subset of the backup role, in declaration order.
static BACKUP_ATTRIBUTES: [&AttributeDefinition; 6] = [
    &CLUSTER_NAME,
    &GROUP_NAME,
    &ALLOW_FAILBACK,
    &INITIAL_REPLICATION_SYNC_TIMEOUT,
    &MAX_SAVED_REPLICATED_JOURNAL_SIZE,
    &RESTART_BACKUP,
];

// ============================================================================
// SECTION: Schema Instances
// ============================================================================

/// Live replication-backup schema: the policy a running broker activates.
pub static REPLICATION_BACKUP: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new(PolicyPath::new("ha-policy", "replication-backup"), BACKUP_ATTRIBUTES)
        .merge(&SCALE_DOWN_ATTRIBUTES)
});

/// Configuration-template replication-backup schema: structurally identical
/// to the live schema, addressable under its own identity.
pub static REPLICATION_BACKUP_TEMPLATE: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new(PolicyPath::new("configuration", "replication-backup"), BACKUP_ATTRIBUTES)
        .merge(&SCALE_DOWN_ATTRIBUTES)
});

// ============================================================================
// SECTION: Replication Policy Configuration
// ============================================================================

/// Resolved replication-backup policy, consumed by HA policy activation.
///
/// # Invariants
/// - Created all-or-nothing by one build invocation; never mutated after.
/// - Absent optional fields were undefined in the model; absence and empty
///   string are distinct states.
/// - `scale_down` is present exactly when the sub-policy is enabled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplicationPolicyConfiguration {
    /// Whether the backup yields to a returning live node.
    pub allow_failback: bool,
    /// Milliseconds to wait for the initial journal synchronization.
    pub initial_replication_sync_timeout: i64,
    /// Replicated journals kept before the oldest is deleted.
    pub max_saved_replicated_journal_size: i32,
    /// Whether the node restarts as a backup after failback.
    pub restart_backup: bool,
    /// Cluster configuration used for replication, when configured.
    pub cluster_name: Option<String>,
    /// Remote live-broker group, when configured.
    pub group_name: Option<String>,
    /// Scale-down sub-policy, when enabled.
    pub scale_down: Option<ScaleDownConfiguration>,
}
