// crates/broker-ha-core/src/runtime/builder.rs
// ============================================================================
// Module: Broker HA Configuration Builders
// Description: Model-to-configuration builders for the backup policy domain.
// Purpose: Assemble immutable policy configurations or fail with the cause.
// Dependencies: crate::core, crate::interfaces, crate::runtime::resolver
// ============================================================================

//! ## Overview
//! Builders turn a model into a finished policy configuration. The outer
//! [`ReplicationBackupBuilder`] resolves its scalar attributes in declaration
//! order and delegates the scale-down subset to the nested
//! [`ScaleDownBuilder`] it owns; a nested failure aborts the outer build with
//! the cause surfaced unchanged.
//! Invariants:
//! - Construction is all-or-nothing; no partial configuration is ever
//!   returned.
//! - Builders read the model only; neither the model, the schemas, nor any
//!   process-wide state is mutated, and no I/O occurs.
//! - Repeated builds of identical models produce value-equal configurations.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::replication::ALLOW_FAILBACK;
use crate::core::replication::CLUSTER_NAME;
use crate::core::replication::GROUP_NAME;
use crate::core::replication::INITIAL_REPLICATION_SYNC_TIMEOUT;
use crate::core::replication::MAX_SAVED_REPLICATED_JOURNAL_SIZE;
use crate::core::replication::RESTART_BACKUP;
use crate::core::replication::ReplicationPolicyConfiguration;
use crate::core::scale_down::SCALE_DOWN;
use crate::core::scale_down::SCALE_DOWN_CLUSTER_NAME;
use crate::core::scale_down::SCALE_DOWN_CONNECTORS;
use crate::core::scale_down::SCALE_DOWN_DISCOVERY_GROUP;
use crate::core::scale_down::SCALE_DOWN_GROUP_NAME;
use crate::core::scale_down::ScaleDownConfiguration;
use crate::interfaces::AttributeModel;
use crate::runtime::resolver;
use crate::runtime::resolver::ResolutionError;

// ============================================================================
// SECTION: Scale-Down Builder
// ============================================================================

/// Builder for the scale-down sub-configuration.
///
/// # Invariants
/// - Resolves only the scale-down attribute subset.
/// - A disabled sub-policy resolves to no configuration at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScaleDownBuilder;

impl ScaleDownBuilder {
    /// Creates a scale-down builder.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Resolves the scale-down subset against the model.
    ///
    /// # Errors
    ///
    /// Returns [`ResolutionError`] when any scale-down attribute fails
    /// validation, including a discovery-group/connectors conflict.
    pub fn build(
        &self,
        model: &dyn AttributeModel,
    ) -> Result<Option<ScaleDownConfiguration>, ResolutionError> {
        if !resolver::resolve_bool(&SCALE_DOWN, model)? {
            return Ok(None);
        }
        let cluster_name = resolver::resolve_opt_string(&SCALE_DOWN_CLUSTER_NAME, model)?;
        let group_name = resolver::resolve_opt_string(&SCALE_DOWN_GROUP_NAME, model)?;
        let discovery_group = resolver::resolve_opt_string(&SCALE_DOWN_DISCOVERY_GROUP, model)?;
        let connectors =
            resolver::resolve_opt_string_list(&SCALE_DOWN_CONNECTORS, model)?.unwrap_or_default();
        Ok(Some(ScaleDownConfiguration { cluster_name, group_name, discovery_group, connectors }))
    }
}

// ============================================================================
// SECTION: Replication Backup Builder
// ============================================================================

/// Builder for the replication-backup policy configuration.
///
/// # Invariants
/// - Owns the nested scale-down builder; delegation is explicit composition,
///   not a cross-module call.
/// - Retains no reference to the returned configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReplicationBackupBuilder {
    /// Nested builder for the scale-down subset.
    scale_down: ScaleDownBuilder,
}

impl ReplicationBackupBuilder {
    /// Creates a replication-backup builder with its nested scale-down
    /// builder.
    #[must_use]
    pub const fn new() -> Self {
        Self { scale_down: ScaleDownBuilder::new() }
    }

    /// Resolves the full backup policy against the model.
    ///
    /// Scalar attributes resolve in declaration order; the order carries no
    /// semantics beyond determinism. The scale-down delegation depends on
    /// nothing resolved here.
    ///
    /// # Errors
    ///
    /// Returns [`ResolutionError::MissingAttribute`] for a required,
    /// default-less attribute left undefined,
    /// [`ResolutionError::InvalidAttributeValue`] for a defined value that
    /// fails kind or range validation, and [`ResolutionError::Nested`] when
    /// the scale-down delegation fails; the nested cause renders unchanged.
    pub fn build(
        &self,
        model: &dyn AttributeModel,
    ) -> Result<ReplicationPolicyConfiguration, ResolutionError> {
        let cluster_name = resolver::resolve_opt_string(&CLUSTER_NAME, model)?;
        let group_name = resolver::resolve_opt_string(&GROUP_NAME, model)?;
        let allow_failback = resolver::resolve_bool(&ALLOW_FAILBACK, model)?;
        let initial_replication_sync_timeout =
            resolver::resolve_long(&INITIAL_REPLICATION_SYNC_TIMEOUT, model)?;
        let max_saved_replicated_journal_size =
            resolver::resolve_int(&MAX_SAVED_REPLICATED_JOURNAL_SIZE, model)?;
        let restart_backup = resolver::resolve_bool(&RESTART_BACKUP, model)?;
        let scale_down = self
            .scale_down
            .build(model)
            .map_err(|cause| ResolutionError::Nested(Box::new(cause)))?;
        Ok(ReplicationPolicyConfiguration {
            allow_failback,
            initial_replication_sync_timeout,
            max_saved_replicated_journal_size,
            restart_backup,
            cluster_name,
            group_name,
            scale_down,
        })
    }
}
