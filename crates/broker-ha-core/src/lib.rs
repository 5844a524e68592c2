// crates/broker-ha-core/src/lib.rs
// ============================================================================
// Module: Broker HA Core Library
// Description: Schema-driven HA policy configuration resolution.
// Purpose: Resolve administrator-declared replication policies into runtime
//          configuration values.
// Dependencies: serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! Broker HA Core translates an administrator's replication-backup policy
//! declaration into an immutable runtime configuration: named, typed
//! attribute definitions are resolved against a host-supplied model with
//! defaults, optionality, and validation, and the scale-down sub-schema is
//! delegated to its own nested builder.
//! Invariants:
//! - Schemas are built once, never mutated, and safely shared across
//!   concurrent builds.
//! - A build invocation is synchronous and all-or-nothing; failures name the
//!   offending attribute and leave no partial configuration behind.
//! - Model values are untrusted; resolution fails closed on every kind or
//!   range mismatch.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use crate::core::attributes::AttributeDefinition;
pub use crate::core::attributes::AttributeKind;
pub use crate::core::attributes::DefaultValue;
pub use crate::core::attributes::ValueBounds;
pub use crate::core::model::Model;
pub use crate::core::replication::REPLICATION_BACKUP;
pub use crate::core::replication::REPLICATION_BACKUP_TEMPLATE;
pub use crate::core::replication::ReplicationPolicyConfiguration;
pub use crate::core::scale_down::SCALE_DOWN_ATTRIBUTES;
pub use crate::core::scale_down::ScaleDownConfiguration;
pub use crate::core::schema::PolicyPath;
pub use crate::core::schema::Schema;
pub use crate::interfaces::AttributeModel;
pub use crate::runtime::builder::ReplicationBackupBuilder;
pub use crate::runtime::builder::ScaleDownBuilder;
pub use crate::runtime::resolver::ResolutionError;
