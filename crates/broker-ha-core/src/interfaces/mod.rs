// crates/broker-ha-core/src/interfaces/mod.rs
// ============================================================================
// Module: Broker HA Interfaces
// Description: Boundary contracts between the resolution core and its host.
// Purpose: Define the model-access surface supplied by the management layer.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! The resolution core never parses a wire or file format itself; the host
//! management layer supplies currently-configured attribute values through
//! [`AttributeModel`]. Implementations must be deterministic: repeated
//! lookups during one build observe identical values.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Value;

// ============================================================================
// SECTION: Attribute Model
// ============================================================================

/// Read-only view of the attribute values configured by the management layer.
///
/// Returning `None` means the attribute is undefined. A returned JSON `null`
/// is equivalent to undefined; the resolver treats both identically, so
/// implementations need not filter nulls themselves.
pub trait AttributeModel {
    /// Returns the raw model value for the attribute, when one is defined.
    fn value_of(&self, attribute: &str) -> Option<&Value>;
}
