// crates/broker-ha-core/src/core/schema.rs
// ============================================================================
// Module: Broker HA Policy Schemas
// Description: Addressable, ordered attribute sets for HA policy domains.
// Purpose: Compose attribute definitions into identity-bearing schemas.
// Dependencies: crate::core::attributes
// ============================================================================

//! ## Overview
//! A schema is an ordered collection of attribute definitions under an
//! addressing identity. Two schemas may share one attribute set under
//! different identities (a live policy and its configuration template);
//! identity distinguishes them, structure does not.
//! Invariants:
//! - Attribute order is presentation order only; resolution never depends
//!   on it.
//! - Attribute names are unique across merged sets. The invariant holds at
//!   schema construction; resolution does not re-check it.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;
use std::fmt;

use crate::core::attributes::AttributeDefinition;

// ============================================================================
// SECTION: Policy Paths
// ============================================================================

/// Addressing identity of a policy schema.
///
/// # Invariants
/// - `(key, name)` pairs are stable; equality of paths is identity of
///   schemas, independent of attribute structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PolicyPath {
    /// Addressing context key.
    key: &'static str,
    /// Policy name within the context.
    name: &'static str,
}

impl PolicyPath {
    /// Creates a policy path.
    #[must_use]
    pub const fn new(key: &'static str, name: &'static str) -> Self {
        Self { key, name }
    }

    /// Returns the addressing context key.
    #[must_use]
    pub const fn key(self) -> &'static str {
        self.key
    }

    /// Returns the policy name within the context.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.name
    }
}

impl fmt::Display for PolicyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.name)
    }
}

// ============================================================================
// SECTION: Schemas
// ============================================================================

/// Ordered attribute set under an addressing identity.
///
/// # Invariants
/// - `attributes` preserves declaration order; merged sub-schemas keep their
///   internal order.
/// - Attribute names are unique (construction-time invariant).
/// - Immutable after construction; safely shared across concurrent builds.
#[derive(Debug, Clone)]
pub struct Schema {
    /// Addressing identity.
    path: PolicyPath,
    /// Ordered attribute definitions.
    attributes: Vec<&'static AttributeDefinition>,
}

impl Schema {
    /// Creates a schema from an ordered attribute list.
    ///
    /// # Panics
    ///
    /// Panics in debug builds when two attributes share a name; this can
    /// only occur while declaring a schema, never at resolution time.
    #[must_use]
    pub fn new(
        path: PolicyPath,
        attributes: impl IntoIterator<Item = &'static AttributeDefinition>,
    ) -> Self {
        let schema = Self { path, attributes: attributes.into_iter().collect() };
        debug_assert!(schema.names_are_unique(), "schema {path} declares a duplicate attribute");
        schema
    }

    /// Appends a sub-schema's attribute list, preserving its internal order.
    ///
    /// # Panics
    ///
    /// Panics in debug builds when the merge introduces a duplicate name.
    #[must_use]
    pub fn merge(mut self, sub_schema: &[&'static AttributeDefinition]) -> Self {
        self.attributes.extend_from_slice(sub_schema);
        debug_assert!(
            self.names_are_unique(),
            "schema {} merge declares a duplicate attribute",
            self.path
        );
        self
    }

    /// Returns the addressing identity.
    #[must_use]
    pub const fn path(&self) -> PolicyPath {
        self.path
    }

    /// Returns the complete, order-preserving attribute list.
    #[must_use]
    pub fn attributes(&self) -> &[&'static AttributeDefinition] {
        &self.attributes
    }

    /// Looks up an attribute definition by name.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&'static AttributeDefinition> {
        self.attributes.iter().copied().find(|definition| definition.name() == name)
    }

    /// Returns whether every attribute name appears exactly once.
    fn names_are_unique(&self) -> bool {
        let mut seen = BTreeSet::new();
        self.attributes.iter().all(|definition| seen.insert(definition.name()))
    }
}
