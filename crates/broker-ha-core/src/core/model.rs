// crates/broker-ha-core/src/core/model.rs
// ============================================================================
// Module: Broker HA Attribute Model Map
// Description: Map-backed attribute model supplied per build invocation.
// Purpose: Carry the management layer's raw attribute values into resolution.
// Dependencies: crate::interfaces, serde, serde_json
// ============================================================================

//! ## Overview
//! [`Model`] is the transient, map-backed [`AttributeModel`] implementation a
//! host fills for one build invocation. Values are raw `serde_json::Value`s;
//! validation and default substitution happen in the resolver, never here.
//! Keys are ordered (`BTreeMap`) so iteration and serialization stay
//! deterministic.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

use crate::interfaces::AttributeModel;

// ============================================================================
// SECTION: Model
// ============================================================================

/// Transient mapping from attribute name to raw model value.
///
/// # Invariants
/// - Exists for the duration of one build invocation; builders never mutate
///   or retain it.
/// - Carries values verbatim; a stored `null` is treated as undefined by the
///   resolver.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Model {
    /// Raw attribute values keyed by attribute name.
    values: BTreeMap<String, Value>,
}

impl Model {
    /// Creates an empty model; every attribute is undefined.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether the attribute carries a value, including `null`.
    #[must_use]
    pub fn is_defined(&self, attribute: &str) -> bool {
        self.values.contains_key(attribute)
    }

    /// Sets an attribute value, replacing any previous one.
    pub fn set(&mut self, attribute: impl Into<String>, value: Value) {
        self.values.insert(attribute.into(), value);
    }

    /// Sets an attribute value and returns the model, for declarative setup.
    #[must_use]
    pub fn with(mut self, attribute: impl Into<String>, value: Value) -> Self {
        self.set(attribute, value);
        self
    }

    /// Removes an attribute value, leaving the attribute undefined.
    pub fn unset(&mut self, attribute: &str) {
        self.values.remove(attribute);
    }
}

impl AttributeModel for Model {
    fn value_of(&self, attribute: &str) -> Option<&Value> {
        self.values.get(attribute)
    }
}

impl From<serde_json::Map<String, Value>> for Model {
    fn from(entries: serde_json::Map<String, Value>) -> Self {
        Self { values: entries.into_iter().collect() }
    }
}

impl FromIterator<(String, Value)> for Model {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(entries: I) -> Self {
        Self { values: entries.into_iter().collect() }
    }
}
