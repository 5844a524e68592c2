// crates/broker-ha-core/src/runtime/resolver.rs
// ============================================================================
// Module: Broker HA Attribute Resolution
// Description: Typed resolution of attribute values against a model.
// Purpose: Turn raw or undefined model values into validated, typed values.
// Dependencies: crate::core::attributes, crate::interfaces, serde_json, thiserror
// ============================================================================

//! ## Overview
//! Resolution converts one attribute's raw model value into a validated,
//! typed value: an undefined value falls back to the declared default, a
//! defined value is checked against the declared kind and bounds, and a
//! required attribute with neither value nor default fails. Model values are
//! untrusted; every mismatch fails closed with the offending attribute name.
//! Invariants:
//! - Defaults substitute only for undefined (or `null`) values, never for
//!   invalid ones.
//! - Resolution reads the model only; no state is mutated, no I/O occurs.
//! - Resolving one attribute never depends on another attribute's resolved
//!   value; the alternatives check inspects model definedness only.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Map;
use serde_json::Value;
use thiserror::Error;

use crate::core::attributes::AttributeDefinition;
use crate::core::attributes::AttributeKind;
use crate::interfaces::AttributeModel;

// ============================================================================
// SECTION: Resolution Errors
// ============================================================================

/// Errors raised while resolving attributes against a model.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
/// - All variants are synchronous, non-retryable configuration errors; no
///   partial configuration exists once one is raised.
#[derive(Debug, Error)]
pub enum ResolutionError {
    /// Required attribute is undefined and declares no default.
    #[error("required attribute {attribute} is undefined and has no default")]
    MissingAttribute {
        /// Name of the unresolvable attribute.
        attribute: &'static str,
    },
    /// Attribute value is defined but fails kind or range validation.
    #[error("invalid value for attribute {attribute}: {reason}")]
    InvalidAttributeValue {
        /// Name of the offending attribute.
        attribute: &'static str,
        /// Constraint the value violated.
        reason: String,
    },
    /// Nested sub-schema resolution failed; the cause is surfaced unchanged.
    #[error(transparent)]
    Nested(#[from] Box<ResolutionError>),
}

// ============================================================================
// SECTION: Typed Resolution
// ============================================================================

/// Resolves a boolean attribute.
///
/// # Errors
///
/// Returns [`ResolutionError`] when the attribute is unresolvable or the
/// value is not a boolean.
pub fn resolve_bool(
    definition: &AttributeDefinition,
    model: &dyn AttributeModel,
) -> Result<bool, ResolutionError> {
    expect_kind(definition, AttributeKind::Boolean)?;
    let value = resolve_value(definition, model)?.ok_or(ResolutionError::MissingAttribute {
        attribute: definition.name(),
    })?;
    match value {
        Value::Bool(flag) => Ok(flag),
        other => Err(kind_mismatch(definition, AttributeKind::Boolean, &other)),
    }
}

/// Resolves a 32-bit integer attribute, applying declared bounds.
///
/// # Errors
///
/// Returns [`ResolutionError`] when the attribute is unresolvable, the value
/// is not an integer, it overflows 32 bits, or it violates the bounds.
pub fn resolve_int(
    definition: &AttributeDefinition,
    model: &dyn AttributeModel,
) -> Result<i32, ResolutionError> {
    let wide = resolve_long_kind(definition, model, AttributeKind::Int)?;
    i32::try_from(wide).map_err(|_| ResolutionError::InvalidAttributeValue {
        attribute: definition.name(),
        reason: format!("value {wide} does not fit in 32 bits"),
    })
}

/// Resolves a 64-bit integer attribute, applying declared bounds.
///
/// # Errors
///
/// Returns [`ResolutionError`] when the attribute is unresolvable, the value
/// is not an integer, or it violates the bounds.
pub fn resolve_long(
    definition: &AttributeDefinition,
    model: &dyn AttributeModel,
) -> Result<i64, ResolutionError> {
    resolve_long_kind(definition, model, AttributeKind::Long)
}

/// Resolves an optional string attribute; undefined resolves to `None`.
///
/// # Errors
///
/// Returns [`ResolutionError`] when a defined value is not a string, or the
/// attribute is required, undefined, and default-less.
pub fn resolve_opt_string(
    definition: &AttributeDefinition,
    model: &dyn AttributeModel,
) -> Result<Option<String>, ResolutionError> {
    expect_kind(definition, AttributeKind::Str)?;
    match resolve_value(definition, model)? {
        None => Ok(None),
        Some(Value::String(text)) => Ok(Some(text)),
        Some(other) => Err(kind_mismatch(definition, AttributeKind::Str, &other)),
    }
}

/// Resolves an optional string-list attribute; undefined resolves to `None`.
///
/// # Errors
///
/// Returns [`ResolutionError`] when a defined value is not a list of strings,
/// or the attribute is required, undefined, and default-less.
pub fn resolve_opt_string_list(
    definition: &AttributeDefinition,
    model: &dyn AttributeModel,
) -> Result<Option<Vec<String>>, ResolutionError> {
    expect_kind(definition, AttributeKind::StrList)?;
    let Some(value) = resolve_value(definition, model)? else {
        return Ok(None);
    };
    let items = match value {
        Value::Array(items) => items,
        other => return Err(kind_mismatch(definition, AttributeKind::StrList, &other)),
    };
    let mut entries = Vec::with_capacity(items.len());
    for item in items {
        match item {
            Value::String(text) => entries.push(text),
            other => {
                return Err(ResolutionError::InvalidAttributeValue {
                    attribute: definition.name(),
                    reason: format!("expected a list of strings, found element {other}"),
                });
            }
        }
    }
    Ok(Some(entries))
}

/// Resolves an optional nested-object attribute; undefined resolves to `None`.
///
/// # Errors
///
/// Returns [`ResolutionError`] when a defined value is not an object, or the
/// attribute is required, undefined, and default-less.
pub fn resolve_opt_object(
    definition: &AttributeDefinition,
    model: &dyn AttributeModel,
) -> Result<Option<Map<String, Value>>, ResolutionError> {
    expect_kind(definition, AttributeKind::Object)?;
    match resolve_value(definition, model)? {
        None => Ok(None),
        Some(Value::Object(entries)) => Ok(Some(entries)),
        Some(other) => Err(kind_mismatch(definition, AttributeKind::Object, &other)),
    }
}

// ============================================================================
// SECTION: Shared Resolution Steps
// ============================================================================

/// Resolves the raw value for an attribute: model value if defined, declared
/// default otherwise. A defined `null` counts as undefined. Also enforces the
/// alternatives constraint for defined values.
fn resolve_value(
    definition: &AttributeDefinition,
    model: &dyn AttributeModel,
) -> Result<Option<Value>, ResolutionError> {
    if let Some(raw) = defined_value(definition.name(), model) {
        reject_alternative_conflict(definition, model)?;
        return Ok(Some(raw.clone()));
    }
    match definition.default_value() {
        Some(default) => Ok(Some(default.to_value())),
        None if definition.is_required() => {
            Err(ResolutionError::MissingAttribute { attribute: definition.name() })
        }
        None => Ok(None),
    }
}

/// Shared integer path for `Int` and `Long` kinds, including bounds.
fn resolve_long_kind(
    definition: &AttributeDefinition,
    model: &dyn AttributeModel,
    kind: AttributeKind,
) -> Result<i64, ResolutionError> {
    expect_kind(definition, kind)?;
    let value = resolve_value(definition, model)?.ok_or(ResolutionError::MissingAttribute {
        attribute: definition.name(),
    })?;
    let number = match &value {
        Value::Number(number) => number.as_i64(),
        _ => None,
    };
    let Some(number) = number else {
        return Err(kind_mismatch(definition, kind, &value));
    };
    let bounds = definition.bounds();
    if !bounds.admits(number) {
        let reason = match (bounds.min(), bounds.max()) {
            (Some(min), _) if number < min => format!("value {number} is below the minimum {min}"),
            (_, Some(max)) => format!("value {number} is above the maximum {max}"),
            _ => format!("value {number} is out of range"),
        };
        return Err(ResolutionError::InvalidAttributeValue {
            attribute: definition.name(),
            reason,
        });
    }
    Ok(number)
}

/// Fails when a typed accessor is applied to an attribute of a different
/// declared kind.
fn expect_kind(
    definition: &AttributeDefinition,
    kind: AttributeKind,
) -> Result<(), ResolutionError> {
    if definition.kind() == kind {
        return Ok(());
    }
    Err(ResolutionError::InvalidAttributeValue {
        attribute: definition.name(),
        reason: format!("attribute is declared as {}, not {kind}", definition.kind()),
    })
}

/// Fails when the attribute and one of its declared alternatives are both
/// defined in the model.
fn reject_alternative_conflict(
    definition: &AttributeDefinition,
    model: &dyn AttributeModel,
) -> Result<(), ResolutionError> {
    for alternative in definition.alternatives() {
        if defined_value(alternative, model).is_some() {
            return Err(ResolutionError::InvalidAttributeValue {
                attribute: definition.name(),
                reason: format!("must not be defined together with {alternative}"),
            });
        }
    }
    Ok(())
}

/// Looks up a defined, non-null model value.
fn defined_value<'m>(attribute: &str, model: &'m dyn AttributeModel) -> Option<&'m Value> {
    model.value_of(attribute).filter(|value| !value.is_null())
}

/// Builds the kind-mismatch validation error.
fn kind_mismatch(
    definition: &AttributeDefinition,
    expected: AttributeKind,
    found: &Value,
) -> ResolutionError {
    ResolutionError::InvalidAttributeValue {
        attribute: definition.name(),
        reason: format!("expected {expected}, found {found}"),
    }
}
