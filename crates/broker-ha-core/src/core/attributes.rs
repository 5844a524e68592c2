// crates/broker-ha-core/src/core/attributes.rs
// ============================================================================
// Module: Broker HA Attribute Model
// Description: Typed attribute metadata for HA policy schemas.
// Purpose: Declare named, typed, validated attributes with defaults and optionality.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! Attribute definitions are the schema-as-data replacement for
//! inheritance-based resource definitions: each policy attribute is a
//! process-wide `static` carrying its name, declared kind, required flag,
//! optional default, numeric bounds, and mutually exclusive alternatives.
//! Invariants:
//! - Definitions are const-constructible and never mutated after startup.
//! - A default value always matches the declared kind (asserted in debug
//!   builds at construction).
//! - Defaults substitute only for genuinely undefined model values, never for
//!   invalid ones.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde_json::Value;

// ============================================================================
// SECTION: Attribute Kinds
// ============================================================================

/// Declared value kind of a policy attribute.
///
/// # Invariants
/// - Kinds are exhaustive for the HA policy schemas; resolution rejects any
///   model value whose JSON shape does not match the declared kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
    /// Boolean flag.
    Boolean,
    /// 32-bit signed integer.
    Int,
    /// 64-bit signed integer.
    Long,
    /// UTF-8 string.
    Str,
    /// List of UTF-8 strings.
    StrList,
    /// Nested JSON object.
    Object,
}

impl AttributeKind {
    /// Returns the human-readable label used in validation errors.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Boolean => "a boolean",
            Self::Int => "a 32-bit integer",
            Self::Long => "a 64-bit integer",
            Self::Str => "a string",
            Self::StrList => "a list of strings",
            Self::Object => "an object",
        }
    }
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// SECTION: Default Values
// ============================================================================

/// Const-constructible default value attached to an attribute definition.
///
/// # Invariants
/// - The variant matches the owning definition's declared kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultValue {
    /// Boolean default.
    Bool(bool),
    /// 32-bit integer default.
    Int(i32),
    /// 64-bit integer default.
    Long(i64),
    /// String default.
    Str(&'static str),
}

impl DefaultValue {
    /// Returns whether this default is representable under the given kind.
    #[must_use]
    pub const fn matches(self, kind: AttributeKind) -> bool {
        matches!(
            (self, kind),
            (Self::Bool(_), AttributeKind::Boolean)
                | (Self::Int(_), AttributeKind::Int)
                | (Self::Long(_), AttributeKind::Long)
                | (Self::Str(_), AttributeKind::Str)
        )
    }

    /// Converts the default into the raw value shape the resolver consumes,
    /// so defaulted and model-supplied values share one validation path.
    #[must_use]
    pub fn to_value(self) -> Value {
        match self {
            Self::Bool(value) => Value::Bool(value),
            Self::Int(value) => Value::from(value),
            Self::Long(value) => Value::from(value),
            Self::Str(value) => Value::String(value.to_owned()),
        }
    }
}

// ============================================================================
// SECTION: Value Bounds
// ============================================================================

/// Inclusive numeric bounds applied to `Int` and `Long` attributes.
///
/// # Invariants
/// - `min <= max` whenever both are present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueBounds {
    /// Inclusive lower bound.
    min: Option<i64>,
    /// Inclusive upper bound.
    max: Option<i64>,
}

impl ValueBounds {
    /// Bounds that admit every value.
    pub const NONE: Self = Self { min: None, max: None };

    /// Bounds with an inclusive lower limit only.
    #[must_use]
    pub const fn at_least(min: i64) -> Self {
        Self { min: Some(min), max: None }
    }

    /// Bounds with inclusive lower and upper limits.
    #[must_use]
    pub const fn between(min: i64, max: i64) -> Self {
        Self { min: Some(min), max: Some(max) }
    }

    /// Returns the inclusive lower bound when one is declared.
    #[must_use]
    pub const fn min(self) -> Option<i64> {
        self.min
    }

    /// Returns the inclusive upper bound when one is declared.
    #[must_use]
    pub const fn max(self) -> Option<i64> {
        self.max
    }

    /// Returns whether the value satisfies both bounds.
    #[must_use]
    pub const fn admits(self, value: i64) -> bool {
        let above_min = match self.min {
            Some(min) => value >= min,
            None => true,
        };
        let below_max = match self.max {
            Some(max) => value <= max,
            None => true,
        };
        above_min && below_max
    }
}

// ============================================================================
// SECTION: Attribute Definitions
// ============================================================================

/// Metadata for a single named, typed policy attribute.
///
/// # Invariants
/// - `name` is unique within every schema the definition belongs to.
/// - Immutable once constructed; definitions live as process-wide statics.
/// - `alternatives` names attributes that must not be defined together with
///   this one in the same model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeDefinition {
    /// Attribute name as addressed by the management model.
    name: &'static str,
    /// Declared value kind.
    kind: AttributeKind,
    /// Whether the attribute must resolve to a defined value.
    required: bool,
    /// Default substituted for an undefined model value.
    default: Option<DefaultValue>,
    /// Numeric bounds for `Int`/`Long` kinds.
    bounds: ValueBounds,
    /// Names of mutually exclusive attributes.
    alternatives: &'static [&'static str],
}

impl AttributeDefinition {
    /// Creates a required attribute of the given kind.
    #[must_use]
    pub const fn required(name: &'static str, kind: AttributeKind) -> Self {
        Self {
            name,
            kind,
            required: true,
            default: None,
            bounds: ValueBounds::NONE,
            alternatives: &[],
        }
    }

    /// Creates an optional attribute of the given kind.
    #[must_use]
    pub const fn optional(name: &'static str, kind: AttributeKind) -> Self {
        Self {
            name,
            kind,
            required: false,
            default: None,
            bounds: ValueBounds::NONE,
            alternatives: &[],
        }
    }

    /// Attaches a default value.
    ///
    /// # Panics
    ///
    /// Panics in debug builds when the default does not match the declared
    /// kind; schema construction is the only place this can occur.
    #[must_use]
    pub const fn with_default(mut self, default: DefaultValue) -> Self {
        debug_assert!(
            default.matches(self.kind),
            "attribute default does not match the declared kind"
        );
        self.default = Some(default);
        self
    }

    /// Attaches numeric bounds.
    #[must_use]
    pub const fn with_bounds(mut self, bounds: ValueBounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Declares mutually exclusive attribute names.
    #[must_use]
    pub const fn with_alternatives(mut self, alternatives: &'static [&'static str]) -> Self {
        self.alternatives = alternatives;
        self
    }

    /// Returns the attribute name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the declared value kind.
    #[must_use]
    pub const fn kind(&self) -> AttributeKind {
        self.kind
    }

    /// Returns whether the attribute must resolve to a defined value.
    #[must_use]
    pub const fn is_required(&self) -> bool {
        self.required
    }

    /// Returns the declared default, if any.
    #[must_use]
    pub const fn default_value(&self) -> Option<DefaultValue> {
        self.default
    }

    /// Returns the numeric bounds.
    #[must_use]
    pub const fn bounds(&self) -> ValueBounds {
        self.bounds
    }

    /// Returns the names of mutually exclusive attributes.
    #[must_use]
    pub const fn alternatives(&self) -> &'static [&'static str] {
        self.alternatives
    }
}

impl fmt::Display for AttributeDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
