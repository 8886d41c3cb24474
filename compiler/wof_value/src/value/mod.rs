//! Runtime values for the Woflang interpreter.
//!
//! A [`Value`] is a closed tagged payload ([`ValueKind`]) plus an optional
//! [`Unit`] annotation. Values are immutable once built: operations pop
//! their operands and push new values instead of editing stack slots.
//!
//! # Construction
//!
//! ```text
//! let n = Value::integer(42);
//! let x = Value::double(2.5).with_unit(Unit::new("m", 1.0));
//! let s = Value::string("hello world");
//! let sym = Value::symbol("unregistered_name");
//! ```
//!
//! The payload is only reachable through [`Value::kind`], so every consumer
//! has to match on the tag before touching the data.

use std::fmt;

use crate::errors::{type_mismatch, WofResult};

/// Unit annotation carried alongside a value (`m`, `kg`, `s`, ...).
///
/// Units are attached by producers and never inferred from the payload type.
/// They take part in equality: two values with different units are different
/// values even when the payloads match.
#[derive(Clone, Debug, PartialEq)]
pub struct Unit {
    name: String,
    scale: f64,
}

impl Unit {
    /// Create a unit with a display name and a scale factor.
    pub fn new(name: impl Into<String>, scale: f64) -> Self {
        Unit {
            name: name.into(),
            scale,
        }
    }

    /// Unit name as shown after the value (`3 m`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Scale factor relative to the unit's base.
    pub fn scale(&self) -> f64 {
        self.scale
    }
}

/// Tagged payload of a [`Value`].
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ValueKind {
    /// Uninitialized slot.
    #[default]
    Unknown,
    /// Signed 64-bit integer.
    Integer(i64),
    /// Double-precision float.
    Double(f64),
    /// Text produced by a quoted literal or an operation.
    String(String),
    /// Unrecognized token text, kept as inert data.
    Symbol(String),
}

/// A single unit of data living on the interpreter stack.
///
/// Equality compares the tag, the unit (presence, name and scale) and the
/// payload. Doubles compare with IEEE semantics, so `NaN != NaN`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Value {
    kind: ValueKind,
    unit: Option<Unit>,
}

// Factory Methods

impl Value {
    #[inline]
    pub fn integer(n: i64) -> Self {
        Value::from_kind(ValueKind::Integer(n))
    }

    #[inline]
    pub fn double(x: f64) -> Self {
        Value::from_kind(ValueKind::Double(x))
    }

    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::from_kind(ValueKind::String(s.into()))
    }

    #[inline]
    pub fn symbol(s: impl Into<String>) -> Self {
        Value::from_kind(ValueKind::Symbol(s.into()))
    }

    /// The placeholder value (`<unknown>`).
    #[inline]
    pub fn unknown() -> Self {
        Value::default()
    }

    /// Wrap an already-built payload with no unit.
    #[inline]
    pub fn from_kind(kind: ValueKind) -> Self {
        Value { kind, unit: None }
    }

    /// Return a copy of this value carrying `unit`.
    ///
    /// Replaces any unit already attached.
    #[must_use]
    pub fn with_unit(mut self, unit: Unit) -> Self {
        self.unit = Some(unit);
        self
    }

    /// Return a copy of this value with the unit removed.
    #[must_use]
    pub fn without_unit(mut self) -> Self {
        self.unit = None;
        self
    }
}

// Accessors

impl Value {
    /// The tagged payload.
    #[inline]
    pub fn kind(&self) -> &ValueKind {
        &self.kind
    }

    /// Consume the value, returning its payload and unit.
    pub fn into_parts(self) -> (ValueKind, Option<Unit>) {
        (self.kind, self.unit)
    }

    /// The attached unit, if any.
    #[inline]
    pub fn unit(&self) -> Option<&Unit> {
        self.unit.as_ref()
    }

    /// `true` for `Integer` and `Double`.
    pub fn is_numeric(&self) -> bool {
        match self.kind {
            ValueKind::Integer(_) | ValueKind::Double(_) => true,
            ValueKind::String(_) | ValueKind::Symbol(_) | ValueKind::Unknown => false,
        }
    }

    /// Numeric payload, with integers widened to `f64`.
    ///
    /// Fails with `TypeMismatch` for strings, symbols and unknown values.
    pub fn as_numeric(&self) -> WofResult<f64> {
        match &self.kind {
            ValueKind::Integer(n) => Ok(int_to_f64(*n)),
            ValueKind::Double(x) => Ok(*x),
            ValueKind::String(_) | ValueKind::Symbol(_) | ValueKind::Unknown => {
                Err(type_mismatch("numeric", self.type_name()))
            }
        }
    }

    /// Text payload of a `String` or `Symbol`.
    pub fn as_text(&self) -> Option<&str> {
        match &self.kind {
            ValueKind::String(s) | ValueKind::Symbol(s) => Some(s),
            ValueKind::Integer(_) | ValueKind::Double(_) | ValueKind::Unknown => None,
        }
    }

    /// Type name for error messages.
    pub fn type_name(&self) -> &'static str {
        match self.kind {
            ValueKind::Unknown => "unknown",
            ValueKind::Integer(_) => "integer",
            ValueKind::Double(_) => "double",
            ValueKind::String(_) => "string",
            ValueKind::Symbol(_) => "symbol",
        }
    }

    /// Structural equality: tag, unit and payload.
    pub fn equals(&self, other: &Value) -> bool {
        self == other
    }

    /// Render for display. Same output as the `Display` impl.
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

#[allow(
    clippy::cast_precision_loss,
    reason = "widening to f64 is the documented numeric coercion"
)]
#[inline]
fn int_to_f64(n: i64) -> f64 {
    n as f64
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ValueKind::Integer(n) => write!(f, "{n}")?,
            ValueKind::Double(x) => write!(f, "{x}")?,
            ValueKind::String(s) | ValueKind::Symbol(s) => f.write_str(s)?,
            ValueKind::Unknown => f.write_str("<unknown>")?,
        }
        if let Some(unit) = &self.unit {
            write!(f, " {}", unit.name)?;
        }
        Ok(())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::integer(n)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::double(x)
    }
}
