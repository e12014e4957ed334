//! Dynamically typed values.
//!
//! ## Purpose
//!
//! This module provides [`Value`], a loosely typed element that can hold
//! absence markers (`Undefined`, `Null`) next to booleans, numbers, strings,
//! arrays and callables. It lets callers filter heterogeneous sequences and
//! pass predicates around as data.
//!
//! ## Design notes
//!
//! * **Shared**: Arrays and functions are reference counted, so cloning a
//!   `Value` copies the handle rather than the contents.
//! * **Two equalities**: `PartialEq` compares structurally; [`Value::strict_equals`]
//!   compares arrays and functions by identity.
//! * **Inspection**: `Display` renders values the way a console inspector does,
//!   e.g. `[ 1, 10 ]`.
//!
//! ## Invariants
//!
//! * `Undefined` and `Null` are distinct and never equal to any other variant.
//! * NaN is never strictly equal to itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{rc::Rc, string::String, vec::Vec};
#[cfg(feature = "std")]
use std::{rc::Rc, string::String, vec::Vec};

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result as FmtResult};

// Internal dependencies
use crate::primitives::errors::FilterError;
use crate::primitives::truthy::Truthy;

/// Signature of a callable stored in a [`Value::Function`].
///
/// Arguments are the receiver context, the element, its index and the whole
/// sequence being visited.
pub type Callback =
    Rc<dyn Fn(Option<&Value>, &Value, usize, &[Value]) -> Result<Value, FilterError>>;

// ============================================================================
// Value
// ============================================================================

/// A dynamically typed element.
#[derive(Clone, Default)]
pub enum Value {
    /// Absent value.
    #[default]
    Undefined,

    /// Intentionally empty value.
    Null,

    /// Boolean.
    Bool(bool),

    /// Double precision number.
    Number(f64),

    /// Text.
    String(String),

    /// Shared, immutable array.
    Array(Rc<[Value]>),

    /// Shared callable.
    Function(Callback),
}

impl Value {
    /// Wrap a closure as a callable value.
    pub fn function<F>(f: F) -> Self
    where
        F: Fn(Option<&Value>, &Value, usize, &[Value]) -> Result<Value, FilterError> + 'static,
    {
        Self::Function(Rc::new(f))
    }

    /// Build an array value from anything convertible into values.
    pub fn array<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::Array(items.into_iter().map(Into::into).collect())
    }

    /// Name of the value's type, as reported by a `typeof` check.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null | Self::Array(_) => "object",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Function(_) => "function",
        }
    }

    /// Returns `true` for `Undefined` and `Null`.
    #[inline]
    pub fn is_nullish(&self) -> bool {
        matches!(self, Self::Undefined | Self::Null)
    }

    /// Returns `true` if the value can be invoked.
    #[inline]
    pub fn is_callable(&self) -> bool {
        matches!(self, Self::Function(_))
    }

    /// The numeric payload, if any.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The array elements, if this is an array.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(items) => Some(&items[..]),
            _ => None,
        }
    }

    /// Identity-aware equality with no type conversion.
    ///
    /// Primitives compare by value (NaN is unequal to itself), arrays and
    /// functions compare by allocation.
    pub fn strict_equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Self::Undefined, Self::Undefined) | (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => Rc::ptr_eq(a, b),
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Invoke the value with a receiver and the visiting arguments.
    pub fn call(
        &self,
        context: Option<&Value>,
        element: &Value,
        index: usize,
        sequence: &[Value],
    ) -> Result<Value, FilterError> {
        match self {
            Self::Function(f) => f(context, element, index, sequence),
            other => Err(FilterError::InvalidPredicate {
                found: other.type_name(),
            }),
        }
    }
}

// ============================================================================
// Truthiness
// ============================================================================

impl Truthy for Value {
    fn is_truthy(&self) -> bool {
        match self {
            Self::Undefined | Self::Null => false,
            Self::Bool(b) => *b,
            Self::Number(n) => n.is_truthy(),
            Self::String(s) => !s.is_empty(),
            Self::Array(_) | Self::Function(_) => true,
        }
    }
}

// ============================================================================
// Equality
// ============================================================================

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Array(a), Self::Array(b)) => a[..] == b[..],
            _ => self.strict_equals(other),
        }
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::Array(items.into())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Self::Undefined, Into::into)
    }
}

// ============================================================================
// Formatting
// ============================================================================

fn fmt_number(n: f64, f: &mut Formatter<'_>) -> FmtResult {
    if n.is_nan() {
        f.write_str("NaN")
    } else if n.is_infinite() {
        f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" })
    } else {
        write!(f, "{n}")
    }
}

// Nested rendering quotes strings, top-level rendering does not.
fn fmt_inspect(value: &Value, f: &mut Formatter<'_>, nested: bool) -> FmtResult {
    match value {
        Value::Undefined => f.write_str("undefined"),
        Value::Null => f.write_str("null"),
        Value::Bool(b) => write!(f, "{b}"),
        Value::Number(n) => fmt_number(*n, f),
        Value::String(s) if nested => write!(f, "'{s}'"),
        Value::String(s) => f.write_str(s),
        Value::Function(_) => f.write_str("[Function (anonymous)]"),
        Value::Array(items) => fmt_items(items, f),
    }
}

fn fmt_items(items: &[Value], f: &mut Formatter<'_>) -> FmtResult {
    if items.is_empty() {
        return f.write_str("[]");
    }
    f.write_str("[ ")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        fmt_inspect(item, f, true)?;
    }
    f.write_str(" ]")
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        fmt_inspect(self, f, false)
    }
}

impl Debug for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        fmt_inspect(self, f, true)
    }
}

/// Console-style rendering of a slice of values, e.g. `[ true ]`.
pub struct Inspect<'a>(pub &'a [Value]);

impl Display for Inspect<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        fmt_items(self.0, f)
    }
}
