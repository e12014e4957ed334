//! Dynamically typed filtering.
//!
//! ## Purpose
//!
//! This module filters sequences of [`Value`] with a callback that is itself
//! a [`Value`]. The callback may return any value; its verdict is coerced
//! with truthy/falsy rules.
//!
//! ## Design notes
//!
//! * **Checked callable**: A callback that is not a `Function` is rejected
//!   with `InvalidPredicate` before any element is visited, even for an
//!   empty sequence.
//! * **Receiver**: The optional context reaches the callback as its first
//!   argument; `None` stands for an undefined receiver.
//! * **Errors**: An error returned by the callback aborts the pass and is
//!   returned unchanged.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::engine::executor::FilterExecutor;
use crate::engine::validator::Validator;
use crate::primitives::errors::FilterError;
use crate::primitives::truthy::Truthy;
use crate::primitives::value::Value;

/// Filter `sequence` with a dynamic `callback`, optionally bound to `context`.
///
/// ```
/// use sift::prelude::*;
///
/// let mixed = [Value::from(1), Value::Undefined, Value::Null, Value::from(0), Value::from(true)];
/// let is_true = Value::function(|_, v, _, _| Ok(Value::from(v.strict_equals(&Value::Bool(true)))));
///
/// let kept = filter_values(&mixed, &is_true, None)?;
/// assert_eq!(kept, vec![Value::Bool(true)]);
/// # Result::<(), FilterError>::Ok(())
/// ```
pub fn filter_values(
    sequence: &[Value],
    callback: &Value,
    context: Option<&Value>,
) -> Result<Vec<Value>, FilterError> {
    Validator::validate_callback(callback)?;

    let output = FilterExecutor::default().run(sequence, context, |ctx, element, index, seq| {
        callback
            .call(ctx, element, index, seq)
            .map(|verdict| verdict.is_truthy())
    })?;

    Ok(output.values)
}

impl Value {
    /// Filter an array value, returning a new array value.
    ///
    /// Fails with `NotASequence` when `self` is not an array and with
    /// `InvalidPredicate` when `callback` is not a function.
    pub fn filter(&self, callback: &Value, context: Option<&Value>) -> Result<Value, FilterError> {
        let items = Validator::validate_receiver(self)?;
        filter_values(items, callback, context).map(Value::from)
    }
}
