//! Index-aware filtering of sequences.
//!
//! ## Purpose
//!
//! This module implements the filter pass: visit every index of a sequence
//! once, in increasing order, ask a predicate about the element and keep it
//! when the predicate says so.
//!
//! ## Design notes
//!
//! * **Strict verdicts**: Predicates return `bool`. Callers that want
//!   truthy/falsy coercion wrap their predicate in [`truthy`].
//! * **Receiver context**: The `_with` forms pass an optional context as the
//!   first predicate argument; it is `None` when the caller supplies none.
//! * **Fallible**: [`try_filter_with`] stops at the first predicate error.
//!
//! ## Key concepts
//!
//! Every predicate sees `(element, index, sequence)` where `sequence` is the
//! same slice being filtered, so siblings can be inspected.
//!
//! ## Invariants
//!
//! * The output preserves the relative order of the input.
//! * The output is never longer than the input.
//! * The input is borrowed immutably and never changes.
//!
//! ## Non-goals
//!
//! * This module does not filter in place (see `Vec::retain` for that).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::convert::Infallible;

// Internal dependencies
use crate::primitives::truthy::Truthy;

// ============================================================================
// Core Pass
// ============================================================================

/// Append every element accepted by `predicate` to `out`.
///
/// On error, `out` keeps whatever was appended before the failing index.
/// The higher-level functions drop that partial buffer.
pub fn try_filter_into<T, C, E, P>(
    sequence: &[T],
    context: Option<&C>,
    out: &mut Vec<T>,
    mut predicate: P,
) -> Result<(), E>
where
    T: Clone,
    C: ?Sized,
    P: FnMut(Option<&C>, &T, usize, &[T]) -> Result<bool, E>,
{
    for (index, element) in sequence.iter().enumerate() {
        if predicate(context, element, index, sequence)? {
            out.push(element.clone());
        }
    }
    Ok(())
}

/// Filter with a receiver context and a fallible predicate.
///
/// The first error returned by the predicate is propagated immediately and
/// the elements kept so far are discarded.
pub fn try_filter_with<T, C, E, P>(
    sequence: &[T],
    context: Option<&C>,
    predicate: P,
) -> Result<Vec<T>, E>
where
    T: Clone,
    C: ?Sized,
    P: FnMut(Option<&C>, &T, usize, &[T]) -> Result<bool, E>,
{
    let mut kept = Vec::new();
    try_filter_into(sequence, context, &mut kept, predicate)?;
    Ok(kept)
}

/// Filter with a receiver context.
pub fn filter_with<T, C, P>(sequence: &[T], context: Option<&C>, mut predicate: P) -> Vec<T>
where
    T: Clone,
    C: ?Sized,
    P: FnMut(Option<&C>, &T, usize, &[T]) -> bool,
{
    let result = try_filter_with(sequence, context, |ctx, element, index, seq| {
        Ok::<_, Infallible>(predicate(ctx, element, index, seq))
    });
    match result {
        Ok(kept) => kept,
        Err(never) => match never {},
    }
}

/// Filter without a context.
///
/// # Example
///
/// ```
/// use sift::prelude::*;
///
/// let numbers = [1, 10, 15, 18, 20, 34];
/// assert_eq!(filter(&numbers, |n, _, _| *n < 15), vec![1, 10]);
/// ```
pub fn filter<T, P>(sequence: &[T], mut predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T, usize, &[T]) -> bool,
{
    filter_with(sequence, None::<&()>, |_, element, index, seq| {
        predicate(element, index, seq)
    })
}

/// Filter into borrowed references instead of clones.
pub fn filter_refs<'a, T, P>(sequence: &'a [T], mut predicate: P) -> Vec<&'a T>
where
    P: FnMut(&T, usize, &[T]) -> bool,
{
    let mut kept = Vec::new();
    for (index, element) in sequence.iter().enumerate() {
        if predicate(element, index, sequence) {
            kept.push(element);
        }
    }
    kept
}

// ============================================================================
// Coercion
// ============================================================================

/// Adapt a predicate returning any [`Truthy`] value into a `bool` predicate.
///
/// ```
/// use sift::prelude::*;
///
/// let counts = [0, 3, 0, 7];
/// let nonzero = filter(&counts, truthy(|n: &i32, _: usize, _: &[i32]| *n));
/// assert_eq!(nonzero, vec![3, 7]);
/// ```
pub fn truthy<T, R, F>(mut predicate: F) -> impl FnMut(&T, usize, &[T]) -> bool
where
    R: Truthy,
    F: FnMut(&T, usize, &[T]) -> R,
{
    move |element, index, sequence| predicate(element, index, sequence).is_truthy()
}
