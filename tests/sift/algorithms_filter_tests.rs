//! Tests for the free filter functions.
//!
//! These tests verify the core filter pass used throughout sift:
//! - Ordering and retention
//! - Arguments handed to the predicate (element, index, sequence)
//! - Receiver context
//! - Fallible predicates and error propagation
//! - By-reference filtering and explicit truthy coercion
//!
//! ## Test Organization
//!
//! 1. **Basic Filtering** - Reference scenarios
//! 2. **Predicate Arguments** - Index order, sequence identity
//! 3. **Context** - Present and absent receivers
//! 4. **Fallible Predicates** - Error propagation, partial buffers
//! 5. **References and Coercion** - filter_refs, truthy
//! 6. **Edge Cases** - Empty input, absence markers, re-entrancy

use std::cell::Cell;

use sift::prelude::*;

// ============================================================================
// Basic Filtering Tests
// ============================================================================

/// Test the numeric threshold scenario.
///
/// Verifies that only values below 15 survive, in input order.
#[test]
fn test_filter_below_threshold() {
    let numbers = vec![1, 10, 15, 18, 20, 34];

    let filtered = filter(&numbers, |f, _, _| *f < 15);

    assert_eq!(filtered, vec![1, 10]);
}

/// Test that relative order is preserved when kept elements are scattered.
#[test]
fn test_filter_preserves_order() {
    let numbers = [9, 2, 7, 4, 5, 6, 3, 8];

    let odd = filter(&numbers, |n, _, _| n % 2 == 1);

    assert_eq!(odd, vec![9, 7, 5, 3]);
}

/// Test that the input sequence is left untouched.
#[test]
fn test_filter_does_not_mutate_input() {
    let numbers = vec![5, 1, 4, 2, 3];
    let before = numbers.clone();
    let ptr = numbers.as_ptr();

    let _ = filter(&numbers, |n, _, _| *n > 2);

    assert_eq!(numbers, before, "Input values should be unchanged");
    assert_eq!(numbers.as_ptr(), ptr, "Input buffer should be the same");
}

/// Test that the result is a fresh allocation.
#[test]
fn test_filter_returns_new_sequence() {
    let numbers = vec![1, 2, 3];

    let all = filter(&numbers, |_, _, _| true);

    assert_eq!(all, numbers);
    assert_ne!(all.as_ptr(), numbers.as_ptr());
}

// ============================================================================
// Predicate Argument Tests
// ============================================================================

/// Test that every index is visited exactly once, in increasing order.
#[test]
fn test_filter_visits_indices_in_order() {
    let letters = ['a', 'b', 'c', 'd'];
    let mut seen = Vec::new();

    let _ = filter(&letters, |c, i, _| {
        seen.push((i, *c));
        false
    });

    assert_eq!(seen, vec![(0, 'a'), (1, 'b'), (2, 'c'), (3, 'd')]);
}

/// Test that the predicate receives the original sequence.
#[test]
fn test_filter_passes_full_sequence() {
    let numbers = vec![4, 8, 15, 16, 23, 42];

    let _ = filter(&numbers, |_, _, seq| {
        assert_eq!(seq.as_ptr(), numbers.as_ptr());
        assert_eq!(seq.len(), numbers.len());
        true
    });
}

/// Test sibling inspection through the sequence argument.
///
/// Keeps elements larger than their predecessor.
#[test]
fn test_filter_inspects_siblings() {
    let numbers = [3, 5, 2, 8, 8, 1, 9];

    let rising = filter(&numbers, |n, i, seq| i > 0 && *n > seq[i - 1]);

    assert_eq!(rising, vec![5, 8, 9]);
}

/// Test keeping elements by position only.
#[test]
fn test_filter_by_index() {
    let words = ["zero", "one", "two", "three", "four"];

    let even_slots = filter(&words, |_, i, _| i % 2 == 0);

    assert_eq!(even_slots, vec!["zero", "two", "four"]);
}

// ============================================================================
// Context Tests
// ============================================================================

/// Test that the supplied context reaches the predicate.
#[test]
fn test_filter_with_context() {
    let limit = 15;
    let numbers = [1, 10, 15, 18, 20, 34];

    let filtered = filter_with(&numbers, Some(&limit), |ctx, f, _, _| {
        ctx.is_some_and(|limit| f < limit)
    });

    assert_eq!(filtered, vec![1, 10]);
}

/// Test that an omitted context arrives as `None`.
#[test]
fn test_filter_without_context_is_none() {
    let numbers = [1, 2, 3];

    let filtered = filter_with(&numbers, None::<&str>, |ctx, _, _, _| {
        assert!(ctx.is_none(), "Context should be absent");
        true
    });

    assert_eq!(filtered, vec![1, 2, 3]);
}

/// Test an unsized context type.
#[test]
fn test_filter_with_unsized_context() {
    let words = ["apple", "banana", "avocado", "cherry"];

    let filtered = filter_with(&words, Some("a"), |prefix, w, _, _| {
        prefix.is_some_and(|p| w.starts_with(p))
    });

    assert_eq!(filtered, vec!["apple", "avocado"]);
}

// ============================================================================
// Fallible Predicate Tests
// ============================================================================

/// Test that a predicate error aborts the pass and is propagated unchanged.
#[test]
fn test_try_filter_propagates_error() {
    let numbers = [1, 2, 3, 4, 5];
    let calls = Cell::new(0);

    let result: Result<Vec<i32>, String> = try_filter_with(&numbers, None::<&()>, |_, n, i, _| {
        calls.set(calls.get() + 1);
        if *n == 3 {
            Err(format!("boom at {i}"))
        } else {
            Ok(true)
        }
    });

    assert_eq!(result, Err("boom at 2".to_string()));
    assert_eq!(calls.get(), 3, "Pass should stop at the failing element");
}

/// Test that a fallible pass without errors behaves like the infallible one.
#[test]
fn test_try_filter_success() {
    let numbers = [1, 10, 15, 18, 20, 34];

    let result: Result<Vec<i32>, FilterError> =
        try_filter_with(&numbers, None::<&()>, |_, f, _, _| Ok(*f < 15));

    assert_eq!(result, Ok(vec![1, 10]));
}

/// Test that `try_filter_into` leaves the partial buffer observable.
#[test]
fn test_try_filter_into_keeps_partial_buffer() {
    let numbers = [1, 2, 3, 4];
    let mut out = vec![0];

    let result = try_filter_into(&numbers, None::<&()>, &mut out, |_, n, _, _| {
        if *n == 3 {
            Err("stop")
        } else {
            Ok(true)
        }
    });

    assert_eq!(result, Err("stop"));
    assert_eq!(out, vec![0, 1, 2], "Elements before the failure stay appended");
}

// ============================================================================
// References and Coercion Tests
// ============================================================================

/// Test that `filter_refs` returns references into the input.
#[test]
fn test_filter_refs_borrows_input() {
    let names = vec![String::from("ada"), String::from("grace"), String::from("alan")];

    let kept = filter_refs(&names, |n, _, _| n.starts_with('a'));

    assert_eq!(kept.len(), 2);
    assert!(std::ptr::eq(kept[0], &names[0]));
    assert!(std::ptr::eq(kept[1], &names[2]));
}

/// Test explicit truthy coercion of numeric verdicts.
#[test]
fn test_truthy_numeric_verdict() {
    let numbers = [0, 3, 0, 7, -1];

    let kept = filter(&numbers, truthy(|n: &i32, _: usize, _: &[i32]| *n));

    assert_eq!(kept, vec![3, 7, -1]);
}

/// Test explicit truthy coercion of optional verdicts.
#[test]
fn test_truthy_option_verdict() {
    let words = ["", "x", "", "yz"];

    let kept = filter(
        &words,
        truthy(|w: &&str, _: usize, _: &[&str]| w.chars().next()),
    );

    assert_eq!(kept, vec!["x", "yz"]);
}

// ============================================================================
// Edge Case Tests
// ============================================================================

/// Test that an empty input yields an empty result without calling the predicate.
#[test]
fn test_filter_empty_input() {
    let empty: [i32; 0] = [];
    let calls = Cell::new(0);

    let result = filter(&empty, |_, _, _| {
        calls.set(calls.get() + 1);
        true
    });

    assert!(result.is_empty());
    assert_eq!(calls.get(), 0);
}

/// Test that absence markers are treated like any other element.
#[test]
fn test_filter_absence_markers() {
    let maybe = [Some(1), None, Some(0), None];

    let absent = filter(&maybe, |m, _, _| m.is_none());
    let present = filter(&maybe, |m, _, _| m.is_some());

    assert_eq!(absent, vec![None, None]);
    assert_eq!(present, vec![Some(1), Some(0)]);
}

/// Test that a predicate may run another filter pass.
#[test]
fn test_filter_reentrant_predicate() {
    let rows = vec![vec![1, 2, 3], vec![4], vec![5, 6]];

    let with_many_odds = filter(&rows, |row, _, _| filter(row, |n, _, _| n % 2 == 1).len() >= 2);

    assert_eq!(with_many_odds, vec![vec![1, 2, 3]]);
}

/// Test that a stateful predicate sees elements in order.
#[test]
fn test_filter_stateful_predicate() {
    let numbers = [1, 1, 2, 2, 2, 3, 1];
    let mut last = None;

    let dedup = filter(&numbers, |n, _, _| {
        let keep = last != Some(*n);
        last = Some(*n);
        keep
    });

    assert_eq!(dedup, vec![1, 2, 3, 1]);
}
