//! Tests for the `Sequence` slice methods.
//!
//! ## Test Organization
//!
//! 1. **Receivers** - Arrays, vectors, subslices
//! 2. **Variants** - Context, fallible, by-reference

use sift::prelude::*;

// ============================================================================
// Receiver Tests
// ============================================================================

/// Test the method form on an array.
#[test]
fn test_filtered_on_array() {
    let numbers = [1, 10, 15, 18, 20, 34];

    assert_eq!(numbers.filtered(|f, _, _| *f < 15), vec![1, 10]);
}

/// Test the method form on a vector of owned strings.
#[test]
fn test_filtered_on_vec() {
    let words: Vec<String> = ["map", "filter", "fold", "flat_map"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let with_f = words.filtered(|w, _, _| w.starts_with('f'));

    assert_eq!(with_f, vec!["filter", "fold", "flat_map"]);
    assert_eq!(words.len(), 4);
}

/// Test that a subslice is the whole sequence from the predicate's view.
#[test]
fn test_filtered_on_subslice() {
    let numbers = [0, 1, 2, 3, 4, 5, 6];
    let window = &numbers[2..5];

    let kept = window.filtered(|_, i, seq| {
        assert_eq!(seq, &[2, 3, 4]);
        i != 1
    });

    assert_eq!(kept, vec![2, 4]);
}

// ============================================================================
// Variant Tests
// ============================================================================

/// Test the context-aware method form.
#[test]
fn test_filtered_with_context() {
    let allowed = ["read", "write"];
    let requests = ["read", "delete", "write", "exec", "read"];

    let permitted = requests.filtered_with(Some(&allowed[..]), |ctx, r, _, _| {
        ctx.is_some_and(|allowed| allowed.contains(r))
    });

    assert_eq!(permitted, vec!["read", "write", "read"]);
}

/// Test the fallible method form.
#[test]
fn test_try_filtered_with_error() {
    let inputs = ["1", "2", "x", "4"];

    let parsed: Result<Vec<&str>, std::num::ParseIntError> =
        inputs.try_filtered_with(None::<&()>, |_, s, _, _| Ok(s.parse::<i32>()? % 2 == 0));

    assert!(parsed.is_err());
}

/// Test the fallible method form when every element parses.
#[test]
fn test_try_filtered_with_success() {
    let inputs = ["1", "2", "3", "4"];

    let even: Result<Vec<&str>, std::num::ParseIntError> =
        inputs.try_filtered_with(None::<&()>, |_, s, _, _| Ok(s.parse::<i32>()? % 2 == 0));

    assert_eq!(even, Ok(vec!["2", "4"]));
}

/// Test the by-reference method form.
#[test]
fn test_filtered_refs() {
    let numbers = vec![3, 6, 9, 12];

    let kept = numbers.filtered_refs(|n, _, _| *n > 5);

    assert_eq!(kept, vec![&6, &9, &12]);
}
