//! Output types for filter passes.
//!
//! ## Purpose
//!
//! This module defines [`FilterOutput`], the result of a configured filter
//! pass: the retained elements and, optionally, where they came from.
//!
//! ## Invariants
//!
//! * `values.len() <= visited`.
//! * When present, `indices` has the same length as `values`, is strictly
//!   increasing, and `indices[k]` is the source position of `values[k]`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result};

// ============================================================================
// Result Structure
// ============================================================================

/// Retained elements of a filter pass and optional bookkeeping.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOutput<T> {
    /// Retained elements, in input order.
    pub values: Vec<T>,

    /// Source index of each retained element.
    pub indices: Option<Vec<usize>>,

    /// Number of indices the predicate was asked about.
    pub visited: usize,
}

impl<T> FilterOutput<T> {
    /// Number of retained elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether nothing was retained.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of elements the predicate rejected.
    #[inline]
    pub fn rejected(&self) -> usize {
        self.visited - self.values.len()
    }

    /// Check if source indices were recorded.
    pub fn has_indices(&self) -> bool {
        self.indices.is_some()
    }

    /// Consume the output, keeping only the retained elements.
    pub fn into_values(self) -> Vec<T> {
        self.values
    }
}

impl<T> From<FilterOutput<T>> for Vec<T> {
    fn from(output: FilterOutput<T>) -> Self {
        output.values
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Debug> Display for FilterOutput<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Visited:  {}", self.visited)?;
        writeln!(f, "  Retained: {}", self.values.len())?;
        writeln!(f)?;
        writeln!(f, "Retained Data:")?;

        match &self.indices {
            Some(indices) => {
                writeln!(f, "  {:>8}  Value", "Index")?;
                writeln!(f, "  --------------------")?;
                for (index, value) in indices.iter().zip(&self.values) {
                    writeln!(f, "  {index:>8}  {value:?}")?;
                }
            }
            None => {
                for value in &self.values {
                    writeln!(f, "  {value:?}")?;
                }
            }
        }

        Ok(())
    }
}
