//! Error types for filter operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while building or
//! running a filter pass.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending index or type name.
//! * **Deferred**: Builder misconfiguration is recorded and reported by `build()`.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Invariants
//!
//! * A failed pass never yields a partial result alongside its error.
//!
//! ## Non-goals
//!
//! * This module does not provide error recovery or retry strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for filter operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// The supplied predicate cannot be invoked.
    InvalidPredicate {
        /// Type name of what was supplied instead of a callable.
        found: &'static str,
    },

    /// The receiver of a dynamic filter call is not an array.
    NotASequence {
        /// Type name of the receiver.
        found: &'static str,
    },

    /// The predicate raised an error while visiting an element.
    PredicateFailed {
        /// Index of the element being visited when the predicate failed.
        index: usize,
        /// Message raised by the predicate.
        message: String,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

impl FilterError {
    /// Build a `PredicateFailed` error for the element at `index`.
    pub fn predicate_failed(index: usize, message: impl Into<String>) -> Self {
        Self::PredicateFailed {
            index,
            message: message.into(),
        }
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for FilterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidPredicate { found } => {
                write!(f, "Invalid predicate: {found} is not a function")
            }
            Self::NotASequence { found } => {
                write!(f, "Not a sequence: cannot filter a value of type {found}")
            }
            Self::PredicateFailed { index, message } => {
                write!(f, "Predicate failed at index {index}: {message}")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for FilterError {}
