//! Validation of filter inputs and configuration.
//!
//! ## Purpose
//!
//! This module checks, before a pass starts, that the pieces handed to the
//! engine can be used: the predicate is callable, the receiver is a sequence,
//! and no builder option was configured twice.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Side-effect free**: Nothing here invokes a predicate.
//!
//! ## Non-goals
//!
//! * This module does not run the filter pass.

// External dependencies
use tracing::warn;

// Internal dependencies
use crate::primitives::errors::FilterError;
use crate::primitives::value::Value;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for filter configuration and dynamic inputs.
pub struct Validator;

impl Validator {
    /// Validate that a dynamic callback can be invoked.
    pub fn validate_callback(callback: &Value) -> Result<(), FilterError> {
        if callback.is_callable() {
            return Ok(());
        }
        let found = callback.type_name();
        warn!(found, "filter callback is not a function");
        Err(FilterError::InvalidPredicate { found })
    }

    /// Validate that a dynamic receiver is an array and borrow its elements.
    pub fn validate_receiver(receiver: &Value) -> Result<&[Value], FilterError> {
        receiver.as_array().ok_or(FilterError::NotASequence {
            found: receiver.type_name(),
        })
    }

    /// Validate that a predicate was supplied to the builder and unwrap it.
    pub fn validate_predicate<P>(predicate: Option<P>) -> Result<P, FilterError> {
        predicate.ok_or(FilterError::InvalidPredicate { found: "undefined" })
    }

    /// Validate that no builder parameter was set more than once.
    pub fn validate_no_duplicates(duplicate: Option<&'static str>) -> Result<(), FilterError> {
        match duplicate {
            Some(parameter) => Err(FilterError::DuplicateParameter { parameter }),
            None => Ok(()),
        }
    }
}
