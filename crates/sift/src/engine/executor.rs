//! Execution engine for filter passes.
//!
//! ## Purpose
//!
//! This module runs a configured filter pass: it sizes the output buffer,
//! drives the core pass from the algorithms layer, records source indices
//! when asked to, and reports the pass through `tracing`.
//!
//! ## Design notes
//!
//! * Every predicate is treated as fallible; infallible predicates are
//!   lifted by the callers.
//! * A failed pass returns only the error. The partially filled buffer is
//!   dropped.
//!
//! ## Invariants
//!
//! * Indices are visited exactly once, in increasing order.
//! * Recorded indices are strictly increasing and match the retained values.
//!
//! ## Non-goals
//!
//! * This module does not validate dynamic inputs (handled by `validator`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use tracing::{debug, trace};

// Internal dependencies
use crate::algorithms::filter::try_filter_into;
use crate::engine::output::FilterOutput;

// ============================================================================
// Configuration
// ============================================================================

/// Options controlling a single filter pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterConfig {
    /// Record the source index of every retained element.
    pub return_indices: bool,

    /// Initial capacity of the output buffer. `None` starts empty.
    pub capacity: Option<usize>,
}

// ============================================================================
// Executor
// ============================================================================

/// Runs filter passes according to a [`FilterConfig`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FilterExecutor {
    config: FilterConfig,
}

impl FilterExecutor {
    /// Create an executor with the given configuration.
    pub fn new(config: FilterConfig) -> Self {
        Self { config }
    }

    /// The configuration this executor runs with.
    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Run one pass over `sequence`.
    pub fn run<T, C, E, P>(
        &self,
        sequence: &[T],
        context: Option<&C>,
        mut predicate: P,
    ) -> Result<FilterOutput<T>, E>
    where
        T: Clone,
        C: ?Sized,
        P: FnMut(Option<&C>, &T, usize, &[T]) -> Result<bool, E>,
    {
        let n = sequence.len();
        let capacity = self.config.capacity.map_or(0, |c| c.min(n));
        let mut values = Vec::with_capacity(capacity);
        let mut indices = self.config.return_indices.then(|| Vec::with_capacity(capacity));

        debug!(
            len = n,
            has_context = context.is_some(),
            return_indices = self.config.return_indices,
            "starting filter pass"
        );

        let outcome = try_filter_into(sequence, context, &mut values, |ctx, element, index, seq| {
            let verdict = predicate(ctx, element, index, seq);
            if let Ok(keep) = verdict {
                trace!(index, keep, "predicate verdict");
                if keep {
                    if let Some(indices) = indices.as_mut() {
                        indices.push(index);
                    }
                }
            }
            verdict
        });

        if let Err(err) = outcome {
            debug!(
                discarded = values.len(),
                "filter pass aborted by predicate"
            );
            return Err(err);
        }

        debug!(len = n, retained = values.len(), "filter pass complete");

        Ok(FilterOutput {
            values,
            indices,
            visited: n,
        })
    }
}
