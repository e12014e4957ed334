//! High-level API for configured filtering.
//!
//! ## Purpose
//!
//! This module provides a fluent builder for filter passes that need more
//! than the free functions offer: a bound receiver context, fallible
//! predicates, recorded source indices or a preallocated output buffer.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder; every option has a default.
//! * **Deferred errors**: Misconfiguration is recorded and reported by `build()`.
//! * **Reusable**: A built [`FilterPass`] can be applied to any number of sequences.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`FilterBuilder`] via `Filter::new()` or
//!    `Filter::with_context(&ctx)` (`Filter` is the prelude name of the builder).
//! 2. Supply a predicate and chain options (`.return_indices()`, `.capacity()`).
//! 3. Call `.build()` and then `.apply(&sequence)`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::boxed::Box;
#[cfg(feature = "std")]
use std::boxed::Box;

// External dependencies
use core::fmt::{Debug, Formatter, Result as FmtResult};
use tracing::debug;

// Internal dependencies
use crate::engine::executor::{FilterConfig, FilterExecutor};
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::engine::output::FilterOutput;
pub use crate::primitives::errors::FilterError;

/// Boxed predicate stored by the builder.
pub type PredicateFn<'a, T, C> =
    Box<dyn FnMut(Option<&C>, &T, usize, &[T]) -> Result<bool, FilterError> + 'a>;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a filter pass.
pub struct FilterBuilder<'a, T, C: ?Sized = ()> {
    /// Receiver context handed to the predicate.
    pub context: Option<&'a C>,

    /// Record source indices of retained elements.
    pub return_indices: Option<bool>,

    /// Initial output capacity.
    pub capacity: Option<usize>,

    predicate: Option<PredicateFn<'a, T, C>>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<'a, T> Default for FilterBuilder<'a, T, ()> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> FilterBuilder<'a, T, ()> {
    /// Create a builder without a receiver context.
    pub fn new() -> Self {
        Self::empty(None)
    }
}

impl<'a, T, C: ?Sized> FilterBuilder<'a, T, C> {
    fn empty(context: Option<&'a C>) -> Self {
        Self {
            context,
            return_indices: None,
            capacity: None,
            predicate: None,
            duplicate_param: None,
        }
    }

    fn mark(&mut self, parameter: &'static str, already_set: bool) {
        if already_set {
            self.duplicate_param = Some(parameter);
        }
    }

    /// Create a builder whose predicate receives `context` as its receiver.
    pub fn with_context(context: &'a C) -> Self {
        Self::empty(Some(context))
    }

    /// Set the receiver context.
    pub fn context(mut self, context: &'a C) -> Self {
        self.mark("context", self.context.is_some());
        self.context = Some(context);
        self
    }

    /// Set a predicate over `(element, index, sequence)`.
    pub fn predicate<F>(mut self, mut predicate: F) -> Self
    where
        F: FnMut(&T, usize, &[T]) -> bool + 'a,
    {
        self.mark("predicate", self.predicate.is_some());
        self.predicate = Some(Box::new(
            move |_: Option<&C>, element: &T, index: usize, sequence: &[T]| {
                Ok::<bool, FilterError>(predicate(element, index, sequence))
            },
        ));
        self
    }

    /// Set a predicate that also receives the context.
    pub fn predicate_with<F>(mut self, mut predicate: F) -> Self
    where
        F: FnMut(Option<&C>, &T, usize, &[T]) -> bool + 'a,
    {
        self.mark("predicate", self.predicate.is_some());
        self.predicate = Some(Box::new(
            move |context: Option<&C>, element: &T, index: usize, sequence: &[T]| {
                Ok::<bool, FilterError>(predicate(context, element, index, sequence))
            },
        ));
        self
    }

    /// Set a fallible predicate. Its first error aborts the pass.
    pub fn try_predicate<F>(mut self, predicate: F) -> Self
    where
        F: FnMut(Option<&C>, &T, usize, &[T]) -> Result<bool, FilterError> + 'a,
    {
        self.mark("predicate", self.predicate.is_some());
        self.predicate = Some(Box::new(predicate));
        self
    }

    /// Record the source index of every retained element.
    pub fn return_indices(mut self) -> Self {
        self.mark("return_indices", self.return_indices.is_some());
        self.return_indices = Some(true);
        self
    }

    /// Preallocate the output buffer. Capped at the input length.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.mark("capacity", self.capacity.is_some());
        self.capacity = Some(capacity);
        self
    }

    /// Validate the configuration and produce a reusable [`FilterPass`].
    pub fn build(self) -> Result<FilterPass<'a, T, C>, FilterError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;
        let predicate = Validator::validate_predicate(self.predicate)?;

        let config = FilterConfig {
            return_indices: self.return_indices.unwrap_or(false),
            capacity: self.capacity,
        };
        debug!(
            return_indices = config.return_indices,
            has_context = self.context.is_some(),
            "filter built"
        );

        Ok(FilterPass {
            context: self.context,
            predicate,
            executor: FilterExecutor::new(config),
        })
    }
}

impl<T, C: ?Sized> Debug for FilterBuilder<'_, T, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("FilterBuilder")
            .field("has_context", &self.context.is_some())
            .field("has_predicate", &self.predicate.is_some())
            .field("return_indices", &self.return_indices)
            .field("capacity", &self.capacity)
            .field("duplicate_param", &self.duplicate_param)
            .finish()
    }
}

// ============================================================================
// Filter
// ============================================================================

/// A validated, reusable filter pass.
pub struct FilterPass<'a, T, C: ?Sized = ()> {
    context: Option<&'a C>,
    predicate: PredicateFn<'a, T, C>,
    executor: FilterExecutor,
}

impl<'a, T: Clone, C: ?Sized> FilterPass<'a, T, C> {
    /// Run the pass over `sequence`.
    pub fn apply(&mut self, sequence: &[T]) -> Result<FilterOutput<T>, FilterError> {
        let predicate = &mut self.predicate;
        self.executor.run(sequence, self.context, |context, element, index, seq| {
            predicate(context, element, index, seq)
        })
    }

    /// The configuration the pass runs with.
    pub fn config(&self) -> &FilterConfig {
        self.executor.config()
    }
}

impl<T, C: ?Sized> Debug for FilterPass<'_, T, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("FilterPass")
            .field("has_context", &self.context.is_some())
            .field("config", self.executor.config())
            .finish()
    }
}
