//! Method-call adapter for slices.
//!
//! Puts the filter operations on every `[T]` (and, through deref, every
//! `Vec<T>` and array) so calls read `numbers.filtered(..)`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::algorithms::filter::{filter, filter_refs, filter_with, try_filter_with};

/// Filter operations available on any slice.
pub trait Sequence<T> {
    /// Keep the elements for which `predicate(element, index, sequence)` is true.
    fn filtered<P>(&self, predicate: P) -> Vec<T>
    where
        T: Clone,
        P: FnMut(&T, usize, &[T]) -> bool;

    /// Like [`filtered`](Sequence::filtered), with a receiver context.
    fn filtered_with<C, P>(&self, context: Option<&C>, predicate: P) -> Vec<T>
    where
        T: Clone,
        C: ?Sized,
        P: FnMut(Option<&C>, &T, usize, &[T]) -> bool;

    /// Like [`filtered_with`](Sequence::filtered_with), stopping at the first predicate error.
    fn try_filtered_with<C, E, P>(&self, context: Option<&C>, predicate: P) -> Result<Vec<T>, E>
    where
        T: Clone,
        C: ?Sized,
        P: FnMut(Option<&C>, &T, usize, &[T]) -> Result<bool, E>;

    /// Keep references to the accepted elements.
    fn filtered_refs<P>(&self, predicate: P) -> Vec<&T>
    where
        P: FnMut(&T, usize, &[T]) -> bool;
}

impl<T> Sequence<T> for [T] {
    #[inline]
    fn filtered<P>(&self, predicate: P) -> Vec<T>
    where
        T: Clone,
        P: FnMut(&T, usize, &[T]) -> bool,
    {
        filter(self, predicate)
    }

    #[inline]
    fn filtered_with<C, P>(&self, context: Option<&C>, predicate: P) -> Vec<T>
    where
        T: Clone,
        C: ?Sized,
        P: FnMut(Option<&C>, &T, usize, &[T]) -> bool,
    {
        filter_with(self, context, predicate)
    }

    #[inline]
    fn try_filtered_with<C, E, P>(&self, context: Option<&C>, predicate: P) -> Result<Vec<T>, E>
    where
        T: Clone,
        C: ?Sized,
        P: FnMut(Option<&C>, &T, usize, &[T]) -> Result<bool, E>,
    {
        try_filter_with(self, context, predicate)
    }

    #[inline]
    fn filtered_refs<P>(&self, predicate: P) -> Vec<&T>
    where
        P: FnMut(&T, usize, &[T]) -> bool,
    {
        filter_refs(self, predicate)
    }
}
