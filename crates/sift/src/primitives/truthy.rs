//! Truthy/falsy coercion.
//!
//! ## Purpose
//!
//! This module defines how a non-boolean verdict is interpreted as a boolean.
//! Typed predicates return `bool` directly; coercion only happens when a
//! caller opts in (see [`truthy`](crate::algorithms::filter::truthy)) or on
//! the dynamic [`Value`](crate::primitives::value::Value) path.
//!
//! ## Key concepts
//!
//! * Numbers are falsy at zero (either sign) and NaN.
//! * Strings and containers are falsy when empty.
//! * `None` is falsy; `Some(v)` is as truthy as `v`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};
#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

// External dependencies
use num_traits::Zero;

/// Conversion of a value to a boolean verdict.
pub trait Truthy {
    /// Returns `true` when the value counts as true in a conditional.
    fn is_truthy(&self) -> bool;

    /// Negation of [`is_truthy`](Truthy::is_truthy).
    #[inline]
    fn is_falsy(&self) -> bool {
        !self.is_truthy()
    }
}

impl Truthy for bool {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! impl_truthy_integer {
    ($($t:ty),* $(,)?) => {
        $(
            impl Truthy for $t {
                #[inline]
                fn is_truthy(&self) -> bool {
                    !Zero::is_zero(self)
                }
            }
        )*
    };
}

macro_rules! impl_truthy_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl Truthy for $t {
                #[inline]
                fn is_truthy(&self) -> bool {
                    !Zero::is_zero(self) && !self.is_nan()
                }
            }
        )*
    };
}

impl_truthy_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_truthy_float!(f32, f64);

impl Truthy for char {
    #[inline]
    fn is_truthy(&self) -> bool {
        true
    }
}

impl Truthy for str {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for [T] {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for Vec<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Truthy> Truthy for Option<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}
