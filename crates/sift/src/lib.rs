//! # sift: index-aware sequence filtering for Rust
//!
//! `sift` keeps the elements of a sequence that a predicate accepts. The
//! predicate sees every element together with its index and the whole
//! sequence, and may be bound to a receiver context.
//!
//! ## Quick Start
//!
//! ### Free functions
//!
//! ```rust
//! use sift::prelude::*;
//!
//! let numbers = vec![1, 10, 15, 18, 20, 34];
//! let small = filter(&numbers, |n, _, _| *n < 15);
//!
//! assert_eq!(small, vec![1, 10]);
//! assert_eq!(numbers.len(), 6); // the input is untouched
//! ```
//!
//! ### Methods on slices
//!
//! ```rust
//! use sift::prelude::*;
//!
//! let readings = [3, 9, 4, 12, 8];
//!
//! // Keep the local peaks by looking at the neighbours.
//! let peaks = readings.filtered(|r, i, all| {
//!     let left = i.checked_sub(1).map_or(true, |j| all[j] < *r);
//!     let right = all.get(i + 1).map_or(true, |next| next < r);
//!     left && right
//! });
//!
//! assert_eq!(peaks, vec![9, 12]);
//! ```
//!
//! ### Receiver context
//!
//! ```rust
//! use sift::prelude::*;
//!
//! struct Range { lo: i32, hi: i32 }
//!
//! let bounds = Range { lo: 10, hi: 20 };
//! let inside = [1, 10, 15, 18, 20, 34].filtered_with(Some(&bounds), |ctx, v, _, _| {
//!     ctx.map_or(false, |r| r.lo <= *v && *v < r.hi)
//! });
//!
//! assert_eq!(inside, vec![10, 15, 18]);
//! ```
//!
//! ### Configured passes
//!
//! ```rust
//! use sift::prelude::*;
//!
//! let words = ["alpha", "", "gamma", "", "epsilon"];
//!
//! let mut non_empty = Filter::new()
//!     .predicate(|w: &&str, _, _| !w.is_empty())
//!     .return_indices()
//!     .build()?;
//!
//! let output = non_empty.apply(&words)?;
//! assert_eq!(output.values, vec!["alpha", "gamma", "epsilon"]);
//! assert_eq!(output.indices, Some(vec![0, 2, 4]));
//! # Result::<(), FilterError>::Ok(())
//! ```
//!
//! ### Dynamic values
//!
//! ```rust
//! use sift::prelude::*;
//!
//! let mixed = Value::array([Value::from(1), Value::Undefined, Value::Null, Value::from(0), Value::from(true)]);
//! let is_true = Value::function(|_, v, _, _| Ok(Value::from(v.strict_equals(&Value::Bool(true)))));
//!
//! let kept = mixed.filter(&is_true, None)?;
//! assert_eq!(kept.to_string(), "[ true ]");
//! # Result::<(), FilterError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! Typed predicates return `bool`, so the free functions cannot fail. The
//! fallible forms ([`try_filter_with`](prelude::try_filter_with), the builder
//! and the dynamic path) return `Result<_, FilterError>`; the first error
//! aborts the pass and no partial result is returned.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments with `alloc`:
//!
//! ```toml
//! [dependencies]
//! sift = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - errors, truthiness, dynamic values.
mod primitives;

// Layer 2: Algorithms - the filter pass.
mod algorithms;

// Layer 3: Engine - validation, execution and output.
mod engine;

// Layer 4: Adapters - slice methods and dynamic filtering.
mod adapters;

// High-level fluent API.
mod api;

// Standard sift prelude.
pub mod prelude {
    pub use crate::adapters::dynamic::filter_values;
    pub use crate::adapters::sequence::Sequence;
    pub use crate::algorithms::filter::{
        filter, filter_refs, filter_with, truthy, try_filter_into, try_filter_with,
    };
    pub use crate::api::{FilterBuilder as Filter, FilterError, FilterOutput, FilterPass};
    pub use crate::engine::executor::FilterConfig;
    pub use crate::primitives::truthy::Truthy;
    pub use crate::primitives::value::{Callback, Inspect, Value};
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
