//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the shared data types used throughout the crate:
//! errors, truthiness coercion and dynamically typed values. It has zero
//! internal dependencies outside itself.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Adapters
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
pub mod errors;

/// Truthy/falsy coercion.
pub mod truthy;

/// Dynamically typed values.
pub mod value;
