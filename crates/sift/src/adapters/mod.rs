//! Layer 4: Adapters
//!
//! # Purpose
//!
//! This layer exposes the filter pass through two front doors: a method-call
//! trait for typed slices, and a dynamic path for sequences of `Value` with
//! callbacks stored as values.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Adapters ← You are here
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives
//! ```

/// Typed slice methods.
pub mod sequence;

/// Dynamic value filtering.
pub mod dynamic;
