//! Layer 2: Algorithms
//!
//! # Purpose
//!
//! This layer provides the filter pass itself as free functions over
//! slices, in strict, contextual, fallible and by-reference forms.
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
//! Layer 2: Algorithms ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Index-aware filtering.
pub mod filter;
