//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer orchestrates filter passes: validation of inputs and
//! configuration, execution with optional index recording, and the output
//! type handed back to callers.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Adapters
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives
//! ```

/// Pass execution.
pub mod executor;

/// Result types.
pub mod output;

/// Input and configuration validation.
pub mod validator;
