//! Layer 6: Adapters
//!
//! # Purpose
//!
//! This layer provides execution adapters for regression:
//! - Batch: the whole sample at once, with projection and diagnostics
//! - Online: one sample at a time, with an optional sliding window
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters ← You are here
//!   ↓
//! Layer 5: Algorithms
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Batch regression.
pub mod batch;

/// Online regression.
pub mod online;
