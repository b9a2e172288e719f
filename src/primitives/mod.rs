//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the data types every other layer builds on:
//! - The crate-wide error type
//! - Point types and the `Planar` coordinate trait
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters
//!   ↓
//! Layer 5: Algorithms
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error type.
pub mod errors;

/// Point types and the `Planar` trait.
pub mod point;
