//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used by the transforms:
//! - Planar distances and nearest-centroid search
//! - Least-squares running sums
//!
//! These are reusable mathematical building blocks with no algorithm-specific logic.
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
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Euclidean distance in the plane.
pub mod distance;

/// Least-squares accumulators.
pub mod sums;
