//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer provides post-processing metrics for transform outputs:
//! - Regression diagnostics (RMSE, MAE, R²)
//! - Clustering inertia
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
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Fit diagnostics and inertia.
pub mod diagnostics;
