//! Layer 5: Algorithms
//!
//! # Purpose
//!
//! This layer holds the three analytical transforms:
//! - Least-squares regression with projection (churn forecasting)
//! - K-means clustering (customer segmentation)
//! - Nearest-rank descriptive statistics (loyalty box plots)
//!
//! The transforms are independent of one another.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters
//!   ↓
//! Layer 5: Algorithms ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// K-means clustering.
pub mod kmeans;

/// Least-squares regression.
pub mod regression;

/// Descriptive statistics.
pub mod statistics;
