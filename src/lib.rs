//! # retail-analytics — Trend, Segmentation and Distribution Statistics for Rust
//!
//! The numerical core of a retail customer-analytics dashboard: three
//! transforms that turn raw customer and transaction records into the shapes
//! a chart layer draws.
//!
//! ## What is in the box?
//!
//! - **Regression**: ordinary least-squares line through `(x, y)` samples
//!   (e.g. day vs. churned customers), plus a projection segment from the last
//!   observation to a configurable horizon beyond it.
//! - **K-means**: partitions 2-D points (e.g. spend vs. household size) into
//!   `k` segments by Lloyd's iteration, with reproducible seeding, an
//!   empty-cluster policy and a convergence tolerance.
//! - **Statistics**: five-number summary (min, nearest-rank quartiles, max)
//!   plus mean and count, for a whole sample or per labelled group.
//!
//! Everything is generic over `num_traits::Float`, so `f32` and `f64` both
//! work, and the crate builds without the standard library.
//!
//! ## Quick Start
//!
//! ### Churn Trend
//!
//! ```rust
//! use retail_analytics::prelude::*;
//!
//! let days: Vec<f64> = vec![1.0, 2.0, 3.0, 4.0, 5.0];
//! let churned: Vec<f64> = vec![5.0, 7.0, 9.0, 11.0, 13.0];
//!
//! // Build the model
//! let model = Regression::new()
//!     .horizon(30.0)          // Project 30 days past the last observation
//!     .return_diagnostics()   // RMSE, MAE and R²
//!     .adapter(Batch)
//!     .build()?;
//!
//! // Fit the model to the data
//! let result = model.fit_xy(&days, &churned)?;
//!
//! assert!((result.fit.slope - 2.0).abs() < 1e-12);
//! assert!((result.fit.intercept - 3.0).abs() < 1e-12);
//! println!("{}", result);
//! # Result::<(), AnalyticsError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Data points: 5
//!   Slope:       2.000000
//!   Intercept:   3.000000
//!   X range:     [1.00, 5.00]
//!
//! Projection:
//!              X        Y_fit
//!   -------------------------
//!           5.00     13.00000
//!          35.00     73.00000
//!
//! Diagnostics:
//!   RMSE: 0.000000
//!   MAE:  0.000000
//!   R^2:  1.000000
//! ```
//!
//! ### Customer Segments
//!
//! ```rust
//! use retail_analytics::prelude::*;
//!
//! let customers = vec![
//!     Point::new(120.0, 1.0),
//!     Point::new(130.0, 1.0),
//!     Point::new(125.0, 2.0),
//!     Point::new(900.0, 4.0),
//!     Point::new(910.0, 5.0),
//!     Point::new(905.0, 4.0),
//! ];
//!
//! let model = KMeans::new()
//!     .clusters(2)
//!     .initialization(KMeansPlusPlus)
//!     .seed(42)
//!     .build()?;
//!
//! let result = model.fit(&customers)?;
//!
//! assert_eq!(result.clusters.len(), 2);
//! assert_eq!(result.labels[0], result.labels[1]);
//! assert_ne!(result.labels[0], result.labels[3]);
//! # Result::<(), AnalyticsError>::Ok(())
//! ```
//!
//! Any record type can be clustered by implementing [`prelude::Planar`]; the
//! records come back grouped per cluster with all of their fields intact.
//!
//! ### Spend Distribution
//!
//! ```rust
//! use retail_analytics::prelude::*;
//!
//! let spend = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
//! let summary = summarize(&spend)?;
//!
//! assert_eq!(summary.min, 1.0);
//! assert_eq!(summary.q1, 3.0);
//! assert_eq!(summary.median, 6.0);
//! assert_eq!(summary.q3, 8.0);
//! assert_eq!(summary.max, 10.0);
//! assert_eq!(summary.mean, 5.5);
//! # Result::<(), AnalyticsError>::Ok(())
//! ```
//!
//! Quartiles use the nearest-rank rule on the ascending sort: `q1` is the
//! element at index `floor(n/4)`, the median at `floor(n/2)` and `q3` at
//! `floor(3n/4)`, each clamped to `n - 1`. No interpolation is performed.
//!
//! ### Result and Error Handling
//!
//! Every fallible entry point returns `Result<_, AnalyticsError>`. Inputs are
//! validated up front: empty or mismatched inputs, non-finite values and
//! out-of-range parameters are reported as errors, never as `NaN` output.
//!
//! ```rust
//! use retail_analytics::prelude::*;
//!
//! let model = Regression::new().adapter(Batch).build()?;
//!
//! match model.fit_xy(&[4.0, 4.0, 4.0], &[1.0, 2.0, 3.0]) {
//!     Ok(result) => println!("Trend: {}", result.fit),
//!     Err(e) => {
//!         // e is AnalyticsError::ZeroVariance
//!         eprintln!("Fitting failed: {}", e);
//!     }
//! }
//! # Result::<(), AnalyticsError>::Ok(())
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! Disable default features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! retail-analytics = { version = "0.1", default-features = false }
//! ```
//!
//! Without `std`, unseeded k-means runs fall back to a fixed seed instead of
//! drawing from the operating system; call `.seed(..)` to choose one.
//!
//! ## Parameters
//!
//! All builder parameters have sensible defaults. You only need to specify
//! what you want to change. Setting the same parameter twice is reported as
//! `AnalyticsError::DuplicateParameter` by `.build()`.
//!
//! | Parameter                | Default          | Range/Options             | Description                               | Builder            |
//! |--------------------------|------------------|---------------------------|-------------------------------------------|--------------------|
//! | **horizon**              | 30               | finite                    | Projection distance past the last x       | Regression         |
//! | **return_residuals**     | false            | true/false                | Include residuals in output               | Regression (Batch) |
//! | **return_diagnostics**   | false            | true/false                | Include RMSE, MAE, R² in output           | Regression (Batch) |
//! | **window_capacity**      | None (unbounded) | [2, ∞)                    | Sliding window size                       | Regression (Online)|
//! | **update_mode**          | `Incremental`    | `Incremental`, `Full`     | How evictions update the running sums     | Regression (Online)|
//! | **clusters**             | 3                | [1, n]                    | Number of segments                        | KMeans             |
//! | **tolerance**            | 1e-9             | [0, ∞)                    | Largest centroid move counted as converged| KMeans             |
//! | **max_iterations**       | 300              | [1, 100000]               | Iteration cap per restart                 | KMeans             |
//! | **initialization**       | `Random`         | `Random`, `KMeansPlusPlus`| Seeding strategy                          | KMeans             |
//! | **empty_cluster_policy** | `ReseedFarthest` | `ReseedFarthest`, `Freeze`| Recovery when a cluster loses every point | KMeans             |
//! | **restarts**             | 10               | [1, ∞)                    | Independent seedings, lowest inertia kept | KMeans             |
//! | **seed**                 | None (entropy)   | any `u64`                 | Fixes the random stream                   | KMeans             |
//!
//! ### Online Adapter
//!
//! Incremental updates with an optional sliding window for live feeds.
//!
//! ```rust
//! use retail_analytics::prelude::*;
//!
//! let mut model = Regression::new()
//!     .window_capacity(7)
//!     .adapter(Online)
//!     .build()?;
//!
//! for day in 1..=10 {
//!     let x = day as f64;
//!     if let Some(update) = model.add_point(x, 2.0 * x + 1.0)? {
//!         println!("Projected churn: {:.2}", update.projection.end.y);
//!     }
//! }
//! assert_eq!(model.window_size(), 7);
//! # Result::<(), AnalyticsError>::Ok(())
//! ```
//!
//! ### Logging
//!
//! The crate logs through the `log` facade: `debug!` for per-run summaries
//! and `warn!` when k-means stops at the iteration cap or reseeds an empty
//! cluster. Install any `log` backend to see them.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data structures and basic utilities.
//
// Contains the error type and the `Point`/`Planar` abstractions.
mod primitives;

// Layer 2: Math - pure mathematical functions.
//
// Contains distance metrics and the running sums behind least squares.
mod math;

// Layer 3: Engine - input and parameter validation.
mod engine;

// Layer 4: Evaluation - fit quality metrics.
//
// Contains RMSE, MAE, R² and k-means inertia.
mod evaluation;

// Layer 5: Algorithms - the three transforms.
//
// Contains least-squares regression, k-means clustering and nearest-rank
// summary statistics.
mod algorithms;

// Layer 6: Adapters - execution mode adapters.
//
// Contains execution adapters for regression: batch (whole sample) and
// online (incremental).
mod adapters;

// High-level fluent API.
//
// Provides the `Regression` and `KMeans` builders.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use retail_analytics::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        Adapter::{Batch, Online},
        AnalyticsError, BatchRegression, Cluster, ClusteringResult, Diagnostics,
        EmptyClusterPolicy,
        EmptyClusterPolicy::{Freeze, ReseedFarthest},
        Initialization,
        Initialization::{KMeansPlusPlus, Random},
        KMeans as KMeansModel, KMeansBuilder as KMeans, KMeansConfig, OnlineOutput,
        OnlineRegression, Planar, Point, Projection, RegressionBuilder as Regression,
        RegressionFit, RegressionResult, StatisticsSummary, UpdateMode,
        UpdateMode::{Full, Incremental},
        cluster, percentile, summarize, summarize_groups,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal validation.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal evaluation and diagnostics.
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    /// Internal core algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal adapters.
    pub mod adapters {
        pub use crate::adapters::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
