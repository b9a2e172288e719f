//! High-level API for the analytical transforms.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points. It implements fluent
//! builders for regression (with a choice of execution adapter) and for
//! k-means clustering, and re-exports the statistics functions.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builders with sensible defaults for all parameters.
//! * **Polymorphic**: Uses marker types to transition to adapter builders.
//! * **Validated**: Parameters are validated when `.build()` is called.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ## Key concepts
//!
//! * **Execution Adapters**: Batch and Online regression.
//! * **Configuration Flow**: `Regression::new()...adapter(Batch).build()?`
//!   and `KMeans::new()...build()?`.
//! * **Reproducibility**: `KMeans::seed` fixes the random stream.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`RegressionBuilder`] via `Regression::new()`.
//! 2. Chain configuration methods (`.horizon()`, `.return_diagnostics()`, etc.).
//! 3. Select an adapter via `.adapter(Batch)` to get an execution builder.

// External dependencies
use num_traits::Float;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// Internal dependencies
use crate::adapters::batch::BatchRegressionBuilder;
use crate::adapters::online::OnlineRegressionBuilder;
use crate::algorithms::kmeans;
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::adapters::batch::{BatchRegression, RegressionResult};
pub use crate::adapters::online::{OnlineOutput, OnlineRegression, UpdateMode};
pub use crate::algorithms::kmeans::{
    Cluster, ClusteringResult, EmptyClusterPolicy, Initialization, KMeansConfig, cluster,
};
pub use crate::algorithms::regression::{Projection, RegressionFit};
pub use crate::algorithms::statistics::{StatisticsSummary, percentile, summarize_groups};
pub use crate::evaluation::diagnostics::Diagnostics;
pub use crate::primitives::errors::AnalyticsError;
pub use crate::primitives::point::{Planar, Point};

/// Seed used when no seed is given and no entropy source exists.
#[cfg(not(feature = "std"))]
const FALLBACK_SEED: u64 = 0x5eed_cafe;

/// Marker types for selecting execution adapters.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::{Batch, Online};
}

/// Summarize a sample: min, nearest-rank quartiles, max, mean and count.
pub fn summarize<T: Float>(sample: &[T]) -> Result<StatisticsSummary<T>, AnalyticsError> {
    StatisticsSummary::summarize(sample)
}

// ============================================================================
// Regression Builder
// ============================================================================

/// Fluent builder for configuring regression and its execution mode.
#[derive(Debug, Clone)]
pub struct RegressionBuilder<T: Float> {
    /// Projection horizon beyond the last observation.
    pub horizon: Option<T>,

    /// Return residuals (Batch only).
    pub compute_residuals: Option<bool>,

    /// Return RMSE, MAE and R² (Batch only).
    pub return_diagnostics: Option<bool>,

    /// Sliding window capacity (Online only).
    pub window_capacity: Option<usize>,

    /// Eviction update mode (Online only).
    pub update_mode: Option<UpdateMode>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for RegressionBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> RegressionBuilder<T> {
    /// Select an execution adapter to transition to an execution builder.
    pub fn adapter<A>(self, _adapter: A) -> A::Output
    where
        A: RegressionAdapter<T>,
    {
        A::convert(self)
    }

    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            horizon: None,
            compute_residuals: None,
            return_diagnostics: None,
            window_capacity: None,
            update_mode: None,
            duplicate_param: None,
        }
    }

    /// Set how far beyond the last observation to project (default: 30).
    pub fn horizon(mut self, horizon: T) -> Self {
        if self.horizon.is_some() {
            self.duplicate_param = Some("horizon");
        }
        self.horizon = Some(horizon);
        self
    }

    /// Include residuals in output.
    pub fn return_residuals(mut self) -> Self {
        if self.compute_residuals.is_some() {
            self.duplicate_param = Some("compute_residuals");
        }
        self.compute_residuals = Some(true);
        self
    }

    /// Include fit diagnostics (RMSE, MAE, R²) in output.
    pub fn return_diagnostics(mut self) -> Self {
        if self.return_diagnostics.is_some() {
            self.duplicate_param = Some("return_diagnostics");
        }
        self.return_diagnostics = Some(true);
        self
    }

    /// Set the window capacity for online processing (Online only).
    pub fn window_capacity(mut self, capacity: usize) -> Self {
        if self.window_capacity.is_some() {
            self.duplicate_param = Some("window_capacity");
        }
        self.window_capacity = Some(capacity);
        self
    }

    /// Set the eviction update mode (Online only).
    pub fn update_mode(mut self, mode: UpdateMode) -> Self {
        if self.update_mode.is_some() {
            self.duplicate_param = Some("update_mode");
        }
        self.update_mode = Some(mode);
        self
    }
}

/// Trait for transitioning from a generic builder to an execution builder.
pub trait RegressionAdapter<T: Float> {
    /// The output execution builder.
    type Output;

    /// Convert a generic [`RegressionBuilder`] into a specialized execution builder.
    fn convert(builder: RegressionBuilder<T>) -> Self::Output;
}

/// Marker for in-memory batch processing.
#[derive(Debug, Clone, Copy)]
pub struct Batch;

impl<T: Float> RegressionAdapter<T> for Batch {
    type Output = BatchRegressionBuilder<T>;

    fn convert(builder: RegressionBuilder<T>) -> Self::Output {
        let mut result = BatchRegressionBuilder::default();

        // Override with user-provided values
        if let Some(horizon) = builder.horizon {
            result = result.horizon(horizon);
        }
        if let Some(cr) = builder.compute_residuals {
            result = result.compute_residuals(cr);
        }
        if let Some(rd) = builder.return_diagnostics {
            result = result.return_diagnostics(rd);
        }

        result.duplicate_param = builder.duplicate_param;

        result
    }
}

/// Marker for incremental online processing.
#[derive(Debug, Clone, Copy)]
pub struct Online;

impl<T: Float> RegressionAdapter<T> for Online {
    type Output = OnlineRegressionBuilder<T>;

    fn convert(builder: RegressionBuilder<T>) -> Self::Output {
        let mut result = OnlineRegressionBuilder::default();

        // Override with user-provided values
        if let Some(horizon) = builder.horizon {
            result = result.horizon(horizon);
        }
        if let Some(capacity) = builder.window_capacity {
            result = result.window_capacity(capacity);
        }
        if let Some(um) = builder.update_mode {
            result = result.update_mode(um);
        }

        result.duplicate_param = builder.duplicate_param;

        result
    }
}

// ============================================================================
// K-Means Builder
// ============================================================================

/// Fluent builder for k-means clustering.
#[derive(Debug, Clone)]
pub struct KMeansBuilder<T: Float> {
    /// Number of clusters (default: 3).
    pub clusters: Option<usize>,

    /// Convergence tolerance on centroid displacement (default: 1e-9).
    pub tolerance: Option<T>,

    /// Iteration cap per restart (default: 300).
    pub max_iterations: Option<usize>,

    /// Seeding strategy (default: Random).
    pub initialization: Option<Initialization>,

    /// Empty-cluster recovery (default: ReseedFarthest).
    pub empty_cluster_policy: Option<EmptyClusterPolicy>,

    /// Independent seedings, best inertia kept (default: 10).
    pub restarts: Option<usize>,

    /// Random seed for reproducible runs.
    pub seed: Option<u64>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for KMeansBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> KMeansBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            clusters: None,
            tolerance: None,
            max_iterations: None,
            initialization: None,
            empty_cluster_policy: None,
            restarts: None,
            seed: None,
            duplicate_param: None,
        }
    }

    /// Set the number of clusters.
    pub fn clusters(mut self, k: usize) -> Self {
        if self.clusters.is_some() {
            self.duplicate_param = Some("clusters");
        }
        self.clusters = Some(k);
        self
    }

    /// Set the convergence tolerance (0 means exact equality).
    pub fn tolerance(mut self, tolerance: T) -> Self {
        if self.tolerance.is_some() {
            self.duplicate_param = Some("tolerance");
        }
        self.tolerance = Some(tolerance);
        self
    }

    /// Set the iteration cap.
    pub fn max_iterations(mut self, iterations: usize) -> Self {
        if self.max_iterations.is_some() {
            self.duplicate_param = Some("max_iterations");
        }
        self.max_iterations = Some(iterations);
        self
    }

    /// Set the seeding strategy.
    pub fn initialization(mut self, init: Initialization) -> Self {
        if self.initialization.is_some() {
            self.duplicate_param = Some("initialization");
        }
        self.initialization = Some(init);
        self
    }

    /// Set the empty-cluster recovery policy.
    pub fn empty_cluster_policy(mut self, policy: EmptyClusterPolicy) -> Self {
        if self.empty_cluster_policy.is_some() {
            self.duplicate_param = Some("empty_cluster_policy");
        }
        self.empty_cluster_policy = Some(policy);
        self
    }

    /// Set the number of independent seedings.
    pub fn restarts(mut self, restarts: usize) -> Self {
        if self.restarts.is_some() {
            self.duplicate_param = Some("restarts");
        }
        self.restarts = Some(restarts);
        self
    }

    /// Fix the random seed.
    pub fn seed(mut self, seed: u64) -> Self {
        if self.seed.is_some() {
            self.duplicate_param = Some("seed");
        }
        self.seed = Some(seed);
        self
    }

    /// Validate the configuration and build the model.
    pub fn build(self) -> Result<KMeans<T>, AnalyticsError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let defaults = KMeansConfig::<T>::default();
        let config = KMeansConfig {
            k: self.clusters.unwrap_or(defaults.k),
            tolerance: self.tolerance.unwrap_or(defaults.tolerance),
            max_iterations: self.max_iterations.unwrap_or(defaults.max_iterations),
            initialization: self.initialization.unwrap_or(defaults.initialization),
            empty_cluster_policy: self
                .empty_cluster_policy
                .unwrap_or(defaults.empty_cluster_policy),
            restarts: self.restarts.unwrap_or(defaults.restarts),
        };
        config.validate()?;

        Ok(KMeans {
            config,
            seed: self.seed,
        })
    }
}

/// A configured k-means model.
#[derive(Debug, Clone)]
pub struct KMeans<T> {
    config: KMeansConfig<T>,
    seed: Option<u64>,
}

impl<T: Float> KMeans<T> {
    /// The validated configuration.
    pub fn config(&self) -> &KMeansConfig<T> {
        &self.config
    }

    /// Cluster `points` with the configured seed (or fresh entropy).
    pub fn fit<P>(&self, points: &[P]) -> Result<ClusteringResult<T, P>, AnalyticsError>
    where
        P: Planar<T> + Clone,
    {
        let mut rng = self.make_rng();
        kmeans::cluster(points, &self.config, &mut rng)
    }

    /// Cluster `points` drawing seeds from `rng`.
    pub fn fit_with_rng<P, R>(
        &self,
        points: &[P],
        rng: &mut R,
    ) -> Result<ClusteringResult<T, P>, AnalyticsError>
    where
        P: Planar<T> + Clone,
        R: Rng,
    {
        kmeans::cluster(points, &self.config, rng)
    }

    fn make_rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            #[cfg(feature = "std")]
            None => StdRng::from_rng(&mut rand::rng()),
            #[cfg(not(feature = "std"))]
            None => StdRng::seed_from_u64(FALLBACK_SEED),
        }
    }
}
