//! Batch adapter for regression over a complete sample.
//!
//! ## Purpose
//!
//! This module provides the batch execution adapter for least-squares
//! regression. It fits the whole sample in one pass and assembles the
//! projection, residuals and diagnostics the churn chart needs.
//!
//! ## Design notes
//!
//! * **Processing**: Processes the entire dataset in a single pass.
//! * **Delegation**: Delegates the fit to `RegressionFit`.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * At least 2 samples with distinct x values are required.
//! * All values must be finite.
//! * Residual order matches input order.
//!
//! ## Non-goals
//!
//! * This adapter does not handle incremental updates (use online adapter).
//! * This adapter does not handle missing values.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt;
use log::debug;
use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// Internal dependencies
use crate::algorithms::regression::{Projection, RegressionFit};
use crate::engine::validator::Validator;
use crate::evaluation::diagnostics::Diagnostics;
use crate::primitives::errors::AnalyticsError;
use crate::primitives::point::Point;

// Bits of `BatchRegressionBuilder::explicit`.
const HORIZON: u8 = 1;
const COMPUTE_RESIDUALS: u8 = 1 << 1;
const RETURN_DIAGNOSTICS: u8 = 1 << 2;

// ============================================================================
// Batch Regression Builder
// ============================================================================

/// Builder for the batch regression processor.
#[derive(Debug, Clone)]
pub struct BatchRegressionBuilder<T> {
    /// Distance beyond the last observation to project.
    pub horizon: T,

    /// Whether to return residuals.
    pub compute_residuals: bool,

    /// Whether to compute diagnostics.
    pub return_diagnostics: bool,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,

    /// Parameters set explicitly so far
    #[doc(hidden)]
    pub(crate) explicit: u8,
}

impl<T: Float> Default for BatchRegressionBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> BatchRegressionBuilder<T> {
    /// Create a new batch builder with default parameters.
    fn new() -> Self {
        Self {
            horizon: T::from(30.0).unwrap_or_else(T::zero),
            compute_residuals: false,
            return_diagnostics: false,
            duplicate_param: None,
            explicit: 0,
        }
    }

    fn record(&mut self, flag: u8, name: &'static str) {
        if self.explicit & flag != 0 {
            self.duplicate_param = Some(name);
        }
        self.explicit |= flag;
    }

    /// Set the projection horizon.
    pub fn horizon(mut self, horizon: T) -> Self {
        self.record(HORIZON, "horizon");
        self.horizon = horizon;
        self
    }

    /// Enable returning residuals in the output.
    pub fn compute_residuals(mut self, enabled: bool) -> Self {
        self.record(COMPUTE_RESIDUALS, "compute_residuals");
        self.compute_residuals = enabled;
        self
    }

    /// Enable computing diagnostics in the output.
    pub fn return_diagnostics(mut self, enabled: bool) -> Self {
        self.record(RETURN_DIAGNOSTICS, "return_diagnostics");
        self.return_diagnostics = enabled;
        self
    }

    /// Build the batch processor.
    pub fn build(self) -> Result<BatchRegression<T>, AnalyticsError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;
        Validator::validate_horizon(self.horizon)?;

        Ok(BatchRegression { config: self })
    }
}

// ============================================================================
// Batch Regression Output
// ============================================================================

/// Result of a batch regression.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RegressionResult<T> {
    /// The fitted line.
    pub fit: RegressionFit<T>,

    /// Segment from the last observation to the horizon.
    pub projection: Projection<T>,

    /// Observed minus fitted values, if requested.
    pub residuals: Option<Vec<T>>,

    /// Fit quality metrics, if requested.
    pub diagnostics: Option<Diagnostics<T>>,
}

impl<T: Float + fmt::Display> fmt::Display for RegressionResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Data points: {}", self.fit.n)?;
        writeln!(f, "  Slope:       {:.6}", self.fit.slope)?;
        writeln!(f, "  Intercept:   {:.6}", self.fit.intercept)?;
        let (x_min, x_max) = self.fit.x_range();
        writeln!(f, "  X range:     [{:.2}, {:.2}]", x_min, x_max)?;
        writeln!(f)?;
        writeln!(f, "Projection:")?;
        writeln!(
            f,
            "  {:>12} {:>12}",
            "X", "Y_fit"
        )?;
        writeln!(f, "  {}", "-".repeat(25))?;
        writeln!(
            f,
            "  {:>12.2} {:>12.5}",
            self.projection.start.x, self.projection.start.y
        )?;
        write!(
            f,
            "  {:>12.2} {:>12.5}",
            self.projection.end.x, self.projection.end.y
        )?;
        if let Some(diag) = &self.diagnostics {
            writeln!(f)?;
            writeln!(f)?;
            write!(f, "{}", diag)?;
        }
        Ok(())
    }
}

// ============================================================================
// Batch Regression Processor
// ============================================================================

/// Batch least-squares processor.
#[derive(Debug, Clone)]
pub struct BatchRegression<T> {
    config: BatchRegressionBuilder<T>,
}

impl<T: Float> BatchRegression<T> {
    /// Fit the line to `samples` and project it.
    pub fn fit(&self, samples: &[Point<T>]) -> Result<RegressionResult<T>, AnalyticsError> {
        let fit = RegressionFit::fit(samples)?;
        let observed: Vec<T> = samples.iter().map(|p| p.y).collect();
        self.finish(fit, &observed, || fit.residuals(samples))
    }

    /// Fit the line to parallel slices and project it.
    pub fn fit_xy(&self, x: &[T], y: &[T]) -> Result<RegressionResult<T>, AnalyticsError> {
        let fit = RegressionFit::fit_xy(x, y)?;
        self.finish(fit, y, || {
            x.iter()
                .zip(y.iter())
                .map(|(&xi, &yi)| yi - fit.predict(xi))
                .collect()
        })
    }

    fn finish<F>(
        &self,
        fit: RegressionFit<T>,
        observed: &[T],
        residuals: F,
    ) -> Result<RegressionResult<T>, AnalyticsError>
    where
        F: FnOnce() -> Vec<T>,
    {
        let projection = fit.project(self.config.horizon);
        debug!(
            "regression over {} samples: slope = {}, intercept = {}",
            fit.n,
            fit.slope.to_f64().unwrap_or(f64::NAN),
            fit.intercept.to_f64().unwrap_or(f64::NAN)
        );

        let needs_residuals = self.config.compute_residuals || self.config.return_diagnostics;
        let residuals = if needs_residuals {
            Some(residuals())
        } else {
            None
        };

        let diagnostics = match (&residuals, self.config.return_diagnostics) {
            (Some(r), true) => {
                let fitted: Vec<T> = observed
                    .iter()
                    .zip(r.iter())
                    .map(|(&y, &res)| y - res)
                    .collect();
                Some(Diagnostics::compute(observed, &fitted))
            }
            _ => None,
        };

        Ok(RegressionResult {
            fit,
            projection,
            residuals: if self.config.compute_residuals {
                residuals
            } else {
                None
            },
            diagnostics,
        })
    }
}
