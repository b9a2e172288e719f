//! Ordinary least-squares line fitting and projection.
//!
//! ## Purpose
//!
//! This module fits a straight line `y = slope·x + intercept` to paired
//! samples, evaluates it, and projects it a fixed horizon beyond the last
//! observation (the churn forecast).
//!
//! ## Design notes
//!
//! * **Closed form**: `slope = (nΣxy − ΣxΣy) / (nΣx² − (Σx)²)`,
//!   `intercept = (Σy − slope·Σx) / n`, evaluated on x shifted to the first
//!   sample (see `LinearSums`).
//! * **Single pass**: One sweep accumulates the sums and the x range.
//! * **Order independent**: The fit depends only on the multiset of samples.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * At least two samples with non-zero x variance; otherwise the fit fails
//!   with `ZeroVariance` or `TooFewPoints` instead of returning NaN.
//! * A successful fit has finite coefficients.
//!
//! ## Non-goals
//!
//! * This module does not compute confidence intervals.
//! * This module does not fit weighted or multivariate models.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt;
use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// Internal dependencies
use crate::engine::validator::Validator;
use crate::math::sums::LinearSums;
use crate::primitives::errors::AnalyticsError;
use crate::primitives::point::Point;

// ============================================================================
// Regression Fit
// ============================================================================

/// A fitted least-squares line.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RegressionFit<T> {
    /// Slope of the line.
    pub slope: T,

    /// Value of the line at x = 0.
    pub intercept: T,

    /// Number of samples the line was fitted to.
    pub n: usize,

    /// Smallest observed x.
    pub x_min: T,

    /// Largest observed x.
    pub x_max: T,
}

/// A projected segment from the last observation to a future x.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Projection<T> {
    /// Fitted value at the largest observed x.
    pub start: Point<T>,

    /// Fitted value `horizon` units after `start`.
    pub end: Point<T>,
}

impl<T: Float> RegressionFit<T> {
    // ========================================================================
    // Fitting
    // ========================================================================

    /// Fit a line to a slice of points.
    pub fn fit(samples: &[Point<T>]) -> Result<Self, AnalyticsError> {
        Validator::validate_points(samples, 2)?;
        Self::from_pairs(samples.iter().map(|p| (p.x, p.y)))
    }

    /// Fit a line to parallel x and y slices.
    pub fn fit_xy(x: &[T], y: &[T]) -> Result<Self, AnalyticsError> {
        Validator::validate_xy(x, y)?;
        Self::from_pairs(x.iter().copied().zip(y.iter().copied()))
    }

    /// Fit from already-validated pairs.
    fn from_pairs<I: IntoIterator<Item = (T, T)>>(pairs: I) -> Result<Self, AnalyticsError> {
        let mut sums = LinearSums::new();
        let mut x_min = T::infinity();
        let mut x_max = T::neg_infinity();
        for (x, y) in pairs {
            sums.add(x, y);
            x_min = x_min.min(x);
            x_max = x_max.max(x);
        }
        if !sums.is_finite() {
            return Err(AnalyticsError::InvalidNumericValue(format!(
                "least-squares sums overflow for x in [{}, {}]",
                x_min.to_f64().unwrap_or(f64::NAN),
                x_max.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Self::from_sums(&sums, x_min, x_max)
    }

    /// Solve accumulated sums into a fit.
    pub(crate) fn from_sums(
        sums: &LinearSums<T>,
        x_min: T,
        x_max: T,
    ) -> Result<Self, AnalyticsError> {
        if sums.n < 2 {
            return Err(AnalyticsError::TooFewPoints { got: sums.n, min: 2 });
        }

        let (slope, intercept) = sums.solve().ok_or(AnalyticsError::ZeroVariance)?;

        Ok(Self {
            slope,
            intercept,
            n: sums.n,
            x_min,
            x_max,
        })
    }

    // ========================================================================
    // Evaluation
    // ========================================================================

    /// Value of the line at `x`.
    #[inline]
    pub fn predict(&self, x: T) -> T {
        self.slope * x + self.intercept
    }

    /// Values of the line at each of `xs`.
    pub fn predict_many(&self, xs: &[T]) -> Vec<T> {
        xs.iter().map(|&x| self.predict(x)).collect()
    }

    /// Observed x range as `(x_min, x_max)`.
    #[inline]
    pub fn x_range(&self) -> (T, T) {
        (self.x_min, self.x_max)
    }

    /// Segment from the last observation to `horizon` units beyond it.
    pub fn project(&self, horizon: T) -> Projection<T> {
        let future = self.x_max + horizon;
        Projection {
            start: Point::new(self.x_max, self.predict(self.x_max)),
            end: Point::new(future, self.predict(future)),
        }
    }

    /// Observed minus fitted value for each sample.
    pub fn residuals(&self, samples: &[Point<T>]) -> Vec<T> {
        samples.iter().map(|p| p.y - self.predict(p.x)).collect()
    }
}

impl<T: Float + fmt::Display> fmt::Display for RegressionFit<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.intercept < T::zero() { '-' } else { '+' };
        write!(
            f,
            "y = {:.6}x {} {:.6} (n = {})",
            self.slope,
            sign,
            self.intercept.abs(),
            self.n
        )
    }
}
