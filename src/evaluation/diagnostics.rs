//! Goodness-of-fit diagnostics.
//!
//! ## Purpose
//!
//! This module measures how well a transform describes its input: error
//! metrics and R² for a fitted line, and within-cluster inertia for a
//! clustering.
//!
//! ## Design notes
//!
//! * **Decoupled**: Works on plain slices of observed and fitted values so
//!   it does not depend on any particular model type.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **RMSE**: √(Σr² / n)
//! * **MAE**: Σ|r| / n
//! * **R²**: 1 − SS_res / SS_tot; defined as 1 when y is constant and fitted
//!   exactly, 0 when y is constant and not fitted exactly.
//! * **Inertia**: Σ‖pᵢ − c(pᵢ)‖²
//!
//! ## Non-goals
//!
//! * This module does not compute information criteria.

// External dependencies
use core::fmt;
use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// Internal dependencies
use crate::math::distance::squared_euclidean;
use crate::primitives::point::Point;

/// Fit quality metrics for a regression.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Diagnostics<T> {
    /// Root mean squared error.
    pub rmse: T,

    /// Mean absolute error.
    pub mae: T,

    /// Coefficient of determination.
    pub r_squared: T,
}

impl<T: Float> Diagnostics<T> {
    /// Compute diagnostics from observed values and their fitted values.
    ///
    /// Both slices must be non-empty and of equal length.
    pub fn compute(observed: &[T], fitted: &[T]) -> Self {
        debug_assert_eq!(observed.len(), fitted.len());
        debug_assert!(!observed.is_empty());

        let n = T::from(observed.len()).unwrap_or_else(T::one);
        let mean = observed.iter().fold(T::zero(), |acc, &v| acc + v) / n;

        let mut ss_res = T::zero();
        let mut ss_tot = T::zero();
        let mut abs_sum = T::zero();
        for (&y, &f) in observed.iter().zip(fitted.iter()) {
            let r = y - f;
            ss_res = ss_res + r * r;
            abs_sum = abs_sum + r.abs();
            let d = y - mean;
            ss_tot = ss_tot + d * d;
        }

        let r_squared = if ss_tot > T::zero() {
            T::one() - ss_res / ss_tot
        } else if ss_res <= T::epsilon() {
            T::one()
        } else {
            T::zero()
        };

        Self {
            rmse: (ss_res / n).sqrt(),
            mae: abs_sum / n,
            r_squared,
        }
    }
}

impl<T: Float + fmt::Display> fmt::Display for Diagnostics<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Diagnostics:")?;
        writeln!(f, "  RMSE: {:.6}", self.rmse)?;
        writeln!(f, "  MAE:  {:.6}", self.mae)?;
        write!(f, "  R^2:  {:.6}", self.r_squared)
    }
}

/// Sum of squared distances from each point to the centroid of its label.
pub fn inertia<T: Float>(points: &[Point<T>], labels: &[usize], centroids: &[Point<T>]) -> T {
    debug_assert_eq!(points.len(), labels.len());
    points
        .iter()
        .zip(labels.iter())
        .map(|(&p, &j)| squared_euclidean(p, centroids[j]))
        .fold(T::zero(), |acc, d| acc + d)
}
