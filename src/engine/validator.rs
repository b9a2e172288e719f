//! Input validation for transform configuration and data.
//!
//! ## Purpose
//!
//! This module provides validation functions for builder parameters and
//! input data. It checks requirements such as non-empty input, matching
//! lengths, finite values and parameter bounds.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Finite Checks**: Ensures all inputs are finite (no NaN/Inf).
//! * **Regression Requirements**: Ensures at least 2 samples for a line.
//! * **Clustering Requirements**: Ensures `1 <= k <= points`.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter input data.
//! * This module does not detect zero x-variance (the fit reports it).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::AnalyticsError;
use crate::primitives::point::Planar;

/// Upper bound on k-means iterations accepted by the builder.
const MAX_ITERATIONS: usize = 100_000;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for configuration and input data.
///
/// All methods return `Result<(), AnalyticsError>` and fail fast upon
/// identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate parallel coordinate slices for regression.
    pub fn validate_xy<T: Float>(x: &[T], y: &[T]) -> Result<(), AnalyticsError> {
        if x.is_empty() || y.is_empty() {
            return Err(AnalyticsError::EmptyInput);
        }

        if x.len() != y.len() {
            return Err(AnalyticsError::MismatchedInputs {
                x_len: x.len(),
                y_len: y.len(),
            });
        }

        if y.len() < 2 {
            return Err(AnalyticsError::TooFewPoints {
                got: y.len(),
                min: 2,
            });
        }

        Self::validate_finite(x, "x")?;
        Self::validate_finite(y, "y")
    }

    /// Validate planar points: non-empty, at least `min` of them, all finite.
    pub fn validate_points<T: Float, P: Planar<T>>(
        points: &[P],
        min: usize,
    ) -> Result<(), AnalyticsError> {
        if points.is_empty() {
            return Err(AnalyticsError::EmptyInput);
        }

        if points.len() < min {
            return Err(AnalyticsError::TooFewPoints {
                got: points.len(),
                min,
            });
        }

        for (i, p) in points.iter().enumerate() {
            let pos = p.position();
            if !pos.is_finite() {
                return Err(AnalyticsError::InvalidNumericValue(format!(
                    "points[{}]=({}, {})",
                    i,
                    pos.x.to_f64().unwrap_or(f64::NAN),
                    pos.y.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    /// Validate a numeric sample for summary statistics.
    pub fn validate_sample<T: Float>(sample: &[T]) -> Result<(), AnalyticsError> {
        if sample.is_empty() {
            return Err(AnalyticsError::EmptyInput);
        }
        Self::validate_finite(sample, "sample")
    }

    /// Validate that every value of a slice is finite.
    pub fn validate_finite<T: Float>(values: &[T], name: &str) -> Result<(), AnalyticsError> {
        for (i, &val) in values.iter().enumerate() {
            if !val.is_finite() {
                return Err(AnalyticsError::InvalidNumericValue(format!(
                    "{}[{}]={}",
                    name,
                    i,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        Ok(())
    }

    /// Validate a single numeric value for finiteness.
    pub fn validate_scalar<T: Float>(val: T, name: &str) -> Result<(), AnalyticsError> {
        if !val.is_finite() {
            return Err(AnalyticsError::InvalidNumericValue(format!(
                "{}={}",
                name,
                val.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }

    /// Validate one streamed `(x, y)` observation.
    ///
    /// Besides finiteness, `x²` and `x·y` must be finite so the sample can
    /// be added to and later removed from running least-squares sums.
    pub fn validate_observation<T: Float>(x: T, y: T) -> Result<(), AnalyticsError> {
        Self::validate_scalar(x, "x")?;
        Self::validate_scalar(y, "y")?;
        if !(x * x).is_finite() || !(x * y).is_finite() {
            return Err(AnalyticsError::InvalidNumericValue(format!(
                "(x, y)=({}, {}) overflows the running sums",
                x.to_f64().unwrap_or(f64::NAN),
                y.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the number of clusters against the number of points.
    pub fn validate_cluster_count(k: usize, points: usize) -> Result<(), AnalyticsError> {
        if k == 0 {
            return Err(AnalyticsError::InvalidClusterCount(k));
        }
        if points < k {
            return Err(AnalyticsError::TooFewPoints {
                got: points,
                min: k,
            });
        }
        Ok(())
    }

    /// Validate the k-means convergence tolerance.
    ///
    /// Zero is accepted and means exact centroid equality.
    pub fn validate_tolerance<T: Float>(tol: T) -> Result<(), AnalyticsError> {
        if !tol.is_finite() || tol < T::zero() {
            return Err(AnalyticsError::InvalidTolerance(
                tol.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the k-means iteration cap.
    pub fn validate_iterations(iterations: usize) -> Result<(), AnalyticsError> {
        if iterations == 0 || iterations > MAX_ITERATIONS {
            return Err(AnalyticsError::InvalidIterations(iterations));
        }
        Ok(())
    }

    /// Validate the number of k-means restarts.
    pub fn validate_restarts(restarts: usize) -> Result<(), AnalyticsError> {
        if restarts == 0 {
            return Err(AnalyticsError::InvalidRestarts(restarts));
        }
        Ok(())
    }

    /// Validate the projection horizon.
    pub fn validate_horizon<T: Float>(horizon: T) -> Result<(), AnalyticsError> {
        if !horizon.is_finite() {
            return Err(AnalyticsError::InvalidHorizon(
                horizon.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate a percentile rank in `[0, 1]`.
    pub fn validate_percentile<T: Float>(p: T) -> Result<(), AnalyticsError> {
        if !p.is_finite() || p < T::zero() || p > T::one() {
            return Err(AnalyticsError::InvalidPercentile(
                p.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    // ========================================================================
    // Adapter-Specific Validation
    // ========================================================================

    /// Validate the maximum capacity of the sliding window in online mode.
    pub fn validate_window_capacity(
        window_capacity: usize,
        min: usize,
    ) -> Result<(), AnalyticsError> {
        if window_capacity < min {
            return Err(AnalyticsError::InvalidWindowCapacity {
                got: window_capacity,
                min,
            });
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), AnalyticsError> {
        if let Some(param) = duplicate_param {
            return Err(AnalyticsError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
