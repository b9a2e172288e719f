//! Error types for the analytical transforms.
//!
//! ## Purpose
//!
//! This module defines the single error type returned by every fallible
//! operation in the crate: invalid input data, degenerate numerical cases
//! and invalid builder configuration.
//!
//! ## Design notes
//!
//! * **Typed outcomes**: Every "cannot compute" case is a distinct variant.
//! * **no_std**: `Display` is implemented by hand; `std::error::Error` only
//!   with the `std` feature.
//! * **Comparable**: Derives `Clone` and `PartialEq` so tests can match on
//!   exact errors.
//!
//! ## Invariants
//!
//! * No transform returns NaN or infinity in place of an error.
//!
//! ## Non-goals
//!
//! * This module does not model non-convergence; that is a result status.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

use core::fmt;

/// Errors produced by the regression, clustering and statistics transforms.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalyticsError {
    /// The sample or point set is empty.
    EmptyInput,

    /// Parallel coordinate slices have different lengths.
    MismatchedInputs {
        /// Number of x values.
        x_len: usize,
        /// Number of y values.
        y_len: usize,
    },

    /// A value is NaN or infinite.
    InvalidNumericValue(String),

    /// Not enough points for the requested computation.
    TooFewPoints {
        /// Points supplied.
        got: usize,
        /// Points required.
        min: usize,
    },

    /// All x values are identical, so no regression line exists.
    ZeroVariance,

    /// The requested number of clusters is zero.
    InvalidClusterCount(usize),

    /// Convergence tolerance is negative or not finite.
    InvalidTolerance(f64),

    /// Iteration cap is zero or unreasonably large.
    InvalidIterations(usize),

    /// Restart count is zero.
    InvalidRestarts(usize),

    /// Projection horizon is not finite.
    InvalidHorizon(f64),

    /// Percentile rank is outside `[0, 1]`.
    InvalidPercentile(f64),

    /// Sliding window is too small to hold a regression.
    InvalidWindowCapacity {
        /// Capacity requested.
        got: usize,
        /// Minimum capacity.
        min: usize,
    },

    /// A builder parameter was configured more than once.
    DuplicateParameter {
        /// Name of the parameter.
        parameter: &'static str,
    },
}

impl fmt::Display for AnalyticsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "Input is empty"),
            Self::MismatchedInputs { x_len, y_len } => {
                write!(f, "Length mismatch: x has {} points, y has {}", x_len, y_len)
            }
            Self::InvalidNumericValue(msg) => write!(f, "Invalid numeric value: {}", msg),
            Self::TooFewPoints { got, min } => {
                write!(f, "Too few points: got {}, need at least {}", got, min)
            }
            Self::ZeroVariance => write!(
                f,
                "Cannot fit: x values have zero variance (all x are identical)"
            ),
            Self::InvalidClusterCount(k) => {
                write!(f, "Invalid cluster count: {} (must be at least 1)", k)
            }
            Self::InvalidTolerance(tol) => {
                write!(f, "Invalid tolerance: {} (must be >= 0 and finite)", tol)
            }
            Self::InvalidIterations(iter) => {
                write!(f, "Invalid max_iterations: {} (must be in [1, 100000])", iter)
            }
            Self::InvalidRestarts(r) => {
                write!(f, "Invalid restarts: {} (must be at least 1)", r)
            }
            Self::InvalidHorizon(h) => write!(f, "Invalid horizon: {} (must be finite)", h),
            Self::InvalidPercentile(p) => {
                write!(f, "Invalid percentile: {} (must be in [0, 1])", p)
            }
            Self::InvalidWindowCapacity { got, min } => write!(
                f,
                "Invalid window_capacity: {} (must be at least {})",
                got, min
            ),
            Self::DuplicateParameter { parameter } => write!(
                f,
                "Parameter '{}' was set multiple times. Each parameter can only be configured once.",
                parameter
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AnalyticsError {}
