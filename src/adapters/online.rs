//! Online adapter for incremental regression.
//!
//! ## Purpose
//!
//! This module provides the online (incremental) execution adapter for
//! least-squares regression. Samples arrive one at a time; each arrival
//! updates the running sums and, once a line exists, returns the current fit
//! and projection. An optional sliding window keeps only recent samples.
//!
//! ## Design notes
//!
//! * **Storage**: Uses a `VecDeque` for the sliding window.
//! * **Eviction**: Evicts oldest samples when capacity is reached.
//! * **Processing**: O(1) sum updates in `Incremental` mode; `Full` mode
//!   rebuilds the sums from the window after each eviction.
//! * **Drift control**: `Incremental` mode also rebuilds once subtraction
//!   has left the sums dominated by rounding residue, so a window of
//!   identical x never yields a line.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Initialization Phase**: Returns `None` until the window holds two
//!   samples with distinct x values.
//! * **Update Modes**: `Incremental` (fast) and `Full` (no accumulated
//!   rounding from removals).
//!
//! ## Invariants
//!
//! * Window size never exceeds capacity.
//! * All values in window are finite, and so are `x²` and `x·y`.
//! * A fit exists only when the window holds two distinct x values.
//! * Window maintains insertion order (oldest to newest).
//!
//! ## Non-goals
//!
//! * This adapter does not compute diagnostic statistics.
//! * This adapter does not reorder out-of-order samples.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::collections::VecDeque;
#[cfg(not(feature = "std"))]
use alloc::format;
#[cfg(feature = "std")]
use std::collections::VecDeque;

// External dependencies
use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// Internal dependencies
use crate::algorithms::regression::{Projection, RegressionFit};
use crate::engine::validator::Validator;
use crate::math::sums::LinearSums;
use crate::primitives::errors::AnalyticsError;
use crate::primitives::point::Point;

/// Update mode for online regression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpdateMode {
    /// Rebuild the sums from the window after every eviction.
    Full,

    /// Subtract evicted samples from the running sums.
    #[default]
    Incremental,
}

// Bits of `OnlineRegressionBuilder::explicit`.
const HORIZON: u8 = 1;
const WINDOW_CAPACITY: u8 = 1 << 1;
const UPDATE_MODE: u8 = 1 << 2;

// ============================================================================
// Online Regression Builder
// ============================================================================

/// Builder for the online regression processor.
#[derive(Debug, Clone)]
pub struct OnlineRegressionBuilder<T> {
    /// Window capacity (None = keep every sample)
    pub window_capacity: Option<usize>,

    /// Distance beyond the newest sample to project
    pub horizon: T,

    /// Update mode for evictions
    pub update_mode: UpdateMode,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,

    /// Parameters set explicitly so far
    #[doc(hidden)]
    pub(crate) explicit: u8,
}

impl<T: Float> Default for OnlineRegressionBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> OnlineRegressionBuilder<T> {
    /// Create a new online builder with default parameters.
    fn new() -> Self {
        Self {
            window_capacity: None,
            horizon: T::from(30.0).unwrap_or_else(T::zero),
            update_mode: UpdateMode::default(),
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

    /// Set window capacity (maximum number of samples to retain).
    pub fn window_capacity(mut self, capacity: usize) -> Self {
        self.record(WINDOW_CAPACITY, "window_capacity");
        self.window_capacity = Some(capacity);
        self
    }

    /// Set the update mode for evictions.
    pub fn update_mode(mut self, mode: UpdateMode) -> Self {
        self.record(UPDATE_MODE, "update_mode");
        self.update_mode = mode;
        self
    }

    /// Build the online processor.
    pub fn build(self) -> Result<OnlineRegression<T>, AnalyticsError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;
        Validator::validate_horizon(self.horizon)?;
        if let Some(capacity) = self.window_capacity {
            Validator::validate_window_capacity(capacity, 2)?;
        }

        let window = match self.window_capacity {
            Some(capacity) => VecDeque::with_capacity(capacity),
            None => VecDeque::new(),
        };
        Ok(OnlineRegression {
            config: self,
            window,
            sums: LinearSums::new(),
        })
    }
}

// ============================================================================
// Online Regression Output
// ============================================================================

/// Result of a single online update.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OnlineOutput<T> {
    /// Line fitted to the current window
    pub fit: RegressionFit<T>,

    /// Fitted value at the newest x
    pub fitted: T,

    /// Residual of the newest sample (y - fitted)
    pub residual: T,

    /// Projection beyond the newest sample
    pub projection: Projection<T>,
}

// ============================================================================
// Online Regression Processor
// ============================================================================

/// Online least-squares processor for streaming samples.
#[derive(Debug, Clone)]
pub struct OnlineRegression<T> {
    config: OnlineRegressionBuilder<T>,
    window: VecDeque<Point<T>>,
    sums: LinearSums<T>,
}

impl<T: Float> OnlineRegression<T> {
    /// Add a new sample and get the updated fit.
    ///
    /// Returns `Ok(None)` while no line can be fitted (fewer than two samples,
    /// or all x values in the window identical). A rejected sample leaves the
    /// window and the sums untouched.
    pub fn add_point(&mut self, x: T, y: T) -> Result<Option<OnlineOutput<T>>, AnalyticsError> {
        Validator::validate_observation(x, y)?;

        let previous = self.sums;
        self.sums.add(x, y);
        if !self.sums.is_finite() {
            self.sums = previous;
            return Err(AnalyticsError::InvalidNumericValue(format!(
                "(x, y)=({}, {}) overflows the running sums",
                x.to_f64().unwrap_or(f64::NAN),
                y.to_f64().unwrap_or(f64::NAN)
            )));
        }
        self.window.push_back(Point::new(x, y));

        // Evict oldest if over capacity
        if let Some(capacity) = self.config.window_capacity {
            let mut evicted = false;
            while self.window.len() > capacity {
                if let Some(old) = self.window.pop_front() {
                    if self.config.update_mode == UpdateMode::Incremental {
                        self.sums.remove(old.x, old.y);
                    }
                    evicted = true;
                }
            }
            let rebuild = match self.config.update_mode {
                UpdateMode::Full => evicted,
                UpdateMode::Incremental => evicted && self.sums.is_degraded(),
            };
            if rebuild {
                self.rebuild_sums();
            }
        }

        let Some(fit) = self.current_fit() else {
            return Ok(None);
        };

        let fitted = fit.predict(x);
        Ok(Some(OnlineOutput {
            fit,
            fitted,
            residual: y - fitted,
            projection: fit.project(self.config.horizon),
        }))
    }

    /// Line fitted to the current window, if one exists.
    pub fn current_fit(&self) -> Option<RegressionFit<T>> {
        let (x_min, x_max) = self
            .window
            .iter()
            .fold((T::infinity(), T::neg_infinity()), |(lo, hi), p| {
                (lo.min(p.x), hi.max(p.x))
            });
        // Identical x: no line, whatever residue the sums carry
        if x_min >= x_max {
            return None;
        }
        RegressionFit::from_sums(&self.sums, x_min, x_max).ok()
    }

    fn rebuild_sums(&mut self) {
        self.sums = LinearSums::from_pairs(self.window.iter().map(|p| (p.x, p.y)));
    }

    /// Number of samples currently in the window.
    pub fn window_size(&self) -> usize {
        self.window.len()
    }

    /// Drop every sample.
    pub fn reset(&mut self) {
        self.window.clear();
        self.sums = LinearSums::new();
    }
}
