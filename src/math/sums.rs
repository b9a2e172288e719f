//! Running sums for closed-form least squares.
//!
//! ## Purpose
//!
//! This module holds the five accumulators of ordinary least squares
//! (n, Σx, Σy, Σxy, Σx²) and solves the normal equations from them. The
//! accumulators support removal so the online adapter can slide a window.
//!
//! ## Design notes
//!
//! * **Single pass**: O(n) time, O(1) space.
//! * **Shifted origin**: x is accumulated relative to the first sample
//!   (`dx = x − origin`), so day numbers far from zero keep their precision.
//!   The intercept is shifted back after solving.
//! * **Degeneracy**: The x-variance denominator `nΣdx² − (Σdx)²` is compared
//!   against `n·Σdx²` scaled by machine epsilon, so cancellation noise on
//!   identical x values is treated as zero variance.
//! * **Removal drift**: `peak_xx` records the largest Σdx² since the sums were
//!   built. Once removals shrink Σdx² far below it, the remaining sum is
//!   mostly rounding residue and [`LinearSums::is_degraded`] reports it, as it
//!   does once the retained samples have drifted far from `origin`.
//!
//! ## Invariants
//!
//! * `solve` never returns a non-finite slope or intercept.
//! * `sum_x`, `sum_xy` and `sum_xx` are taken over `x − origin`.
//!
//! ## Non-goals
//!
//! * This module does not validate its inputs (see `Validator`).

// External dependencies
use num_traits::Float;

/// Accumulated sums over (x, y) samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearSums<T> {
    /// Number of samples.
    pub n: usize,
    /// x of the first sample; every x sum is taken relative to it.
    pub origin: T,
    /// Σdx
    pub sum_x: T,
    /// Σy
    pub sum_y: T,
    /// Σdx·y
    pub sum_xy: T,
    /// Σdx²
    pub sum_xx: T,
    /// Largest Σdx² reached since construction.
    pub peak_xx: T,
}

impl<T: Float> Default for LinearSums<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> LinearSums<T> {
    /// Empty accumulator.
    pub fn new() -> Self {
        Self {
            n: 0,
            origin: T::zero(),
            sum_x: T::zero(),
            sum_y: T::zero(),
            sum_xy: T::zero(),
            sum_xx: T::zero(),
            peak_xx: T::zero(),
        }
    }

    /// Accumulate every pair from an iterator.
    pub fn from_pairs<I: IntoIterator<Item = (T, T)>>(pairs: I) -> Self {
        let mut sums = Self::new();
        for (x, y) in pairs {
            sums.add(x, y);
        }
        sums
    }

    /// Add one sample.
    #[inline]
    pub fn add(&mut self, x: T, y: T) {
        if self.n == 0 {
            self.origin = x;
        }
        let dx = x - self.origin;
        self.n += 1;
        self.sum_x = self.sum_x + dx;
        self.sum_y = self.sum_y + y;
        self.sum_xy = self.sum_xy + dx * y;
        self.sum_xx = self.sum_xx + dx * dx;
        self.peak_xx = self.peak_xx.max(self.sum_xx);
    }

    /// Remove a sample previously added.
    #[inline]
    pub fn remove(&mut self, x: T, y: T) {
        debug_assert!(self.n > 0, "remove from empty sums");
        if self.n <= 1 {
            *self = Self::new();
            return;
        }
        let dx = x - self.origin;
        self.n -= 1;
        self.sum_x = self.sum_x - dx;
        self.sum_y = self.sum_y - y;
        self.sum_xy = self.sum_xy - dx * y;
        self.sum_xx = self.sum_xx - dx * dx;
    }

    /// Whether every accumulator is finite.
    pub fn is_finite(&self) -> bool {
        self.sum_x.is_finite()
            && self.sum_y.is_finite()
            && self.sum_xy.is_finite()
            && self.sum_xx.is_finite()
    }

    /// Whether removals have left the sums dominated by rounding residue.
    ///
    /// True when any sum is non-finite, when Σdx² has fallen below `√ε` of
    /// its peak, or when the x-variance denominator is below `√ε` of `nΣdx²`
    /// (the retained samples sit far from `origin`). Callers should rebuild
    /// from the retained samples, which also moves `origin` onto them.
    pub fn is_degraded(&self) -> bool {
        let tol = T::epsilon().sqrt();
        let n = T::from(self.n).unwrap_or_else(T::zero);
        !self.is_finite()
            || self.sum_xx < tol * self.peak_xx
            || self.x_denominator() < tol * n * self.sum_xx
    }

    /// `nΣdx² − (Σdx)²`
    #[inline]
    pub fn x_denominator(&self) -> T {
        let n = T::from(self.n).unwrap_or_else(T::zero);
        n * self.sum_xx - self.sum_x * self.sum_x
    }

    /// Solve for `(slope, intercept)`.
    ///
    /// Returns `None` when fewer than two samples were added or x has no
    /// variance.
    pub fn solve(&self) -> Option<(T, T)> {
        if self.n < 2 {
            return None;
        }
        let n = T::from(self.n)?;
        let denom = self.x_denominator();
        let scale = n * self.sum_xx;
        if !denom.is_finite() || denom <= T::epsilon() * scale.abs() {
            return None;
        }

        let slope = (n * self.sum_xy - self.sum_x * self.sum_y) / denom;
        // Intercept at dx = 0, moved back to x = 0
        let intercept = (self.sum_y - slope * self.sum_x) / n - slope * self.origin;

        if slope.is_finite() && intercept.is_finite() {
            Some((slope, intercept))
        } else {
            None
        }
    }
}
