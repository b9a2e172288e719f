//! Descriptive statistics for box-plot summaries.
//!
//! ## Purpose
//!
//! This module computes the order statistics behind a box plot (minimum,
//! quartiles, median, maximum) together with the mean and count, for a whole
//! sample or for each labelled group of records (loyal vs non-loyal
//! households, for example).
//!
//! ## Design notes
//!
//! * **Nearest rank**: Quantile `p` is `sorted[floor(p·n)]` with no
//!   interpolation; the index is clamped to `n − 1` so `p = 1` is the maximum.
//! * **Non-mutating**: The caller's sample is copied before sorting.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * `min <= q1 <= median <= q3 <= max`.
//! * `min <= mean <= max`.
//! * Repeated calls on the same sample give identical summaries.
//!
//! ## Non-goals
//!
//! * This module does not compute interpolated (type 7) quantiles.
//! * This module does not detect or flag outliers.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{collections::BTreeMap, vec::Vec};
#[cfg(feature = "std")]
use std::{collections::BTreeMap, vec::Vec};

// External dependencies
use core::cmp::Ordering::Equal;
use core::fmt;
use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::errors::AnalyticsError;

// ============================================================================
// Statistics Summary
// ============================================================================

/// Order statistics, mean and count of a sample.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StatisticsSummary<T> {
    /// Smallest value.
    pub min: T,
    /// First quartile (nearest rank).
    pub q1: T,
    /// Median (nearest rank).
    pub median: T,
    /// Third quartile (nearest rank).
    pub q3: T,
    /// Largest value.
    pub max: T,
    /// Arithmetic mean.
    pub mean: T,
    /// Sample size.
    pub count: usize,
}

impl<T: Float> StatisticsSummary<T> {
    /// Summarize a non-empty sample of finite values.
    pub fn summarize(sample: &[T]) -> Result<Self, AnalyticsError> {
        Validator::validate_sample(sample)?;

        let sorted = sorted_copy(sample);
        let n = sorted.len();
        let sum = sample.iter().fold(T::zero(), |acc, &v| acc + v);
        let mean = sum / T::from(n).ok_or(AnalyticsError::EmptyInput)?;

        Ok(Self {
            min: sorted[0],
            q1: sorted[nearest_rank_index(n, 1, 4)],
            median: sorted[nearest_rank_index(n, 1, 2)],
            q3: sorted[nearest_rank_index(n, 3, 4)],
            max: sorted[n - 1],
            mean,
            count: n,
        })
    }

    /// Interquartile range (q3 − q1).
    #[inline]
    pub fn iqr(&self) -> T {
        self.q3 - self.q1
    }

    /// Full range (max − min).
    #[inline]
    pub fn range(&self) -> T {
        self.max - self.min
    }
}

impl<T: Float + fmt::Display> fmt::Display for StatisticsSummary<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Count:  {}", self.count)?;
        writeln!(f, "  Min:    {:.6}", self.min)?;
        writeln!(f, "  Q1:     {:.6}", self.q1)?;
        writeln!(f, "  Median: {:.6}", self.median)?;
        writeln!(f, "  Q3:     {:.6}", self.q3)?;
        writeln!(f, "  Max:    {:.6}", self.max)?;
        write!(f, "  Mean:   {:.6}", self.mean)
    }
}

// ============================================================================
// Grouped Summaries
// ============================================================================

/// Summarize each labelled group of records.
///
/// `key` assigns a group label to each record and `value` extracts the number
/// to summarize. Groups come back in label order. Fails on the first
/// non-finite value; groups are never empty by construction.
pub fn summarize_groups<R, K, T, FK, FV>(
    records: &[R],
    key: FK,
    value: FV,
) -> Result<BTreeMap<K, StatisticsSummary<T>>, AnalyticsError>
where
    K: Ord,
    T: Float,
    FK: Fn(&R) -> K,
    FV: Fn(&R) -> T,
{
    if records.is_empty() {
        return Err(AnalyticsError::EmptyInput);
    }

    let mut groups: BTreeMap<K, Vec<T>> = BTreeMap::new();
    for record in records {
        groups.entry(key(record)).or_default().push(value(record));
    }

    groups
        .into_iter()
        .map(|(label, sample)| StatisticsSummary::summarize(&sample).map(|s| (label, s)))
        .collect()
}

// ============================================================================
// Nearest-Rank Percentiles
// ============================================================================

/// Nearest-rank percentile of an already sorted, non-empty sample.
///
/// `p` must lie in `[0, 1]`.
pub fn percentile<T: Float>(sorted: &[T], p: T) -> Result<T, AnalyticsError> {
    if sorted.is_empty() {
        return Err(AnalyticsError::EmptyInput);
    }
    Validator::validate_percentile(p)?;

    let n = sorted.len();
    let rank = (p * T::from(n).ok_or(AnalyticsError::EmptyInput)?)
        .floor()
        .to_usize()
        .unwrap_or(n - 1);
    Ok(sorted[rank.min(n - 1)])
}

/// `min(floor(n·num/den), n − 1)` in exact integer arithmetic.
#[inline]
fn nearest_rank_index(n: usize, num: usize, den: usize) -> usize {
    (n * num / den).min(n - 1)
}

/// Copy and sort ascending in numeric order.
fn sorted_copy<T: Float>(sample: &[T]) -> Vec<T> {
    let mut sorted = sample.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Equal));
    sorted
}
