//! Planar distance computation.
//!
//! ## Purpose
//!
//! This module provides the Euclidean distance used by k-means assignment,
//! the squared form used for inertia and k-means++ seeding, and the
//! nearest-centroid search shared by both.
//!
//! ## Design notes
//!
//! * **Decoupling**: Distance calculation is separated from clustering logic.
//! * **Squared form**: Comparisons use squared distances; the square root is
//!   only taken when a true distance is reported.
//!
//! ## Invariants
//!
//! * Distance is always non-negative for finite inputs.
//! * Nearest-centroid ties resolve to the lowest index.
//!
//! ## Non-goals
//!
//! * This module does not provide non-Euclidean metrics.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::point::Point;

/// Squared Euclidean distance: (x₁ - x₂)² + (y₁ - y₂)²
#[inline]
pub fn squared_euclidean<T: Float>(a: Point<T>, b: Point<T>) -> T {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx * dx + dy * dy
}

/// Euclidean distance: √((x₁ - x₂)² + (y₁ - y₂)²)
#[inline]
pub fn euclidean<T: Float>(a: Point<T>, b: Point<T>) -> T {
    squared_euclidean(a, b).sqrt()
}

/// Index of the centroid nearest to `p` and its squared distance.
///
/// Only a strictly smaller distance replaces the current best, so ties go to
/// the first centroid encountered. Returns `None` for an empty centroid set.
#[inline]
pub fn nearest<T: Float>(p: Point<T>, centroids: &[Point<T>]) -> Option<(usize, T)> {
    let mut best: Option<(usize, T)> = None;
    for (j, &c) in centroids.iter().enumerate() {
        let d = squared_euclidean(p, c);
        match best {
            Some((_, bd)) if d >= bd => {}
            _ => best = Some((j, d)),
        }
    }
    best
}
