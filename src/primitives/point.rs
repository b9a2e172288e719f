//! Two-dimensional point types shared by the transforms.
//!
//! ## Purpose
//!
//! This module defines the `Point` value type used for regression samples,
//! centroids and projections, and the `Planar` trait that lets the clusterer
//! accept arbitrary records carrying passthrough fields.
//!
//! ## Design notes
//!
//! * **Passthrough**: Clustering only reads `x()` and `y()`; every other field
//!   of a record is carried through to the output untouched.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Non-goals
//!
//! * This module does not parse dates or currency strings into coordinates.

use core::fmt;
use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point<T> {
    /// Horizontal coordinate (e.g. days since a reference date, total spend).
    pub x: T,

    /// Vertical coordinate (e.g. churn score, household number).
    pub y: T,
}

impl<T> Point<T> {
    /// Create a new point.
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Float> Point<T> {
    /// Whether both coordinates are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl<T> From<(T, T)> for Point<T> {
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

impl<T: fmt::Display> fmt::Display for Point<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Anything that can be placed in the plane for clustering.
///
/// Implement this for domain records (a household with its spend, age range
/// and loyalty flag) to cluster them directly and get the records back
/// grouped by cluster.
pub trait Planar<T> {
    /// Horizontal coordinate.
    fn x(&self) -> T;

    /// Vertical coordinate.
    fn y(&self) -> T;

    /// The coordinates as a `Point`.
    #[inline]
    fn position(&self) -> Point<T> {
        Point::new(self.x(), self.y())
    }
}

impl<T: Copy> Planar<T> for Point<T> {
    #[inline]
    fn x(&self) -> T {
        self.x
    }

    #[inline]
    fn y(&self) -> T {
        self.y
    }
}

impl<T: Copy> Planar<T> for (T, T) {
    #[inline]
    fn x(&self) -> T {
        self.0
    }

    #[inline]
    fn y(&self) -> T {
        self.1
    }
}

impl<T: Copy, P: Planar<T>> Planar<T> for &P {
    #[inline]
    fn x(&self) -> T {
        (*self).x()
    }

    #[inline]
    fn y(&self) -> T {
        (*self).y()
    }
}
