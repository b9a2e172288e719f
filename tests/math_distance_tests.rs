#![cfg(feature = "dev")]

use approx::assert_relative_eq;
use retail_analytics::internals::math::distance::{euclidean, nearest, squared_euclidean};
use retail_analytics::internals::primitives::point::Point;

// ============================================================================
// Euclidean Distance Tests
// ============================================================================

#[test]
fn test_squared_euclidean_distance() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(3.0, 4.0);
    assert_relative_eq!(squared_euclidean(a, b), 25.0);
    assert_relative_eq!(squared_euclidean(b, a), 25.0);
}

#[test]
fn test_euclidean_distance() {
    let a = Point::new(1.0, 2.0);
    let b = Point::new(4.0, 6.0);
    assert_relative_eq!(euclidean(a, b), 5.0);
}

#[test]
fn test_euclidean_distance_to_self_is_zero() {
    let a = Point::new(-7.5f32, 2.25);
    assert_eq!(euclidean(a, a), 0.0);
}

// ============================================================================
// Nearest Centroid Tests
// ============================================================================

#[test]
fn test_nearest_picks_closest_centroid() {
    let centroids = [
        Point::new(0.0, 0.0),
        Point::new(10.0, 10.0),
        Point::new(-10.0, 5.0),
    ];

    let (j, d) = nearest(Point::new(9.0, 8.0), &centroids).unwrap();
    assert_eq!(j, 1);
    assert_relative_eq!(d, 5.0);

    let (j, _) = nearest(Point::new(-6.0, 4.0), &centroids).unwrap();
    assert_eq!(j, 2);
}

#[test]
fn test_nearest_tie_goes_to_lowest_index() {
    // (0, 0) is equidistant from both centroids
    let centroids = [Point::new(-1.0, 0.0), Point::new(1.0, 0.0)];
    let (j, _) = nearest(Point::new(0.0, 0.0), &centroids).unwrap();
    assert_eq!(j, 0);

    // Duplicate centroids
    let centroids = [Point::new(2.0, 2.0), Point::new(2.0, 2.0)];
    let (j, _) = nearest(Point::new(5.0, 5.0), &centroids).unwrap();
    assert_eq!(j, 0);
}

#[test]
fn test_nearest_without_centroids() {
    let centroids: [Point<f64>; 0] = [];
    assert!(nearest(Point::new(1.0, 1.0), &centroids).is_none());
}
