#![cfg(feature = "dev")]

use approx::assert_relative_eq;
use retail_analytics::internals::evaluation::diagnostics::{Diagnostics, inertia};
use retail_analytics::internals::primitives::point::Point;

// ============================================================================
// Regression Diagnostics Tests
// ============================================================================

#[test]
fn test_diagnostics_perfect_fit() {
    let observed = [1.0, 2.0, 3.0, 4.0];
    let diag = Diagnostics::compute(&observed, &observed);

    assert_relative_eq!(diag.rmse, 0.0);
    assert_relative_eq!(diag.mae, 0.0);
    assert_relative_eq!(diag.r_squared, 1.0);
}

#[test]
fn test_diagnostics_known_residuals() {
    let observed = [1.0, 2.0, 3.0, 4.0];
    let fitted = [1.5, 1.5, 3.5, 3.5];
    let diag = Diagnostics::compute(&observed, &fitted);

    // Residuals are all ±0.5
    assert_relative_eq!(diag.rmse, 0.5, epsilon = 1e-12);
    assert_relative_eq!(diag.mae, 0.5, epsilon = 1e-12);

    // ss_res = 1.0, ss_tot = 5.0
    assert_relative_eq!(diag.r_squared, 0.8, epsilon = 1e-12);
}

#[test]
fn test_diagnostics_constant_observations() {
    let observed = [2.0, 2.0, 2.0];

    let exact = Diagnostics::compute(&observed, &[2.0, 2.0, 2.0]);
    assert_relative_eq!(exact.r_squared, 1.0);

    let off = Diagnostics::compute(&observed, &[1.0, 2.0, 3.0]);
    assert_relative_eq!(off.r_squared, 0.0);
}

#[test]
fn test_diagnostics_display() {
    let diag = Diagnostics::compute(&[1.0, 2.0], &[1.0, 2.0]);
    let text = format!("{}", diag);
    assert!(text.contains("RMSE: 0.000000"));
    assert!(text.contains("R^2:  1.000000"));
}

// ============================================================================
// Inertia Tests
// ============================================================================

#[test]
fn test_inertia_sums_squared_distances() {
    let points = [
        Point::new(0.0, 0.0),
        Point::new(2.0, 0.0),
        Point::new(10.0, 10.0),
    ];
    let centroids = [Point::new(1.0, 0.0), Point::new(10.0, 12.0)];
    let labels = [0, 0, 1];

    // 1 + 1 + 4
    assert_relative_eq!(inertia(&points, &labels, &centroids), 6.0);
}

#[test]
fn test_inertia_zero_when_points_are_centroids() {
    let points = [Point::new(1.0, 1.0), Point::new(5.0, 5.0)];
    assert_relative_eq!(inertia(&points, &[0, 1], &points), 0.0);
}
