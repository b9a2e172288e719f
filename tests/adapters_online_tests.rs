#![cfg(feature = "dev")]
//! Tests for the Online adapter.
//!
//! The Online adapter fits the churn trend incrementally as samples arrive,
//! optionally over a sliding window of the most recent samples.
//!
//! ## Test Organization
//!
//! 1. **Basic Functionality** - Incremental fitting of exact lines
//! 2. **Window Management** - Capacity, eviction and sliding window behavior
//! 3. **Lifecycle Management** - Reset and reuse
//! 4. **Builder Validation** - Parameter validation and error handling
//! 5. **Update Mode** - Incremental vs Full mode comparison
//! 6. **Numerical Stability** - Eviction residue, overflow and batch agreement

use approx::assert_relative_eq;
use retail_analytics::prelude::*;

use retail_analytics::internals::algorithms::regression::RegressionFit;

fn feed(model: &mut OnlineRegression<f64>, samples: &[(f64, f64)]) -> Vec<Option<OnlineOutput<f64>>> {
    samples
        .iter()
        .map(|&(x, y)| model.add_point(x, y).expect("add_point should succeed"))
        .collect()
}

// ============================================================================
// Basic Functionality Tests
// ============================================================================

/// Test that online fitting reproduces an exact line once two samples exist.
#[test]
fn test_online_exact_linear_reproduction() {
    let mut model = Regression::new()
        .adapter(Online)
        .build()
        .expect("Builder should succeed");

    let outputs = feed(&mut model, &[(0.0, 1.0), (1.0, 3.0), (2.0, 5.0), (3.0, 7.0)]);

    assert!(outputs[0].is_none(), "A single sample cannot define a line");
    for output in outputs.iter().skip(1) {
        let output = output.expect("Fit should exist after two samples");
        assert_relative_eq!(output.fit.slope, 2.0, epsilon = 1e-12);
        assert_relative_eq!(output.fit.intercept, 1.0, epsilon = 1e-12);
        assert_relative_eq!(output.residual, 0.0, epsilon = 1e-12);
    }

    let last = outputs[3].unwrap();
    assert_relative_eq!(last.fitted, 7.0, epsilon = 1e-12);
    assert_eq!(last.fit.n, 4);
}

/// Test that the projection runs from the newest sample over the horizon.
#[test]
fn test_online_projection() {
    let mut model = Regression::new()
        .horizon(10.0)
        .adapter(Online)
        .build()
        .unwrap();

    let outputs = feed(&mut model, &[(0.0, 0.0), (1.0, 1.0)]);
    let projection = outputs[1].unwrap().projection;

    assert_relative_eq!(projection.start.x, 1.0);
    assert_relative_eq!(projection.end.x, 11.0);
    assert_relative_eq!(projection.end.y, 11.0, epsilon = 1e-12);
}

/// Test that identical x values yield no fit rather than an error.
#[test]
fn test_online_identical_x_has_no_fit() {
    let mut model = Regression::new().adapter(Online).build().unwrap();

    let outputs = feed(&mut model, &[(5.0, 1.0), (5.0, 2.0), (5.0, 3.0)]);
    assert!(outputs.iter().all(|o| o.is_none()));
    assert!(model.current_fit().is_none());

    let update = model.add_point(6.0, 4.0).unwrap();
    assert!(update.is_some());
}

// ============================================================================
// Window Management Tests
// ============================================================================

/// Test that the fit only covers the most recent samples.
#[test]
fn test_online_sliding_window() {
    let mut model = Regression::new()
        .window_capacity(3)
        .adapter(Online)
        .build()
        .unwrap();

    // Regime change: y = x, then y = 10x
    let outputs = feed(
        &mut model,
        &[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (3.0, 30.0), (4.0, 40.0), (5.0, 50.0)],
    );

    assert_eq!(model.window_size(), 3);
    let last = outputs[5].unwrap();
    assert_relative_eq!(last.fit.slope, 10.0, epsilon = 1e-9);
    assert_relative_eq!(last.fit.intercept, 0.0, epsilon = 1e-9);
    assert_eq!(last.fit.n, 3);
    assert_eq!(last.fit.x_min, 3.0);
    assert_eq!(last.fit.x_max, 5.0);
}

/// Test that the window never exceeds its capacity.
#[test]
fn test_online_window_size_bounded() {
    let mut model = Regression::new()
        .window_capacity(4)
        .adapter(Online)
        .build()
        .unwrap();

    for i in 0..20 {
        let x = i as f64;
        model.add_point(x, 0.5 * x).unwrap();
        assert!(model.window_size() <= 4);
    }
    assert_eq!(model.window_size(), 4);
}

/// Test that an unbounded model keeps every sample.
#[test]
fn test_online_unbounded_window() {
    let mut model = Regression::new().adapter(Online).build().unwrap();
    for i in 0..50 {
        model.add_point(i as f64, 1.0).unwrap();
    }
    assert_eq!(model.window_size(), 50);
}

// ============================================================================
// Lifecycle Management Tests
// ============================================================================

#[test]
fn test_online_reset() {
    let mut model = Regression::new()
        .window_capacity(5)
        .adapter(Online)
        .build()
        .unwrap();

    feed(&mut model, &[(0.0, 0.0), (1.0, 2.0), (2.0, 4.0)]);
    assert!(model.current_fit().is_some());

    model.reset();
    assert_eq!(model.window_size(), 0);
    assert!(model.current_fit().is_none());

    // Reuse after reset starts from scratch
    let outputs = feed(&mut model, &[(10.0, 1.0), (11.0, 0.0)]);
    assert!(outputs[0].is_none());
    assert_relative_eq!(outputs[1].unwrap().fit.slope, -1.0, epsilon = 1e-12);
}

/// Test that a rejected sample leaves the state untouched.
#[test]
fn test_online_rejects_non_finite() {
    let mut model = Regression::new().adapter(Online).build().unwrap();
    feed(&mut model, &[(0.0, 0.0), (1.0, 1.0)]);
    let before = model.current_fit();

    let err = model.add_point(2.0, f64::NAN).unwrap_err();
    assert!(matches!(err, AnalyticsError::InvalidNumericValue(_)));
    assert!(model.add_point(f64::INFINITY, 2.0).is_err());

    assert_eq!(model.window_size(), 2);
    assert_eq!(model.current_fit(), before);
}

// ============================================================================
// Builder Validation Tests
// ============================================================================

#[test]
fn test_online_invalid_window_capacity() {
    let result = Regression::<f64>::new()
        .window_capacity(1)
        .adapter(Online)
        .build();
    assert_eq!(
        result.unwrap_err(),
        AnalyticsError::InvalidWindowCapacity { got: 1, min: 2 }
    );
}

#[test]
fn test_online_invalid_horizon() {
    let result = Regression::new()
        .horizon(f64::INFINITY)
        .adapter(Online)
        .build();
    assert!(matches!(
        result.unwrap_err(),
        AnalyticsError::InvalidHorizon(_)
    ));
}

#[test]
fn test_online_duplicate_parameter() {
    let result = Regression::<f64>::new()
        .window_capacity(5)
        .window_capacity(10)
        .adapter(Online)
        .build();
    assert_eq!(
        result.unwrap_err(),
        AnalyticsError::DuplicateParameter {
            parameter: "window_capacity"
        }
    );
}

// ============================================================================
// Update Mode Tests
// ============================================================================

/// Test that both update modes agree on exactly representable data.
#[test]
fn test_online_update_modes_agree() {
    let samples: Vec<(f64, f64)> = (0..12)
        .map(|i| {
            let x = i as f64;
            (x, if i % 2 == 0 { 3.0 * x } else { 3.0 * x + 2.0 })
        })
        .collect();

    let mut incremental = Regression::new()
        .window_capacity(5)
        .update_mode(Incremental)
        .adapter(Online)
        .build()
        .unwrap();
    let mut full = Regression::new()
        .window_capacity(5)
        .update_mode(Full)
        .adapter(Online)
        .build()
        .unwrap();

    let a = feed(&mut incremental, &samples);
    let b = feed(&mut full, &samples);

    for (oa, ob) in a.iter().zip(b.iter()) {
        match (oa, ob) {
            (Some(oa), Some(ob)) => {
                assert_relative_eq!(oa.fit.slope, ob.fit.slope, epsilon = 1e-9);
                assert_relative_eq!(oa.fit.intercept, ob.fit.intercept, epsilon = 1e-9);
            }
            (None, None) => {}
            _ => panic!("Update modes disagree on whether a fit exists"),
        }
    }
}

// ============================================================================
// Numerical Stability Tests
// ============================================================================

/// Test that evicting a far sample cannot leave a line through identical x.
#[test]
fn test_online_identical_x_after_large_eviction() {
    let mut model = Regression::new()
        .window_capacity(2)
        .adapter(Online)
        .build()
        .unwrap();

    let outputs = feed(&mut model, &[(0.0, 0.0), (1.0e8, 5.0), (3.0, 1.0), (3.0, 2.0)]);

    assert!(outputs[3].is_none(), "Window [(3, 1), (3, 2)] has no x variance");
    assert!(model.current_fit().is_none());
    assert_eq!(
        RegressionFit::fit(&[Point::new(3.0, 1.0), Point::new(3.0, 2.0)]),
        Err(AnalyticsError::ZeroVariance)
    );

    // The window recovers as soon as x varies again
    let next = model.add_point(4.0, 3.0).unwrap().unwrap();
    assert_relative_eq!(next.fit.slope, 1.0, epsilon = 1e-12);
    assert_relative_eq!(next.fit.intercept, -1.0, epsilon = 1e-12);
}

/// Test that the incremental fit matches a batch fit of the same window.
#[test]
fn test_online_matches_batch_after_large_eviction() {
    let mut model = Regression::new()
        .window_capacity(3)
        .adapter(Online)
        .build()
        .unwrap();

    let outputs = feed(&mut model, &[(1.0e8, 0.0), (1.0, 1.0), (2.0, 3.0), (3.0, 5.0)]);
    let online = outputs[3].unwrap().fit;
    let batch = RegressionFit::fit(&[
        Point::new(1.0, 1.0),
        Point::new(2.0, 3.0),
        Point::new(3.0, 5.0),
    ])
    .unwrap();

    assert_relative_eq!(online.slope, batch.slope, epsilon = 1e-9);
    assert_relative_eq!(online.intercept, batch.intercept, epsilon = 1e-9);
    assert_relative_eq!(online.slope, 2.0, epsilon = 1e-9);
    assert_relative_eq!(online.intercept, -1.0, epsilon = 1e-9);
}

/// Test that a sample whose square overflows is rejected up front.
#[test]
fn test_online_rejects_overflowing_sample() {
    let mut model = Regression::new()
        .window_capacity(2)
        .adapter(Online)
        .build()
        .unwrap();

    let err = model.add_point(1.0e200, 0.0).unwrap_err();
    assert!(matches!(err, AnalyticsError::InvalidNumericValue(_)));
    assert_eq!(model.window_size(), 0);

    // Later samples on y = 2x still fit
    let samples: Vec<(f64, f64)> = (0..4).map(|i| (i as f64, 2.0 * i as f64)).collect();
    let outputs = feed(&mut model, &samples);

    assert!(outputs[0].is_none());
    for output in outputs.iter().skip(1) {
        let output = output.expect("Fit should exist after two samples");
        assert_relative_eq!(output.fit.slope, 2.0, epsilon = 1e-12);
        assert_relative_eq!(output.fit.intercept, 0.0, epsilon = 1e-12);
    }
}

/// Test that two samples whose spread overflows the sums are not both kept.
#[test]
fn test_online_rejects_sample_overflowing_spread() {
    let mut model = Regression::new().adapter(Online).build().unwrap();

    assert!(model.add_point(1.0e154, 0.0).unwrap().is_none());
    let err = model.add_point(-1.0e154, 1.0).unwrap_err();
    assert!(matches!(err, AnalyticsError::InvalidNumericValue(_)));
    assert_eq!(model.window_size(), 1);

    let update = model.add_point(1.0e154 + 1.0e140, 2.0).unwrap();
    assert!(update.is_some());
}

/// Test that a long stream of day numbers keeps an accurate window fit.
#[test]
fn test_online_long_stream_of_days() {
    let mut model = Regression::new()
        .window_capacity(7)
        .adapter(Online)
        .build()
        .unwrap();

    let mut last = None;
    for day in 0..2000 {
        let x = 19_000.0 + day as f64;
        last = model.add_point(x, 0.25 * x + 3.0).unwrap();
    }
    let fit = last.unwrap().fit;

    assert_eq!(fit.n, 7);
    assert_relative_eq!(fit.slope, 0.25, epsilon = 1e-9);
    assert_relative_eq!(fit.predict(20_999.0), 0.25 * 20_999.0 + 3.0, epsilon = 1e-6);
}
