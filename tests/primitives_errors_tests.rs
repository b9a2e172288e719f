#![cfg(feature = "dev")]

use retail_analytics::internals::primitives::errors::AnalyticsError;

#[test]
fn test_analytics_error_display() {
    // EmptyInput
    let err = AnalyticsError::EmptyInput;
    assert_eq!(format!("{}", err), "Input is empty");

    // MismatchedInputs
    let err = AnalyticsError::MismatchedInputs {
        x_len: 10,
        y_len: 5,
    };
    assert_eq!(
        format!("{}", err),
        "Length mismatch: x has 10 points, y has 5"
    );

    // InvalidNumericValue
    let err = AnalyticsError::InvalidNumericValue("x[2]=NaN".to_string());
    assert_eq!(format!("{}", err), "Invalid numeric value: x[2]=NaN");

    // TooFewPoints
    let err = AnalyticsError::TooFewPoints { got: 1, min: 2 };
    assert_eq!(format!("{}", err), "Too few points: got 1, need at least 2");

    // ZeroVariance
    let err = AnalyticsError::ZeroVariance;
    assert_eq!(
        format!("{}", err),
        "Cannot fit: x values have zero variance (all x are identical)"
    );

    // InvalidClusterCount
    let err = AnalyticsError::InvalidClusterCount(0);
    assert_eq!(
        format!("{}", err),
        "Invalid cluster count: 0 (must be at least 1)"
    );

    // InvalidTolerance
    let err = AnalyticsError::InvalidTolerance(-1.0);
    assert_eq!(
        format!("{}", err),
        "Invalid tolerance: -1 (must be >= 0 and finite)"
    );

    // InvalidIterations
    let err = AnalyticsError::InvalidIterations(0);
    assert_eq!(
        format!("{}", err),
        "Invalid max_iterations: 0 (must be in [1, 100000])"
    );

    // InvalidRestarts
    let err = AnalyticsError::InvalidRestarts(0);
    assert_eq!(
        format!("{}", err),
        "Invalid restarts: 0 (must be at least 1)"
    );

    // InvalidHorizon
    let err = AnalyticsError::InvalidHorizon(f64::INFINITY);
    assert_eq!(
        format!("{}", err),
        "Invalid horizon: inf (must be finite)"
    );

    // InvalidPercentile
    let err = AnalyticsError::InvalidPercentile(1.5);
    assert_eq!(
        format!("{}", err),
        "Invalid percentile: 1.5 (must be in [0, 1])"
    );

    // InvalidWindowCapacity
    let err = AnalyticsError::InvalidWindowCapacity { got: 1, min: 2 };
    assert_eq!(
        format!("{}", err),
        "Invalid window_capacity: 1 (must be at least 2)"
    );

    // DuplicateParameter
    let err = AnalyticsError::DuplicateParameter { parameter: "clusters" };
    assert_eq!(
        format!("{}", err),
        "Parameter 'clusters' was set multiple times. Each parameter can only be configured once."
    );
}

#[test]
fn test_analytics_error_properties() {
    let err1 = AnalyticsError::EmptyInput;
    let err2 = err1.clone();
    assert_eq!(err1, err2);
    assert_ne!(err1, AnalyticsError::ZeroVariance);
    assert_ne!(
        AnalyticsError::TooFewPoints { got: 1, min: 2 },
        AnalyticsError::TooFewPoints { got: 2, min: 3 }
    );
}

#[cfg(feature = "std")]
#[test]
fn test_analytics_error_is_std_error() {
    fn assert_error<T: std::error::Error>() {}
    assert_error::<AnalyticsError>();
}
