//! Tests for smoother parameter validation

use landmark_head_pose::filters::{create_smoother, AngleSmoother};

#[test]
#[should_panic(expected = "Smoothing factor must be in (0, 1]")]
fn test_angle_smoother_zero_factor() {
    let _ = AngleSmoother::new(0.0);
}

#[test]
#[should_panic(expected = "Smoothing factor must be in (0, 1]")]
fn test_angle_smoother_too_large_factor() {
    let _ = AngleSmoother::new(1.5);
}

#[test]
#[should_panic(expected = "Smoothing factor must be in (0, 1]")]
fn test_angle_smoother_nan_factor() {
    let _ = AngleSmoother::new(f64::NAN);
}

#[test]
fn test_create_smoother_validation() {
    assert!(create_smoother("exponential:0").is_err());
    assert!(create_smoother("exponential:1.5").is_err());
    assert!(create_smoother("exponential:-0.1").is_err());
    assert!(create_smoother("wrapped_exponential:NaN").is_err());
    assert!(create_smoother("kalman").is_err());
    assert!(create_smoother("").is_err());

    assert!(create_smoother("exponential:1").is_ok());
    assert!(create_smoother("wrapped_exponential:0.125").is_ok());
    assert!(create_smoother("none").is_ok());
}

#[test]
fn test_default_factor() {
    assert_eq!(AngleSmoother::default().factor(), 0.125);
}
