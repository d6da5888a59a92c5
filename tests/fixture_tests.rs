//! Regression fixtures for estimation and smoothing


use landmark_head_pose::{
    filters::{AngleSmoother, RotationSmoother},
    landmarks::Landmark,
    pose_estimation::PoseEstimator,
    rotation::{normalize_angle, Rotation},
};
use std::f64::consts::PI;
use test_helpers::{assert_rotation_close, dense_face, turned_face};

#[test]
fn test_zero_input() {
    let estimator = PoseEstimator::default();
    assert_eq!(estimator.estimate::<[Landmark]>(None).unwrap(), Rotation::ZERO);
    let empty: &[Landmark] = &[];
    assert_eq!(estimator.estimate(Some(empty)).unwrap(), Rotation::ZERO);
}

#[test]
fn test_symmetry_fixture() {
    let face = dense_face(
        Landmark::with_depth(1.0, 0.0, 0.0),
        Landmark::with_depth(-1.0, 0.0, 0.0),
        Landmark::with_depth(0.0, 1.0, -1.0),
    );
    let rotation = PoseEstimator::default().estimate(Some(&face)).unwrap();

    // dx = 0, dy = -1, dz = -1 in the y-up frame
    let pitch = -(-1.0f64).atan2(-1.0) + PI / 5.0;
    assert_rotation_close(&rotation, &Rotation::new(-pitch, -PI, -PI), 1e-12);
    assert!((rotation.x + 2.984_513_020_910_303).abs() < 1e-9);
}

#[test]
fn test_one_step_smoothing_fixture() {
    let smoother = AngleSmoother::new(0.125);
    let mut current = Rotation::ZERO;
    smoother.smooth(&mut current, Rotation::new(0.0, 0.0, 0.8));
    assert!((current.z - 0.1).abs() < 1e-9);
    assert_eq!(current.x, 0.0);
    assert_eq!(current.y, 0.0);
}

#[test]
fn test_shortest_path_wrap() {
    let smoother = AngleSmoother::default();
    let mut current = Rotation::new(3.0, 0.0, 0.0);
    smoother.smooth(&mut current, Rotation::new(-3.0, 0.0, 0.0));

    // The short arc from 3.0 to -3.0 runs upward through π
    assert!(current.x > 3.0, "moved the long way: {}", current.x);
    let expected = 3.0 + (2.0 * PI - 6.0) * 0.125;
    assert!((current.x - expected).abs() < 1e-12);
}

#[test]
fn test_idempotence_at_target() {
    let smoother = AngleSmoother::default();
    let target = Rotation::new(-2.0, 0.7, PI);
    let mut current = target.normalized();
    smoother.smooth(&mut current, target);
    assert_eq!(current, target.normalized());
}

#[test]
fn test_turned_head_yaw() {
    let estimator = PoseEstimator::default();
    for &yaw in &[-1.2, -0.5, 0.0, 0.3, 1.0] {
        let rotation = estimator.estimate(Some(&turned_face(yaw))).unwrap();
        assert!((rotation.y + yaw).abs() < 1e-12, "yaw {yaw} estimated as {}", -rotation.y);
        assert!(rotation.z.abs() < 1e-12);
        assert!((rotation.x + PI / 5.0).abs() < 1e-12);
    }
}

#[test]
fn test_tilted_eye_line_roll() {
    // Right eye higher on screen (smaller image y) than the left eye
    let face = dense_face(
        Landmark::with_depth(-1.0, 0.5, 0.0),
        Landmark::with_depth(1.0, -0.5, 0.0),
        Landmark::with_depth(0.0, 0.0, 1.0),
    );
    let rotation = PoseEstimator::default().estimate(Some(&face)).unwrap();
    assert!((rotation.z + (1.0f64).atan2(2.0)).abs() < 1e-12);
    assert!(normalize_angle(rotation.z) < 0.0);
}
