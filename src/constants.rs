//! Constants used throughout the library

use std::f64::consts::PI;

/// Forward-tilt added to the pitch estimate.
///
/// The nose tip sits below the eye line even on a level head; without this
/// offset a level head would read as tilted.
pub const PITCH_OFFSET: f64 = PI / 5.0;

/// Default one-pole smoothing factor applied per frame
pub const DEFAULT_SMOOTHING_FACTOR: f64 = 0.125;

/// Smoothing factor bounds, exclusive lower / inclusive upper
pub const SMOOTHING_FACTOR_MIN: f64 = 0.0;
pub const SMOOTHING_FACTOR_MAX: f64 = 1.0;

/// Full turn in radians
pub const TAU: f64 = 2.0 * PI;

/// Decimal places used when displaying a rotation
pub const DEFAULT_DISPLAY_PRECISION: usize = 5;

/// Upper bound accepted for the display precision
pub const MAX_DISPLAY_PRECISION: usize = 12;

/// Face-mesh landmark index of the nose tip
pub const FACE_MESH_NOSE_TIP: usize = 1;

/// Face-mesh landmark index of the left eye outer corner
pub const FACE_MESH_LEFT_EYE: usize = 33;

/// Face-mesh landmark index of the right eye outer corner
pub const FACE_MESH_RIGHT_EYE: usize = 263;

/// Number of landmarks produced by the face-mesh model
pub const FACE_MESH_LANDMARK_COUNT: usize = 468;

/// Default smoother name
pub const DEFAULT_SMOOTHER: &str = "wrapped_exponential";
