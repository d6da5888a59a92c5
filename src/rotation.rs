//! Euler-style rotation triple and wrapped-angle arithmetic.

use crate::constants::{DEFAULT_DISPLAY_PRECISION, TAU};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

/// Rotation in radians: `x` = pitch, `y` = yaw, `z` = roll.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rotation {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Rotation {
    /// The identity orientation
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0 };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Pitch (rotation about the lateral axis)
    pub fn pitch(&self) -> f64 {
        self.x
    }

    /// Yaw (rotation about the vertical axis)
    pub fn yaw(&self) -> f64 {
        self.y
    }

    /// Roll (rotation about the depth axis)
    pub fn roll(&self) -> f64 {
        self.z
    }

    /// Every axis wrapped into (-π, π]
    pub fn normalized(&self) -> Self {
        self.map(normalize_angle)
    }

    /// Apply `f` to each axis independently
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            x: f(self.x),
            y: f(self.y),
            z: f(self.z),
        }
    }

    /// True when every axis is within `epsilon` of `other`
    pub fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.x - other.x).abs() <= epsilon
            && (self.y - other.y).abs() <= epsilon
            && (self.z - other.z).abs() <= epsilon
    }

    /// True when no axis is NaN or infinite
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// The three angles converted to degrees, as `[pitch, yaw, roll]`
    pub fn to_degrees(&self) -> [f64; 3] {
        [self.x.to_degrees(), self.y.to_degrees(), self.z.to_degrees()]
    }
}

/// Formats as `x: 0.00000, y: 0.00000, z: 0.00000`.
///
/// The formatter precision overrides the default of five decimals, so
/// `format!("{rotation:.2}")` prints two.
impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(DEFAULT_DISPLAY_PRECISION);
        write!(
            f,
            "x: {:.*}, y: {:.*}, z: {:.*}",
            precision, self.x, precision, self.y, precision, self.z
        )
    }
}

/// Wrap an angle into (-π, π] by adding or subtracting full turns.
///
/// The result is congruent to the input modulo 2π. Non-finite input is
/// returned unchanged.
pub fn normalize_angle(angle: f64) -> f64 {
    if !angle.is_finite() {
        return angle;
    }

    // Reduce large magnitudes in one step, then settle with the loops.
    let mut wrapped = if angle.abs() > 4.0 * TAU { angle % TAU } else { angle };
    while wrapped > PI {
        wrapped -= TAU;
    }
    while wrapped <= -PI {
        wrapped += TAU;
    }
    wrapped
}

/// Shortest signed angular step from `current` to `target`, in (-π, π]
pub fn shortest_delta(current: f64, target: f64) -> f64 {
    normalize_angle(target - current)
}
