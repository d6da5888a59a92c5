use super::RotationSmoother;
use crate::constants::{DEFAULT_SMOOTHING_FACTOR, SMOOTHING_FACTOR_MAX, SMOOTHING_FACTOR_MIN};
use crate::rotation::{normalize_angle, shortest_delta, Rotation};
use crate::{Error, Result};

/// One-pole exponential smoother over wrapped angles.
///
/// Each axis moves `factor` of the shortest arc toward the target per update,
/// so crossing the ±π seam never swings the long way round. Axes are
/// smoothed as independent scalars, not as a rotation in SO(3), so extreme
/// poses can show gimbal-like coupling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleSmoother {
    factor: f64,
}

impl AngleSmoother {
    /// Create a smoother with the given per-update factor
    ///
    /// # Panics
    ///
    /// Panics if factor is not in the range (0, 1]
    #[must_use]
    pub fn new(factor: f64) -> Self {
        assert!(
            factor > SMOOTHING_FACTOR_MIN && factor <= SMOOTHING_FACTOR_MAX,
            "Smoothing factor must be in (0, 1]"
        );
        Self { factor }
    }

    /// Create a smoother, rejecting an out-of-range factor
    ///
    /// # Errors
    ///
    /// Returns an error if factor is not in the range (0, 1]
    pub fn try_new(factor: f64) -> Result<Self> {
        if factor > SMOOTHING_FACTOR_MIN && factor <= SMOOTHING_FACTOR_MAX {
            Ok(Self { factor })
        } else {
            Err(Error::SmootherError(format!(
                "Smoothing factor must be in (0, 1], got {factor}"
            )))
        }
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }

    /// Move one angle toward `target` by `factor` of the shortest arc.
    ///
    /// The result is wrapped into (-π, π].
    pub fn interpolate(&self, current: f64, target: f64) -> f64 {
        let delta = shortest_delta(current, normalize_angle(target));
        normalize_angle(self.factor.mul_add(delta, current))
    }
}

impl Default for AngleSmoother {
    fn default() -> Self {
        Self::new(DEFAULT_SMOOTHING_FACTOR)
    }
}

impl RotationSmoother for AngleSmoother {
    fn smooth(&self, current: &mut Rotation, target: Rotation) {
        current.x = self.interpolate(current.x, target.x);
        current.y = self.interpolate(current.y, target.y);
        current.z = self.interpolate(current.z, target.z);
    }

    fn name(&self) -> &str {
        "WrappedExponential"
    }
}
