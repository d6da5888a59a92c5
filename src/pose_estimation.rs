use crate::{
    constants::PITCH_OFFSET,
    landmarks::{FaceLandmarks, LandmarkIndices},
    rotation::Rotation,
    Error, Result,
};

/// Closed-form head pose estimator working from three facial landmarks.
///
/// The estimator is stateless: every call is a pure function of the face it
/// is given.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoseEstimator {
    indices: LandmarkIndices,
    pitch_offset: f64,
}

impl PoseEstimator {
    /// Create an estimator reading the given landmark indices
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Two landmark roles share an index
    /// - The pitch offset is not finite
    pub fn new(indices: LandmarkIndices, pitch_offset: f64) -> Result<Self> {
        indices.validate()?;
        if !pitch_offset.is_finite() {
            return Err(Error::InvalidInput(format!("Pitch offset must be finite, got {pitch_offset}")));
        }
        log::debug!(
            "Initializing PoseEstimator (nose_tip={}, left_eye={}, right_eye={}, pitch_offset={:.5})",
            indices.nose_tip,
            indices.left_eye,
            indices.right_eye,
            pitch_offset
        );
        Ok(Self { indices, pitch_offset })
    }

    pub fn indices(&self) -> LandmarkIndices {
        self.indices
    }

    pub fn pitch_offset(&self) -> f64 {
        self.pitch_offset
    }

    /// Estimate the raw head rotation of one face.
    ///
    /// An absent or empty face yields [`Rotation::ZERO`]. The returned angles
    /// are not wrapped and follow the renderer's sign convention (all three
    /// axes negated).
    ///
    /// # Errors
    ///
    /// Returns [`Error::LandmarkOutOfRange`] if a non-empty face lacks one of
    /// the three landmarks
    pub fn estimate<F>(&self, face: Option<&F>) -> Result<Rotation>
    where
        F: FaceLandmarks + ?Sized,
    {
        let Some(face) = face.filter(|f| !f.is_empty()) else {
            return Ok(Rotation::ZERO);
        };

        let left_eye = face.require(self.indices.left_eye)?.to_target_space();
        let right_eye = face.require(self.indices.right_eye)?.to_target_space();
        let nose_tip = face.require(self.indices.nose_tip)?.to_target_space();

        let eye_center = left_eye.midpoint(&right_eye);
        let d = nose_tip.displacement_from(&eye_center);

        let yaw = d.x.atan2(d.z);
        let roll = (right_eye.y - left_eye.y).atan2(right_eye.x - left_eye.x);
        let pitch = -d.y.atan2(d.z) + self.pitch_offset;

        Ok(Rotation {
            x: -pitch,
            y: -yaw,
            z: -roll,
        })
    }
}

impl Default for PoseEstimator {
    fn default() -> Self {
        Self {
            indices: LandmarkIndices::FACE_MESH,
            pitch_offset: PITCH_OFFSET,
        }
    }
}
