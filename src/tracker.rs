//! Per-frame head tracking: estimation, smoothing and the persistent
//! smoothed rotation, wired together for a host frame loop.

use crate::{
    config::Config,
    filters::{AngleSmoother, RotationSmoother},
    landmarks::FaceLandmarks,
    pose_estimation::PoseEstimator,
    rotation::Rotation,
    Result,
};
use log::{debug, trace, warn};

/// An external object whose orientation is driven by the tracker
/// (typically a scene-graph node owned by a renderer).
pub trait Orientable {
    /// Replace the object's orientation
    fn set_rotation(&mut self, rotation: Rotation);
}

impl Orientable for Rotation {
    fn set_rotation(&mut self, rotation: Rotation) {
        *self = rotation;
    }
}

/// Result of processing one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackedPose {
    /// Unsmoothed estimate for this frame
    pub raw: Rotation,
    /// Smoothed rotation after this frame's update
    pub smoothed: Rotation,
    /// Whether the frame carried a face
    pub face_present: bool,
}

/// Owns the smoothed rotation of one animated object.
///
/// The rotation is private and changes only through [`HeadTracker::process`]
/// or an explicit [`HeadTracker::reinitialize`].
pub struct HeadTracker {
    estimator: PoseEstimator,
    smoother: Box<dyn RotationSmoother>,
    rotation: Rotation,
    frame_count: u64,
    face_visible: bool,
}

impl HeadTracker {
    /// Create a tracker starting from `initial`
    pub fn new(estimator: PoseEstimator, smoother: Box<dyn RotationSmoother>, initial: Rotation) -> Self {
        debug!(
            "Initializing HeadTracker with smoother {} from {}",
            smoother.name(),
            initial
        );
        Self {
            estimator,
            smoother,
            rotation: initial.normalized(),
            frame_count: 0,
            face_visible: false,
        }
    }

    /// Build a tracker from configuration, starting at [`Rotation::ZERO`]
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        let estimator = PoseEstimator::new(config.landmarks, config.estimator.pitch_offset)?;
        let smoother = config.create_smoother()?;
        Ok(Self::new(estimator, smoother, Rotation::ZERO))
    }

    /// Process one frame's face (or its absence) and update the smoothed
    /// rotation.
    ///
    /// A frame without a face is smoothed toward the zero rotation.
    ///
    /// # Errors
    ///
    /// Returns an error if a non-empty face lacks a required landmark; the
    /// smoothed rotation is left untouched in that case
    pub fn process<F>(&mut self, face: Option<&F>) -> Result<TrackedPose>
    where
        F: FaceLandmarks + ?Sized,
    {
        let raw = self.estimator.estimate(face)?;
        let face_present = face.is_some_and(|f| !f.is_empty());
        if self.face_visible && !face_present {
            warn!("Face lost at frame {}", self.frame_count);
        } else if !self.face_visible && face_present {
            debug!("Face acquired at frame {}", self.frame_count);
        }
        self.face_visible = face_present;

        self.smoother.smooth(&mut self.rotation, raw);
        trace!("frame {}: raw [{}] smoothed [{}]", self.frame_count, raw, self.rotation);
        self.frame_count += 1;

        Ok(TrackedPose {
            raw,
            smoothed: self.rotation,
            face_present,
        })
    }

    /// Current smoothed rotation
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Number of frames processed since construction or the last reload
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn smoother_name(&self) -> &str {
        self.smoother.name()
    }

    /// Reset the smoothed state, e.g. after the animated object is reloaded
    pub fn reinitialize(&mut self, rotation: Rotation) {
        debug!("Reinitializing HeadTracker at {}", rotation);
        self.rotation = rotation.normalized();
        self.frame_count = 0;
        self.face_visible = false;
    }

    /// Write the smoothed rotation into an external object
    pub fn apply_to(&self, target: &mut dyn Orientable) {
        target.set_rotation(self.rotation);
    }
}

impl Default for HeadTracker {
    fn default() -> Self {
        Self::new(PoseEstimator::default(), Box::new(AngleSmoother::default()), Rotation::ZERO)
    }
}
