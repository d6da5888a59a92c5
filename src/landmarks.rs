//! Facial landmark types and the index table used to pick points out of a face.

use crate::constants::{FACE_MESH_LEFT_EYE, FACE_MESH_NOSE_TIP, FACE_MESH_RIGHT_EYE};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A 2D or 3D point locating an anatomical facial feature, in image space
/// (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Landmark {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate, growing downward
    pub y: f64,
    /// Depth, absent for 2D landmark models
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
}

impl Landmark {
    /// Create a 2D landmark
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, z: None }
    }

    /// Create a 3D landmark
    pub fn with_depth(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z: Some(z) }
    }

    /// Convert to the target space: y flipped to grow upward, missing depth as 0.
    pub fn to_target_space(&self) -> Point3 {
        Point3 {
            x: self.x,
            y: -self.y,
            z: self.z.unwrap_or(0.0),
        }
    }
}

/// A point in the target (y-up) coordinate frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    /// Per-axis mean of two points
    pub fn midpoint(&self, other: &Self) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
            z: (self.z + other.z) / 2.0,
        }
    }

    /// Per-axis displacement `self - origin`
    pub fn displacement_from(&self, origin: &Self) -> Self {
        Self {
            x: self.x - origin.x,
            y: self.y - origin.y,
            z: self.z - origin.z,
        }
    }
}

/// Read access to the landmarks of one detected face.
///
/// Implemented for dense slices (the landmark model's full output) and for
/// sparse maps keyed by landmark index.
pub trait FaceLandmarks {
    /// Landmark at `index`, if present
    fn landmark(&self, index: usize) -> Option<&Landmark>;

    /// Number of landmarks carried by the face
    fn len(&self) -> usize;

    /// True when no landmarks were detected
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Landmark at `index`, or [`Error::LandmarkOutOfRange`]
    ///
    /// # Errors
    ///
    /// Returns an error if the face has no landmark at `index`
    fn require(&self, index: usize) -> Result<&Landmark> {
        self.landmark(index).ok_or(Error::LandmarkOutOfRange {
            index,
            len: self.len(),
        })
    }
}

impl FaceLandmarks for [Landmark] {
    fn landmark(&self, index: usize) -> Option<&Landmark> {
        self.get(index)
    }

    fn len(&self) -> usize {
        <[Landmark]>::len(self)
    }
}

impl FaceLandmarks for Vec<Landmark> {
    fn landmark(&self, index: usize) -> Option<&Landmark> {
        self.get(index)
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}

impl FaceLandmarks for BTreeMap<usize, Landmark> {
    fn landmark(&self, index: usize) -> Option<&Landmark> {
        self.get(&index)
    }

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }
}

/// Landmark indices the pose estimator reads from a face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LandmarkIndices {
    /// Nose tip
    pub nose_tip: usize,
    /// Left eye outer corner
    pub left_eye: usize,
    /// Right eye outer corner
    pub right_eye: usize,
}

impl LandmarkIndices {
    /// MediaPipe face-mesh numbering
    pub const FACE_MESH: Self = Self {
        nose_tip: FACE_MESH_NOSE_TIP,
        left_eye: FACE_MESH_LEFT_EYE,
        right_eye: FACE_MESH_RIGHT_EYE,
    };

    /// Check that the three indices name distinct landmarks
    ///
    /// # Errors
    ///
    /// Returns an error if two roles share an index
    pub fn validate(&self) -> Result<()> {
        if self.nose_tip == self.left_eye || self.nose_tip == self.right_eye || self.left_eye == self.right_eye {
            return Err(Error::InvalidInput(format!(
                "Landmark indices must be distinct (nose_tip={}, left_eye={}, right_eye={})",
                self.nose_tip, self.left_eye, self.right_eye
            )));
        }
        Ok(())
    }

    /// Largest index referenced, i.e. the minimum dense face length minus one
    pub fn max_index(&self) -> usize {
        self.nose_tip.max(self.left_eye).max(self.right_eye)
    }
}

impl Default for LandmarkIndices {
    fn default() -> Self {
        Self::FACE_MESH
    }
}
