//! Recorded landmark frames, as read by the command-line driver.
//!
//! A recording is a YAML document with a `frames` list. Each entry is one
//! frame: `null` (no face detected), a dense list of landmarks, or a map of
//! landmark index to landmark.
//!
//! ```yaml
//! frames:
//!   - null
//!   - {1: {x: 0.5, y: 0.6, z: -0.1}, 33: {x: 0.4, y: 0.4}, 263: {x: 0.6, y: 0.4}}
//! ```

use crate::landmarks::{FaceLandmarks, Landmark};
use crate::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Landmarks of one recorded face
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FaceFrame {
    /// Full landmark model output, indexed by position
    Dense(Vec<Landmark>),
    /// Only the landmarks that were kept, keyed by index
    Sparse(BTreeMap<usize, Landmark>),
}

impl FaceLandmarks for FaceFrame {
    fn landmark(&self, index: usize) -> Option<&Landmark> {
        match self {
            Self::Dense(points) => points.get(index),
            Self::Sparse(points) => points.get(&index),
        }
    }

    fn len(&self) -> usize {
        match self {
            Self::Dense(points) => points.len(),
            Self::Sparse(points) => points.len(),
        }
    }
}

/// A sequence of frames; `None` marks a frame without a detected face
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recording {
    pub frames: Vec<Option<FaceFrame>>,
}

impl Recording {
    /// Load a recording from a YAML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        log::info!("Loading landmark recording from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        let recording = Self::from_yaml_str(&content)?;
        log::debug!("Loaded {} frames", recording.frames.len());
        Ok(recording)
    }

    /// Parse a recording from YAML text
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid recording
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }
}
