//! Head orientation from facial landmarks, smoothed for real-time animation.
//!
//! The pipeline has two stages:
//! 1. [`pose_estimation::PoseEstimator`] turns three landmarks (both outer eye
//!    corners and the nose tip) into a raw pitch/yaw/roll estimate
//! 2. A [`filters::RotationSmoother`] blends each raw estimate into a
//!    persistent rotation using wrapped-angle exponential interpolation
//!
//! [`tracker::HeadTracker`] owns the persistent rotation and runs both stages
//! once per frame. Landmark detection, capture and rendering are left to the
//! caller.
//!
//! # Examples
//!
//! ## Estimating a single frame
//!
//! ```
//! use landmark_head_pose::{landmarks::Landmark, pose_estimation::PoseEstimator};
//! use std::collections::BTreeMap;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let face: BTreeMap<usize, Landmark> = BTreeMap::from([
//!     (33, Landmark::with_depth(-1.0, 0.0, 0.0)),
//!     (263, Landmark::with_depth(1.0, 0.0, 0.0)),
//!     (1, Landmark::with_depth(0.0, 0.0, 1.0)),
//! ]);
//!
//! let rotation = PoseEstimator::default().estimate(Some(&face))?;
//! println!("{rotation}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Tracking across frames
//!
//! ```
//! use landmark_head_pose::{
//!     landmarks::Landmark,
//!     rotation::Rotation,
//!     tracker::{HeadTracker, Orientable},
//! };
//!
//! struct Model {
//!     rotation: Rotation,
//! }
//!
//! impl Orientable for Model {
//!     fn set_rotation(&mut self, rotation: Rotation) {
//!         self.rotation = rotation;
//!     }
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut tracker = HeadTracker::default();
//! let mut model = Model { rotation: Rotation::ZERO };
//!
//! // No face detected this frame: the rotation eases toward zero
//! let pose = tracker.process::<[Landmark]>(None)?;
//! assert!(!pose.face_present);
//!
//! tracker.apply_to(&mut model);
//! println!("{}", model.rotation);
//! # Ok(())
//! # }
//! ```

/// Constants used throughout the library
pub mod constants;

/// Configuration management
pub mod config;

/// Error types and result handling
pub mod error;

/// Smoothing of rotation estimates
pub mod filters;

/// Recorded landmark frames
pub mod frames;

/// Facial landmark types and index tables
pub mod landmarks;

/// Closed-form head pose estimation from three landmarks
pub mod pose_estimation;

/// Rotation triple and wrapped-angle arithmetic
pub mod rotation;

/// Per-frame tracking of the smoothed rotation
pub mod tracker;

pub use error::{Error, Result};
pub use rotation::Rotation;
