//! Configuration management for head pose tracking

use crate::constants::{
    DEFAULT_DISPLAY_PRECISION, DEFAULT_SMOOTHER, DEFAULT_SMOOTHING_FACTOR, MAX_DISPLAY_PRECISION, PITCH_OFFSET,
};
use crate::filters::{create_smoother_with_factor, parse_smoother_kind, AngleSmoother, RotationSmoother};
use crate::landmarks::LandmarkIndices;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tracking configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Landmark indices read from each face
    pub landmarks: LandmarkIndices,

    /// Pose estimator configuration
    pub estimator: EstimatorConfig,

    /// Smoothing configuration
    pub smoothing: SmoothingConfig,

    /// Display configuration
    pub display: DisplayConfig,
}

/// Pose estimator parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    /// Forward-tilt offset added to pitch, in radians
    pub pitch_offset: f64,
}

/// Smoothing parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmoothingConfig {
    /// Smoother type (`wrapped_exponential` or `none`)
    pub smoother: String,

    /// Per-frame smoothing factor in (0, 1]
    pub factor: f64,
}

/// Display configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Decimal places per axis
    pub precision: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            landmarks: LandmarkIndices::FACE_MESH,
            estimator: EstimatorConfig::default(),
            smoothing: SmoothingConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            pitch_offset: PITCH_OFFSET,
        }
    }
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            smoother: DEFAULT_SMOOTHER.to_string(),
            factor: DEFAULT_SMOOTHING_FACTOR,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_DISPLAY_PRECISION,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        log::info!("Loading configuration from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Parse configuration from YAML text; missing fields take defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid configuration YAML
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))
    }

    /// Save configuration to a YAML file
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Create the configured smoother.
    ///
    /// `smoothing.factor` applies unless the smoother description carries its
    /// own `:factor`; giving both with different values is an error.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown smoother type, an invalid factor, or a
    /// factor set in both places
    pub fn create_smoother(&self) -> Result<Box<dyn RotationSmoother>> {
        let kind = parse_smoother_kind(&self.smoothing.smoother)?;
        if let Some(param) = kind.factor {
            let factor = self.smoothing.factor;
            if (factor - DEFAULT_SMOOTHING_FACTOR).abs() > f64::EPSILON && (param - factor).abs() > f64::EPSILON {
                return Err(Error::ConfigError(format!(
                    "Smoothing factor given twice: '{}' and factor {factor}",
                    self.smoothing.smoother
                )));
            }
        }
        create_smoother_with_factor(&self.smoothing.smoother, self.smoothing.factor)
    }

    /// Validate configuration
    ///
    /// # Errors
    ///
    /// Returns the first invalid setting found
    pub fn validate(&self) -> Result<()> {
        self.landmarks
            .validate()
            .map_err(|e| Error::ConfigError(format!("Invalid landmark indices: {e}")))?;

        if !self.estimator.pitch_offset.is_finite() {
            return Err(Error::ConfigError("Pitch offset must be finite".to_string()));
        }

        AngleSmoother::try_new(self.smoothing.factor)
            .map_err(|e| Error::ConfigError(format!("Invalid smoothing factor: {e}")))?;

        self.create_smoother().map_err(|e| match e {
            Error::ConfigError(_) => e,
            other => Error::ConfigError(format!("Invalid smoother: {other}")),
        })?;

        if self.display.precision > MAX_DISPLAY_PRECISION {
            return Err(Error::ConfigError(format!(
                "Display precision must be at most {MAX_DISPLAY_PRECISION}"
            )));
        }

        Ok(())
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Landmark Head Pose Configuration

# Face-mesh landmark indices
landmarks:
  nose_tip: 1
  left_eye: 33
  right_eye: 263

# Pose estimator
estimator:
  pitch_offset: 0.6283185307179586  # pi / 5

# Smoothing
smoothing:
  smoother: "wrapped_exponential"
  factor: 0.125

# Display
display:
  precision: 5
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{SMOOTHING_FACTOR_MAX, SMOOTHING_FACTOR_MIN};
    use crate::rotation::Rotation;

    #[test]
    fn test_example_config_matches_defaults() {
        let parsed = Config::from_yaml_str(EXAMPLE_CONFIG).unwrap();
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let parsed = Config::from_yaml_str("smoothing:\n  factor: 0.5\n").unwrap();
        assert_eq!(parsed.smoothing.factor, 0.5);
        assert_eq!(parsed.smoothing.smoother, "wrapped_exponential");
        assert_eq!(parsed.landmarks, LandmarkIndices::FACE_MESH);
    }

    #[test]
    fn test_validate() {
        assert!(Config::default().validate().is_ok());

        let mut config = Config::default();
        config.smoothing.factor = 0.0;
        assert!(config.validate().is_err());

        // Same bounds as the smoother constructor
        for factor in [SMOOTHING_FACTOR_MAX, 1.0e-9] {
            config.smoothing.factor = factor;
            assert!(config.validate().is_ok());
            assert!(AngleSmoother::try_new(factor).is_ok());
        }
        for factor in [SMOOTHING_FACTOR_MIN, 1.5, f64::NAN] {
            config.smoothing.factor = factor;
            assert!(matches!(config.validate(), Err(Error::ConfigError(_))));
            assert!(AngleSmoother::try_new(factor).is_err());
        }

        let mut config = Config::default();
        config.display.precision = 40;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.landmarks.left_eye = config.landmarks.right_eye;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_create_smoother_from_config() {
        let mut config = Config::default();
        assert_eq!(config.create_smoother().unwrap().name(), "WrappedExponential");

        config.smoothing.smoother = "none".to_string();
        assert_eq!(config.create_smoother().unwrap().name(), "NoSmoothing");

        config.smoothing.smoother = "bogus".to_string();
        assert!(config.create_smoother().is_err());
    }

    #[test]
    fn test_factor_applies_to_any_spelling() {
        for name in ["exponential", "Exponential", "WRAPPED_EXPONENTIAL", " wrapped_exponential "] {
            let mut config = Config::default();
            config.smoothing.smoother = name.to_string();
            config.smoothing.factor = 0.5;

            let smoother = config.create_smoother().unwrap();
            let mut current = Rotation::ZERO;
            smoother.smooth(&mut current, Rotation::new(0.0, 0.0, 0.8));
            assert!((current.z - 0.4).abs() < 1e-12, "{name} stepped to {}", current.z);
        }
    }

    #[test]
    fn test_factor_given_twice() {
        let mut config = Config::default();
        config.smoothing.smoother = "wrapped_exponential:0.9".to_string();
        config.smoothing.factor = 0.5;
        assert!(matches!(config.create_smoother(), Err(Error::ConfigError(_))));
        assert!(config.validate().is_err());

        // A parameter alone overrides the default factor
        config.smoothing.factor = DEFAULT_SMOOTHING_FACTOR;
        let smoother = config.create_smoother().unwrap();
        let mut current = Rotation::ZERO;
        smoother.smooth(&mut current, Rotation::new(0.0, 0.0, 0.8));
        assert!((current.z - 0.72).abs() < 1e-12);

        // Matching values are not a conflict
        config.smoothing.factor = 0.9;
        assert!(config.create_smoother().is_ok());
    }

    #[test]
    fn test_validate_checks_smoother_description() {
        let mut config = Config::default();
        config.smoothing.smoother = "exponential:3".to_string();
        assert!(matches!(config.validate(), Err(Error::ConfigError(_))));

        config.smoothing.smoother = "none:1".to_string();
        assert!(config.validate().is_err());
    }
}
