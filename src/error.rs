//! Error types for the landmark head pose library.

use thiserror::Error;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// File I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML (de)serialization failed
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Invalid input parameters provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A non-empty face does not contain a landmark the estimator needs
    #[error("Landmark index {index} out of range for face with {len} landmarks")]
    LandmarkOutOfRange {
        /// Requested landmark index
        index: usize,
        /// Number of landmarks available in the face
        len: usize,
    },

    /// Smoother construction or lookup error
    #[error("Smoother error: {0}")]
    SmootherError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Convenience type alias for Results with our Error type
pub type Result<T> = std::result::Result<T, Error>;
