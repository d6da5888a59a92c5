//! Smoothing of per-frame rotation estimates.
//!
//! A smoother owns no rotation data: it reads and writes the persistent
//! rotation held by whatever object is being animated.

/// Wrapped-angle exponential smoother
pub mod wrapped_exponential;

pub use wrapped_exponential::AngleSmoother;

use crate::constants::DEFAULT_SMOOTHING_FACTOR;
use crate::rotation::Rotation;
use crate::{Error, Result};

/// Trait for all rotation smoothers
pub trait RotationSmoother: Send + Sync {
    /// Blend `target` into the persistent `current` rotation in place
    fn smooth(&self, current: &mut Rotation, target: Rotation);

    /// Get smoother name
    fn name(&self) -> &str;
}

/// Smoother that snaps straight to the (normalized) target
pub struct NoSmoothing;

impl RotationSmoother for NoSmoothing {
    fn smooth(&self, current: &mut Rotation, target: Rotation) {
        *current = target.normalized();
    }

    fn name(&self) -> &str {
        "NoSmoothing"
    }
}

/// Smoother description split into its normalized name and optional factor
#[derive(Debug, Clone, PartialEq)]
pub struct SmootherKind {
    /// Lowercased, trimmed smoother name
    pub name: String,
    /// Factor given after the `:`, if any
    pub factor: Option<f64>,
}

/// Parse a `name[:param]` smoother description.
///
/// # Errors
///
/// Returns an error if there is more than one parameter or the parameter is
/// not a number
pub fn parse_smoother_kind(kind: &str) -> Result<SmootherKind> {
    let mut parts = kind.split(':');
    let name = parts.next().unwrap_or_default().trim().to_lowercase();
    let param = parts.next().map(str::trim);
    if parts.next().is_some() {
        return Err(Error::SmootherError(format!("Too many parameters in smoother description: {kind}")));
    }

    let factor = match param {
        Some(raw) => Some(
            raw.parse::<f64>()
                .map_err(|e| Error::SmootherError(format!("Invalid smoothing factor '{raw}': {e}")))?,
        ),
        None => None,
    };
    Ok(SmootherKind { name, factor })
}

/// Create a smoother from a `name[:param]` description.
///
/// Recognized names are `none`, `wrapped_exponential` (alias
/// `exponential`); the optional parameter is the smoothing factor.
///
/// # Errors
///
/// Returns an error for an unknown name or an invalid parameter
pub fn create_smoother(kind: &str) -> Result<Box<dyn RotationSmoother>> {
    create_smoother_with_factor(kind, DEFAULT_SMOOTHING_FACTOR)
}

/// Like [`create_smoother`], but uses `default_factor` when the description
/// carries no parameter.
///
/// # Errors
///
/// Returns an error for an unknown name or an invalid factor
pub fn create_smoother_with_factor(kind: &str, default_factor: f64) -> Result<Box<dyn RotationSmoother>> {
    let parsed = parse_smoother_kind(kind)?;
    match parsed.name.as_str() {
        "none" | "nosmoothing" => {
            if parsed.factor.is_some() {
                return Err(Error::SmootherError("Smoother 'none' takes no parameters".to_string()));
            }
            Ok(Box::new(NoSmoothing))
        }
        "wrapped_exponential" | "wrappedexponential" | "exponential" => Ok(Box::new(AngleSmoother::try_new(
            parsed.factor.unwrap_or(default_factor),
        )?)),
        _ => Err(Error::SmootherError(format!("Unknown smoother type: {kind}"))),
    }
}
