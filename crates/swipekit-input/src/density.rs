//! Density-independent unit conversion.
//!
//! Hosts report touch coordinates in physical pixels. The recognizer's
//! threshold is expressed in density-independent units, so samples are
//! divided by the display density before they reach it.

use crate::error::{InputError, InputResult};
use serde::{Deserialize, Serialize};

/// Physical pixels per density-independent unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f32", into = "f32")]
pub struct Density {
    scale: f32,
}

impl Density {
    /// Create a density, rejecting zero, negative and non-finite scales.
    pub fn new(scale: f32) -> InputResult<Self> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(InputError::InvalidDensity(scale));
        }
        Ok(Self { scale })
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Convert physical pixels to density-independent units.
    pub fn to_dp(&self, px: f32) -> f32 {
        px / self.scale
    }

    /// Convert density-independent units to physical pixels.
    pub fn to_px(&self, dp: f32) -> f32 {
        dp * self.scale
    }
}

impl Default for Density {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

impl TryFrom<f32> for Density {
    type Error = InputError;

    fn try_from(scale: f32) -> InputResult<Self> {
        Self::new(scale)
    }
}

impl From<Density> for f32 {
    fn from(density: Density) -> Self {
        density.scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion() {
        let density = Density::new(2.5).unwrap();
        assert_eq!(density.to_dp(25.0), 10.0);
        assert_eq!(density.to_px(10.0), 25.0);
        assert_eq!(Density::default().to_dp(42.0), 42.0);
    }

    #[test]
    fn test_rejects_invalid_scale() {
        assert!(matches!(Density::new(0.0), Err(InputError::InvalidDensity(_))));
        assert!(matches!(Density::new(-1.5), Err(InputError::InvalidDensity(_))));
        assert!(Density::new(f32::INFINITY).is_err());
        assert!(Density::new(f32::NAN).is_err());
    }
}
