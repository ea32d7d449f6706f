//! Converter configuration.
//!
//! A [`Config`] fully determines one converter. The defaults match what a
//! freshly applied host effect shows: Rec.709 curve, sRGB / Rec.709
//! primaries, adaptation to a 5900K projector white, no normalization and
//! an X'Y'Z' gamma of 2.6.
//!
//! # Example
//!
//! ```rust
//! use dcx_color::Config;
//! use dcx_core::{ChromaticAdaptation, ColorSpace, ResponseCurve};
//!
//! let config = Config::new()
//!     .with_space(ColorSpace::DciP3)
//!     .with_curve(ResponseCurve::DciP3)
//!     .with_adaptation(ChromaticAdaptation::Dci)
//!     .with_normalize(true);
//!
//! assert!(config.validate().is_ok());
//! assert!(Config::new().with_temperature(2700).validate().is_err());
//! ```

use dcx_core::{ChromaticAdaptation, ColorSpace, Error, ResponseCurve, Result};
use dcx_math::TEMPERATURE_RANGE;
use dcx_transfer::{Transfer, DCI_GAMMA};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default exponent for [`ResponseCurve::Gamma`].
pub const DEFAULT_GAMMA: f32 = 2.2;

/// Default projector color temperature in kelvin.
pub const DEFAULT_TEMPERATURE: i32 = 5900;

/// Full configuration of a forward or reverse converter.
///
/// Fields are public; the `with_*` methods are shorthand for chained
/// construction. Nothing is checked until [`validate`](Self::validate) or a
/// converter constructor runs.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "kebab-case"))]
pub struct Config {
    /// RGB primaries and native white.
    pub space: ColorSpace,
    /// Transfer function of the RGB side.
    pub curve: ResponseCurve,
    /// Exponent used when `curve` is [`ResponseCurve::Gamma`].
    pub gamma: f32,
    /// Destination white policy.
    pub adaptation: ChromaticAdaptation,
    /// Projector white in kelvin, used when `adaptation` is
    /// [`ChromaticAdaptation::Temperature`].
    pub temperature: i32,
    /// Scale linear XYZ by 48/52.37 (reverse: 52.37/48).
    pub normalize: bool,
    /// Power of the X'Y'Z' encoding.
    pub xyz_gamma: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            space: ColorSpace::default(),
            curve: ResponseCurve::default(),
            gamma: DEFAULT_GAMMA,
            adaptation: ChromaticAdaptation::default(),
            temperature: DEFAULT_TEMPERATURE,
            normalize: false,
            xyz_gamma: DCI_GAMMA,
        }
    }
}

impl Config {
    /// Default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the color space.
    pub fn with_space(mut self, space: ColorSpace) -> Self {
        self.space = space;
        self
    }

    /// Sets the response curve.
    pub fn with_curve(mut self, curve: ResponseCurve) -> Self {
        self.curve = curve;
        self
    }

    /// Sets the exponent of [`ResponseCurve::Gamma`].
    pub fn with_gamma(mut self, gamma: f32) -> Self {
        self.gamma = gamma;
        self
    }

    /// Sets the chromatic adaptation.
    pub fn with_adaptation(mut self, adaptation: ChromaticAdaptation) -> Self {
        self.adaptation = adaptation;
        self
    }

    /// Sets the projector temperature in kelvin.
    pub fn with_temperature(mut self, kelvin: i32) -> Self {
        self.temperature = kelvin;
        self
    }

    /// Enables or disables luminance normalization.
    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    /// Sets the X'Y'Z' encoding power.
    pub fn with_xyz_gamma(mut self, xyz_gamma: f32) -> Self {
        self.xyz_gamma = xyz_gamma;
        self
    }

    /// Builds the RGB-side transfer function.
    pub fn transfer(&self) -> Result<Transfer> {
        Transfer::new(self.curve, self.gamma)
    }

    /// Checks every field a converter would depend on.
    ///
    /// Fields that the selected options ignore are not checked: a bad
    /// `gamma` only matters for [`ResponseCurve::Gamma`], a bad
    /// `temperature` only for [`ChromaticAdaptation::Temperature`].
    pub fn validate(&self) -> Result<()> {
        self.transfer()?;

        if !(self.xyz_gamma.is_finite() && self.xyz_gamma > 0.0) {
            return Err(Error::invalid_gamma("xyz_gamma", self.xyz_gamma));
        }

        if self.adaptation.uses_temperature() && !TEMPERATURE_RANGE.contains(&self.temperature) {
            return Err(Error::invalid_temperature(self.temperature));
        }

        Ok(())
    }
}
