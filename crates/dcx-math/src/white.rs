//! White points: chromaticities, xyY lifting and color temperature.
//!
//! White points are handled as CIE xy [`Chromaticity`] pairs and lifted to
//! XYZ with Y normalized to 1.0. A projector white can also be given as a
//! correlated color temperature, see [`temperature_to_white`].
//!
//! # Standard illuminants
//!
//! | Constant | x | y |
//! |----------|---|---|
//! | [`D50_XY`] | 0.3457 | 0.3585 |
//! | [`D55_XY`] | 0.3324 | 0.3474 |
//! | [`D60_XY`] | 0.3217 | 0.3378 |
//! | [`D65_XY`] | 0.3127 | 0.3290 |
//! | [`DCI_XY`] | 0.314 | 0.351 |

use crate::Vec3;
use dcx_core::{Error, Result};
use std::ops::RangeInclusive;

/// CIE xy chromaticity coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chromaticity {
    /// x coordinate
    pub x: f64,
    /// y coordinate
    pub y: f64,
}

impl Chromaticity {
    /// Creates a chromaticity pair.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The implied z coordinate, `1 - x - y`.
    #[inline]
    pub fn z(self) -> f64 {
        1.0 - self.x - self.y
    }

    /// Lifts to XYZ with Y = 1.
    #[inline]
    pub fn to_xyz(self) -> Result<Vec3> {
        xyy_to_xyz(self, 1.0)
    }
}

/// CIE D50 (horizon light, ~5000K). Native white of ProPhoto RGB.
pub const D50_XY: Chromaticity = Chromaticity::new(0.3457, 0.3585);

/// CIE D55 (~5500K).
pub const D55_XY: Chromaticity = Chromaticity::new(0.3324, 0.3474);

/// CIE D60 (~6000K).
pub const D60_XY: Chromaticity = Chromaticity::new(0.3217, 0.3378);

/// CIE D65 (daylight, ~6500K). Native white of sRGB / Rec.709.
pub const D65_XY: Chromaticity = Chromaticity::new(0.3127, 0.3290);

/// DCI theatrical white (SMPTE RP 431-2).
pub const DCI_XY: Chromaticity = Chromaticity::new(0.314, 0.351);

/// Color temperatures accepted by [`temperature_to_white`].
pub const TEMPERATURE_RANGE: RangeInclusive<i32> = 4000..=25000;

/// Converts xyY to XYZ.
///
/// `X = (Y / y) * x`, `Z = (Y / y) * (1 - x - y)`. Fails when `y == 0`.
///
/// # Example
///
/// ```rust
/// use dcx_math::{xyy_to_xyz, D65_XY};
///
/// let d65 = xyy_to_xyz(D65_XY, 1.0).unwrap();
/// assert_eq!(d65.y, 1.0);
/// assert!((d65.x - 0.95046).abs() < 1e-4);
/// ```
pub fn xyy_to_xyz(xy: Chromaticity, luminance: f64) -> Result<Vec3> {
    if xy.y == 0.0 || !xy.y.is_finite() {
        return Err(Error::degenerate_chromaticity(xy.x, xy.y));
    }
    let k = luminance / xy.y;
    Ok(Vec3::new(
        (k * xy.x) as f32,
        luminance as f32,
        (k * xy.z()) as f32,
    ))
}

/// Chromaticity of a daylight illuminant at the given correlated color
/// temperature.
///
/// Two cubic fits in 1/T (split at 7000K) give x; y follows from the
/// daylight locus `y = -3x² + 2.87x - 0.275`.
pub fn temperature_to_xy(kelvin: i32) -> Result<Chromaticity> {
    if !TEMPERATURE_RANGE.contains(&kelvin) {
        return Err(Error::invalid_temperature(kelvin));
    }

    let t = kelvin as f64;
    let t2 = t * t;
    let t3 = t2 * t;

    let x = if kelvin <= 7000 {
        -4.6070 * (1e9 / t3) + 2.9678 * (1e6 / t2) + 0.09911 * (1e3 / t) + 0.244063
    } else {
        -2.0064 * (1e9 / t3) + 1.9018 * (1e6 / t2) + 0.24748 * (1e3 / t) + 0.237040
    };
    let y = -3.000 * (x * x) + 2.870 * x - 0.275;

    Ok(Chromaticity::new(x, y))
}

/// XYZ white point (Y = 1) for a correlated color temperature.
///
/// Valid for 4000K..=25000K inclusive; anything else is
/// [`Error::InvalidTemperature`].
///
/// # Example
///
/// ```rust
/// use dcx_math::temperature_to_white;
///
/// let white = temperature_to_white(5900).unwrap();
/// assert_eq!(white.y, 1.0);
/// assert!(temperature_to_white(3999).is_err());
/// ```
pub fn temperature_to_white(kelvin: i32) -> Result<Vec3> {
    xyy_to_xyz(temperature_to_xy(kelvin)?, 1.0)
}
