//! Per-pixel forward and reverse converters.
//!
//! ```text
//! Forward:  RGB' --decode--> RGB --M--> XYZ --(x 48/52.37)--> --^(1/g)--> X'Y'Z'
//! Reverse:  X'Y'Z' --^g--> XYZ --(x 52.37/48)--> --M^-1--> RGB --encode--> RGB'
//! ```
//!
//! The normalization step only runs when [`Config::normalize`] is set; `g`
//! is [`Config::xyz_gamma`]. Every power uses the sign-preserving extension,
//! so out-of-gamut values pass through without NaN.
//!
//! Converters are immutable after construction. The matrix is derived once
//! and shared read-only, so a converter can be used from many threads.

use dcx_core::{Direction, Pixel, Result};
use dcx_math::{Mat3, Vec3};
use dcx_transfer::{power_decode, power_encode, Transfer};
use tracing::debug;

use crate::{rgb_to_xyz_matrix, Config};

/// Reference projector luminance in cd/m².
pub const PROJECTOR_LUMINANCE: f32 = 48.0;

/// DCI reference white luminance in cd/m².
pub const DCI_WHITE_LUMINANCE: f32 = 52.37;

/// Forward normalization factor, `48 / 52.37`.
pub const NORMALIZE_SCALE: f32 = PROJECTOR_LUMINANCE / DCI_WHITE_LUMINANCE;

/// Per-pixel conversion.
///
/// # Example
///
/// ```rust
/// use dcx_color::{Config, ForwardConverter, PixelConvert, ReverseConverter};
///
/// let config = Config::default();
/// let fwd = ForwardConverter::new(&config).unwrap();
/// let rev = ReverseConverter::new(&config).unwrap();
///
/// let mut pixels = [[0.18, 0.18, 0.18], [1.0, 0.0, 0.0]];
/// fwd.convert_slice(&mut pixels);
/// rev.convert_slice(&mut pixels);
/// assert!((pixels[1][0] - 1.0).abs() < 1e-4);
/// ```
pub trait PixelConvert {
    /// Converts one pixel.
    fn convert(&self, pixel: Pixel) -> Pixel;

    /// Converts pixels in place, one after the other.
    fn convert_slice(&self, pixels: &mut [Pixel]) {
        for pixel in pixels.iter_mut() {
            *pixel = self.convert(*pixel);
        }
    }

    /// The cached 3x3 matrix.
    fn matrix(&self) -> Mat3;
}

/// Luminance scale for a direction, or 1 when normalization is off.
fn luminance_scale(normalize: bool, direction: Direction) -> f32 {
    match (normalize, direction) {
        (false, _) => 1.0,
        (true, Direction::Forward) => NORMALIZE_SCALE,
        (true, Direction::Reverse) => DCI_WHITE_LUMINANCE / PROJECTOR_LUMINANCE,
    }
}

// ============================================================================
// Forward
// ============================================================================

/// Encoded RGB to encoded X'Y'Z'.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForwardConverter {
    transfer: Transfer,
    rgb_to_xyz: Mat3,
    scale: f32,
    xyz_gamma: f32,
}

impl ForwardConverter {
    /// Validates `config` and derives the RGB to XYZ matrix.
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;

        let transfer = config.transfer()?;
        let rgb_to_xyz = rgb_to_xyz_matrix(config)?;

        debug!(?config, matrix = ?rgb_to_xyz.to_rows(), "forward converter");

        Ok(Self {
            transfer,
            rgb_to_xyz,
            scale: luminance_scale(config.normalize, Direction::Forward),
            xyz_gamma: config.xyz_gamma,
        })
    }

    /// Converts one RGB pixel to X'Y'Z'.
    #[inline]
    pub fn convert(&self, rgb: Pixel) -> Pixel {
        let linear = Vec3::from(self.transfer.decode_rgb(rgb));
        let xyz = self.rgb_to_xyz * linear * self.scale;
        xyz.map(|v| power_encode(v, self.xyz_gamma)).to_array()
    }
}

impl PixelConvert for ForwardConverter {
    fn convert(&self, pixel: Pixel) -> Pixel {
        ForwardConverter::convert(self, pixel)
    }

    fn matrix(&self) -> Mat3 {
        self.rgb_to_xyz
    }
}

// ============================================================================
// Reverse
// ============================================================================

/// Encoded X'Y'Z' to encoded RGB.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReverseConverter {
    transfer: Transfer,
    xyz_to_rgb: Mat3,
    scale: f32,
    xyz_gamma: f32,
}

impl ReverseConverter {
    /// Validates `config` and derives the XYZ to RGB matrix, the exact
    /// inverse of what [`ForwardConverter::new`] uses for the same config.
    ///
    /// A singular matrix is reported as
    /// [`Error::SingularMatrix`](dcx_core::Error::SingularMatrix).
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;

        let transfer = config.transfer()?;
        let xyz_to_rgb = rgb_to_xyz_matrix(config)?.try_inverse("RGB to XYZ")?;

        debug!(?config, matrix = ?xyz_to_rgb.to_rows(), "reverse converter");

        Ok(Self {
            transfer,
            xyz_to_rgb,
            scale: luminance_scale(config.normalize, Direction::Reverse),
            xyz_gamma: config.xyz_gamma,
        })
    }

    /// Converts one X'Y'Z' pixel to RGB.
    #[inline]
    pub fn convert(&self, xyz: Pixel) -> Pixel {
        let linear = Vec3::from(xyz).map(|v| power_decode(v, self.xyz_gamma)) * self.scale;
        let rgb = self.xyz_to_rgb * linear;
        self.transfer.encode_rgb(rgb.to_array())
    }
}

impl PixelConvert for ReverseConverter {
    fn convert(&self, pixel: Pixel) -> Pixel {
        ReverseConverter::convert(self, pixel)
    }

    fn matrix(&self) -> Mat3 {
        self.xyz_to_rgb
    }
}

// ============================================================================
// Tagged converter
// ============================================================================

/// A converter whose direction is picked at runtime.
///
/// # Example
///
/// ```rust
/// use dcx_color::{Config, Converter, PixelConvert};
/// use dcx_core::Direction;
///
/// let config = Config::default();
/// let fwd = Converter::new(Direction::Forward, &config).unwrap();
/// let rev = Converter::new(Direction::Reverse, &config).unwrap();
///
/// let xyz = fwd.convert([0.5, 0.25, 0.75]);
/// let rgb = rev.convert(xyz);
/// assert!((rgb[1] - 0.25).abs() < 1e-4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Converter {
    /// RGB to X'Y'Z'.
    Forward(ForwardConverter),
    /// X'Y'Z' to RGB.
    Reverse(ReverseConverter),
}

impl Converter {
    /// Builds a converter for `direction`.
    pub fn new(direction: Direction, config: &Config) -> Result<Self> {
        Ok(match direction {
            Direction::Forward => Self::Forward(ForwardConverter::new(config)?),
            Direction::Reverse => Self::Reverse(ReverseConverter::new(config)?),
        })
    }

    /// Direction this converter runs in.
    pub fn direction(&self) -> Direction {
        match self {
            Self::Forward(_) => Direction::Forward,
            Self::Reverse(_) => Direction::Reverse,
        }
    }
}

impl From<ForwardConverter> for Converter {
    fn from(c: ForwardConverter) -> Self {
        Self::Forward(c)
    }
}

impl From<ReverseConverter> for Converter {
    fn from(c: ReverseConverter) -> Self {
        Self::Reverse(c)
    }
}

impl PixelConvert for Converter {
    #[inline]
    fn convert(&self, pixel: Pixel) -> Pixel {
        match self {
            Self::Forward(c) => c.convert(pixel),
            Self::Reverse(c) => c.convert(pixel),
        }
    }

    fn matrix(&self) -> Mat3 {
        match self {
            Self::Forward(c) => c.rgb_to_xyz,
            Self::Reverse(c) => c.xyz_to_rgb,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dcx_core::{ChromaticAdaptation, ColorSpace, Error, ResponseCurve};

    #[test]
    fn test_normalize_scale() {
        assert!((NORMALIZE_SCALE - 0.916555).abs() < 1e-6);
        assert_eq!(luminance_scale(false, Direction::Reverse), 1.0);
        let roundtrip = luminance_scale(true, Direction::Forward)
            * luminance_scale(true, Direction::Reverse);
        assert!((roundtrip - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_black_stays_black() {
        for space in ColorSpace::ALL {
            let config = Config::new().with_space(space);
            let fwd = ForwardConverter::new(&config).unwrap();
            assert_eq!(fwd.convert([0.0, 0.0, 0.0]), [0.0, 0.0, 0.0]);
        }
    }

    #[test]
    fn test_matrices_are_inverse() {
        let config = Config::new().with_space(ColorSpace::DciP3);
        let fwd = ForwardConverter::new(&config).unwrap();
        let rev = ReverseConverter::new(&config).unwrap();
        let product = fwd.matrix() * rev.matrix();
        assert!(product.max_abs_diff(&Mat3::IDENTITY) < 1e-5);
    }

    #[test]
    fn test_construction_errors() {
        let hot = Config::new().with_temperature(30000);
        assert_eq!(
            ForwardConverter::new(&hot).unwrap_err(),
            Error::InvalidTemperature { kelvin: 30000 }
        );
        assert_eq!(
            ReverseConverter::new(&hot).unwrap_err(),
            Error::InvalidTemperature { kelvin: 30000 }
        );

        let flat = Config::new().with_curve(ResponseCurve::Gamma).with_gamma(0.0);
        assert!(Converter::new(Direction::Forward, &flat).is_err());
        assert!(Converter::new(Direction::Reverse, &flat).is_err());
    }

    #[test]
    fn test_negative_values_are_finite() {
        let config = Config::new().with_adaptation(ChromaticAdaptation::Dci);
        let fwd = ForwardConverter::new(&config).unwrap();
        let rev = ReverseConverter::new(&config).unwrap();
        let xyz = fwd.convert([-0.5, 1.5, -0.25]);
        assert!(xyz.iter().all(|v| v.is_finite()));
        assert!(rev.convert(xyz).iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_tagged_dispatch() {
        let config = Config::default();
        let tagged = Converter::new(Direction::Reverse, &config).unwrap();
        let plain = ReverseConverter::new(&config).unwrap();
        assert_eq!(tagged.direction(), Direction::Reverse);
        assert_eq!(tagged, Converter::from(plain));
        assert_eq!(tagged.convert([0.3, 0.4, 0.5]), plain.convert([0.3, 0.4, 0.5]));
        assert_eq!(tagged.matrix(), plain.matrix());
    }

    #[test]
    fn test_convert_slice() {
        let fwd = ForwardConverter::new(&Config::default()).unwrap();
        let mut pixels = [[0.1, 0.2, 0.3], [0.9, 0.8, 0.7]];
        let expected = pixels.map(|p| fwd.convert(p));
        fwd.convert_slice(&mut pixels);
        assert_eq!(pixels, expected);
    }
}
