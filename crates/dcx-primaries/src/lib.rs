//! # dcx-primaries
//!
//! Color primaries, native white points and RGB-to-XYZ matrices for the
//! three RGB color spaces a DCI conversion starts from.
//!
//! # Integration with dcx-core
//!
//! This crate bridges [`dcx_core::ColorSpace`] to runtime math:
//!
//! ```rust
//! use dcx_core::ColorSpace;
//! use dcx_primaries::{native_rgb_to_xyz, Primaries};
//!
//! let p = Primaries::from_space(ColorSpace::DciP3);
//! assert_eq!(p.name, "DCI-P3");
//!
//! let m = native_rgb_to_xyz(ColorSpace::SrgbRec709).unwrap();
//! assert_eq!(m.m[0][0], 0.4124);
//! ```
//!
//! # Where the matrices come from
//!
//! | Color Space | White | Matrix |
//! |-------------|-------|--------|
//! | sRGB / Rec.709 | D65 | published RGB-to-XYZ literal ([`SRGB_TO_XYZ`]) |
//! | ProPhoto RGB / ROMM | D50 | inverse of the published XYZ-to-RGB literal ([`XYZ_TO_PROPHOTO`]) |
//! | DCI-P3 | DCI white | derived from chromaticities ([`rgb_to_xyz_matrix`]) |
//!
//! The literals are kept exactly as published; re-deriving them from
//! chromaticities would drift in the fourth decimal.
//!
//! # Dependencies
//!
//! - [`dcx-core`] - `ColorSpace`, error type
//! - [`dcx-math`] - `Mat3`, `Chromaticity`
//!
//! # Used By
//!
//! - `dcx-color` - matrix derivation for converters

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

use dcx_core::{ColorSpace, Result};
use dcx_math::{Chromaticity, Mat3, Vec3, D50_XY, D65_XY, DCI_XY};

/// RGB color space primaries definition.
///
/// Defines a color space by its three primary colors (R, G, B) and white
/// point, all as CIE xy chromaticity coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Primaries {
    /// Red primary chromaticity
    pub r: Chromaticity,
    /// Green primary chromaticity
    pub g: Chromaticity,
    /// Blue primary chromaticity
    pub b: Chromaticity,
    /// White point chromaticity
    pub w: Chromaticity,
    /// Color space name
    pub name: &'static str,
}

impl Primaries {
    /// White point as XYZ (Y=1).
    #[inline]
    pub fn white_xyz(&self) -> Result<Vec3> {
        self.w.to_xyz()
    }

    /// Primaries of a [`ColorSpace`].
    pub const fn from_space(space: ColorSpace) -> Self {
        match space {
            ColorSpace::SrgbRec709 => SRGB,
            ColorSpace::ProPhotoRgb => PROPHOTO_RGB,
            ColorSpace::DciP3 => DCI_P3,
        }
    }
}

impl From<ColorSpace> for Primaries {
    fn from(space: ColorSpace) -> Self {
        Self::from_space(space)
    }
}

// ============================================================================
// Standard Color Space Primaries
// ============================================================================

/// sRGB / Rec.709 primaries (D65 white point).
pub const SRGB: Primaries = Primaries {
    r: Chromaticity::new(0.6400, 0.3300),
    g: Chromaticity::new(0.3000, 0.6000),
    b: Chromaticity::new(0.1500, 0.0600),
    w: D65_XY,
    name: "sRGB / Rec. 709",
};

/// ProPhoto RGB / ROMM RGB primaries (D50 white point).
pub const PROPHOTO_RGB: Primaries = Primaries {
    r: Chromaticity::new(0.7347, 0.2653),
    g: Chromaticity::new(0.1596, 0.8404),
    b: Chromaticity::new(0.0366, 0.0001),
    w: D50_XY,
    name: "ProPhoto RGB",
};

/// DCI-P3 primaries (DCI white point).
///
/// SMPTE RP 431-2.
pub const DCI_P3: Primaries = Primaries {
    r: Chromaticity::new(0.680, 0.320),
    g: Chromaticity::new(0.265, 0.690),
    b: Chromaticity::new(0.150, 0.060),
    w: DCI_XY,
    name: "DCI-P3",
};

// ============================================================================
// Published Matrices
// ============================================================================

/// sRGB / Rec.709 to XYZ (D65), as published in IEC 61966-2-1.
pub const SRGB_TO_XYZ: Mat3 = Mat3::from_rows([
    [0.4124, 0.3576, 0.1805],
    [0.2126, 0.7152, 0.0722],
    [0.0193, 0.1192, 0.9505],
]);

/// XYZ (D50) to ProPhoto RGB.
///
/// The ROMM RGB specification only publishes this direction; the RGB-to-XYZ
/// matrix is its inverse.
pub const XYZ_TO_PROPHOTO: Mat3 = Mat3::from_rows([
    [1.3460, -0.2556, -0.0511],
    [-0.5446, 1.5082, 0.0205],
    [0.0000, 0.0000, 1.2123],
]);

// ============================================================================
// Matrix Generation
// ============================================================================

/// Computes the RGB to XYZ matrix for a set of primaries.
///
/// # Algorithm
///
/// 1. Build the chromaticity matrix `C` whose columns are `(x, y, 1-x-y)`
///    of the red, green and blue primaries
/// 2. Solve `C * S = W` for the per-primary scale `S`, where `W` is the
///    white point XYZ with Y=1
/// 3. Return `C * diag(S)`
///
/// # Example
///
/// ```rust
/// use dcx_primaries::{rgb_to_xyz_matrix, DCI_P3};
/// use dcx_math::Vec3;
///
/// let m = rgb_to_xyz_matrix(&DCI_P3).unwrap();
///
/// // RGB white lands on the DCI white point
/// let white = m * Vec3::ONE;
/// assert!((white.y - 1.0).abs() < 1e-5);
/// assert!((white.x - 0.314 / 0.351).abs() < 1e-5);
/// ```
pub fn rgb_to_xyz_matrix(primaries: &Primaries) -> Result<Mat3> {
    let column = |c: Chromaticity| Vec3::new(c.x as f32, c.y as f32, c.z() as f32);

    let chroma = Mat3::from_col_vecs(column(primaries.r), column(primaries.g), column(primaries.b));
    let white = primaries.white_xyz()?;

    let scale = chroma.try_inverse(primaries.name)? * white;

    Ok(chroma * Mat3::from_diagonal(scale))
}

/// Computes the XYZ to RGB matrix for a set of primaries.
///
/// This is the inverse of [`rgb_to_xyz_matrix`].
pub fn xyz_to_rgb_matrix(primaries: &Primaries) -> Result<Mat3> {
    rgb_to_xyz_matrix(primaries)?.try_inverse(primaries.name)
}

/// Native white point of a color space as XYZ (Y=1).
///
/// D65 for sRGB / Rec.709, D50 for ProPhoto RGB, DCI white for DCI-P3.
pub fn native_white(space: ColorSpace) -> Result<Vec3> {
    Primaries::from_space(space).white_xyz()
}

/// The linear RGB to XYZ matrix of a color space, relative to its native
/// white point.
///
/// sRGB returns [`SRGB_TO_XYZ`] verbatim, ProPhoto RGB the inverse of
/// [`XYZ_TO_PROPHOTO`], and DCI-P3 the matrix derived from its
/// chromaticities.
pub fn native_rgb_to_xyz(space: ColorSpace) -> Result<Mat3> {
    match space {
        ColorSpace::SrgbRec709 => Ok(SRGB_TO_XYZ),
        ColorSpace::ProPhotoRgb => XYZ_TO_PROPHOTO.try_inverse(PROPHOTO_RGB.name),
        ColorSpace::DciP3 => rgb_to_xyz_matrix(&DCI_P3),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_from_space() {
        for space in ColorSpace::ALL {
            let p: Primaries = space.into();
            assert_eq!(p, Primaries::from_space(space));
        }
        assert_eq!(Primaries::from_space(ColorSpace::ProPhotoRgb).w, D50_XY);
    }

    #[test]
    fn test_srgb_literal() {
        let m = native_rgb_to_xyz(ColorSpace::SrgbRec709).unwrap();
        assert_eq!(m, SRGB_TO_XYZ);
        assert_eq!(m.m[1], [0.2126, 0.7152, 0.0722]);
    }

    #[test]
    fn test_srgb_derivation_agrees_with_literal() {
        let derived = rgb_to_xyz_matrix(&SRGB).unwrap();
        assert!(derived.max_abs_diff(&SRGB_TO_XYZ) < 1e-3);
    }

    #[test]
    fn test_p3_matrix() {
        // SMPTE RP 431-2 RGB to XYZ
        let published = Mat3::from_rows([
            [0.4451698, 0.2771344, 0.1722827],
            [0.2094917, 0.7215953, 0.0689131],
            [0.0000000, 0.0470606, 0.9073554],
        ]);
        let m = native_rgb_to_xyz(ColorSpace::DciP3).unwrap();
        assert!(m.max_abs_diff(&published) < 1e-5, "{:?}", m);

        // Luminance row sums to 1 (white has Y=1)
        let y = m.row(1);
        assert_abs_diff_eq!(y.x + y.y + y.z, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_prophoto_matrix() {
        let m = native_rgb_to_xyz(ColorSpace::ProPhotoRgb).unwrap();
        assert!((m * XYZ_TO_PROPHOTO).max_abs_diff(&Mat3::IDENTITY) < 1e-5);
        // Rows sum to (roughly) the D50 white
        let white = m * Vec3::ONE;
        let d50 = native_white(ColorSpace::ProPhotoRgb).unwrap();
        assert!(white.max_abs_diff(d50) < 1e-3);
    }

    #[test]
    fn test_white_maps_to_native_white() {
        for space in ColorSpace::ALL {
            let m = native_rgb_to_xyz(space).unwrap();
            let white = m * Vec3::ONE;
            let native = native_white(space).unwrap();
            assert!(white.max_abs_diff(native) < 1e-3, "{}: {:?}", space, white);
        }
    }

    #[test]
    fn test_roundtrip() {
        let to_xyz = rgb_to_xyz_matrix(&DCI_P3).unwrap();
        let to_rgb = xyz_to_rgb_matrix(&DCI_P3).unwrap();
        let rgb = Vec3::new(0.5, 0.3, 0.8);
        assert!((to_rgb * (to_xyz * rgb)).max_abs_diff(rgb) < 1e-5);
    }

    #[test]
    fn test_degenerate_primaries() {
        let broken = Primaries {
            g: SRGB.r,
            b: SRGB.r,
            ..SRGB
        };
        assert!(rgb_to_xyz_matrix(&broken).unwrap_err().is_numeric());
    }
}
