//! Configuration enums for DCI XYZ conversion.
//!
//! These are the closed option sets a host exposes as popup menus. Each enum
//! converts from the host's menu index ([`from_index`](ColorSpace::from_index))
//! and from text ([`FromStr`]); both reject unknown values with an
//! [`Error`](crate::Error) so a converter is never built from a garbage
//! configuration.
//!
//! # Menu order
//!
//! | Index | [`ColorSpace`] | [`ResponseCurve`] | [`ChromaticAdaptation`] |
//! |-------|----------------|-------------------|-------------------------|
//! | 0 | sRGB / Rec.709 | sRGB | None |
//! | 1 | ProPhoto RGB / ROMM | Rec.709 | D50 |
//! | 2 | DCI-P3 | ProPhoto RGB | D55 |
//! | 3 | | DCI-P3 (gamma 2.6) | D60 |
//! | 4 | | Linear | D65 |
//! | 5 | | Gamma | DCI white |
//! | 6 | | | Color temperature |
//!
//! # Usage
//!
//! ```rust
//! use dcx_core::{ChromaticAdaptation, ColorSpace, ResponseCurve};
//!
//! let space: ColorSpace = "ProPhoto".parse().unwrap();
//! assert_eq!(space, ColorSpace::ProPhotoRgb);
//!
//! let curve = ResponseCurve::from_index(1).unwrap();
//! assert_eq!(curve, ResponseCurve::Rec709);
//!
//! assert!(ChromaticAdaptation::from_index(42).is_err());
//! ```

use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Lowercases and drops separators so "Rec. 709", "rec-709" and "REC709"
/// all compare equal.
fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

// ============================================================================
// ColorSpace
// ============================================================================

/// RGB primaries and native white point of the display-referred side.
///
/// The chromaticities behind each variant are fixed constants (see
/// `dcx-primaries`); they are not configurable.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ColorSpace {
    /// sRGB / Rec.709 primaries, D65 white.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "srgb"))]
    SrgbRec709,
    /// ProPhoto RGB / ROMM RGB primaries, D50 white.
    #[cfg_attr(feature = "serde", serde(rename = "prophoto"))]
    ProPhotoRgb,
    /// DCI-P3 primaries, DCI white (x 0.314, y 0.351).
    #[cfg_attr(feature = "serde", serde(rename = "p3"))]
    DciP3,
}

impl ColorSpace {
    /// All color spaces in menu order.
    pub const ALL: [Self; 3] = [Self::SrgbRec709, Self::ProPhotoRgb, Self::DciP3];

    /// Looks up a color space by host menu index.
    pub fn from_index(index: u32) -> Result<Self> {
        Self::ALL
            .get(index as usize)
            .copied()
            .ok_or(Error::UnknownColorSpace(index))
    }

    /// Host menu index of this color space.
    pub fn index(self) -> u32 {
        self as u32
    }

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::SrgbRec709 => "sRGB / Rec. 709",
            Self::ProPhotoRgb => "ProPhoto RGB / ROMM RGB",
            Self::DciP3 => "DCI-P3",
        }
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorSpace {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match normalize(s).as_str() {
            "srgb" | "rec709" | "srgbrec709" | "bt709" => Ok(Self::SrgbRec709),
            "prophoto" | "prophotorgb" | "romm" | "rommrgb" | "prophotorgbrommrgb" => {
                Ok(Self::ProPhotoRgb)
            }
            "p3" | "dcip3" => Ok(Self::DciP3),
            _ => Err(Error::unknown_name("color space", s)),
        }
    }
}

// ============================================================================
// ResponseCurve
// ============================================================================

/// Transfer function applied to the RGB side.
///
/// [`Gamma`](Self::Gamma) takes its exponent from the configuration; every
/// other curve is fully fixed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ResponseCurve {
    /// IEC 61966-2-1 piecewise curve.
    #[cfg_attr(feature = "serde", serde(rename = "srgb"))]
    Srgb,
    /// ITU-R BT.709 piecewise curve.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "rec709"))]
    Rec709,
    /// ROMM RGB piecewise curve (gamma 1.8 with a linear toe).
    #[cfg_attr(feature = "serde", serde(rename = "prophoto"))]
    ProPhotoRgb,
    /// Pure power 2.6, as used for DCI-P3 projection.
    #[cfg_attr(feature = "serde", serde(rename = "p3"))]
    DciP3,
    /// Identity.
    #[cfg_attr(feature = "serde", serde(rename = "linear"))]
    Linear,
    /// Pure power with a caller-supplied exponent.
    #[cfg_attr(feature = "serde", serde(rename = "gamma"))]
    Gamma,
}

impl ResponseCurve {
    /// All curves in menu order.
    pub const ALL: [Self; 6] = [
        Self::Srgb,
        Self::Rec709,
        Self::ProPhotoRgb,
        Self::DciP3,
        Self::Linear,
        Self::Gamma,
    ];

    /// Looks up a curve by host menu index.
    pub fn from_index(index: u32) -> Result<Self> {
        Self::ALL
            .get(index as usize)
            .copied()
            .ok_or(Error::UnknownCurve(index))
    }

    /// Host menu index of this curve.
    pub fn index(self) -> u32 {
        self as u32
    }

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Srgb => "sRGB",
            Self::Rec709 => "Rec. 709",
            Self::ProPhotoRgb => "ProPhoto RGB",
            Self::DciP3 => "DCI-P3",
            Self::Linear => "Linear",
            Self::Gamma => "Gamma",
        }
    }

    /// Returns `true` if the curve uses the configured gamma exponent.
    pub const fn uses_gamma(self) -> bool {
        matches!(self, Self::Gamma)
    }
}

impl fmt::Display for ResponseCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ResponseCurve {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match normalize(s).as_str() {
            "srgb" => Ok(Self::Srgb),
            "rec709" | "bt709" => Ok(Self::Rec709),
            "prophoto" | "prophotorgb" | "romm" => Ok(Self::ProPhotoRgb),
            "p3" | "dcip3" | "gamma26" => Ok(Self::DciP3),
            "linear" | "lin" => Ok(Self::Linear),
            "gamma" | "power" => Ok(Self::Gamma),
            _ => Err(Error::unknown_name("response curve", s)),
        }
    }
}

// ============================================================================
// ChromaticAdaptation
// ============================================================================

/// Destination white point used for Bradford adaptation.
///
/// [`None`](Self::None) keeps the color space's native white.
/// [`Temperature`](Self::Temperature) derives the white from the configured
/// correlated color temperature.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ChromaticAdaptation {
    /// No adaptation.
    None,
    /// CIE D50 (x 0.3457, y 0.3585).
    D50,
    /// CIE D55 (x 0.3324, y 0.3474).
    D55,
    /// CIE D60 (x 0.3217, y 0.3378).
    D60,
    /// CIE D65 (x 0.3127, y 0.3290).
    D65,
    /// DCI theatrical white (x 0.314, y 0.351).
    Dci,
    /// White derived from a correlated color temperature.
    #[default]
    Temperature,
}

impl ChromaticAdaptation {
    /// All options in menu order.
    pub const ALL: [Self; 7] = [
        Self::None,
        Self::D50,
        Self::D55,
        Self::D60,
        Self::D65,
        Self::Dci,
        Self::Temperature,
    ];

    /// Looks up an option by host menu index.
    pub fn from_index(index: u32) -> Result<Self> {
        Self::ALL
            .get(index as usize)
            .copied()
            .ok_or(Error::UnknownAdaptation(index))
    }

    /// Host menu index of this option.
    pub fn index(self) -> u32 {
        self as u32
    }

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::D50 => "D50",
            Self::D55 => "D55",
            Self::D60 => "D60",
            Self::D65 => "D65",
            Self::Dci => "DCI",
            Self::Temperature => "Color Temperature",
        }
    }

    /// Returns `true` if the configured temperature is consulted.
    pub const fn uses_temperature(self) -> bool {
        matches!(self, Self::Temperature)
    }
}

impl fmt::Display for ChromaticAdaptation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChromaticAdaptation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match normalize(s).as_str() {
            "none" | "off" => Ok(Self::None),
            "d50" => Ok(Self::D50),
            "d55" => Ok(Self::D55),
            "d60" => Ok(Self::D60),
            "d65" => Ok(Self::D65),
            "dci" | "dciwhite" => Ok(Self::Dci),
            "temperature" | "temp" | "cct" | "colortemperature" => Ok(Self::Temperature),
            _ => Err(Error::unknown_name("chromatic adaptation", s)),
        }
    }
}

// ============================================================================
// Direction
// ============================================================================

/// Which way a converter runs.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    /// Encoded RGB to encoded X'Y'Z'.
    #[default]
    Forward,
    /// Encoded X'Y'Z' to encoded RGB.
    Reverse,
}

impl Direction {
    /// Human-readable name, as shown in the host's operation menu.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Forward => "RGB to XYZ",
            Self::Reverse => "XYZ to RGB",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match normalize(s).as_str() {
            "forward" | "rgbtoxyz" | "fwd" => Ok(Self::Forward),
            "reverse" | "xyztorgb" | "rev" | "inverse" => Ok(Self::Reverse),
            _ => Err(Error::unknown_name("direction", s)),
        }
    }
}
