//! Error types for dcx operations.
//!
//! Every failure in this workspace is a **configuration** failure: an
//! unsupported color temperature, an unknown menu index, a gamma that cannot
//! be inverted, or a matrix that turned out singular. They are raised once,
//! when a converter is built. The per-pixel path never fails; out-of-range
//! and negative values are handled numerically (see `dcx-transfer`).
//!
//! # Usage
//!
//! ```rust
//! use dcx_core::{Error, Result};
//!
//! fn check_temperature(kelvin: i32) -> Result<()> {
//!     if !(4000..=25000).contains(&kelvin) {
//!         return Err(Error::invalid_temperature(kelvin));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_temperature(3999).is_err());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building a converter.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Color temperature outside the supported 4000K..=25000K range.
    ///
    /// The correlated color temperature fit used for white points is only
    /// defined inside this range.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dcx_core::Error;
    ///
    /// let err = Error::invalid_temperature(3000);
    /// assert!(err.to_string().contains("3000"));
    /// ```
    #[error("invalid color temperature {kelvin}K (supported range is 4000K..=25000K)")]
    InvalidTemperature {
        /// Requested temperature in kelvin
        kelvin: i32,
    },

    /// Menu index that does not name a color space.
    #[error("unknown color space index {0}")]
    UnknownColorSpace(u32),

    /// Menu index that does not name a response curve.
    #[error("unknown response curve index {0}")]
    UnknownCurve(u32),

    /// Menu index that does not name a chromatic adaptation option.
    #[error("unknown chromatic adaptation index {0}")]
    UnknownAdaptation(u32),

    /// Text that does not name any option of the given kind.
    #[error("unknown {kind} '{name}'")]
    UnknownName {
        /// Which option set was searched
        kind: &'static str,
        /// The unmatched text
        name: String,
    },

    /// Gamma exponent that is zero, negative or not finite.
    #[error("invalid {name} {value} (must be finite and greater than zero)")]
    InvalidGamma {
        /// Parameter name (`gamma` or `xyz_gamma`)
        name: &'static str,
        /// Offending value
        value: f32,
    },

    /// xyY chromaticity with y == 0 cannot be lifted to XYZ.
    #[error("degenerate chromaticity ({x}, {y}): y must be non-zero")]
    DegenerateChromaticity {
        /// Chromaticity x
        x: f64,
        /// Chromaticity y
        y: f64,
    },

    /// A derived matrix has no inverse.
    #[error("singular matrix: {0}")]
    SingularMatrix(&'static str),
}

impl Error {
    /// Creates an [`Error::InvalidTemperature`] error.
    #[inline]
    pub fn invalid_temperature(kelvin: i32) -> Self {
        Self::InvalidTemperature { kelvin }
    }

    /// Creates an [`Error::UnknownName`] error.
    #[inline]
    pub fn unknown_name(kind: &'static str, name: impl Into<String>) -> Self {
        Self::UnknownName {
            kind,
            name: name.into(),
        }
    }

    /// Creates an [`Error::InvalidGamma`] error.
    #[inline]
    pub fn invalid_gamma(name: &'static str, value: f32) -> Self {
        Self::InvalidGamma { name, value }
    }

    /// Creates an [`Error::DegenerateChromaticity`] error.
    #[inline]
    pub fn degenerate_chromaticity(x: f64, y: f64) -> Self {
        Self::DegenerateChromaticity { x, y }
    }

    /// Returns `true` if the error comes from an unrecognized enum value.
    #[inline]
    pub fn is_unknown_option(&self) -> bool {
        matches!(
            self,
            Self::UnknownColorSpace(_)
                | Self::UnknownCurve(_)
                | Self::UnknownAdaptation(_)
                | Self::UnknownName { .. }
        )
    }

    /// Returns `true` if the error is a numeric failure of the matrix math.
    #[inline]
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Self::SingularMatrix(_) | Self::DegenerateChromaticity { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_temperature() {
        let err = Error::invalid_temperature(25001);
        let msg = err.to_string();
        assert!(msg.contains("25001"));
        assert!(msg.contains("4000K"));
        assert!(!err.is_unknown_option());
    }

    #[test]
    fn test_unknown_option() {
        assert!(Error::UnknownCurve(9).is_unknown_option());
        assert!(Error::unknown_name("color space", "rec2020").is_unknown_option());
        assert!(Error::unknown_name("color space", "rec2020")
            .to_string()
            .contains("rec2020"));
    }

    #[test]
    fn test_numeric() {
        assert!(Error::SingularMatrix("ProPhoto RGB").is_numeric());
        assert!(Error::degenerate_chromaticity(0.3, 0.0).is_numeric());
        assert!(!Error::invalid_gamma("gamma", 0.0).is_numeric());
    }
}
