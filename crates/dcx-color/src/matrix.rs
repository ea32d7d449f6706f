//! RGB to XYZ matrix derivation.
//!
//! The matrix a converter uses is a pure function of the color space, the
//! adaptation option and (for the temperature path) the temperature:
//!
//! ```text
//! native   = RGB->XYZ of the color space, relative to its native white
//! adapt    = Bradford(native white -> destination white)
//! M        = adapt * native
//! ```
//!
//! With [`ChromaticAdaptation::None`] the native matrix is returned as is.

use dcx_core::{ChromaticAdaptation, Result};
use dcx_math::{
    bradford_adapt, temperature_to_white, Mat3, Vec3, D50_XY, D55_XY, D60_XY, D65_XY, DCI_XY,
};
use dcx_primaries::{native_rgb_to_xyz, native_white};
use tracing::trace;

use crate::Config;

/// Destination white point (XYZ, Y=1) for an adaptation option.
///
/// Returns `Ok(None)` for [`ChromaticAdaptation::None`]. `kelvin` is only
/// read for [`ChromaticAdaptation::Temperature`].
///
/// # Example
///
/// ```rust
/// use dcx_color::destination_white;
/// use dcx_core::ChromaticAdaptation;
///
/// assert_eq!(destination_white(ChromaticAdaptation::None, 0).unwrap(), None);
///
/// let d65 = destination_white(ChromaticAdaptation::D65, 0).unwrap().unwrap();
/// assert!((d65.x - 0.95046).abs() < 1e-4);
///
/// assert!(destination_white(ChromaticAdaptation::Temperature, 30000).is_err());
/// ```
pub fn destination_white(adaptation: ChromaticAdaptation, kelvin: i32) -> Result<Option<Vec3>> {
    let white = match adaptation {
        ChromaticAdaptation::None => return Ok(None),
        ChromaticAdaptation::D50 => D50_XY.to_xyz()?,
        ChromaticAdaptation::D55 => D55_XY.to_xyz()?,
        ChromaticAdaptation::D60 => D60_XY.to_xyz()?,
        ChromaticAdaptation::D65 => D65_XY.to_xyz()?,
        ChromaticAdaptation::Dci => DCI_XY.to_xyz()?,
        ChromaticAdaptation::Temperature => temperature_to_white(kelvin)?,
    };
    Ok(Some(white))
}

/// Linear RGB to (adapted) XYZ matrix for a configuration.
///
/// Only `space`, `adaptation` and `temperature` are read. Any combination
/// of color space and destination white is accepted.
///
/// # Example
///
/// ```rust
/// use dcx_color::{rgb_to_xyz_matrix, Config};
/// use dcx_core::ChromaticAdaptation;
/// use dcx_primaries::SRGB_TO_XYZ;
///
/// let plain = Config::new().with_adaptation(ChromaticAdaptation::None);
/// assert_eq!(rgb_to_xyz_matrix(&plain).unwrap(), SRGB_TO_XYZ);
/// ```
pub fn rgb_to_xyz_matrix(config: &Config) -> Result<Mat3> {
    let native = native_rgb_to_xyz(config.space)?;

    let Some(dst) = destination_white(config.adaptation, config.temperature)? else {
        return Ok(native);
    };
    let src = native_white(config.space)?;

    trace!(
        space = %config.space,
        adaptation = %config.adaptation,
        src = ?src.to_array(),
        dst = ?dst.to_array(),
        "bradford white points"
    );

    Ok(bradford_adapt(src, dst) * native)
}
