//! # dcx-color
//!
//! Converts pixels between display-referred RGB and DCI X'Y'Z', the
//! gamma-encoded CIE XYZ used for digital cinema mastering.
//!
//! This crate ties the leaf crates together:
//!
//! - [`Config`] - the full converter configuration
//! - [`rgb_to_xyz_matrix`] - derives the (adapted) RGB to XYZ matrix
//! - [`ForwardConverter`] / [`ReverseConverter`] - per-pixel conversion
//! - [`Converter`] - either of the two, chosen by [`Direction`]
//!
//! # Architecture
//!
//! ```text
//!                    dcx-color
//!                        |
//!          +-------------+-------------+
//!          |                           |
//!    dcx-transfer               dcx-primaries
//!          |                           |
//!          |                       dcx-math
//!          |                           |
//!          +-------------+-------------+
//!                        |
//!                     dcx-core
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use dcx_color::{Config, ForwardConverter, ReverseConverter};
//! use dcx_core::{ChromaticAdaptation, ColorSpace, ResponseCurve};
//!
//! let config = Config::new()
//!     .with_space(ColorSpace::SrgbRec709)
//!     .with_curve(ResponseCurve::Srgb)
//!     .with_adaptation(ChromaticAdaptation::Temperature)
//!     .with_temperature(6500);
//!
//! let fwd = ForwardConverter::new(&config).unwrap();
//! let rev = ReverseConverter::new(&config).unwrap();
//!
//! let xyz = fwd.convert([0.18, 0.18, 0.18]);
//! let rgb = rev.convert(xyz);
//! assert!((rgb[0] - 0.18).abs() < 1e-4);
//! ```
//!
//! # Logging
//!
//! Converter construction logs the resolved configuration and matrix at
//! `debug` level; matrix derivation logs the white points at `trace`.
//! Nothing is logged per pixel.
//!
//! # Feature Flags
//!
//! - `serde` - `Serialize`/`Deserialize` for [`Config`] and the option enums
//!
//! # Dependencies
//!
//! - [`dcx-core`] - option enums, error type
//! - [`dcx-math`] - Mat3, white points, Bradford adaptation
//! - [`dcx-transfer`] - transfer functions
//! - [`dcx-primaries`] - native RGB to XYZ matrices
//! - [`tracing`] - structured logging
//!
//! # Used By
//!
//! - `dcx-cli` - the `dcx` command line tool

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod config;
mod converter;
mod matrix;

pub use config::{Config, DEFAULT_GAMMA, DEFAULT_TEMPERATURE};
pub use converter::{
    Converter, ForwardConverter, PixelConvert, ReverseConverter, DCI_WHITE_LUMINANCE,
    NORMALIZE_SCALE, PROJECTOR_LUMINANCE,
};
pub use matrix::{destination_white, rgb_to_xyz_matrix};

pub use dcx_core::{ChromaticAdaptation, ColorSpace, Direction, Error, Pixel, ResponseCurve, Result};

// Re-export sub-crates for convenience
pub use dcx_math as math;
pub use dcx_primaries as primaries;
pub use dcx_transfer as transfer;

/// Prelude with commonly used types
pub mod prelude {
    pub use crate::{Config, Converter, ForwardConverter, PixelConvert, ReverseConverter};
    pub use dcx_core::prelude::*;
}
