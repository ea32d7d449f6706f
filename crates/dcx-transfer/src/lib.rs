//! # dcx-transfer
//!
//! Transfer functions for the RGB and X'Y'Z' sides of a DCI conversion.
//!
//! Every curve comes as a matched pair:
//!
//! - **decode**: encoded (display) value -> linear light
//! - **encode**: linear light -> encoded value
//!
//! so that `decode(encode(x)) == x` for all finite `x`, negative values
//! included. Negative linear values appear after matrix transforms of
//! out-of-gamut colors; pure power curves therefore use the odd-symmetric
//! extension `sign(x) * |x|^g` ([`gamma::mirror_pow`]) instead of clamping
//! or producing NaN.
//!
//! # Supported Transfer Functions
//!
//! | Module | Curve | Decode |
//! |--------|-------|--------|
//! | [`srgb`] | IEC 61966-2-1 | `x <= 0.04045 ? x/12.92 : ((x+0.055)/1.055)^2.4` |
//! | [`rec709`] | ITU-R BT.709 | `x <= 0.081 ? x/4.5 : ((x+0.099)/1.099)^(1/0.45)` |
//! | [`prophoto`] | ROMM RGB | `x < 0.031248 ? x/16 : x^1.8` |
//! | [`gamma`] | pure power (DCI-P3 2.6, user gamma, X'Y'Z') | `sign(x) * abs(x)^g` |
//!
//! [`Transfer`] binds a [`ResponseCurve`](dcx_core::ResponseCurve) and its
//! exponent into one value that dispatches to the right pair.
//!
//! # Usage
//!
//! ```rust
//! use dcx_transfer::{srgb, Transfer};
//! use dcx_core::ResponseCurve;
//!
//! let linear = srgb::decode(0.5);
//! assert!((srgb::encode(linear) - 0.5).abs() < 1e-6);
//!
//! let tf = Transfer::new(ResponseCurve::Gamma, 2.2).unwrap();
//! assert!((tf.encode(tf.decode(-0.4)) + 0.4).abs() < 1e-6);
//! ```
//!
//! # Dependencies
//!
//! - [`dcx-core`] - `ResponseCurve` and the error type
//!
//! # Used By
//!
//! - `dcx-color` - forward / reverse converters

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod gamma;
pub mod prophoto;
pub mod rec709;
pub mod srgb;

mod curve;

pub use curve::Transfer;
pub use gamma::{mirror_pow, power_decode, power_encode, DCI_GAMMA};
