//! # dcx-core
//!
//! Core types shared by every crate of the DCI XYZ converter.
//!
//! - [`Error`] / [`Result`] - configuration errors raised at construction time
//! - [`ColorSpace`] - source/destination RGB primaries and native white
//! - [`ResponseCurve`] - which transfer function pair encodes the RGB side
//! - [`ChromaticAdaptation`] - destination (projector) white point policy
//! - [`Direction`] - RGB to X'Y'Z' or X'Y'Z' to RGB
//!
//! ## Crate Structure
//!
//! ```text
//! dcx-core (this crate)
//!    ^
//!    |
//!    +-- dcx-math (Mat3, white points, Bradford)
//!    +-- dcx-transfer (transfer functions)
//!    +-- dcx-primaries (RGB to XYZ matrices)
//!    +-- dcx-color (forward / reverse converters)
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - derive `Serialize`/`Deserialize` for the configuration enums

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod options;

pub use error::*;
pub use options::*;

/// A single pixel: (R, G, B) or (X', Y', Z') depending on direction.
pub type Pixel = [f32; 3];

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::options::{ChromaticAdaptation, ColorSpace, Direction, ResponseCurve};
    pub use crate::Pixel;
}
