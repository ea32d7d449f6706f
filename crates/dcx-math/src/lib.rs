//! # dcx-math
//!
//! Math primitives for the DCI XYZ converter:
//!
//! - [`Mat3`] - 3x3 matrices with exact adjugate inversion
//! - [`Vec3`] - RGB / XYZ triplets
//! - [`Chromaticity`], [`xyy_to_xyz`], [`temperature_to_white`] - white points
//! - [`bradford_adapt`] - Bradford chromatic adaptation
//!
//! # Design
//!
//! All matrix operations assume **row-major** storage and **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! A row-vector formulation (`pixel * M`) is the same transform with `M`
//! transposed; nothing in this workspace stores transposed matrices.
//!
//! # Usage
//!
//! ```rust
//! use dcx_math::{bradford_adapt, temperature_to_white, D65_XY, Vec3};
//!
//! let projector = temperature_to_white(5900).unwrap();
//! let d65 = D65_XY.to_xyz().unwrap();
//! let adapt = bradford_adapt(d65, projector);
//!
//! let white = adapt * d65;
//! assert!((white.x - projector.x).abs() < 1e-3);
//! ```
//!
//! # Dependencies
//!
//! - [`glam`] - interop with the wider Rust math ecosystem
//! - [`dcx-core`] - error type

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod adapt;
mod mat3;
mod vec3;
mod white;

pub use adapt::*;
pub use mat3::*;
pub use vec3::*;
pub use white::*;

/// Re-export glam types for direct use
pub mod glam {
    pub use ::glam::{Mat3 as GlamMat3, Vec3 as GlamVec3};
}
