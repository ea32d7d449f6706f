//! Bradford chromatic adaptation.
//!
//! Projection bulbs are rarely D65: many are warmer. Chromatic adaptation
//! maps XYZ values relative to one white point onto another so that neutral
//! stays neutral. The Bradford method works in a "sharpened" cone response
//! space and is the same transform ICC profiles use.
//!
//! # Usage
//!
//! ```rust
//! use dcx_math::{bradford_adapt, D50_XY, D65_XY};
//!
//! let d65 = D65_XY.to_xyz().unwrap();
//! let d50 = D50_XY.to_xyz().unwrap();
//! let m = bradford_adapt(d65, d50);
//!
//! let result = m * d65;
//! assert!((result.x - d50.x).abs() < 1e-3);
//! assert!((result.z - d50.z).abs() < 1e-3);
//! ```

use crate::{Mat3, Vec3};

/// Bradford cone primary matrix (XYZ to cone response).
///
/// # Reference
///
/// Lam, K.M. (1985). Metamerism and Colour Constancy.
/// Lindbloom, B. Chromatic Adaptation.
pub const BRADFORD: Mat3 = Mat3::from_rows([
    [0.895100, 0.266400, -0.161400],
    [-0.750200, 1.713500, 0.036700],
    [0.038900, -0.068500, 1.029600],
]);

/// Published inverse of [`BRADFORD`] (cone response to XYZ).
///
/// Kept as the tabulated literal rather than recomputed, so results match
/// other Bradford implementations digit for digit.
pub const BRADFORD_INV: Mat3 = Mat3::from_rows([
    [0.986993, -0.147054, 0.159963],
    [0.432305, 0.518360, 0.049291],
    [-0.008529, 0.040043, 0.968487],
]);

/// Von Kries-style adaptation through an arbitrary cone space.
///
/// `cone` maps XYZ to cone responses and `cone_inv` maps back. The result
/// maps XYZ relative to `src_white` onto XYZ relative to `dst_white`:
///
/// ```text
/// ratio_i = (cone * dst_white)_i / (cone * src_white)_i
/// M       = cone_inv * diag(ratio) * cone
/// ```
pub fn adapt_matrix(cone: Mat3, cone_inv: Mat3, src_white: Vec3, dst_white: Vec3) -> Mat3 {
    let src_cone = cone * src_white;
    let dst_cone = cone * dst_white;
    let ratio = dst_cone / src_cone;

    cone_inv * Mat3::from_diagonal(ratio) * cone
}

/// Bradford adaptation matrix from `src_white` to `dst_white`.
///
/// Both whites are XYZ with Y = 1. Adapting a white point onto itself
/// yields the identity (to the precision of [`BRADFORD_INV`]).
#[inline]
pub fn bradford_adapt(src_white: Vec3, dst_white: Vec3) -> Mat3 {
    adapt_matrix(BRADFORD, BRADFORD_INV, src_white, dst_white)
}
