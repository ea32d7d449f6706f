//! Rec.709 (BT.709) transfer function.
//!
//! The camera OETF and its exact inverse. Note that this is not BT.1886:
//! the pair here is what the Rec.709 response curve option encodes and
//! decodes with.
//!
//! # Reference
//!
//! ITU-R BT.709-6

/// Decodes Rec.709 to linear.
///
/// # Formula
///
/// ```text
/// if V <= 0.081:
///     L = V / 4.5
/// else:
///     L = ((V + 0.099) / 1.099)^(1/0.45)
/// ```
#[inline]
pub fn decode(v: f32) -> f32 {
    if v <= 0.081 {
        v / 4.5
    } else {
        ((v + 0.099) / 1.099).powf(1.0 / 0.45)
    }
}

/// Encodes linear to Rec.709.
///
/// # Formula
///
/// ```text
/// if L <= 0.018:
///     V = 4.5 * L
/// else:
///     V = 1.099 * L^0.45 - 0.099
/// ```
#[inline]
pub fn encode(l: f32) -> f32 {
    if l <= 0.018 {
        l * 4.5
    } else {
        1.099 * l.powf(0.45) - 0.099
    }
}
