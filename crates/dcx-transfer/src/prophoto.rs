//! ProPhoto RGB (ROMM RGB) transfer function.
//!
//! Gamma 1.8 with a linear toe of slope 16.
//!
//! # Reference
//!
//! ANSI/I3A IT10.7666:2003, <http://www.color.org/ROMMRGB.pdf>

/// Linear-light break point of the toe.
pub const LINEAR_BREAK: f32 = 0.001953;

/// Encoded break point of the toe (`16 * LINEAR_BREAK`).
pub const ENCODED_BREAK: f32 = 0.031248;

/// Decodes ProPhoto RGB to linear.
///
/// ```text
/// if V < 0.031248:
///     L = V / 16
/// else:
///     L = V^1.8
/// ```
#[inline]
pub fn decode(v: f32) -> f32 {
    if v < ENCODED_BREAK {
        v / 16.0
    } else {
        v.powf(1.8)
    }
}

/// Encodes linear to ProPhoto RGB.
///
/// ```text
/// if L < 0.001953:
///     V = L * 16
/// else:
///     V = L^(1/1.8)
/// ```
#[inline]
pub fn encode(l: f32) -> f32 {
    if l < LINEAR_BREAK {
        l * 16.0
    } else {
        l.powf(1.0 / 1.8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        for i in -100..=200 {
            let v = i as f32 / 100.0;
            let back = encode(decode(v));
            assert!((v - back).abs() < 1e-5, "v={}, back={}", v, back);
        }
    }

    #[test]
    fn test_break_points_agree() {
        assert!((LINEAR_BREAK * 16.0 - ENCODED_BREAK).abs() < 1e-7);
        assert_eq!(decode(0.016), 0.001);
    }
}
