//! Pure power transfer functions with odd-symmetric extension.
//!
//! Used for the DCI-P3 response curve (fixed exponent 2.6), the
//! user-supplied gamma curve, and the X'Y'Z' encoding of the cinema side.
//!
//! A plain `powf` on a negative base is NaN. Matrix transforms of
//! out-of-gamut colors produce negative components, so every power here is
//! mirrored through the origin:
//!
//! ```text
//! f(x) = sign(x) * |x|^g
//! ```
//!
//! This keeps the encode/decode pair exactly invertible on the whole real
//! line.

/// Exponent of the DCI-P3 response curve and the customary X'Y'Z' gamma.
pub const DCI_GAMMA: f32 = 2.6;

/// Odd-symmetric power: `sign(v) * |v|^exp`.
///
/// # Example
///
/// ```rust
/// use dcx_transfer::gamma::mirror_pow;
///
/// assert_eq!(mirror_pow(-4.0, 0.5), -2.0);
/// assert_eq!(mirror_pow(4.0, 0.5), 2.0);
/// ```
#[inline]
pub fn mirror_pow(v: f32, exp: f32) -> f32 {
    if v < 0.0 {
        -(-v).powf(exp)
    } else {
        v.powf(exp)
    }
}

/// Decodes a power-law value to linear: `sign(v) * |v|^gamma`.
#[inline]
pub fn power_decode(v: f32, gamma: f32) -> f32 {
    mirror_pow(v, gamma)
}

/// Encodes linear to a power-law value: `sign(l) * |l|^(1/gamma)`.
///
/// # Example
///
/// ```rust
/// use dcx_transfer::gamma::{power_decode, power_encode};
///
/// let encoded = power_encode(0.218, 2.2);
/// assert!((encoded - 0.5).abs() < 0.01);
/// assert!((power_decode(encoded, 2.2) - 0.218).abs() < 1e-6);
/// ```
#[inline]
pub fn power_encode(l: f32, gamma: f32) -> f32 {
    mirror_pow(l, 1.0 / gamma)
}

/// DCI-P3 decode (power 2.6).
#[inline]
pub fn p3_decode(v: f32) -> f32 {
    power_decode(v, DCI_GAMMA)
}

/// DCI-P3 encode (power 1/2.6).
#[inline]
pub fn p3_encode(l: f32) -> f32 {
    power_encode(l, DCI_GAMMA)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gamma_identity() {
        assert_eq!(power_decode(0.5, 1.0), 0.5);
        assert_eq!(power_encode(-0.5, 1.0), -0.5);
    }

    #[test]
    fn test_mirror_is_odd() {
        for i in 1..=100 {
            let x = i as f32 / 50.0;
            assert_eq!(mirror_pow(-x, 2.6), -mirror_pow(x, 2.6));
            assert!(mirror_pow(-x, 1.0 / 2.6).is_finite());
        }
        assert_eq!(mirror_pow(0.0, 2.6), 0.0);
    }

    #[test]
    fn test_roundtrip_signed() {
        for gamma in [0.45, 1.8, 2.2, 2.6, 5.0] {
            for i in -100..=200 {
                let v = i as f32 / 100.0;
                let back = power_encode(power_decode(v, gamma), gamma);
                assert!((v - back).abs() < 1e-4, "gamma={}, v={}, back={}", gamma, v, back);
            }
        }
    }

    #[test]
    fn test_p3() {
        assert!((p3_decode(0.5) - 0.5f32.powf(2.6)).abs() < 1e-7);
        assert!((p3_encode(p3_decode(0.75)) - 0.75).abs() < 1e-6);
    }
}
