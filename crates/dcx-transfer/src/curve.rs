//! Response curve dispatch.

use crate::{gamma, prophoto, rec709, srgb};
use dcx_core::{Error, ResponseCurve, Result};

/// A [`ResponseCurve`] bound to its exponent.
///
/// Only [`ResponseCurve::Gamma`] reads the exponent; the other curves are
/// fixed. Construction validates the exponent so that `1 / gamma` is always
/// well defined on the encode side.
///
/// # Example
///
/// ```rust
/// use dcx_core::ResponseCurve;
/// use dcx_transfer::Transfer;
///
/// let tf = Transfer::new(ResponseCurve::Srgb, 2.2).unwrap();
/// let linear = tf.decode_rgb([0.5, 0.5, 0.5]);
/// assert!((linear[0] - 0.214).abs() < 0.01);
///
/// assert!(Transfer::new(ResponseCurve::Gamma, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transfer {
    curve: ResponseCurve,
    gamma: f32,
}

impl Transfer {
    /// Binds `curve` to `gamma`.
    ///
    /// Fails with [`Error::InvalidGamma`] when the curve uses the exponent
    /// and it is not finite and strictly positive.
    pub fn new(curve: ResponseCurve, gamma: f32) -> Result<Self> {
        if curve.uses_gamma() && !(gamma.is_finite() && gamma > 0.0) {
            return Err(Error::invalid_gamma("gamma", gamma));
        }
        Ok(Self { curve, gamma })
    }

    /// The bound curve.
    #[inline]
    pub fn curve(&self) -> ResponseCurve {
        self.curve
    }

    /// The bound exponent (meaningful for [`ResponseCurve::Gamma`] only).
    #[inline]
    pub fn gamma(&self) -> f32 {
        self.gamma
    }

    /// Encoded value to linear light.
    #[inline]
    pub fn decode(&self, v: f32) -> f32 {
        match self.curve {
            ResponseCurve::Srgb => srgb::decode(v),
            ResponseCurve::Rec709 => rec709::decode(v),
            ResponseCurve::ProPhotoRgb => prophoto::decode(v),
            ResponseCurve::DciP3 => gamma::p3_decode(v),
            ResponseCurve::Gamma => gamma::power_decode(v, self.gamma),
            ResponseCurve::Linear => v,
        }
    }

    /// Linear light to encoded value.
    #[inline]
    pub fn encode(&self, l: f32) -> f32 {
        match self.curve {
            ResponseCurve::Srgb => srgb::encode(l),
            ResponseCurve::Rec709 => rec709::encode(l),
            ResponseCurve::ProPhotoRgb => prophoto::encode(l),
            ResponseCurve::DciP3 => gamma::p3_encode(l),
            ResponseCurve::Gamma => gamma::power_encode(l, self.gamma),
            ResponseCurve::Linear => l,
        }
    }

    /// Applies [`decode`](Self::decode) to each channel.
    #[inline]
    pub fn decode_rgb(&self, rgb: [f32; 3]) -> [f32; 3] {
        rgb.map(|v| self.decode(v))
    }

    /// Applies [`encode`](Self::encode) to each channel.
    #[inline]
    pub fn encode_rgb(&self, rgb: [f32; 3]) -> [f32; 3] {
        rgb.map(|l| self.encode(l))
    }
}
