//! Encode/decode inverse laws for every response curve.
//!
//! For each non-linear curve both compositions must be the identity on
//! a set of samples spanning negative, zero, in-range and super-white
//! values.

use approx::assert_abs_diff_eq;
use dcx_core::ResponseCurve;
use dcx_transfer::Transfer;

const SAMPLES: [f32; 6] = [-2.0, -0.5, 0.0, 0.5, 1.0, 2.0];

fn curves() -> impl Iterator<Item = Transfer> {
    ResponseCurve::ALL
        .into_iter()
        .map(|curve| Transfer::new(curve, 2.2).unwrap())
}

#[test]
fn decode_then_encode_is_identity() {
    for tf in curves() {
        for x in SAMPLES {
            let back = tf.encode(tf.decode(x));
            assert_abs_diff_eq!(back, x, epsilon = 1e-4);
        }
    }
}

#[test]
fn encode_then_decode_is_identity() {
    for tf in curves() {
        for x in SAMPLES {
            let back = tf.decode(tf.encode(x));
            assert_abs_diff_eq!(back, x, epsilon = 1e-4);
        }
    }
}

#[test]
fn negative_inputs_never_produce_nan() {
    for tf in curves() {
        for x in SAMPLES {
            assert!(tf.decode(x).is_finite(), "{} decode({})", tf.curve(), x);
            assert!(tf.encode(x).is_finite(), "{} encode({})", tf.curve(), x);
        }
    }
}

#[test]
fn power_curves_are_odd_symmetric() {
    let power = curves().filter(|tf| {
        matches!(
            tf.curve(),
            ResponseCurve::DciP3 | ResponseCurve::Gamma | ResponseCurve::Linear
        )
    });
    for tf in power {
        for x in [0.25, 0.5, 1.0, 2.0] {
            assert_abs_diff_eq!(tf.decode(-x), -tf.decode(x), epsilon = 1e-6);
        }
    }
}
