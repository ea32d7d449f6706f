//! Integration tests for the dcx crates.
//!
//! These drive the converters the way a host effect does: options arrive
//! as popup menu indices or as a saved preset, a converter is built once,
//! and pixels are pushed through it one at a time.

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use dcx_color::{Config, Converter, ForwardConverter, PixelConvert, ReverseConverter};
    use dcx_core::{ChromaticAdaptation, ColorSpace, Direction, Error, ResponseCurve};
    use dcx_primaries::native_rgb_to_xyz;

    /// Builds a configuration from host menu indices.
    fn from_menu(space: u32, curve: u32, adaptation: u32) -> dcx_core::Result<Config> {
        Ok(Config::new()
            .with_space(ColorSpace::from_index(space)?)
            .with_curve(ResponseCurve::from_index(curve)?)
            .with_adaptation(ChromaticAdaptation::from_index(adaptation)?))
    }

    #[test]
    fn test_every_menu_combination_roundtrips() {
        let pixel = [0.5, 0.4, 0.3];
        for space in 0..3 {
            for curve in 0..6 {
                for adaptation in 0..7 {
                    let config = from_menu(space, curve, adaptation).unwrap();
                    let fwd = Converter::new(Direction::Forward, &config).unwrap();
                    let rev = Converter::new(Direction::Reverse, &config).unwrap();

                    let back = rev.convert(fwd.convert(pixel));
                    for i in 0..3 {
                        assert_abs_diff_eq!(back[i], pixel[i], epsilon = 1e-4);
                    }
                }
            }
        }
    }

    #[test]
    fn test_unknown_menu_index() {
        assert_eq!(from_menu(3, 0, 0).unwrap_err(), Error::UnknownColorSpace(3));
        assert_eq!(from_menu(0, 6, 0).unwrap_err(), Error::UnknownCurve(6));
        assert_eq!(from_menu(0, 0, 7).unwrap_err(), Error::UnknownAdaptation(7));
    }

    #[test]
    fn test_gamma_slider_extremes() {
        let pixels = [[0.5, 0.4, 0.3], [0.9, 0.8, 0.7]];
        for gamma in [0.01, 5.0] {
            let config = Config::new()
                .with_curve(ResponseCurve::Gamma)
                .with_gamma(gamma);
            let fwd = ForwardConverter::new(&config).unwrap();
            let rev = ReverseConverter::new(&config).unwrap();
            for p in pixels {
                let back = rev.convert(fwd.convert(p));
                for i in 0..3 {
                    assert_abs_diff_eq!(back[i], p[i], epsilon = 1e-4);
                }
            }
        }
    }

    #[test]
    fn test_temperature_slider_bounds() {
        for kelvin in [4000, 25000] {
            let config = Config::new().with_temperature(kelvin);
            assert!(ForwardConverter::new(&config).is_ok());
        }
        for kelvin in [3999, 25001] {
            let config = Config::new().with_temperature(kelvin);
            assert_eq!(
                ForwardConverter::new(&config).unwrap_err(),
                Error::InvalidTemperature { kelvin }
            );
        }
    }

    #[test]
    fn test_p3_grey_keeps_luminance() {
        // P3 primaries, P3 curve and DCI white: no adaptation happens and
        // the 2.6 decode is undone by the 2.6 X'Y'Z' encode, so Y' == grey.
        let config = Config::new()
            .with_space(ColorSpace::DciP3)
            .with_curve(ResponseCurve::DciP3)
            .with_adaptation(ChromaticAdaptation::Dci);
        let fwd = ForwardConverter::new(&config).unwrap();
        let white = native_rgb_to_xyz(ColorSpace::DciP3).unwrap() * dcx_math::Vec3::ONE;

        for v in [0.1, 0.5, 1.0] {
            let xyz = fwd.convert([v, v, v]);
            assert_abs_diff_eq!(xyz[1], v, epsilon = 1e-4);
            assert_abs_diff_eq!(xyz[0], v * white.x.powf(1.0 / 2.6), epsilon = 1e-4);
            assert_abs_diff_eq!(xyz[2], v * white.z.powf(1.0 / 2.6), epsilon = 1e-4);
        }
    }

    #[test]
    fn test_adaptation_changes_output() {
        let base = Config::new().with_adaptation(ChromaticAdaptation::None);
        let plain = ForwardConverter::new(&base).unwrap().convert([0.5, 0.5, 0.5]);
        for adaptation in [
            ChromaticAdaptation::D50,
            ChromaticAdaptation::Dci,
            ChromaticAdaptation::Temperature,
        ] {
            let adapted = ForwardConverter::new(&base.with_adaptation(adaptation))
                .unwrap()
                .convert([0.5, 0.5, 0.5]);
            let diff = (0..3).map(|i| (adapted[i] - plain[i]).abs()).fold(0.0, f32::max);
            assert!(diff > 1e-3, "{adaptation} had no effect");
        }
    }

    #[test]
    fn test_preset_yaml() {
        let yaml = "\
space: prophoto
curve: gamma
gamma: 1.8
adaptation: temperature
temperature: 6500
normalize: true
xyz-gamma: 2.6
";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.space, ColorSpace::ProPhotoRgb);
        assert_eq!(config.curve, ResponseCurve::Gamma);
        assert_eq!(config.gamma, 1.8);
        assert_eq!(config.adaptation, ChromaticAdaptation::Temperature);
        assert_eq!(config.temperature, 6500);
        assert!(config.normalize);
        assert!(config.validate().is_ok());

        let text = serde_yaml::to_string(&config).unwrap();
        assert!(text.contains("xyz-gamma"));
        assert_eq!(serde_yaml::from_str::<Config>(&text).unwrap(), config);
    }

    #[test]
    fn test_preset_yaml_rejects_unknown_option() {
        assert!(serde_yaml::from_str::<Config>("curve: pq\n").is_err());
        assert_eq!(serde_yaml::from_str::<Config>("{}").unwrap(), Config::default());
    }

    #[test]
    fn test_converters_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ForwardConverter>();
        assert_send_sync::<ReverseConverter>();
        assert_send_sync::<Converter>();
    }
}
