//! CLI command implementations

pub mod convert;
pub mod matrix;
pub mod white;

use crate::ConfigArgs;
use anyhow::{Context, Result};
use dcx_color::Config;
use std::path::Path;

/// Load a YAML preset
pub fn load_preset(path: &Path) -> Result<Config> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read preset: {}", path.display()))?;
    serde_yaml::from_str(&text)
        .with_context(|| format!("Failed to parse preset: {}", path.display()))
}

impl ConfigArgs {
    /// Preset (or defaults) with command line overrides applied, validated.
    pub fn resolve(&self) -> Result<Config> {
        let mut config = match &self.preset {
            Some(path) => load_preset(path)?,
            None => Config::default(),
        };

        if let Some(space) = self.space {
            config.space = space;
        }
        if let Some(curve) = self.curve {
            config.curve = curve;
        }
        if let Some(gamma) = self.gamma {
            config.gamma = gamma;
        }
        if let Some(adaptation) = self.adaptation {
            config.adaptation = adaptation;
        }
        if let Some(kelvin) = self.temperature {
            config.temperature = kelvin;
        }
        if self.normalize {
            config.normalize = true;
        }
        if let Some(xyz_gamma) = self.xyz_gamma {
            config.xyz_gamma = xyz_gamma;
        }

        config.validate().context("Invalid configuration")?;
        Ok(config)
    }
}

/// Formats one pixel as space separated decimals
pub fn format_pixel(pixel: [f32; 3], precision: usize) -> String {
    format!(
        "{:.p$} {:.p$} {:.p$}",
        pixel[0],
        pixel[1],
        pixel[2],
        p = precision
    )
}
