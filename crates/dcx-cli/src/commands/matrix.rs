//! Matrix inspection command

use crate::MatrixArgs;
use anyhow::{Context, Result};
use dcx_color::primaries::native_white;
use dcx_color::{destination_white, rgb_to_xyz_matrix};
use dcx_math::Mat3;

pub fn run(args: MatrixArgs, verbose: bool) -> Result<()> {
    let config = args.config.resolve()?;
    let m = rgb_to_xyz_matrix(&config).context("Failed to derive RGB to XYZ matrix")?;
    let inv = m.try_inverse("RGB to XYZ").context("Failed to invert matrix")?;

    println!("{} / {}", config.space, config.adaptation);
    if verbose {
        let src = native_white(config.space)?;
        println!("native white:      {}", format_row(src.to_array()));
        if let Some(dst) = destination_white(config.adaptation, config.temperature)? {
            println!("destination white: {}", format_row(dst.to_array()));
        }
    }

    print!("{}", format_matrix("RGB to XYZ", &m));
    print!("{}", format_matrix("XYZ to RGB", &inv));
    Ok(())
}

fn format_row(row: [f32; 3]) -> String {
    format!("{:>11.7} {:>11.7} {:>11.7}", row[0], row[1], row[2])
}

fn format_matrix(title: &str, m: &Mat3) -> String {
    let mut out = format!("{}:\n", title);
    for row in m.to_rows() {
        out.push_str("  ");
        out.push_str(&format_row(row));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_matrix() {
        let text = format_matrix("I", &Mat3::IDENTITY);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "I:");
        assert_eq!(
            lines[1].split_whitespace().collect::<Vec<_>>(),
            ["1.0000000", "0.0000000", "0.0000000"]
        );
    }
}
