//! Pixel conversion command
//!
//! Converts a single pixel given on the command line, or streams
//! whitespace-separated triples from stdin (one pixel per line).

use crate::ConvertArgs;
use anyhow::{bail, Context, Result};
use dcx_color::{Converter, PixelConvert};
use dcx_core::Direction;
use std::io::{self, BufRead, Write};
use tracing::debug;

pub fn run(args: ConvertArgs, verbose: bool) -> Result<()> {
    let config = args.config.resolve()?;
    let direction = if args.reverse {
        Direction::Reverse
    } else {
        Direction::Forward
    };
    let converter = Converter::new(direction, &config)
        .with_context(|| format!("Failed to build {} converter", direction))?;

    if verbose {
        eprintln!("{}: {:?}", direction, config);
    }

    if !args.values.is_empty() {
        let pixel = [args.values[0], args.values[1], args.values[2]];
        println!("{}", super::format_pixel(converter.convert(pixel), args.precision));
        return Ok(());
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let count = convert_lines(&converter, stdin.lock(), stdout.lock(), args.precision)?;
    debug!(count, "converted pixels from stdin");
    Ok(())
}

/// Parses one `R G B` line. Blank lines and `#` comments yield `None`.
fn parse_line(line: &str) -> Result<Option<[f32; 3]>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let values = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<f32>().with_context(|| format!("Not a number: '{}'", s)))
        .collect::<Result<Vec<_>>>()?;

    match values.as_slice() {
        &[a, b, c] => Ok(Some([a, b, c])),
        _ => bail!("Expected 3 values, got {}", values.len()),
    }
}

/// Converts every pixel line of `input`, writing one result line each.
/// Returns the number of pixels converted.
pub fn convert_lines(
    converter: &impl PixelConvert,
    input: impl BufRead,
    mut output: impl Write,
    precision: usize,
) -> Result<usize> {
    let mut count = 0;
    for (index, line) in input.lines().enumerate() {
        let line = line.context("Failed to read input")?;
        let Some(pixel) = parse_line(&line).with_context(|| format!("Line {}", index + 1))? else {
            continue;
        };
        writeln!(output, "{}", super::format_pixel(converter.convert(pixel), precision))?;
        count += 1;
    }
    output.flush()?;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dcx_color::{Config, ForwardConverter, ReverseConverter};

    #[test]
    fn test_parse_line() {
        assert_eq!(parse_line("0.1 0.2 0.3").unwrap(), Some([0.1, 0.2, 0.3]));
        assert_eq!(parse_line("  -1,2, 3 ").unwrap(), Some([-1.0, 2.0, 3.0]));
        assert_eq!(parse_line("").unwrap(), None);
        assert_eq!(parse_line("# header").unwrap(), None);
        assert!(parse_line("0.1 0.2").is_err());
        assert!(parse_line("0.1 0.2 0.3 0.4").is_err());
        assert!(parse_line("0.1 red 0.3").is_err());
    }

    #[test]
    fn test_convert_lines() {
        let fwd = ForwardConverter::new(&Config::default()).unwrap();
        let input = "0 0 0\n\n# mid grey\n0.18 0.18 0.18\n";
        let mut out = Vec::new();

        let count = convert_lines(&fwd, input.as_bytes(), &mut out, 4).unwrap();
        assert_eq!(count, 2);

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "0.0000 0.0000 0.0000");
        assert_eq!(
            lines[1],
            super::super::format_pixel(fwd.convert([0.18, 0.18, 0.18]), 4)
        );
    }

    #[test]
    fn test_convert_lines_roundtrip() {
        let config = Config::default();
        let fwd = ForwardConverter::new(&config).unwrap();
        let rev = ReverseConverter::new(&config).unwrap();

        let mut xyz = Vec::new();
        convert_lines(&fwd, "0.25 0.5 0.75\n".as_bytes(), &mut xyz, 9).unwrap();
        let mut rgb = Vec::new();
        convert_lines(&rev, xyz.as_slice(), &mut rgb, 9).unwrap();

        let back = parse_line(std::str::from_utf8(&rgb).unwrap()).unwrap().unwrap();
        for (a, b) in back.iter().zip([0.25, 0.5, 0.75]) {
            assert!((a - b).abs() < 1e-4);
        }
    }

    #[test]
    fn test_convert_lines_reports_line() {
        let fwd = ForwardConverter::new(&Config::default()).unwrap();
        let err = convert_lines(&fwd, "0 0 0\n1 2\n".as_bytes(), Vec::new(), 6).unwrap_err();
        assert!(format!("{err:#}").contains("Line 2"));
    }
}
