//! dcx - DCI X'Y'Z' pixel converter
//!
//! Feeds pixels one at a time through the forward or reverse converter,
//! the way a host effect would.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use dcx_core::{ChromaticAdaptation, ColorSpace, ResponseCurve};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "dcx")]
#[command(author, version, about = "Convert pixels between RGB and DCI X'Y'Z'")]
#[command(long_about = "
Converts display-referred RGB pixels to gamma-encoded DCI X'Y'Z' and back.

Examples:
  dcx convert 0.18 0.18 0.18                       # Rec.709 -> X'Y'Z', 5900K projector
  dcx convert --reverse 0.5 0.5 0.5                # X'Y'Z' -> Rec.709
  dcx convert --space p3 --curve p3 --adaptation dci 1 0 0
  dcx convert --preset projector.yaml < pixels.txt # One 'R G B' triple per line
  dcx matrix --space prophoto --adaptation d50     # Print derived matrices
  dcx white 6500                                   # XYZ white for 6500K
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert pixels (arguments or stdin)
    #[command(visible_alias = "c")]
    Convert(ConvertArgs),

    /// Print the derived RGB to XYZ matrix and its inverse
    #[command(visible_alias = "m")]
    Matrix(MatrixArgs),

    /// Print the white point for a color temperature
    #[command(visible_alias = "w")]
    White(WhiteArgs),
}

/// Converter configuration shared by `convert` and `matrix`.
///
/// Flags override values loaded from `--preset`.
#[derive(Args, Debug, Default)]
struct ConfigArgs {
    /// YAML preset with any of: space, curve, gamma, adaptation,
    /// temperature, normalize, xyz-gamma
    #[arg(long)]
    preset: Option<PathBuf>,

    /// RGB color space (srgb, prophoto, p3)
    #[arg(short, long)]
    space: Option<ColorSpace>,

    /// Response curve (srgb, rec709, prophoto, p3, linear, gamma)
    #[arg(short, long)]
    curve: Option<ResponseCurve>,

    /// Exponent for the gamma curve
    #[arg(short, long)]
    gamma: Option<f32>,

    /// Chromatic adaptation (none, d50, d55, d60, d65, dci, temperature)
    #[arg(short, long)]
    adaptation: Option<ChromaticAdaptation>,

    /// Projector color temperature in kelvin (4000..=25000)
    #[arg(short, long)]
    temperature: Option<i32>,

    /// Scale luminance by 48/52.37
    #[arg(short, long)]
    normalize: bool,

    /// X'Y'Z' encoding power
    #[arg(long)]
    xyz_gamma: Option<f32>,
}

#[derive(Args)]
struct ConvertArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Convert X'Y'Z' to RGB instead of RGB to X'Y'Z'
    #[arg(short, long)]
    reverse: bool,

    /// Decimal places in the output
    #[arg(short, long, default_value = "6")]
    precision: usize,

    /// One pixel; reads triples from stdin when omitted
    #[arg(num_args = 3, value_names = ["C0", "C1", "C2"], allow_negative_numbers = true)]
    values: Vec<f32>,
}

#[derive(Args)]
struct MatrixArgs {
    #[command(flatten)]
    config: ConfigArgs,
}

#[derive(Args)]
struct WhiteArgs {
    /// Color temperature in kelvin (4000..=25000)
    kelvin: i32,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Convert(args) => commands::convert::run(args, cli.verbose),
        Commands::Matrix(args) => commands::matrix::run(args, cli.verbose),
        Commands::White(args) => commands::white::run(args, cli.verbose),
    }
}
