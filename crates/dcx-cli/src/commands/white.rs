//! Color temperature white point command

use crate::WhiteArgs;
use anyhow::{Context, Result};
use dcx_math::{temperature_to_xy, xyy_to_xyz};

pub fn run(args: WhiteArgs, verbose: bool) -> Result<()> {
    let xy = temperature_to_xy(args.kelvin)
        .with_context(|| format!("No white point for {}K", args.kelvin))?;
    let xyz = xyy_to_xyz(xy, 1.0)?;

    if verbose {
        println!("{}K", args.kelvin);
    }
    println!("xy  {:.6} {:.6}", xy.x, xy.y);
    println!("XYZ {:.6} {:.6} {:.6}", xyz.x, xyz.y, xyz.z);
    Ok(())
}
