//! Command-line mesh to signed distance field generator.
//!
//! Reads a closed triangle mesh from a Wavefront OBJ file, samples its
//! signed distance field on a regular grid and writes the result as an
//! ASCII `.sdf` file.
//!
//! Two grid modes:
//!
//! - `--dx <spacing> [--padding <cells>]` — the grid covers the mesh
//!   bounds, expanded by `padding` cells on every side.
//! - `--box-min <f> --box-max <f> --resolution <n>` — the mesh is rescaled
//!   and centered into the cube `[min, max]^3`, then sampled on a cubic
//!   `n^3` grid spanning the cube.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use sdf_field::{signed_distance_field, SweepParams};
use sdf_io::{load_obj, save_sdf};
use sdf_types::{GridSpec, Point3};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Generate a dense signed distance field from a closed triangle mesh.
#[derive(Parser, Debug)]
#[command(name = "sdfgen")]
#[command(about = "Mesh to signed distance field generator", long_about = None)]
#[command(version)]
struct Args {
    /// Input mesh (Wavefront OBJ, triangles only)
    input: PathBuf,

    /// Output path (defaults to the input with a .sdf extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Grid spacing; the grid covers the mesh bounds plus padding
    #[arg(long, conflicts_with_all = ["box_min", "box_max", "resolution"])]
    dx: Option<f64>,

    /// Padding cells around the mesh bounds (used with --dx)
    #[arg(long, default_value_t = 2)]
    padding: usize,

    /// Lower corner of the sampling cube (fit-box mode)
    #[arg(
        long,
        requires = "box_max",
        requires = "resolution",
        allow_negative_numbers = true
    )]
    box_min: Option<f64>,

    /// Upper corner of the sampling cube (fit-box mode)
    #[arg(long, requires = "box_min", allow_negative_numbers = true)]
    box_max: Option<f64>,

    /// Nodes per axis of the cubic grid (fit-box mode)
    #[arg(long, requires = "box_min")]
    resolution: Option<usize>,

    /// Maximum number of sweeping completion passes
    #[arg(long, default_value_t = 2)]
    passes: usize,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    run(args)
}

fn run(args: Args) -> Result<()> {
    let mut mesh = load_obj(&args.input)
        .with_context(|| format!("loading mesh from {}", args.input.display()))?;
    info!(
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        "loaded mesh"
    );

    let spec = match (args.dx, args.box_min, args.box_max, args.resolution) {
        (Some(dx), None, None, None) => GridSpec::covering(&mesh.bounds(), dx, args.padding)
            .context("building grid over mesh bounds")?,
        (None, Some(lo), Some(hi), Some(n)) => {
            if !lo.is_finite() || !hi.is_finite() || hi <= lo {
                bail!("--box-max ({hi}) must be greater than --box-min ({lo})");
            }
            if n < 2 {
                bail!("--resolution must be at least 2 nodes per axis");
            }
            mesh.normalize_to_box(lo, hi);
            #[allow(clippy::cast_precision_loss)]
            let dx = (hi - lo) / (n - 1) as f64;
            GridSpec::new(Point3::new(lo, lo, lo), dx, n, n, n)
                .context("building fit-box grid")?
        }
        (None, None, None, None) => {
            bail!("choose a grid mode: --dx, or --box-min/--box-max/--resolution")
        }
        _ => bail!("fit-box mode needs all of --box-min, --box-max and --resolution"),
    };
    info!(
        ni = spec.ni,
        nj = spec.nj,
        nk = spec.nk,
        dx = spec.dx,
        "grid ready"
    );

    let params = SweepParams {
        max_passes: args.passes,
        ..SweepParams::default()
    };
    let field = signed_distance_field(&mesh, &spec, &params)
        .context("computing signed distance field")?;

    let output = args
        .output
        .unwrap_or_else(|| args.input.with_extension("sdf"));
    save_sdf(&field, &output)
        .with_context(|| format!("writing field to {}", output.display()))?;
    info!(output = %output.display(), "wrote distance field");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn dx_mode_parses() {
        let args = Args::try_parse_from(["sdfgen", "model.obj", "--dx", "0.05"]);
        let Ok(args) = args else {
            unreachable!("valid arguments")
        };
        assert_eq!(args.dx, Some(0.05));
        assert_eq!(args.padding, 2);
        assert!(args.output.is_none());
    }

    #[test]
    fn fit_box_mode_parses() {
        let args = Args::try_parse_from([
            "sdfgen",
            "model.obj",
            "--box-min",
            "-1",
            "--box-max",
            "1",
            "--resolution",
            "64",
        ]);
        let Ok(args) = args else {
            unreachable!("valid arguments")
        };
        assert_eq!(args.box_min, Some(-1.0));
        assert_eq!(args.box_max, Some(1.0));
        assert_eq!(args.resolution, Some(64));
    }

    #[test]
    fn negative_bounds_are_values_not_flags() {
        let args = Args::try_parse_from([
            "sdfgen",
            "model.obj",
            "--box-min",
            "-2.5",
            "--box-max",
            "-0.5",
            "--resolution",
            "16",
        ]);
        let Ok(args) = args else {
            unreachable!("negative bounds are valid values")
        };
        assert_eq!(args.box_min, Some(-2.5));
        assert_eq!(args.box_max, Some(-0.5));
    }

    #[test]
    fn modes_are_mutually_exclusive() {
        let err = Args::try_parse_from([
            "sdfgen",
            "model.obj",
            "--dx",
            "0.05",
            "--box-min",
            "-1",
            "--box-max",
            "1",
            "--resolution",
            "64",
        ]);
        let Err(err) = err else {
            unreachable!("conflicting arguments must be rejected")
        };
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn fit_box_mode_requires_all_three() {
        let err = Args::try_parse_from(["sdfgen", "model.obj", "--box-min", "-1"]);
        assert!(err.is_err());
    }

    #[test]
    fn missing_grid_mode_is_a_runtime_error() {
        let args = Args::try_parse_from(["sdfgen", "model.obj"]);
        let Ok(args) = args else {
            unreachable!("valid arguments")
        };
        assert!(args.dx.is_none() && args.box_min.is_none());
    }
}
