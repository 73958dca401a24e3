//! ASCII `.sdf` grid format.
//!
//! Layout, one token group per line:
//!
//! ```text
//! ni nj nk
//! origin_x origin_y origin_z
//! dx
//! value            (ni * nj * nk lines, ascending i, then j, then k)
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use sdf_field::DistanceGrid;
use sdf_types::{GridSpec, Point3};

use crate::error::{IoError, IoResult};

/// Write a distance field to an ASCII `.sdf` file.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn save_sdf<P: AsRef<Path>>(field: &DistanceGrid, path: P) -> IoResult<()> {
    let file = File::create(path)?;
    write_sdf(field, BufWriter::new(file))
}

/// Write a distance field in `.sdf` format to any writer.
///
/// Values are written with Rust's shortest round-trip float formatting, so
/// a read-back reproduces them exactly.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_sdf<W: Write>(field: &DistanceGrid, mut writer: W) -> IoResult<()> {
    let spec = field.spec();
    writeln!(writer, "{} {} {}", spec.ni, spec.nj, spec.nk)?;
    writeln!(
        writer,
        "{} {} {}",
        spec.origin.x, spec.origin.y, spec.origin.z
    )?;
    writeln!(writer, "{}", spec.dx)?;
    for value in field.values() {
        writeln!(writer, "{value}")?;
    }
    writer.flush()?;
    Ok(())
}

/// Load a distance field from an ASCII `.sdf` file.
///
/// # Errors
///
/// Returns an error if the file is missing, the header is malformed, or the
/// value count does not match the header dimensions.
pub fn load_sdf<P: AsRef<Path>>(path: P) -> IoResult<DistanceGrid> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let file = File::open(path)?;
    read_sdf(BufReader::new(file))
}

/// Read a distance field in `.sdf` format from any buffered reader.
///
/// # Errors
///
/// Same conditions as [`load_sdf`].
pub fn read_sdf<R: BufRead>(reader: R) -> IoResult<DistanceGrid> {
    let mut tokens = Vec::new();
    for line in reader.lines() {
        let line = line?;
        tokens.extend(line.split_whitespace().map(str::to_owned));
    }
    let mut tokens = tokens.into_iter();

    let mut next = |what: &str| {
        tokens
            .next()
            .ok_or_else(|| IoError::invalid_content(format!("missing {what}")))
    };

    let ni: usize = next("grid dimension ni")?.parse()?;
    let nj: usize = next("grid dimension nj")?.parse()?;
    let nk: usize = next("grid dimension nk")?.parse()?;
    let ox: f64 = next("origin x")?.parse()?;
    let oy: f64 = next("origin y")?.parse()?;
    let oz: f64 = next("origin z")?.parse()?;
    let dx: f64 = next("grid spacing")?.parse()?;

    let spec = GridSpec::new(Point3::new(ox, oy, oz), dx, ni, nj, nk)
        .map_err(|e| IoError::invalid_content(e.to_string()))?;

    let values = tokens
        .map(|t| t.parse::<f64>().map_err(IoError::from))
        .collect::<IoResult<Vec<f64>>>()?;
    if values.len() != spec.node_count() {
        return Err(IoError::ValueCountMismatch {
            expected: spec.node_count(),
            got: values.len(),
        });
    }

    DistanceGrid::from_parts(spec, values)
        .map_err(|e| IoError::invalid_content(e.to_string()))
}
