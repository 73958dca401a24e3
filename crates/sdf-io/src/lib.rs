//! File I/O for signed distance field generation.
//!
//! Two formats:
//!
//! - **OBJ** (Wavefront, ASCII) — triangle mesh input. Only `v` and `f`
//!   statements are interpreted; everything else is skipped with a warning.
//! - **`.sdf`** (ASCII grid) — distance field output: dimensions, origin and
//!   spacing header followed by one value per line in ascending `i`, then
//!   `j`, then `k` order. A reader is included for interop and testing.
//!
//! # Example
//!
//! ```no_run
//! use sdf_io::{load_obj, save_sdf};
//! use sdf_field::{signed_distance_field, SweepParams};
//! use sdf_types::GridSpec;
//!
//! let mesh = load_obj("model.obj").unwrap();
//! let spec = GridSpec::covering(&mesh.bounds(), 0.05, 2).unwrap();
//! let field = signed_distance_field(&mesh, &spec, &SweepParams::default()).unwrap();
//! save_sdf(&field, "model.sdf").unwrap();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod obj;
mod sdffile;

pub use error::{IoError, IoResult};
pub use obj::{load_obj, read_obj};
pub use sdffile::{load_sdf, read_sdf, save_sdf, write_sdf};
