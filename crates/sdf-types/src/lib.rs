//! Core value types for signed distance field generation.
//!
//! This crate provides the foundational types shared by the SDF pipeline:
//!
//! - [`TriMesh`] - An indexed triangle mesh (positions + faces)
//! - [`Triangle`] - A concrete triangle with vertex positions
//! - [`Aabb`] - Axis-aligned bounding box
//! - [`GridSpec`] - A regular sampling grid (origin, spacing, dimensions)
//!
//! # Coordinate System
//!
//! Right-handed, `f64` coordinates throughout. Face winding is
//! **counter-clockwise (CCW) when viewed from outside**, so normals point
//! outward by the right-hand rule. Sign correctness of a distance field
//! computed from a [`TriMesh`] depends on the mesh being closed and
//! consistently outward-oriented; this is a documented precondition of the
//! downstream transform, not something this crate enforces.
//!
//! # Example
//!
//! ```
//! use sdf_types::{TriMesh, GridSpec, Point3};
//!
//! let mut mesh = TriMesh::new();
//! mesh.vertices.push(Point3::new(0.0, 0.0, 0.0));
//! mesh.vertices.push(Point3::new(1.0, 0.0, 0.0));
//! mesh.vertices.push(Point3::new(0.0, 1.0, 0.0));
//! mesh.faces.push([0, 1, 2]);
//!
//! let spec = GridSpec::new(Point3::new(-1.0, -1.0, -1.0), 0.5, 8, 8, 8).unwrap();
//! assert_eq!(spec.node_count(), 512);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod bounds;
mod grid;
mod mesh;
mod triangle;

pub use bounds::Aabb;
pub use grid::{GridSpec, GridSpecError};
pub use mesh::{unit_cube, TriMesh};
pub use triangle::Triangle;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
