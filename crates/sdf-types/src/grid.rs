//! Regular sampling grid specification.

#![allow(clippy::module_name_repetitions)]

use nalgebra::{Point3, Vector3};
use thiserror::Error;

use crate::Aabb;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors from constructing a [`GridSpec`].
#[derive(Debug, Error)]
pub enum GridSpecError {
    /// Grid spacing must be positive and finite.
    #[error("grid spacing must be positive and finite, got {0}")]
    InvalidSpacing(f64),

    /// Every grid dimension must be at least 1.
    #[error("grid dimensions must be nonzero, got ({0}, {1}, {2})")]
    InvalidDimensions(usize, usize, usize),
}

/// A regular 3D sampling grid: origin, uniform spacing, and dimensions.
///
/// Node `(i, j, k)` sits at `origin + (i, j, k) * dx` in world space. The
/// associated linear node order is ascending `i` fastest, then `j`, then `k`
/// (`index = i + ni * (j + nj * k)`), which is also the on-disk value order
/// of the ASCII grid format.
///
/// # Example
///
/// ```
/// use sdf_types::{GridSpec, Point3};
///
/// let spec = GridSpec::new(Point3::origin(), 0.5, 4, 4, 4).unwrap();
/// let p = spec.grid_to_world(1, 2, 3);
/// assert_eq!(p, Point3::new(0.5, 1.0, 1.5));
///
/// let f = spec.world_to_grid(&p);
/// assert!((f.x - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridSpec {
    /// World position of node (0, 0, 0).
    pub origin: Point3<f64>,
    /// Uniform cell spacing (positive).
    pub dx: f64,
    /// Node count along i.
    pub ni: usize,
    /// Node count along j.
    pub nj: usize,
    /// Node count along k.
    pub nk: usize,
}

impl GridSpec {
    /// Create a grid spec, validating spacing and dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`GridSpecError::InvalidSpacing`] if `dx` is not positive and
    /// finite, or [`GridSpecError::InvalidDimensions`] if any dimension is 0.
    pub fn new(
        origin: Point3<f64>,
        dx: f64,
        ni: usize,
        nj: usize,
        nk: usize,
    ) -> Result<Self, GridSpecError> {
        if dx <= 0.0 || !dx.is_finite() {
            return Err(GridSpecError::InvalidSpacing(dx));
        }
        if ni == 0 || nj == 0 || nk == 0 {
            return Err(GridSpecError::InvalidDimensions(ni, nj, nk));
        }
        Ok(Self {
            origin,
            dx,
            ni,
            nj,
            nk,
        })
    }

    /// Create a grid covering `bounds` with spacing `dx`, padded by
    /// `padding` extra cells of `dx` on every side.
    ///
    /// # Errors
    ///
    /// Returns an error if `dx` is invalid or `bounds` is empty.
    pub fn covering(bounds: &Aabb, dx: f64, padding: usize) -> Result<Self, GridSpecError> {
        if dx <= 0.0 || !dx.is_finite() {
            return Err(GridSpecError::InvalidSpacing(dx));
        }
        if bounds.is_empty() {
            return Err(GridSpecError::InvalidDimensions(0, 0, 0));
        }

        #[allow(clippy::cast_precision_loss)]
        // Padding counts are small enough that f64 represents them exactly
        let pad = padding as f64;
        let origin = Point3::new(
            pad.mul_add(-dx, bounds.min.x),
            pad.mul_add(-dx, bounds.min.y),
            pad.mul_add(-dx, bounds.min.z),
        );
        let size = bounds.size();
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        // Truncation: cell counts are non-negative and far below usize::MAX
        let cells = |extent: f64| (extent / dx).ceil() as usize + 1 + 2 * padding;

        Self::new(origin, dx, cells(size.x), cells(size.y), cells(size.z))
    }

    /// Total number of grid nodes.
    #[inline]
    #[must_use]
    pub const fn node_count(&self) -> usize {
        self.ni * self.nj * self.nk
    }

    /// Linear index of node `(i, j, k)`: ascending `i` fastest, then `j`,
    /// then `k`.
    #[inline]
    #[must_use]
    pub const fn node_index(&self, i: usize, j: usize, k: usize) -> usize {
        i + self.ni * (j + self.nj * k)
    }

    /// Convert a world point to fractional grid coordinates.
    ///
    /// Pure function of origin and spacing; non-finite input propagates as
    /// non-finite output.
    #[inline]
    #[must_use]
    pub fn world_to_grid(&self, p: &Point3<f64>) -> Vector3<f64> {
        (p - self.origin) / self.dx
    }

    /// World position of node `(i, j, k)`.
    #[inline]
    #[must_use]
    pub fn grid_to_world(&self, i: usize, j: usize, k: usize) -> Point3<f64> {
        #[allow(clippy::cast_precision_loss)]
        // Node indices are small enough that f64 represents them exactly
        Point3::new(
            (i as f64).mul_add(self.dx, self.origin.x),
            (j as f64).mul_add(self.dx, self.origin.y),
            (k as f64).mul_add(self.dx, self.origin.z),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn rejects_invalid_spacing() {
        assert!(matches!(
            GridSpec::new(Point3::origin(), 0.0, 4, 4, 4),
            Err(GridSpecError::InvalidSpacing(_))
        ));
        assert!(matches!(
            GridSpec::new(Point3::origin(), -1.0, 4, 4, 4),
            Err(GridSpecError::InvalidSpacing(_))
        ));
        assert!(matches!(
            GridSpec::new(Point3::origin(), f64::NAN, 4, 4, 4),
            Err(GridSpecError::InvalidSpacing(_))
        ));
    }

    #[test]
    fn rejects_zero_dimensions() {
        assert!(matches!(
            GridSpec::new(Point3::origin(), 1.0, 4, 0, 4),
            Err(GridSpecError::InvalidDimensions(4, 0, 4))
        ));
    }

    #[test]
    fn single_node_grid_is_valid() {
        let spec = GridSpec::new(Point3::origin(), 1.0, 1, 1, 1);
        assert!(spec.is_ok());
    }

    #[test]
    fn world_grid_round_trip() {
        let spec = GridSpec::new(Point3::new(-1.0, 2.0, 0.5), 0.25, 8, 8, 8);
        let Ok(spec) = spec else {
            unreachable!("valid spec")
        };
        let p = spec.grid_to_world(3, 5, 7);
        let f = spec.world_to_grid(&p);
        assert_relative_eq!(f.x, 3.0, epsilon = 1e-12);
        assert_relative_eq!(f.y, 5.0, epsilon = 1e-12);
        assert_relative_eq!(f.z, 7.0, epsilon = 1e-12);
    }

    #[test]
    fn non_finite_input_propagates() {
        let spec = GridSpec::new(Point3::origin(), 1.0, 2, 2, 2);
        let Ok(spec) = spec else {
            unreachable!("valid spec")
        };
        let f = spec.world_to_grid(&Point3::new(f64::NAN, 0.0, 0.0));
        assert!(f.x.is_nan());
        assert!(f.y.is_finite());
    }

    #[test]
    fn node_index_i_fastest() {
        let spec = GridSpec::new(Point3::origin(), 1.0, 3, 4, 5);
        let Ok(spec) = spec else {
            unreachable!("valid spec")
        };
        assert_eq!(spec.node_index(0, 0, 0), 0);
        assert_eq!(spec.node_index(1, 0, 0), 1);
        assert_eq!(spec.node_index(0, 1, 0), 3);
        assert_eq!(spec.node_index(0, 0, 1), 12);
        assert_eq!(spec.node_index(2, 3, 4), spec.node_count() - 1);
    }

    #[test]
    fn covering_pads_bounds() {
        let bounds = Aabb::new(Point3::origin(), Point3::new(1.0, 1.0, 1.0));
        let spec = GridSpec::covering(&bounds, 0.5, 2);
        let Ok(spec) = spec else {
            unreachable!("valid spec")
        };
        // 2 cells of spacing on each side
        assert_relative_eq!(spec.origin.x, -1.0, epsilon = 1e-12);
        // ceil(1.0 / 0.5) + 1 + 2 * 2 = 7 nodes per axis
        assert_eq!((spec.ni, spec.nj, spec.nk), (7, 7, 7));
        // Far corner reaches past the padded max
        let far = spec.grid_to_world(spec.ni - 1, 0, 0);
        assert!(far.x >= 2.0 - 1e-12);
    }
}
