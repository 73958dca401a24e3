//! Dense signed distance field over a regular grid.

use sdf_types::{GridSpec, Point3};

use crate::error::{FieldError, FieldResult};

/// A dense signed distance field: one value per grid node.
///
/// Values are stored in ascending-`i`-fastest linear order
/// (`index = i + ni * (j + nj * k)`), negative inside the sampled solid and
/// positive outside.
///
/// # Example
///
/// ```
/// use sdf_types::{GridSpec, Point3};
/// use sdf_field::DistanceGrid;
///
/// let spec = GridSpec::new(Point3::origin(), 1.0, 2, 2, 2).unwrap();
/// let field = DistanceGrid::from_parts(spec, vec![1.0; 8]).unwrap();
/// assert_eq!(field.get(1, 1, 1), Some(1.0));
/// ```
#[derive(Debug, Clone)]
pub struct DistanceGrid {
    spec: GridSpec,
    values: Vec<f64>,
}

impl DistanceGrid {
    /// Assemble a field from a grid spec and a matching value buffer.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::LengthMismatch`] if `values.len()` differs from
    /// the grid's node count.
    pub fn from_parts(spec: GridSpec, values: Vec<f64>) -> FieldResult<Self> {
        if values.len() != spec.node_count() {
            return Err(FieldError::LengthMismatch {
                expected: spec.node_count(),
                got: values.len(),
            });
        }
        Ok(Self { spec, values })
    }

    /// The grid this field is sampled on.
    #[inline]
    #[must_use]
    pub const fn spec(&self) -> &GridSpec {
        &self.spec
    }

    /// The raw values in linear node order.
    #[inline]
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// The value at node `(i, j, k)`, or `None` if out of range.
    #[must_use]
    pub fn get(&self, i: usize, j: usize, k: usize) -> Option<f64> {
        if i >= self.spec.ni || j >= self.spec.nj || k >= self.spec.nk {
            return None;
        }
        self.values.get(self.spec.node_index(i, j, k)).copied()
    }

    /// World position of node `(i, j, k)`.
    #[inline]
    #[must_use]
    pub fn node_position(&self, i: usize, j: usize, k: usize) -> Point3<f64> {
        self.spec.grid_to_world(i, j, k)
    }

    /// Consume the field, returning the grid spec and the value buffer.
    #[must_use]
    pub fn into_parts(self) -> (GridSpec, Vec<f64>) {
        (self.spec, self.values)
    }
}
