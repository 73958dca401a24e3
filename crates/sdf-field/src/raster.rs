//! Narrow-band exact distance rasterization.

use nalgebra::Vector3;
use rayon::prelude::*;
use sdf_types::{GridSpec, TriMesh, Triangle};

use crate::distance::point_triangle_distance;

/// Number of cells the per-triangle index box is expanded by on every side.
/// Nodes inside the expanded box receive exact distances.
const EXACT_BAND: i64 = 1;

/// Output of [`rasterize_narrow_band`]: per-node unsigned distances and the
/// triangle that produced each of them.
#[derive(Debug, Clone)]
pub struct NarrowBand {
    /// Unsigned distance per node, in linear node order. Nodes outside the
    /// band hold the initialization sentinel, an upper bound on any distance
    /// within the grid.
    pub phi: Vec<f64>,

    /// Face index of the closest triangle found per node, `None` outside the
    /// band.
    pub closest: Vec<Option<u32>>,
}

/// Inclusive node index range covered by fractional coordinates
/// `[lo_f, hi_f]` expanded by the exact band, clamped to `[0, n)`.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss
)]
// Fractional grid coordinates are small relative to i64 range; clamped to
// non-negative before the usize cast
fn index_range(lo_f: f64, hi_f: f64, n: usize) -> (usize, usize) {
    let n_max = (n - 1) as i64;
    let lo = (lo_f.floor() as i64 - EXACT_BAND).clamp(0, n_max);
    let hi = (hi_f.floor() as i64 + EXACT_BAND + 1).clamp(0, n_max);
    (lo as usize, hi as usize)
}

/// Rasterize exact point-triangle distances into the nodes near the surface.
///
/// Every triangle min-reduces exact distances into all nodes within
/// [`EXACT_BAND`] cells of its fractional bounding box. Nodes farther from
/// every triangle keep the sentinel `(ni + nj + nk) * dx`, which bounds any
/// distance realizable inside the grid.
///
/// The grid is partitioned into disjoint k-slabs processed in parallel; each
/// slab scans all triangles in face order with a strict `<` min-reduction,
/// so the result is bit-identical to a sequential scan.
///
/// Face indices must be in bounds (see
/// [`TriMesh::first_invalid_face`](sdf_types::TriMesh::first_invalid_face)).
#[must_use]
pub fn rasterize_narrow_band(mesh: &TriMesh, spec: &GridSpec) -> NarrowBand {
    #[allow(clippy::cast_precision_loss)]
    let sentinel = (spec.ni + spec.nj + spec.nk) as f64 * spec.dx;
    let mut phi = vec![sentinel; spec.node_count()];
    let mut closest: Vec<Option<u32>> = vec![None; spec.node_count()];

    // Fractional coordinates are shared across slabs, computed once.
    let triangles: Vec<(Triangle, [Vector3<f64>; 3])> = mesh
        .triangles()
        .map(|t| {
            let f = [
                spec.world_to_grid(&t.a),
                spec.world_to_grid(&t.b),
                spec.world_to_grid(&t.c),
            ];
            (t, f)
        })
        .collect();

    let slab = spec.ni * spec.nj;
    phi.par_chunks_mut(slab)
        .zip(closest.par_chunks_mut(slab))
        .enumerate()
        .for_each(|(k, (phi_slab, closest_slab))| {
            for (tri_index, (t, f)) in triangles.iter().enumerate() {
                let (lo_k, hi_k) =
                    index_range(f[0].z.min(f[1].z).min(f[2].z), f[0].z.max(f[1].z).max(f[2].z), spec.nk);
                if k < lo_k || k > hi_k {
                    continue;
                }
                let (lo_i, hi_i) =
                    index_range(f[0].x.min(f[1].x).min(f[2].x), f[0].x.max(f[1].x).max(f[2].x), spec.ni);
                let (lo_j, hi_j) =
                    index_range(f[0].y.min(f[1].y).min(f[2].y), f[0].y.max(f[1].y).max(f[2].y), spec.nj);

                for j in lo_j..=hi_j {
                    for i in lo_i..=hi_i {
                        let gx = spec.grid_to_world(i, j, k);
                        let d = point_triangle_distance(&gx, &t.a, &t.b, &t.c);
                        let idx = i + spec.ni * j;
                        if d < phi_slab[idx] {
                            phi_slab[idx] = d;
                            #[allow(clippy::cast_possible_truncation)]
                            // Face indices are u32 by construction
                            {
                                closest_slab[idx] = Some(tri_index as u32);
                            }
                        }
                    }
                }
            }
        });

    NarrowBand { phi, closest }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use sdf_types::Point3;

    fn spec_5() -> GridSpec {
        let Ok(spec) = GridSpec::new(Point3::origin(), 1.0, 5, 5, 5) else {
            unreachable!("valid spec")
        };
        spec
    }

    #[test]
    fn single_triangle_band_distances() {
        // Triangle in the z = 2 plane
        let mesh = TriMesh::from_parts(
            vec![
                Point3::new(1.0, 1.0, 2.0),
                Point3::new(3.0, 1.0, 2.0),
                Point3::new(1.0, 3.0, 2.0),
            ],
            vec![[0, 1, 2]],
        );
        let spec = spec_5();
        let band = rasterize_narrow_band(&mesh, &spec);

        // Node directly above the face interior: distance 1
        let idx = spec.node_index(1, 1, 3);
        assert_relative_eq!(band.phi[idx], 1.0, epsilon = 1e-12);
        assert_eq!(band.closest[idx], Some(0));

        // Node on a vertex: distance 0
        let idx = spec.node_index(1, 1, 2);
        assert_relative_eq!(band.phi[idx], 0.0, epsilon = 1e-12);

        // Far corner is outside the band and keeps the sentinel
        let idx = spec.node_index(4, 4, 0);
        assert_eq!(band.closest[idx], None);
        assert_relative_eq!(band.phi[idx], 15.0, epsilon = 1e-12);
    }

    #[test]
    fn band_extends_one_cell_past_bbox() {
        let mesh = TriMesh::from_parts(
            vec![
                Point3::new(2.0, 2.0, 2.0),
                Point3::new(2.5, 2.0, 2.0),
                Point3::new(2.0, 2.5, 2.0),
            ],
            vec![[0, 1, 2]],
        );
        let spec = spec_5();
        let band = rasterize_narrow_band(&mesh, &spec);

        // bbox floor is node 2; one band cell reaches node 1 and node 4
        assert!(band.closest[spec.node_index(1, 1, 1)].is_some());
        assert!(band.closest[spec.node_index(4, 4, 3)].is_some());
        assert!(band.closest[spec.node_index(0, 0, 0)].is_none());
    }
}
