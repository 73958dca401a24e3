//! Surface crossing counts along i-axis grid lines.
//!
//! For every grid line parallel to the i axis (fixed `(j, k)`), each
//! triangle the line passes through contributes one crossing, recorded at
//! the smallest node index strictly greater than the crossing coordinate.
//! A prefix parity over these counts classifies every node on the line as
//! inside or outside.

use sdf_types::{GridSpec, TriMesh};

/// Orientation of the 2D triangle `(0,0), (x1,y1), (x2,y2)`.
///
/// Returns the sign of twice the signed area. Exact zeros are broken
/// lexicographically on the coordinates so that a line grazing a shared
/// edge is counted by exactly one of the two incident triangles.
fn orientation(x1: f64, y1: f64, x2: f64, y2: f64) -> (i8, f64) {
    let twice_signed_area = y1.mul_add(x2, -(x1 * y2));
    if twice_signed_area > 0.0 {
        return (1, twice_signed_area);
    }
    if twice_signed_area < 0.0 {
        return (-1, twice_signed_area);
    }
    if y2 > y1 {
        return (1, twice_signed_area);
    }
    if y2 < y1 {
        return (-1, twice_signed_area);
    }
    if x1 > x2 {
        return (1, twice_signed_area);
    }
    if x1 < x2 {
        return (-1, twice_signed_area);
    }
    (0, twice_signed_area)
}

/// Robust 2D point-in-triangle test with barycentric output.
///
/// Returns the normalized barycentric weights of `(x0, y0)` with respect to
/// the triangle, or `None` when the point is outside (or the triangle is
/// degenerate in projection). The orientation tie-break makes the test
/// half-open, so a point on a shared edge is claimed by exactly one
/// triangle.
#[allow(clippy::too_many_arguments, clippy::similar_names)]
fn point_in_triangle_2d(
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    x3: f64,
    y3: f64,
) -> Option<(f64, f64, f64)> {
    let (x1, y1) = (x1 - x0, y1 - y0);
    let (x2, y2) = (x2 - x0, y2 - y0);
    let (x3, y3) = (x3 - x0, y3 - y0);

    let (sign_a, a) = orientation(x2, y2, x3, y3);
    if sign_a == 0 {
        return None;
    }
    let (sign_b, b) = orientation(x3, y3, x1, y1);
    if sign_b != sign_a {
        return None;
    }
    let (sign_c, c) = orientation(x1, y1, x2, y2);
    if sign_c != sign_a {
        return None;
    }

    let sum = a + b + c;
    // All three weights share a nonzero sign, so the sum cannot vanish.
    debug_assert!(sum != 0.0);
    Some((a / sum, b / sum, c / sum))
}

/// Count surface crossings per node, in linear node order.
///
/// Each entry `(i, j, k)` holds the number of crossings of the `(j, k)`
/// grid line that fall in the half-open interval `[i - 1, i)` of fractional
/// i coordinates. Crossings left of the grid accumulate at column 0;
/// crossings at or beyond the last node are dropped.
///
/// Face indices must be in bounds.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss
)]
// Fractional coordinates are small relative to i64 range; clamped before
// sign loss
pub(crate) fn count_crossings(mesh: &TriMesh, spec: &GridSpec) -> Vec<u32> {
    let mut crossings = vec![0_u32; spec.node_count()];

    for tri in mesh.triangles() {
        let fa = spec.world_to_grid(&tri.a);
        let fb = spec.world_to_grid(&tri.b);
        let fc = spec.world_to_grid(&tri.c);

        let nj_max = (spec.nj - 1) as i64;
        let nk_max = (spec.nk - 1) as i64;
        let j0 = (fa.y.min(fb.y).min(fc.y).ceil() as i64).clamp(0, nj_max) as usize;
        let j1 = (fa.y.max(fb.y).max(fc.y).floor() as i64).clamp(0, nj_max) as usize;
        let k0 = (fa.z.min(fb.z).min(fc.z).ceil() as i64).clamp(0, nk_max) as usize;
        let k1 = (fa.z.max(fb.z).max(fc.z).floor() as i64).clamp(0, nk_max) as usize;

        for k in k0..=k1 {
            for j in j0..=j1 {
                #[allow(clippy::cast_precision_loss)]
                let Some((a, b, c)) = point_in_triangle_2d(
                    j as f64, k as f64, fa.y, fa.z, fb.y, fb.z, fc.y, fc.z,
                ) else {
                    continue;
                };

                // Crossing coordinate along i, interpolated barycentrically.
                let fi = a.mul_add(fa.x, b.mul_add(fb.x, c * fc.x));
                // Smallest node index strictly greater than the crossing.
                let column = fi.floor() as i64 + 1;
                if column < 0 {
                    crossings[spec.node_index(0, j, k)] += 1;
                } else if (column as usize) < spec.ni {
                    crossings[spec.node_index(column as usize, j, k)] += 1;
                }
            }
        }
    }

    crossings
}
