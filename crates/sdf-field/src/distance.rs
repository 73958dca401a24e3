//! Exact point-triangle closest-point queries.
//!
//! Region-classification algorithm after Ericson, *Real-Time Collision
//! Detection* §5.1.5, restructured so the winning Voronoi region is part of
//! the return value.

use sdf_types::Point3;

/// The triangle feature closest to a query point.
///
/// Edges are numbered by the vertices they connect: edge 0 is `a`–`b`,
/// edge 1 is `a`–`c`, edge 2 is `b`–`c`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClosestFeature {
    /// A triangle corner (0 = `a`, 1 = `b`, 2 = `c`).
    Vertex(u8),
    /// A triangle edge interior.
    Edge(u8),
    /// The triangle face interior.
    Face,
}

/// Closest point on segment `a`–`b` to `p`, with the segment parameter.
///
/// A zero-length segment returns `a` with parameter 0.
fn closest_point_on_segment(
    p: &Point3<f64>,
    a: &Point3<f64>,
    b: &Point3<f64>,
) -> (Point3<f64>, f64) {
    let ab = b - a;
    let denom = ab.norm_squared();
    let t = if denom > 0.0 {
        ((p - a).dot(&ab) / denom).clamp(0.0, 1.0)
    } else {
        0.0
    };
    (a + ab * t, t)
}

/// Closest point on a degenerate (zero-area) triangle: the nearest of the
/// three edge segments.
#[allow(clippy::many_single_char_names)]
fn closest_point_degenerate(
    p: &Point3<f64>,
    a: &Point3<f64>,
    b: &Point3<f64>,
    c: &Point3<f64>,
) -> (Point3<f64>, ClosestFeature) {
    let mut best = closest_point_on_segment(p, a, b).0;
    let mut best_feature = ClosestFeature::Edge(0);
    let mut best_dist = (p - best).norm_squared();

    for (edge, u, v) in [(1_u8, a, c), (2_u8, b, c)] {
        let (q, _) = closest_point_on_segment(p, u, v);
        let d = (p - q).norm_squared();
        if d < best_dist {
            best = q;
            best_feature = ClosestFeature::Edge(edge);
            best_dist = d;
        }
    }

    (best, best_feature)
}

/// Compute the closest point on triangle `abc` to `p`, and the feature it
/// lies on.
///
/// All denominators are guarded; degenerate triangles fall back to the
/// nearest edge segment. Finite input never produces non-finite output.
///
/// # Example
///
/// ```
/// use sdf_types::Point3;
/// use sdf_field::{closest_point_on_triangle, ClosestFeature};
///
/// let a = Point3::new(0.0, 0.0, 0.0);
/// let b = Point3::new(1.0, 0.0, 0.0);
/// let c = Point3::new(0.0, 1.0, 0.0);
///
/// let p = Point3::new(0.25, 0.25, 1.0);
/// let (q, feature) = closest_point_on_triangle(&p, &a, &b, &c);
/// assert_eq!(feature, ClosestFeature::Face);
/// assert!((q - Point3::new(0.25, 0.25, 0.0)).norm() < 1e-12);
/// ```
#[must_use]
#[allow(clippy::many_single_char_names, clippy::similar_names)]
pub fn closest_point_on_triangle(
    p: &Point3<f64>,
    a: &Point3<f64>,
    b: &Point3<f64>,
    c: &Point3<f64>,
) -> (Point3<f64>, ClosestFeature) {
    let ab = b - a;
    let ac = c - a;

    // Vertex region a
    let ap = p - a;
    let d1 = ab.dot(&ap);
    let d2 = ac.dot(&ap);
    if d1 <= 0.0 && d2 <= 0.0 {
        return (*a, ClosestFeature::Vertex(0));
    }

    // Vertex region b
    let bp = p - b;
    let d3 = ab.dot(&bp);
    let d4 = ac.dot(&bp);
    if d3 >= 0.0 && d4 <= d3 {
        return (*b, ClosestFeature::Vertex(1));
    }

    // Edge region a-b
    let vc = d1.mul_add(d4, -(d3 * d2));
    if vc <= 0.0 && d1 >= 0.0 && d3 <= 0.0 {
        let denom = d1 - d3;
        if denom > 0.0 {
            let v = d1 / denom;
            return (a + ab * v, ClosestFeature::Edge(0));
        }
        return closest_point_degenerate(p, a, b, c);
    }

    // Vertex region c
    let cp = p - c;
    let d5 = ab.dot(&cp);
    let d6 = ac.dot(&cp);
    if d6 >= 0.0 && d5 <= d6 {
        return (*c, ClosestFeature::Vertex(2));
    }

    // Edge region a-c
    let vb = d5.mul_add(d2, -(d1 * d6));
    if vb <= 0.0 && d2 >= 0.0 && d6 <= 0.0 {
        let denom = d2 - d6;
        if denom > 0.0 {
            let w = d2 / denom;
            return (a + ac * w, ClosestFeature::Edge(1));
        }
        return closest_point_degenerate(p, a, b, c);
    }

    // Edge region b-c
    let va = d3.mul_add(d6, -(d5 * d4));
    if va <= 0.0 && (d4 - d3) >= 0.0 && (d5 - d6) >= 0.0 {
        let denom = (d4 - d3) + (d5 - d6);
        if denom > 0.0 {
            let w = (d4 - d3) / denom;
            return (b + (c - b) * w, ClosestFeature::Edge(2));
        }
        return closest_point_degenerate(p, a, b, c);
    }

    // Face region; denom is twice the squared triangle area, zero only for
    // degenerate triangles.
    let denom = va + vb + vc;
    if denom <= 0.0 {
        return closest_point_degenerate(p, a, b, c);
    }
    let v = vb / denom;
    let w = vc / denom;
    (a + ab * v + ac * w, ClosestFeature::Face)
}

/// Exact Euclidean distance from `p` to triangle `abc`.
#[inline]
#[must_use]
#[allow(clippy::many_single_char_names)]
pub fn point_triangle_distance(
    p: &Point3<f64>,
    a: &Point3<f64>,
    b: &Point3<f64>,
    c: &Point3<f64>,
) -> f64 {
    let (q, _) = closest_point_on_triangle(p, a, b, c);
    (p - q).norm()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn reference_triangle() -> (Point3<f64>, Point3<f64>, Point3<f64>) {
        (
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(0.0, 2.0, 0.0),
        )
    }

    #[test]
    fn face_region() {
        let (a, b, c) = reference_triangle();
        let p = Point3::new(0.5, 0.5, 3.0);
        let (q, feature) = closest_point_on_triangle(&p, &a, &b, &c);
        assert_eq!(feature, ClosestFeature::Face);
        assert_relative_eq!(q.x, 0.5, epsilon = 1e-12);
        assert_relative_eq!(q.y, 0.5, epsilon = 1e-12);
        assert_relative_eq!(q.z, 0.0, epsilon = 1e-12);
        assert_relative_eq!(point_triangle_distance(&p, &a, &b, &c), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn vertex_regions() {
        let (a, b, c) = reference_triangle();

        let p = Point3::new(-1.0, -1.0, 0.0);
        let (q, feature) = closest_point_on_triangle(&p, &a, &b, &c);
        assert_eq!(feature, ClosestFeature::Vertex(0));
        assert_eq!(q, a);

        let p = Point3::new(5.0, -1.0, 0.0);
        let (q, feature) = closest_point_on_triangle(&p, &a, &b, &c);
        assert_eq!(feature, ClosestFeature::Vertex(1));
        assert_eq!(q, b);

        let p = Point3::new(-1.0, 5.0, 0.0);
        let (q, feature) = closest_point_on_triangle(&p, &a, &b, &c);
        assert_eq!(feature, ClosestFeature::Vertex(2));
        assert_eq!(q, c);
    }

    #[test]
    fn edge_regions() {
        let (a, b, c) = reference_triangle();

        // Below the a-b edge
        let p = Point3::new(1.0, -1.0, 0.0);
        let (q, feature) = closest_point_on_triangle(&p, &a, &b, &c);
        assert_eq!(feature, ClosestFeature::Edge(0));
        assert_relative_eq!(q.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(q.y, 0.0, epsilon = 1e-12);

        // Left of the a-c edge
        let p = Point3::new(-1.0, 1.0, 0.0);
        let (_, feature) = closest_point_on_triangle(&p, &a, &b, &c);
        assert_eq!(feature, ClosestFeature::Edge(1));

        // Beyond the hypotenuse b-c
        let p = Point3::new(2.0, 2.0, 0.0);
        let (q, feature) = closest_point_on_triangle(&p, &a, &b, &c);
        assert_eq!(feature, ClosestFeature::Edge(2));
        assert_relative_eq!(q.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(q.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn degenerate_triangle_falls_back_to_segments() {
        // Collinear vertices: the "triangle" is the segment from a to c.
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(1.0, 0.0, 0.0);
        let c = Point3::new(2.0, 0.0, 0.0);

        let p = Point3::new(1.5, 1.0, 0.0);
        let (q, _) = closest_point_on_triangle(&p, &a, &b, &c);
        assert_relative_eq!(q.x, 1.5, epsilon = 1e-12);
        assert_relative_eq!(q.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(point_triangle_distance(&p, &a, &b, &c), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn finite_input_stays_finite() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(0.0, 0.0, 0.0);
        let c = Point3::new(0.0, 0.0, 0.0);
        // Fully collapsed triangle
        let p = Point3::new(3.0, 4.0, 0.0);
        let d = point_triangle_distance(&p, &a, &b, &c);
        assert!(d.is_finite());
        assert_relative_eq!(d, 5.0, epsilon = 1e-12);
    }
}
