//! Indexed triangle mesh.

#![allow(clippy::module_name_repetitions)]

use crate::{Aabb, Triangle};
use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An indexed triangle mesh: vertex positions plus faces referencing them.
///
/// # Winding Order
///
/// Faces use **counter-clockwise (CCW) winding** when viewed from outside,
/// so normals point outward by the right-hand rule. A distance transform
/// over this mesh classifies inside/outside by crossing parity; a mesh that
/// is not closed or not consistently oriented yields a sign field that may
/// be wrong in the affected regions.
///
/// # Example
///
/// ```
/// use sdf_types::{TriMesh, Point3};
///
/// let mut mesh = TriMesh::new();
/// mesh.vertices.push(Point3::new(0.0, 0.0, 0.0));
/// mesh.vertices.push(Point3::new(1.0, 0.0, 0.0));
/// mesh.vertices.push(Point3::new(0.0, 1.0, 0.0));
/// mesh.faces.push([0, 1, 2]);
///
/// assert_eq!(mesh.face_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TriMesh {
    /// Vertex positions.
    pub vertices: Vec<Point3<f64>>,

    /// Triangle faces as indices into the vertex list.
    /// Each face is `[v0, v1, v2]` with counter-clockwise winding.
    pub faces: Vec<[u32; 3]>,
}

impl TriMesh {
    /// Create a new empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Create a mesh with pre-allocated capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Create a mesh from vertices and faces.
    #[inline]
    #[must_use]
    pub const fn from_parts(vertices: Vec<Point3<f64>>, faces: Vec<[u32; 3]>) -> Self {
        Self { vertices, faces }
    }

    /// Number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of faces.
    #[inline]
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Whether the mesh has no faces.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// The triangle at `face_index`, or `None` if out of range.
    ///
    /// Assumes the face's vertex indices are in bounds; out-of-bounds
    /// indices are a caller error surfaced by the downstream transform.
    #[must_use]
    pub fn triangle(&self, face_index: usize) -> Option<Triangle> {
        self.faces.get(face_index).map(|&[i0, i1, i2]| Triangle {
            a: self.vertices[i0 as usize],
            b: self.vertices[i1 as usize],
            c: self.vertices[i2 as usize],
        })
    }

    /// Iterate over all triangles.
    pub fn triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        self.faces.iter().map(|&[i0, i1, i2]| Triangle {
            a: self.vertices[i0 as usize],
            b: self.vertices[i1 as usize],
            c: self.vertices[i2 as usize],
        })
    }

    /// Index of the first face referencing a vertex out of bounds, if any.
    #[must_use]
    pub fn first_invalid_face(&self) -> Option<usize> {
        let n = self.vertices.len() as u64;
        self.faces
            .iter()
            .position(|face| face.iter().any(|&i| u64::from(i) >= n))
    }

    /// Compute the axis-aligned bounding box of all vertices.
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        Aabb::from_points(self.vertices.iter())
    }

    /// Reverse the winding order of every face, flipping all normals.
    pub fn flip_windings(&mut self) {
        for face in &mut self.faces {
            face.swap(1, 2);
        }
    }

    /// Translate the mesh by the given vector.
    pub fn translate(&mut self, offset: Vector3<f64>) {
        for vertex in &mut self.vertices {
            *vertex += offset;
        }
    }

    /// Scale the mesh uniformly around the origin.
    pub fn scale(&mut self, factor: f64) {
        for vertex in &mut self.vertices {
            vertex.coords *= factor;
        }
    }

    /// Compute the signed volume of the mesh via the divergence theorem.
    ///
    /// Positive for a closed mesh with outward normals (CCW winding viewed
    /// from outside), negative for an inside-out mesh, near-zero for a mesh
    /// that is not closed or has inconsistent winding. Only meaningful as a
    /// volume for closed meshes.
    #[must_use]
    pub fn signed_volume(&self) -> f64 {
        let mut volume = 0.0;

        for &[i0, i1, i2] in &self.faces {
            let v0 = &self.vertices[i0 as usize];
            let v1 = &self.vertices[i1 as usize];
            let v2 = &self.vertices[i2 as usize];

            // Signed tetrahedron volume against the origin: (v0 . (v1 x v2)) / 6
            let cross = Vector3::new(
                v1.y.mul_add(v2.z, -(v1.z * v2.y)),
                v1.z.mul_add(v2.x, -(v1.x * v2.z)),
                v1.x.mul_add(v2.y, -(v1.y * v2.x)),
            );
            volume += v0.z.mul_add(cross.z, v0.x.mul_add(cross.x, v0.y * cross.y));
        }

        volume / 6.0
    }

    /// Check if the mesh appears to be inside-out (negative signed volume).
    #[inline]
    #[must_use]
    pub fn is_inside_out(&self) -> bool {
        self.signed_volume() < 0.0
    }

    /// Uniformly rescale and recenter the mesh into the cube `[lo, hi]^3`.
    ///
    /// The mesh is centered on the cube's center and scaled so its longest
    /// bounding-box edge spans the cube minus a small relative head-room
    /// (`1e-5` of the cube edge), keeping every vertex strictly inside.
    /// A mesh with zero extent (single point) is only recentered.
    pub fn normalize_to_box(&mut self, lo: f64, hi: f64) {
        let bounds = self.bounds();
        if bounds.is_empty() {
            return;
        }

        let box_center = f64::midpoint(lo, hi);
        let mesh_center = bounds.center();
        let max_extent = bounds.max_extent();

        let scale = if max_extent > 0.0 {
            (hi - lo) * (1.0 - 1e-5) / max_extent
        } else {
            1.0
        };

        for vertex in &mut self.vertices {
            let rel = *vertex - mesh_center;
            vertex.x = rel.x.mul_add(scale, box_center);
            vertex.y = rel.y.mul_add(scale, box_center);
            vertex.z = rel.z.mul_add(scale, box_center);
        }
    }
}

/// Create a unit cube mesh from (0,0,0) to (1,1,1) with outward normals.
///
/// # Example
///
/// ```
/// use sdf_types::unit_cube;
///
/// let cube = unit_cube();
/// assert_eq!(cube.vertex_count(), 8);
/// assert_eq!(cube.face_count(), 12);
/// ```
#[must_use]
pub fn unit_cube() -> TriMesh {
    let mut mesh = TriMesh::with_capacity(8, 12);

    mesh.vertices.push(Point3::new(0.0, 0.0, 0.0)); // 0
    mesh.vertices.push(Point3::new(1.0, 0.0, 0.0)); // 1
    mesh.vertices.push(Point3::new(1.0, 1.0, 0.0)); // 2
    mesh.vertices.push(Point3::new(0.0, 1.0, 0.0)); // 3
    mesh.vertices.push(Point3::new(0.0, 0.0, 1.0)); // 4
    mesh.vertices.push(Point3::new(1.0, 0.0, 1.0)); // 5
    mesh.vertices.push(Point3::new(1.0, 1.0, 1.0)); // 6
    mesh.vertices.push(Point3::new(0.0, 1.0, 1.0)); // 7

    // Two CCW triangles per face, viewed from outside.
    mesh.faces.push([0, 2, 1]); // bottom (z = 0)
    mesh.faces.push([0, 3, 2]);
    mesh.faces.push([4, 5, 6]); // top (z = 1)
    mesh.faces.push([4, 6, 7]);
    mesh.faces.push([0, 1, 5]); // front (y = 0)
    mesh.faces.push([0, 5, 4]);
    mesh.faces.push([3, 7, 6]); // back (y = 1)
    mesh.faces.push([3, 6, 2]);
    mesh.faces.push([0, 4, 7]); // left (x = 0)
    mesh.faces.push([0, 7, 3]);
    mesh.faces.push([1, 2, 6]); // right (x = 1)
    mesh.faces.push([1, 6, 5]);

    mesh
}
