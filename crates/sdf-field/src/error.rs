//! Error types for the field transform.

use thiserror::Error;

/// Errors from the signed distance field transform.
#[derive(Debug, Error)]
pub enum FieldError {
    /// The mesh has no faces.
    #[error("mesh has no faces")]
    EmptyMesh,

    /// A face references a vertex index outside the vertex list.
    #[error("face {face} references a vertex outside the mesh ({vertex_count} vertices)")]
    FaceIndexOutOfRange {
        /// Index of the offending face.
        face: usize,
        /// Number of vertices in the mesh.
        vertex_count: usize,
    },

    /// A value buffer does not match the grid's node count.
    #[error("value buffer length {got} does not match grid node count {expected}")]
    LengthMismatch {
        /// Node count implied by the grid spec.
        expected: usize,
        /// Length of the supplied buffer.
        got: usize,
    },
}

/// Result type for field operations.
pub type FieldResult<T> = Result<T, FieldError>;
