//! Wavefront OBJ loading (triangle meshes only).

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use sdf_types::{Point3, TriMesh};
use tracing::warn;

use crate::error::{IoError, IoResult};

/// Load a triangle mesh from an OBJ file.
///
/// Only `v` and `f` statements are interpreted; `vn`, `vt`, groups,
/// materials and other statements are skipped (a single warning reports the
/// skip count). Face statements may use the `v`, `v/vt`, `v/vt/vn` and
/// `v//vn` index forms; only the vertex index is taken.
///
/// # Errors
///
/// Returns an error if the file cannot be read, a `v` or `f` statement is
/// malformed, a face has other than three vertices, or a face references a
/// vertex that does not exist.
///
/// # Example
///
/// ```no_run
/// use sdf_io::load_obj;
///
/// let mesh = load_obj("model.obj").unwrap();
/// println!("{} faces", mesh.face_count());
/// ```
pub fn load_obj<P: AsRef<Path>>(path: P) -> IoResult<TriMesh> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let file = File::open(path)?;
    read_obj(BufReader::new(file))
}

/// Read a triangle mesh in OBJ format from any buffered reader.
///
/// # Errors
///
/// Same conditions as [`load_obj`].
pub fn read_obj<R: BufRead>(reader: R) -> IoResult<TriMesh> {
    let mut mesh = TriMesh::new();
    let mut skipped = 0_usize;

    for (line_index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = line_index + 1;
        let mut tokens = line.split_whitespace();

        match tokens.next() {
            Some("v") => {
                mesh.vertices
                    .push(parse_vertex(&mut tokens, line_number)?);
            }
            Some("f") => {
                mesh.faces.push(parse_face(&mut tokens, line_number)?);
            }
            // Blank lines and comments are structural, not skipped content.
            None | Some("#") => {}
            Some(_) => skipped += 1,
        }
    }

    if skipped > 0 {
        warn!(skipped, "ignored unsupported OBJ statements");
    }

    if let Some(face) = mesh.first_invalid_face() {
        return Err(IoError::invalid_content(format!(
            "face {face} references a vertex outside the mesh ({} vertices)",
            mesh.vertex_count()
        )));
    }

    Ok(mesh)
}

fn parse_vertex<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    line_number: usize,
) -> IoResult<Point3<f64>> {
    let mut coords = [0.0_f64; 3];
    for coord in &mut coords {
        let token = tokens.next().ok_or_else(|| {
            IoError::invalid_content(format!(
                "line {line_number}: vertex statement needs three coordinates"
            ))
        })?;
        *coord = token.parse()?;
    }
    Ok(Point3::new(coords[0], coords[1], coords[2]))
}

fn parse_face<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    line_number: usize,
) -> IoResult<[u32; 3]> {
    let refs: Vec<&str> = tokens.collect();
    if refs.len() != 3 {
        return Err(IoError::NonTriangleFace {
            line: line_number,
            vertices: refs.len(),
        });
    }

    let mut face = [0_u32; 3];
    for (slot, token) in face.iter_mut().zip(&refs) {
        // "v", "v/vt", "v/vt/vn" and "v//vn" forms: the vertex index is
        // everything before the first slash.
        let vertex_ref = token.split('/').next().unwrap_or(token);
        let index: u32 = vertex_ref.parse()?;
        if index == 0 {
            return Err(IoError::invalid_content(format!(
                "line {line_number}: OBJ vertex indices are 1-based, got 0"
            )));
        }
        *slot = index - 1;
    }
    Ok(face)
}
