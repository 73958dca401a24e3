//! OBJ in, field out: the full pipeline through the file formats.

use std::io::Cursor;

use sdf_field::{signed_distance_field, SweepParams};
use sdf_io::{load_sdf, read_obj, save_sdf};
use sdf_types::GridSpec;
use tempfile::tempdir;

/// Unit cube as OBJ text, 1-based indices, CCW from outside.
const CUBE_OBJ: &str = "\
# unit cube
v 0 0 0
v 1 0 0
v 1 1 0
v 0 1 0
v 0 0 1
v 1 0 1
v 1 1 1
v 0 1 1
f 1 3 2
f 1 4 3
f 5 6 7
f 5 7 8
f 1 2 6
f 1 6 5
f 4 8 7
f 4 7 3
f 1 5 8
f 1 8 4
f 2 3 7
f 2 7 6
";

#[test]
fn obj_to_sdf_file_round_trip() {
    let mesh = read_obj(Cursor::new(CUBE_OBJ)).unwrap_or_else(|e| panic!("valid OBJ: {e}"));
    assert_eq!(mesh.face_count(), 12);

    let spec = GridSpec::covering(&mesh.bounds(), 0.25, 2)
        .unwrap_or_else(|e| panic!("valid spec: {e}"));
    let field = signed_distance_field(&mesh, &spec, &SweepParams::default())
        .unwrap_or_else(|e| panic!("valid input: {e}"));

    let dir = tempdir().unwrap_or_else(|e| panic!("temp dir: {e}"));
    let path = dir.path().join("cube.sdf");
    save_sdf(&field, &path).unwrap_or_else(|e| panic!("writable: {e}"));

    let back = load_sdf(&path).unwrap_or_else(|e| panic!("own output parses: {e}"));
    assert_eq!(back.spec(), field.spec());
    for (a, b) in back.values().iter().zip(field.values()) {
        assert_eq!(a.to_bits(), b.to_bits());
    }

    // The cube center stays negative through the round trip.
    let center = back.get(4, 4, 4).unwrap_or_else(|| panic!("in range"));
    assert!(center < 0.0);
}
