use std::io::Write;

use object_parser::{
    convert_obj_file, EmitterConfig, ErrorKind, Mesh, Obj, ObjFile, ObjParsingErrorDetail,
};
use tempfile::NamedTempFile;

fn obj_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn convert(content: &str) -> Result<String, object_parser::Error> {
    let file = obj_file(content);
    convert_obj_file(file.path().to_str().unwrap(), &EmitterConfig::default())
}

const CUBE: &str = "\
# Blender v2.79 OBJ File
mtllib cube.mtl
o Cube
v 1.000000 -1.000000 -1.000000
v 1.000000 -1.000000 1.000000
v -1.000000 -1.000000 1.000000
v -1.000000 -1.000000 -1.000000
v 1.000000 1.000000 -0.999999
v 0.999999 1.000000 1.000001
v -1.000000 1.000000 1.000000
v -1.000000 1.000000 -1.000000
vt 0.333134 0.000200
vn 0.0000 -1.0000 0.0000
vn 0.0000 1.0000 0.0000
usemtl Material
s off
f 2/1/1 3/1/1 4/1/1
f 8/1/2 7/1/2 6/1/2
f 5/1/2 6/1/2 2/1/2
usemtl Other
f 1/1/1 2/1/1 4/1/1
";

#[test]
fn cube_counts_and_order() {
    let file = obj_file(CUBE);
    let obj = Obj::try_from(ObjFile(file.path().to_str().unwrap())).unwrap();

    assert_eq!(obj.vertices.len(), 8);
    assert_eq!(obj.normals.len(), 2);
    assert_eq!(&*obj.faces, &[[1, 2, 3], [7, 6, 5], [4, 5, 1], [0, 1, 3]]);
    assert_eq!(obj.current_material.as_deref(), Some("Other"));
}

#[test]
fn faces_resolve_to_referenced_positions() {
    let file = obj_file(CUBE);
    let obj = Obj::try_from(ObjFile(file.path().to_str().unwrap())).unwrap();
    let mesh = Mesh::try_from(obj).unwrap();

    let second = mesh.triangles().nth(1).unwrap();
    assert_eq!(
        second,
        [
            [-1.0, 1.0, -1.0],
            [-1.0, 1.0, 1.0],
            [0.999999, 1.0, 1.000001],
        ]
    );
}

#[test]
fn output_rows_match_declarations() {
    let output = convert(CUBE).unwrap();

    let vertex_rows = output
        .lines()
        .skip_while(|line| !line.starts_with("var vertex_data"))
        .skip(1)
        .take_while(|line| *line != "];")
        .count();
    let face_rows = output
        .lines()
        .skip_while(|line| !line.starts_with("var poly_data"))
        .skip(1)
        .take_while(|line| *line != "];")
        .collect::<Vec<_>>();

    assert_eq!(vertex_rows, 8);
    assert_eq!(face_rows, ["\t1, 2, 3,", "\t7, 6, 5,", "\t4, 5, 1,", "\t0, 1, 3"]);
    assert!(output.ends_with("// Parsed 4 triangles, end autogenerated section\n"));
}

#[test]
fn conversion_is_deterministic() {
    assert_eq!(convert(CUBE).unwrap(), convert(CUBE).unwrap());
}

#[test]
fn material_lines_are_transparent() {
    let plain = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n";
    let with_materials = "usemtl foo\nv 0 0 0\nv 1 0 0\nusemtl foo\nv 0 1 0\nusemtl bar\nf 1 2 3\n";

    assert_eq!(convert(plain).unwrap(), convert(with_materials).unwrap());
}

#[test]
fn face_past_last_vertex() {
    let err = convert("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 99\n").unwrap_err();

    assert_eq!(err.kind(), ErrorKind::IndexOutOfRange);
}

#[test]
fn face_with_two_references() {
    let err = convert("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2\n").unwrap_err();

    assert_eq!(err.kind(), ErrorKind::MalformedLine);
    let object_parser::Error::Parsing(err) = err else {
        panic!("expected a parsing error");
    };
    assert_eq!(err.line, Some((4, "f 1 2".to_owned())));
    assert!(matches!(
        err.detail,
        ObjParsingErrorDetail::FaceShouldHaveAtLeast3Components
    ));
}

#[test]
fn vertices_without_faces() {
    let err = convert("v 0 0 0\n").unwrap_err();

    assert_eq!(err.kind(), ErrorKind::EmptyCollection);
}

#[test]
fn missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.obj");

    let err = convert_obj_file(path.to_str().unwrap(), &EmitterConfig::default()).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Io);
}
