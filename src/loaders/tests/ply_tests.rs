//! Tests for opening PLY mesh files through the registry.

use crate::error::LoaderError;
use crate::registry::LoaderRegistry;
use crate::source::MeshEncoding;

use super::write_fixture;

/// A complete ascii PLY cube: 8 vertices, 12 triangles.
const CUBE_HEADER: &str = "ply\n\
    format ascii 1.0\n\
    comment unit cube\n\
    element vertex 8\n\
    property float x\n\
    property float y\n\
    property float z\n\
    element face 12\n\
    property list uchar int vertex_indices\n\
    end_header\n";

#[test]
fn test_open_ascii_mesh() {
    let mut contents = CUBE_HEADER.to_string();
    for v in ["0 0 0", "1 0 0", "1 1 0", "0 1 0", "0 0 1", "1 0 1", "1 1 1", "0 1 1"] {
        contents.push_str(v);
        contents.push('\n');
    }

    let path = write_fixture("ply-ascii", "cube.ply", contents.as_bytes());

    let registry = LoaderRegistry::new();
    let source = registry.open_triangle_mesh_file("ply", &path).unwrap();

    assert_eq!(source.encoding, MeshEncoding::Ascii);
    assert_eq!(source.vertex_count(), 8);
    assert_eq!(source.face_count(), 12);
    assert_eq!(source.payload_offset, CUBE_HEADER.len() as u64);
}

#[test]
fn test_open_binary_mesh_header() {
    // Binary payload bytes after end_header must not confuse the header
    // parser.
    let header = "ply\nformat binary_little_endian 1.0\nelement vertex 2\n\
        property float x\nproperty float y\nproperty float z\nend_header\n";
    let mut contents = header.as_bytes().to_vec();
    contents.extend_from_slice(&[0x00, 0x80, 0xFF, 0x13, 0x37, 0x00, 0x00, 0x00]);

    let path = write_fixture("ply-binary", "points.ply", &contents);

    let registry = LoaderRegistry::new();
    let source = registry.open_triangle_mesh_file("ply", &path).unwrap();

    assert_eq!(source.encoding, MeshEncoding::BinaryLittleEndian);
    assert_eq!(source.vertex_count(), 2);
    assert_eq!(source.face_count(), 0);
    assert_eq!(source.payload_offset, header.len() as u64);
}

#[test]
fn test_open_truncated_mesh() {
    let path = write_fixture(
        "ply-truncated",
        "cut.ply",
        b"ply\nformat ascii 1.0\nelement vertex 100\n",
    );

    let registry = LoaderRegistry::new();
    let err = registry.open_triangle_mesh_file("ply", &path).unwrap_err();

    assert!(matches!(err, LoaderError::UnexpectedEof { .. }));
}

#[test]
fn test_open_non_ply_file() {
    let path = write_fixture("ply-not-ply", "scene.ply", b"<?xml version=\"1.0\"?><x/>");

    let registry = LoaderRegistry::new();
    let err = registry.open_triangle_mesh_file("ply", &path).unwrap_err();

    assert!(matches!(err, LoaderError::InvalidFormat { .. }));
}

#[test]
fn test_mesh_tag_not_registered_for_obj() {
    let path = write_fixture("ply-obj-miss", "bunny.obj", b"v 0 0 0\n");

    let registry = LoaderRegistry::new();
    let err = registry.open_triangle_mesh_file_path(&path).unwrap_err();

    assert!(err.is_unknown_loader());
}
