//! Tests for opening scene-object files through the registry.

use crate::error::LoaderError;
use crate::registry::LoaderRegistry;

use super::write_fixture;

const SCENE: &str = r#"<?xml version="1.0"?>
<ospray>
    <volume name="engine">
        <filename>engine.raw</filename>
        <dimensions>256 256 128</dimensions>
        <voxelType>uchar</voxelType>
    </volume>
    <volume name="overlay">
        <filename>overlay.raw</filename>
    </volume>
    <light name="key"/>
</ospray>
"#;

#[test]
fn test_open_scene_by_tag() {
    let path = write_fixture("osp-by-tag", "engine.osp", SCENE.as_bytes());

    let registry = LoaderRegistry::new();
    let source = registry.open_object_file("osp", &path).unwrap();

    assert_eq!(source.root, "ospray");
    assert_eq!(source.objects.len(), 3);

    let volumes = source.objects_of_kind("volume");
    assert_eq!(volumes.len(), 2);
    assert_eq!(volumes[0].name.as_deref(), Some("engine"));
    assert_eq!(volumes[1].name.as_deref(), Some("overlay"));
}

#[test]
fn test_open_scene_by_path() {
    let path = write_fixture("osp-by-path", "scene.osp", SCENE.as_bytes());

    let registry = LoaderRegistry::new();
    let source = registry.open_object_file_path(&path).unwrap();

    assert_eq!(source.path, path);
    assert_eq!(source.objects_of_kind("light").len(), 1);
}

#[test]
fn test_open_malformed_scene_is_xml_error() {
    // Mismatched close tag: the XML error must surface, not UnknownLoader.
    let path = write_fixture(
        "osp-malformed",
        "broken.osp",
        b"<ospray><volume name=\"v\"></ospray>",
    );

    let registry = LoaderRegistry::new();
    let err = registry.open_object_file("osp", &path).unwrap_err();

    assert!(matches!(err, LoaderError::Xml(_)));
    assert!(!err.is_unknown_loader());
}

#[test]
fn test_open_missing_scene_is_io_error() {
    let registry = LoaderRegistry::new();
    let err = registry
        .open_object_file("osp", std::path::Path::new("/nonexistent/scene.osp"))
        .unwrap_err();

    assert!(matches!(err, LoaderError::Io(_)));
}
