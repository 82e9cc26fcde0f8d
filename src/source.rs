//! Header-level descriptions of opened files.
//!
//! A loader's `open` returns one of these: the file has been opened and its
//! header validated, and the struct records what the header declares. The
//! payload itself (scene parameters, voxel data, vertex data) is read by
//! downstream consumers, not here.

use std::path::PathBuf;

use crate::error::LoaderError;

/// A top-level object declared in a scene-object file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneObjectRef {
    /// Object kind as declared (element name, e.g. "volume", "light").
    pub kind: String,
    /// Optional object name from the declaration's `name` attribute.
    pub name: Option<String>,
}

impl SceneObjectRef {
    /// Create a new object reference.
    pub fn new(kind: impl Into<String>, name: Option<String>) -> Self {
        Self {
            kind: kind.into(),
            name,
        }
    }
}

/// An opened scene-object file and the objects it declares.
#[derive(Debug, Clone)]
pub struct SceneSource {
    /// Path the file was opened from.
    pub path: PathBuf,
    /// Name of the document's root element.
    pub root: String,
    /// Top-level objects declared under the root, in document order.
    pub objects: Vec<SceneObjectRef>,
}

impl SceneSource {
    /// Create a new scene source.
    pub fn new(path: impl Into<PathBuf>, root: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            root: root.into(),
            objects: Vec::new(),
        }
    }

    /// Objects of a given kind, in document order.
    pub fn objects_of_kind<'a>(&'a self, kind: &str) -> Vec<&'a SceneObjectRef> {
        self.objects.iter().filter(|o| o.kind == kind).collect()
    }
}

/// An opened volumetric data file.
///
/// Raw volume dumps carry no header, so the only recorded facts are the
/// source path and payload length; whether the length is consistent with a
/// given extent is checked by [`VolumeSource::validate_extent`].
#[derive(Debug, Clone)]
pub struct VolumeSource {
    /// Path the file was opened from.
    pub path: PathBuf,
    /// Total payload length in bytes.
    pub byte_len: u64,
}

impl VolumeSource {
    /// Create a new volume source.
    pub fn new(path: impl Into<PathBuf>, byte_len: u64) -> Self {
        Self {
            path: path.into(),
            byte_len,
        }
    }

    /// Check that the payload length matches a voxel grid of the given
    /// dimensions and per-voxel size.
    pub fn validate_extent(
        &self,
        dims: (u64, u64, u64),
        bytes_per_voxel: u64,
    ) -> Result<(), LoaderError> {
        let expected = dims
            .0
            .checked_mul(dims.1)
            .and_then(|v| v.checked_mul(dims.2))
            .and_then(|v| v.checked_mul(bytes_per_voxel))
            .ok_or_else(|| LoaderError::invalid_format("volume extent overflows u64"))?;

        if expected == 0 {
            return Err(LoaderError::invalid_format("volume extent is empty"));
        }

        if self.byte_len != expected {
            return Err(LoaderError::invalid_format(format!(
                "volume is {} bytes but {}x{}x{} voxels of {} bytes require {}",
                self.byte_len, dims.0, dims.1, dims.2, bytes_per_voxel, expected
            )));
        }

        Ok(())
    }
}

/// Storage encoding of a PLY mesh file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeshEncoding {
    /// Text payload, whitespace-separated values.
    Ascii,
    /// Binary payload, little-endian scalars.
    BinaryLittleEndian,
    /// Binary payload, big-endian scalars.
    BinaryBigEndian,
}

impl MeshEncoding {
    /// Whether the payload after the header is binary.
    pub fn is_binary(&self) -> bool {
        !matches!(self, MeshEncoding::Ascii)
    }
}

/// An element declaration from a mesh file header: a name and how many
/// entries of that element the payload contains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementDecl {
    /// Element name as declared (e.g. "vertex", "face").
    pub name: String,
    /// Declared entry count.
    pub count: u64,
}

impl ElementDecl {
    /// Create a new element declaration.
    pub fn new(name: impl Into<String>, count: u64) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}

/// An opened triangle-mesh file with a parsed header.
#[derive(Debug, Clone)]
pub struct MeshSource {
    /// Path the file was opened from.
    pub path: PathBuf,
    /// Payload encoding declared by the header's `format` line.
    pub encoding: MeshEncoding,
    /// Elements in header declaration order.
    pub elements: Vec<ElementDecl>,
    /// Byte offset of the first payload byte (just past `end_header`).
    pub payload_offset: u64,
}

impl MeshSource {
    /// Look up a declared element by name.
    pub fn element(&self, name: &str) -> Option<&ElementDecl> {
        self.elements.iter().find(|e| e.name == name)
    }

    /// Declared vertex count.
    pub fn vertex_count(&self) -> u64 {
        self.element("vertex").map_or(0, |e| e.count)
    }

    /// Declared face count (0 for point clouds).
    pub fn face_count(&self) -> u64 {
        self.element("face").map_or(0, |e| e.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_extent_accepts_matching_size() {
        let source = VolumeSource::new("/data/head.raw", 4 * 4 * 2 * 2);
        assert!(source.validate_extent((4, 4, 2), 2).is_ok());
    }

    #[test]
    fn test_validate_extent_rejects_mismatch() {
        let source = VolumeSource::new("/data/head.raw", 100);
        let err = source.validate_extent((4, 4, 4), 2).unwrap_err();
        assert!(matches!(err, LoaderError::InvalidFormat { .. }));
    }

    #[test]
    fn test_validate_extent_rejects_empty_and_overflow() {
        let source = VolumeSource::new("/data/head.raw", 100);
        assert!(source.validate_extent((0, 4, 4), 2).is_err());
        assert!(source.validate_extent((u64::MAX, u64::MAX, 2), 2).is_err());
    }

    #[test]
    fn test_mesh_source_counts() {
        let source = MeshSource {
            path: PathBuf::from("bunny.ply"),
            encoding: MeshEncoding::Ascii,
            elements: vec![ElementDecl::new("vertex", 8), ElementDecl::new("face", 12)],
            payload_offset: 64,
        };
        assert_eq!(source.vertex_count(), 8);
        assert_eq!(source.face_count(), 12);
        assert!(source.element("edge").is_none());
        assert!(!source.encoding.is_binary());
    }
}
