//! Trait definitions for file loader implementations.

use std::fmt;
use std::path::Path;

use crate::error::LoaderError;
use crate::source::{MeshSource, SceneSource, VolumeSource};

/// Namespace partition for loader registrations.
///
/// Tags are unique within a category, not across categories: `"xml"` could
/// in principle name both an object-file loader and a mesh loader without
/// conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoaderCategory {
    /// Scene-object description files (e.g. the XML `.osp` format).
    ObjectFile,
    /// Volumetric data files (e.g. raw brick-of-bytes dumps).
    VolumeFile,
    /// Triangle mesh files (e.g. PLY).
    TriangleMesh,
}

impl LoaderCategory {
    /// All categories, in registry iteration order.
    pub const ALL: [LoaderCategory; 3] = [
        LoaderCategory::ObjectFile,
        LoaderCategory::VolumeFile,
        LoaderCategory::TriangleMesh,
    ];

    /// Human-readable label used in error messages and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            LoaderCategory::ObjectFile => "object file",
            LoaderCategory::VolumeFile => "volume file",
            LoaderCategory::TriangleMesh => "triangle mesh file",
        }
    }
}

impl fmt::Display for LoaderCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata shared by all loaders regardless of category.
///
/// Each concrete loader reports its registry tag, a display name for UI and
/// diagnostics, the file extensions it claims, and a magic-byte check for
/// detection when the extension is absent or ambiguous.
pub trait Loader: Send + Sync {
    /// Unique identifier within the loader's category (e.g. "osp", "raw",
    /// "ply"). Lowercase by convention; the registry lowercases on lookup.
    fn tag(&self) -> &'static str;

    /// Human-readable name for UI display.
    fn display_name(&self) -> &'static str;

    /// File extensions this loader handles (lowercase, without dots).
    fn extensions(&self) -> &'static [&'static str];

    /// Check whether this loader can likely handle the given data.
    ///
    /// Implementations should check magic bytes or header framing only.
    /// Formats without any magic (raw dumps) return `false` and are reached
    /// by tag or extension alone.
    fn can_load(&self, data: &[u8]) -> bool;
}

/// Loader capable of opening scene-object description files.
pub trait ObjectFileLoader: Loader {
    /// Open and validate a scene-object file, returning the declared
    /// top-level objects.
    fn open(&self, path: &Path) -> Result<SceneSource, LoaderError>;
}

/// Loader capable of opening volumetric data files.
pub trait VolumeFileLoader: Loader {
    /// Open and validate a volume file.
    fn open(&self, path: &Path) -> Result<VolumeSource, LoaderError>;
}

/// Loader capable of opening triangle mesh files.
pub trait TriangleMeshFileLoader: Loader {
    /// Open a mesh file and parse its header.
    fn open(&self, path: &Path) -> Result<MeshSource, LoaderError>;
}

impl fmt::Debug for dyn TriangleMeshFileLoader + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TriangleMeshFileLoader")
            .field("tag", &self.tag())
            .finish()
    }
}
