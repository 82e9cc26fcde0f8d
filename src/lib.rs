//! sceneio - pluggable file-format loaders for scene data
//!
//! A registry mapping short file-type tags ("osp", "raw", "ply") to loader
//! implementations, partitioned into three categories: scene-object files,
//! volume files, and triangle mesh files. The registry decouples
//! extension-based dispatch from the loaders themselves; built-in loaders
//! validate a file's header and report what it declares, leaving payload
//! decoding to the consumer.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sceneio::LoaderRegistry;
//!
//! let registry = LoaderRegistry::new();
//! let scene = registry.open_object_file_path(std::path::Path::new("engine.osp"))?;
//! for object in &scene.objects {
//!     println!("{} ({:?})", object.kind, object.name);
//! }
//! ```
//!
//! ## Adding New Formats
//!
//! 1. Implement [`Loader`] plus the capability trait for the category
//!    ([`ObjectFileLoader`], [`VolumeFileLoader`], or
//!    [`TriangleMeshFileLoader`])
//! 2. Register it with the matching `register_*` method before sharing the
//!    registry

mod error;
mod loaders;
mod registry;
mod source;
mod traits;

pub use error::{LoaderError, RegistryError};
pub use loaders::{OspObjectFile, PlyTriangleMeshFile, RawVolumeFile};
pub use registry::{DuplicatePolicy, LoaderRegistry};
pub use source::{ElementDecl, MeshEncoding, MeshSource, SceneObjectRef, SceneSource, VolumeSource};
pub use traits::{
    Loader, LoaderCategory, ObjectFileLoader, TriangleMeshFileLoader, VolumeFileLoader,
};
