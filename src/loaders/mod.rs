//! Built-in file loaders.
//!
//! One implementation per registered tag: XML scene-object files (`osp`),
//! raw volume dumps (`raw`), and PLY triangle meshes (`ply`). All three are
//! registered by `LoaderRegistry::new`.

mod osp;
mod ply;
mod raw;

#[cfg(test)]
mod tests;

pub use osp::OspObjectFile;
pub use ply::PlyTriangleMeshFile;
pub use raw::RawVolumeFile;
