//! Loader registry: category/tag keyed lookup of file loaders.

use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

use crate::error::{LoaderError, RegistryError};
use crate::loaders::{OspObjectFile, PlyTriangleMeshFile, RawVolumeFile};
use crate::source::{MeshSource, SceneSource, VolumeSource};
use crate::traits::{
    Loader, LoaderCategory, ObjectFileLoader, TriangleMeshFileLoader, VolumeFileLoader,
};

/// What to do when a registration hits an already-occupied category/tag pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Fail the registration with [`RegistryError::DuplicateRegistration`].
    #[default]
    Reject,
    /// Keep the newer registration, discarding the older one.
    Replace,
}

/// Registry of available file loaders, partitioned by category.
///
/// This provides a central location to discover and access loader
/// implementations. All built-in loaders are registered automatically on
/// creation; additional loaders can be registered before the registry is
/// shared. Lookups never mutate, so a populated registry can be read from
/// any number of threads.
pub struct LoaderRegistry {
    policy: DuplicatePolicy,
    object_files: HashMap<String, Box<dyn ObjectFileLoader>>,
    volume_files: HashMap<String, Box<dyn VolumeFileLoader>>,
    triangle_mesh_files: HashMap<String, Box<dyn TriangleMeshFileLoader>>,
}

static GLOBAL: OnceLock<LoaderRegistry> = OnceLock::new();

impl LoaderRegistry {
    /// Create a new registry with all built-in loaders registered and the
    /// default [`DuplicatePolicy::Reject`] policy.
    pub fn new() -> Self {
        let mut registry = Self::empty();

        // Register built-in loaders. Tags are distinct within each
        // category, so none of these can conflict.
        registry
            .register_object_file(Box::new(OspObjectFile))
            .expect("built-in loader tags are distinct");
        registry
            .register_volume_file(Box::new(RawVolumeFile))
            .expect("built-in loader tags are distinct");
        registry
            .register_triangle_mesh_file(Box::new(PlyTriangleMeshFile))
            .expect("built-in loader tags are distinct");

        registry
    }

    /// Create a registry with no loaders registered.
    pub fn empty() -> Self {
        Self {
            policy: DuplicatePolicy::default(),
            object_files: HashMap::new(),
            volume_files: HashMap::new(),
            triangle_mesh_files: HashMap::new(),
        }
    }

    /// Create a registry with built-ins and the given duplicate policy.
    pub fn with_policy(policy: DuplicatePolicy) -> Self {
        let mut registry = Self::new();
        registry.policy = policy;
        registry
    }

    /// The process-wide registry with the built-in loaders.
    ///
    /// Initialized on first use; the returned reference is shared and
    /// immutable, so no further synchronization is needed for lookups.
    /// Callers that need custom registrations construct their own instance
    /// with [`LoaderRegistry::new`].
    pub fn global() -> &'static LoaderRegistry {
        GLOBAL.get_or_init(LoaderRegistry::new)
    }

    fn insert<L: Loader + ?Sized>(
        map: &mut HashMap<String, Box<L>>,
        policy: DuplicatePolicy,
        category: LoaderCategory,
        loader: Box<L>,
    ) -> Result<(), RegistryError> {
        let tag = loader.tag().to_lowercase();

        if map.contains_key(&tag) {
            match policy {
                DuplicatePolicy::Reject => {
                    return Err(RegistryError::duplicate(category, tag));
                }
                DuplicatePolicy::Replace => {
                    log::warn!(
                        "Replacing {} loader previously registered for tag '{}'",
                        category,
                        tag
                    );
                }
            }
        } else {
            log::debug!(
                "Registered {} loader '{}' ({})",
                category,
                tag,
                loader.display_name()
            );
        }

        map.insert(tag, loader);
        Ok(())
    }

    /// Register a scene-object file loader under its own tag.
    pub fn register_object_file(
        &mut self,
        loader: Box<dyn ObjectFileLoader>,
    ) -> Result<(), RegistryError> {
        Self::insert(
            &mut self.object_files,
            self.policy,
            LoaderCategory::ObjectFile,
            loader,
        )
    }

    /// Register a volume file loader under its own tag.
    pub fn register_volume_file(
        &mut self,
        loader: Box<dyn VolumeFileLoader>,
    ) -> Result<(), RegistryError> {
        Self::insert(
            &mut self.volume_files,
            self.policy,
            LoaderCategory::VolumeFile,
            loader,
        )
    }

    /// Register a triangle mesh file loader under its own tag.
    pub fn register_triangle_mesh_file(
        &mut self,
        loader: Box<dyn TriangleMeshFileLoader>,
    ) -> Result<(), RegistryError> {
        Self::insert(
            &mut self.triangle_mesh_files,
            self.policy,
            LoaderCategory::TriangleMesh,
            loader,
        )
    }

    /// Look up the object file loader registered for a tag.
    pub fn object_file(&self, tag: &str) -> Result<&dyn ObjectFileLoader, RegistryError> {
        self.object_files
            .get(&tag.to_lowercase())
            .map(|l| l.as_ref())
            .ok_or_else(|| RegistryError::unknown(LoaderCategory::ObjectFile, tag))
    }

    /// Look up the volume file loader registered for a tag.
    pub fn volume_file(&self, tag: &str) -> Result<&dyn VolumeFileLoader, RegistryError> {
        self.volume_files
            .get(&tag.to_lowercase())
            .map(|l| l.as_ref())
            .ok_or_else(|| RegistryError::unknown(LoaderCategory::VolumeFile, tag))
    }

    /// Look up the triangle mesh file loader registered for a tag.
    pub fn triangle_mesh_file(
        &self,
        tag: &str,
    ) -> Result<&dyn TriangleMeshFileLoader, RegistryError> {
        self.triangle_mesh_files
            .get(&tag.to_lowercase())
            .map(|l| l.as_ref())
            .ok_or_else(|| RegistryError::unknown(LoaderCategory::TriangleMesh, tag))
    }

    /// Open a scene-object file with the loader registered for `tag`.
    ///
    /// Propagates [`RegistryError::UnknownLoader`] on a registry miss and
    /// the loader's own error unchanged otherwise.
    pub fn open_object_file(&self, tag: &str, path: &Path) -> Result<SceneSource, LoaderError> {
        let loader = self.object_file(tag)?;
        let source = loader.open(path)?;
        log::debug!("Opened {:?} with '{}' object file loader", path, loader.tag());
        Ok(source)
    }

    /// Open a volume file with the loader registered for `tag`.
    pub fn open_volume_file(&self, tag: &str, path: &Path) -> Result<VolumeSource, LoaderError> {
        let loader = self.volume_file(tag)?;
        let source = loader.open(path)?;
        log::debug!("Opened {:?} with '{}' volume file loader", path, loader.tag());
        Ok(source)
    }

    /// Open a triangle mesh file with the loader registered for `tag`.
    pub fn open_triangle_mesh_file(
        &self,
        tag: &str,
        path: &Path,
    ) -> Result<MeshSource, LoaderError> {
        let loader = self.triangle_mesh_file(tag)?;
        let source = loader.open(path)?;
        log::debug!(
            "Opened {:?} with '{}' triangle mesh loader",
            path,
            loader.tag()
        );
        Ok(source)
    }

    /// Derive a loader tag from a path's extension (lowercased).
    pub fn tag_for_path(path: &Path) -> Option<String> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase())
    }

    fn require_tag(path: &Path) -> Result<String, LoaderError> {
        Self::tag_for_path(path).ok_or_else(|| {
            LoaderError::invalid_format(format!(
                "{:?} has no file extension to derive a loader tag from",
                path
            ))
        })
    }

    /// Open a scene-object file, deriving the tag from the file extension.
    pub fn open_object_file_path(&self, path: &Path) -> Result<SceneSource, LoaderError> {
        self.open_object_file(&Self::require_tag(path)?, path)
    }

    /// Open a volume file, deriving the tag from the file extension.
    pub fn open_volume_file_path(&self, path: &Path) -> Result<VolumeSource, LoaderError> {
        self.open_volume_file(&Self::require_tag(path)?, path)
    }

    /// Open a triangle mesh file, deriving the tag from the file extension.
    pub fn open_triangle_mesh_file_path(&self, path: &Path) -> Result<MeshSource, LoaderError> {
        self.open_triangle_mesh_file(&Self::require_tag(path)?, path)
    }

    /// Whether a loader is registered for the category/tag pair.
    pub fn contains(&self, category: LoaderCategory, tag: &str) -> bool {
        let tag = tag.to_lowercase();
        match category {
            LoaderCategory::ObjectFile => self.object_files.contains_key(&tag),
            LoaderCategory::VolumeFile => self.volume_files.contains_key(&tag),
            LoaderCategory::TriangleMesh => self.triangle_mesh_files.contains_key(&tag),
        }
    }

    /// Registered tags for a category, sorted.
    pub fn tags(&self, category: LoaderCategory) -> Vec<&str> {
        let mut tags: Vec<&str> = match category {
            LoaderCategory::ObjectFile => self.object_files.keys().map(String::as_str).collect(),
            LoaderCategory::VolumeFile => self.volume_files.keys().map(String::as_str).collect(),
            LoaderCategory::TriangleMesh => {
                self.triangle_mesh_files.keys().map(String::as_str).collect()
            }
        };
        tags.sort_unstable();
        tags
    }

    /// All file extensions claimed by a category's loaders (for file
    /// filtering), sorted and deduplicated.
    pub fn supported_extensions(&self, category: LoaderCategory) -> Vec<&'static str> {
        let mut extensions: Vec<&'static str> = match category {
            LoaderCategory::ObjectFile => self
                .object_files
                .values()
                .flat_map(|l| l.extensions().iter().copied())
                .collect(),
            LoaderCategory::VolumeFile => self
                .volume_files
                .values()
                .flat_map(|l| l.extensions().iter().copied())
                .collect(),
            LoaderCategory::TriangleMesh => self
                .triangle_mesh_files
                .values()
                .flat_map(|l| l.extensions().iter().copied())
                .collect(),
        };
        extensions.sort_unstable();
        extensions.dedup();
        extensions
    }

    /// Check if a filename has an extension some loader in the category
    /// claims.
    pub fn is_supported_file(&self, category: LoaderCategory, filename: &str) -> bool {
        let lower = filename.to_lowercase();
        self.supported_extensions(category)
            .iter()
            .any(|ext| lower.ends_with(&format!(".{}", ext)))
    }
}

impl Default for LoaderRegistry {
    fn default() -> Self {
        Self::new()
    }
}
