//! Loader for raw volumetric data files.

use std::path::Path;

use crate::error::LoaderError;
use crate::source::VolumeSource;
use crate::traits::{Loader, VolumeFileLoader};

/// Loader for `.raw` volume files.
///
/// A raw file is a brick of voxel bytes with no header: dimensions and voxel
/// type come from whatever declared the volume (typically a scene-object
/// file). Opening validates that the file exists and is non-empty and
/// records the payload length, which consumers check against their declared
/// extent via [`VolumeSource::validate_extent`].
pub struct RawVolumeFile;

impl Loader for RawVolumeFile {
    fn tag(&self) -> &'static str {
        "raw"
    }

    fn display_name(&self) -> &'static str {
        "Raw Volume Data"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["raw"]
    }

    fn can_load(&self, _data: &[u8]) -> bool {
        // Raw dumps have no magic bytes; reachable by tag or extension only.
        false
    }
}

impl VolumeFileLoader for RawVolumeFile {
    fn open(&self, path: &Path) -> Result<VolumeSource, LoaderError> {
        let metadata = std::fs::metadata(path)?;

        if !metadata.is_file() {
            return Err(LoaderError::invalid_format(format!(
                "{:?} is not a regular file",
                path
            )));
        }

        let byte_len = metadata.len();
        if byte_len == 0 {
            return Err(LoaderError::invalid_format(format!(
                "volume file {:?} is empty",
                path
            )));
        }

        log::trace!("RawVolumeFile: {:?} holds {} payload bytes", path, byte_len);

        Ok(VolumeSource::new(path, byte_len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loader_metadata() {
        let loader = RawVolumeFile;
        assert_eq!(loader.tag(), "raw");
        assert!(loader.extensions().contains(&"raw"));
    }

    #[test]
    fn test_no_magic_detection() {
        let loader = RawVolumeFile;
        // Any byte soup is a plausible raw volume, so detection must never
        // claim one.
        assert!(!loader.can_load(&[0u8; 64]));
        assert!(!loader.can_load(b""));
    }

    #[test]
    fn test_open_missing_file() {
        let loader = RawVolumeFile;
        let err = loader
            .open(Path::new("/nonexistent/volume.raw"))
            .unwrap_err();
        assert!(matches!(err, LoaderError::Io(_)));
    }
}
