//! Loader for XML scene-object files.

use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::LoaderError;
use crate::source::{SceneObjectRef, SceneSource};
use crate::traits::{Loader, ObjectFileLoader};

/// Loader for `.osp` XML scene-object files.
///
/// An object file declares a scene as an XML document: one root element
/// whose children are the scene objects (volumes, lights, cameras, ...),
/// each optionally carrying a `name` attribute. Nested elements are the
/// objects' parameters and are left to the consumer; this loader validates
/// the document and reports the top-level declarations.
pub struct OspObjectFile;

impl OspObjectFile {
    /// Extract the `name` attribute from an element, if present.
    fn name_attribute(e: &BytesStart<'_>) -> Result<Option<String>, LoaderError> {
        for attr in e.attributes() {
            let attr = attr.map_err(|e| LoaderError::Xml(e.into()))?;
            if attr.key.as_ref() == b"name" {
                let value = attr.unescape_value()?;
                return Ok(Some(value.into_owned()));
            }
        }
        Ok(None)
    }

    fn parse(path: &Path, content: &str) -> Result<SceneSource, LoaderError> {
        let mut reader = Reader::from_str(content);
        reader.trim_text(true);

        let mut root: Option<String> = None;
        let mut objects = Vec::new();
        let mut depth = 0usize;

        loop {
            match reader.read_event() {
                Ok(Event::Start(ref e)) => {
                    let name = String::from_utf8_lossy(e.name().as_ref()).to_string();

                    if depth == 0 {
                        if root.is_some() {
                            return Err(LoaderError::invalid_format(
                                "scene file has more than one root element",
                            ));
                        }
                        root = Some(name);
                    } else if depth == 1 {
                        objects.push(SceneObjectRef::new(name, Self::name_attribute(e)?));
                    }
                    depth += 1;
                }
                Ok(Event::Empty(ref e)) => {
                    let name = String::from_utf8_lossy(e.name().as_ref()).to_string();

                    if depth == 0 {
                        if root.is_some() {
                            return Err(LoaderError::invalid_format(
                                "scene file has more than one root element",
                            ));
                        }
                        // An empty root declares no objects but is valid.
                        root = Some(name);
                    } else if depth == 1 {
                        objects.push(SceneObjectRef::new(name, Self::name_attribute(e)?));
                    }
                }
                Ok(Event::End(_)) => {
                    depth = depth.saturating_sub(1);
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(LoaderError::Xml(e));
                }
                _ => {}
            }
        }

        let root = root
            .ok_or_else(|| LoaderError::invalid_format("scene file has no root element"))?;

        log::trace!(
            "OspObjectFile: {:?} declares {} objects under <{}>",
            path,
            objects.len(),
            root
        );

        let mut source = SceneSource::new(path, root);
        source.objects = objects;
        Ok(source)
    }
}

impl Loader for OspObjectFile {
    fn tag(&self) -> &'static str {
        "osp"
    }

    fn display_name(&self) -> &'static str {
        "OSP Scene Objects (XML)"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["osp"]
    }

    fn can_load(&self, data: &[u8]) -> bool {
        // XML has no fixed magic beyond the opening angle bracket; accept a
        // declaration or a bare root element after leading whitespace.
        let trimmed = data
            .iter()
            .position(|b| !b.is_ascii_whitespace())
            .map(|i| &data[i..])
            .unwrap_or_default();
        trimmed.starts_with(b"<")
    }
}

impl ObjectFileLoader for OspObjectFile {
    fn open(&self, path: &Path) -> Result<SceneSource, LoaderError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(path, &content)
    }
}
