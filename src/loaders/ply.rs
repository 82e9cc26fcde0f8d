//! Loader for PLY triangle mesh files.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::LoaderError;
use crate::source::{ElementDecl, MeshEncoding, MeshSource};
use crate::traits::{Loader, TriangleMeshFileLoader};

/// Loader for `.ply` triangle mesh files.
///
/// Parses the PLY header only: the `ply` magic, the `format` line, the
/// `element`/`property` declarations, and `end_header`. The vertex and face
/// payload that follows is left to the consumer; its start is recorded as
/// [`MeshSource::payload_offset`]. A `vertex` element is required, a `face`
/// element is not (point clouds are valid PLY).
pub struct PlyTriangleMeshFile;

impl PlyTriangleMeshFile {
    /// PLY magic line: "ply" on its own line.
    const MAGIC: &'static [u8] = b"ply";

    /// Read one header line, returning it without the line terminator and
    /// the number of bytes consumed from the reader.
    fn read_line<R: BufRead>(
        reader: &mut R,
        context: &str,
    ) -> Result<(String, u64), LoaderError> {
        let mut buf = Vec::new();
        let consumed = reader.read_until(b'\n', &mut buf)?;
        if consumed == 0 {
            return Err(LoaderError::unexpected_eof(context.to_string()));
        }

        while matches!(buf.last(), Some(&b'\n') | Some(&b'\r')) {
            buf.pop();
        }

        Ok((String::from_utf8_lossy(&buf).to_string(), consumed as u64))
    }

    fn parse_header<R: BufRead>(
        reader: &mut R,
    ) -> Result<(MeshEncoding, Vec<ElementDecl>, u64), LoaderError> {
        let (magic, mut offset) = Self::read_line(reader, "PLY magic")?;
        if magic.trim() != "ply" {
            return Err(LoaderError::invalid_format(
                "file does not start with the 'ply' magic line",
            ));
        }

        let mut encoding: Option<MeshEncoding> = None;
        let mut elements: Vec<ElementDecl> = Vec::new();

        loop {
            let (line, consumed) = Self::read_line(reader, "PLY header")?;
            offset += consumed;

            let mut tokens = line.split_whitespace();
            let Some(keyword) = tokens.next() else {
                continue;
            };

            match keyword {
                "format" => {
                    let storage = tokens
                        .next()
                        .ok_or_else(|| LoaderError::missing_field("format storage type"))?;
                    encoding = Some(match storage {
                        "ascii" => MeshEncoding::Ascii,
                        "binary_little_endian" => MeshEncoding::BinaryLittleEndian,
                        "binary_big_endian" => MeshEncoding::BinaryBigEndian,
                        other => {
                            return Err(LoaderError::invalid_format(format!(
                                "unknown PLY storage format '{}'",
                                other
                            )));
                        }
                    });
                }
                "element" => {
                    let name = tokens
                        .next()
                        .ok_or_else(|| LoaderError::missing_field("element name"))?;
                    let count = tokens
                        .next()
                        .ok_or_else(|| LoaderError::missing_field("element count"))?;
                    let count: u64 = count.parse().map_err(|_| {
                        LoaderError::invalid_format(format!(
                            "element '{}' has non-numeric count '{}'",
                            name, count
                        ))
                    })?;
                    elements.push(ElementDecl::new(name, count));
                }
                "property" => {
                    if elements.is_empty() {
                        return Err(LoaderError::invalid_format(
                            "property declared before any element",
                        ));
                    }
                    // Property layout is the consumer's concern.
                }
                "comment" | "obj_info" => {}
                "end_header" => break,
                other => {
                    return Err(LoaderError::invalid_format(format!(
                        "unrecognized PLY header keyword '{}'",
                        other
                    )));
                }
            }
        }

        let encoding =
            encoding.ok_or_else(|| LoaderError::missing_field("format declaration"))?;

        if !elements.iter().any(|e| e.name == "vertex") {
            return Err(LoaderError::missing_field("vertex element"));
        }

        Ok((encoding, elements, offset))
    }
}

impl Loader for PlyTriangleMeshFile {
    fn tag(&self) -> &'static str {
        "ply"
    }

    fn display_name(&self) -> &'static str {
        "PLY Triangle Mesh"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["ply"]
    }

    fn can_load(&self, data: &[u8]) -> bool {
        // "ply" followed by a line break; anything longer sharing the
        // prefix is some other format.
        data.starts_with(Self::MAGIC)
            && matches!(data.get(Self::MAGIC.len()), Some(&b'\n') | Some(&b'\r'))
    }
}

impl TriangleMeshFileLoader for PlyTriangleMeshFile {
    fn open(&self, path: &Path) -> Result<MeshSource, LoaderError> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);

        let (encoding, elements, payload_offset) = Self::parse_header(&mut reader)?;
        let source = MeshSource {
            path: path.to_path_buf(),
            encoding,
            elements,
            payload_offset,
        };

        log::trace!(
            "PlyTriangleMeshFile: {:?} declares {} vertices, {} faces",
            path,
            source.vertex_count(),
            source.face_count()
        );

        Ok(source)
    }
}
