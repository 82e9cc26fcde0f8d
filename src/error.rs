//! Error types for registry and loader operations.

use thiserror::Error;

use crate::traits::LoaderCategory;

/// Errors raised by the loader registry itself.
///
/// Both variants are registration/lookup bookkeeping; failures while reading
/// an actual file are [`LoaderError`]s.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A loader is already registered under this category/tag pair
    #[error("loader '{tag}' is already registered as a {category} loader")]
    DuplicateRegistration {
        /// Category the conflicting registration targeted
        category: LoaderCategory,
        /// Tag that was already taken
        tag: String,
    },

    /// No loader is registered under this category/tag pair
    #[error("no {category} loader registered for tag '{tag}'")]
    UnknownLoader {
        /// Category that was searched
        category: LoaderCategory,
        /// Tag that missed
        tag: String,
    },
}

impl RegistryError {
    /// Create a duplicate-registration error.
    pub fn duplicate(category: LoaderCategory, tag: impl Into<String>) -> Self {
        Self::DuplicateRegistration {
            category,
            tag: tag.into(),
        }
    }

    /// Create an unknown-loader error.
    pub fn unknown(category: LoaderCategory, tag: impl Into<String>) -> Self {
        Self::UnknownLoader {
            category,
            tag: tag.into(),
        }
    }
}

/// Errors that can occur while opening a file through a loader.
#[derive(Error, Debug)]
pub enum LoaderError {
    /// I/O error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// XML parsing error from the scene-object loader
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Registry-level failure (unknown tag) surfaced through an open call
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// File header or framing does not match the expected format
    #[error("Invalid format: {message}")]
    InvalidFormat {
        /// Description of the format error
        message: String,
    },

    /// Header is well-formed but a required declaration is absent
    #[error("Missing required field: {field}")]
    MissingField {
        /// Name of the missing declaration
        field: String,
    },

    /// File ended in the middle of a header
    #[error("Unexpected end of file while reading {context}")]
    UnexpectedEof {
        /// What was being read when the file ran out
        context: String,
    },
}

impl LoaderError {
    /// Create an invalid format error with a message.
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::InvalidFormat {
            message: message.into(),
        }
    }

    /// Create a missing field error.
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create an unexpected-EOF error.
    pub fn unexpected_eof(context: impl Into<String>) -> Self {
        Self::UnexpectedEof {
            context: context.into(),
        }
    }

    /// Whether this error is a registry miss rather than a decode failure.
    ///
    /// Callers dispatching on file extension use this to tell "unsupported
    /// file type" apart from "supported type, broken file".
    pub fn is_unknown_loader(&self) -> bool {
        matches!(self, Self::Registry(RegistryError::UnknownLoader { .. }))
    }
}
