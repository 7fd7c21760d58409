//! Error types for `HeroesData`

use std::path::PathBuf;

use thiserror::Error;

/// The error type for `HeroesData` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A path-based constructor was given a path that does not exist.
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The file has an extension we don't know how to parse.
    #[error("unsupported document format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    // ==================== Parsing Errors ====================
    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// XML parsing error.
    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// XML attribute error.
    #[error("XML attribute error: {0}")]
    XmlAttr(String),

    /// The document parsed but its top level is not a keyed collection.
    #[error("malformed document: {0}")]
    MalformedDocument(String),

    /// The game strings document is missing its `meta.locale` entry.
    #[error("malformed game strings metadata: {0}")]
    MalformedMeta(String),

    /// A sub-structure was present but one of its required members was not.
    #[error("missing required field '{field}' in '{parent}'")]
    MissingField {
        /// The member that was expected.
        field: &'static str,
        /// The sub-structure it was expected in.
        parent: String,
    },

    // ==================== Lookup Errors ====================
    /// A lookup key or value was empty.
    #[error("argument '{name}' must not be empty")]
    InvalidArgument {
        /// Name of the offending argument.
        name: &'static str,
    },

    /// A `get_*` lookup found no matching entry.
    #[error("{kind} not found where {field} = '{value}'")]
    NotFound {
        /// Entity kind that was searched (e.g. "hero").
        kind: &'static str,
        /// Field that was matched against (e.g. "hyperlinkId").
        field: &'static str,
        /// The value that had no match.
        value: String,
    },

    // ==================== Data Directory Errors ====================
    /// A version string could not be parsed.
    #[error("invalid version: {0}")]
    InvalidVersion(String),
}

impl Error {
    /// Whether this error means the source bytes were not well-formed.
    #[must_use]
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Self::Json(_) | Self::Xml(_) | Self::XmlAttr(_) | Self::MalformedDocument(_)
        )
    }

    /// Whether this error is a lookup miss.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

// Add conversion from quick_xml::events::attributes::AttrError
impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Error::XmlAttr(err.to_string())
    }
}

/// A specialized Result type for `HeroesData` operations.
pub type Result<T> = std::result::Result<T, Error>;
