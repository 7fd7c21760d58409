//! Structured document formats
//!
//! Data files are either JSON (the current format) or XML. Both are read
//! into the same [`Node`] tree so everything above this module is
//! format-agnostic.

pub mod json;
pub mod node;
pub mod xml;

use std::path::Path;

use crate::error::{Error, Result};

pub use json::parse_json;
pub use node::{FromNode, Node};
pub use xml::parse_xml;

/// Supported document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocumentFormat {
    #[default]
    Json,
    Xml,
}

impl DocumentFormat {
    /// Detect the format of a file from its extension.
    ///
    /// # Errors
    /// Returns [`Error::UnsupportedFormat`] for anything but `.json` and `.xml`.
    pub fn detect(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            Some(ext) if ext.eq_ignore_ascii_case("xml") => Ok(Self::Xml),
            _ => Err(Error::UnsupportedFormat(path.to_path_buf())),
        }
    }

    /// Parse bytes in this format.
    ///
    /// # Errors
    /// Returns a parse error if the bytes are not well-formed.
    pub fn parse(self, data: &[u8]) -> Result<Node> {
        match self {
            Self::Json => parse_json(data),
            Self::Xml => parse_xml(data),
        }
    }

    /// Get the file extension for this format
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Xml => "xml",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_format() {
        assert_eq!(DocumentFormat::detect(Path::new("herodata_76893_enus.json")).unwrap(), DocumentFormat::Json);
        assert_eq!(DocumentFormat::detect(Path::new("HeroData.XML")).unwrap(), DocumentFormat::Xml);
        assert!(matches!(
            DocumentFormat::detect(Path::new("heroes.zip")),
            Err(Error::UnsupportedFormat(_))
        ));
        assert!(DocumentFormat::detect(Path::new("noext")).is_err());
    }
}
