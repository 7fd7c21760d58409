//! Structured data documents
//!
//! A [`StructuredDocument`] is an immutable parsed data file plus the
//! locale it was written for. Its top level is a keyed collection: each
//! member name is an entity key and each value is that entity's node.
//!
//! # Usage
//!
//! ```no_run
//! use heroesdata::document::StructuredDocument;
//!
//! let doc = StructuredDocument::open("herodata_76893_kokr.json")?;
//! println!("{} heroes in {}", doc.count(), doc.locale());
//! for (id, node) in doc.entries() {
//!     println!("{id}: {:?}", node.str_field("name"));
//! }
//! # Ok::<(), heroesdata::Error>(())
//! ```

pub mod locale;
mod reader;

use std::path::Path;

use crate::error::{Error, Result};
use crate::formats::{DocumentFormat, Node};

pub use locale::{Locale, UnknownLocale};
pub(crate) use reader::read_bytes;
#[cfg(feature = "async")]
pub(crate) use reader::read_bytes_async;

/// An immutable parsed data document.
#[derive(Debug, Clone)]
pub struct StructuredDocument {
    root: Node,
    locale: Locale,
}

impl StructuredDocument {
    /// Parse a JSON document held in memory. The locale is the default.
    ///
    /// # Errors
    /// Returns a parse error if the bytes are not a well-formed keyed document.
    pub fn parse(data: &[u8]) -> Result<Self> {
        Self::from_bytes(data, DocumentFormat::Json, Locale::default())
    }

    /// Parse an XML document held in memory. The locale is the default.
    ///
    /// # Errors
    /// Returns a parse error if the bytes are not well-formed XML.
    pub fn parse_xml(data: &[u8]) -> Result<Self> {
        Self::from_bytes(data, DocumentFormat::Xml, Locale::default())
    }

    /// Parse a JSON document with an explicit locale.
    ///
    /// # Errors
    /// Returns a parse error if the bytes are not a well-formed keyed document.
    pub fn parse_with_locale(data: &[u8], locale: Locale) -> Result<Self> {
        Self::from_bytes(data, DocumentFormat::Json, locale)
    }

    /// Parse bytes of the given format.
    ///
    /// # Errors
    /// Returns a parse error if the bytes are not a well-formed keyed document.
    pub fn from_bytes(data: &[u8], format: DocumentFormat, locale: Locale) -> Result<Self> {
        Self::from_node(format.parse(data)?, locale)
    }

    /// Wrap an already parsed tree.
    ///
    /// # Errors
    /// Returns [`Error::MalformedDocument`] if the top level is not an object.
    pub fn from_node(root: Node, locale: Locale) -> Result<Self> {
        if root.as_object().is_none() {
            return Err(Error::MalformedDocument(
                "top level is not a keyed collection".to_string(),
            ));
        }
        Ok(Self { root, locale })
    }

    /// Read a document from disk.
    ///
    /// The format comes from the extension and the locale from a trailing
    /// `_<code>` in the file name, falling back to the default locale.
    ///
    /// # Errors
    /// Returns [`Error::FileNotFound`] if the path does not exist (whatever
    /// its extension), [`Error::UnsupportedFormat`] for an existing file with
    /// an unknown extension, or a parse error.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let locale = Locale::from_file_name(path).unwrap_or_default();
        Self::open_with_locale(path, locale)
    }

    /// Read a document from disk with an explicit locale.
    ///
    /// # Errors
    /// Same as [`StructuredDocument::open`].
    pub fn open_with_locale<P: AsRef<Path>>(path: P, locale: Locale) -> Result<Self> {
        let path = path.as_ref();
        let data = read_bytes(path)?;
        let format = DocumentFormat::detect(path)?;
        let doc = Self::from_bytes(&data, format, locale)?;
        tracing::debug!(
            "Loaded {} ({:?}, {}): {} entries",
            path.display(),
            format,
            locale,
            doc.count()
        );
        Ok(doc)
    }

    /// Read a document from disk without blocking the executor.
    ///
    /// Parsing itself is synchronous once the bytes are in memory.
    ///
    /// # Errors
    /// Same as [`StructuredDocument::open`].
    #[cfg(feature = "async")]
    pub async fn open_async<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let locale = Locale::from_file_name(path).unwrap_or_default();
        let data = read_bytes_async(path).await?;
        let format = DocumentFormat::detect(path)?;
        Self::from_bytes(&data, format, locale)
    }

    /// The locale this document was written for.
    #[must_use]
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// The whole parsed tree.
    #[must_use]
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Top-level entries in source order. Each call starts a fresh enumeration.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Node)> + Clone {
        self.root
            .as_object()
            .into_iter()
            .flat_map(|m| m.iter().map(|(k, v)| (k.as_str(), v)))
    }

    /// Entity keys in source order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries().map(|(k, _)| k)
    }

    /// Direct lookup of an entry by its key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.root.get(key)
    }

    /// Number of top-level entries, by full enumeration.
    #[must_use]
    pub fn count(&self) -> usize {
        self.entries().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const HEROES: &[u8] = br#"{
        "Abathur": {"name": "Abathur", "hyperlinkId": "Abathur"},
        "Alarak": {"name": "Alarak"},
        "Zagara": {"name": "Zagara"}
    }"#;

    #[test]
    fn test_entries_in_source_order() {
        let doc = StructuredDocument::parse(HEROES).unwrap();
        let keys: Vec<&str> = doc.keys().collect();
        assert_eq!(keys, vec!["Abathur", "Alarak", "Zagara"]);
        assert_eq!(doc.count(), 3);
        assert_eq!(doc.locale(), Locale::EnUs);
    }

    #[test]
    fn test_entries_restartable() {
        let doc = StructuredDocument::parse(HEROES).unwrap();
        let first = doc.entries();
        let again = first.clone();
        assert_eq!(first.count(), again.count());
        assert_eq!(doc.entries().count(), 3);
    }

    #[test]
    fn test_top_level_must_be_object() {
        let err = StructuredDocument::parse(b"[1, 2]").unwrap_err();
        assert!(matches!(err, Error::MalformedDocument(_)));
        assert!(err.is_parse_error());
    }

    #[test]
    fn test_empty_document() {
        let doc = StructuredDocument::parse(b"{}").unwrap();
        assert!(doc.is_empty());
        assert_eq!(doc.count(), 0);
    }

    #[test]
    fn test_open_infers_locale() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("herodata_76893_kokr.json");
        std::fs::write(&path, HEROES).unwrap();

        let doc = StructuredDocument::open(&path).unwrap();
        assert_eq!(doc.locale(), Locale::KoKr);
        assert!(doc.get("Alarak").is_some());
    }

    #[test]
    fn test_open_unrecognized_suffix_uses_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("herodata_76893_localized.json");
        std::fs::write(&path, HEROES).unwrap();

        assert_eq!(StructuredDocument::open(&path).unwrap().locale(), Locale::EnUs);
    }

    #[test]
    fn test_open_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = StructuredDocument::open(dir.path().join("nope_enus.json")).unwrap_err();
        assert!(matches!(err, Error::FileNotFound(_)));
    }

    #[test]
    fn test_open_missing_file_without_known_extension() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["herodata_kokr", "herodata.dat"] {
            let err = StructuredDocument::open(dir.path().join(name)).unwrap_err();
            assert!(matches!(err, Error::FileNotFound(_)), "{name}");
        }

        let path = dir.path().join("herodata.dat");
        std::fs::write(&path, HEROES).unwrap();
        assert!(matches!(
            StructuredDocument::open(&path),
            Err(Error::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_open_xml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("herodata_frfr.xml");
        std::fs::write(&path, br#"<Heroes><Hero id="Abathur" name="Abathur"/></Heroes>"#).unwrap();

        let doc = StructuredDocument::open(&path).unwrap();
        assert_eq!(doc.locale(), Locale::FrFr);
        assert_eq!(doc.get("Abathur").and_then(|n| n.str_field("name")), Some("Abathur"));
    }
}
