//! Localized game strings
//!
//! A game strings file holds every display text of one locale:
//!
//! ```json
//! {
//!   "meta": {"version": "2.55.3.90670", "locale": "enus"},
//!   "gamestrings": {
//!     "hero": {"name": {"Abathur": "Abathur"}},
//!     "abiltalent": {"name": {"AbathurSymbiote|AbathurSymbiote|Q|False": "Symbiote"}}
//!   }
//! }
//! ```
//!
//! [`GameStringDocument::overlay`] copies the texts that apply to a record
//! onto it. Records opt in through [`Localize`].

mod localize;

use std::path::Path;
use std::str::FromStr;

use crate::document::{Locale, read_bytes};
use crate::error::{Error, Result};
use crate::formats::{Node, parse_json};
use crate::model::TooltipDescription;

/// A record whose display fields can be replaced by localized strings.
pub trait Localize {
    /// The record's own id. Overlaying a record with an empty id is refused.
    fn localization_id(&self) -> &str;

    /// Replace every display field that has an entry in `strings`, and
    /// recurse into nested records. Fields without an entry are left alone.
    fn apply_game_strings(&mut self, strings: &GameStringDocument);
}

/// A parsed, immutable game strings file.
#[derive(Debug, Clone)]
pub struct GameStringDocument {
    strings: Node,
    locale: Locale,
    version: Option<String>,
}

impl GameStringDocument {
    /// Parse a game strings file held in memory.
    ///
    /// # Errors
    /// Returns a parse error for malformed bytes, or [`Error::MalformedMeta`]
    /// if `meta.locale` is missing or not a known locale.
    pub fn parse(data: &[u8]) -> Result<Self> {
        Self::from_node(parse_json(data)?, None)
    }

    /// Parse a game strings file, taking the locale from the caller instead
    /// of `meta.locale`.
    ///
    /// # Errors
    /// Returns a parse error for malformed bytes.
    pub fn parse_with_locale(data: &[u8], locale: Locale) -> Result<Self> {
        Self::from_node(parse_json(data)?, Some(locale))
    }

    /// Read a game strings file from disk.
    ///
    /// The locale comes from a `_<code>` file name suffix when there is one,
    /// otherwise from `meta.locale`.
    ///
    /// # Errors
    /// Returns [`Error::FileNotFound`], a parse error, or
    /// [`Error::MalformedMeta`] when neither source names a locale.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = read_bytes(path)?;
        let doc = Self::from_node(parse_json(&data)?, Locale::from_file_name(path))?;
        tracing::debug!(
            "Loaded game strings {} ({}, version {:?})",
            path.display(),
            doc.locale,
            doc.version
        );
        Ok(doc)
    }

    /// Read a game strings file from disk with an explicit locale.
    ///
    /// # Errors
    /// Returns [`Error::FileNotFound`] or a parse error.
    pub fn open_with_locale<P: AsRef<Path>>(path: P, locale: Locale) -> Result<Self> {
        let data = read_bytes(path.as_ref())?;
        Self::from_node(parse_json(&data)?, Some(locale))
    }

    /// Read a game strings file without blocking the executor.
    ///
    /// # Errors
    /// Same as [`GameStringDocument::open`].
    #[cfg(feature = "async")]
    pub async fn open_async<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = crate::document::read_bytes_async(path).await?;
        Self::from_node(parse_json(&data)?, Locale::from_file_name(path))
    }

    fn from_node(root: Node, locale: Option<Locale>) -> Result<Self> {
        if root.as_object().is_none() {
            return Err(Error::MalformedDocument(
                "game strings top level is not a keyed collection".to_string(),
            ));
        }

        let meta = root.get("meta");
        let version = meta.and_then(|m| m.string_field("version"));
        let locale = match locale {
            Some(locale) => locale,
            None => meta_locale(meta)?,
        };

        let strings = root.get("gamestrings").cloned().unwrap_or_default();

        Ok(Self {
            strings,
            locale,
            version,
        })
    }

    #[must_use]
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Game version from `meta.version`, if present.
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Direct lookup of `gamestrings.<category>.<field>.<key>`.
    #[must_use]
    pub fn get(&self, category: &str, field: &str, key: &str) -> Option<&str> {
        self.strings.get(category)?.get(field)?.str_field(key)
    }

    /// Like [`get`](Self::get), as a tooltip tagged with this document's locale.
    #[must_use]
    pub fn tooltip(&self, category: &str, field: &str, key: &str) -> Option<TooltipDescription> {
        self.get(category, field, key)
            .map(|text| TooltipDescription::new(text, self.locale))
    }

    /// Categories present in the file, in source order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.strings.members().map(|(name, _)| name)
    }

    /// Total number of strings across all categories and fields.
    #[must_use]
    pub fn count(&self) -> usize {
        self.strings
            .members()
            .flat_map(|(_, fields)| fields.members())
            .map(|(_, entries)| entries.members().count())
            .sum()
    }

    /// Replace the display fields of `record` with the strings stored for it.
    ///
    /// Stored strings always win over the record's current values; fields
    /// with no stored string keep their value. Nested records (abilities,
    /// talents, hero units) are localized too.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] if the record's id is empty.
    /// Missing strings are never an error.
    pub fn overlay<R: Localize + ?Sized>(&self, record: &mut R) -> Result<()> {
        if record.localization_id().is_empty() {
            return Err(Error::InvalidArgument { name: "record.id" });
        }
        record.apply_game_strings(self);
        Ok(())
    }

    pub(crate) fn set_string(&self, target: &mut Option<String>, category: &str, field: &str, key: &str) {
        if let Some(text) = self.get(category, field, key) {
            *target = Some(text.to_string());
        }
    }

    pub(crate) fn set_tooltip(
        &self,
        target: &mut Option<TooltipDescription>,
        category: &str,
        field: &str,
        key: &str,
    ) {
        if let Some(text) = self.tooltip(category, field, key) {
            *target = Some(text);
        }
    }
}

fn meta_locale(meta: Option<&Node>) -> Result<Locale> {
    let code = meta
        .and_then(|m| m.str_field("locale"))
        .ok_or_else(|| Error::MalformedMeta("meta.locale is missing".to_string()))?;
    Locale::from_str(code).map_err(|e| Error::MalformedMeta(e.to_string()))
}
