//! Data readers
//!
//! A [`DataReader`] owns one data document and, optionally, a shared
//! [`GameStringDocument`]. Every lookup scans the document, projects the
//! matching entry into a fresh record and, when game strings are
//! attached, localizes it before handing it over.
//!
//! Lookups come in pairs: `get_*` fails with [`Error::NotFound`] on a miss,
//! `try_get_*` returns `Ok(None)`. Both fail with
//! [`Error::InvalidArgument`] for an empty key.
//!
//! # Usage
//!
//! ```no_run
//! use std::sync::Arc;
//! use heroesdata::gamestrings::GameStringDocument;
//! use heroesdata::reader::HeroDataReader;
//!
//! let strings = Arc::new(GameStringDocument::open("gamestrings_76893_kokr.json")?);
//! let reader = HeroDataReader::open_with_game_strings("herodata_76893_localized.json", strings)?;
//!
//! let hero = reader.get_by_hyperlink_id("Abathur")?;
//! println!("{} ({})", hero.name().unwrap_or_default(), hero.unit_id());
//! # Ok::<(), heroesdata::Error>(())
//! ```

mod cosmetic;
mod hero;
pub mod lookup;
mod unit;

use std::fmt;
use std::marker::PhantomData;
use std::path::Path;
use std::sync::Arc;

use crate::document::{Locale, StructuredDocument};
use crate::error::{Error, Result};
use crate::formats::Node;
use crate::gamestrings::{GameStringDocument, Localize};
use crate::model::{
    Announcer, Banner, Boost, Bundle, Emoticon, EmoticonPack, Hero, LootChest, MatchAward, Mount,
    PortraitPack, RewardPortrait, Skin, Spray, Unit, VoiceLine,
};
use crate::projection::Entity;

pub use cosmetic::HeroOwned;
use lookup::{find_by_field, find_by_id, require_key};

pub type HeroDataReader = DataReader<Hero>;
pub type UnitDataReader = DataReader<Unit>;
pub type AnnouncerDataReader = DataReader<Announcer>;
pub type BannerDataReader = DataReader<Banner>;
pub type BoostDataReader = DataReader<Boost>;
pub type BundleDataReader = DataReader<Bundle>;
pub type EmoticonDataReader = DataReader<Emoticon>;
pub type EmoticonPackDataReader = DataReader<EmoticonPack>;
pub type LootChestDataReader = DataReader<LootChest>;
pub type MatchAwardDataReader = DataReader<MatchAward>;
pub type MountDataReader = DataReader<Mount>;
pub type PortraitPackDataReader = DataReader<PortraitPack>;
pub type RewardPortraitDataReader = DataReader<RewardPortrait>;
pub type SkinDataReader = DataReader<Skin>;
pub type SprayDataReader = DataReader<Spray>;
pub type VoiceLineDataReader = DataReader<VoiceLine>;

/// Reads records of kind `E` out of one data document.
pub struct DataReader<E: Entity> {
    document: StructuredDocument,
    game_strings: Option<Arc<GameStringDocument>>,
    _kind: PhantomData<fn() -> E>,
}

impl<E: Entity> DataReader<E> {
    /// Wrap a parsed document. Records keep their source texts.
    pub fn new(document: StructuredDocument) -> Self {
        Self {
            document,
            game_strings: None,
            _kind: PhantomData,
        }
    }

    /// Wrap a parsed document and localize every record with `game_strings`.
    pub fn with_game_strings(document: StructuredDocument, game_strings: Arc<GameStringDocument>) -> Self {
        Self {
            document,
            game_strings: Some(game_strings),
            _kind: PhantomData,
        }
    }

    /// Parse a JSON data document held in memory.
    ///
    /// # Errors
    /// Returns a parse error for malformed bytes.
    pub fn parse(data: &[u8]) -> Result<Self> {
        StructuredDocument::parse(data).map(Self::new)
    }

    /// Read a data document from disk; see [`StructuredDocument::open`].
    ///
    /// # Errors
    /// Returns [`Error::FileNotFound`] or a parse error.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        StructuredDocument::open(path).map(Self::new)
    }

    /// Read a data document from disk with an explicit locale.
    ///
    /// # Errors
    /// Returns [`Error::FileNotFound`] or a parse error.
    pub fn open_with_locale<P: AsRef<Path>>(path: P, locale: Locale) -> Result<Self> {
        StructuredDocument::open_with_locale(path, locale).map(Self::new)
    }

    /// Read a data document from disk and attach game strings. The reader
    /// takes the locale of the game strings.
    ///
    /// # Errors
    /// Returns [`Error::FileNotFound`] or a parse error.
    pub fn open_with_game_strings<P: AsRef<Path>>(
        path: P,
        game_strings: Arc<GameStringDocument>,
    ) -> Result<Self> {
        let document = StructuredDocument::open_with_locale(path, game_strings.locale())?;
        Ok(Self::with_game_strings(document, game_strings))
    }

    /// Read a data document without blocking the executor.
    ///
    /// # Errors
    /// Returns [`Error::FileNotFound`] or a parse error.
    #[cfg(feature = "async")]
    pub async fn open_async<P: AsRef<Path>>(path: P) -> Result<Self> {
        StructuredDocument::open_async(path).await.map(Self::new)
    }

    #[must_use]
    pub fn document(&self) -> &StructuredDocument {
        &self.document
    }

    /// The game strings locale when attached, otherwise the document's.
    #[must_use]
    pub fn locale(&self) -> Locale {
        self.game_strings
            .as_ref()
            .map_or(self.document.locale(), |strings| strings.locale())
    }

    #[must_use]
    pub fn game_strings(&self) -> Option<&Arc<GameStringDocument>> {
        self.game_strings.as_ref()
    }

    /// Attach (or replace) the game strings used to localize records.
    pub fn set_game_strings(&mut self, game_strings: Arc<GameStringDocument>) {
        self.game_strings = Some(game_strings);
    }

    /// Detach the game strings, returning them.
    pub fn take_game_strings(&mut self) -> Option<Arc<GameStringDocument>> {
        self.game_strings.take()
    }

    /// Number of entries in the document.
    #[must_use]
    pub fn count(&self) -> usize {
        self.document.count()
    }

    /// Entry ids in source order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.document.keys()
    }

    /// Every record, in source order.
    ///
    /// # Errors
    /// Fails on the first entry that cannot be projected.
    pub fn all(&self) -> Result<Vec<E>> {
        self.all_with(E::Options::default())
    }

    /// Every record, built with `options`.
    ///
    /// # Errors
    /// Fails on the first entry that cannot be projected.
    pub fn all_with(&self, options: E::Options) -> Result<Vec<E>> {
        self.document
            .entries()
            .map(|(key, node)| self.build(key, node, options))
            .collect()
    }

    /// # Errors
    /// [`Error::InvalidArgument`] for an empty id, [`Error::NotFound`] on a miss.
    pub fn get_by_id(&self, id: &str) -> Result<E> {
        self.get_by_id_with(id, E::Options::default())
    }

    /// # Errors
    /// [`Error::InvalidArgument`] for an empty id.
    pub fn try_get_by_id(&self, id: &str) -> Result<Option<E>> {
        self.try_get_by_id_with(id, E::Options::default())
    }

    /// Like [`get_by_id`](Self::get_by_id), building only what `options` asks for.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] for an empty id, [`Error::NotFound`] on a miss.
    pub fn get_by_id_with(&self, id: &str, options: E::Options) -> Result<E> {
        self.try_get_by_id_with(id, options)?
            .ok_or_else(|| not_found::<E>("id", id))
    }

    /// # Errors
    /// [`Error::InvalidArgument`] for an empty id.
    pub fn try_get_by_id_with(&self, id: &str, options: E::Options) -> Result<Option<E>> {
        require_key("id", id)?;
        find_by_id(&self.document, id)
            .map(|node| self.build(id, node, options))
            .transpose()
    }

    /// # Errors
    /// [`Error::InvalidArgument`] for an empty id, [`Error::NotFound`] on a miss.
    pub fn get_by_hyperlink_id(&self, hyperlink_id: &str) -> Result<E> {
        self.get_by_field("hyperlinkId", hyperlink_id, E::Options::default())
    }

    /// # Errors
    /// [`Error::InvalidArgument`] for an empty id.
    pub fn try_get_by_hyperlink_id(&self, hyperlink_id: &str) -> Result<Option<E>> {
        self.try_get_by_field("hyperlinkId", hyperlink_id, E::Options::default())
    }

    /// # Errors
    /// [`Error::InvalidArgument`] for an empty id, [`Error::NotFound`] on a miss.
    pub fn get_by_attribute_id(&self, attribute_id: &str) -> Result<E> {
        self.get_by_field("attributeId", attribute_id, E::Options::default())
    }

    /// # Errors
    /// [`Error::InvalidArgument`] for an empty id.
    pub fn try_get_by_attribute_id(&self, attribute_id: &str) -> Result<Option<E>> {
        self.try_get_by_field("attributeId", attribute_id, E::Options::default())
    }

    /// First record whose string member `field` equals `value`.
    pub(crate) fn get_by_field(&self, field: &'static str, value: &str, options: E::Options) -> Result<E> {
        self.try_get_by_field(field, value, options)?
            .ok_or_else(|| not_found::<E>(field, value))
    }

    pub(crate) fn try_get_by_field(
        &self,
        field: &'static str,
        value: &str,
        options: E::Options,
    ) -> Result<Option<E>> {
        require_key(field, value)?;
        find_by_field(&self.document, field, value)
            .map(|(key, node)| self.build(key, node, options))
            .transpose()
    }

    /// Project one entry and localize it. Entry keys come from the document,
    /// so an empty key is data, not a bad argument.
    pub(crate) fn build(&self, key: &str, node: &Node, options: E::Options) -> Result<E> {
        let mut record = E::project(key, node, options, self.locale())?;
        if let Some(strings) = &self.game_strings {
            Localize::apply_game_strings(&mut record, strings);
        }
        Ok(record)
    }
}

fn not_found<E: Entity>(field: &'static str, value: &str) -> Error {
    Error::NotFound {
        kind: E::KIND,
        field,
        value: value.to_string(),
    }
}

impl<E: Entity> fmt::Debug for DataReader<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataReader")
            .field("kind", &E::KIND)
            .field("locale", &self.locale())
            .field("entries", &self.count())
            .field("game_strings", &self.game_strings.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const BANNERS: &[u8] = br#"{
        "BannerD3": {"name": "Diablo Banner", "hyperlinkId": "D3Banner", "attributeId": "BN01", "rarity": "Rare"},
        "BannerWoW": {"name": "Warcraft Banner", "hyperlinkId": "WoWBanner"}
    }"#;

    const STRINGS: &[u8] = br#"{
        "meta": {"locale": "dede"},
        "gamestrings": {"banner": {"name": {"BannerD3": "Diablo-Banner"}}}
    }"#;

    fn reader() -> BannerDataReader {
        BannerDataReader::parse(BANNERS).unwrap()
    }

    #[test]
    fn test_hit_and_miss_symmetry() {
        let reader = reader();
        let got = reader.get_by_id("BannerD3").unwrap();
        let tried = reader.try_get_by_id("BannerD3").unwrap().unwrap();
        assert_eq!(got, tried);

        assert!(reader.try_get_by_id("Missing").unwrap().is_none());
        let err = reader.get_by_id("Missing").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "banner not found where id = 'Missing'");
    }

    #[test]
    fn test_alternate_keys() {
        let reader = reader();
        assert_eq!(reader.get_by_hyperlink_id("WoWBanner").unwrap().info.id, "BannerWoW");
        assert_eq!(reader.get_by_attribute_id("BN01").unwrap().info.id, "BannerD3");
        assert!(reader.try_get_by_attribute_id("BN02").unwrap().is_none());
        assert!(reader.get_by_hyperlink_id("Nope").unwrap_err().is_not_found());
    }

    #[test]
    fn test_empty_keys_rejected() {
        let reader = reader();
        assert!(matches!(reader.get_by_id(""), Err(Error::InvalidArgument { .. })));
        assert!(matches!(reader.try_get_by_id(""), Err(Error::InvalidArgument { .. })));
        assert!(matches!(reader.try_get_by_hyperlink_id(""), Err(Error::InvalidArgument { .. })));
        assert!(matches!(reader.get_by_attribute_id(""), Err(Error::InvalidArgument { .. })));
    }

    #[test]
    fn test_ids_count_all() {
        let reader = reader();
        assert_eq!(reader.ids().collect::<Vec<_>>(), vec!["BannerD3", "BannerWoW"]);
        assert_eq!(reader.count(), 2);
        let names: Vec<String> = reader
            .all()
            .unwrap()
            .into_iter()
            .filter_map(|b| b.info.name)
            .collect();
        assert_eq!(names, vec!["Diablo Banner", "Warcraft Banner"]);
    }

    #[test]
    fn test_records_are_fresh_per_call() {
        let reader = reader();
        let mut first = reader.get_by_id("BannerD3").unwrap();
        first.info.name = Some("changed".to_string());
        assert_eq!(reader.get_by_id("BannerD3").unwrap().info.name.as_deref(), Some("Diablo Banner"));
    }

    #[test]
    fn test_empty_entry_key_with_game_strings() {
        let strings = Arc::new(GameStringDocument::parse(STRINGS).unwrap());
        let data = br#"{"": {"name": "Nameless"}, "BannerD3": {}}"#;

        let plain = BannerDataReader::parse(data).unwrap();
        let localized = BannerDataReader::with_game_strings(StructuredDocument::parse(data).unwrap(), strings);

        assert_eq!(plain.all().unwrap().len(), 2);
        let banners = localized.all().unwrap();
        assert_eq!(banners.len(), 2);
        assert_eq!(banners[0].info.name.as_deref(), Some("Nameless"));
        assert_eq!(banners[1].info.name.as_deref(), Some("Diablo-Banner"));
    }

    #[test]
    fn test_attached_game_strings() {
        let strings = Arc::new(GameStringDocument::parse(STRINGS).unwrap());
        let mut reader = reader();
        assert_eq!(reader.locale(), Locale::EnUs);

        reader.set_game_strings(Arc::clone(&strings));
        assert_eq!(reader.locale(), Locale::DeDe);
        let banner = reader.get_by_id("BannerD3").unwrap();
        assert_eq!(banner.info.name.as_deref(), Some("Diablo-Banner"));
        // No string for this one: the source text stays.
        let banner = reader.get_by_id("BannerWoW").unwrap();
        assert_eq!(banner.info.name.as_deref(), Some("Warcraft Banner"));

        // The store outlives the reader that borrowed it.
        drop(reader);
        assert_eq!(strings.get("banner", "name", "BannerD3"), Some("Diablo-Banner"));
    }
}
