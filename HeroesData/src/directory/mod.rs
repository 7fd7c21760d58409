//! Versioned data directory
//!
//! Extracted data is laid out one folder per game version:
//!
//! ```text
//! <root>/
//!   2.49.0.77525/
//!     data/herodata_77525_localized.json
//!     data/unitdata_77525_localized.json
//!     gamestrings/gamestrings_77525_enus.json
//!     gamestrings/gamestrings_77525_kokr.json
//!   2.49.0.77548_ptr/
//!     ...
//! ```

mod version;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use walkdir::WalkDir;

use crate::document::Locale;
use crate::error::{Error, Result};
use crate::gamestrings::GameStringDocument;
use crate::projection::Entity;
use crate::reader::DataReader;

pub use version::HeroesDataVersion;

/// A root folder of per-version data folders.
#[derive(Debug, Clone)]
pub struct HeroesDataDirectory {
    root: PathBuf,
    versions: Vec<HeroesDataVersion>,
}

impl HeroesDataDirectory {
    /// Scan `root` for version folders. Folders whose names are not versions
    /// are skipped.
    ///
    /// # Errors
    /// Returns [`Error::FileNotFound`] if `root` is not a directory.
    pub fn new<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(Error::FileNotFound(root.to_path_buf()));
        }

        let mut versions: Vec<HeroesDataVersion> = WalkDir::new(root)
            .follow_links(true)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_dir())
            .filter_map(|e| {
                let name = e.file_name().to_string_lossy();
                match name.parse::<HeroesDataVersion>() {
                    Ok(version) => Some(version),
                    Err(_) => {
                        tracing::warn!("Skipping non-version folder {}", e.path().display());
                        None
                    }
                }
            })
            .collect();
        versions.sort();

        tracing::info!("Found {} data versions in {}", versions.len(), root.display());

        Ok(Self {
            root: root.to_path_buf(),
            versions,
        })
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// All versions found, oldest first.
    #[must_use]
    pub fn versions(&self) -> &[HeroesDataVersion] {
        &self.versions
    }

    #[must_use]
    pub fn newest_version(&self) -> Option<HeroesDataVersion> {
        self.versions.last().copied()
    }

    #[must_use]
    pub fn oldest_version(&self) -> Option<HeroesDataVersion> {
        self.versions.first().copied()
    }

    #[must_use]
    pub fn contains(&self, version: HeroesDataVersion) -> bool {
        self.versions.binary_search(&version).is_ok()
    }

    /// Path of the `<kind>data` file of `version`, e.g. `kind = "hero"`.
    #[must_use]
    pub fn data_file_path(&self, kind: &str, version: HeroesDataVersion) -> PathBuf {
        self.root
            .join(version.to_string())
            .join("data")
            .join(format!("{kind}data_{}_localized.json", version.build))
    }

    /// Path of the game strings file of `version` in `locale`.
    #[must_use]
    pub fn game_strings_path(&self, version: HeroesDataVersion, locale: Locale) -> PathBuf {
        self.root
            .join(version.to_string())
            .join("gamestrings")
            .join(format!("gamestrings_{}_{locale}.json", version.build))
    }

    /// Both paths a reader of kind `E` needs.
    #[must_use]
    pub fn paths<E: Entity>(&self, version: HeroesDataVersion, locale: Locale) -> (PathBuf, PathBuf) {
        (
            self.data_file_path(E::KIND, version),
            self.game_strings_path(version, locale),
        )
    }

    /// Load the game strings of `version` in `locale`.
    ///
    /// # Errors
    /// Returns [`Error::FileNotFound`] or a parse error.
    pub fn game_strings(&self, version: HeroesDataVersion, locale: Locale) -> Result<GameStringDocument> {
        GameStringDocument::open_with_locale(self.game_strings_path(version, locale), locale)
    }

    /// Open a reader of kind `E` with the game strings of `locale` attached.
    ///
    /// # Errors
    /// Returns [`Error::FileNotFound`] if either file is missing, or a parse error.
    pub fn reader<E: Entity>(&self, version: HeroesDataVersion, locale: Locale) -> Result<DataReader<E>> {
        let strings = Arc::new(self.game_strings(version, locale)?);
        self.reader_with_game_strings(version, strings)
    }

    /// Open a reader of kind `E` sharing already loaded game strings.
    ///
    /// # Errors
    /// Returns [`Error::FileNotFound`] or a parse error.
    pub fn reader_with_game_strings<E: Entity>(
        &self,
        version: HeroesDataVersion,
        game_strings: Arc<GameStringDocument>,
    ) -> Result<DataReader<E>> {
        DataReader::open_with_game_strings(self.data_file_path(E::KIND, version), game_strings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Hero;
    use pretty_assertions::assert_eq;

    fn version(text: &str) -> HeroesDataVersion {
        text.parse().unwrap()
    }

    fn layout() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        for name in ["2.49.0.77525", "2.49.0.77525_ptr", "2.48.1.76893", "notes"] {
            std::fs::create_dir(dir.path().join(name)).unwrap();
        }
        std::fs::write(dir.path().join("2.50.0.1"), b"a file, not a folder").unwrap();
        dir
    }

    #[test]
    fn test_scan_versions() {
        // Surface the skipped-folder warnings when run with --nocapture
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();

        let dir = layout();
        let data = HeroesDataDirectory::new(dir.path()).unwrap();

        let versions: Vec<String> = data.versions().iter().map(ToString::to_string).collect();
        assert_eq!(versions, vec!["2.48.1.76893", "2.49.0.77525", "2.49.0.77525_ptr"]);
        assert_eq!(data.newest_version(), Some(version("2.49.0.77525_ptr")));
        assert_eq!(data.oldest_version(), Some(version("2.48.1.76893")));
        assert!(data.contains(version("2.49.0.77525")));
        assert!(!data.contains(version("2.50.0.1")));
    }

    #[test]
    fn test_missing_root() {
        let dir = tempfile::tempdir().unwrap();
        let err = HeroesDataDirectory::new(dir.path().join("missing")).unwrap_err();
        assert!(matches!(err, Error::FileNotFound(_)));
    }

    #[test]
    fn test_paths() {
        let dir = layout();
        let data = HeroesDataDirectory::new(dir.path()).unwrap();
        let v = version("2.49.0.77525_ptr");

        assert_eq!(
            data.data_file_path("hero", v),
            dir.path().join("2.49.0.77525_ptr/data/herodata_77525_localized.json")
        );
        assert_eq!(
            data.game_strings_path(v, Locale::KoKr),
            dir.path().join("2.49.0.77525_ptr/gamestrings/gamestrings_77525_kokr.json")
        );
        let (data_path, _) = data.paths::<Hero>(v, Locale::EnUs);
        assert!(data_path.ends_with("herodata_77525_localized.json"));
    }

    #[test]
    fn test_reader_attaches_game_strings() {
        let dir = layout();
        let v = version("2.49.0.77525");
        let root = dir.path().join(v.to_string());
        std::fs::create_dir_all(root.join("data")).unwrap();
        std::fs::create_dir_all(root.join("gamestrings")).unwrap();
        std::fs::write(
            root.join("data/herodata_77525_localized.json"),
            br#"{"Abathur": {"unitId": "HeroAbathur", "name": "Abathur"}}"#,
        )
        .unwrap();
        std::fs::write(
            root.join("gamestrings/gamestrings_77525_kokr.json"),
            br#"{"meta": {"locale": "kokr"}, "gamestrings": {"hero": {"name": {"Abathur": "KoAbathur"}}}}"#,
        )
        .unwrap();

        let data = HeroesDataDirectory::new(dir.path()).unwrap();
        let reader = data.reader::<Hero>(v, Locale::KoKr).unwrap();
        assert_eq!(reader.locale(), Locale::KoKr);
        assert_eq!(reader.get_by_id("Abathur").unwrap().name(), Some("KoAbathur"));

        let err = data.reader::<Hero>(v, Locale::DeDe).unwrap_err();
        assert!(matches!(err, Error::FileNotFound(_)));
    }
}
