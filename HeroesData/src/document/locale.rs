//! Game locales

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A language/region supported by the game client.
///
/// The canonical code is the lowercase language and region run together
/// (`enus`, `kokr`), as used in data file names like
/// `gamestrings_76893_kokr.json`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    EnUs,
    DeDe,
    EsEs,
    EsMx,
    FrFr,
    ItIt,
    KoKr,
    PlPl,
    PtBr,
    RuRu,
    ZhCn,
    ZhTw,
}

impl Locale {
    /// All supported locales.
    pub const ALL: [Locale; 12] = [
        Locale::EnUs,
        Locale::DeDe,
        Locale::EsEs,
        Locale::EsMx,
        Locale::FrFr,
        Locale::ItIt,
        Locale::KoKr,
        Locale::PlPl,
        Locale::PtBr,
        Locale::RuRu,
        Locale::ZhCn,
        Locale::ZhTw,
    ];

    /// The file-name code, e.g. `"enus"`.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::EnUs => "enus",
            Self::DeDe => "dede",
            Self::EsEs => "eses",
            Self::EsMx => "esmx",
            Self::FrFr => "frfr",
            Self::ItIt => "itit",
            Self::KoKr => "kokr",
            Self::PlPl => "plpl",
            Self::PtBr => "ptbr",
            Self::RuRu => "ruru",
            Self::ZhCn => "zhcn",
            Self::ZhTw => "zhtw",
        }
    }

    /// Infer the locale from a trailing `_<code>` token in the file stem.
    ///
    /// `herodata_76893_kokr.json` → `Some(KoKr)`; `herodata_76893_localized.json` → `None`.
    #[must_use]
    pub fn from_file_name<P: AsRef<Path>>(path: P) -> Option<Self> {
        let stem = path.as_ref().file_stem()?.to_str()?;
        let (_, code) = stem.rsplit_once('_')?;
        code.parse().ok()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned when a string is not a known locale code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLocale(pub String);

impl fmt::Display for UnknownLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown locale '{}'", self.0)
    }
}

impl std::error::Error for UnknownLocale {}

impl FromStr for Locale {
    type Err = UnknownLocale;

    /// Accepts `enus`, `enUS` and `en-us` spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();

        Self::ALL
            .into_iter()
            .find(|locale| locale.code() == normalized)
            .ok_or_else(|| UnknownLocale(s.to_string()))
    }
}
