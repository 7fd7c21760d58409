//! # HeroesData
//!
//! Read-only access to extracted Heroes of the Storm data: heroes, units,
//! collection items and the localized game strings that go with them.
//!
//! ## Overview
//!
//! - **Data documents** - JSON (or legacy XML) files keyed by entity id
//! - **Game strings** - one file per locale, overlaid onto records
//! - **Readers** - lookups by id, hyperlink id, attribute id and more,
//!   projecting a fresh typed record on every call
//! - **Data directory** - per-version folders of data and game strings
//!
//! ## Quick Start
//!
//! ### Reading heroes
//!
//! ```no_run
//! use heroesdata::reader::HeroDataReader;
//!
//! let reader = HeroDataReader::open("herodata_76893_localized.json")?;
//! let abathur = reader.get_by_id("Abathur")?;
//! println!("{:?} has {} talents", abathur.name(), abathur.talents.len());
//!
//! if let Some(hero) = reader.try_get_by_unit_id("HeroAlarak")? {
//!     println!("found {}", hero.id);
//! }
//! # Ok::<(), heroesdata::Error>(())
//! ```
//!
//! ### Localized records from a data directory
//!
//! ```no_run
//! use heroesdata::prelude::*;
//!
//! let data = HeroesDataDirectory::new("heroes-data")?;
//! if let Some(version) = data.newest_version() {
//!     let mounts = data.reader::<Mount>(version, Locale::KoKr)?;
//!     for mount in mounts.all()? {
//!         println!("{}: {:?}", mount.info.id, mount.info.name);
//!     }
//! }
//! # Ok::<(), heroesdata::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `async` - Enables `open_async` constructors backed by `tokio::fs`

pub mod directory;
pub mod document;
pub mod error;
pub mod formats;
pub mod gamestrings;
pub mod model;
pub mod projection;
pub mod reader;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::document::{Locale, StructuredDocument};
    pub use crate::formats::{DocumentFormat, Node};
    pub use crate::gamestrings::{GameStringDocument, Localize};
    pub use crate::projection::{Entity, HeroProjection, UnitProjection};
    pub use crate::directory::{HeroesDataDirectory, HeroesDataVersion};

    pub use crate::model::{
        Ability, AbilityTalentId, AbilityTier, AbilityType, Announcer, Banner, Boost, Bundle,
        Emoticon, EmoticonPack, Franchise, Gender, Hero, LootChest, MatchAward, Mount,
        PortraitPack, Rarity, RewardPortrait, Skin, Spray, Talent, TalentTier,
        TooltipDescription, Unit, VoiceLine,
    };

    pub use crate::reader::{
        AnnouncerDataReader, BannerDataReader, BoostDataReader, BundleDataReader, DataReader,
        EmoticonDataReader, EmoticonPackDataReader, HeroDataReader, LootChestDataReader,
        MatchAwardDataReader, MountDataReader, PortraitPackDataReader, RewardPortraitDataReader,
        SkinDataReader, SprayDataReader, UnitDataReader, VoiceLineDataReader,
    };
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
