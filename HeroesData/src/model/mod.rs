//! Domain records
//!
//! Plain data built by [`crate::projection`] and localized by
//! [`crate::gamestrings`]. Optional source fields are `Option`s or empty
//! collections; enumerations default to their `Unknown` variant.

pub mod ability;
pub mod cosmetic;
pub mod enums;
pub mod hero;
pub mod tooltip;
pub mod unit;

pub use ability::{
    Ability, AbilityTalentId, AbilityTalentInfo, AbilityTalentTooltip, Talent, TooltipCharges,
};
pub use cosmetic::{
    Announcer, Banner, Boost, Bundle, Emoticon, EmoticonImage, EmoticonPack, ItemInfo, LootChest,
    MatchAward, Mount, PortraitPack, RewardPortrait, Skin, Spray, SprayAnimation, VoiceLine,
};
pub use enums::{AbilityTier, AbilityType, Franchise, Gender, Rarity, TalentTier};
pub use hero::{Hero, HeroRatings};
pub use tooltip::TooltipDescription;
pub use unit::{Unit, UnitArmor, UnitEnergy, UnitLife, UnitShield, UnitWeapon, WeaponAttributeFactor};
