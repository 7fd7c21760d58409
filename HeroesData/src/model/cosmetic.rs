//! Collection items: announcers, banners, emoticons, mounts, skins and the rest

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::Serialize;

use super::enums::{Franchise, Gender, Rarity};
use super::tooltip::TooltipDescription;

/// Fields every collection item carries.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ItemInfo {
    pub id: String,
    pub hyperlink_id: Option<String>,
    pub attribute_id: Option<String>,
    pub name: Option<String>,
    pub sort_name: Option<String>,
    pub description: Option<TooltipDescription>,
    pub search_text: Option<String>,
    pub rarity: Rarity,
    pub collection_category: Option<String>,
    pub event_name: Option<String>,
    pub release_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Announcer {
    pub info: ItemInfo,
    pub gender: Gender,
    pub hero_id: Option<String>,
    pub image_file_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Banner {
    pub info: ItemInfo,
}

/// Sprite sheet placement of an emoticon.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct EmoticonImage {
    pub file_name: Option<String>,
    pub width: i32,
    pub index: Option<i32>,
    pub count: Option<i32>,
    pub duration_per_frame: Option<i32>,
    pub columns: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Emoticon {
    pub info: ItemInfo,
    pub expression: Option<String>,
    pub aliases: Vec<String>,
    pub localized_aliases: Vec<String>,
    pub hero_id: Option<String>,
    pub hero_skin_id: Option<String>,
    pub is_hidden: bool,
    pub is_alias_case_sensitive: bool,
    pub image: EmoticonImage,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct EmoticonPack {
    pub info: ItemInfo,
    pub emoticon_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Mount {
    pub info: ItemInfo,
    pub info_text: Option<TooltipDescription>,
    pub mount_category: Option<String>,
    pub franchise: Franchise,
    pub variation_mount_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Skin {
    pub info: ItemInfo,
    pub info_text: Option<TooltipDescription>,
    pub franchise: Franchise,
    pub variation_skin_ids: Vec<String>,
    pub voice_line_ids: Vec<String>,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SprayAnimation {
    pub texture: Option<String>,
    pub frames: i32,
    pub duration: i32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Spray {
    pub info: ItemInfo,
    pub hero_id: Option<String>,
    pub image_file_name: Option<String>,
    pub animation: Option<SprayAnimation>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct VoiceLine {
    pub info: ItemInfo,
    pub hero_id: Option<String>,
    pub image_file_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PortraitPack {
    pub info: ItemInfo,
    pub reward_portrait_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct RewardPortrait {
    pub info: ItemInfo,
    pub description_unlock: Option<TooltipDescription>,
    pub hero_id: Option<String>,
    pub portrait_pack_id: Option<String>,
    pub icon_slot: i32,
    pub texture_sheet_image: Option<String>,
    pub texture_sheet_columns: Option<i32>,
    pub texture_sheet_rows: Option<i32>,
}

/// An end-of-match award.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct MatchAward {
    pub info: ItemInfo,
    pub tag: Option<String>,
    pub mvp_screen_image_file_name: Option<String>,
    pub score_screen_image_file_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct LootChest {
    pub info: ItemInfo,
    pub max_rerolls: i32,
    pub type_description_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Bundle {
    pub info: ItemInfo,
    pub franchise: Franchise,
    pub is_dynamic: bool,
    pub image_file_name: Option<String>,
    pub hero_ids: Vec<String>,
    /// Hero id to the skin ids bundled for that hero.
    pub hero_skin_ids: IndexMap<String, Vec<String>>,
    pub mount_ids: Vec<String>,
    pub boost_bonus_id: Option<String>,
    pub gold_bonus: Option<i32>,
    pub gems_bonus: Option<i32>,
    pub loot_chest_bonus_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Boost {
    pub info: ItemInfo,
}
