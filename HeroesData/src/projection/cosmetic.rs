//! Collection item projection

use indexmap::IndexMap;

use super::{Entity, tooltip_field};
use crate::document::Locale;
use crate::error::Result;
use crate::formats::Node;
use crate::model::{
    Announcer, Banner, Boost, Bundle, Emoticon, EmoticonImage, EmoticonPack, Franchise, Gender,
    ItemInfo, LootChest, MatchAward, Mount, PortraitPack, Rarity, RewardPortrait, Skin, Spray,
    SprayAnimation, VoiceLine,
};

/// The members every collection item may carry.
fn item_info(key: &str, node: &Node, locale: Locale) -> ItemInfo {
    ItemInfo {
        id: key.to_string(),
        hyperlink_id: node.string_field("hyperlinkId"),
        attribute_id: node.string_field("attributeId"),
        name: node.string_field("name"),
        sort_name: node.string_field("sortName"),
        description: tooltip_field(node, "description", locale),
        search_text: node.string_field("searchText"),
        rarity: Rarity::parse_opt(node.str_field("rarity")),
        collection_category: node.string_field("category"),
        event_name: node.string_field("event"),
        release_date: node.date_field("releaseDate"),
    }
}

impl Entity for Announcer {
    const KIND: &'static str = "announcer";
    type Options = ();

    fn project(key: &str, node: &Node, (): (), locale: Locale) -> Result<Self> {
        Ok(Self {
            info: item_info(key, node, locale),
            gender: Gender::parse_opt(node.str_field("gender")),
            hero_id: node.string_field("heroId"),
            image_file_name: node.string_field("image"),
        })
    }
}

impl Entity for Banner {
    const KIND: &'static str = "banner";
    type Options = ();

    fn project(key: &str, node: &Node, (): (), locale: Locale) -> Result<Self> {
        Ok(Self {
            info: item_info(key, node, locale),
        })
    }
}

impl Entity for Emoticon {
    const KIND: &'static str = "emoticon";
    type Options = ();

    fn project(key: &str, node: &Node, (): (), locale: Locale) -> Result<Self> {
        // `image` is either a bare file name or a sprite sheet block.
        let image = match node.get("image") {
            Some(Node::String(file_name)) => EmoticonImage {
                file_name: Some(file_name.clone()),
                ..EmoticonImage::default()
            },
            Some(image) => EmoticonImage {
                file_name: image.string_field("fileName"),
                width: image.field("width").unwrap_or_default(),
                index: image.field("index"),
                count: image.field("count"),
                duration_per_frame: image.field("durationPerFrame"),
                columns: image.field("columns"),
            },
            None => EmoticonImage::default(),
        };

        Ok(Self {
            info: item_info(key, node, locale),
            expression: node.string_field("expression"),
            aliases: node.string_list("aliases"),
            localized_aliases: node.string_list("localizedAliases"),
            hero_id: node.string_field("heroId"),
            hero_skin_id: node.string_field("heroSkinId"),
            is_hidden: node.bool_field("isHidden").unwrap_or_default(),
            is_alias_case_sensitive: node.bool_field("caseSensitive").unwrap_or_default(),
            image,
        })
    }
}

impl Entity for EmoticonPack {
    const KIND: &'static str = "emoticonpack";
    type Options = ();

    fn project(key: &str, node: &Node, (): (), locale: Locale) -> Result<Self> {
        Ok(Self {
            info: item_info(key, node, locale),
            emoticon_ids: node.string_list("emoticons"),
        })
    }
}

impl Entity for Mount {
    const KIND: &'static str = "mount";
    type Options = ();

    fn project(key: &str, node: &Node, (): (), locale: Locale) -> Result<Self> {
        Ok(Self {
            info: item_info(key, node, locale),
            info_text: tooltip_field(node, "infoText", locale),
            mount_category: node.string_field("mountCategory"),
            franchise: Franchise::parse_opt(node.str_field("franchise")),
            variation_mount_ids: node.string_list("variationMounts"),
        })
    }
}

impl Entity for Skin {
    const KIND: &'static str = "skin";
    type Options = ();

    fn project(key: &str, node: &Node, (): (), locale: Locale) -> Result<Self> {
        Ok(Self {
            info: item_info(key, node, locale),
            info_text: tooltip_field(node, "infoText", locale),
            franchise: Franchise::parse_opt(node.str_field("franchise")),
            variation_skin_ids: node.string_list("variationSkins"),
            voice_line_ids: node.string_list("voiceLines"),
            features: node.string_list("features"),
        })
    }
}

impl Entity for Spray {
    const KIND: &'static str = "spray";
    type Options = ();

    fn project(key: &str, node: &Node, (): (), locale: Locale) -> Result<Self> {
        let animation = node
            .object_field("animation")
            .map(|animation| -> Result<SprayAnimation> {
                Ok(SprayAnimation {
                    texture: animation.string_field("texture"),
                    frames: animation.require("frames", "animation")?,
                    duration: animation.require("duration", "animation")?,
                })
            })
            .transpose()?;

        Ok(Self {
            info: item_info(key, node, locale),
            hero_id: node.string_field("heroId"),
            image_file_name: node.string_field("image"),
            animation,
        })
    }
}

impl Entity for VoiceLine {
    const KIND: &'static str = "voiceline";
    type Options = ();

    fn project(key: &str, node: &Node, (): (), locale: Locale) -> Result<Self> {
        Ok(Self {
            info: item_info(key, node, locale),
            hero_id: node.string_field("heroId"),
            image_file_name: node.string_field("image"),
        })
    }
}

impl Entity for PortraitPack {
    const KIND: &'static str = "portraitpack";
    type Options = ();

    fn project(key: &str, node: &Node, (): (), locale: Locale) -> Result<Self> {
        Ok(Self {
            info: item_info(key, node, locale),
            reward_portrait_ids: node.string_list("rewardPortraits"),
        })
    }
}

impl Entity for RewardPortrait {
    const KIND: &'static str = "rewardportrait";
    type Options = ();

    fn project(key: &str, node: &Node, (): (), locale: Locale) -> Result<Self> {
        let sheet = node.object_field("textureSheet");
        Ok(Self {
            info: item_info(key, node, locale),
            description_unlock: tooltip_field(node, "descriptionUnlock", locale),
            hero_id: node.string_field("heroId"),
            portrait_pack_id: node.string_field("portraitPack"),
            icon_slot: node.field("iconSlot").unwrap_or_default(),
            texture_sheet_image: sheet.and_then(|s| s.string_field("image")),
            texture_sheet_columns: sheet.and_then(|s| s.field("columns")),
            texture_sheet_rows: sheet.and_then(|s| s.field("rows")),
        })
    }
}

impl Entity for MatchAward {
    const KIND: &'static str = "matchaward";
    type Options = ();

    fn project(key: &str, node: &Node, (): (), locale: Locale) -> Result<Self> {
        Ok(Self {
            info: item_info(key, node, locale),
            tag: node.string_field("tag"),
            mvp_screen_image_file_name: node.string_field("mvpScreenIcon"),
            score_screen_image_file_name: node.string_field("scoreScreenIcon"),
        })
    }
}

impl Entity for LootChest {
    const KIND: &'static str = "lootchest";
    type Options = ();

    fn project(key: &str, node: &Node, (): (), locale: Locale) -> Result<Self> {
        Ok(Self {
            info: item_info(key, node, locale),
            max_rerolls: node.field("maxRerolls").unwrap_or_default(),
            type_description_id: node.string_field("typeDescription"),
        })
    }
}

impl Entity for Bundle {
    const KIND: &'static str = "bundle";
    type Options = ();

    fn project(key: &str, node: &Node, (): (), locale: Locale) -> Result<Self> {
        // `"skins": {"Abathur": ["AbathurBone", ...], ...}`
        let hero_skin_ids: IndexMap<String, Vec<String>> = node
            .object_field("skins")
            .map(|skins| {
                skins
                    .members()
                    .map(|(hero_id, ids)| {
                        let ids: Vec<String> = ids
                            .items()
                            .filter_map(Node::as_str)
                            .map(ToString::to_string)
                            .collect();
                        (hero_id.to_string(), ids)
                    })
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            info: item_info(key, node, locale),
            franchise: Franchise::parse_opt(node.str_field("franchise")),
            is_dynamic: node.bool_field("isDynamic").unwrap_or_default(),
            image_file_name: node.string_field("image"),
            hero_ids: node.string_list("heroes"),
            hero_skin_ids,
            mount_ids: node.string_list("mounts"),
            boost_bonus_id: node.string_field("boostBonus"),
            gold_bonus: node.field("goldBonus"),
            gems_bonus: node.field("gemsBonus"),
            loot_chest_bonus_id: node.string_field("lootChestBonus"),
        })
    }
}

impl Entity for Boost {
    const KIND: &'static str = "boost";
    type Options = ();

    fn project(key: &str, node: &Node, (): (), locale: Locale) -> Result<Self> {
        Ok(Self {
            info: item_info(key, node, locale),
        })
    }
}
