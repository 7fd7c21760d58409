//! Which game strings apply to which record
//!
//! Each record kind reads a fixed set of `(category, field)` pairs, keyed
//! by its id. Abilities and talents are keyed by their composite id.

use super::{GameStringDocument, Localize};
use crate::model::{
    Ability, AbilityTalentInfo, Announcer, Banner, Boost, Bundle, Emoticon, EmoticonPack, Hero,
    ItemInfo, LootChest, MatchAward, Mount, PortraitPack, RewardPortrait, Skin, Spray, Talent,
    Unit, VoiceLine,
};

const ABILTALENT: &str = "abiltalent";

fn localize_ability_talent(info: &mut AbilityTalentInfo, strings: &GameStringDocument) {
    let key = info.id.to_string();
    let tooltip = &mut info.tooltip;
    strings.set_string(&mut info.name, ABILTALENT, "name", &key);
    strings.set_tooltip(&mut tooltip.short, ABILTALENT, "short", &key);
    strings.set_tooltip(&mut tooltip.full, ABILTALENT, "full", &key);
    strings.set_tooltip(&mut tooltip.cooldown, ABILTALENT, "cooldown", &key);
    strings.set_tooltip(&mut tooltip.energy, ABILTALENT, "energy", &key);
    strings.set_tooltip(&mut tooltip.life, ABILTALENT, "life", &key);
}

impl Localize for Ability {
    fn localization_id(&self) -> &str {
        &self.info.id.reference_id
    }

    fn apply_game_strings(&mut self, strings: &GameStringDocument) {
        localize_ability_talent(&mut self.info, strings);
    }
}

impl Localize for Talent {
    fn localization_id(&self) -> &str {
        &self.info.id.reference_id
    }

    fn apply_game_strings(&mut self, strings: &GameStringDocument) {
        localize_ability_talent(&mut self.info, strings);
    }
}

/// The stat type names shared by units and hero bodies.
fn localize_unit_types(unit: &mut Unit, strings: &GameStringDocument) {
    let id = unit.id.as_str();
    strings.set_string(&mut unit.damage_type, "unit", "damagetype", id);
    strings.set_string(&mut unit.energy.energy_type, "unit", "energytype", id);
    strings.set_string(&mut unit.life.life_type, "unit", "lifetype", id);
    strings.set_string(&mut unit.shield.shield_type, "unit", "shieldtype", id);
}

impl Localize for Unit {
    fn localization_id(&self) -> &str {
        &self.id
    }

    fn apply_game_strings(&mut self, strings: &GameStringDocument) {
        strings.set_string(&mut self.name, "unit", "name", &self.id);
        strings.set_tooltip(&mut self.description, "unit", "description", &self.id);
        localize_unit_types(self, strings);

        for ability in &mut self.abilities {
            ability.apply_game_strings(strings);
        }
    }
}

impl Localize for Hero {
    fn localization_id(&self) -> &str {
        &self.id
    }

    fn apply_game_strings(&mut self, strings: &GameStringDocument) {
        let id = self.id.as_str();
        strings.set_string(&mut self.unit.name, "hero", "name", id);
        strings.set_tooltip(&mut self.unit.description, "hero", "description", id);
        strings.set_string(&mut self.difficulty, "hero", "difficulty", id);
        strings.set_string(&mut self.expanded_role, "hero", "expandedrole", id);
        strings.set_string(&mut self.search_text, "hero", "searchtext", id);
        strings.set_string(&mut self.title, "hero", "title", id);
        strings.set_string(&mut self.hero_type, "hero", "type", id);
        if let Some(roles) = strings.get("hero", "role", id) {
            self.roles = roles
                .split(',')
                .map(str::trim)
                .filter(|r| !r.is_empty())
                .map(ToString::to_string)
                .collect();
        }

        localize_unit_types(&mut self.unit, strings);

        for ability in &mut self.unit.abilities {
            ability.apply_game_strings(strings);
        }
        for talent in &mut self.talents {
            talent.apply_game_strings(strings);
        }
        for hero_unit in &mut self.hero_units {
            hero_unit.apply_game_strings(strings);
        }
    }
}

/// Name, sort name, description and search text under `category`.
fn localize_info(info: &mut ItemInfo, category: &str, strings: &GameStringDocument) {
    let id = info.id.as_str();
    strings.set_string(&mut info.name, category, "name", id);
    strings.set_string(&mut info.sort_name, category, "sortname", id);
    strings.set_tooltip(&mut info.description, category, "description", id);
    strings.set_string(&mut info.search_text, category, "searchtext", id);
}

macro_rules! localize_item {
    ($($record:ty => $category:literal),+ $(,)?) => {
        $(
            impl Localize for $record {
                fn localization_id(&self) -> &str {
                    &self.info.id
                }

                fn apply_game_strings(&mut self, strings: &GameStringDocument) {
                    localize_info(&mut self.info, $category, strings);
                }
            }
        )+
    };
}

localize_item! {
    Announcer => "announcer",
    Banner => "banner",
    Boost => "boost",
    Bundle => "bundle",
    EmoticonPack => "emoticonpack",
    LootChest => "lootchest",
    MatchAward => "award",
    PortraitPack => "portraitpack",
    Spray => "spray",
    VoiceLine => "voiceline",
}

impl Localize for Emoticon {
    fn localization_id(&self) -> &str {
        &self.info.id
    }

    fn apply_game_strings(&mut self, strings: &GameStringDocument) {
        localize_info(&mut self.info, "emoticon", strings);
        let id = self.info.id.as_str();
        strings.set_string(&mut self.expression, "emoticon", "expression", id);
        if let Some(aliases) = strings.get("emoticon", "aliases", id) {
            self.localized_aliases = aliases.split_whitespace().map(ToString::to_string).collect();
        }
    }
}

impl Localize for Mount {
    fn localization_id(&self) -> &str {
        &self.info.id
    }

    fn apply_game_strings(&mut self, strings: &GameStringDocument) {
        localize_info(&mut self.info, "mount", strings);
        strings.set_tooltip(&mut self.info_text, "mount", "infotext", &self.info.id);
    }
}

impl Localize for Skin {
    fn localization_id(&self) -> &str {
        &self.info.id
    }

    fn apply_game_strings(&mut self, strings: &GameStringDocument) {
        localize_info(&mut self.info, "skin", strings);
        strings.set_tooltip(&mut self.info_text, "skin", "infotext", &self.info.id);
    }
}

impl Localize for RewardPortrait {
    fn localization_id(&self) -> &str {
        &self.info.id
    }

    fn apply_game_strings(&mut self, strings: &GameStringDocument) {
        localize_info(&mut self.info, "rewardportrait", strings);
        strings.set_tooltip(
            &mut self.description_unlock,
            "rewardportrait",
            "descriptionunlock",
            &self.info.id,
        );
    }
}
