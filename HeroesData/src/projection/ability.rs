//! Ability, sub-ability and talent buckets

use super::{keyed_members, tooltip_field};
use crate::document::Locale;
use crate::error::Result;
use crate::formats::Node;
use crate::model::{
    Ability, AbilityTalentId, AbilityTalentInfo, AbilityTalentTooltip, AbilityTier, AbilityType,
    Talent, TalentTier, TooltipCharges,
};

/// Project the `abilities` buckets of a unit node.
pub(super) fn project_abilities(node: &Node, locale: Locale) -> Result<Vec<Ability>> {
    let Some(buckets) = node.object_field("abilities") else {
        return Ok(Vec::new());
    };
    let mut abilities = Vec::new();
    push_ability_tiers(&mut abilities, buckets, None, locale)?;
    Ok(abilities)
}

/// Project the `subAbilities` of a unit node.
///
/// Each member is keyed by the parent ability's composite id and holds
/// ability buckets of its own.
pub(super) fn project_sub_abilities(node: &Node, locale: Locale) -> Result<Vec<Ability>> {
    let Some(sub_abilities) = node.get("subAbilities") else {
        return Ok(Vec::new());
    };
    let mut abilities = Vec::new();
    for (parent_key, buckets) in keyed_members(sub_abilities) {
        let parent_link = AbilityTalentId::parse(parent_key);
        push_ability_tiers(&mut abilities, buckets, parent_link.as_ref(), locale)?;
    }
    Ok(abilities)
}

fn push_ability_tiers(
    out: &mut Vec<Ability>,
    buckets: &Node,
    parent_link: Option<&AbilityTalentId>,
    locale: Locale,
) -> Result<()> {
    for &tier in AbilityTier::KNOWN {
        for entry in buckets.list_field(tier.as_str()) {
            out.push(Ability {
                info: project_info(entry, locale)?,
                tier,
                parent_link: parent_link.cloned(),
            });
        }
    }
    Ok(())
}

/// Project the `talents` buckets of a hero node.
pub(super) fn project_talents(node: &Node, locale: Locale) -> Result<Vec<Talent>> {
    let Some(buckets) = node.object_field("talents") else {
        return Ok(Vec::new());
    };
    let mut talents = Vec::new();
    for &tier in TalentTier::KNOWN {
        for entry in buckets.list_field(tier.as_str()) {
            talents.push(Talent {
                info: project_info(entry, locale)?,
                tier,
                column: entry.field("sort").unwrap_or_default(),
                ability_talent_link_ids: entry.string_list("abilityTalentLinkIds"),
                prerequisite_talent_ids: entry.string_list("prerequisiteTalentIds"),
            });
        }
    }
    Ok(talents)
}

/// The fields abilities and talents share. `nameId` and `buttonId` make up
/// the identity, so they are required.
fn project_info(entry: &Node, locale: Locale) -> Result<AbilityTalentInfo> {
    let reference_id: String = entry.require("nameId", "ability")?;
    let button_id: String = entry.require("buttonId", &reference_id)?;

    let id = AbilityTalentId::new(
        reference_id,
        button_id,
        AbilityType::parse_opt(entry.str_field("abilityType")),
        entry.bool_field("isPassive").unwrap_or_default(),
    );

    Ok(AbilityTalentInfo {
        name: entry.string_field("name"),
        icon_file_name: entry.string_field("icon"),
        is_active: entry.bool_field("isActive").unwrap_or_default(),
        is_quest: entry.bool_field("isQuest").unwrap_or_default(),
        tooltip: project_tooltip(entry, locale),
        id,
    })
}

fn project_tooltip(entry: &Node, locale: Locale) -> AbilityTalentTooltip {
    let charges = entry
        .object_field("charges")
        .map(|charges| TooltipCharges {
            count_max: charges.field("countMax"),
            count_use: charges.field("countUse"),
            count_start: charges.field("countStart"),
            is_hide_count: charges.bool_field("hideCount"),
            recast_cooldown: charges.f64_field("recastCooldown"),
        })
        .unwrap_or_default();

    AbilityTalentTooltip {
        short: tooltip_field(entry, "shortTooltip", locale),
        full: tooltip_field(entry, "fullTooltip", locale),
        cooldown: tooltip_field(entry, "cooldownTooltip", locale),
        energy: tooltip_field(entry, "energyTooltip", locale),
        life: tooltip_field(entry, "lifeTooltip", locale),
        toggle_cooldown: entry.f64_field("toggleCooldown"),
        charges,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use pretty_assertions::assert_eq;

    fn parse(json: &str) -> Node {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_ability_buckets_tagged_with_tier() {
        let node = parse(
            r#"{"abilities": {
                "heroic": [{"nameId": "Ult", "buttonId": "UltButton", "abilityType": "Heroic"}],
                "basic": [
                    {"nameId": "Q1", "buttonId": "Q1", "abilityType": "Q", "cooldownTooltip": "Cooldown: 8 seconds"},
                    {"nameId": "W1", "buttonId": "W1", "abilityType": "W", "charges": {"countMax": 3, "hideCount": true}}
                ],
                "notATier": [{"nameId": "X", "buttonId": "X"}]
            }}"#,
        );
        let abilities = project_abilities(&node, Locale::EnUs).unwrap();

        let ids: Vec<(&str, AbilityTier)> = abilities
            .iter()
            .map(|a| (a.id().reference_id.as_str(), a.tier))
            .collect();
        assert_eq!(
            ids,
            vec![
                ("Q1", AbilityTier::Basic),
                ("W1", AbilityTier::Basic),
                ("Ult", AbilityTier::Heroic),
            ]
        );
        assert_eq!(abilities[0].info.tooltip.cooldown.as_ref().unwrap().raw(), "Cooldown: 8 seconds");
        assert_eq!(abilities[1].info.tooltip.charges.count_max, Some(3));
        assert_eq!(abilities[1].info.tooltip.charges.is_hide_count, Some(true));
        assert!(abilities.iter().all(|a| a.parent_link.is_none()));
    }

    #[test]
    fn test_sub_abilities_carry_parent_link() {
        let node = parse(
            r#"{"subAbilities": [
                {"Parent|ParentButton|Q|False": {"basic": [{"nameId": "Child", "buttonId": "Child", "abilityType": "Q"}]}},
                {"Lonely": {"basic": [{"nameId": "Orphan", "buttonId": "Orphan"}]}}
            ]}"#,
        );
        let abilities = project_sub_abilities(&node, Locale::EnUs).unwrap();
        assert_eq!(abilities.len(), 2);
        assert_eq!(
            abilities[0].parent_link,
            Some(AbilityTalentId::new("Parent", "ParentButton", AbilityType::Q, false))
        );
        assert_eq!(abilities[1].parent_link, None);
    }

    #[test]
    fn test_talents_keep_links_and_column() {
        let node = parse(
            r#"{"talents": {"level1": [{
                "nameId": "AbathurMasteryPressurizedGlands",
                "buttonId": "AbathurSpikeBurstPressurizedGlandsTalent",
                "abilityType": "W",
                "sort": 2,
                "isQuest": true,
                "abilityTalentLinkIds": ["AbathurSpikeBurst"]
            }]}}"#,
        );
        let talents = project_talents(&node, Locale::EnUs).unwrap();
        assert_eq!(talents.len(), 1);
        let talent = &talents[0];
        assert_eq!(talent.tier, TalentTier::Level1);
        assert_eq!(talent.column, 2);
        assert!(talent.info.is_quest);
        assert_eq!(talent.ability_talent_link_ids, vec!["AbathurSpikeBurst"]);
        assert!(talent.prerequisite_talent_ids.is_empty());
    }

    #[test]
    fn test_entry_without_identity_fails() {
        let node = parse(r#"{"abilities": {"basic": [{"name": "No id"}]}}"#);
        let err = project_abilities(&node, Locale::EnUs).unwrap_err();
        assert!(matches!(err, Error::MissingField { field: "nameId", .. }));
    }
}
