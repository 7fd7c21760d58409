//! Heroes

use chrono::NaiveDate;
use serde::Serialize;

use super::ability::{Ability, AbilityTalentId, Talent};
use super::enums::{Franchise, Gender, Rarity, TalentTier};
use super::tooltip::TooltipDescription;
use super::unit::Unit;

/// Hero ratings on a 0-10 scale.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct HeroRatings {
    pub complexity: f64,
    pub damage: f64,
    pub survivability: f64,
    pub utility: f64,
}

/// A playable hero.
///
/// The hero's body is a [`Unit`]: `unit.id` is the hero's unit id, and the
/// unit carries the name, description, combat stats and abilities.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Hero {
    pub id: String,
    pub attribute_id: Option<String>,
    pub unit: Unit,
    pub difficulty: Option<String>,
    pub expanded_role: Option<String>,
    pub franchise: Franchise,
    pub gender: Gender,
    pub rarity: Rarity,
    pub release_date: Option<NaiveDate>,
    pub title: Option<String>,
    pub hero_type: Option<String>,
    pub search_text: Option<String>,
    pub roles: Vec<String>,
    pub ratings: HeroRatings,
    pub talents: Vec<Talent>,
    /// Extra controllable units (e.g. a second body), each a full hero.
    pub hero_units: Vec<Hero>,
}

impl Hero {
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.unit.name.as_deref()
    }

    #[must_use]
    pub fn hyperlink_id(&self) -> Option<&str> {
        self.unit.hyperlink_id.as_deref()
    }

    #[must_use]
    pub fn unit_id(&self) -> &str {
        &self.unit.id
    }

    #[must_use]
    pub fn description(&self) -> Option<&TooltipDescription> {
        self.unit.description.as_ref()
    }

    #[must_use]
    pub fn abilities(&self) -> &[Ability] {
        &self.unit.abilities
    }

    /// Look up a talent by its composite id.
    #[must_use]
    pub fn talent(&self, id: &AbilityTalentId) -> Option<&Talent> {
        self.talents.iter().find(|t| t.id() == id)
    }

    /// Look up a talent by its reference id alone.
    #[must_use]
    pub fn talent_by_reference_id(&self, reference_id: &str) -> Option<&Talent> {
        self.talents.iter().find(|t| t.id().reference_id == reference_id)
    }

    /// Talents of one tier, in column order.
    #[must_use]
    pub fn talents_for_tier(&self, tier: TalentTier) -> Vec<&Talent> {
        let mut talents: Vec<&Talent> = self.talents.iter().filter(|t| t.tier == tier).collect();
        talents.sort_by_key(|t| t.column);
        talents
    }

    /// A nested hero unit by its hero id.
    #[must_use]
    pub fn hero_unit(&self, id: &str) -> Option<&Hero> {
        self.hero_units.iter().find(|h| h.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AbilityTalentInfo, AbilityType};

    fn talent(reference: &str, tier: TalentTier, column: i32) -> Talent {
        Talent {
            info: AbilityTalentInfo {
                id: AbilityTalentId::new(reference, reference, AbilityType::Passive, true),
                ..AbilityTalentInfo::default()
            },
            tier,
            column,
            ..Talent::default()
        }
    }

    #[test]
    fn test_talents_for_tier_sorted_by_column() {
        let hero = Hero {
            talents: vec![
                talent("B", TalentTier::Level1, 2),
                talent("X", TalentTier::Level4, 1),
                talent("A", TalentTier::Level1, 1),
            ],
            ..Hero::default()
        };

        let names: Vec<&str> = hero
            .talents_for_tier(TalentTier::Level1)
            .iter()
            .map(|t| t.id().reference_id.as_str())
            .collect();
        assert_eq!(names, vec!["A", "B"]);
        assert!(hero.talent_by_reference_id("X").is_some());
        assert!(hero.talent_by_reference_id("Y").is_none());
    }

    #[test]
    fn test_unit_accessors() {
        let mut hero = Hero::default();
        hero.unit.id = "HeroAbathur".to_string();
        hero.unit.name = Some("Abathur".to_string());
        assert_eq!(hero.unit_id(), "HeroAbathur");
        assert_eq!(hero.name(), Some("Abathur"));
        assert_eq!(hero.hyperlink_id(), None);
    }
}
