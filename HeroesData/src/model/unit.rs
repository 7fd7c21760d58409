//! Units and their combat stats

use serde::Serialize;

use super::ability::{Ability, AbilityTalentId};
use super::enums::AbilityTier;
use super::tooltip::TooltipDescription;

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct UnitLife {
    pub life_max: f64,
    /// Fraction gained per level.
    pub life_scaling: f64,
    pub life_type: Option<String>,
    pub life_regeneration_rate: f64,
    pub life_regeneration_rate_scaling: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct UnitShield {
    pub shield_max: f64,
    pub shield_scaling: f64,
    pub shield_type: Option<String>,
    pub shield_regeneration_delay: f64,
    pub shield_regeneration_rate: f64,
    pub shield_regeneration_rate_scaling: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct UnitEnergy {
    pub energy_max: f64,
    pub energy_type: Option<String>,
    pub energy_regeneration_rate: f64,
}

/// Damage reduction against one attacker type.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct UnitArmor {
    /// Attacker type, e.g. `"hero"`, `"merc"`, `"structure"`.
    pub armor_type: String,
    pub basic_armor: i32,
    pub ability_armor: i32,
    pub splash_armor: i32,
}

/// Damage multiplier against one attribute.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct WeaponAttributeFactor {
    pub attribute_type: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct UnitWeapon {
    pub weapon_name_id: String,
    pub range: f64,
    pub period: f64,
    pub damage: f64,
    pub damage_scaling: f64,
    pub attribute_factors: Vec<WeaponAttributeFactor>,
}

impl UnitWeapon {
    /// Attacks per second.
    #[must_use]
    pub fn attacks_per_second(&self) -> f64 {
        if self.period > 0.0 { 1.0 / self.period } else { 0.0 }
    }
}

/// A game unit: a hero's body, a summon, a minion or a structure.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Unit {
    pub id: String,
    pub hyperlink_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<TooltipDescription>,
    /// The hero this unit belongs to, if any.
    pub hero_id: Option<String>,
    pub scaling_link_id: Option<String>,
    pub damage_type: Option<String>,
    pub inner_radius: f64,
    pub radius: f64,
    pub sight: f64,
    pub speed: f64,
    pub kill_xp: i32,
    pub life: UnitLife,
    pub shield: UnitShield,
    pub energy: UnitEnergy,
    pub armor: Vec<UnitArmor>,
    pub weapons: Vec<UnitWeapon>,
    pub attributes: Vec<String>,
    pub descriptors: Vec<String>,
    /// Ids of the units this one spawns or controls.
    pub unit_ids: Vec<String>,
    /// Abilities and sub-abilities, in source order.
    pub abilities: Vec<Ability>,
}

impl Unit {
    /// Look up an ability by its composite id.
    #[must_use]
    pub fn ability(&self, id: &AbilityTalentId) -> Option<&Ability> {
        self.abilities.iter().find(|a| a.id() == id)
    }

    /// Abilities of one tier, excluding sub-abilities.
    pub fn abilities_by_tier(&self, tier: AbilityTier) -> impl Iterator<Item = &Ability> {
        self.abilities
            .iter()
            .filter(move |a| a.tier == tier && a.parent_link.is_none())
    }

    /// Sub-abilities opened by the given parent ability.
    pub fn sub_abilities<'a>(&'a self, parent: &'a AbilityTalentId) -> impl Iterator<Item = &'a Ability> {
        self.abilities
            .iter()
            .filter(move |a| a.parent_link.as_ref() == Some(parent))
    }

    #[must_use]
    pub fn has_abilities(&self) -> bool {
        !self.abilities.is_empty()
    }
}
