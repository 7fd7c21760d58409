//! Unit projection

use super::ability::{project_abilities, project_sub_abilities};
use super::{Entity, UnitProjection, tooltip_field};
use crate::document::Locale;
use crate::error::{Error, Result};
use crate::formats::Node;
use crate::model::{
    Unit, UnitArmor, UnitEnergy, UnitLife, UnitShield, UnitWeapon, WeaponAttributeFactor,
};

impl Entity for Unit {
    const KIND: &'static str = "unit";
    type Options = UnitProjection;

    fn project(key: &str, node: &Node, options: UnitProjection, locale: Locale) -> Result<Self> {
        project_unit(key, node, options, locale)
    }
}

/// Build a [`Unit`] whose id is `key`.
///
/// Heroes reuse this for their body, passing the hero's unit id as `key`.
///
/// # Errors
/// Returns [`Error::MissingField`] for an
/// incomplete life, shield, energy, armor or weapon block.
pub fn project_unit(key: &str, node: &Node, options: UnitProjection, locale: Locale) -> Result<Unit> {
    let mut unit = Unit {
        id: key.to_string(),
        hyperlink_id: node.string_field("hyperlinkId"),
        name: node.string_field("name"),
        description: tooltip_field(node, "description", locale),
        hero_id: node.string_field("heroId"),
        scaling_link_id: node.string_field("scalingLinkId"),
        damage_type: node.string_field("damageType"),
        inner_radius: node.f64_field("innerRadius").unwrap_or_default(),
        radius: node.f64_field("radius").unwrap_or_default(),
        sight: node.f64_field("sightRadius").unwrap_or_default(),
        speed: node.f64_field("speed").unwrap_or_default(),
        kill_xp: node.field("killXP").unwrap_or_default(),
        attributes: node.string_list("attributes"),
        descriptors: node.string_list("descriptors"),
        unit_ids: node.string_list("units"),
        ..Unit::default()
    };

    if let Some(life) = node.object_field("life") {
        unit.life = project_life(life)?;
    }
    if let Some(shield) = node.object_field("shield") {
        unit.shield = project_shield(shield)?;
    }
    if let Some(energy) = node.object_field("energy") {
        unit.energy = project_energy(energy)?;
    }
    if let Some(armor) = node.object_field("armor") {
        unit.armor = project_armor(armor)?;
    }
    unit.weapons = node
        .list_field("weapons")
        .iter()
        .map(project_weapon)
        .collect::<Result<_>>()?;

    if options.abilities {
        unit.abilities = project_abilities(node, locale)?;
    }
    if options.sub_abilities {
        unit.abilities.extend(project_sub_abilities(node, locale)?);
    }

    Ok(unit)
}

fn project_life(life: &Node) -> Result<UnitLife> {
    Ok(UnitLife {
        life_max: life.require("amount", "life")?,
        life_scaling: life.require("scale", "life")?,
        life_type: life.string_field("type"),
        life_regeneration_rate: life.require("regenRate", "life")?,
        life_regeneration_rate_scaling: life.require("regenScale", "life")?,
    })
}

fn project_shield(shield: &Node) -> Result<UnitShield> {
    Ok(UnitShield {
        shield_max: shield.require("amount", "shield")?,
        shield_scaling: shield.require("scale", "shield")?,
        shield_type: shield.string_field("type"),
        shield_regeneration_delay: shield.require("regenDelay", "shield")?,
        shield_regeneration_rate: shield.require("regenRate", "shield")?,
        shield_regeneration_rate_scaling: shield.require("regenScale", "shield")?,
    })
}

fn project_energy(energy: &Node) -> Result<UnitEnergy> {
    Ok(UnitEnergy {
        energy_max: energy.require("amount", "energy")?,
        energy_type: energy.string_field("type"),
        energy_regeneration_rate: energy.require("regenRate", "energy")?,
    })
}

/// `"armor": {"hero": {"basic": 5, "ability": 5, "splash": 0}, ...}`
fn project_armor(armor: &Node) -> Result<Vec<UnitArmor>> {
    armor
        .members()
        .map(|(armor_type, values)| {
            Ok::<_, Error>(UnitArmor {
                armor_type: armor_type.to_string(),
                basic_armor: values.require("basic", armor_type)?,
                ability_armor: values.require("ability", armor_type)?,
                splash_armor: values.require("splash", armor_type)?,
            })
        })
        .collect()
}

fn project_weapon(weapon: &Node) -> Result<UnitWeapon> {
    let weapon_name_id: String = weapon.require("nameId", "weapons")?;
    let attribute_factors = weapon
        .object_field("damageFactor")
        .map(|factors| {
            factors
                .members()
                .map(|(attribute_type, value)| {
                    Ok::<_, Error>(WeaponAttributeFactor {
                        attribute_type: attribute_type.to_string(),
                        value: value.as_f64().ok_or_else(|| Error::MissingField {
                            field: "value",
                            parent: attribute_type.to_string(),
                        })?,
                    })
                })
                .collect::<Result<Vec<_>>>()
        })
        .transpose()?
        .unwrap_or_default();

    Ok(UnitWeapon {
        range: weapon.require("range", &weapon_name_id)?,
        period: weapon.require("period", &weapon_name_id)?,
        damage: weapon.require("damage", &weapon_name_id)?,
        damage_scaling: weapon.require("damageScale", &weapon_name_id)?,
        attribute_factors,
        weapon_name_id,
    })
}
