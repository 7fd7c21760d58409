//! Hero projection

use super::ability::project_talents;
use super::unit::project_unit;
use super::{Entity, HeroProjection, keyed_members};
use crate::document::Locale;
use crate::error::Result;
use crate::formats::Node;
use crate::model::{Franchise, Gender, Hero, HeroRatings, Rarity};

impl Entity for Hero {
    const KIND: &'static str = "hero";
    type Options = HeroProjection;

    fn project(key: &str, node: &Node, options: HeroProjection, locale: Locale) -> Result<Self> {
        project_hero(key, node, options, locale)
    }
}

/// Build a [`Hero`] whose id is `key`.
///
/// The hero's body is projected as a unit from the same node, keyed by the
/// node's `unitId` (or `key` when there is none). Nested hero units are
/// always built in full, whatever `options` says about the parent.
///
/// # Errors
/// Returns [`Error::MissingField`](crate::Error::MissingField) for an
/// incomplete stats or ratings block.
pub fn project_hero(key: &str, node: &Node, options: HeroProjection, locale: Locale) -> Result<Hero> {
    let unit_id = node.str_field("unitId").unwrap_or(key);

    let mut hero = Hero {
        id: key.to_string(),
        attribute_id: node.string_field("attributeId"),
        unit: project_unit(unit_id, node, options.unit_projection(), locale)?,
        difficulty: node.string_field("difficulty"),
        expanded_role: node.string_field("expandedRole"),
        franchise: Franchise::parse_opt(node.str_field("franchise")),
        gender: Gender::parse_opt(node.str_field("gender")),
        rarity: Rarity::parse_opt(node.str_field("rarity")),
        release_date: node.date_field("releaseDate"),
        title: node.string_field("title"),
        hero_type: node.string_field("type"),
        search_text: node.string_field("searchText"),
        roles: node.string_list("roles"),
        ..Hero::default()
    };

    if let Some(ratings) = node.object_field("ratings") {
        hero.ratings = project_ratings(ratings)?;
    }

    if options.talents {
        hero.talents = project_talents(node, locale)?;
    }

    if options.hero_units
        && let Some(hero_units) = node.get("heroUnits")
    {
        hero.hero_units = keyed_members(hero_units)
            .map(|(id, unit)| project_hero(id, unit, HeroProjection::FULL, locale))
            .collect::<Result<_>>()?;
    }

    Ok(hero)
}

fn project_ratings(ratings: &Node) -> Result<HeroRatings> {
    Ok(HeroRatings {
        complexity: ratings.require("complexity", "ratings")?,
        damage: ratings.require("damage", "ratings")?,
        survivability: ratings.require("survivability", "ratings")?,
        utility: ratings.require("utility", "ratings")?,
    })
}
