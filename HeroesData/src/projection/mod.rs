//! Node → record projection
//!
//! Each record kind implements [`Entity`]: a pure function from an entry
//! key and its node to a freshly built record. Projection follows one
//! policy throughout:
//!
//! - the record id is the entry key, never a member of the node;
//! - optional scalars are extracted best-effort and left at their default
//!   when absent or of the wrong type;
//! - enumerations that do not match a known tag become `Unknown`;
//! - a sub-structure (life, shield, energy, an armor set, a weapon, a
//!   ratings block) is only read when present, and then its members are
//!   required, failing with [`Error::MissingField`](crate::Error::MissingField);
//! - lists keep source order.

mod ability;
mod cosmetic;
mod hero;
mod unit;

use std::fmt;

use crate::document::Locale;
use crate::error::Result;
use crate::formats::Node;
use crate::gamestrings::Localize;
use crate::model::TooltipDescription;

pub use hero::project_hero;
pub use unit::project_unit;

/// A record kind that can be projected out of a data document.
pub trait Entity: Localize + Sized {
    /// Kind name used in errors and data file names (`herodata_...json`).
    const KIND: &'static str;

    /// Which optional parts of the record to build.
    type Options: Copy + Default + fmt::Debug;

    /// Build a record from the entry `key` and its `node`.
    ///
    /// `locale` tags the tooltip texts read from the node.
    ///
    /// # Errors
    /// Returns [`Error::MissingField`](crate::Error::MissingField) when a
    /// present sub-structure lacks a required member.
    fn project(key: &str, node: &Node, options: Self::Options, locale: Locale) -> Result<Self>;
}

/// Which expensive parts of a [`Hero`](crate::model::Hero) to build.
///
/// The default builds everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroProjection {
    pub abilities: bool,
    pub sub_abilities: bool,
    pub talents: bool,
    pub hero_units: bool,
}

impl HeroProjection {
    /// Identity, stats and descriptive fields only.
    pub const BASIC: Self = Self {
        abilities: false,
        sub_abilities: false,
        talents: false,
        hero_units: false,
    };

    pub const FULL: Self = Self {
        abilities: true,
        sub_abilities: true,
        talents: true,
        hero_units: true,
    };

    pub(crate) fn unit_projection(self) -> UnitProjection {
        UnitProjection {
            abilities: self.abilities,
            sub_abilities: self.sub_abilities,
        }
    }
}

impl Default for HeroProjection {
    fn default() -> Self {
        Self::FULL
    }
}

/// Which expensive parts of a [`Unit`](crate::model::Unit) to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitProjection {
    pub abilities: bool,
    pub sub_abilities: bool,
}

impl Default for UnitProjection {
    fn default() -> Self {
        Self {
            abilities: true,
            sub_abilities: true,
        }
    }
}

/// Tooltip text member, tagged with the document locale.
fn tooltip_field(node: &Node, name: &str, locale: Locale) -> Option<TooltipDescription> {
    node.str_field(name)
        .map(|text| TooltipDescription::new(text, locale))
}

/// Keyed members of a node that is either an object, or an array of
/// single-member objects (`[{"A": {...}}, {"B": {...}}]`).
fn keyed_members(node: &Node) -> impl Iterator<Item = (&str, &Node)> {
    node.as_list().iter().flat_map(Node::members)
}
