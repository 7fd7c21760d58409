//! Lookups by owning hero

use super::DataReader;
use super::lookup::{find_all_by_field, require_key};
use crate::error::Result;
use crate::model::{Announcer, Spray, Unit, VoiceLine};
use crate::projection::Entity;

/// Record kinds whose entries name the hero they belong to (`heroId`).
pub trait HeroOwned: Entity {}

impl HeroOwned for Unit {}
impl HeroOwned for Announcer {}
impl HeroOwned for Spray {}
impl HeroOwned for VoiceLine {}

impl<E: HeroOwned> DataReader<E> {
    /// The first record belonging to `hero_id`.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`](crate::Error::InvalidArgument) for an
    /// empty id, [`Error::NotFound`](crate::Error::NotFound) on a miss.
    pub fn get_by_hero_id(&self, hero_id: &str) -> Result<E> {
        self.get_by_field("heroId", hero_id, E::Options::default())
    }

    /// # Errors
    /// [`Error::InvalidArgument`](crate::Error::InvalidArgument) for an empty id.
    pub fn try_get_by_hero_id(&self, hero_id: &str) -> Result<Option<E>> {
        self.try_get_by_field("heroId", hero_id, E::Options::default())
    }

    /// Every record belonging to `hero_id`, in source order.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`](crate::Error::InvalidArgument) for an
    /// empty id, or a projection error.
    pub fn all_by_hero_id(&self, hero_id: &str) -> Result<Vec<E>> {
        require_key("heroId", hero_id)?;
        find_all_by_field(self.document(), "heroId", hero_id)
            .map(|(key, node)| self.build(key, node, E::Options::default()))
            .collect()
    }
}
