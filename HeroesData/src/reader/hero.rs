//! Hero lookups

use super::DataReader;
use crate::error::Result;
use crate::model::Hero;
use crate::projection::HeroProjection;

impl DataReader<Hero> {
    /// The hero whose body is the unit `unit_id`.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`](crate::Error::InvalidArgument) for an empty
    /// id, [`Error::NotFound`](crate::Error::NotFound) on a miss.
    pub fn get_by_unit_id(&self, unit_id: &str) -> Result<Hero> {
        self.get_by_unit_id_with(unit_id, HeroProjection::default())
    }

    /// # Errors
    /// [`Error::InvalidArgument`](crate::Error::InvalidArgument) for an empty id.
    pub fn try_get_by_unit_id(&self, unit_id: &str) -> Result<Option<Hero>> {
        self.try_get_by_unit_id_with(unit_id, HeroProjection::default())
    }

    /// # Errors
    /// [`Error::InvalidArgument`](crate::Error::InvalidArgument) for an empty
    /// id, [`Error::NotFound`](crate::Error::NotFound) on a miss.
    pub fn get_by_unit_id_with(&self, unit_id: &str, options: HeroProjection) -> Result<Hero> {
        self.get_by_field("unitId", unit_id, options)
    }

    /// # Errors
    /// [`Error::InvalidArgument`](crate::Error::InvalidArgument) for an empty id.
    pub fn try_get_by_unit_id_with(&self, unit_id: &str, options: HeroProjection) -> Result<Option<Hero>> {
        self.try_get_by_field("unitId", unit_id, options)
    }

    /// The first hero whose source `name` is `name`. Matches the data file
    /// text, not localized names.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`](crate::Error::InvalidArgument) for an empty
    /// name, [`Error::NotFound`](crate::Error::NotFound) on a miss.
    pub fn get_by_name(&self, name: &str) -> Result<Hero> {
        self.get_by_field("name", name, HeroProjection::default())
    }

    /// # Errors
    /// [`Error::InvalidArgument`](crate::Error::InvalidArgument) for an empty name.
    pub fn try_get_by_name(&self, name: &str) -> Result<Option<Hero>> {
        self.try_get_by_field("name", name, HeroProjection::default())
    }
}

#[cfg(test)]
mod tests {
    use crate::Error;
    use crate::projection::HeroProjection;
    use crate::reader::HeroDataReader;

    const HEROES: &[u8] = br#"{
        "Abathur": {
            "unitId": "HeroAbathur", "hyperlinkId": "Abathur", "name": "Abathur",
            "talents": {"level1": [{"nameId": "T1", "buttonId": "T1"}]}
        },
        "Alarak": {"unitId": "HeroAlarak", "hyperlinkId": "Alarak", "name": "Alarak"}
    }"#;

    #[test]
    fn test_get_by_unit_id() {
        let reader = HeroDataReader::parse(HEROES).unwrap();
        assert_eq!(reader.get_by_unit_id("HeroAlarak").unwrap().id, "Alarak");
        assert!(reader.try_get_by_unit_id("HeroZagara").unwrap().is_none());
        assert!(reader.get_by_unit_id("HeroZagara").unwrap_err().is_not_found());
        assert!(matches!(reader.get_by_unit_id(""), Err(Error::InvalidArgument { .. })));
    }

    #[test]
    fn test_get_by_name() {
        let reader = HeroDataReader::parse(HEROES).unwrap();
        assert_eq!(reader.get_by_name("Abathur").unwrap().unit_id(), "HeroAbathur");
        assert!(reader.try_get_by_name("abathur").unwrap().is_none());
    }

    #[test]
    fn test_partial_projection() {
        let reader = HeroDataReader::parse(HEROES).unwrap();
        assert_eq!(reader.get_by_id("Abathur").unwrap().talents.len(), 1);

        let basic = reader.get_by_id_with("Abathur", HeroProjection::BASIC).unwrap();
        assert!(basic.talents.is_empty());
        let basic = reader.get_by_unit_id_with("HeroAbathur", HeroProjection::BASIC).unwrap();
        assert!(basic.talents.is_empty());
    }
}
